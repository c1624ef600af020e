/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt::{Display, Formatter};
use std::ops::BitOr;

/// Endpoint variant, a set of FIPS and dual-stack flags
///
/// Partitions keep a separate default endpoint per variant, and region entries are keyed by
/// region and variant. The empty set is the standard endpoint.
///
/// ```rust
/// use aws_endpoint::Variant;
/// let variant = Variant::FIPS | Variant::DUAL_STACK;
/// assert!(variant.contains(Variant::FIPS));
/// assert_eq!(variant.to_string(), "fips+dualstack");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Variant(u8);

impl Variant {
    pub const DEFAULT: Variant = Variant(0);
    pub const FIPS: Variant = Variant(1);
    pub const DUAL_STACK: Variant = Variant(1 << 1);

    pub fn is_default(self) -> bool {
        self == Variant::DEFAULT
    }

    pub fn contains(self, other: Variant) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parse the tags of an endpoints model variant, eg. `["fips", "dualstack"]`
    ///
    /// Returns the first unknown tag as the error.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Variant, String> {
        tags.iter()
            .try_fold(Variant::DEFAULT, |variant, tag| match tag.as_ref() {
                "fips" => Ok(variant | Variant::FIPS),
                "dualstack" => Ok(variant | Variant::DUAL_STACK),
                other => Err(other.to_string()),
            })
    }
}

impl BitOr for Variant {
    type Output = Variant;

    fn bitor(self, rhs: Self) -> Self::Output {
        Variant(self.0 | rhs.0)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.contains(Variant::FIPS), self.contains(Variant::DUAL_STACK)) {
            (false, false) => write!(f, "default"),
            (true, false) => write!(f, "fips"),
            (false, true) => write!(f, "dualstack"),
            (true, true) => write!(f, "fips+dualstack"),
        }
    }
}
