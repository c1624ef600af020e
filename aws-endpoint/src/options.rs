/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Variant;
use aws_types::region::Region;

/// Options that change how an endpoint is resolved
///
/// ```rust
/// use aws_endpoint::ResolveOptions;
/// let options = ResolveOptions::builder().disable_https(true).build();
/// assert!(options.disable_https());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    disable_https: bool,
    resolved_region: Option<Region>,
    log_deprecated: bool,
    use_fips: bool,
    use_dual_stack: bool,
    strict_matching: bool,
}

impl ResolveOptions {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// When true, the endpoint always uses `http` regardless of the protocols it supports
    pub fn disable_https(&self) -> bool {
        self.disable_https
    }

    /// Region to resolve in place of the one passed by the caller
    ///
    /// Used to translate region aliases such as `fips-us-east-1` to the name of the endpoint
    /// they stand for.
    pub fn resolved_region(&self) -> Option<&Region> {
        self.resolved_region.as_ref()
    }

    /// When true, resolving an endpoint marked deprecated logs a warning
    pub fn log_deprecated(&self) -> bool {
        self.log_deprecated
    }

    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    /// When true, a region that no partition claims is an error instead of resolving
    /// against the first partition
    pub fn strict_matching(&self) -> bool {
        self.strict_matching
    }

    /// Endpoint variant selected by `use_fips` and `use_dual_stack`
    pub fn variant(&self) -> Variant {
        let mut variant = Variant::DEFAULT;
        if self.use_fips {
            variant = variant | Variant::FIPS;
        }
        if self.use_dual_stack {
            variant = variant | Variant::DUAL_STACK;
        }
        variant
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    disable_https: bool,
    resolved_region: Option<Region>,
    log_deprecated: bool,
    use_fips: bool,
    use_dual_stack: bool,
    strict_matching: bool,
}

impl Builder {
    pub fn disable_https(mut self, disable_https: bool) -> Self {
        self.disable_https = disable_https;
        self
    }

    /// Empty regions are ignored
    pub fn resolved_region(mut self, region: Region) -> Self {
        self.set_resolved_region(Some(region));
        self
    }

    pub fn set_resolved_region(&mut self, region: Option<Region>) -> &mut Self {
        self.resolved_region = region.filter(|r| !r.is_empty());
        self
    }

    pub fn log_deprecated(mut self, log_deprecated: bool) -> Self {
        self.log_deprecated = log_deprecated;
        self
    }

    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    pub fn strict_matching(mut self, strict_matching: bool) -> Self {
        self.strict_matching = strict_matching;
        self
    }

    pub fn build(self) -> ResolveOptions {
        ResolveOptions {
            disable_https: self.disable_https,
            resolved_region: self.resolved_region,
            log_deprecated: self.log_deprecated,
            use_fips: self.use_fips,
            use_dual_stack: self.use_dual_stack,
            strict_matching: self.strict_matching,
        }
    }
}
