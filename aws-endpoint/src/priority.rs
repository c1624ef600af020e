/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Protocols in order of preference when an endpoint lists more than one
pub(crate) const PROTOCOL_PRIORITY: &[&str] = &["https", "http"];
pub(crate) const DEFAULT_PROTOCOL: &str = "https";

/// Signature versions in order of preference. Only SigV4 is supported.
pub(crate) const SIGNER_PRIORITY: &[&str] = &["v4"];
pub(crate) const DEFAULT_SIGNER: &str = "v4";

/// Select the preferred value out of `candidates`
///
/// `priorities` is scanned in order and the first candidate equal to a priority wins. When no
/// candidate matches any priority, the first candidate is returned. `default` is only used when
/// `candidates` is empty.
///
/// ```rust
/// use aws_endpoint::select_by_priority;
/// let protocols = ["http", "https"];
/// assert_eq!(select_by_priority(&protocols, &["https", "http"], "https"), "https");
/// assert_eq!(select_by_priority::<&str>(&[], &["https"], "https"), "https");
/// ```
pub fn select_by_priority<'a, S>(candidates: &'a [S], priorities: &[&str], default: &'a str) -> &'a str
where
    S: AsRef<str>,
{
    let first = match candidates.first() {
        Some(first) => first.as_ref(),
        None => return default,
    };
    priorities
        .iter()
        .find_map(|priority| {
            candidates
                .iter()
                .map(|candidate| -> &'a str { candidate.as_ref() })
                .find(|candidate| candidate == priority)
        })
        .unwrap_or(first)
}
