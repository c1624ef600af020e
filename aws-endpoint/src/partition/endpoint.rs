/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::SigningRegion;
use aws_types::SigningService;

/// A boolean which may also be left unset
///
/// Endpoint definitions are merged field by field. A plain `bool` can't tell "not specified,
/// inherit the general value" apart from "explicitly false", so the flags of a [`Endpoint`]
/// use this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ternary {
    #[default]
    Unset,
    True,
    False,
}

impl Ternary {
    pub fn is_set(self) -> bool {
        self != Ternary::Unset
    }

    pub fn is_true(self) -> bool {
        self == Ternary::True
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        if value {
            Ternary::True
        } else {
            Ternary::False
        }
    }
}

impl From<Option<bool>> for Ternary {
    fn from(value: Option<bool>) -> Self {
        value.map(Ternary::from).unwrap_or_default()
    }
}

/// Credential scope override for an endpoint
///
/// When set, requests to the endpoint are signed for this region and/or service instead of the
/// ones derived from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }

    fn merge(&self, specific: &CredentialScope) -> CredentialScope {
        CredentialScope {
            region: specific.region.clone().or_else(|| self.region.clone()),
            service: specific.service.clone().or_else(|| self.service.clone()),
        }
    }
}

pub mod credential_scope {
    use super::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        /// Empty regions are treated as unset
        pub fn region(mut self, region: SigningRegion) -> Self {
            self.region = Some(region).filter(|r| !r.as_ref().is_empty());
            self
        }

        /// Empty service names are treated as unset
        pub fn service(mut self, service: SigningService) -> Self {
            self.service = Some(service).filter(|s| !s.as_ref().is_empty());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Endpoint definition
///
/// Every field is optional. A partition's default definition is merged with the definition
/// for a specific region (see [`Endpoint::merge`]) to produce the endpoint that is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub hostname: Option<String>,

    /// Acceptable protocols, eg. `["https", "http"]`
    pub protocols: Vec<String>,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Acceptable signature versions, eg. `["v4"]`
    pub signature_versions: Vec<String>,

    /// When `True`, no URL is built. The caller must supply its own endpoint.
    pub unresolvable: Ternary,

    /// When `True`, resolving this endpoint logs a warning, but only if the caller opted in
    /// with [`log_deprecated`](crate::ResolveOptionsBuilder::log_deprecated).
    ///
    /// Resolution is otherwise unaffected.
    pub deprecated: Ternary,
}

impl Endpoint {
    /// Merge a more specific definition on top of this one
    ///
    /// Any field set on `specific` wins. Strings and lists count as set when non-empty, flags
    /// when not [`Ternary::Unset`]. Neither input is modified.
    pub fn merge(&self, specific: &Endpoint) -> Endpoint {
        let mut merged = self.clone();
        if let Some(hostname) = specific.hostname.as_ref().filter(|h| !h.is_empty()) {
            merged.hostname = Some(hostname.clone());
        }
        if !specific.protocols.is_empty() {
            merged.protocols = specific.protocols.clone();
        }
        if !specific.signature_versions.is_empty() {
            merged.signature_versions = specific.signature_versions.clone();
        }
        merged.credential_scope = self.credential_scope.merge(&specific.credential_scope);
        if specific.unresolvable.is_set() {
            merged.unresolvable = specific.unresolvable;
        }
        if specific.deprecated.is_set() {
            merged.deprecated = specific.deprecated;
        }
        merged
    }

    /// Hostname with the first `{region}` placeholder replaced by `region`
    pub(crate) fn hostname_for(&self, region: &str) -> String {
        self.hostname
            .as_deref()
            .unwrap_or_default()
            .replacen("{region}", region, 1)
    }
}
