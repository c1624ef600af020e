/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod endpoint;
pub mod variant;

use crate::error::{BuildError, ConfigurationError, ResolveError};
use crate::priority::{
    select_by_priority, DEFAULT_PROTOCOL, DEFAULT_SIGNER, PROTOCOL_PRIORITY, SIGNER_PRIORITY,
};
use crate::{ResolveAwsEndpoint, ResolveOptions, ResolvedEndpoint};
use aws_types::region::{Region, SigningRegion};
use endpoint::Endpoint;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use variant::Variant;

/// Ordered table of partitions
///
/// The first partition is the fallback for regions that no partition claims, so it is
/// conventionally the standard `aws` partition.
#[derive(Debug, Clone, Default)]
pub struct Partitions {
    partitions: Vec<Partition>,
}

impl Partitions {
    pub fn new(partitions: Vec<Partition>) -> Self {
        Partitions { partitions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Look a partition up by its id, eg. `aws-cn`
    pub fn partition(&self, id: &str) -> Option<&Partition> {
        self.partitions.iter().find(|partition| partition.id() == id)
    }

    /// Select the partition responsible for `region`
    ///
    /// The first partition that either has an explicit endpoint for `region` or whose region
    /// regex matches it is returned. Unknown regions fall back to the first partition so that
    /// newly launched regions remain reachable.
    pub fn partition_for_region(&self, region: &Region) -> Result<&Partition, ConfigurationError> {
        self.partition_for(region, Variant::DEFAULT)
    }

    fn partition_for(
        &self,
        region: &Region,
        variant: Variant,
    ) -> Result<&Partition, ConfigurationError> {
        let base = self
            .partitions
            .first()
            .ok_or(ConfigurationError::NoPartitions)?;
        Ok(self
            .partitions
            .iter()
            .find(|partition| partition.claims(region, variant))
            .unwrap_or_else(|| {
                tracing::trace!(
                    region = %region,
                    partition = %base.id(),
                    "no partition matched region, using the first partition"
                );
                base
            }))
    }

    /// Resolve the endpoint for `region` across all partitions
    ///
    /// Selection considers explicit endpoints of the variant chosen by `options`.
    pub fn resolve_endpoint(
        &self,
        region: &Region,
        options: &ResolveOptions,
    ) -> Result<ResolvedEndpoint, ResolveError> {
        let region = options.resolved_region().unwrap_or(region);
        let partition = self.partition_for(region, options.variant())?;
        partition.resolve(region, options)
    }
}

impl ResolveAwsEndpoint for Partitions {
    fn resolve_endpoint(
        &self,
        region: &Region,
        options: &ResolveOptions,
    ) -> Result<ResolvedEndpoint, ResolveError> {
        Partitions::resolve_endpoint(self, region, options)
    }
}

impl FromIterator<Partition> for Partitions {
    fn from_iter<T: IntoIterator<Item = Partition>>(iter: T) -> Self {
        Partitions::new(iter.into_iter().collect())
    }
}

/// Whether a service has one endpoint per region or a single partition-wide endpoint
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Regionalized {
    #[default]
    Regionalized,
    NotRegionalized,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EndpointKey {
    region: Region,
    variant: Variant,
}

impl EndpointKey {
    fn new(region: Region, variant: Variant) -> Self {
        EndpointKey { region, variant }
    }
}

/// A partition (`aws`, `aws-cn`, `aws-us-gov`, ...) and the endpoints of one service within it
#[derive(Debug, Clone)]
pub struct Partition {
    id: Cow<'static, str>,
    region_regex: Regex,
    partition_endpoint: Option<Region>,
    regionalized: Regionalized,
    default_endpoint: Endpoint,
    variant_defaults: HashMap<Variant, Endpoint>,
    endpoints: HashMap<EndpointKey, Endpoint>,
}

impl Partition {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn partition_endpoint(&self) -> Option<&Region> {
        self.partition_endpoint.as_ref()
    }

    pub fn regionalized(&self) -> Regionalized {
        self.regionalized
    }

    pub fn default_endpoint(&self) -> &Endpoint {
        &self.default_endpoint
    }

    /// Partition defaults for `variant`, if the partition defines any
    pub fn variant_default(&self, variant: Variant) -> Option<&Endpoint> {
        if variant.is_default() {
            Some(&self.default_endpoint)
        } else {
            self.variant_defaults.get(&variant)
        }
    }

    /// Regions (and partition endpoint names) with an explicit endpoint definition
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.endpoints
            .keys()
            .filter(|key| key.variant.is_default())
            .map(|key| &key.region)
    }

    /// True when this partition claims `region`
    pub fn can_resolve(&self, region: &Region) -> bool {
        self.claims(region, Variant::DEFAULT)
    }

    fn claims(&self, region: &Region, variant: Variant) -> bool {
        self.endpoints
            .contains_key(&EndpointKey::new(region.clone(), variant))
            || self.region_regex.is_match(region.as_ref())
    }

    /// The explicit endpoint definition for `region` and `variant`
    ///
    /// For partitions that aren't regionalized, `region` is ignored and the definition of the
    /// partition endpoint is returned instead; it counts as matched when `region` names that
    /// endpoint, whether or not a definition exists. A missing definition is returned as an
    /// empty one so that the partition defaults apply.
    pub fn endpoint_for_region(
        &self,
        region: &Region,
        variant: Variant,
    ) -> (Cow<'_, Endpoint>, bool) {
        let (lookup, names_partition_endpoint) = match self.regionalized {
            Regionalized::NotRegionalized => match &self.partition_endpoint {
                Some(global) => (Some(global), region == global),
                None => (None, false),
            },
            Regionalized::Regionalized => (Some(region), false),
        };
        let found = lookup
            .and_then(|region| self.endpoints.get(&EndpointKey::new(region.clone(), variant)));
        match found {
            Some(endpoint) => (
                Cow::Borrowed(endpoint),
                names_partition_endpoint || self.regionalized == Regionalized::Regionalized,
            ),
            None => {
                tracing::trace!(
                    region = %region,
                    partition = %self.id,
                    variant = %variant,
                    "no endpoint defined for region, using partition defaults"
                );
                (Cow::Owned(Endpoint::default()), names_partition_endpoint)
            }
        }
    }

    /// Resolve the endpoint for `region` within this partition
    ///
    /// Fails when a FIPS or dual-stack variant is requested and neither the partition
    /// defaults nor the region define it, or when strict matching is requested for a region
    /// this partition doesn't claim.
    pub fn resolve(
        &self,
        region: &Region,
        options: &ResolveOptions,
    ) -> Result<ResolvedEndpoint, ResolveError> {
        let variant = options.variant();
        if options.strict_matching() && !region.is_empty() && !self.claims(region, variant) {
            return Err(ResolveError::UnknownRegion {
                region: region.clone(),
            });
        }
        let region = match &self.partition_endpoint {
            Some(global) if region.is_empty() => global,
            _ => region,
        };
        let (specific, matched) = self.endpoint_for_region(region, variant);
        let endpoint = self
            .variant_default(variant)
            .cloned()
            .unwrap_or_default()
            .merge(&specific);
        if !variant.is_default() && endpoint == Endpoint::default() {
            return Err(ResolveError::VariantUnavailable {
                partition: self.id.to_string(),
                region: region.clone(),
                variant,
            });
        }

        let url = if endpoint.unresolvable.is_true() {
            String::new()
        } else {
            let scheme = if options.disable_https() {
                "http"
            } else {
                select_by_priority(&endpoint.protocols, PROTOCOL_PRIORITY, DEFAULT_PROTOCOL)
            };
            format!("{}://{}", scheme, endpoint.hostname_for(region.as_ref()))
        };
        if endpoint.deprecated.is_true() && options.log_deprecated() {
            tracing::warn!(
                region = %region,
                url = %url,
                "endpoint identifier is marked as deprecated"
            );
        }

        let resolved = ResolvedEndpoint {
            url,
            partition_id: self.id.to_string(),
            signing_region: endpoint
                .credential_scope
                .region()
                .cloned()
                .unwrap_or_else(|| SigningRegion::from(region.clone())),
            signing_name: endpoint.credential_scope.service().cloned(),
            signing_method: select_by_priority(
                &endpoint.signature_versions,
                SIGNER_PRIORITY,
                DEFAULT_SIGNER,
            )
            .to_string(),
        };
        tracing::debug!(
            endpoint = ?resolved,
            base_region = %region,
            variant = %variant,
            matched,
            "resolved endpoint"
        );
        Ok(resolved)
    }
}

impl ResolveAwsEndpoint for Partition {
    fn resolve_endpoint(
        &self,
        region: &Region,
        options: &ResolveOptions,
    ) -> Result<ResolvedEndpoint, ResolveError> {
        let region = options.resolved_region().unwrap_or(region);
        self.resolve(region, options)
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    id: Option<Cow<'static, str>>,
    region_regex: Option<Cow<'static, str>>,
    partition_endpoint: Option<Region>,
    regionalized: Regionalized,
    default_endpoint: Option<Endpoint>,
    variant_defaults: HashMap<Variant, Endpoint>,
    endpoints: HashMap<EndpointKey, Endpoint>,
}

impl Builder {
    pub fn id(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn region_regex(mut self, regex: impl Into<Cow<'static, str>>) -> Self {
        self.region_regex = Some(regex.into());
        self
    }

    pub fn partition_endpoint(mut self, partition_endpoint: Region) -> Self {
        self.partition_endpoint = Some(partition_endpoint).filter(|r| !r.is_empty());
        self
    }

    pub fn regionalized(mut self, regionalized: Regionalized) -> Self {
        self.regionalized = regionalized;
        self
    }

    pub fn default_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.default_endpoint = Some(endpoint);
        self
    }

    /// Partition defaults for a FIPS or dual-stack variant
    ///
    /// `Variant::DEFAULT` is the same as [`default_endpoint`](Builder::default_endpoint).
    pub fn variant_default(mut self, variant: Variant, endpoint: Endpoint) -> Self {
        if variant.is_default() {
            self.default_endpoint = Some(endpoint);
        } else {
            self.variant_defaults.insert(variant, endpoint);
        }
        self
    }

    pub fn endpoint(self, region: Region, endpoint: Endpoint) -> Self {
        self.variant_endpoint(region, Variant::DEFAULT, endpoint)
    }

    pub fn variant_endpoint(mut self, region: Region, variant: Variant, endpoint: Endpoint) -> Self {
        self.endpoints.insert(EndpointKey::new(region, variant), endpoint);
        self
    }

    pub fn build(self) -> Result<Partition, BuildError> {
        let id = self.id.ok_or(BuildError::MissingId)?;
        let region_regex = self
            .region_regex
            .ok_or_else(|| BuildError::MissingRegionRegex(id.to_string()))?;
        let region_regex =
            Regex::new(&region_regex).map_err(|source| BuildError::InvalidRegionRegex {
                partition: id.to_string(),
                source,
            })?;
        let default_endpoint = self
            .default_endpoint
            .ok_or_else(|| BuildError::MissingDefaultEndpoint(id.to_string()))?;
        Ok(Partition {
            id,
            region_regex,
            partition_endpoint: self.partition_endpoint,
            regionalized: self.regionalized,
            default_endpoint,
            variant_defaults: self.variant_defaults,
            endpoints: self.endpoints,
        })
    }
}
