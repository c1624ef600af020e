/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Loading partition tables from the JSON endpoints model

use crate::error::LoadError;
use crate::partition::endpoint::{CredentialScope, Endpoint};
use crate::partition::variant::Variant;
use crate::partition::{Partition, Partitions, Regionalized};
use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct PartitionTable {
    partitions: Vec<PartitionModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionModel {
    id: String,
    region_regex: String,
    #[serde(default)]
    partition_endpoint: Option<String>,
    #[serde(default = "regionalized_by_default")]
    is_regionalized: bool,
    defaults: EndpointModel,
    #[serde(default)]
    endpoints: BTreeMap<String, EndpointModel>,
}

fn regionalized_by_default() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
struct EndpointModel {
    #[serde(flatten)]
    fields: EndpointFields,
    #[serde(default)]
    variants: Vec<VariantModel>,
}

/// A FIPS or dual-stack definition, eg. `{"tags": ["fips"], "hostname": "..."}`
#[derive(Debug, Deserialize)]
struct VariantModel {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(flatten)]
    fields: EndpointFields,
}

impl VariantModel {
    fn variant(&self) -> Result<Variant, LoadError> {
        Variant::from_tags(&self.tags).map_err(LoadError::UnknownVariantTag)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EndpointFields {
    hostname: Option<String>,
    #[serde(default)]
    protocols: Vec<String>,
    #[serde(default)]
    credential_scope: CredentialScopeModel,
    #[serde(default)]
    signature_versions: Vec<String>,
    unresolvable: Option<bool>,
    deprecated: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct CredentialScopeModel {
    region: Option<String>,
    service: Option<String>,
}

impl From<EndpointFields> for Endpoint {
    fn from(model: EndpointFields) -> Self {
        let mut credential_scope = CredentialScope::builder();
        if let Some(region) = model.credential_scope.region {
            credential_scope = credential_scope.region(SigningRegion::new(region));
        }
        if let Some(service) = model.credential_scope.service {
            credential_scope = credential_scope.service(SigningService::new(service));
        }
        Endpoint {
            hostname: model.hostname,
            protocols: model.protocols,
            credential_scope: credential_scope.build(),
            signature_versions: model.signature_versions,
            unresolvable: model.unresolvable.into(),
            deprecated: model.deprecated.into(),
        }
    }
}

impl TryFrom<PartitionModel> for Partition {
    type Error = LoadError;

    fn try_from(model: PartitionModel) -> Result<Self, Self::Error> {
        let regionalized = if model.is_regionalized {
            Regionalized::Regionalized
        } else {
            Regionalized::NotRegionalized
        };
        let mut builder = Partition::builder()
            .id(model.id)
            .region_regex(model.region_regex)
            .regionalized(regionalized)
            .default_endpoint(model.defaults.fields.into());
        if let Some(partition_endpoint) = model.partition_endpoint {
            builder = builder.partition_endpoint(Region::new(partition_endpoint));
        }
        for variant in model.defaults.variants {
            builder = builder.variant_default(variant.variant()?, variant.fields.into());
        }
        for (region, endpoint) in model.endpoints {
            let region = Region::new(region);
            for variant in endpoint.variants {
                builder = builder.variant_endpoint(
                    region.clone(),
                    variant.variant()?,
                    variant.fields.into(),
                );
            }
            builder = builder.endpoint(region, endpoint.fields.into());
        }
        Ok(builder.build()?)
    }
}

impl Partitions {
    /// Load a partition table from JSON
    ///
    /// Partition order is preserved; the first partition is the fallback for unknown regions.
    ///
    /// ```rust
    /// use aws_endpoint::{Partitions, ResolveOptions};
    /// use aws_types::region::Region;
    /// let partitions = Partitions::from_json(r#"{
    ///     "partitions": [{
    ///         "id": "aws",
    ///         "regionRegex": "^(us|eu|ap|sa|ca|me|af)\\-\\w+\\-\\d+$",
    ///         "defaults": {
    ///             "hostname": "sts.{region}.amazonaws.com",
    ///             "protocols": ["https"],
    ///             "signatureVersions": ["v4"]
    ///         }
    ///     }]
    /// }"#).unwrap();
    /// let endpoint = partitions
    ///     .resolve_endpoint(&Region::new("eu-west-1"), &ResolveOptions::default())
    ///     .unwrap();
    /// assert_eq!(endpoint.url(), "https://sts.eu-west-1.amazonaws.com");
    /// ```
    pub fn from_json(json: &str) -> Result<Partitions, LoadError> {
        let table: PartitionTable = serde_json::from_str(json)?;
        table
            .partitions
            .into_iter()
            .map(Partition::try_from)
            .collect()
    }
}
