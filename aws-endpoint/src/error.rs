/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Variant;
use aws_types::region::Region;
use thiserror::Error;

/// The partition table can't be used to resolve endpoints
///
/// This indicates the SDK was set up incorrectly. It is not retryable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("No partitions are configured, the partition table is empty")]
    NoPartitions,
}

/// No endpoint could be resolved for a region
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Strict matching was requested and no partition claims the region
    #[error("No partition claims region `{region}`")]
    UnknownRegion { region: Region },

    /// Neither the partition defaults nor the region define an endpoint for the variant
    #[error("No {variant} endpoint is defined for region `{region}` in partition `{partition}`")]
    VariantUnavailable {
        partition: String,
        region: Region,
        variant: Variant,
    },
}

/// A [`Partition`](crate::Partition) could not be built
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Partition is missing an id")]
    MissingId,
    #[error("Partition `{0}` is missing a region regex")]
    MissingRegionRegex(String),
    #[error("Partition `{0}` is missing a default endpoint")]
    MissingDefaultEndpoint(String),
    #[error("Partition `{partition}` has an invalid region regex")]
    InvalidRegionRegex {
        partition: String,
        #[source]
        source: regex::Error,
    },
}

/// A partition table could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Partition table is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Partition table contains an invalid partition")]
    InvalidPartition(#[from] BuildError),
    #[error("Endpoint variant has an unknown tag `{0}`")]
    UnknownVariantTag(String),
}
