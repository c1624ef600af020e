/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS endpoint resolution
//!
//! Given a table of [`Partitions`], a region and [`ResolveOptions`], compute the URL of a
//! service endpoint together with the region, service name and method to sign requests with.
//!
//! Partition tables are immutable. They are built once, either with [`Partition::builder`] or
//! loaded with [`Partitions::from_json`], and shared by every request of a client.

pub mod error;
mod model;
mod options;
pub mod partition;
mod priority;
mod resolved;

pub use error::{BuildError, ConfigurationError, LoadError, ResolveError};
pub use options::{Builder as ResolveOptionsBuilder, ResolveOptions};
pub use partition::endpoint::{CredentialScope, Endpoint, Ternary};
pub use partition::variant::Variant;
pub use partition::{Partition, Partitions, Regionalized};
pub use priority::select_by_priority;
pub use resolved::ResolvedEndpoint;

use aws_types::region::Region;
use std::fmt::Debug;

/// Resolve an endpoint for a region
///
/// Implemented by [`Partitions`] and by a single [`Partition`]. Clients hold a resolver as
/// `Arc<dyn ResolveAwsEndpoint>` so tests can substitute their own.
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn resolve_endpoint(
        &self,
        region: &Region,
        options: &ResolveOptions,
    ) -> Result<ResolvedEndpoint, ResolveError>;
}
