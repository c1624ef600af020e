/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::SigningRegion;
use aws_types::SigningService;
use http::uri::InvalidUri;
use http::Uri;

/// A fully resolved endpoint
///
/// The URL is the base address of requests. The signing fields are the inputs of the request
/// signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub(crate) url: String,
    pub(crate) partition_id: String,
    pub(crate) signing_region: SigningRegion,
    pub(crate) signing_name: Option<SigningService>,
    pub(crate) signing_method: String,
}

impl ResolvedEndpoint {
    /// The endpoint URL, eg. `https://sts.us-west-2.amazonaws.com`
    ///
    /// Empty when the endpoint is unresolvable.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// True when the endpoint definition is marked unresolvable and the caller must supply an
    /// endpoint explicitly
    pub fn is_unresolvable(&self) -> bool {
        self.url.is_empty()
    }

    /// Parse the URL for use as the base URI of a request
    ///
    /// Returns `None` for unresolvable endpoints.
    pub fn uri(&self) -> Option<Result<Uri, InvalidUri>> {
        if self.is_unresolvable() {
            None
        } else {
            Some(self.url.parse())
        }
    }

    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    pub fn signing_region(&self) -> &SigningRegion {
        &self.signing_region
    }

    /// Service name to sign with, when the endpoint overrides it
    ///
    /// When `None`, the signer uses the service's own signing name.
    pub fn signing_name(&self) -> Option<&SigningService> {
        self.signing_name.as_ref()
    }

    pub fn signing_method(&self) -> &str {
        &self.signing_method
    }
}
