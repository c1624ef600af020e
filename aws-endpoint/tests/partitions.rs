/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{Partitions, ResolveAwsEndpoint, ResolveOptions, ResolvedEndpoint};
use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use std::sync::Arc;

fn iam() -> Partitions {
    Partitions::from_json(include_str!("../test-data/iam-partitions.json")).expect("valid table")
}

fn s3() -> Partitions {
    Partitions::from_json(include_str!("../test-data/s3-partitions.json")).expect("valid table")
}

fn resolve(partitions: &Partitions, region: &'static str) -> ResolvedEndpoint {
    partitions
        .resolve_endpoint(&Region::from_static(region), &ResolveOptions::default())
        .expect("partition table is not empty")
}

#[test]
fn partition_order_is_preserved() {
    let ids: Vec<_> = iam().iter().map(|p| p.id().to_string()).collect();
    assert_eq!(ids, vec!["aws", "aws-cn", "aws-us-gov"]);
}

#[test]
fn global_service_per_partition() {
    let partitions = iam();
    let cases = [
        ("us-west-2", "https://iam.amazonaws.com", "aws", "us-east-1"),
        ("aws-global", "https://iam.amazonaws.com", "aws", "us-east-1"),
        ("", "https://iam.amazonaws.com", "aws", "us-east-1"),
        ("cn-northwest-1", "https://iam.cn-north-1.amazonaws.com.cn", "aws-cn", "cn-north-1"),
        ("us-gov-east-1", "https://iam.us-gov.amazonaws.com", "aws-us-gov", "us-gov-west-1"),
    ];
    for (region, url, partition, signing_region) in cases {
        let endpoint = resolve(&partitions, region);
        assert_eq!(endpoint.url(), url, "region `{}`", region);
        assert_eq!(endpoint.partition_id(), partition, "region `{}`", region);
        assert_eq!(
            endpoint.signing_region(),
            &SigningRegion::new(signing_region),
            "region `{}`",
            region
        );
        assert_eq!(endpoint.signing_name(), None);
        assert_eq!(endpoint.signing_method(), "v4");
    }
}

#[test]
fn empty_region_matches_explicit_partition_endpoint() {
    let partitions = iam();
    assert_eq!(resolve(&partitions, ""), resolve(&partitions, "aws-global"));
}

#[test]
fn regionalized_service() {
    let partitions = s3();

    let endpoint = resolve(&partitions, "us-west-2");
    assert_eq!(endpoint.url(), "https://s3.api.us-west-2.amazonaws.com");
    assert_eq!(endpoint.signing_name(), Some(&SigningService::from_static("s3")));
    assert_eq!(endpoint.signing_method(), "s3v4");

    let endpoint = resolve(&partitions, "eu-central-1");
    assert_eq!(endpoint.url(), "https://s3.eu-central-1.amazonaws.com");
    assert_eq!(endpoint.signing_region(), &SigningRegion::from_static("eu-central-1"));

    let endpoint = resolve(&partitions, "s3-external-1");
    assert_eq!(endpoint.url(), "https://s3-external-1.amazonaws.com");
    assert_eq!(endpoint.signing_region(), &SigningRegion::from_static("us-east-1"));

    let endpoint = resolve(&partitions, "cn-north-1");
    assert_eq!(endpoint.url(), "https://s3.cn-north-1.amazonaws.com.cn");
    assert_eq!(endpoint.partition_id(), "aws-cn");
}

#[test]
fn unknown_region_falls_back_to_first_partition() {
    let endpoint = resolve(&s3(), "mars-west-1");
    assert_eq!(endpoint.partition_id(), "aws");
    assert_eq!(endpoint.url(), "https://s3.mars-west-1.amazonaws.com");
    assert_eq!(endpoint.signing_region(), &SigningRegion::from_static("mars-west-1"));
}

#[test]
fn disable_https() {
    let options = ResolveOptions::builder().disable_https(true).build();
    let endpoint = s3()
        .resolve_endpoint(&Region::from_static("us-east-2"), &options)
        .expect("partition table is not empty");
    assert_eq!(endpoint.url(), "http://s3.us-east-2.amazonaws.com");
    assert_eq!(endpoint.signing_region(), &SigningRegion::from_static("us-east-2"));
}

#[test]
fn unresolvable_endpoint_is_not_an_error() {
    let endpoint = resolve(&s3(), "us-iso-manual-1");
    assert!(endpoint.is_unresolvable());
    assert_eq!(endpoint.url(), "");
    assert!(endpoint.uri().is_none());
    assert_eq!(endpoint.partition_id(), "aws");
}

#[test]
fn shared_across_threads() {
    let resolver: Arc<dyn ResolveAwsEndpoint> = Arc::new(s3());
    let handles: Vec<_> = ["us-east-1", "cn-north-1", "ap-south-1"]
        .into_iter()
        .map(|region| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                resolver
                    .resolve_endpoint(&Region::from_static(region), &ResolveOptions::default())
                    .expect("partition table is not empty")
            })
        })
        .collect();
    for handle in handles {
        let endpoint = handle.join().expect("thread completes");
        let uri = endpoint.uri().expect("resolvable").expect("valid uri");
        assert_eq!(uri.scheme_str(), Some("https"));
    }
}

#[test]
fn resolved_region_alias() {
    let options = ResolveOptions::builder()
        .resolved_region(Region::from_static("iam-fips"))
        .build();
    let endpoint = iam()
        .resolve_endpoint(&Region::from_static("fips-aws-global"), &options)
        .expect("partition table is not empty");
    // not regionalized: the partition endpoint wins even for an explicit alias
    assert_eq!(endpoint.url(), "https://iam.amazonaws.com");
}
