// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use anyhow::Result;
use pretty_assertions::assert_eq;
use reqsign_aws_v2::{canonicalize_headers, canonicalize_resource, is_subresource_param};

#[test]
fn test_headers_are_permutation_invariant() {
    let headers = vec![
        ("X-Amz-Meta-B", "2"),
        ("Content-Type", "text/plain"),
        ("x-amz-acl", "private"),
        ("X-AMZ-META-A", "1"),
        ("x-amz-meta-a", "0"),
    ];
    let expected = canonicalize_headers(headers.clone());

    // Rotate through every starting offset and both directions.
    for i in 0..headers.len() {
        let mut rotated = headers.clone();
        rotated.rotate_left(i);
        assert_eq!(canonicalize_headers(rotated.clone()), expected);

        rotated.reverse();
        assert_eq!(canonicalize_headers(rotated), expected);
    }
}

#[test]
fn test_headers_only_keep_amz_prefix() {
    let headers = [
        ("Date", "Tue, 27 Mar 2007 19:36:42 +0000"),
        ("Content-MD5", "abc"),
        ("x-amz-date", "Tue, 27 Mar 2007 19:36:42 +0000"),
        ("X-Amzn-Trace-Id", "Root=1"),
        ("amz-x", "nope"),
    ];

    let canonical = canonicalize_headers(headers);
    for line in canonical.lines() {
        assert!(line.starts_with("x-amz"), "unexpected line: {line}");
    }
    assert_eq!(
        canonical,
        "x-amz-date:Tue, 27 Mar 2007 19:36:42 +0000\nx-amzn-trace-id:Root=1"
    );
}

#[test]
fn test_resource_only_keeps_subresources() -> Result<()> {
    let canonical = canonicalize_resource(
        "/bucket/key?versionId=3&response-content-type=text/plain&uploads&acl&max-keys=10",
    )?;
    assert_eq!(canonical, "/bucket/key?acl&uploads&versionId=3");

    let (_, query) = canonical.split_once('?').unwrap();
    let entries: Vec<&str> = query.split('&').collect();
    let mut sorted = entries.clone();
    sorted.sort();
    assert_eq!(entries, sorted);
    for entry in entries {
        let key = entry.split('=').next().unwrap();
        assert!(is_subresource_param(key));
    }
    Ok(())
}

#[test]
fn test_resource_with_mixed_params() -> Result<()> {
    assert_eq!(
        canonicalize_resource("/bucket?acl&foo=bar&uploads=123")?,
        "/bucket?acl&uploads=123"
    );
    Ok(())
}
