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

//! Canonicalization of headers and resources.

use std::str::FromStr;

use http::uri::PathAndQuery;

use crate::constants::{is_subresource_param, X_AMZ_PREFIX};
use crate::Result;

/// Build the canonicalized amz headers.
///
/// - ignore non-amazon headers
/// - lowercase field names
/// - sort lexicographically by the whole `name:value` line
/// - join with newline
///
/// Values are kept as is. Fields that collide after lowercasing are not
/// merged, every line survives into the output.
///
/// ## Reference
///
/// - [Constructing the CanonicalizedAmzHeaders Element](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html#RESTAuthenticationConstructingCanonicalizedAmzHeaders)
pub fn canonicalize_headers<I, K, V>(headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut lines: Vec<String> = headers
        .into_iter()
        .filter_map(|(k, v)| {
            let name = k.as_ref().to_lowercase();
            name.starts_with(X_AMZ_PREFIX)
                .then(|| format!("{name}:{}", v.as_ref()))
        })
        .collect();
    lines.sort();

    lines.join("\n")
}

/// Build the canonicalized resource out of a uri encoded `path?query`.
///
/// Only subresource parameters are kept, rendered as `key` when the value
/// is empty and `key=value` otherwise, then sorted as whole strings.
/// Repeated keys are not merged, each occurrence is its own entry.
///
/// ## Reference
///
/// - [Constructing the CanonicalizedResource Element](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html#ConstructingTheCanonicalizedResourceElement)
pub fn canonicalize_resource(resource: &str) -> Result<String> {
    let paq = PathAndQuery::from_str(resource)?;

    let mut params: Vec<String> = paq
        .query()
        .map(|query| {
            form_urlencoded::parse(query.as_bytes())
                .filter(|(k, _)| is_subresource_param(k))
                .map(|(k, v)| {
                    if v.is_empty() {
                        k.into_owned()
                    } else {
                        format!("{k}={v}")
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    if params.is_empty() {
        return Ok(paq.path().to_string());
    }

    params.sort();
    Ok(format!("{}?{}", paq.path(), params.join("&")))
}
