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

//! Construct the string to sign for both signing variants.

use std::fmt::Write;

use http::Method;
use log::debug;

use crate::canonical::{canonicalize_headers, canonicalize_resource};
use crate::constants::X_AMZ_SECURITY_TOKEN;
use crate::time::parse_http_date;
use crate::{Error, Result, SigningRequest};

/// Construct the string to sign for the `Authorization` header.
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// [CanonicalizedAmzHeaders + "\n"] +
/// CanonicalizedResource;
/// ```
///
/// The date must be a valid http date and is emitted exactly as supplied.
///
/// ## Reference
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
pub fn string_to_sign(req: &SigningRequest) -> Result<String> {
    let method = req
        .method
        .as_ref()
        .ok_or_else(|| Error::request_invalid("method is required for header signing"))?;
    let date = req
        .date
        .as_deref()
        .ok_or_else(|| Error::request_invalid("date is required for header signing"))?;
    parse_http_date(date)?;

    let resource = canonicalize_resource(&req.resource)?;
    let headers = canonicalize_headers(req.headers.iter().map(|(k, v)| (k, v)));

    let mut s = String::new();
    writeln!(&mut s, "{}", method.as_str())?;
    writeln!(&mut s, "{}", req.content_md5.as_deref().unwrap_or_default())?;
    writeln!(&mut s, "{}", req.content_type.as_deref().unwrap_or_default())?;
    writeln!(&mut s, "{date}")?;
    if !headers.is_empty() {
        writeln!(&mut s, "{headers}")?;
    }
    write!(&mut s, "{resource}")?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

/// Construct the string to sign for presigned urls.
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// "\n" +
/// Content-Type + "\n" +
/// Expires + "\n" +
/// [CanonicalizedAmzHeaders + "\n"] +
/// ["x-amz-security-token:" + SecurityToken + "\n"] +
/// CanonicalizedResource;
/// ```
///
/// The method defaults to `GET`, the second line is always blank and the
/// date is emitted as supplied without any validation.
pub fn query_string_to_sign(req: &SigningRequest, security_token: Option<&str>) -> Result<String> {
    let method = req.method.as_ref().unwrap_or(&Method::GET);

    let resource = canonicalize_resource(&req.resource)?;
    let headers = canonicalize_headers(req.headers.iter().map(|(k, v)| (k, v)));

    let mut s = String::new();
    writeln!(&mut s, "{}", method.as_str())?;
    s.write_str("\n")?;
    writeln!(&mut s, "{}", req.content_type.as_deref().unwrap_or_default())?;
    writeln!(&mut s, "{}", req.date.as_deref().unwrap_or_default())?;
    if !headers.is_empty() {
        writeln!(&mut s, "{headers}")?;
    }
    if let Some(token) = security_token {
        writeln!(&mut s, "{X_AMZ_SECURITY_TOKEN}:{token}")?;
    }
    write!(&mut s, "{resource}")?;

    debug!("query string to sign: {}", &s);
    Ok(s)
}
