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

use std::collections::HashSet;

use once_cell::sync::Lazy;

// Headers used in signing.
pub const X_AMZ_PREFIX: &str = "x-amz";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub const CONTENT_MD5: &str = "content-md5";

// Query parameters of presigned urls.
pub const AWS_ACCESS_KEY_ID_QUERY: &str = "AWSAccessKeyId";
pub const EXPIRES_QUERY: &str = "Expires";
pub const SIGNATURE_QUERY: &str = "Signature";

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Query parameters allowed in the canonicalized resource.
///
/// Please attention: the subresources are case sensitive.
///
/// - [Constructing the CanonicalizedResource Element](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html#ConstructingTheCanonicalizedResourceElement)
static SUBRESOURCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "acl",
        "delete",
        "lifecycle",
        "location",
        "logging",
        "notification",
        "partNumber",
        "policy",
        "requestPayment",
        "torrent",
        "uploadId",
        "uploads",
        "versionId",
        "versioning",
        "versions",
        "website",
    ])
});

/// Check whether `param` is a subresource that takes part in signing.
pub fn is_subresource_param(param: &str) -> bool {
    SUBRESOURCES.contains(param)
}
