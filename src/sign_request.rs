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

//! AWS signature version 2 request signer.

use http::header::{AUTHORIZATION, DATE};
use http::HeaderValue;
use log::debug;

use crate::constants::*;
use crate::hash::sign;
use crate::string_to_sign::{query_string_to_sign, string_to_sign};
use crate::time::{format_http_date, now, DateTime};
use crate::utils::Redact;
use crate::{Credential, Error, Result, SigningRequest};

/// Format the `Authorization` header value: `AWS <access_key_id>:<signature>`.
pub fn authorization(access_key_id: &str, signature: &str) -> String {
    format!("AWS {access_key_id}:{signature}")
}

/// RequestSigner that implements AWS signature version 2.
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    bucket: Option<String>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix resources built from http requests with `bucket`.
    ///
    /// Set this for virtual hosted style requests.
    pub fn with_bucket(mut self, bucket: &str) -> Self {
        self.bucket = Some(bucket.to_string());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request and return the `Authorization` header value.
    pub fn sign(&self, req: &SigningRequest, cred: &Credential) -> Result<String> {
        let string_to_sign = string_to_sign(req)?;
        let signature = sign(&cred.secret_access_key, &string_to_sign);

        Ok(authorization(&cred.access_key_id, &signature))
    }

    /// Sign the request for a presigned url and return the bare signature.
    ///
    /// The session token of `cred` is signed in if present. The signature
    /// is not url encoded.
    pub fn sign_query(&self, req: &SigningRequest, cred: &Credential) -> Result<String> {
        let string_to_sign = query_string_to_sign(req, cred.session_token.as_deref())?;

        Ok(sign(&cred.secret_access_key, &string_to_sign))
    }

    /// Build the query pairs of a presigned url that expires at `expires`.
    ///
    /// The date of `req` is replaced by the expiry epoch seconds. Returned
    /// values are not url encoded.
    pub fn presign(
        &self,
        req: &SigningRequest,
        cred: &Credential,
        expires: DateTime,
    ) -> Result<Vec<(String, String)>> {
        if cred.access_key_id.is_empty() {
            return Err(Error::credential_invalid(
                "access_key_id is required for presigning",
            ));
        }

        let expires = expires.timestamp().to_string();
        let req = req.clone().with_date(&expires);
        let signature = self.sign_query(&req, cred)?;

        let mut query = vec![
            (AWS_ACCESS_KEY_ID_QUERY.to_string(), cred.access_key_id.clone()),
            (EXPIRES_QUERY.to_string(), expires),
            (SIGNATURE_QUERY.to_string(), signature),
        ];
        if let Some(token) = &cred.session_token {
            query.push((X_AMZ_SECURITY_TOKEN.to_string(), token.clone()));
        }

        Ok(query)
    }

    /// Sign http request parts in place.
    ///
    /// A `Date` header is inserted when the request doesn't carry one, then
    /// the `Authorization` header is set.
    pub fn sign_parts(&self, parts: &mut http::request::Parts, cred: &Credential) -> Result<()> {
        if !parts.headers.contains_key(DATE) {
            let now = self.time.unwrap_or_else(now);
            parts.headers.insert(DATE, format_http_date(now).parse()?);
        }

        let req = SigningRequest::from_parts(parts, self.bucket.as_deref())?;
        let value = self.sign(&req, cred)?;
        debug!(
            "signed request with access key {:?}",
            Redact::from(&cred.access_key_id)
        );

        parts.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = value.parse()?;
            value.set_sensitive(true);

            value
        });
        Ok(())
    }
}
