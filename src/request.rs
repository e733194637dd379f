use http::header::{CONTENT_TYPE, DATE};
use http::Method;

use crate::constants::{CONTENT_MD5, X_AMZ_PREFIX};
use crate::time::{format_http_date, DateTime};
use crate::Result;

/// SigningRequest carries every request attribute that takes part in signing.
///
/// Absent optional fields are rendered as empty lines; `None` and
/// `Some("")` only differ for [`method`](Self::method), which is required
/// by header signing and defaults to `GET` for presigned urls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Option<Method>,
    /// URI encoded path plus optional query string.
    pub resource: String,
    /// HTTP headers with names in the case they were received.
    pub headers: Vec<(String, String)>,
    /// Value of `Content-Type`.
    pub content_type: Option<String>,
    /// Value of `Content-MD5`.
    pub content_md5: Option<String>,
    /// Request date.
    ///
    /// Header signing requires an http date, presigned urls take any value
    /// (usually the expiry epoch seconds) as is.
    pub date: Option<String>,
}

impl SigningRequest {
    /// Create a new request for `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Default::default()
        }
    }

    /// Set the http method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the content md5.
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    /// Set the date as is.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the date rendered as an http date.
    pub fn with_time(self, time: DateTime) -> Self {
        self.with_date(format_http_date(time))
    }

    /// Build a signing request from http::request::Parts.
    ///
    /// Only `x-amz-*` headers are collected, other headers never take part
    /// in signing and may carry any bytes.
    ///
    /// `bucket` is prepended to the path for virtual hosted style requests
    /// where the bucket lives in the host instead of the path.
    pub fn from_parts(parts: &http::request::Parts, bucket: Option<&str>) -> Result<Self> {
        let paq = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/");
        let resource = match bucket {
            Some(bucket) => format!("/{bucket}{paq}"),
            None => paq.to_string(),
        };

        // Only signed headers need to be valid strings.
        let mut headers = Vec::new();
        for (name, value) in parts.headers.iter() {
            if name.as_str().starts_with(X_AMZ_PREFIX) {
                headers.push((name.as_str().to_string(), value.to_str()?.to_string()));
            }
        }

        let header_value = |name: &str| -> Result<Option<String>> {
            Ok(match parts.headers.get(name) {
                Some(v) => Some(v.to_str()?.to_string()),
                None => None,
            })
        };

        Ok(SigningRequest {
            method: Some(parts.method.clone()),
            resource,
            content_type: header_value(CONTENT_TYPE.as_str())?,
            content_md5: header_value(CONTENT_MD5)?,
            date: header_value(DATE.as_str())?,
            headers,
        })
    }
}
