// Copyright 2025 Stratus Cloud Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credential types used to authenticate requests.
//!
//! The transport asks the configured [Credentials] for the authentication
//! headers of each request, and the credentials implementation refreshes any
//! underlying tokens as needed. The exchange protocols behind those tokens
//! are out of scope for the client libraries; this module only defines the
//! seam the transport uses, and two simple implementations: API keys and
//! anonymous access (for emulators and tests).

use crate::Result;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use std::sync::Arc;

/// The header carrying the API key.
const API_KEY_HEADER: &str = "x-stratus-api-key";

/// A handle to the credentials used by a client.
///
/// Credentials are shared across threads and cloned by the transports that
/// hold them, so the implementation lives behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Asynchronously constructs the authentication headers.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Implemented by all credential sources.
///
/// Applications can implement this trait to mock credentials in tests, and
/// convert the implementation into [Credentials] via `From`.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    ///
    /// The underlying implementation refreshes any tokens as needed.
    fn headers(&self) -> impl std::future::Future<Output = Result<HeaderMap>> + Send;
}

/// A dyn-compatible version of [CredentialsProvider].
pub mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible version of [CredentialsProvider][super::CredentialsProvider].
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the authentication headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Creates credentials sending an API key with each request.
///
/// # Example
/// ```
/// use stratus_gax::credentials;
/// let credentials = credentials::api_key("my-api-key");
/// ```
pub fn api_key<T: Into<String>>(key: T) -> Credentials {
    Credentials::from(ApiKeyCredentials { key: key.into() })
}

/// Creates credentials sending no authentication headers.
///
/// Useful with emulators and test servers. Production services reject
/// unauthenticated requests.
pub fn anonymous() -> Credentials {
    Credentials::from(AnonymousCredentials)
}

struct ApiKeyCredentials {
    key: String,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key is a secret, never include it in debug output.
        f.debug_struct("ApiKeyCredentials").finish_non_exhaustive()
    }
}

impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&self.key)
            .map_err(crate::error::Error::authentication)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(headers)
    }
}

#[derive(Debug)]
struct AnonymousCredentials;

impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}
