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

//! Response types.
//!
//! This module contains types related to Stratus service responses. Notably
//! it contains the [Response] type itself.
//!
//! # Example
//! ```
//! # use stratus_gax::response::Response;
//! # #[derive(Clone, Default)]
//! # struct Resource;
//! // Creating a response for mocks:
//! fn make_mock_response(body: Resource) -> Response<Resource> {
//!     Response::from(body)
//! }
//! ```

/// Represents a Stratus service response.
///
/// A response from a Stratus service consists of a body (potentially the unit
/// type), and some metadata, currently just headers.
///
/// Typically you get a response as the result of making a request via some
/// client in the Stratus Cloud client libraries. You may also create
/// responses directly when mocking clients for your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with default metadata.
    pub fn from(body: T) -> Self {
        Self {
            parts: Parts::default(),
            body,
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// The client request id echoed by the service, if any.
    ///
    /// The service only echoes the id when the request asked for it, see
    /// [ClientRequestId::with_echo][crate::behavior::ClientRequestId::with_echo].
    pub fn client_request_id(&self) -> Option<&str> {
        self.parts
            .headers
            .get("client-request-id")
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response and returns the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Consumes the response and returns the parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Applies a function to the body, preserving the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// The metadata of a Stratus service response.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The response headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Creates default metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn set_headers<T: Into<http::HeaderMap>>(mut self, v: T) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn from_body() {
        let response = Response::from("payload");
        assert!(response.headers().is_empty());
        assert_eq!(response.body(), &"payload");
        assert_eq!(response.into_body(), "payload");
    }

    #[test]
    fn from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let response = Response::from_parts(Parts::new().set_headers(headers), 42);
        assert!(
            response.headers().get(http::header::CONTENT_TYPE).is_some(),
            "{response:?}"
        );
        let (parts, body) = response.into_parts();
        assert_eq!(body, 42);
        assert!(parts.headers.get(http::header::CONTENT_TYPE).is_some());
    }

    #[test]
    fn client_request_id() {
        let response = Response::from(());
        assert_eq!(response.client_request_id(), None);

        let mut headers = http::HeaderMap::new();
        headers.insert("client-request-id", HeaderValue::from_static("test-id"));
        let response = Response::from_parts(Parts::new().set_headers(headers), ());
        assert_eq!(response.client_request_id(), Some("test-id"));
    }

    #[test]
    fn map_preserves_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert("client-request-id", HeaderValue::from_static("test-id"));
        let response = Response::from_parts(Parts::new().set_headers(headers), 2);
        let response = response.map(|v| v * 21);
        assert_eq!(response.body(), &42);
        assert_eq!(response.client_request_id(), Some("test-id"));
    }
}
