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

use super::status::Status;
use http::HeaderMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, or the retry policy may be exhausted.
///
/// Most applications will just return the error or log it, without any further
/// action. Applications that need to interrogate the details can use the
/// predicates to determine the error kind, and the accessors to query the most
/// common error details. The error [source][std::error::Error::source] is
/// available for deeper information.
///
/// # Example
/// ```
/// use stratus_gax::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         println!("service error {}: {}", status.code, status.message);
///     } else if e.is_timeout() {
///         println!("not enough time: {e}");
///     } else {
///         println!("some other error: {e}");
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by a Stratus service.
    ///
    /// # Example
    /// ```
    /// use stratus_gax::error::Error;
    /// use stratus_gax::error::status::Status;
    /// let status = Status::default().set_code("JobNotFound").set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        let details = ServiceDetails {
            status,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error including the HTTP metadata of the response.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a non-2xx HTTP response whose payload is not a
    /// Stratus error envelope.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Http(Box::new(details)),
            source: None,
        }
    }

    /// The service returned an error.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// # use std::error::Error as _;
    /// use stratus_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing an authentication problem.
    #[doc(hidden)]
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The client could not create the authentication headers.
    ///
    /// These errors are generated before the request is sent, the operation
    /// never started and it is safe to attempt it again.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing an I/O problem in the transport.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// It is not known if the request started or completed in the service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a missing required request parameter.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request is missing information required to format the request URL.
    ///
    /// These errors are generated before the request is sent. Retrying the
    /// same request always fails, the request itself must be fixed.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error with an unclassified root cause.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The error details, as returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(details) => Some(&details.status),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if any.
    ///
    /// Errors generated before the response is received, such as timeouts, do
    /// not have a status code.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(details) => details.status_code,
            ErrorKind::Http(details) => Some(details.status_code),
            _ => None,
        }
    }

    /// The headers of the error response, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Service(details) => details.headers.as_ref(),
            ErrorKind::Http(details) => Some(&details.headers),
            _ => None,
        }
    }

    /// The raw payload of the error response, if it could not be parsed as a
    /// [Status].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(details) => Some(&details.payload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Service(details) => {
                write!(
                    f,
                    "the service reports an error with code {}",
                    details.status.code
                )?;
                if let Some(code) = details.status_code {
                    write!(f, " (HTTP status {code})")?;
                }
                if !details.status.message.is_empty() {
                    write!(f, ": {}", details.status.message)?;
                }
                Ok(())
            }
            ErrorKind::Http(details) => write!(
                f,
                "the HTTP transport reports a [{}] error and the payload is not a recognized error envelope",
                details.status_code
            ),
            ErrorKind::Timeout => write!(f, "the request exceeded the request deadline"),
            ErrorKind::Exhausted => write!(f, "the retry policy is exhausted"),
            ErrorKind::Serialization => write!(f, "cannot serialize the request"),
            ErrorKind::Deserialization => write!(f, "cannot deserialize the response"),
            ErrorKind::Authentication => write!(f, "cannot create the authentication headers"),
            ErrorKind::Io => write!(f, "the transport reports an I/O error"),
            ErrorKind::Binding => write!(f, "cannot format the request URL"),
            ErrorKind::Other => write!(f, "the client reports an error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Service(Box<ServiceDetails>),
    Http(Box<HttpDetails>),
    Timeout,
    Exhausted,
    Serialization,
    Deserialization,
    Authentication,
    Io,
    Binding,
    Other,
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use std::error::Error as _;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code("JobNotFound")
            .set_message("The specified job does not exist.");
        let error = Error::service(status.clone());
        assert!(error.is_service(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        let display = format!("{error}");
        assert!(display.contains("JobNotFound"), "{display}");
        assert!(
            display.contains("The specified job does not exist."),
            "{display}"
        );
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default().set_code("JobNotFound");
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        let display = format!("{error}");
        assert!(display.contains("404"), "{display}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"uh-oh");
        let error = Error::http(500, HeaderMap::new(), payload.clone());
        assert_eq!(error.status(), None);
        assert_eq!(error.http_status_code(), Some(500));
        assert_eq!(error.http_payload(), Some(&payload));
        let display = format!("{error}");
        assert!(display.contains("500"), "{display}");
    }

    #[test]
    fn predicates() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_exhausted(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");

        let error = Error::exhausted("simulated");
        assert!(error.is_exhausted(), "{error:?}");

        let error = Error::ser("simulated");
        assert!(error.is_serialization(), "{error:?}");

        let error = Error::deser("simulated");
        assert!(error.is_deserialization(), "{error:?}");

        let error = Error::authentication("simulated");
        assert!(error.is_authentication(), "{error:?}");

        let error = Error::io("simulated");
        assert!(error.is_io(), "{error:?}");

        let error = Error::binding("missing job_id");
        assert!(error.is_binding(), "{error:?}");
    }

    #[test]
    fn source_chain() {
        let root = std::io::Error::other("root cause");
        let error = Error::io(root);
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "root cause");
    }
}
