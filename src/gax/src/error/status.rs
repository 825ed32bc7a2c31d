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

//! The error payload returned by Stratus services.
//!
//! All Stratus services report request failures with the same JSON envelope:
//!
//! ```json
//! {"error": {"code": "JobNotFound", "message": "The specified job does not exist.", "target": "job-001"}}
//! ```
//!
//! The [Status] type represents the `error` member of that envelope.

/// Describes an error returned by a Stratus service.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// A service-defined error code, such as `JobNotFound`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,

    /// A human readable description of the error.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// The name of the request element the error applies to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Additional key/value pairs describing the error.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl Status {
    /// Sets the value of [code][Status::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [target][Status::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [details][Status::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorDetail>,
    {
        self.details = v.into_iter().map(|d| d.into()).collect();
        self
    }
}

/// A name/value pair with additional information about an error.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    /// The name of the detail.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// The value of the detail.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl ErrorDetail {
    /// Sets the value of [key][ErrorDetail::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = v.into();
        self
    }

    /// Sets the value of [value][ErrorDetail::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }
}

#[derive(serde::Deserialize)]
struct Envelope {
    error: Status,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = serde_json::Error;

    /// Parses a `{"error": {...}}` response body into a [Status].
    fn try_from(value: &bytes::Bytes) -> std::result::Result<Self, Self::Error> {
        serde_json::from_slice::<Envelope>(value).map(|e| e.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn deserialize_envelope() -> Result {
        let body = bytes::Bytes::from_static(
            br#"{"error": {
                "code": "PoolBeingDeleted",
                "message": "The specified pool is being deleted.",
                "target": "pool-7",
                "details": [{"key": "retryAfter", "value": "30"}]
            }}"#,
        );
        let got = Status::try_from(&body)?;
        let want = Status::default()
            .set_code("PoolBeingDeleted")
            .set_message("The specified pool is being deleted.")
            .set_target("pool-7")
            .set_details([ErrorDetail::default().set_key("retryAfter").set_value("30")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_ignores_unknown_fields() -> Result {
        let body = bytes::Bytes::from_static(
            br#"{"error": {"code": "InternalError", "message": "boom", "odata.metadata": "unused"}}"#,
        );
        let got = Status::try_from(&body)?;
        assert_eq!(got.code, "InternalError");
        assert_eq!(got.message, "boom");
        assert_eq!(got.target, None);
        Ok(())
    }

    #[test]
    fn deserialize_rejects_plain_text() {
        let body = bytes::Bytes::from_static(b"service unavailable");
        let got = Status::try_from(&body);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn serialize_skips_empty_fields() -> Result {
        let status = Status::default().set_code("JobExists");
        let got = serde_json::to_value(&status)?;
        assert_eq!(got, serde_json::json!({"code": "JobExists"}));
        Ok(())
    }
}
