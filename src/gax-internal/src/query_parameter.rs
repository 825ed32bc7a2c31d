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

//! Helpers to serialize optional query parameters.
//!
//! Most query parameters in the Stratus APIs are optional, represented as
//! `Option<T>` in the request messages. The transports always write:
//!
//! ```norust
//! let builder = add(builder, "maxResults", &req.max_results);
//! ```
//!
//! and the parameter is only included in the request when it is set.

/// Adds an optional query parameter to the request builder.
pub fn add<T>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: &Option<T>,
) -> reqwest::RequestBuilder
where
    T: std::fmt::Display,
{
    match value {
        Some(v) => builder.query(&[(name, v.to_string())]),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> reqwest::RequestBuilder {
        reqwest::Client::new().get("https://test.stratus.example.com/jobs")
    }

    #[test]
    fn add_set_value() -> anyhow::Result<()> {
        let b = add(builder(), "maxResults", &Some(42));
        let request = b.build()?;
        assert_eq!(request.url().query(), Some("maxResults=42"));
        Ok(())
    }

    #[test]
    fn add_unset_value() -> anyhow::Result<()> {
        let b = add(builder(), "maxResults", &None::<i32>);
        let request = b.build()?;
        assert_eq!(request.url().query(), None);
        Ok(())
    }

    #[test]
    fn add_escapes_values() -> anyhow::Result<()> {
        let b = add(builder(), "timeout", &Some("30 seconds"));
        let request = b.build()?;
        assert_eq!(request.url().query(), Some("timeout=30+seconds"));
        Ok(())
    }

    #[test]
    fn add_multiple() -> anyhow::Result<()> {
        let b = add(builder(), "maxResults", &Some(10));
        let b = add(b, "timeout", &None::<i32>);
        let b = add(b, "state", &Some("active"));
        let request = b.build()?;
        assert_eq!(request.url().query(), Some("maxResults=10&state=active"));
        Ok(())
    }
}
