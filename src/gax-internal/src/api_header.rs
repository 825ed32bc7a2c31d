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

//! Helpers to create the telemetry header.
//!
//! Every request carries a header identifying the client library and its
//! version. The services use it to track adoption and to work around bugs in
//! specific releases.

/// The name of the telemetry header.
pub const API_CLIENT_HEADER: &str = "x-stratus-api-client";

/// Formats the telemetry header value for a client library.
pub fn value(artifact: &'static str, version: &'static str) -> String {
    format!(
        "sdk-rust/{} {artifact}/{version}",
        env!("CARGO_PKG_VERSION")
    )
}
