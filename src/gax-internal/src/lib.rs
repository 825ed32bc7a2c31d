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

//! Implementation details for the Stratus Cloud client libraries.
//!
//! All the types in this crate are implementation details shared by the
//! client libraries. They are subject to change without notice, applications
//! should not use this crate directly.

/// The reqwest-based HTTP client shared by the client libraries.
pub mod http;

/// The client configuration consumed by the transports.
pub mod options;

/// Helpers to serialize optional query parameters.
pub mod query_parameter;

/// Helpers to validate and escape path parameters.
pub mod path_parameter;

/// Helpers to create the telemetry header.
pub mod api_header;
