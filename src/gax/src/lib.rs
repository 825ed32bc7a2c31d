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

//! Stratus API helpers.
//!
//! This crate contains the types and functions shared by all the Stratus Cloud
//! client libraries for Rust: the per-request option types, the behavior
//! composition mechanism, the retry and backoff policies, the error types, and
//! the client builder infrastructure.
//!
//! Applications rarely depend on this crate directly. Each client library
//! re-exports the parts of this crate that appear in its public API.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Optional request-mutation policies and their composition.
pub mod behavior;

/// Client configuration and per request options.
pub mod options;

/// OData-style field selection and filtering for list and get calls.
pub mod detail_level;

/// Defines traits for retry policies and some common implementations.
pub mod retry_policy;

/// Defines traits for backoff policies.
pub mod backoff_policy;

/// Implements truncated exponential backoff with jitter.
pub mod exponential_backoff;

/// The state of a retry loop after an error.
pub mod loop_state;

/// Not part of the public API, subject to change without notice.
///
/// The retry loop shared by the transport implementations.
#[doc(hidden)]
pub mod retry_loop;

/// Provide types for client construction.
pub mod client_builder;

/// Credential types used to authenticate requests.
pub mod credentials;

/// Response types.
pub mod response;

/// Defines types and traits to consume list RPCs as a [futures::Stream].
pub mod paginator;
