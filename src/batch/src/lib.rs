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

//! Stratus Batch client library.
//!
//! The Stratus Batch service schedules containerized jobs over pools of
//! compute nodes. This crate contains the client, the per-RPC request
//! builders, and the message types for the service.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use stratus_batch::client::Batch;
//! let client = Batch::builder()
//!     .with_credentials(gax::credentials::api_key("my-api-key"))
//!     .build()
//!     .await?;
//! let pools = client.pools().list().send().await?;
//! for pool in &pools.body().value {
//!     println!("{pool:?}");
//! }
//! # gax::Result::<()>::Ok(()) });
//! ```

/// The Batch client and its operations objects.
pub mod client;

/// The per-RPC request builders.
pub mod builder;

/// The messages exchanged with the service.
pub mod model;

/// The stub trait between the client surface and the transport.
pub mod stub;

pub(crate) mod transport;

pub(crate) mod tracing;

pub use gax::Result;
