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

//! The stub trait between the public client surface and the transport.
//!
//! The clients and the per-RPC builders forward every call through this
//! trait. Applications mock it, via [Batch::from_stub][crate::client::Batch::from_stub],
//! to test code using the client without network access.

use crate::model;
use gax::Result;
use gax::options::RequestOptions;
use gax::response::Response;

/// One method per RPC exposed by the Stratus Batch service.
#[async_trait::async_trait]
pub trait Batch: std::fmt::Debug + Send + Sync {
    async fn list_supported_images(
        &self,
        req: model::ListSupportedImagesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListSupportedImagesResult>>;

    async fn list_pool_node_counts(
        &self,
        req: model::ListPoolNodeCountsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolNodeCountsResult>>;

    async fn add_job(
        &self,
        req: model::AddJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>>;

    async fn get_job(
        &self,
        req: model::GetJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>>;

    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListJobsResult>>;

    async fn delete_job(
        &self,
        req: model::DeleteJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn terminate_job(
        &self,
        req: model::TerminateJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn add_pool(
        &self,
        req: model::AddPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>>;

    async fn get_pool(
        &self,
        req: model::GetPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>>;

    async fn list_pools(
        &self,
        req: model::ListPoolsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolsResult>>;

    async fn delete_pool(
        &self,
        req: model::DeletePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn resize_pool(
        &self,
        req: model::ResizePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>>;
}
