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

use crate::model;
use gax::Result;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;

/// Implements [super::stub::Batch] by logging each RPC and forwarding to an
/// inner stub. Installed when tracing is enabled in the client configuration.
#[derive(Clone, Debug)]
pub struct Batch {
    inner: Arc<dyn super::stub::Batch>,
}

impl Batch {
    pub fn new(inner: Arc<dyn super::stub::Batch>) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl super::stub::Batch for Batch {
    async fn list_supported_images(
        &self,
        req: model::ListSupportedImagesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListSupportedImagesResult>> {
        tracing::debug!("Batch::list_supported_images");
        self.inner.list_supported_images(req, options).await
    }

    async fn list_pool_node_counts(
        &self,
        req: model::ListPoolNodeCountsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolNodeCountsResult>> {
        tracing::debug!("Batch::list_pool_node_counts");
        self.inner.list_pool_node_counts(req, options).await
    }

    async fn add_job(
        &self,
        req: model::AddJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>> {
        tracing::debug!(job_id = %req.job.id, "Batch::add_job");
        self.inner.add_job(req, options).await
    }

    async fn get_job(
        &self,
        req: model::GetJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>> {
        tracing::debug!(job_id = %req.job_id, "Batch::get_job");
        self.inner.get_job(req, options).await
    }

    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListJobsResult>> {
        tracing::debug!("Batch::list_jobs");
        self.inner.list_jobs(req, options).await
    }

    async fn delete_job(
        &self,
        req: model::DeleteJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!(job_id = %req.job_id, "Batch::delete_job");
        self.inner.delete_job(req, options).await
    }

    async fn terminate_job(
        &self,
        req: model::TerminateJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!(job_id = %req.job_id, "Batch::terminate_job");
        self.inner.terminate_job(req, options).await
    }

    async fn add_pool(
        &self,
        req: model::AddPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        tracing::debug!(pool_id = %req.pool.id, "Batch::add_pool");
        self.inner.add_pool(req, options).await
    }

    async fn get_pool(
        &self,
        req: model::GetPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        tracing::debug!(pool_id = %req.pool_id, "Batch::get_pool");
        self.inner.get_pool(req, options).await
    }

    async fn list_pools(
        &self,
        req: model::ListPoolsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolsResult>> {
        tracing::debug!("Batch::list_pools");
        self.inner.list_pools(req, options).await
    }

    async fn delete_pool(
        &self,
        req: model::DeletePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!(pool_id = %req.pool_id, "Batch::delete_pool");
        self.inner.delete_pool(req, options).await
    }

    async fn resize_pool(
        &self,
        req: model::ResizePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        tracing::debug!(pool_id = %req.pool_id, "Batch::resize_pool");
        self.inner.resize_pool(req, options).await
    }
}
