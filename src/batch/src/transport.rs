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
use gax::options::internal::set_default_idempotency;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::path_parameter::required;
use gaxi::query_parameter;

const DEFAULT_ENDPOINT: &str = "https://batch.stratuscloud.com";
const API_VERSION: &str = "2025-07-01";

/// Implements [super::stub::Batch] over HTTP.
#[derive(Debug)]
pub struct Batch {
    inner: gaxi::http::ReqwestClient,
    api_client_header: String,
}

impl Batch {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, DEFAULT_ENDPOINT).await?;
        Ok(Self {
            inner,
            api_client_header: gaxi::api_header::value(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            ),
        })
    }

    fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .builder(method, path)
            .query(&[("api-version", API_VERSION)])
            .header(
                gaxi::api_header::API_CLIENT_HEADER,
                &self.api_client_header,
            )
    }
}

#[async_trait::async_trait]
impl super::stub::Batch for Batch {
    async fn list_supported_images(
        &self,
        req: model::ListSupportedImagesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListSupportedImagesResult>> {
        let builder = self.builder(reqwest::Method::GET, "/supportedimages".to_string());
        let builder = query_parameter::add(builder, "maxResults", &req.max_results);
        let builder = query_parameter::add(builder, "nextLink", &req.next_link);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_pool_node_counts(
        &self,
        req: model::ListPoolNodeCountsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolNodeCountsResult>> {
        let builder = self.builder(reqwest::Method::GET, "/nodecounts".to_string());
        let builder = query_parameter::add(builder, "maxResults", &req.max_results);
        let builder = query_parameter::add(builder, "nextLink", &req.next_link);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn add_job(
        &self,
        req: model::AddJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>> {
        let builder = self.builder(reqwest::Method::POST, "/jobs".to_string());
        self.inner
            .execute(
                builder,
                Some(req.job),
                set_default_idempotency(options, false),
            )
            .await
    }

    async fn get_job(
        &self,
        req: model::GetJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Job>> {
        let path = format!("/jobs/{}", required(&req.job_id, "job_id")?);
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListJobsResult>> {
        let builder = self.builder(reqwest::Method::GET, "/jobs".to_string());
        let builder = query_parameter::add(builder, "maxResults", &req.max_results);
        let builder = query_parameter::add(builder, "nextLink", &req.next_link);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn delete_job(
        &self,
        req: model::DeleteJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!("/jobs/{}", required(&req.job_id, "job_id")?);
        let builder = self.builder(reqwest::Method::DELETE, path);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn terminate_job(
        &self,
        req: model::TerminateJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!("/jobs/{}/terminate", required(&req.job_id, "job_id")?);
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner
            .execute(
                builder,
                req.parameters,
                set_default_idempotency(options, false),
            )
            .await
    }

    async fn add_pool(
        &self,
        req: model::AddPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        let builder = self.builder(reqwest::Method::POST, "/pools".to_string());
        self.inner
            .execute(
                builder,
                Some(req.pool),
                set_default_idempotency(options, false),
            )
            .await
    }

    async fn get_pool(
        &self,
        req: model::GetPoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        let path = format!("/pools/{}", required(&req.pool_id, "pool_id")?);
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_pools(
        &self,
        req: model::ListPoolsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoolsResult>> {
        let builder = self.builder(reqwest::Method::GET, "/pools".to_string());
        let builder = query_parameter::add(builder, "maxResults", &req.max_results);
        let builder = query_parameter::add(builder, "nextLink", &req.next_link);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn delete_pool(
        &self,
        req: model::DeletePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!("/pools/{}", required(&req.pool_id, "pool_id")?);
        let builder = self.builder(reqwest::Method::DELETE, path);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn resize_pool(
        &self,
        req: model::ResizePoolRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Pool>> {
        let path = format!("/pools/{}/resize", required(&req.pool_id, "pool_id")?);
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner
            .execute(
                builder,
                Some(req.parameters),
                set_default_idempotency(options, false),
            )
            .await
    }
}
