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

const DEFAULT_ENDPOINT: &str = "https://twins.stratuscloud.com";
const API_VERSION: &str = "2025-07-01";

/// Implements [super::stub::DigitalTwins] over HTTP.
#[derive(Debug)]
pub struct DigitalTwins {
    inner: gaxi::http::ReqwestClient,
    api_client_header: String,
}

impl DigitalTwins {
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
impl super::stub::DigitalTwins for DigitalTwins {
    async fn get_digital_twin(
        &self,
        req: model::GetDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>> {
        let path = format!("/digitaltwins/{}", required(&req.twin_id, "twin_id")?);
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_or_replace_digital_twin(
        &self,
        req: model::CreateOrReplaceDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>> {
        let path = format!("/digitaltwins/{}", required(&req.twin_id, "twin_id")?);
        let mut builder = self.builder(reqwest::Method::PUT, path);
        if req.if_none_match {
            builder = builder.header(reqwest::header::IF_NONE_MATCH, "*");
        }
        self.inner
            .execute(
                builder,
                Some(req.twin),
                set_default_idempotency(options, true),
            )
            .await
    }

    async fn delete_digital_twin(
        &self,
        req: model::DeleteDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!("/digitaltwins/{}", required(&req.twin_id, "twin_id")?);
        let mut builder = self.builder(reqwest::Method::DELETE, path);
        if let Some(etag) = &req.if_match {
            builder = builder.header(reqwest::header::IF_MATCH, etag);
        }
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn query_twins(
        &self,
        req: model::QueryTwinsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::QueryResult>> {
        let builder = self.builder(reqwest::Method::POST, "/query".to_string());
        // The query RPC uses POST for the request body, but it is a read-only
        // operation and safe to retry.
        self.inner
            .execute(
                builder,
                Some(req.specification),
                set_default_idempotency(options, true),
            )
            .await
    }
}
