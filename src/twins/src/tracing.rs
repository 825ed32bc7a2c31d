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

/// Implements [super::stub::DigitalTwins] by logging each RPC and forwarding
/// to an inner stub. Installed when tracing is enabled in the client
/// configuration.
#[derive(Clone, Debug)]
pub struct DigitalTwins {
    inner: Arc<dyn super::stub::DigitalTwins>,
}

impl DigitalTwins {
    pub fn new(inner: Arc<dyn super::stub::DigitalTwins>) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl super::stub::DigitalTwins for DigitalTwins {
    async fn get_digital_twin(
        &self,
        req: model::GetDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>> {
        tracing::debug!(twin_id = %req.twin_id, "DigitalTwins::get_digital_twin");
        self.inner.get_digital_twin(req, options).await
    }

    async fn create_or_replace_digital_twin(
        &self,
        req: model::CreateOrReplaceDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>> {
        tracing::debug!(twin_id = %req.twin_id, "DigitalTwins::create_or_replace_digital_twin");
        self.inner.create_or_replace_digital_twin(req, options).await
    }

    async fn delete_digital_twin(
        &self,
        req: model::DeleteDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!(twin_id = %req.twin_id, "DigitalTwins::delete_digital_twin");
        self.inner.delete_digital_twin(req, options).await
    }

    async fn query_twins(
        &self,
        req: model::QueryTwinsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::QueryResult>> {
        tracing::debug!("DigitalTwins::query_twins");
        self.inner.query_twins(req, options).await
    }
}
