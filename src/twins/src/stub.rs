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

use crate::model;
use gax::Result;
use gax::options::RequestOptions;
use gax::response::Response;

/// One method per RPC exposed by the Stratus Digital Twins service.
#[async_trait::async_trait]
pub trait DigitalTwins: std::fmt::Debug + Send + Sync {
    async fn get_digital_twin(
        &self,
        req: model::GetDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>>;

    async fn create_or_replace_digital_twin(
        &self,
        req: model::CreateOrReplaceDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DigitalTwin>>;

    async fn delete_digital_twin(
        &self,
        req: model::DeleteDigitalTwinRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn query_twins(
        &self,
        req: model::QueryTwinsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::QueryResult>>;
}
