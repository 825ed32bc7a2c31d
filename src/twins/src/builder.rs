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

//! The per-RPC request builders.

use crate::model;
use crate::stub::DigitalTwins;
use gax::Result;
use gax::options::RequestOptions;
use gax::paginator::Paginator;
use gax::response::Response;
use std::sync::Arc;

pub(crate) mod internal {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R> {
        pub(crate) stub: Arc<dyn DigitalTwins>,
        pub(crate) request: R,
        pub(crate) options: RequestOptions,
    }

    impl<R: std::default::Default> RequestBuilder<R> {
        pub(crate) fn new(stub: Arc<dyn DigitalTwins>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }
}

/// The builders for the digital twin operations.
pub mod twins {
    use super::*;

    /// The request builder for fetching a twin.
    #[derive(Clone, Debug)]
    pub struct Get(internal::RequestBuilder<model::GetDigitalTwinRequest>);

    impl Get {
        pub(crate) fn new(stub: Arc<dyn DigitalTwins>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the twin.
        pub fn set_twin_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.twin_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::DigitalTwin>> {
            self.0.stub.get_digital_twin(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for creating or replacing a twin.
    #[derive(Clone, Debug)]
    pub struct CreateOrReplace(internal::RequestBuilder<model::CreateOrReplaceDigitalTwinRequest>);

    impl CreateOrReplace {
        pub(crate) fn new(stub: Arc<dyn DigitalTwins>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the twin.
        pub fn set_twin_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.twin_id = v.into();
            self
        }

        /// Sets the twin to store.
        pub fn set_twin<T: Into<model::DigitalTwin>>(mut self, v: T) -> Self {
            self.0.request.twin = v.into();
            self
        }

        /// If `v` is `true`, fail instead of replacing an existing twin.
        pub fn set_if_none_match(mut self, v: bool) -> Self {
            self.0.request.if_none_match = v;
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::DigitalTwin>> {
            self.0
                .stub
                .create_or_replace_digital_twin(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CreateOrReplace {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for deleting a twin.
    #[derive(Clone, Debug)]
    pub struct Delete(internal::RequestBuilder<model::DeleteDigitalTwinRequest>);

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn DigitalTwins>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the twin.
        pub fn set_twin_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.twin_id = v.into();
            self
        }

        /// Only delete the twin if its ETag matches.
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            self.0
                .stub
                .delete_digital_twin(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for querying twins.
    #[derive(Clone, Debug)]
    pub struct Query(internal::RequestBuilder<model::QueryTwinsRequest>);

    impl Query {
        pub(crate) fn new(stub: Arc<dyn DigitalTwins>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the query text.
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.specification.query = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<Response<model::QueryResult>> {
            self.0.stub.query_twins(self.0.request, self.0.options).await
        }

        /// Streams the pages of the response.
        pub fn paginator(self) -> Paginator<model::QueryResult, gax::error::Error> {
            let internal::RequestBuilder { stub, request, options } = self.0;
            Paginator::new(String::new(), move |token| {
                let stub = stub.clone();
                let mut request = request.clone();
                let options = options.clone();
                if !token.is_empty() {
                    request.specification.continuation_token = Some(token);
                }
                async move {
                    stub.query_twins(request, options)
                        .await
                        .map(|r| r.into_body())
                }
            })
        }
    }

    impl gax::options::internal::RequestBuilder for Query {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
