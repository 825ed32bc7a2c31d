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
//!
//! Each method on the operations objects returns one of these builders. The
//! builder collects the request parameters and the request options, and
//! `send()` forwards the call through the stub. All builders implement
//! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder], so every
//! call can be customized with timeouts, retry policies, a detail level, or
//! additional behaviors.

use crate::model;
use crate::stub::Batch;
use gax::Result;
use gax::options::RequestOptions;
use gax::paginator::Paginator;
use gax::response::Response;
use std::sync::Arc;

pub(crate) mod internal {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R> {
        pub(crate) stub: Arc<dyn Batch>,
        pub(crate) request: R,
        pub(crate) options: RequestOptions,
    }

    impl<R: std::default::Default> RequestBuilder<R> {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }
}

/// The builders for the account-level operations.
pub mod accounts {
    use super::*;

    /// The request builder for listing supported platform images.
    #[derive(Clone, Debug)]
    pub struct ListSupportedImages(internal::RequestBuilder<model::ListSupportedImagesRequest>);

    impl ListSupportedImages {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the maximum number of items per page.
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_results = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::ListSupportedImagesResult>> {
            self.0.stub.list_supported_images(self.0.request, self.0.options).await
        }

        /// Streams the pages of the response.
        pub fn paginator(self) -> Paginator<model::ListSupportedImagesResult, gax::error::Error> {
            let internal::RequestBuilder { stub, request, options } = self.0;
            Paginator::new(String::new(), move |link| {
                let stub = stub.clone();
                let mut request = request.clone();
                let options = options.clone();
                if !link.is_empty() {
                    request.next_link = Some(link);
                }
                async move {
                    stub.list_supported_images(request, options)
                        .await
                        .map(|r| r.into_body())
                }
            })
        }
    }

    impl gax::options::internal::RequestBuilder for ListSupportedImages {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for listing pool node counts.
    #[derive(Clone, Debug)]
    pub struct ListPoolNodeCounts(internal::RequestBuilder<model::ListPoolNodeCountsRequest>);

    impl ListPoolNodeCounts {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the maximum number of items per page.
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_results = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::ListPoolNodeCountsResult>> {
            self.0.stub.list_pool_node_counts(self.0.request, self.0.options).await
        }

        /// Streams the pages of the response.
        pub fn paginator(self) -> Paginator<model::ListPoolNodeCountsResult, gax::error::Error> {
            let internal::RequestBuilder { stub, request, options } = self.0;
            Paginator::new(String::new(), move |link| {
                let stub = stub.clone();
                let mut request = request.clone();
                let options = options.clone();
                if !link.is_empty() {
                    request.next_link = Some(link);
                }
                async move {
                    stub.list_pool_node_counts(request, options)
                        .await
                        .map(|r| r.into_body())
                }
            })
        }
    }

    impl gax::options::internal::RequestBuilder for ListPoolNodeCounts {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}

/// The builders for the job operations.
pub mod jobs {
    use super::*;

    /// The request builder for adding a job.
    #[derive(Clone, Debug)]
    pub struct Add(internal::RequestBuilder<model::AddJobRequest>);

    impl Add {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the job to add.
        pub fn set_job<T: Into<model::Job>>(mut self, v: T) -> Self {
            self.0.request.job = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::Job>> {
            self.0.stub.add_job(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Add {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for fetching a job.
    #[derive(Clone, Debug)]
    pub struct Get(internal::RequestBuilder<model::GetJobRequest>);

    impl Get {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the job.
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::Job>> {
            self.0.stub.get_job(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for listing jobs.
    #[derive(Clone, Debug)]
    pub struct List(internal::RequestBuilder<model::ListJobsRequest>);

    impl List {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the maximum number of items per page.
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_results = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::ListJobsResult>> {
            self.0.stub.list_jobs(self.0.request, self.0.options).await
        }

        /// Streams the pages of the response.
        pub fn paginator(self) -> Paginator<model::ListJobsResult, gax::error::Error> {
            let internal::RequestBuilder { stub, request, options } = self.0;
            Paginator::new(String::new(), move |link| {
                let stub = stub.clone();
                let mut request = request.clone();
                let options = options.clone();
                if !link.is_empty() {
                    request.next_link = Some(link);
                }
                async move { stub.list_jobs(request, options).await.map(|r| r.into_body()) }
            })
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for deleting a job.
    #[derive(Clone, Debug)]
    pub struct Delete(internal::RequestBuilder<model::DeleteJobRequest>);

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the job.
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            self.0.stub.delete_job(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for terminating a job.
    #[derive(Clone, Debug)]
    pub struct Terminate(internal::RequestBuilder<model::TerminateJobRequest>);

    impl Terminate {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the job.
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the text recorded as the reason for the termination.
        pub fn set_terminate_reason<T: Into<String>>(mut self, v: T) -> Self {
            self.0
                .request
                .parameters
                .get_or_insert_default()
                .terminate_reason = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            self.0.stub.terminate_job(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Terminate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}

/// The builders for the pool operations.
pub mod pools {
    use super::*;

    /// The request builder for adding a pool.
    #[derive(Clone, Debug)]
    pub struct Add(internal::RequestBuilder<model::AddPoolRequest>);

    impl Add {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the pool to add.
        pub fn set_pool<T: Into<model::Pool>>(mut self, v: T) -> Self {
            self.0.request.pool = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::Pool>> {
            self.0.stub.add_pool(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Add {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for fetching a pool.
    #[derive(Clone, Debug)]
    pub struct Get(internal::RequestBuilder<model::GetPoolRequest>);

    impl Get {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the pool.
        pub fn set_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::Pool>> {
            self.0.stub.get_pool(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for listing pools.
    #[derive(Clone, Debug)]
    pub struct List(internal::RequestBuilder<model::ListPoolsRequest>);

    impl List {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the maximum number of items per page.
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_results = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::ListPoolsResult>> {
            self.0.stub.list_pools(self.0.request, self.0.options).await
        }

        /// Streams the pages of the response.
        pub fn paginator(self) -> Paginator<model::ListPoolsResult, gax::error::Error> {
            let internal::RequestBuilder { stub, request, options } = self.0;
            Paginator::new(String::new(), move |link| {
                let stub = stub.clone();
                let mut request = request.clone();
                let options = options.clone();
                if !link.is_empty() {
                    request.next_link = Some(link);
                }
                async move { stub.list_pools(request, options).await.map(|r| r.into_body()) }
            })
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for deleting a pool.
    #[derive(Clone, Debug)]
    pub struct Delete(internal::RequestBuilder<model::DeletePoolRequest>);

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the pool.
        pub fn set_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.pool_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            self.0.stub.delete_pool(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for resizing a pool.
    #[derive(Clone, Debug)]
    pub struct Resize(internal::RequestBuilder<model::ResizePoolRequest>);

    impl Resize {
        pub(crate) fn new(stub: Arc<dyn Batch>) -> Self {
            Self(internal::RequestBuilder::new(stub))
        }

        /// Sets the id of the pool.
        pub fn set_pool_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.pool_id = v.into();
            self
        }

        /// Sets the desired number of dedicated nodes.
        pub fn set_target_dedicated_nodes<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.parameters.target_dedicated_nodes = Some(v.into());
            self
        }

        /// Sets the desired number of spot nodes.
        pub fn set_target_spot_nodes<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.parameters.target_spot_nodes = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<model::Pool>> {
            self.0.stub.resize_pool(self.0.request, self.0.options).await
        }
    }

    impl gax::options::internal::RequestBuilder for Resize {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
