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

//! Contains the Batch client and its operations objects.

use crate::builder;
use crate::stub;
use std::sync::Arc;

/// Implements a client for the Stratus Batch service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use stratus_batch::client::Batch;
/// let client = Batch::builder().build().await?;
/// let job = client.jobs().get("job-001").send().await?;
/// println!("job state: {:?}", job.body().state);
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Batch` use the `with_*` methods in the type returned by
/// [builder()][Batch::builder]. The default configuration should work for
/// most applications. Common configuration changes include
///
/// * [with_endpoint()]: applications using a test deployment of the service
///   need to override the default endpoint.
/// * [with_credentials()]: applications authenticate with an API key, see the
///   [credentials][gax::credentials] module.
/// * [with_behavior()]: attach request-mutation policies, such as
///   [ClientRequestId][gax::behavior::ClientRequestId] or a
///   [DetailLevel][gax::detail_level::DetailLevel], applied to every call
///   made through this client and its operations objects.
///
/// # Pooling and Cloning
///
/// `Batch` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Batch` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it already
/// uses an `Arc` internally. The operations objects returned by
/// [accounts()][Batch::accounts], [jobs()][Batch::jobs], and
/// [pools()][Batch::pools] share that connection, and with it the client
/// configuration and the client-level behaviors.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [with_behavior()]: gax::client_builder::ClientBuilder::with_behavior
#[derive(Clone, Debug)]
pub struct Batch {
    inner: Arc<dyn stub::Batch>,
}

impl Batch {
    /// Returns a builder for [Batch].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use stratus_batch::client::Batch;
    /// let client = Batch::builder().build().await?;
    /// # gax::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::Batch + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport = crate::transport::Batch::new(config).await?;
        let inner: Arc<dyn stub::Batch> = if tracing {
            Arc::new(crate::tracing::Batch::new(Arc::new(transport)))
        } else {
            Arc::new(transport)
        };
        Ok(Self { inner })
    }

    /// The account-level operations.
    pub fn accounts(&self) -> AccountOperations {
        AccountOperations {
            inner: self.inner.clone(),
        }
    }

    /// The operations on jobs.
    pub fn jobs(&self) -> JobOperations {
        JobOperations {
            inner: self.inner.clone(),
        }
    }

    /// The operations on pools.
    pub fn pools(&self) -> PoolOperations {
        PoolOperations {
            inner: self.inner.clone(),
        }
    }
}

/// The account-level operations of the Batch service.
///
/// Obtained via [Batch::accounts]. Shares the connection and the client-level
/// behaviors of the client that created it.
#[derive(Clone, Debug)]
pub struct AccountOperations {
    inner: Arc<dyn stub::Batch>,
}

impl AccountOperations {
    /// Lists the platform images supported by the service.
    pub fn list_supported_images(&self) -> builder::accounts::ListSupportedImages {
        builder::accounts::ListSupportedImages::new(self.inner.clone())
    }

    /// Lists the number of nodes, by state, for each pool in the account.
    pub fn list_pool_node_counts(&self) -> builder::accounts::ListPoolNodeCounts {
        builder::accounts::ListPoolNodeCounts::new(self.inner.clone())
    }
}

/// The operations on jobs of the Batch service.
///
/// Obtained via [Batch::jobs]. Shares the connection and the client-level
/// behaviors of the client that created it.
#[derive(Clone, Debug)]
pub struct JobOperations {
    inner: Arc<dyn stub::Batch>,
}

impl JobOperations {
    /// Adds a job to the account.
    ///
    /// # Example
    /// ```
    /// # use stratus_batch::client::Batch;
    /// # use stratus_batch::model::{Job, PoolInformation};
    /// async fn example(client: &Batch) -> gax::Result<()> {
    ///     let job = Job::new()
    ///         .set_id("job-001")
    ///         .set_pool_info(PoolInformation::new().set_pool_id("pool-7"));
    ///     client.jobs().add(job).send().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn add<T: Into<crate::model::Job>>(&self, job: T) -> builder::jobs::Add {
        builder::jobs::Add::new(self.inner.clone()).set_job(job)
    }

    /// Gets information about the specified job.
    pub fn get<T: Into<String>>(&self, job_id: T) -> builder::jobs::Get {
        builder::jobs::Get::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Lists all of the jobs in the account.
    ///
    /// # Example
    /// ```
    /// # use stratus_batch::client::Batch;
    /// async fn example(client: &Batch) -> gax::Result<()> {
    ///     let mut pages = client.jobs().list().paginator();
    ///     while let Some(page) = pages.next().await {
    ///         for job in page?.value {
    ///             println!("  {job:?}");
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list(&self) -> builder::jobs::List {
        builder::jobs::List::new(self.inner.clone())
    }

    /// Deletes the specified job.
    pub fn delete<T: Into<String>>(&self, job_id: T) -> builder::jobs::Delete {
        builder::jobs::Delete::new(self.inner.clone()).set_job_id(job_id)
    }

    /// Terminates the specified job, marking it as completed.
    pub fn terminate<T: Into<String>>(&self, job_id: T) -> builder::jobs::Terminate {
        builder::jobs::Terminate::new(self.inner.clone()).set_job_id(job_id)
    }
}

/// The operations on pools of the Batch service.
///
/// Obtained via [Batch::pools]. Shares the connection and the client-level
/// behaviors of the client that created it.
#[derive(Clone, Debug)]
pub struct PoolOperations {
    inner: Arc<dyn stub::Batch>,
}

impl PoolOperations {
    /// Adds a pool to the account.
    pub fn add<T: Into<crate::model::Pool>>(&self, pool: T) -> builder::pools::Add {
        builder::pools::Add::new(self.inner.clone()).set_pool(pool)
    }

    /// Gets information about the specified pool.
    pub fn get<T: Into<String>>(&self, pool_id: T) -> builder::pools::Get {
        builder::pools::Get::new(self.inner.clone()).set_pool_id(pool_id)
    }

    /// Lists all of the pools in the account.
    pub fn list(&self) -> builder::pools::List {
        builder::pools::List::new(self.inner.clone())
    }

    /// Deletes the specified pool.
    pub fn delete<T: Into<String>>(&self, pool_id: T) -> builder::pools::Delete {
        builder::pools::Delete::new(self.inner.clone()).set_pool_id(pool_id)
    }

    /// Changes the number of nodes assigned to the specified pool.
    pub fn resize<T: Into<String>>(&self, pool_id: T) -> builder::pools::Resize {
        builder::pools::Resize::new(self.inner.clone()).set_pool_id(pool_id)
    }
}

/// A builder for [Batch].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gax::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::Batch;

    pub struct Factory;

    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Batch;
        type Credentials = gax::credentials::Credentials;
        async fn build(
            self,
            config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}
