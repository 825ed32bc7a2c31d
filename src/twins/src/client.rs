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

//! Contains the Digital Twins client.

use crate::builder;
use crate::stub;
use std::sync::Arc;

/// Implements a client for the Stratus Digital Twins service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use stratus_twins::client::DigitalTwins;
/// let client = DigitalTwins::builder().build().await?;
/// let twin = client.get_digital_twin("thermostat-17").send().await?;
/// println!("twin: {:?}", twin.body());
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `DigitalTwins` use the `with_*` methods in the type returned
/// by [builder()][DigitalTwins::builder]. The client accepts the same
/// configuration as the other Stratus clients: an endpoint override,
/// credentials, retry and backoff policies, and client-level
/// [behaviors][gax::behavior].
///
/// # Pooling and Cloning
///
/// `DigitalTwins` holds a connection pool internally, it is advised to create
/// one and then reuse it. You do not need to wrap it in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it already
/// uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DigitalTwins {
    inner: Arc<dyn stub::DigitalTwins>,
}

impl DigitalTwins {
    /// Returns a builder for [DigitalTwins].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use stratus_twins::client::DigitalTwins;
    /// let client = DigitalTwins::builder().build().await?;
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
        T: stub::DigitalTwins + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport = crate::transport::DigitalTwins::new(config).await?;
        let inner: Arc<dyn stub::DigitalTwins> = if tracing {
            Arc::new(crate::tracing::DigitalTwins::new(Arc::new(transport)))
        } else {
            Arc::new(transport)
        };
        Ok(Self { inner })
    }

    /// Gets a digital twin by id.
    pub fn get_digital_twin<T: Into<String>>(&self, twin_id: T) -> builder::twins::Get {
        builder::twins::Get::new(self.inner.clone()).set_twin_id(twin_id)
    }

    /// Creates a twin, or replaces an existing one.
    ///
    /// # Example
    /// ```
    /// # use stratus_twins::client::DigitalTwins;
    /// # use stratus_twins::model::{DigitalTwin, DigitalTwinMetadata};
    /// async fn example(client: &DigitalTwins) -> gax::Result<()> {
    ///     let twin = DigitalTwin::new()
    ///         .set_metadata(DigitalTwinMetadata::new().set_model("dtmi:stratus:Thermostat;1"))
    ///         .set_content("temperature", 21.5);
    ///     client
    ///         .create_or_replace_digital_twin("thermostat-17", twin)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn create_or_replace_digital_twin<V, U>(
        &self,
        twin_id: V,
        twin: U,
    ) -> builder::twins::CreateOrReplace
    where
        V: Into<String>,
        U: Into<crate::model::DigitalTwin>,
    {
        builder::twins::CreateOrReplace::new(self.inner.clone())
            .set_twin_id(twin_id)
            .set_twin(twin)
    }

    /// Deletes a digital twin.
    pub fn delete_digital_twin<T: Into<String>>(&self, twin_id: T) -> builder::twins::Delete {
        builder::twins::Delete::new(self.inner.clone()).set_twin_id(twin_id)
    }

    /// Queries the twins in the instance.
    ///
    /// # Example
    /// ```
    /// # use stratus_twins::client::DigitalTwins;
    /// async fn example(client: &DigitalTwins) -> gax::Result<()> {
    ///     let mut pages = client
    ///         .query_twins("SELECT * FROM digitaltwins")
    ///         .paginator();
    ///     while let Some(page) = pages.next().await {
    ///         for twin in page?.value {
    ///             println!("  {twin:?}");
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn query_twins<T: Into<String>>(&self, query: T) -> builder::twins::Query {
        builder::twins::Query::new(self.inner.clone()).set_query(query)
    }
}

/// A builder for [DigitalTwins].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gax::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::DigitalTwins;

    pub struct Factory;

    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = DigitalTwins;
        type Credentials = gax::credentials::Credentials;
        async fn build(
            self,
            config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}
