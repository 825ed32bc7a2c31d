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

//! Optional request-mutation policies and their composition.
//!
//! A [Behavior] is one optional policy attached to a client or to a single
//! call: stamp a client request id on every request, inject a retry policy,
//! apply a [DetailLevel][crate::detail_level::DetailLevel] to list and get
//! calls. Behaviors compose without subclassing: a client carries an ordered
//! list of them, and each call may carry additional ones.
//!
//! A behavior that knows how to mutate the outgoing request exposes an
//! [Interceptor]. Before a request is dispatched the transport builds a
//! [BehaviorManager] from the client-level list and the per-call list, and the
//! manager applies every interceptor, in order, to the call's
//! [RequestOptions].
//!
//! # Example
//! ```
//! use stratus_gax::behavior::{BehaviorManager, ClientRequestId};
//! use stratus_gax::options::RequestOptions;
//! use std::sync::Arc;
//!
//! let base = [Arc::new(ClientRequestId::new()) as Arc<dyn stratus_gax::behavior::Behavior>];
//! let mut options = RequestOptions::default();
//! let per_call = options.behaviors().to_vec();
//! BehaviorManager::new(&base, &per_call).apply(&mut options);
//! assert!(options.client_request_id().is_some());
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::options::RequestOptions;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// An optional policy attached to a client or to a single call.
///
/// Plain behaviors are markers: they participate in the merge but mutate
/// nothing. Behaviors that need to change the outgoing request override
/// [interceptor][Behavior::interceptor] to return their mutation capability.
pub trait Behavior: Send + Sync + std::fmt::Debug {
    /// Returns the interceptor half of this behavior, if it has one.
    fn interceptor(&self) -> Option<&dyn Interceptor> {
        None
    }
}

/// The mutation capability of a [Behavior].
///
/// Interceptors run when the request is dispatched, after the application has
/// finished configuring the per-request builder. They receive the outgoing
/// options object and may change any of its fields.
pub trait Interceptor {
    /// Mutates the options for the outgoing request.
    fn modify_request(&self, options: &mut RequestOptions);
}

/// A helper type to use [Behavior] in client and request options.
#[derive(Clone)]
pub struct BehaviorArg(pub(crate) Arc<dyn Behavior>);

impl<T: Behavior + 'static> std::convert::From<T> for BehaviorArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn Behavior>> for BehaviorArg {
    fn from(value: Arc<dyn Behavior>) -> Self {
        Self(value)
    }
}

impl std::convert::From<BehaviorArg> for Arc<dyn Behavior> {
    fn from(value: BehaviorArg) -> Self {
        value.0
    }
}

/// Merges the client-level behaviors with the per-call behaviors and applies
/// their interceptors to an outgoing request.
///
/// The merged order is the client-level (base) list first, then the per-call
/// list, each in insertion order. Interceptors run in the merged order, so a
/// later interceptor may overwrite what an earlier one wrote; this is how a
/// per-call [Retry] overrides a client-level one. Merging copies handles,
/// the base list itself is never modified.
#[derive(Clone, Debug)]
pub struct BehaviorManager {
    behaviors: Vec<Arc<dyn Behavior>>,
}

impl BehaviorManager {
    /// Merges `base` and `per_call`, preserving order.
    pub fn new(base: &[Arc<dyn Behavior>], per_call: &[Arc<dyn Behavior>]) -> Self {
        Self {
            behaviors: base.iter().chain(per_call.iter()).cloned().collect(),
        }
    }

    /// The merged behavior list.
    pub fn behaviors(&self) -> &[Arc<dyn Behavior>] {
        &self.behaviors
    }

    /// Applies every interceptor, in merged order, to `options`.
    pub fn apply(&self, options: &mut RequestOptions) {
        for behavior in &self.behaviors {
            if let Some(interceptor) = behavior.interceptor() {
                interceptor.modify_request(options);
            }
        }
    }
}

/// Stamps a `client-request-id` header on every request.
///
/// Services record the id to correlate client and server logs. By default each
/// request gets a fresh UUID v4; a fixed id can be configured, which is mostly
/// useful in tests. An id already present in the options, e.g. set via
/// [with_client_request_id][crate::options::RequestOptionsBuilder::with_client_request_id],
/// is never overwritten.
///
/// # Example
/// ```
/// use stratus_gax::behavior::ClientRequestId;
/// let behavior = ClientRequestId::new().with_echo(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientRequestId {
    id: Option<String>,
    echo: bool,
}

impl ClientRequestId {
    /// Creates a behavior stamping a fresh UUID v4 per request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a fixed id instead of a fresh UUID per request.
    pub fn with_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// If `v` is `true`, asks the service to echo the id in the response.
    pub fn with_echo(mut self, v: bool) -> Self {
        self.echo = v;
        self
    }
}

impl Behavior for ClientRequestId {
    fn interceptor(&self) -> Option<&dyn Interceptor> {
        Some(self)
    }
}

impl Interceptor for ClientRequestId {
    fn modify_request(&self, options: &mut RequestOptions) {
        match &self.id {
            Some(id) => options.set_default_client_request_id(id.clone()),
            None => options.set_default_client_request_id(uuid::Uuid::new_v4().to_string()),
        }
        if self.echo {
            options.set_return_client_request_id(true);
        }
    }
}

/// Injects a retry policy, and optionally a backoff policy, into each call.
///
/// Attaching this behavior to a client is equivalent to calling
/// [with_retry_policy][crate::client_builder::ClientBuilder::with_retry_policy]
/// on the client builder. Attaching it to a call overrides the client-level
/// configuration for that call, because per-call behaviors are applied later.
///
/// # Example
/// ```
/// use stratus_gax::behavior::Retry;
/// use stratus_gax::retry_policy::{RetryPolicyExt, TransientErrors};
/// let behavior = Retry::new(TransientErrors.with_attempt_limit(3));
/// ```
#[derive(Clone, Debug)]
pub struct Retry {
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl Retry {
    /// Creates a behavior injecting the given retry policy.
    pub fn new<V: Into<RetryPolicyArg>>(v: V) -> Self {
        Self {
            retry_policy: v.into().into(),
            backoff_policy: None,
        }
    }

    /// Also injects a backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff_policy = Some(v.into().into());
        self
    }
}

impl Behavior for Retry {
    fn interceptor(&self) -> Option<&dyn Interceptor> {
        Some(self)
    }
}

impl Interceptor for Retry {
    fn modify_request(&self, options: &mut RequestOptions) {
        options.set_retry_policy(self.retry_policy.clone());
        if let Some(backoff) = &self.backoff_policy {
            options.set_backoff_policy(backoff.clone());
        }
    }
}
