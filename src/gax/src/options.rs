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

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration.
//! Notably the default endpoint and the default authentication credentials do
//! not work for some applications.
//!
//! Likewise, applications may need to customize the behavior of some calls
//! made via a client, even a customized one. Applications sometimes change
//! the timeout for a specific call, change the retry configuration, or attach
//! additional [behaviors][crate::behavior]. The `*Builder` returned by each
//! client method implements the [RequestOptionsBuilder] trait where
//! applications can override these defaults.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::behavior::{Behavior, BehaviorArg};
use crate::detail_level::DetailLevel;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    client_request_id: Option<String>,
    return_client_request_id: bool,
    detail_level: Option<DetailLevel>,
    behaviors: Vec<Arc<dyn Behavior>>,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the RPC underlying this method as idempotent.
    ///
    /// If a retry policy is configured, the policy may examine the idempotency
    /// and the error details to decide if the error is retryable. Typically
    /// idempotent RPCs are safe to retry under more error conditions than
    /// non-idempotent RPCs.
    ///
    /// The client libraries provide a default for RPC idempotency, based on
    /// the HTTP method (`GET`, `POST`, `DELETE`, etc.).
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency for the underlying RPC unless it is already set.
    ///
    /// If [set_idempotency][Self::set_idempotency] was already called this
    /// method has no effect. The client libraries use this to provide a
    /// default idempotency value.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// Gets the client request id, if any.
    pub fn client_request_id(&self) -> Option<&str> {
        self.client_request_id.as_deref()
    }

    /// Sets the client request id sent with the request.
    ///
    /// The id is sent in the `client-request-id` header. Services record it to
    /// correlate client and server logs.
    pub fn set_client_request_id<T: Into<String>>(&mut self, v: T) {
        self.client_request_id = Some(v.into());
    }

    /// Sets the client request id unless one is already set.
    pub fn set_default_client_request_id<T: Into<String>>(&mut self, v: T) {
        self.client_request_id.get_or_insert_with(|| v.into());
    }

    /// If `true`, the service echoes the client request id in the response.
    pub fn return_client_request_id(&self) -> bool {
        self.return_client_request_id
    }

    /// Requests that the service echo the client request id in the response.
    pub fn set_return_client_request_id(&mut self, v: bool) {
        self.return_client_request_id = v;
    }

    /// Gets the detail level applied to this request, if any.
    pub fn detail_level(&self) -> &Option<DetailLevel> {
        &self.detail_level
    }

    /// Sets the detail level applied to this request.
    pub fn set_detail_level<T: Into<DetailLevel>>(&mut self, v: T) {
        self.detail_level = Some(v.into());
    }

    /// Gets the behaviors attached to this call.
    pub fn behaviors(&self) -> &[Arc<dyn Behavior>] {
        &self.behaviors
    }

    /// Attaches a behavior to this call.
    ///
    /// Per-call behaviors are applied after the client-level behaviors, see
    /// [BehaviorManager][crate::behavior::BehaviorManager]. They never modify
    /// the client-level list.
    pub fn add_behavior<V: Into<BehaviorArg>>(&mut self, v: V) {
        self.behaviors.push(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Stratus Cloud client libraries provide a builder for each RPC. These
/// builders can be used to set the request parameters, e.g., the id of the
/// resource targeted by the RPC, as well as any options affecting the request,
/// such as timeouts or per-call behaviors.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header prefix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the client request id sent with this call.
    fn with_client_request_id<V: Into<String>>(self, v: V) -> Self;

    /// Sets the detail level applied to this call.
    fn with_detail_level<V: Into<DetailLevel>>(self, v: V) -> Self;

    /// Attaches a behavior to this call.
    fn with_behavior<V: Into<BehaviorArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or
    //! removed without warnings. Applications should not use any types
    //! contained within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// the per-RPC builders.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_client_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_client_request_id(v);
        self
    }

    fn with_detail_level<V: Into<DetailLevel>>(mut self, v: V) -> Self {
        self.request_options().set_detail_level(v);
        self
    }

    fn with_behavior<V: Into<BehaviorArg>>(mut self, v: V) -> Self {
        self.request_options().add_behavior(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::behavior::ClientRequestId;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::LimitedAttemptCount;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        assert_eq!(opts.idempotent(), None);
        opts.set_idempotency(true);
        assert_eq!(opts.idempotent(), Some(true));
        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_retry_policy(LimitedAttemptCount::new(3));
        assert!(opts.retry_policy().is_some(), "{opts:?}");

        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");

        opts.set_client_request_id("00000000-0000-0000-0000-000000000000");
        assert_eq!(
            opts.client_request_id(),
            Some("00000000-0000-0000-0000-000000000000")
        );

        assert!(!opts.return_client_request_id());
        opts.set_return_client_request_id(true);
        assert!(opts.return_client_request_id());

        opts.set_detail_level(DetailLevel::new().with_filter("state eq 'active'"));
        assert!(opts.detail_level().is_some(), "{opts:?}");

        assert!(opts.behaviors().is_empty());
        opts.add_behavior(ClientRequestId::new());
        assert_eq!(opts.behaviors().len(), 1);
    }

    #[test]
    fn request_options_idempotency() {
        let opts = set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let opts = set_default_idempotency(RequestOptions::default(), false);
        assert_eq!(opts.idempotent(), Some(false));
        let opts = set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn request_options_default_client_request_id() {
        let mut opts = RequestOptions::default();
        opts.set_default_client_request_id("generated");
        assert_eq!(opts.client_request_id(), Some("generated"));
        opts.set_default_client_request_id("ignored");
        assert_eq!(opts.client_request_id(), Some("generated"));
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default().with_idempotency(true);
        assert_eq!(builder.request_options().idempotent(), Some(true));

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );

        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));

        let mut builder = TestBuilder::default().with_retry_policy(LimitedAttemptCount::new(3));
        assert!(
            builder.request_options().retry_policy().is_some(),
            "{builder:?}"
        );

        let mut builder =
            TestBuilder::default().with_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(
            builder.request_options().backoff_policy().is_some(),
            "{builder:?}"
        );

        let mut builder = TestBuilder::default().with_client_request_id("test-id");
        assert_eq!(
            builder.request_options().client_request_id(),
            Some("test-id")
        );

        let mut builder = TestBuilder::default()
            .with_detail_level(DetailLevel::new().with_select("id,state"));
        assert!(
            builder.request_options().detail_level().is_some(),
            "{builder:?}"
        );

        let mut builder = TestBuilder::default().with_behavior(ClientRequestId::new());
        assert_eq!(builder.request_options().behaviors().len(), 1);
    }
}
