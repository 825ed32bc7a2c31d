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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry RPCs when they fail due to
//! transient errors **and** the RPC is idempotent, that is, when it is safe to
//! perform the RPC more than once.
//!
//! Applications may override the default behavior, and may retry operations
//! that, while not safe in general, may be safe given how the application
//! manages resources.
//!
//! # Example
//! ```
//! use stratus_gax::retry_policy::{RetryPolicyExt, TransientErrors};
//! use std::time::Duration;
//!
//! let policy = TransientErrors
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::loop_state::LoopState;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP status codes treated as transient by [TransientErrors].
const TRANSIENT_STATUS_CODES: [u16; 5] = [408, 429, 502, 503, 504];

/// Controls the behavior of the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts so far. This method is
    ///   always called after the first attempt.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error received from a request. Not all are server
    ///   errors. The client library may have been unable to send or complete
    ///   the RPC before the server returned an error.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next RPC timeout.
    /// For policies that are not time based this returns `None`.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> std::convert::From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Retries errors that are likely to resolve themselves.
///
/// This policy should be decorated to limit the number of retry attempts or
/// the duration of the retry loop, see [RetryPolicyExt].
///
/// The retry decision for server-side errors is based only on the HTTP status
/// code: `408`, `429`, `502`, `503`, and `504` are considered transient, and
/// only for idempotent operations. Errors generated before the request left
/// the client, such as failures to create the authentication headers, are
/// always retryable.
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        // The operation never left the client, it is safe to retry.
        if error.is_authentication() {
            return LoopState::Continue(error);
        }
        if error.is_serialization() || error.is_deserialization() || error.is_binding() {
            return LoopState::Permanent(error);
        }
        if !idempotent {
            return LoopState::Permanent(error);
        }
        if error.is_io() || error.is_timeout() {
            return LoopState::Continue(error);
        }
        match error.http_status_code() {
            Some(code) if TRANSIENT_STATUS_CODES.contains(&code) => LoopState::Continue(error),
            _ => LoopState::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// Use with care: this policy retries errors that are not safe to retry on
/// non-idempotent operations. It is intended for operations the application
/// knows to be safe, and should be decorated with an attempt or time limit.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> LoopState {
        LoopState::Continue(error)
    }
}

/// A retry policy that never retries.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> LoopState {
        LoopState::Permanent(error)
    }
}

/// A retry policy decorator that limits the elapsed time.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time limit has not expired, the policy returns the
/// decision of the inner policy; once it expires, the policy always stops the
/// loop.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Clone, Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a policy decorating [TransientErrors] with a time limit.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a policy decorating `inner` with a time limit.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        if loop_start.elapsed() >= self.maximum_duration {
            return LoopState::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let remaining = self.maximum_duration.saturating_sub(loop_start.elapsed());
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `maximum_attempts` includes the initial attempt, so a
/// policy created with `LimitedAttemptCount::new(1)` never retries.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a policy decorating [TransientErrors] with an attempt limit.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a policy decorating `inner` with an attempt limit.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        if attempt_count >= self.maximum_attempts {
            return LoopState::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// Extension trait to decorate retry policies.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorates this policy with a time limit.
    ///
    /// # Example
    /// ```
    /// use stratus_gax::retry_policy::{RetryPolicyExt, TransientErrors};
    /// use std::time::Duration;
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorates this policy with an attempt limit.
    ///
    /// # Example
    /// ```
    /// use stratus_gax::retry_policy::{RetryPolicyExt, TransientErrors};
    /// let policy = TransientErrors.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}
