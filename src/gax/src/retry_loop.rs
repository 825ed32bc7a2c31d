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

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::loop_state::LoopState;
use crate::options::RequestOptions;
use crate::retry_policy::RetryPolicy;
use std::sync::Arc;

/// Runs the retry loop for a given function.
///
/// This function calls an inner function as long as (1) the retry policy has
/// not expired, and (2) the inner function has not returned a successful
/// request.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any waiting.
pub async fn retry_loop<F, S, Response>(
    inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFn(Option<std::time::Duration>) -> Result<Response> + Send,
    S: AsyncFn(std::time::Duration) + Send,
{
    let loop_start = std::time::Instant::now();
    let mut attempt_count = 0;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        attempt_count += 1;
        match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => {
                match retry_policy.on_error(loop_start, attempt_count, idempotent, e) {
                    LoopState::Permanent(e) | LoopState::Exhausted(e) => return Err(e),
                    LoopState::Continue(_e) => {
                        let delay = backoff_policy.on_failure(loop_start, attempt_count);
                        sleep(delay).await;
                    }
                };
            }
        };
    }
}

/// Computes the timeout for the next attempt.
///
/// The next attempt is limited by both the per-attempt timeout (if any) and
/// the remaining time in the retry policy (if any).
pub fn effective_timeout(
    options: &RequestOptions,
    remaining_time: Option<std::time::Duration>,
) -> Option<std::time::Duration> {
    match (*options.attempt_timeout(), remaining_time) {
        (Some(timeout), Some(remaining)) => Some(std::cmp::min(timeout, remaining)),
        (Some(timeout), None) => Some(timeout),
        (None, Some(remaining)) => Some(remaining),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .returning(|_, _| None);
        let backoff_policy = MockBackoffPolicy::new();

        let inner = async |_| Ok("success".to_string());
        let sleep = async |_| {
            unreachable!("no backoff on success");
        };
        let response = retry_loop(
            inner,
            sleep,
            true,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn success_after_transient_failures() -> anyhow::Result<()> {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .times(3)
            .returning(|_, _| None);
        retry_policy
            .expect_on_error()
            .times(2)
            .returning(|_, _, _, e| LoopState::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .returning(|_, _| Duration::from_millis(1));

        let count = std::sync::Mutex::new(0);
        let inner = async |_| {
            let mut count = count.lock().unwrap();
            *count += 1;
            if *count < 3 {
                return Err(Error::io("try again"));
            }
            Ok("success".to_string())
        };
        let sleep = async |_| ();
        let response = retry_loop(
            inner,
            sleep,
            true,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn stops_on_permanent_error() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .returning(|_, _| None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| LoopState::Permanent(e));
        let backoff_policy = MockBackoffPolicy::new();

        let inner = async |_| Err::<String, Error>(Error::ser("bad request"));
        let sleep = async |_| {
            unreachable!("no backoff on permanent errors");
        };
        let response = retry_loop(
            inner,
            sleep,
            true,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[tokio::test]
    async fn stops_when_exhausted() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .times(3)
            .returning(|_, _| None);
        let mut seq = mockall::Sequence::new();
        retry_policy
            .expect_on_error()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _, _, e| LoopState::Continue(e));
        retry_policy
            .expect_on_error()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _, _, e| LoopState::Exhausted(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .returning(|_, _| Duration::from_millis(1));

        let inner = async |_| Err::<String, Error>(Error::io("try again"));
        let sleep = async |_| ();
        let response = retry_loop(
            inner,
            sleep,
            true,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[tokio::test]
    async fn passes_remaining_time_to_inner() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .returning(|_, _| Some(Duration::from_secs(5)));
        let backoff_policy = MockBackoffPolicy::new();

        let inner = async |remaining: Option<Duration>| {
            assert_eq!(remaining, Some(Duration::from_secs(5)));
            Ok(())
        };
        let sleep = async |_| ();
        retry_loop(
            inner,
            sleep,
            true,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await
        .unwrap();
    }

    #[test]
    fn effective_timeout_picks_minimum() {
        let mut options = RequestOptions::default();
        assert_eq!(effective_timeout(&options, None), None);
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );
        options.set_attempt_timeout(Duration::from_secs(3));
        assert_eq!(
            effective_timeout(&options, None),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(5))),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(1))),
            Some(Duration::from_secs(1))
        );
    }

    fn to_retry_policy(mock: MockRetryPolicy) -> Arc<dyn RetryPolicy> {
        Arc::new(mock)
    }

    fn to_backoff_policy(mock: MockBackoffPolicy) -> Arc<dyn BackoffPolicy> {
        Arc::new(mock)
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: Instant, attempt_count: u32, idempotent: bool, error: Error) -> LoopState;
            fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: Instant, attempt_count: u32) -> Duration;
        }
    }
}
