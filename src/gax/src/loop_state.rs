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

use crate::error::Error;

/// The result of a retry policy decision.
///
/// Retry policies are often composed: an inner policy decides whether an error
/// is retryable at all, and an outer policy limits the number of attempts or
/// the elapsed time. The variants keep the underlying error so the retry loop
/// can return it when the loop stops.
#[derive(Debug)]
pub enum LoopState {
    /// The error may resolve itself, the caller should retry.
    Continue(Error),
    /// The error cannot resolve itself, the caller should stop.
    Permanent(Error),
    /// The policy is exhausted, the caller should stop.
    Exhausted(Error),
}

impl LoopState {
    /// Returns `true` for [LoopState::Continue].
    pub fn is_continue(&self) -> bool {
        matches!(self, LoopState::Continue(_))
    }

    /// Returns `true` for [LoopState::Permanent].
    pub fn is_permanent(&self) -> bool {
        matches!(self, LoopState::Permanent(_))
    }

    /// Returns `true` for [LoopState::Exhausted].
    pub fn is_exhausted(&self) -> bool {
        matches!(self, LoopState::Exhausted(_))
    }

    /// Consumes the state and returns the underlying error.
    pub fn into_error(self) -> Error {
        match self {
            LoopState::Continue(e) | LoopState::Permanent(e) | LoopState::Exhausted(e) => e,
        }
    }
}
