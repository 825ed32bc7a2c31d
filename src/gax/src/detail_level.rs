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

//! OData-style field selection and filtering for list and get calls.
//!
//! List and get responses can be large. A [DetailLevel] narrows them down: a
//! `filter` restricts which resources are returned, a `select` restricts which
//! properties of each resource are returned, and an `expand` includes related
//! resources inline. The expressions are passed to the service verbatim as the
//! `$filter`, `$select`, and `$expand` query parameters; the client library
//! does not interpret them.
//!
//! A detail level can be set on a single call via
//! [with_detail_level][crate::options::RequestOptionsBuilder::with_detail_level],
//! or attached to a client as a [behavior][crate::behavior] to apply to every
//! call made through it.
//!
//! # Example
//! ```
//! use stratus_gax::detail_level::DetailLevel;
//! let detail = DetailLevel::new()
//!     .with_filter("state eq 'active'")
//!     .with_select("id,state,priority");
//! ```

use crate::behavior::{Behavior, Interceptor};
use crate::options::RequestOptions;

/// An OData-style filter/select/expand specification for list and get calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailLevel {
    filter: Option<String>,
    select: Option<String>,
    expand: Option<String>,
}

impl DetailLevel {
    /// Creates an empty detail level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `$filter` expression.
    pub fn with_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the `$select` expression.
    pub fn with_select<T: Into<String>>(mut self, v: T) -> Self {
        self.select = Some(v.into());
        self
    }

    /// Sets the `$expand` expression.
    pub fn with_expand<T: Into<String>>(mut self, v: T) -> Self {
        self.expand = Some(v.into());
        self
    }

    /// Gets the `$filter` expression, if any.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Gets the `$select` expression, if any.
    pub fn select(&self) -> Option<&str> {
        self.select.as_deref()
    }

    /// Gets the `$expand` expression, if any.
    pub fn expand(&self) -> Option<&str> {
        self.expand.as_deref()
    }

    /// The query parameters for this detail level, in a fixed order.
    pub fn query_parameters(&self) -> Vec<(&'static str, &str)> {
        [
            ("$filter", self.filter.as_deref()),
            ("$select", self.select.as_deref()),
            ("$expand", self.expand.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Attached as a behavior, a detail level applies to every call made through
/// the client. A detail level set on the call itself wins, because per-call
/// behaviors are applied after client-level ones.
impl Behavior for DetailLevel {
    fn interceptor(&self) -> Option<&dyn Interceptor> {
        Some(self)
    }
}

impl Interceptor for DetailLevel {
    fn modify_request(&self, options: &mut RequestOptions) {
        options.set_detail_level(self.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::BehaviorManager;
    use std::sync::Arc;

    #[test]
    fn query_parameters_in_order() {
        let detail = DetailLevel::new()
            .with_filter("state eq 'active'")
            .with_select("id,state")
            .with_expand("stats");
        assert_eq!(
            detail.query_parameters(),
            vec![
                ("$filter", "state eq 'active'"),
                ("$select", "id,state"),
                ("$expand", "stats"),
            ]
        );
    }

    #[test]
    fn query_parameters_skip_unset() {
        let detail = DetailLevel::new().with_select("id");
        assert_eq!(detail.query_parameters(), vec![("$select", "id")]);
        assert!(DetailLevel::new().query_parameters().is_empty());
    }

    #[test]
    fn accessors() {
        let detail = DetailLevel::new().with_filter("f").with_expand("e");
        assert_eq!(detail.filter(), Some("f"));
        assert_eq!(detail.select(), None);
        assert_eq!(detail.expand(), Some("e"));
    }

    #[test]
    fn applies_as_behavior() {
        let detail = DetailLevel::new().with_filter("state eq 'active'");
        let base: Vec<Arc<dyn Behavior>> = vec![Arc::new(detail.clone())];
        let mut options = RequestOptions::default();
        BehaviorManager::new(&base, &[]).apply(&mut options);
        assert_eq!(options.detail_level(), &Some(detail));
    }

    #[test]
    fn per_call_wins_over_client_level() {
        let client_level = DetailLevel::new().with_select("id");
        let per_call = DetailLevel::new().with_select("id,state");
        let base: Vec<Arc<dyn Behavior>> = vec![Arc::new(client_level)];
        let call: Vec<Arc<dyn Behavior>> = vec![Arc::new(per_call.clone())];
        let mut options = RequestOptions::default();
        BehaviorManager::new(&base, &call).apply(&mut options);
        assert_eq!(options.detail_level(), &Some(per_call));
    }
}
