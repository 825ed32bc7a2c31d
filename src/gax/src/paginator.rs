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

//! Defines types and traits to consume list RPCs as a [futures::Stream].
//!
//! The Stratus list RPCs return one page of results at a time, along with a
//! link to the next page. The [Paginator] adapter drives the page-by-page
//! calls so applications can iterate over the pages asynchronously.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a response that can be iterated over with a [Paginator].
pub trait PageableResponse {
    /// The link to the next page. An empty string means the last page.
    fn next_link(&self) -> String;
}

/// An adapter that converts paginated list RPCs into a [futures::Stream] of
/// pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page link and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(seed_link: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send,
        E: Send,
    {
        let stream = unfold(ControlFlow::Continue(seed_link), move |state| {
            let execute = execute.clone();
            async move {
                let link = match state {
                    ControlFlow::Continue(link) => link,
                    ControlFlow::Break(_) => return None,
                };
                match execute(link).await {
                    Ok(page) => {
                        let next = page.next_link();
                        let next_state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct TestResponse {
        items: Vec<String>,
        next_link: String,
    }

    impl PageableResponse for TestResponse {
        fn next_link(&self) -> String {
            self.next_link.clone()
        }
    }

    #[tokio::test]
    async fn iterates_all_pages() {
        let mut responses = VecDeque::new();
        responses.push_back(TestResponse {
            items: vec!["item1".to_string(), "item2".to_string()],
            next_link: "page2".to_string(),
        });
        responses.push_back(TestResponse {
            items: vec!["item3".to_string()],
            next_link: String::new(),
        });
        let mut expected_links = VecDeque::new();
        expected_links.push_back(String::new());
        expected_links.push_back("page2".to_string());

        let state = Arc::new(Mutex::new(responses));
        let links = Arc::new(Mutex::new(expected_links));

        let execute = move |link: String| {
            let expected = links.lock().unwrap().pop_front().unwrap();
            assert_eq!(link, expected);
            let page = state.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, String>(page) }
        };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            items.extend(page.unwrap().items);
        }
        assert_eq!(items, vec!["item1", "item2", "item3"]);
    }

    #[tokio::test]
    async fn stops_after_error() {
        let execute =
            |_link: String| async { Err::<TestResponse, String>("simulated".to_string()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut errors = 0;
        while let Some(page) = paginator.next().await {
            match page {
                Ok(_) => panic!("should not succeed"),
                Err(e) => {
                    assert_eq!(e, "simulated");
                    errors += 1;
                }
            }
        }
        assert_eq!(errors, 1);
    }

    #[tokio::test]
    async fn single_page() {
        let execute = |_link: String| async {
            Ok::<_, String>(TestResponse {
                items: vec!["only".to_string()],
                next_link: String::new(),
            })
        };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut pages = 0;
        while let Some(page) = paginator.next().await {
            assert!(page.is_ok());
            pages += 1;
        }
        assert_eq!(pages, 1);
    }
}
