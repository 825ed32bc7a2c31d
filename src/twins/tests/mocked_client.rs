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

//! Verifies the client surface forwards requests and options to the stub.

use gax::options::RequestOptions;
use gax::response::Response;
use stratus_twins::client::DigitalTwins;
use stratus_twins::model;

mockall::mock! {
    #[derive(Debug)]
    DigitalTwins {}
    #[async_trait::async_trait]
    impl stratus_twins::stub::DigitalTwins for DigitalTwins {
        async fn get_digital_twin(
            &self,
            req: model::GetDigitalTwinRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::DigitalTwin>>;
        async fn create_or_replace_digital_twin(
            &self,
            req: model::CreateOrReplaceDigitalTwinRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::DigitalTwin>>;
        async fn delete_digital_twin(
            &self,
            req: model::DeleteDigitalTwinRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<()>>;
        async fn query_twins(
            &self,
            req: model::QueryTwinsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::QueryResult>>;
    }
}

#[tokio::test]
async fn get_forwards_id() -> anyhow::Result<()> {
    let mut mock = MockDigitalTwins::new();
    mock.expect_get_digital_twin()
        .withf(|req, _| req.twin_id == "thermostat-17")
        .once()
        .returning(|req, _| {
            Ok(Response::from(model::DigitalTwin::new().set_dt_id(req.twin_id)))
        });

    let client = DigitalTwins::from_stub(mock);
    let twin = client.get_digital_twin("thermostat-17").send().await?;
    assert_eq!(twin.body().dt_id, "thermostat-17");
    Ok(())
}

#[tokio::test]
async fn create_or_replace_forwards_flags() -> anyhow::Result<()> {
    let mut mock = MockDigitalTwins::new();
    mock.expect_create_or_replace_digital_twin()
        .withf(|req, _| {
            req.twin_id == "thermostat-17"
                && req.if_none_match
                && req.twin.contents.get("temperature").is_some()
        })
        .once()
        .returning(|req, _| Ok(Response::from(req.twin)));

    let client = DigitalTwins::from_stub(mock);
    let twin = model::DigitalTwin::new().set_content("temperature", 21.5);
    client
        .create_or_replace_digital_twin("thermostat-17", twin)
        .set_if_none_match(true)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn delete_forwards_etag() -> anyhow::Result<()> {
    let mut mock = MockDigitalTwins::new();
    mock.expect_delete_digital_twin()
        .withf(|req, _| {
            req.twin_id == "thermostat-17" && req.if_match.as_deref() == Some("W/\"a\"")
        })
        .once()
        .returning(|_, _| Ok(Response::from(())));

    let client = DigitalTwins::from_stub(mock);
    client
        .delete_digital_twin("thermostat-17")
        .set_if_match("W/\"a\"")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn query_paginator_threads_continuation_token() -> anyhow::Result<()> {
    let mut mock = MockDigitalTwins::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_query_twins()
        .withf(|req, _| {
            req.specification.query == "SELECT * FROM digitaltwins"
                && req.specification.continuation_token.is_none()
        })
        .once()
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Ok(Response::from(
                model::QueryResult::new()
                    .set_value([model::DigitalTwin::new().set_dt_id("t-1")])
                    .set_continuation_token("page-2"),
            ))
        });
    mock.expect_query_twins()
        .withf(|req, _| req.specification.continuation_token.as_deref() == Some("page-2"))
        .once()
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Ok(Response::from(
                model::QueryResult::new().set_value([model::DigitalTwin::new().set_dt_id("t-2")]),
            ))
        });

    let client = DigitalTwins::from_stub(mock);
    let mut pages = client.query_twins("SELECT * FROM digitaltwins").paginator();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        ids.extend(page?.value.into_iter().map(|t| t.dt_id));
    }
    assert_eq!(ids, vec!["t-1", "t-2"]);
    Ok(())
}
