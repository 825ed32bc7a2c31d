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

//! Exercises the Digital Twins client against a local HTTP server.

use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;
use stratus_twins::client::DigitalTwins;
use stratus_twins::model;

async fn test_client(server: &Server) -> gax::client_builder::Result<DigitalTwins> {
    DigitalTwins::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build()
        .await
}

#[tokio::test]
async fn create_or_replace_over_http() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/digitaltwins/thermostat-17"),
            request::headers(contains(("if-none-match", "*"))),
            request::body(json_decoded(eq(json!({
                "$metadata": {"$model": "dtmi:stratus:Thermostat;1"},
                "temperature": 21.5,
            })))),
        ])
        .respond_with(json_encoded(json!({
            "$dtId": "thermostat-17",
            "$etag": "W/\"a\"",
            "$metadata": {"$model": "dtmi:stratus:Thermostat;1"},
            "temperature": 21.5,
        }))),
    );

    let client = test_client(&server).await?;
    let twin = model::DigitalTwin::new()
        .set_metadata(model::DigitalTwinMetadata::new().set_model("dtmi:stratus:Thermostat;1"))
        .set_content("temperature", 21.5);
    let stored = client
        .create_or_replace_digital_twin("thermostat-17", twin)
        .set_if_none_match(true)
        .send()
        .await?;
    assert_eq!(stored.body().dt_id, "thermostat-17");
    assert_eq!(stored.body().etag.as_deref(), Some("W/\"a\""));
    Ok(())
}

#[tokio::test]
async fn delete_sends_if_match() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("DELETE", "/digitaltwins/thermostat-17"),
            request::headers(contains(("if-match", "W/\"a\""))),
        ])
        .respond_with(status_code(204)),
    );

    let client = test_client(&server).await?;
    client
        .delete_digital_twin("thermostat-17")
        .set_if_match("W/\"a\"")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn query_pages_over_http() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/query"),
            request::body(json_decoded(eq(json!({
                "query": "SELECT * FROM digitaltwins",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "value": [{"$dtId": "t-1"}],
            "continuationToken": "page-2",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/query"),
            request::body(json_decoded(eq(json!({
                "query": "SELECT * FROM digitaltwins",
                "continuationToken": "page-2",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "value": [{"$dtId": "t-2"}],
        }))),
    );

    let client = test_client(&server).await?;
    let mut pages = client.query_twins("SELECT * FROM digitaltwins").paginator();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        ids.extend(page?.value.into_iter().map(|t| t.dt_id));
    }
    assert_eq!(ids, vec!["t-1", "t-2"]);
    Ok(())
}

#[tokio::test]
async fn not_found_surfaces_the_status() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/digitaltwins/missing")).respond_with(
            status_code(404).body(
                json!({"error": {
                    "code": "DigitalTwinNotFound",
                    "message": "There is no digital twin with this id.",
                }})
                .to_string(),
            ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client.get_digital_twin("missing").send().await.unwrap_err();
    let status = err.status().expect("expected a service error");
    assert_eq!(status.code, "DigitalTwinNotFound");
    assert_eq!(err.http_status_code(), Some(404));
    Ok(())
}
