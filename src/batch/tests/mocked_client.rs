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

use gax::options::{RequestOptions, RequestOptionsBuilder};
use gax::response::Response;
use stratus_batch::client::Batch;
use stratus_batch::model;

mockall::mock! {
    #[derive(Debug)]
    Batch {}
    #[async_trait::async_trait]
    impl stratus_batch::stub::Batch for Batch {
        async fn list_supported_images(
            &self,
            req: model::ListSupportedImagesRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::ListSupportedImagesResult>>;
        async fn list_pool_node_counts(
            &self,
            req: model::ListPoolNodeCountsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::ListPoolNodeCountsResult>>;
        async fn add_job(
            &self,
            req: model::AddJobRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Job>>;
        async fn get_job(
            &self,
            req: model::GetJobRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Job>>;
        async fn list_jobs(
            &self,
            req: model::ListJobsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::ListJobsResult>>;
        async fn delete_job(
            &self,
            req: model::DeleteJobRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<()>>;
        async fn terminate_job(
            &self,
            req: model::TerminateJobRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<()>>;
        async fn add_pool(
            &self,
            req: model::AddPoolRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Pool>>;
        async fn get_pool(
            &self,
            req: model::GetPoolRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Pool>>;
        async fn list_pools(
            &self,
            req: model::ListPoolsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::ListPoolsResult>>;
        async fn delete_pool(
            &self,
            req: model::DeletePoolRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<()>>;
        async fn resize_pool(
            &self,
            req: model::ResizePoolRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Pool>>;
    }
}

#[tokio::test]
async fn get_job_forwards_id() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_get_job()
        .withf(|req, _options| req.job_id == "job-001")
        .once()
        .returning(|req, _| {
            Ok(Response::from(
                model::Job::new()
                    .set_id(req.job_id)
                    .set_state(model::JobState::Active),
            ))
        });

    let client = Batch::from_stub(mock);
    let job = client.jobs().get("job-001").send().await?;
    assert_eq!(job.body().id, "job-001");
    assert_eq!(job.body().state, Some(model::JobState::Active));
    Ok(())
}

#[tokio::test]
async fn add_job_forwards_resource() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_add_job()
        .withf(|req, _options| {
            req.job.id == "job-002" && req.job.priority == Some(500)
        })
        .once()
        .returning(|req, _| Ok(Response::from(req.job)));

    let client = Batch::from_stub(mock);
    let job = model::Job::new().set_id("job-002").set_priority(500);
    let created = client.jobs().add(job).send().await?;
    assert_eq!(created.body().id, "job-002");
    Ok(())
}

#[tokio::test]
async fn terminate_job_sets_reason() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_terminate_job()
        .withf(|req, _options| {
            req.job_id == "job-001"
                && req
                    .parameters
                    .as_ref()
                    .and_then(|p| p.terminate_reason.as_deref())
                    == Some("user cancelled")
        })
        .once()
        .returning(|_, _| Ok(Response::from(())));

    let client = Batch::from_stub(mock);
    client
        .jobs()
        .terminate("job-001")
        .set_terminate_reason("user cancelled")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn detail_level_reaches_the_stub() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_list_jobs()
        .withf(|_req, options| {
            options
                .detail_level()
                .as_ref()
                .and_then(|d| d.filter())
                == Some("state eq 'active'")
        })
        .once()
        .returning(|_, _| Ok(Response::from(model::ListJobsResult::new())));

    let client = Batch::from_stub(mock);
    client
        .jobs()
        .list()
        .with_detail_level(
            gax::detail_level::DetailLevel::new().with_filter("state eq 'active'"),
        )
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn per_call_behavior_reaches_the_stub() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_get_pool()
        .withf(|req, options| req.pool_id == "pool-7" && options.behaviors().len() == 1)
        .once()
        .returning(|_, _| Ok(Response::from(model::Pool::new().set_id("pool-7"))));

    let client = Batch::from_stub(mock);
    client
        .pools()
        .get("pool-7")
        .with_behavior(gax::behavior::ClientRequestId::new())
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn resize_pool_builds_parameters() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_resize_pool()
        .withf(|req, _options| {
            req.pool_id == "pool-7"
                && req.parameters.target_dedicated_nodes == Some(16)
                && req.parameters.target_spot_nodes == Some(4)
        })
        .once()
        .returning(|_, _| Ok(Response::from(model::Pool::new().set_id("pool-7"))));

    let client = Batch::from_stub(mock);
    client
        .pools()
        .resize("pool-7")
        .set_target_dedicated_nodes(16)
        .set_target_spot_nodes(4)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn operations_objects_share_the_client_stub() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    mock.expect_delete_job()
        .once()
        .returning(|_, _| Ok(Response::from(())));
    mock.expect_delete_pool()
        .once()
        .returning(|_, _| Ok(Response::from(())));

    // Both operations objects come from the same client, and therefore use
    // the same stub (and the same client-level behaviors).
    let client = Batch::from_stub(mock);
    let jobs = client.jobs();
    let pools = client.pools();
    jobs.delete("job-001").send().await?;
    pools.delete("pool-7").send().await?;
    Ok(())
}

#[tokio::test]
async fn list_paginator_threads_next_link() -> anyhow::Result<()> {
    let mut mock = MockBatch::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_jobs()
        .withf(|req, _| req.next_link.is_none())
        .once()
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Ok(Response::from(
                model::ListJobsResult::new()
                    .set_value([model::Job::new().set_id("job-001")])
                    .set_odata_next_link("page-2"),
            ))
        });
    mock.expect_list_jobs()
        .withf(|req, _| req.next_link.as_deref() == Some("page-2"))
        .once()
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Ok(Response::from(
                model::ListJobsResult::new().set_value([model::Job::new().set_id("job-002")]),
            ))
        });

    let client = Batch::from_stub(mock);
    let mut pages = client.jobs().list().paginator();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        ids.extend(page?.value.into_iter().map(|j| j.id));
    }
    assert_eq!(ids, vec!["job-001", "job-002"]);
    Ok(())
}

#[tokio::test]
async fn errors_propagate() {
    let mut mock = MockBatch::new();
    mock.expect_get_job().once().returning(|_, _| {
        Err(gax::error::Error::service(
            gax::error::status::Status::default()
                .set_code("JobNotFound")
                .set_message("The specified job does not exist."),
        ))
    });

    let client = Batch::from_stub(mock);
    let err = client.jobs().get("missing").send().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.code.as_str()), Some("JobNotFound"));
}
