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

//! The messages exchanged with the Stratus Batch service.

use gax::paginator::PageableResponse;

/// A reference to a platform image.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageReference {
    /// The publisher of the image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publisher: String,

    /// The offer type of the image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer: String,

    /// The SKU of the image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sku: String,

    /// The version of the image. If omitted, the latest version is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ImageReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [publisher][ImageReference::publisher].
    pub fn set_publisher<T: Into<String>>(mut self, v: T) -> Self {
        self.publisher = v.into();
        self
    }

    /// Sets the value of [offer][ImageReference::offer].
    pub fn set_offer<T: Into<String>>(mut self, v: T) -> Self {
        self.offer = v.into();
        self
    }

    /// Sets the value of [sku][ImageReference::sku].
    pub fn set_sku<T: Into<String>>(mut self, v: T) -> Self {
        self.sku = v.into();
        self
    }

    /// Sets the value of [version][ImageReference::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }
}

/// The operating system of a platform image.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OsType {
    #[default]
    Linux,
    Windows,
}

/// A platform image supported by the Batch service.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageInformation {
    /// The id of the node agent SKU that runs on this image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub node_agent_sku_id: String,

    /// The reference to the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<ImageReference>,

    /// The operating system of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<OsType>,

    /// The capabilities the image supports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
}

impl ImageInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [node_agent_sku_id][ImageInformation::node_agent_sku_id].
    pub fn set_node_agent_sku_id<T: Into<String>>(mut self, v: T) -> Self {
        self.node_agent_sku_id = v.into();
        self
    }

    /// Sets the value of [image_reference][ImageInformation::image_reference].
    pub fn set_image_reference<T: Into<ImageReference>>(mut self, v: T) -> Self {
        self.image_reference = Some(v.into());
        self
    }

    /// Sets the value of [os_type][ImageInformation::os_type].
    pub fn set_os_type<T: Into<OsType>>(mut self, v: T) -> Self {
        self.os_type = Some(v.into());
        self
    }

    /// Sets the value of [capabilities][ImageInformation::capabilities].
    pub fn set_capabilities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.capabilities = v.into_iter().map(|c| c.into()).collect();
        self
    }
}

/// One page of supported platform images.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSupportedImagesResult {
    /// The images in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<ImageInformation>,

    /// The continuation for the next page, absent on the last page.
    #[serde(rename = "odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
}

impl ListSupportedImagesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][ListSupportedImagesResult::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ImageInformation>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [odata_next_link][ListSupportedImagesResult::odata_next_link].
    pub fn set_odata_next_link<T: Into<String>>(mut self, v: T) -> Self {
        self.odata_next_link = Some(v.into());
        self
    }
}

impl PageableResponse for ListSupportedImagesResult {
    fn next_link(&self) -> String {
        self.odata_next_link.clone().unwrap_or_default()
    }
}

/// The number of compute nodes in each state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeCounts {
    pub creating: i32,
    pub idle: i32,
    pub running: i32,
    pub starting: i32,
    pub total: i32,
}

impl NodeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [total][NodeCounts::total].
    pub fn set_total<T: Into<i32>>(mut self, v: T) -> Self {
        self.total = v.into();
        self
    }

    /// Sets the value of [idle][NodeCounts::idle].
    pub fn set_idle<T: Into<i32>>(mut self, v: T) -> Self {
        self.idle = v.into();
        self
    }

    /// Sets the value of [running][NodeCounts::running].
    pub fn set_running<T: Into<i32>>(mut self, v: T) -> Self {
        self.running = v.into();
        self
    }
}

/// The node counts for a pool.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PoolNodeCounts {
    /// The id of the pool.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pool_id: String,

    /// The counts for dedicated nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated: Option<NodeCounts>,

    /// The counts for spot nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot: Option<NodeCounts>,
}

impl PoolNodeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [pool_id][PoolNodeCounts::pool_id].
    pub fn set_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.pool_id = v.into();
        self
    }

    /// Sets the value of [dedicated][PoolNodeCounts::dedicated].
    pub fn set_dedicated<T: Into<NodeCounts>>(mut self, v: T) -> Self {
        self.dedicated = Some(v.into());
        self
    }

    /// Sets the value of [spot][PoolNodeCounts::spot].
    pub fn set_spot<T: Into<NodeCounts>>(mut self, v: T) -> Self {
        self.spot = Some(v.into());
        self
    }
}

/// One page of pool node counts.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPoolNodeCountsResult {
    /// The node counts in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<PoolNodeCounts>,

    /// The continuation for the next page, absent on the last page.
    #[serde(rename = "odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
}

impl ListPoolNodeCountsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][ListPoolNodeCountsResult::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PoolNodeCounts>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [odata_next_link][ListPoolNodeCountsResult::odata_next_link].
    pub fn set_odata_next_link<T: Into<String>>(mut self, v: T) -> Self {
        self.odata_next_link = Some(v.into());
        self
    }
}

impl PageableResponse for ListPoolNodeCountsResult {
    fn next_link(&self) -> String {
        self.odata_next_link.clone().unwrap_or_default()
    }
}

/// The state of a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum JobState {
    #[default]
    Active,
    Disabling,
    Disabled,
    Terminating,
    Completed,
    Deleting,
}

/// Specifies the pool a job runs on.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PoolInformation {
    /// The id of an existing pool.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pool_id: String,
}

impl PoolInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [pool_id][PoolInformation::pool_id].
    pub fn set_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.pool_id = v.into();
        self
    }
}

/// The execution constraints for a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobConstraints {
    /// The maximum elapsed time the job may run, as an ISO-8601 duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wall_clock_time: Option<String>,

    /// The maximum number of times each task may be retried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_task_retry_count: Option<i32>,
}

impl JobConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_wall_clock_time][JobConstraints::max_wall_clock_time].
    pub fn set_max_wall_clock_time<T: Into<String>>(mut self, v: T) -> Self {
        self.max_wall_clock_time = Some(v.into());
        self
    }

    /// Sets the value of [max_task_retry_count][JobConstraints::max_task_retry_count].
    pub fn set_max_task_retry_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_task_retry_count = Some(v.into());
        self
    }
}

/// A Batch job.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Job {
    /// The id of the job, unique within the account.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The display name of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The scheduling priority of the job, between -1000 and 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// The execution constraints for the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JobConstraints>,

    /// The pool the job runs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_info: Option<PoolInformation>,

    /// The current state of the job. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobState>,

    /// The previous state of the job. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<JobState>,

    /// The ETag of the job. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Job::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][Job::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [priority][Job::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [constraints][Job::constraints].
    pub fn set_constraints<T: Into<JobConstraints>>(mut self, v: T) -> Self {
        self.constraints = Some(v.into());
        self
    }

    /// Sets the value of [pool_info][Job::pool_info].
    pub fn set_pool_info<T: Into<PoolInformation>>(mut self, v: T) -> Self {
        self.pool_info = Some(v.into());
        self
    }

    /// Sets the value of [state][Job::state].
    pub fn set_state<T: Into<JobState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// One page of jobs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsResult {
    /// The jobs in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Job>,

    /// The continuation for the next page, absent on the last page.
    #[serde(rename = "odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
}

impl ListJobsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][ListJobsResult::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [odata_next_link][ListJobsResult::odata_next_link].
    pub fn set_odata_next_link<T: Into<String>>(mut self, v: T) -> Self {
        self.odata_next_link = Some(v.into());
        self
    }
}

impl PageableResponse for ListJobsResult {
    fn next_link(&self) -> String {
        self.odata_next_link.clone().unwrap_or_default()
    }
}

/// The options for a job termination.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobTerminateParameters {
    /// The text to record as the reason for the termination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_reason: Option<String>,
}

impl JobTerminateParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [terminate_reason][JobTerminateParameters::terminate_reason].
    pub fn set_terminate_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.terminate_reason = Some(v.into());
        self
    }
}

/// The state of a pool.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PoolState {
    #[default]
    Active,
    Deleting,
    Upgrading,
}

/// A pool of compute nodes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pool {
    /// The id of the pool, unique within the account.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The display name of the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The size of the virtual machines in the pool.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vm_size: String,

    /// The image the nodes in the pool run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<ImageReference>,

    /// The desired number of dedicated nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,

    /// The desired number of spot nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_spot_nodes: Option<i32>,

    /// The current number of dedicated nodes. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dedicated_nodes: Option<i32>,

    /// The current state of the pool. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PoolState>,

    /// The ETag of the pool. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Pool::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][Pool::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [vm_size][Pool::vm_size].
    pub fn set_vm_size<T: Into<String>>(mut self, v: T) -> Self {
        self.vm_size = v.into();
        self
    }

    /// Sets the value of [image_reference][Pool::image_reference].
    pub fn set_image_reference<T: Into<ImageReference>>(mut self, v: T) -> Self {
        self.image_reference = Some(v.into());
        self
    }

    /// Sets the value of [target_dedicated_nodes][Pool::target_dedicated_nodes].
    pub fn set_target_dedicated_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.target_dedicated_nodes = Some(v.into());
        self
    }

    /// Sets the value of [target_spot_nodes][Pool::target_spot_nodes].
    pub fn set_target_spot_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.target_spot_nodes = Some(v.into());
        self
    }

    /// Sets the value of [state][Pool::state].
    pub fn set_state<T: Into<PoolState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// One page of pools.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPoolsResult {
    /// The pools in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Pool>,

    /// The continuation for the next page, absent on the last page.
    #[serde(rename = "odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
}

impl ListPoolsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][ListPoolsResult::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Pool>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [odata_next_link][ListPoolsResult::odata_next_link].
    pub fn set_odata_next_link<T: Into<String>>(mut self, v: T) -> Self {
        self.odata_next_link = Some(v.into());
        self
    }
}

impl PageableResponse for ListPoolsResult {
    fn next_link(&self) -> String {
        self.odata_next_link.clone().unwrap_or_default()
    }
}

/// The options for a pool resize.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PoolResizeParameters {
    /// The desired number of dedicated nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,

    /// The desired number of spot nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_spot_nodes: Option<i32>,
}

impl PoolResizeParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [target_dedicated_nodes][PoolResizeParameters::target_dedicated_nodes].
    pub fn set_target_dedicated_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.target_dedicated_nodes = Some(v.into());
        self
    }

    /// Sets the value of [target_spot_nodes][PoolResizeParameters::target_spot_nodes].
    pub fn set_target_spot_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.target_spot_nodes = Some(v.into());
        self
    }
}

/// The request message for listing supported platform images.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSupportedImagesRequest {
    /// The maximum number of items per page.
    pub max_results: Option<i32>,

    /// The continuation from a previous page.
    pub next_link: Option<String>,
}

/// The request message for listing pool node counts.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPoolNodeCountsRequest {
    /// The maximum number of items per page.
    pub max_results: Option<i32>,

    /// The continuation from a previous page.
    pub next_link: Option<String>,
}

/// The request message for adding a job.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddJobRequest {
    /// The job to add.
    pub job: Job,
}

/// The request message for fetching a job.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetJobRequest {
    /// The id of the job.
    pub job_id: String,
}

/// The request message for listing jobs.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListJobsRequest {
    /// The maximum number of items per page.
    pub max_results: Option<i32>,

    /// The continuation from a previous page.
    pub next_link: Option<String>,
}

/// The request message for deleting a job.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteJobRequest {
    /// The id of the job.
    pub job_id: String,
}

/// The request message for terminating a job.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TerminateJobRequest {
    /// The id of the job.
    pub job_id: String,

    /// The optional termination parameters.
    pub parameters: Option<JobTerminateParameters>,
}

/// The request message for adding a pool.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddPoolRequest {
    /// The pool to add.
    pub pool: Pool,
}

/// The request message for fetching a pool.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPoolRequest {
    /// The id of the pool.
    pub pool_id: String,
}

/// The request message for listing pools.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPoolsRequest {
    /// The maximum number of items per page.
    pub max_results: Option<i32>,

    /// The continuation from a previous page.
    pub next_link: Option<String>,
}

/// The request message for deleting a pool.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeletePoolRequest {
    /// The id of the pool.
    pub pool_id: String,
}

/// The request message for resizing a pool.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResizePoolRequest {
    /// The id of the pool.
    pub pool_id: String,

    /// The resize parameters.
    pub parameters: PoolResizeParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_serialization() -> anyhow::Result<()> {
        let job = Job::new()
            .set_id("job-001")
            .set_priority(100)
            .set_pool_info(PoolInformation::new().set_pool_id("pool-7"))
            .set_constraints(JobConstraints::new().set_max_task_retry_count(3));
        let got = serde_json::to_value(&job)?;
        let want = serde_json::json!({
            "id": "job-001",
            "priority": 100,
            "poolInfo": {"poolId": "pool-7"},
            "constraints": {"maxTaskRetryCount": 3},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn job_deserialization_ignores_unknown_fields() -> anyhow::Result<()> {
        let input = serde_json::json!({
            "id": "job-001",
            "state": "completed",
            "previousState": "terminating",
            "eTag": "0x8D\"",
            "undocumented": {"nested": true},
        });
        let job = serde_json::from_value::<Job>(input)?;
        assert_eq!(job.id, "job-001");
        assert_eq!(job.state, Some(JobState::Completed));
        assert_eq!(job.previous_state, Some(JobState::Terminating));
        Ok(())
    }

    #[test]
    fn list_result_next_link() {
        let page = ListJobsResult::new().set_odata_next_link("token-1");
        assert_eq!(page.next_link(), "token-1");
        let page = ListJobsResult::new();
        assert_eq!(page.next_link(), "");
    }

    #[test]
    fn list_result_wire_format() -> anyhow::Result<()> {
        let input = serde_json::json!({
            "value": [{"id": "job-001"}, {"id": "job-002"}],
            "odata.nextLink": "token-2",
        });
        let page = serde_json::from_value::<ListJobsResult>(input)?;
        assert_eq!(page.value.len(), 2);
        assert_eq!(page.odata_next_link.as_deref(), Some("token-2"));
        Ok(())
    }

    #[test]
    fn pool_serialization_skips_outputs() -> anyhow::Result<()> {
        let pool = Pool::new()
            .set_id("pool-7")
            .set_vm_size("standard_d2s_v3")
            .set_target_dedicated_nodes(4)
            .set_image_reference(
                ImageReference::new()
                    .set_publisher("canonical")
                    .set_offer("ubuntu-server")
                    .set_sku("24_04-lts"),
            );
        let got = serde_json::to_value(&pool)?;
        let want = serde_json::json!({
            "id": "pool-7",
            "vmSize": "standard_d2s_v3",
            "targetDedicatedNodes": 4,
            "imageReference": {
                "publisher": "canonical",
                "offer": "ubuntu-server",
                "sku": "24_04-lts",
            },
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn enum_wire_names() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(JobState::Active)?, "active");
        assert_eq!(serde_json::to_value(PoolState::Upgrading)?, "upgrading");
        assert_eq!(serde_json::to_value(OsType::Windows)?, "windows");
        Ok(())
    }
}
