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

//! The messages exchanged with the Stratus Digital Twins service.

use gax::paginator::PageableResponse;

/// The system metadata of a digital twin.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DigitalTwinMetadata {
    /// The id of the model the twin conforms to.
    #[serde(rename = "$model", skip_serializing_if = "String::is_empty")]
    pub model: String,
}

impl DigitalTwinMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [model][DigitalTwinMetadata::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }
}

/// A digital twin.
///
/// The system properties use `$`-prefixed names on the wire; everything else
/// is model-defined and kept as raw JSON in [contents][DigitalTwin::contents].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DigitalTwin {
    /// The id of the twin, unique within the instance.
    #[serde(rename = "$dtId", skip_serializing_if = "String::is_empty")]
    pub dt_id: String,

    /// The ETag of the twin. Output only.
    #[serde(rename = "$etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The system metadata of the twin.
    #[serde(rename = "$metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DigitalTwinMetadata>,

    /// The model-defined properties of the twin.
    #[serde(flatten)]
    pub contents: serde_json::Map<String, serde_json::Value>,
}

impl DigitalTwin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [dt_id][DigitalTwin::dt_id].
    pub fn set_dt_id<T: Into<String>>(mut self, v: T) -> Self {
        self.dt_id = v.into();
        self
    }

    /// Sets the value of [metadata][DigitalTwin::metadata].
    pub fn set_metadata<T: Into<DigitalTwinMetadata>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets one model-defined property of the twin.
    pub fn set_content<K, V>(mut self, k: K, v: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.contents.insert(k.into(), v.into());
        self
    }
}

/// A query over the twins in an instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QuerySpecification {
    /// The query text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,

    /// The continuation from a previous page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl QuerySpecification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [query][QuerySpecification::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [continuation_token][QuerySpecification::continuation_token].
    pub fn set_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
        self.continuation_token = Some(v.into());
        self
    }
}

/// One page of query results.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryResult {
    /// The twins in this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<DigitalTwin>,

    /// The continuation for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl QueryResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][QueryResult::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DigitalTwin>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [continuation_token][QueryResult::continuation_token].
    pub fn set_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
        self.continuation_token = Some(v.into());
        self
    }
}

impl PageableResponse for QueryResult {
    fn next_link(&self) -> String {
        self.continuation_token.clone().unwrap_or_default()
    }
}

/// The request message for fetching a twin.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDigitalTwinRequest {
    /// The id of the twin.
    pub twin_id: String,
}

/// The request message for creating or replacing a twin.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateOrReplaceDigitalTwinRequest {
    /// The id of the twin.
    pub twin_id: String,

    /// The twin to store.
    pub twin: DigitalTwin,

    /// If `true`, fail instead of replacing an existing twin.
    pub if_none_match: bool,
}

/// The request message for deleting a twin.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDigitalTwinRequest {
    /// The id of the twin.
    pub twin_id: String,

    /// Only delete the twin if its ETag matches.
    pub if_match: Option<String>,
}

/// The request message for querying twins.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryTwinsRequest {
    /// The query to run.
    pub specification: QuerySpecification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn twin_wire_format() -> anyhow::Result<()> {
        let twin = DigitalTwin::new()
            .set_dt_id("thermostat-17")
            .set_metadata(DigitalTwinMetadata::new().set_model("dtmi:stratus:Thermostat;1"))
            .set_content("temperature", 21.5)
            .set_content("unit", "celsius");
        let got = serde_json::to_value(&twin)?;
        let want = json!({
            "$dtId": "thermostat-17",
            "$metadata": {"$model": "dtmi:stratus:Thermostat;1"},
            "temperature": 21.5,
            "unit": "celsius",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn twin_roundtrip_keeps_contents() -> anyhow::Result<()> {
        let input = json!({
            "$dtId": "thermostat-17",
            "$etag": "W/\"a\"",
            "$metadata": {"$model": "dtmi:stratus:Thermostat;1"},
            "temperature": 19.0,
        });
        let twin = serde_json::from_value::<DigitalTwin>(input)?;
        assert_eq!(twin.dt_id, "thermostat-17");
        assert_eq!(twin.etag.as_deref(), Some("W/\"a\""));
        assert_eq!(twin.contents.get("temperature"), Some(&json!(19.0)));
        Ok(())
    }

    #[test]
    fn query_specification_wire_format() -> anyhow::Result<()> {
        let spec = QuerySpecification::new()
            .set_query("SELECT * FROM digitaltwins")
            .set_continuation_token("page-2");
        let got = serde_json::to_value(&spec)?;
        let want = json!({
            "query": "SELECT * FROM digitaltwins",
            "continuationToken": "page-2",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn query_result_next_link() {
        let page = QueryResult::new().set_continuation_token("page-2");
        assert_eq!(page.next_link(), "page-2");
        assert_eq!(QueryResult::new().next_link(), "");
    }
}
