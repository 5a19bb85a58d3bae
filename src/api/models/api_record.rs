use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ApiRecordId = String;

/// One row of a table exactly as the service returns it. Field values are passed through as raw
/// JSON, nothing in this crate interprets or validates them.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct ApiRecord {
    id: ApiRecordId,

    #[serde(rename = "createdTime")]
    created_time: String,

    #[serde(default)]
    fields: Map<String, Value>,
}

impl ApiRecord {
    pub fn id(&self) -> ApiRecordId {
        self.id.clone()
    }

    pub fn created_time(&self) -> &str {
        &self.created_time
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Reassembles the record into the raw JSON object shape it arrived in, for callers that hand
    /// records onward without caring about this crate's types.
    pub fn into_raw(self) -> Value {
        let mut raw = Map::new();

        raw.insert("id".to_string(), Value::String(self.id));
        raw.insert("createdTime".to_string(), Value::String(self.created_time));
        raw.insert("fields".to_string(), Value::Object(self.fields));

        Value::Object(raw)
    }
}
