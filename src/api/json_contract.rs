use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WidgetError, WidgetResult};
use crate::render::DisplayRegion;

use super::{Controller, WidgetSnapshot};

pub const WIDGET_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around a [`WidgetSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: WidgetSnapshot,
}

impl WidgetSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> WidgetResult<String> {
        let payload = WidgetSnapshotJsonContractV1 {
            schema_version: WIDGET_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| json_error("serialize", &e))
    }

    /// Reads a versioned payload, or a bare snapshot when no
    /// `schema_version` key is present.
    pub fn from_json_compat_str(input: &str) -> WidgetResult<Self> {
        let mut value: Value = serde_json::from_str(input).map_err(|e| json_error("parse", &e))?;
        let version = value.get("schema_version").map(Value::as_u64);
        let body = match version {
            None => value,
            Some(Some(version)) if version == u64::from(WIDGET_SNAPSHOT_JSON_SCHEMA_V1) => {
                value["snapshot"].take()
            }
            Some(version) => {
                return Err(WidgetError::InvalidData(format!(
                    "unsupported snapshot schema version: {}",
                    version.map_or_else(|| "non-numeric".to_owned(), |v| v.to_string())
                )));
            }
        };
        serde_json::from_value(body).map_err(|e| json_error("decode", &e))
    }
}

fn json_error(action: &str, err: &serde_json::Error) -> WidgetError {
    WidgetError::InvalidData(format!("failed to {action} widget snapshot json: {err}"))
}

impl<R: DisplayRegion> Controller<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> WidgetResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
