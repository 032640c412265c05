//! Persistent client state
//!
//! 一个 JSON 文件存会话/购物车/最近订单。带版本号; 旧版无版本的
//! 状态能迁移, 读不懂的直接回到初始状态, 绝不因为状态文件坏掉
//! 卡死启动。

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::cart::Cart;
use crate::session::TableSession;
use crate::{ClientError, ClientResult};

/// Current on-disk schema version
pub const STATE_VERSION: u32 = 1;

/// Everything the customer client keeps between launches
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<TableSession>,
    #[serde(default)]
    pub cart: Cart,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<String>,
}

/// File-backed store for [`ClientState`]
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the saved state. Missing, corrupt or unrecognized files all
    /// produce a fresh default; loading never fails.
    pub fn load(&self) -> ClientState {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return fresh();
        };
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            warn!(path = %self.path.display(), "state file is not JSON, starting fresh");
            return fresh();
        };
        migrate(value)
    }

    pub fn save(&self, state: &ClientState) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ClientError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json).map_err(|e| ClientError::Storage(e.to_string()))
    }
}

fn fresh() -> ClientState {
    ClientState {
        version: STATE_VERSION,
        ..ClientState::default()
    }
}

/// Bring a stored blob up to the current schema.
///
/// - version == current: deserialize, then scrub junk ids
/// - no version field: legacy blob with the same field names, adopt and scrub
/// - anything else (newer, wrong type): reset
fn migrate(value: Value) -> ClientState {
    let version = value.get("version").and_then(Value::as_u64).unwrap_or(0) as u32;

    if version > STATE_VERSION {
        warn!(version, "state file from a newer client, starting fresh");
        return fresh();
    }

    match serde_json::from_value::<ClientState>(value) {
        Ok(state) => scrub(state),
        Err(_) => {
            warn!("state file did not match any known schema, starting fresh");
            fresh()
        }
    }
}

/// Drop ids that are literal junk ("", "undefined", "null") left behind by
/// older clients that stringified missing values.
fn scrub(mut state: ClientState) -> ClientState {
    if state
        .last_order_id
        .as_deref()
        .is_some_and(|id| !is_usable_id(id))
    {
        state.last_order_id = None;
    }
    if state
        .session
        .as_ref()
        .is_some_and(|s| !is_usable_id(&s.restaurant_id))
    {
        state.session = None;
    }
    state.version = STATE_VERSION;
    state
}

fn is_usable_id(id: &str) -> bool {
    let trimmed = id.trim();
    !trimmed.is_empty() && trimmed != "undefined" && trimmed != "null"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> StateStore {
        StateStore::new(dir.path().join("state.json"))
    }

    #[test]
    fn missing_file_loads_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = store_in(&dir).load();
        assert_eq!(state.version, STATE_VERSION);
        assert!(state.session.is_none());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = ClientState {
            version: STATE_VERSION,
            session: Some(TableSession {
                restaurant_id: "r1".into(),
                table_number: 4,
                table_id: Some("t9".into()),
                restaurant_name: Some("Golden Wok".into()),
            }),
            ..ClientState::default()
        };
        state.last_order_id = Some("o1".into());

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn corrupt_file_resets() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), fresh());
    }

    #[test]
    fn legacy_unversioned_blob_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"session":{"restaurantId":"r1","tableNumber":4},"lastOrderId":"o1"}"#,
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(
            state.session.as_ref().map(|s| s.table_number),
            Some(4)
        );
        assert_eq!(state.last_order_id.as_deref(), Some("o1"));
    }

    #[test]
    fn junk_ids_are_scrubbed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"version":1,"session":{"restaurantId":"undefined","tableNumber":2},"lastOrderId":"null"}"#,
        )
        .unwrap();

        let state = store.load();
        assert!(state.session.is_none());
        assert!(state.last_order_id.is_none());
    }

    #[test]
    fn newer_version_resets_instead_of_guessing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"version":99,"lastOrderId":"o1"}"#).unwrap();
        assert_eq!(store.load(), fresh());
    }
}
