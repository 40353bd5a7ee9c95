//! Todo record and id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use clubdesk_core::{Priority, TodoId};

/// One dashboard todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Creation-timestamp id, unique within the process.
    pub id: TodoId,
    /// Required title, trimmed.
    pub title: String,
    /// Optional description, trimmed.
    pub description: String,
    /// Defaults to low.
    pub priority: Priority,
    /// Optional due date string; empty when unset.
    pub due_date: String,
    /// Toggled in place by the dashboard's complete action.
    pub completed: bool,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next todo id: current time in milliseconds, bumped past the last issued
/// id so same-millisecond creations cannot collide.
#[must_use]
pub fn next_todo_id() -> TodoId {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or(now);
    TodoId::new(if now > prev { now } else { prev + 1 })
}
