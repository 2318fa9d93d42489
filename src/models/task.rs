use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// Identifier of the user who owns the task. Never changes after creation.
    pub user_id: Uuid,
    /// The title of the task, trimmed and non-empty.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed `Task` owned by `user_id`.
    pub fn new(input: NewTask, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            completed: false,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a validated partial update in place.
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Must be non-empty once surrounding whitespace is removed.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title required"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self
    }
}

/// Payload for a partial update.
///
/// Each field distinguishes "absent" (`None`) from "explicitly null" (`Some(None)`).
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Option<bool>>,

    #[serde(default, deserialize_with = "present_due_date")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// A validated partial update, ready for the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub completed: Option<bool>,
    /// `Some(None)` clears the due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TryFrom<TaskPatch> for TaskChanges {
    type Error = AppError;

    fn try_from(patch: TaskPatch) -> Result<Self, Self::Error> {
        let title = match patch.title {
            None => None,
            Some(Some(title)) if !title.trim().is_empty() => Some(title.trim().to_string()),
            Some(_) => return Err(AppError::ValidationError("Title required".into())),
        };
        let completed = match patch.completed {
            None => None,
            Some(Some(completed)) => Some(completed),
            Some(None) => {
                return Err(AppError::ValidationError(
                    "Completed must be a boolean".into(),
                ))
            }
        };

        Ok(Self {
            title,
            completed,
            due_date: patch.due_date,
        })
    }
}

/// Formats tried, in order, for a due date without an offset. The value is taken as UTC.
const NAIVE_DUE_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a due date given as an RFC 3339 timestamp, a timestamp without offset
/// (seconds optional), or a bare calendar date (midnight UTC).
fn parse_due_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_DUE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

// An empty string means no due date.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_due_date(value.trim())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid due date: {}", value))),
    }
}

fn present_due_date<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_due_date(deserializer).map(Some)
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
