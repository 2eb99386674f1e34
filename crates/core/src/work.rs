//! Work item domain: status enum, request payload, and field validation.
//!
//! A request body arrives as a [`WorkPayload`] where every field is optional
//! at the type level, so that a missing field surfaces as a field violation
//! (400) instead of a body-binding failure. [`validate_work`] produces the
//! violation list; [`WorkPayload::into_draft`] turns a clean payload into a
//! storable [`WorkDraft`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::{Date, DbId};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Entity name used in not-found errors and log fields.
pub const WORK_ENTITY: &str = "Work";

/* --------------------------------------------------------------------------
Status
-------------------------------------------------------------------------- */

/// Lifecycle status of a work item, stored and transmitted by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    Planning,
    Doing,
    Complete,
}

impl WorkStatus {
    /// Every status, in declaration order.
    pub const ALL: [WorkStatus; 3] = [WorkStatus::Planning, WorkStatus::Doing, WorkStatus::Complete];

    /// Symbolic name as stored in the `works.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::Planning => "PLANNING",
            WorkStatus::Doing => "DOING",
            WorkStatus::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = CoreError;

    /// Names are matched exactly; `planning` is not a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown work status: '{s}'. Valid statuses: {}",
                    status_names()
                ))
            })
    }
}

impl TryFrom<String> for WorkStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn status_names() -> String {
    WorkStatus::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/* --------------------------------------------------------------------------
Payload and draft
-------------------------------------------------------------------------- */

/// A single field-level validation failure, keyed by the JSON field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Raw create/update request body.
///
/// `id` is accepted but never trusted: create discards it and update
/// replaces it with the path id.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkPayload {
    pub id: Option<DbId>,

    #[serde(rename = "workName")]
    #[validate(
        required(message = "workName is required"),
        length(min = 2, max = 100, message = "workName must be between 2 and 100 characters")
    )]
    pub work_name: Option<String>,

    #[serde(rename = "startDate")]
    #[validate(required(message = "startDate is required"))]
    pub start_date: Option<Date>,

    #[serde(rename = "endDate")]
    #[validate(required(message = "endDate is required"))]
    pub end_date: Option<Date>,

    #[validate(required(message = "status is required"))]
    pub status: Option<String>,
}

/// A validated work record ready for the store.
///
/// `id == None` asks the store to assign a fresh id; `Some(id)` replaces the
/// record with that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDraft {
    pub id: Option<DbId>,
    pub work_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: WorkStatus,
}

impl WorkPayload {
    /// Validate and convert into a [`WorkDraft`].
    pub fn into_draft(self) -> Result<WorkDraft, Vec<FieldViolation>> {
        let violations = validate_work(&self);
        let status = self
            .status
            .as_deref()
            .and_then(|s| s.parse::<WorkStatus>().ok());

        match (self.work_name, self.start_date, self.end_date, status) {
            (Some(work_name), Some(start_date), Some(end_date), Some(status))
                if violations.is_empty() =>
            {
                Ok(WorkDraft {
                    id: self.id,
                    work_name,
                    start_date,
                    end_date,
                    status,
                })
            }
            _ => Err(violations),
        }
    }
}

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Check a payload against the work field constraints.
///
/// Returns every violation found, ordered by field name. An empty vector
/// means the payload is valid. `endDate` before `startDate` is allowed.
pub fn validate_work(payload: &WorkPayload) -> Vec<FieldViolation> {
    let mut violations = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(&errors),
    };

    if let Some(status) = payload.status.as_deref() {
        if status.parse::<WorkStatus>().is_err() {
            violations.push(FieldViolation {
                field: "status".to_string(),
                code: "status".to_string(),
                message: format!("status must be one of {}", status_names()),
            });
        }
    }

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = wire_field_name(&field);
            field_errors.iter().map(move |err| FieldViolation {
                field: field.clone(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect()
}

/// Convert a `snake_case` field name to its `camelCase` JSON name.
/// Already camel-cased names pass through unchanged.
fn wire_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
