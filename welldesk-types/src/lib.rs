//! Shared record types for the Welldesk portal core.
//!
//! The backing store is schema-less and hand-edited, so rows arrive as
//! stringly-typed cell maps. All coercion from that world into typed
//! records happens here, at one boundary: `from_row` never fails, missing
//! columns become empty strings, and optional fields treat `""` and the
//! stringified `"nan"` as absent. `to_row` converts back for writes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized table row: trimmed, lowercased column names mapped to
/// trimmed text cells.
pub type Row = BTreeMap<String, String>;

/// Returns the named cell, or an empty string when the column is missing.
fn cell(row: &Row, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

/// Returns the named cell as an optional field.
///
/// Empty cells and the literal `"nan"` (any case) both mean absent; the
/// latter is how upstream numeric tooling stringifies missing values.
fn optional_cell(row: &Row, column: &str) -> Option<String> {
    let value = cell(row, column);
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(value)
    }
}

fn insert_optional(row: &mut Row, column: &str, value: &Option<String>) {
    row.insert(column.to_string(), value.clone().unwrap_or_default());
}

/// A studio (tenant) row from CONFIG_STUDIOS.
///
/// Passwords are stored and compared in plaintext; that is the external
/// data contract of the shared store, not a choice made here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioRecord {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub logo_url: Option<String>,
    pub style_guide: String,
    /// Raw enrollment date text; parsed by the trial gate, never here.
    pub enrollment_date: String,
    /// Raw paid flag text; `"SI"` after trim+uppercase means paid.
    pub paid: String,
}

impl StudioRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            username: cell(row, "username"),
            password: cell(row, "password"),
            display_name: cell(row, "display_name"),
            logo_url: optional_cell(row, "logo_url"),
            style_guide: cell(row, "style_guide"),
            enrollment_date: cell(row, "enrollment_date"),
            paid: cell(row, "paid"),
        }
    }

    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("username".into(), self.username.clone());
        row.insert("password".into(), self.password.clone());
        row.insert("display_name".into(), self.display_name.clone());
        insert_optional(&mut row, "logo_url", &self.logo_url);
        row.insert("style_guide".into(), self.style_guide.clone());
        row.insert("enrollment_date".into(), self.enrollment_date.clone());
        row.insert("paid".into(), self.paid.clone());
        row
    }

    /// True when the paid flag reads `"SI"` after trim and uppercase.
    pub fn is_paid(&self) -> bool {
        self.paid.trim().to_uppercase() == "SI"
    }
}

/// A client row from CLIENTS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub username: String,
    pub password: String,
    pub full_name: String,
    /// Loose reference to `StudioRecord::username`; nothing enforces it.
    pub tenant_username: String,
    pub physical_data: Option<String>,
    pub goal: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            username: cell(row, "username"),
            password: cell(row, "password"),
            full_name: cell(row, "full_name"),
            tenant_username: cell(row, "tenant_username"),
            physical_data: optional_cell(row, "physical_data"),
            goal: optional_cell(row, "goal"),
            email: optional_cell(row, "email"),
            phone: optional_cell(row, "phone"),
        }
    }

    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("username".into(), self.username.clone());
        row.insert("password".into(), self.password.clone());
        row.insert("full_name".into(), self.full_name.clone());
        row.insert("tenant_username".into(), self.tenant_username.clone());
        insert_optional(&mut row, "physical_data", &self.physical_data);
        insert_optional(&mut row, "goal", &self.goal);
        insert_optional(&mut row, "email", &self.email);
        insert_optional(&mut row, "phone", &self.phone);
        row
    }
}

/// One generated plan document from PLANS.
///
/// PLANS is append-only: rows are never updated or deleted, and "the
/// current plan for a client" means the last row in table order, not the
/// row with the newest `assigned_at` text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub client_username: String,
    /// Textual timestamp, format fixed at write time and never validated
    /// on read.
    pub assigned_at: String,
    pub plan_text: String,
    pub internal_note: String,
}

impl PlanRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            client_username: cell(row, "client_username"),
            assigned_at: cell(row, "assigned_at"),
            plan_text: cell(row, "plan_text"),
            internal_note: cell(row, "internal_note"),
        }
    }

    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("client_username".into(), self.client_username.clone());
        row.insert("assigned_at".into(), self.assigned_at.clone());
        row.insert("plan_text".into(), self.plan_text.clone());
        row.insert("internal_note".into(), self.internal_note.clone());
        row
    }
}

/// Which kind of principal a session belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Studio,
    Client,
}
