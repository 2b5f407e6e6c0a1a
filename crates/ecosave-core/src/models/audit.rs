use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Client name used when a new audit is saved without one.
pub const DEFAULT_CLIENT_NAME: &str = "Onbekend";

/// Property label used when a new audit is saved without one.
pub const DEFAULT_PROPERTY_TYPE: &str = "Woning";

/// A site audit recorded by a sales advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditRecord {
    pub id: Uuid,
    pub client_name: String,
    pub address: String,
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    /// Free-text label, e.g. "Tussenwoning" or "Bedrijfspand".
    pub property_type: String,
    pub notes: String,
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuditStatus {
    Pending,
    /// Only assigned to imported or seeded records; no transition leads here.
    Completed,
    Analyzed,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "pending",
            AuditStatus::Completed => "completed",
            AuditStatus::Analyzed => "analyzed",
        }
    }

    /// Whether an analysis may still be attached.
    pub fn can_analyze(&self) -> bool {
        !matches!(self, AuditStatus::Analyzed)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields entered on the "new audit" form. Every field may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct NewAudit {
    pub client_name: String,
    pub address: String,
    pub property_type: String,
    pub notes: String,
}

impl NewAudit {
    /// Turn the form into a pending record, filling an empty name or property
    /// type with its default. Whitespace is kept as entered.
    pub fn into_record(self, id: Uuid, date: jiff::civil::Date) -> AuditRecord {
        AuditRecord {
            id,
            client_name: or_default(self.client_name, DEFAULT_CLIENT_NAME),
            address: self.address,
            date,
            property_type: or_default(self.property_type, DEFAULT_PROPERTY_TYPE),
            notes: self.notes,
            status: AuditStatus::Pending,
            ai_analysis: None,
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
