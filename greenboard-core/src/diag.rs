//! Soft diagnostics.
//!
//! Problems that degrade a single field or cell never fail the run: they
//! become `Diagnostic` values carried alongside the result (and logged by
//! the components that detect them). Anything that prevents building a
//! well-formed block list is a `BoardError` instead.

use crate::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of soft problem was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A vocabulary field had no matching header column in a block
    MissingColumn { field: FieldName },
    /// A config key matched but its value cell could not be read as a bool
    UnreadableConfigValue { key: String },
}

/// One soft-warning record, attributed to a sheet and optionally a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub sheet: String,
    pub block: Option<String>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn missing_column(sheet: &str, block: &str, field: FieldName) -> Self {
        Self {
            sheet: sheet.to_string(),
            block: Some(block.to_string()),
            kind: DiagnosticKind::MissingColumn { field },
        }
    }

    pub fn unreadable_config_value(sheet: &str, key: &str) -> Self {
        Self {
            sheet: sheet.to_string(),
            block: None,
            kind: DiagnosticKind::UnreadableConfigValue {
                key: key.to_string(),
            },
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingColumn { field } => {
                write!(f, "sheet '{}'", self.sheet)?;
                if let Some(block) = &self.block {
                    write!(f, ", block '{block}'")?;
                }
                write!(f, ": no column matched header '{}'", field.header_text())
            }
            DiagnosticKind::UnreadableConfigValue { key } => write!(
                f,
                "sheet '{}': config key '{key}' has an unreadable value, keeping previous setting",
                self.sheet
            ),
        }
    }
}
