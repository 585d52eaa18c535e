//! The three inquiry shapes a guardian analysis can start from.
//!
//! Tagged union, dispatched explicitly at the call site: free text from the
//! voice/text box, a single-column audit from the interactive contract map,
//! or the structured multi-field contract audit covering clauses 13–22.
//! The serialized payloads reproduce the wire shapes the model was tuned on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::{self, ReferenceColumn};
use crate::schema::SchemaVariant;

/// Free-text values of the structured contract-audit form, one per clause
/// group. Field names double as the wire keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub col13_16: String,
    pub col17: String,
    pub col18: String,
    pub col19: String,
    pub col20: String,
    pub col21: String,
    pub col22: String,
}

/// Inquiry construction failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    /// The requested column is not in the reference table (7–12 and 23 are
    /// absent by design).
    #[error("no reference entry for Nikkah Nama column {0}")]
    UnknownColumn(u8),
}

/// One analysis request payload. Created per request, discarded after send.
#[derive(Debug, Clone, PartialEq)]
pub enum Inquiry {
    /// Free-form situation description (typed or dictated).
    FreeText(String),
    /// Audit of a single numbered column from the interactive contract map.
    ColumnAudit {
        column_id: u8,
        column: &'static ReferenceColumn,
    },
    /// The full structured contract audit (clauses 13–22).
    StructuredAudit(AuditFields),
}

impl Inquiry {
    pub fn free_text(text: impl Into<String>) -> Self {
        Inquiry::FreeText(text.into())
    }

    /// Builds a single-column audit; fails for ids absent from the table.
    pub fn column_audit(column_id: u8) -> Result<Self, InquiryError> {
        let column =
            reference::column(column_id).ok_or(InquiryError::UnknownColumn(column_id))?;
        Ok(Inquiry::ColumnAudit { column_id, column })
    }

    pub fn structured_audit(fields: AuditFields) -> Self {
        Inquiry::StructuredAudit(fields)
    }

    /// Which response-schema configuration this inquiry requests: the full
    /// contract audit asks for the empowerment audit and a drafted document,
    /// everything else is a general inquiry.
    pub fn schema_variant(&self) -> SchemaVariant {
        match self {
            Inquiry::StructuredAudit(_) => SchemaVariant::FullAudit,
            Inquiry::FreeText(_) | Inquiry::ColumnAudit { .. } => SchemaVariant::GeneralInquiry,
        }
    }

    /// Serialized representation embedded in the prompt's `CONTEXT:` line:
    /// the text itself for free text, a stringified object otherwise.
    pub fn context_payload(&self) -> String {
        match self {
            Inquiry::FreeText(text) => text.clone(),
            Inquiry::ColumnAudit { column, .. } => serde_json::json!({
                "action": "Audit Column",
                "column": column,
            })
            .to_string(),
            Inquiry::StructuredAudit(fields) => serde_json::json!({
                "type": "Structured Nikkah Nama Audit",
                "data": fields,
            })
            .to_string(),
        }
    }
}
