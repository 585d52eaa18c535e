//! The declared response schema: the strict shape the model's output must
//! conform to.
//!
//! Configuration, not computation. The schema tree is statically defined and
//! built once per variant; it serializes to the provider wire format
//! (uppercase `"type"` tags, per-object `required` lists). Two named
//! configurations exist: [`SchemaVariant::GeneralInquiry`] for free-text and
//! single-column inquiries, [`SchemaVariant::FullAudit`] for the structured
//! contract audit, which additionally requires the empowerment audit and a
//! drafted document.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Which response-schema configuration a request declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// Free-text or single-column inquiry: no empowerment audit, no document.
    GeneralInquiry,
    /// Structured contract audit: empowerment audit and drafted document
    /// become required sections.
    FullAudit,
}

impl SchemaVariant {
    /// The schema tree for this variant.
    pub fn schema(self) -> &'static SchemaNode {
        match self {
            SchemaVariant::GeneralInquiry => &GENERAL_INQUIRY,
            SchemaVariant::FullAudit => &FULL_AUDIT,
        }
    }
}

/// Wire type tags of the provider's schema dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    #[serde(rename = "OBJECT")]
    Object,
    #[serde(rename = "ARRAY")]
    Array,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INTEGER")]
    Integer,
}

/// One node of the declared response schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<&'static str, SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'static str>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<&'static str>,
}

impl SchemaNode {
    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::leaf(SchemaType::Integer)
    }

    pub fn string_enum(values: &[&'static str]) -> Self {
        SchemaNode {
            enum_values: values.to_vec(),
            ..Self::leaf(SchemaType::String)
        }
    }

    pub fn array_of(items: SchemaNode) -> Self {
        SchemaNode {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    pub fn object(
        properties: impl IntoIterator<Item = (&'static str, SchemaNode)>,
        required: &[&'static str],
    ) -> Self {
        SchemaNode {
            kind: SchemaType::Object,
            properties: properties.into_iter().collect(),
            items: None,
            required: required.to_vec(),
            enum_values: Vec::new(),
        }
    }

    fn leaf(kind: SchemaType) -> Self {
        SchemaNode {
            kind,
            properties: BTreeMap::new(),
            items: None,
            required: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// True when `key` is in this object's required list.
    pub fn requires(&self, key: &str) -> bool {
        self.required.contains(&key)
    }

    /// The node for a property of an object schema.
    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        self.properties.get(key)
    }
}

fn advocate() -> SchemaNode {
    SchemaNode::object(
        [
            ("analysis", SchemaNode::string()),
            ("safetyScore", SchemaNode::integer()),
            ("riskLevel", SchemaNode::string_enum(&["Low", "Medium", "High"])),
            ("stats", SchemaNode::string()),
            ("legalRoadmap", SchemaNode::array_of(SchemaNode::string())),
        ],
        &["analysis", "safetyScore", "riskLevel", "stats", "legalRoadmap"],
    )
}

fn sharia_expert() -> SchemaNode {
    SchemaNode::object(
        [
            ("context", SchemaNode::string()),
            ("principles", SchemaNode::array_of(SchemaNode::string())),
            ("guidance", SchemaNode::string()),
        ],
        &["context", "principles", "guidance"],
    )
}

fn health_agent() -> SchemaNode {
    SchemaNode::object(
        [
            ("recommendations", SchemaNode::array_of(SchemaNode::string())),
            ("priorityLevel", SchemaNode::string()),
        ],
        &[],
    )
}

fn ngo_bridge() -> SchemaNode {
    SchemaNode::object(
        [(
            "recommendedNgo",
            SchemaNode::object(
                [
                    ("name", SchemaNode::string()),
                    ("contact", SchemaNode::string()),
                    ("reason", SchemaNode::string()),
                ],
                &[],
            ),
        )],
        &["recommendedNgo"],
    )
}

fn empowerment_audit() -> SchemaNode {
    SchemaNode::object(
        [
            ("educationRightStatus", SchemaNode::string()),
            ("workRightStatus", SchemaNode::string()),
            ("remedialAction", SchemaNode::string()),
        ],
        &["educationRightStatus", "workRightStatus", "remedialAction"],
    )
}

fn drafted_document() -> SchemaNode {
    SchemaNode::object(
        [
            ("title", SchemaNode::string()),
            ("content", SchemaNode::string()),
            (
                "type",
                SchemaNode::string_enum(&["SupplementalDeed", "NadraApplication", "LegalBrief"]),
            ),
        ],
        &["title", "content", "type"],
    )
}

static GENERAL_INQUIRY: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::object(
        [
            ("advocate", advocate()),
            ("shariaExpert", sharia_expert()),
            ("healthAgent", health_agent()),
            ("ngoBridge", ngo_bridge()),
        ],
        &["advocate", "shariaExpert", "ngoBridge"],
    )
});

static FULL_AUDIT: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::object(
        [
            ("advocate", advocate()),
            ("shariaExpert", sharia_expert()),
            ("empowermentAudit", empowerment_audit()),
            ("healthAgent", health_agent()),
            ("ngoBridge", ngo_bridge()),
            ("draftedDocument", drafted_document()),
        ],
        &[
            "advocate",
            "shariaExpert",
            "empowermentAudit",
            "ngoBridge",
            "draftedDocument",
        ],
    )
});
