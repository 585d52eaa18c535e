//! Typed analysis result: the response side of the model contract.
//!
//! Field names on the wire are camelCase, exactly as the declared response
//! schema spells them; parsing is verbatim, no transformation. The only
//! checks beyond shape are the contract invariants: score bounds and
//! non-empty roadmap/principles. The `riskLevel`/`safetyScore` correlation
//! is deliberately not checked (model-trusted).

use serde::{Deserialize, Serialize};

use crate::error::GuardianError;

/// Advocate risk classification. Any other wire value is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// Kind of document the drafter produced in the full-audit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    SupplementalDeed,
    NadraApplication,
    LegalBrief,
}

/// Civil-law analysis: narrative, score, district stats, ordered roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateBrief {
    pub analysis: String,
    pub safety_score: u8,
    pub risk_level: RiskLevel,
    pub stats: String,
    pub legal_roadmap: Vec<String>,
}

/// Religious perspective on the same situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShariaGuidance {
    pub context: String,
    pub principles: Vec<String>,
    pub guidance: String,
}

/// Education/work rights audit; present only in the full-audit variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpowermentAudit {
    pub education_right_status: String,
    pub work_right_status: String,
    pub remedial_action: String,
}

/// Optional health notes; the general variant may include them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthNotes {
    pub recommendations: Vec<String>,
    pub priority_level: String,
}

/// The one NGO the bridge selected from the embedded directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoReferral {
    pub name: String,
    pub contact: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoBridge {
    pub recommended_ngo: NgoReferral,
}

/// A document drafted for the user (full-audit variant only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftedDocument {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
}

/// The complete typed response of one guardian analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub advocate: AdvocateBrief,
    pub sharia_expert: ShariaGuidance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empowerment_audit: Option<EmpowermentAudit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_agent: Option<HealthNotes>,
    pub ngo_bridge: NgoBridge,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafted_document: Option<DraftedDocument>,
}

impl AnalysisResult {
    /// Parses the model's candidate text and checks the contract invariants.
    pub fn from_model_json(text: &str) -> Result<Self, GuardianError> {
        let result: Self = serde_json::from_str(text)?;
        result.check_contract()?;
        Ok(result)
    }

    fn check_contract(&self) -> Result<(), GuardianError> {
        if self.advocate.safety_score > 100 {
            return Err(GuardianError::ContractViolation(format!(
                "safetyScore {} outside 0..=100",
                self.advocate.safety_score
            )));
        }
        if self.advocate.legal_roadmap.is_empty() {
            return Err(GuardianError::ContractViolation(
                "legalRoadmap must not be empty".to_string(),
            ));
        }
        if self.sharia_expert.principles.is_empty() {
            return Err(GuardianError::ContractViolation(
                "principles must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_general_json() -> serde_json::Value {
        serde_json::json!({
            "advocate": {
                "analysis": "The contract omits the delegation clause.",
                "safetyScore": 62,
                "riskLevel": "Medium",
                "stats": "Lahore family courts resolved 1,200 maintenance cases last year.",
                "legalRoadmap": ["File under the Family Courts Act", "Request interim maintenance"]
            },
            "shariaExpert": {
                "context": "Haq Mehr is an absolute right of the wife.",
                "principles": ["Mehr is owed promptly unless deferred by consent"],
                "guidance": "Seek arbitration through the union council."
            },
            "healthAgent": {
                "recommendations": ["Schedule a wellness checkup"],
                "priorityLevel": "Routine"
            },
            "ngoBridge": {
                "recommendedNgo": {
                    "name": "Aurat Foundation",
                    "contact": "051-2608956",
                    "reason": "Legal aid matches a contract dispute."
                }
            }
        })
    }

    /// **Scenario**: a well-formed general response round-trips verbatim
    /// (parse then re-serialize equals the input).
    #[test]
    fn general_response_roundtrip_verbatim() {
        let input = sample_general_json();
        let parsed = AnalysisResult::from_model_json(&input.to_string()).unwrap();
        assert_eq!(parsed.advocate.safety_score, 62);
        assert_eq!(parsed.advocate.risk_level, RiskLevel::Medium);
        assert!(parsed.empowerment_audit.is_none());
        assert!(parsed.drafted_document.is_none());

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back, input);
    }

    /// **Scenario**: the full-audit extras parse, including the document type tag.
    #[test]
    fn full_audit_response_parses() {
        let mut input = sample_general_json();
        input["empowermentAudit"] = serde_json::json!({
            "educationRightStatus": "Granted in column 17",
            "workRightStatus": "Not recorded",
            "remedialAction": "Register a supplemental deed adding the work clause."
        });
        input["draftedDocument"] = serde_json::json!({
            "title": "Supplemental Deed",
            "content": "This deed amends column 17...",
            "type": "SupplementalDeed"
        });
        let parsed = AnalysisResult::from_model_json(&input.to_string()).unwrap();
        assert_eq!(
            parsed.drafted_document.as_ref().unwrap().kind,
            DocumentKind::SupplementalDeed
        );
        assert!(parsed.empowerment_audit.is_some());
    }

    /// **Scenario**: a riskLevel outside {Low, Medium, High} is a parse failure.
    #[test]
    fn unknown_risk_level_rejected() {
        let mut input = sample_general_json();
        input["advocate"]["riskLevel"] = serde_json::json!("Severe");
        let err = AnalysisResult::from_model_json(&input.to_string()).unwrap_err();
        assert!(matches!(err, GuardianError::MalformedResponse(_)));
    }

    /// **Scenario**: score over 100 and empty roadmap/principles are contract
    /// violations, not parse errors.
    #[test]
    fn contract_invariants_enforced() {
        let mut input = sample_general_json();
        input["advocate"]["safetyScore"] = serde_json::json!(150);
        assert!(matches!(
            AnalysisResult::from_model_json(&input.to_string()),
            Err(GuardianError::ContractViolation(_))
        ));

        let mut input = sample_general_json();
        input["advocate"]["legalRoadmap"] = serde_json::json!([]);
        assert!(matches!(
            AnalysisResult::from_model_json(&input.to_string()),
            Err(GuardianError::ContractViolation(_))
        ));

        let mut input = sample_general_json();
        input["shariaExpert"]["principles"] = serde_json::json!([]);
        assert!(matches!(
            AnalysisResult::from_model_json(&input.to_string()),
            Err(GuardianError::ContractViolation(_))
        ));
    }

    /// **Scenario**: a missing required section fails as malformed JSON shape.
    #[test]
    fn missing_required_section_rejected() {
        let mut input = sample_general_json();
        input.as_object_mut().unwrap().remove("ngoBridge");
        let err = AnalysisResult::from_model_json(&input.to_string()).unwrap_err();
        assert!(matches!(err, GuardianError::MalformedResponse(_)));
    }

    /// **Scenario**: a score of 90 with riskLevel High still parses; the
    /// correlation is model-trusted, not a contract rule.
    #[test]
    fn score_risk_correlation_not_enforced() {
        let mut input = sample_general_json();
        input["advocate"]["safetyScore"] = serde_json::json!(90);
        input["advocate"]["riskLevel"] = serde_json::json!("High");
        assert!(AnalysisResult::from_model_json(&input.to_string()).is_ok());
    }
}
