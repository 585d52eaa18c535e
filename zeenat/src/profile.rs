//! User profile captured before any analysis.
//!
//! One in-memory record per session, editable until submission, never
//! persisted. Validation happens here, before the request builder stage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference;

/// Marital status options of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widow,
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widow => "Widow",
        };
        f.write_str(s)
    }
}

/// Profile validation failure; surfaced before the request stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("age must be greater than zero")]
    InvalidAge,
    #[error("unknown district: {0}")]
    UnknownDistrict(String),
}

/// The profile record embedded in every analysis prompt.
///
/// `name` and `cnic` are captured by the form but never reach the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    pub age: u32,
    pub district: String,
    pub marital_status: MaritalStatus,
    pub children_count: u32,
    pub is_employed: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: None,
            cnic: None,
            age: 25,
            district: "Islamabad (ICT)".to_string(),
            marital_status: MaritalStatus::Single,
            children_count: 0,
            is_employed: false,
        }
    }
}

impl UserProfile {
    /// Checks the structural constraints: positive age, known district.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::InvalidAge);
        }
        if !reference::is_known_district(&self.district) {
            return Err(ProfileError::UnknownDistrict(self.district.clone()));
        }
        Ok(())
    }

    /// Employment wording used by the prompt block.
    pub fn employment_label(&self) -> &'static str {
        if self.is_employed {
            "Employed"
        } else {
            "Unemployed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: the default profile mirrors the product form defaults and
    /// passes validation.
    #[test]
    fn default_profile_is_valid() {
        let profile = UserProfile::default();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.district, "Islamabad (ICT)");
        assert_eq!(profile.marital_status, MaritalStatus::Single);
        assert!(profile.validate().is_ok());
    }

    /// **Scenario**: zero age and unknown district are rejected with distinct errors.
    #[test]
    fn validation_rejects_bad_fields() {
        let mut profile = UserProfile::default();
        profile.age = 0;
        assert_eq!(profile.validate(), Err(ProfileError::InvalidAge));

        let mut profile = UserProfile::default();
        profile.district = "Atlantis".to_string();
        assert_eq!(
            profile.validate(),
            Err(ProfileError::UnknownDistrict("Atlantis".to_string()))
        );
    }

    /// **Scenario**: camelCase wire names, optional fields omitted when absent.
    #[test]
    fn serde_wire_shape() {
        let profile = UserProfile {
            is_employed: true,
            ..UserProfile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["maritalStatus"], "Single");
        assert_eq!(json["childrenCount"], 0);
        assert_eq!(json["isEmployed"], true);
        assert!(json.get("name").is_none());
        assert!(json.get("cnic").is_none());
    }
}
