//! End-to-end flow tests: profile capture → inquiry → analysis → result,
//! against the mock model.
//!
//! Covers the three scripted scenarios: a successful free-text analysis in
//! Urdu, the column-17 audit prompt contents, and a simulated model failure
//! that must leave the session on the guardian view with one localized
//! notice.


use zeenat::{
    run_guardian_analysis, AppView, AuditFields, Inquiry, Language, MaritalStatus, MockModel,
    RiskLevel, SessionState, UserProfile,
};

fn lahore_profile() -> UserProfile {
    UserProfile {
        age: 25,
        district: "Lahore".to_string(),
        marital_status: MaritalStatus::Single,
        children_count: 0,
        is_employed: false,
        ..UserProfile::default()
    }
}

fn general_reply() -> String {
    serde_json::json!({
        "advocate": {
            "analysis": "آپ کو کام کرنے کا قانونی حق حاصل ہے۔",
            "safetyScore": 55,
            "riskLevel": "Medium",
            "stats": "لاہور میں گزشتہ سال خاندانی عدالتوں نے ہزاروں مقدمات نمٹائے۔",
            "legalRoadmap": ["یونین کونسل سے رجوع کریں", "خاندانی عدالت میں درخواست دیں"]
        },
        "shariaExpert": {
            "context": "اسلام میں عورت کے کام کرنے پر پابندی نہیں۔",
            "principles": ["نفقہ شوہر کی ذمہ داری ہے"],
            "guidance": "ثالثی کی کوشش کریں۔"
        },
        "ngoBridge": {
            "recommendedNgo": {
                "name": "Aurat Foundation",
                "contact": "051-2608956",
                "reason": "قانونی معاونت فراہم کرتی ہے۔"
            }
        }
    })
    .to_string()
}

fn full_audit_reply() -> String {
    let mut value: serde_json::Value = serde_json::from_str(&general_reply()).unwrap();
    value["empowermentAudit"] = serde_json::json!({
        "educationRightStatus": "Recorded in column 17",
        "workRightStatus": "Missing",
        "remedialAction": "Register a supplemental deed."
    });
    value["draftedDocument"] = serde_json::json!({
        "title": "Supplemental Deed",
        "content": "Deed text...",
        "type": "SupplementalDeed"
    });
    value.to_string()
}

/// Scenario 1: free-text inquiry in Urdu reaches the model and a success
/// lands the session on the result view with a valid risk level.
#[tokio::test]
async fn free_text_analysis_reaches_result_view() {
    let model = MockModel::with_reply(general_reply());
    let state = SessionState::new(Language::Ur)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();
    assert_eq!(state.view, AppView::Guardian);

    let inquiry = Inquiry::free_text("My husband refuses to let me work");
    let state = state.analyze(&inquiry, &model).await;

    assert_eq!(state.view, AppView::Result);
    assert!(!state.loading);
    assert!(state.notice.is_none());
    let result = state.result.as_ref().unwrap();
    assert!(matches!(
        result.advocate.risk_level,
        RiskLevel::Low | RiskLevel::Medium | RiskLevel::High
    ));

    // The prompt that reached the model carried the profile and the inquiry.
    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("- District: Lahore"));
    assert!(prompt.contains("My husband refuses to let me work"));
    assert!(prompt.contains("Respond entirely in Urdu."));
}

/// Scenario 2: the column-17 audit prompt carries the localized label in both
/// scripts, and the general schema variant is declared.
#[tokio::test]
async fn column_17_audit_prompt_contents() {
    let model = MockModel::with_reply(general_reply());
    let inquiry = Inquiry::column_audit(17).unwrap();
    let result =
        run_guardian_analysis(&model, &lahore_profile(), &inquiry, Language::Ur).await;
    assert!(result.is_ok());

    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("تعلیم اور ملازمت کا حق"));
    assert!(prompt.contains("Right to Education/Work"));

    let schema = model.last_schema().unwrap();
    assert!(schema["properties"]["draftedDocument"].is_null());
}

/// Scenario 3: a simulated model failure resets loading, keeps the guardian
/// view, and fires exactly one localized notice.
#[tokio::test]
async fn model_failure_keeps_guardian_view_with_one_notice() {
    let model = MockModel::failing();
    let state = SessionState::new(Language::Ur)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();

    let inquiry = Inquiry::free_text("مدد چاہیے");
    let state = state.analyze(&inquiry, &model).await;

    assert_eq!(state.view, AppView::Guardian);
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert_eq!(
        state.notice.as_deref(),
        Some("نظام مصروف ہے۔ براہ کرم دوبارہ کوشش کریں۔")
    );

    // English sessions get the English notice.
    let state = SessionState::new(Language::En)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();
    let state = state.analyze(&inquiry, &model).await;
    assert_eq!(state.notice.as_deref(), Some("System busy. Please try again."));
}

/// A malformed reply is the same user-facing failure as an outage.
#[tokio::test]
async fn malformed_reply_collapses_to_busy_notice() {
    let model = MockModel::with_reply("{not json");
    let state = SessionState::new(Language::En)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();
    let state = state.analyze(&Inquiry::free_text("help"), &model).await;
    assert_eq!(state.view, AppView::Guardian);
    assert!(state.notice.is_some());
}

/// The structured contract audit requests the full-audit schema and the
/// parsed result carries the empowerment audit and drafted document.
#[tokio::test]
async fn structured_audit_uses_full_schema_and_parses_extras() {
    let model = MockModel::with_reply(full_audit_reply());
    let state = SessionState::new(Language::En)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();

    let inquiry = Inquiry::structured_audit(AuditFields {
        col13_16: "50,000 PKR prompt, 100,000 PKR deferred".to_string(),
        col17: "Yes".to_string(),
        col18: "Stricken out".to_string(),
        ..AuditFields::default()
    });
    let state = state.analyze(&inquiry, &model).await;

    assert_eq!(state.view, AppView::Result);
    let result = state.result.as_ref().unwrap();
    assert!(result.empowerment_audit.is_some());
    assert!(result.drafted_document.is_some());

    let schema = model.last_schema().unwrap();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(required.contains(&"empowermentAudit"));
    assert!(required.contains(&"draftedDocument"));
}

/// A new analysis replaces the previous result after returning to Guardian.
#[tokio::test]
async fn new_analysis_replaces_prior_result() {
    let model = MockModel::with_reply(general_reply());
    let state = SessionState::new(Language::Ur)
        .open_profile()
        .submit_profile(lahore_profile())
        .unwrap();
    let state = state.analyze(&Inquiry::free_text("pehla"), &model).await;
    assert_eq!(state.view, AppView::Result);

    let state = state.new_analysis();
    assert_eq!(state.view, AppView::Guardian);
    assert!(state.result.is_none());

    let state = state.analyze(&Inquiry::free_text("doosra"), &model).await;
    assert_eq!(state.view, AppView::Result);
    assert!(state.result.is_some());
}
