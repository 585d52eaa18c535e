//! Fan-out of one typed result into independent report panels.
//!
//! Pure mapping for a presentation layer: each panel carries its localized
//! heading, its icon name, and the slice of the result it renders. No
//! styling here.

use crate::language::Language;
use crate::locale::strings;
use crate::profile::UserProfile;
use crate::reference;
use crate::report::{AnalysisResult, EmpowermentAudit, HealthNotes, RiskLevel};

/// One numbered step of the legal roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapStep {
    /// 1-based position.
    pub number: usize,
    pub text: String,
}

/// The advocate brief panel plus the score sidebar it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvocatePanel {
    pub heading: &'static str,
    pub icon: &'static str,
    pub analysis: String,
    /// "District Insight: <district>" headline for the stats box.
    pub district_insight: String,
    pub stats: String,
    pub roadmap_heading: &'static str,
    pub roadmap: Vec<RoadmapStep>,
    pub score_heading: &'static str,
    pub safety_score: u8,
    pub risk_level: RiskLevel,
    /// "<level> Risk" / "<level> خطرہ".
    pub risk_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShariaPanel {
    pub heading: &'static str,
    pub icon: &'static str,
    pub context: String,
    pub principles: Vec<String>,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpowermentPanel {
    pub heading: &'static str,
    pub icon: &'static str,
    pub remedial_heading: &'static str,
    pub audit: EmpowermentAudit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthPanel {
    pub heading: &'static str,
    pub icon: &'static str,
    pub notes: HealthNotes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgoPanel {
    pub heading: &'static str,
    pub icon: &'static str,
    pub name: String,
    pub contact: String,
    pub reason: String,
    pub contact_cta: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPanel {
    pub icon: &'static str,
    pub title: String,
    pub content: String,
    pub download_label: &'static str,
    pub copy_label: &'static str,
}

/// Everything the result view renders, one record per panel; optional
/// sections stay `None` when the result lacks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPanels {
    pub heading: &'static str,
    pub verified_badge: &'static str,
    pub new_analysis_label: &'static str,
    pub drafted_document: Option<DocumentPanel>,
    pub empowerment: Option<EmpowermentPanel>,
    pub advocate: AdvocatePanel,
    pub sharia: ShariaPanel,
    pub health: Option<HealthPanel>,
    pub ngo: NgoPanel,
    pub disclaimer: &'static str,
}

/// Maps a typed result into the report panels for one language.
pub fn compose(
    result: &AnalysisResult,
    profile: &UserProfile,
    language: Language,
) -> ReportPanels {
    let t = strings(language);
    let icon = |key: &str| reference::icon(key).unwrap_or("info-circle");

    ReportPanels {
        heading: t.report_heading,
        verified_badge: t.verified_badge,
        new_analysis_label: t.new_analysis,
        drafted_document: result.drafted_document.as_ref().map(|doc| DocumentPanel {
            icon: icon("file"),
            title: doc.title.clone(),
            content: doc.content.clone(),
            download_label: t.download_draft,
            copy_label: t.copy_draft,
        }),
        empowerment: result.empowerment_audit.as_ref().map(|audit| EmpowermentPanel {
            heading: t.empowerment_heading,
            icon: icon("shield"),
            remedial_heading: t.remedial_heading,
            audit: audit.clone(),
        }),
        advocate: AdvocatePanel {
            heading: t.advocate_heading,
            icon: icon("advocate"),
            analysis: result.advocate.analysis.clone(),
            district_insight: format!("{}: {}", t.district_insight, profile.district),
            stats: result.advocate.stats.clone(),
            roadmap_heading: t.roadmap_heading,
            roadmap: result
                .advocate
                .legal_roadmap
                .iter()
                .enumerate()
                .map(|(i, step)| RoadmapStep {
                    number: i + 1,
                    text: step.clone(),
                })
                .collect(),
            score_heading: t.protection_score,
            safety_score: result.advocate.safety_score,
            risk_level: result.advocate.risk_level,
            risk_label: format!("{} {}", result.advocate.risk_level, t.risk_word),
        },
        sharia: ShariaPanel {
            heading: t.sharia_heading,
            icon: icon("sharia"),
            context: result.sharia_expert.context.clone(),
            principles: result.sharia_expert.principles.clone(),
            guidance: result.sharia_expert.guidance.clone(),
        },
        health: result.health_agent.as_ref().map(|notes| HealthPanel {
            heading: t.health_heading,
            icon: icon("health"),
            notes: notes.clone(),
        }),
        ngo: NgoPanel {
            heading: t.ngo_heading,
            icon: icon("ngo"),
            name: result.ngo_bridge.recommended_ngo.name.clone(),
            contact: result.ngo_bridge.recommended_ngo.contact.clone(),
            reason: result.ngo_bridge.recommended_ngo.reason.clone(),
            contact_cta: t.ngo_contact_cta,
        },
        disclaimer: t.disclaimer,
    }
}
