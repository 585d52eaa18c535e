//! Static bilingual string table.
//!
//! One flat record per language, resolved by [`strings`]. This is the whole
//! localization story: a dictionary lookup, no formatting machinery. Urdu
//! strings are carried verbatim from the product copy; Roman Urdu falls back
//! to the English table.

use crate::language::Language;

/// Every user-visible string the engine hands to a presentation layer.
#[derive(Debug)]
pub struct UiStrings {
    pub landing_title: &'static str,
    pub landing_subheading: &'static str,
    pub landing_description: &'static str,
    pub landing_cta: &'static str,
    pub profile_heading: &'static str,
    pub profile_cta: &'static str,
    pub loading_notice: &'static str,
    pub busy_notice: &'static str,
    pub report_heading: &'static str,
    pub verified_badge: &'static str,
    pub new_analysis: &'static str,
    pub advocate_heading: &'static str,
    pub district_insight: &'static str,
    pub roadmap_heading: &'static str,
    pub sharia_heading: &'static str,
    pub empowerment_heading: &'static str,
    pub remedial_heading: &'static str,
    pub health_heading: &'static str,
    pub ngo_heading: &'static str,
    pub ngo_contact_cta: &'static str,
    pub risk_word: &'static str,
    pub protection_score: &'static str,
    pub download_draft: &'static str,
    pub copy_draft: &'static str,
    pub copied_notice: &'static str,
    pub disclaimer: &'static str,
}

static EN: UiStrings = UiStrings {
    landing_title: "Zeenat",
    landing_subheading: "Digital Guardian • Right • Justice",
    landing_description: "A complete empowerment system for Pakistani women. Create your identity and get a full audit of your rights.",
    landing_cta: "Create Your Profile",
    profile_heading: "Your Digital Identity",
    profile_cta: "Save & Enter Guardian Mode",
    loading_notice: "Zeenat is auditing your rights...",
    busy_notice: "System busy. Please try again.",
    report_heading: "Your Roadmap to Safety",
    verified_badge: "Verified Analysis",
    new_analysis: "New Analysis",
    advocate_heading: "The Advocate's Brief",
    district_insight: "District Insight",
    roadmap_heading: "Legal Action Plan",
    sharia_heading: "Sharia Context",
    empowerment_heading: "Empowerment Corner",
    remedial_heading: "Guidance to Reclaim Right",
    health_heading: "Health Recommendations",
    ngo_heading: "NGO Referral Bridge",
    ngo_contact_cta: "Contact Counselor Now",
    risk_word: "Risk",
    protection_score: "Protection Score",
    download_draft: "Download Draft",
    copy_draft: "Copy Text",
    copied_notice: "Copied to clipboard",
    disclaimer: "LEGAL NOTE: This is an informational system, not professional legal advice.",
};

static UR: UiStrings = UiStrings {
    landing_title: "زینت",
    landing_subheading: "ڈیجیٹل محافظ • حق • حقوق",
    landing_description: "پاکستانی خواتین کے لیے ایک مکمل حفاظتی نظام۔ اپنی شناخت درج کریں اور اپنے حقوق کا مکمل آڈٹ حاصل کریں۔",
    landing_cta: "اپنی شناخت بنائیں",
    profile_heading: "آپ کی شناخت (Digital Profile)",
    profile_cta: "محفوظ کریں اور آگے بڑھیں",
    loading_notice: "زینت آپ کے حقوق کا جائزہ لے رہی ہے...",
    busy_notice: "نظام مصروف ہے۔ براہ کرم دوبارہ کوشش کریں۔",
    report_heading: "آپ کی حفاظت کا راستہ",
    verified_badge: "تصدیق شدہ تجزیہ",
    new_analysis: "نیا تجزیہ",
    advocate_heading: "وکیل کی رائے (Advocate Brief)",
    district_insight: "ضلعی بصیرت",
    roadmap_heading: "قانونی کارروائی کا منصوبہ",
    sharia_heading: "شرعی تناظر (Sharia Context)",
    empowerment_heading: "تعلیم اور ملازمت کا حق",
    remedial_heading: "حق کے حصول کے لیے مشورہ",
    health_heading: "صحت کی سفارشات",
    ngo_heading: "NGO Referral Bridge",
    ngo_contact_cta: "ابھی رابطہ کریں",
    risk_word: "خطرہ",
    protection_score: "Protection Score",
    download_draft: "ڈاؤن لوڈ کریں",
    copy_draft: "کاپی کریں",
    copied_notice: "کاپی ہو گیا",
    disclaimer: "قانونی نوٹ: یہ زینت-اے آئی ایک معلوماتی نظام ہے، پیشہ ورانہ قانونی مشورہ نہیں ہے۔",
};

/// Resolves the string table for a language.
pub fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::Ur => &UR,
        Language::En | Language::Roman => &EN,
    }
}
