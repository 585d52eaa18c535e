//! Static reference data: districts, the Nikkah Nama column table, the NGO
//! directory, and the icon table.
//!
//! Pure constants, no behavior. The column table is keyed 1..25 with keys
//! 7–12 and 23 absent by design (those columns of the official form carry no
//! audit value). Lookups go through [`column`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// The column of the official form that records the right to education/work.
pub const EDUCATION_WORK_COLUMN: u8 = 17;

/// Districts offered in the profile form.
pub const DISTRICTS: [&str; 14] = [
    "Islamabad (ICT)",
    "Lahore",
    "Karachi",
    "Peshawar",
    "Quetta",
    "Multan",
    "Faisalabad",
    "Rawalpindi",
    "Gujranwala",
    "Hyderabad",
    "Sialkot",
    "Swat",
    "Gilgit",
    "Muzaffarabad",
];

/// True when `name` is one of the known districts (exact match).
pub fn is_known_district(name: &str) -> bool {
    DISTRICTS.contains(&name)
}

/// Metadata for one numbered column of the marriage contract form.
///
/// Serializes with the wire names the analysis prompt embeds
/// (`label` / `localizedLabel` / `description` / `localizedDescription`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceColumn {
    pub label: &'static str,
    pub localized_label: &'static str,
    pub description: &'static str,
    pub localized_description: &'static str,
}

const fn col(
    label: &'static str,
    localized_label: &'static str,
    description: &'static str,
    localized_description: &'static str,
) -> ReferenceColumn {
    ReferenceColumn {
        label,
        localized_label,
        description,
        localized_description,
    }
}

static COLUMNS: Lazy<BTreeMap<u8, ReferenceColumn>> = Lazy::new(|| {
    BTreeMap::from([
        (1, col(
            "Ward/Town/Tehsil",
            "وارڈ/ٹاؤن/تحصیل",
            "Location where the marriage took place.",
            "وہ جگہ جہاں نکاح ہوا۔",
        )),
        (2, col(
            "Bridegroom Details",
            "دولہا کی تفصیلات",
            "Name, father's name, and residence of the groom.",
            "دولہا کا نام، والد کا نام اور رہائش۔",
        )),
        (3, col(
            "Groom's Age",
            "دولہا کی عمر",
            "Date of birth or age of the bridegroom.",
            "دولہا کی تاریخ پیدائش یا عمر۔",
        )),
        (4, col(
            "Bride Details",
            "دلہن کی تفصیلات",
            "Name, father's name, and residence of the bride.",
            "دلہن کا نام، والد کا نام اور رہائش۔",
        )),
        (5, col(
            "Bride's Marital Status",
            "دلہن کی حیثیت",
            "Whether the bride is a virgin, widow, or divorced.",
            "دلہن کنواری، بیوہ یا مطلقہ ہے۔",
        )),
        (6, col(
            "Bride's Age",
            "دلہن کی عمر",
            "Date of birth or age of the bride.",
            "دلہن کی تاریخ پیدائش یا عمر۔",
        )),
        (13, col(
            "Total Haq Mehr",
            "حق مہر کی کل رقم",
            "Total amount of dower promised to the bride.",
            "دلہن کے لیے طے شدہ حق مہر کی کل رقم۔",
        )),
        (14, col(
            "Prompt/Deferred Split",
            "معجل اور مؤجل کی تقسیم",
            "How much dower is paid immediately and how much is deferred.",
            "کتنا مہر فوری ادا ہو گا اور کتنا مؤخر۔",
        )),
        (15, col(
            "Paid at Marriage",
            "نکاح کے وقت ادائیگی",
            "Amount of dower paid at the time of the ceremony.",
            "نکاح کے وقت ادا کی گئی مہر کی رقم۔",
        )),
        (16, col(
            "Property in lieu of Mehr",
            "مہر کے بدلے جائیداد",
            "Details of any property given instead of cash dower.",
            "نقد مہر کے بجائے دی گئی جائیداد کی تفصیل۔",
        )),
        (17, col(
            "Special Conditions",
            "تعلیم اور ملازمت کا حق",
            "Right to Education/Work: extra terms agreed upon by both parties.",
            "تعلیم اور ملازمت کا حق: فریقین کی طے کردہ خصوصی شرائط۔",
        )),
        (18, col(
            "Delegation of Divorce",
            "حقِ طلاق کی تفویض",
            "Crucial: Whether the husband gives the wife the right to divorce (Talaq-e-Tafweez).",
            "اہم: کیا شوہر نے بیوی کو طلاق کا حق (طلاقِ تفویض) دیا ہے۔",
        )),
        (19, col(
            "Husband's Right Curtailed",
            "شوہر کے حقِ طلاق پر پابندی",
            "Any restrictions on the husband's power to divorce.",
            "شوہر کے حقِ طلاق پر کوئی پابندی۔",
        )),
        (20, col(
            "Maintenance/Documents",
            "نان و نفقہ/دستاویزات",
            "Monthly maintenance (Kharchi) or other related marriage documents.",
            "ماہانہ نان و نفقہ (خرچی) یا دیگر متعلقہ دستاویزات۔",
        )),
        (21, col(
            "Existing Wives",
            "پہلی بیوی کی موجودگی",
            "Whether the groom already has a wife and has permission for another.",
            "کیا دولہا پہلے سے شادی شدہ ہے اور دوسری شادی کی اجازت رکھتا ہے۔",
        )),
        (22, col(
            "Arbitration Permission",
            "ثالثی کونسل کی اجازت",
            "Official permission number for a second/subsequent marriage.",
            "دوسری شادی کے لیے ثالثی کونسل کی اجازت کا نمبر۔",
        )),
        (24, col(
            "Date of Registration",
            "رجسٹریشن کی تاریخ",
            "When the marriage was officially recorded.",
            "نکاح کے سرکاری اندراج کی تاریخ۔",
        )),
        (25, col(
            "Registration Fee",
            "رجسٹریشن فیس",
            "The official fee paid for the marriage certificate.",
            "نکاح نامہ کی سرکاری فیس۔",
        )),
    ])
});

/// Looks up a column by its number on the official form.
pub fn column(id: u8) -> Option<&'static ReferenceColumn> {
    COLUMNS.get(&id)
}

/// Numbers of the columns present in the reference table, ascending.
pub fn column_ids() -> impl Iterator<Item = u8> {
    COLUMNS.keys().copied()
}

/// One entry of the partner-NGO directory embedded in the analysis prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NgoRecord {
    pub name: &'static str,
    pub contact: &'static str,
    pub focus: &'static str,
}

/// Partner NGOs the model picks a referral from.
pub const NGO_DIRECTORY: [NgoRecord; 4] = [
    NgoRecord {
        name: "Bedari Helpline",
        contact: "0300-5251430",
        focus: "General Support",
    },
    NgoRecord {
        name: "Aurat Foundation",
        contact: "051-2608956",
        focus: "Legal Aid",
    },
    NgoRecord {
        name: "Legal Aid Society",
        contact: "0800-91010",
        focus: "Protection",
    },
    NgoRecord {
        name: "Shaheed Benazir Bhutto Centers",
        contact: "1094",
        focus: "Emergency Shelter",
    },
];

/// Icon names (Font Awesome identifiers) keyed by panel/control name.
const ICONS: [(&str, &str); 10] = [
    ("profile", "id-card"),
    ("sharia", "moon"),
    ("advocate", "balance-scale"),
    ("health", "heartbeat"),
    ("ngo", "hands-helping"),
    ("shield", "shield-alt"),
    ("info", "info-circle"),
    ("search", "search"),
    ("file", "file"),
    ("download", "download"),
];

/// Icon name for a panel/control, if one is defined.
pub fn icon(key: &str) -> Option<&'static str> {
    ICONS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
