//! Analysis request builder: serialize `(profile, inquiry, language)` into
//! the single instruction string sent to the model.
//!
//! Pure function, total over validated inputs. The prompt carries the
//! persona, an explicit language directive, the profile block, the inquiry
//! payload, the enumerated swarm roles for the selected variant, and the
//! NGO directory the bridge picks from.

use std::fmt::Write;

use crate::inquiry::Inquiry;
use crate::language::Language;
use crate::profile::UserProfile;
use crate::reference::NGO_DIRECTORY;
use crate::schema::SchemaVariant;

const PERSONA: &str = "Act as Zeenat-AI: The 360 Guardian.\n\
You are a swarm of experts analyzing a situation for a Pakistani woman.";

/// Builds the instruction string for one guardian analysis.
pub fn build_analysis_prompt(
    profile: &UserProfile,
    inquiry: &Inquiry,
    language: Language,
) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "{}", PERSONA);
    let _ = writeln!(
        prompt,
        "Respond entirely in {}.",
        language.directive_name()
    );

    let _ = writeln!(prompt, "\nUSER PROFILE (Agentic Memory):");
    let _ = writeln!(prompt, "- Age: {}", profile.age);
    let _ = writeln!(prompt, "- District: {}", profile.district);
    let _ = writeln!(prompt, "- Marital Status: {}", profile.marital_status);
    let _ = writeln!(prompt, "- Children: {}", profile.children_count);
    let _ = writeln!(prompt, "- Employment: {}", profile.employment_label());

    let _ = writeln!(prompt, "\nCONTEXT: {}", inquiry.context_payload());

    let _ = writeln!(prompt, "\nSWARM ROLES:");
    for (index, role) in swarm_roles(inquiry.schema_variant()).iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, role);
    }

    let _ = writeln!(prompt, "\nNGO DATABASE:");
    for ngo in NGO_DIRECTORY {
        let _ = writeln!(prompt, "- {} ({}) - {}", ngo.name, ngo.contact, ngo.focus);
    }

    let _ = write!(prompt, "\nOutput must be JSON.");
    prompt
}

fn swarm_roles(variant: SchemaVariant) -> Vec<&'static str> {
    let mut roles = vec![
        "[Advocate]: Analyze civil law (Protection against Harassment, Family Laws, \
         Domestic Violence Act 2026). Provide a Safety Score (0-100) and district-specific stats.",
        "[Sharia Expert]: Provide religious perspective on rights (Haq Mehr, Nafaqah, Tafweez).",
    ];
    match variant {
        SchemaVariant::GeneralInquiry => {
            roles.push(
                "[Health Agent]: (If applicable based on profile) Provide priority health \
                 screenings or mental wellness advice.",
            );
        }
        SchemaVariant::FullAudit => {
            roles.push(
                "[Empowerment Auditor]: Audit column 17 (Right to Education/Work). Report the \
                 education right status, the work right status, and one remedial action.",
            );
            roles.push(
                "[Document Drafter]: Draft the single most useful document for this situation \
                 (Supplemental Deed, NADRA Application, or Legal Brief).",
            );
        }
    }
    roles.push(
        "[NGO Bridge]: Identify the most relevant NGO from our database based on the risk level.",
    );
    roles
}
