//! Resume layouts: one Basic skeleton and five rich markdown styles.
//!
//! Every layout is a pure function of the normalized profile and the cleaned,
//! truncated model output. Rich styles share the same fragment extraction and
//! differ only in which sections they print and how they label them.

use crate::formatting::text_case::{capitalize, split_skills, title_case};
use crate::models::profile::{ApplicantProfile, ResumeStyle, StyleMode, StyleSelector};

const OBJECTIVE_MARKER: &str = "Objective:";
const SKILLS_MARKER: &str = "Skills:";
pub const EXPERIENCE_MARKER: &str = "Experience:";

pub const OBJECTIVE_FALLBACK: &str =
    "A motivated applicant eager to contribute meaningfully to this position.";
pub const EXPERIENCE_FALLBACK: &str = "Experience section not found. Ready to grow and learn.";
pub const BASIC_EXPERIENCE_FALLBACK: &str = "Experience section coming soon.";
pub const UNSUPPORTED_RESUME_TYPE: &str =
    "**Error**: Unsupported resume type. Please select a valid format.";

/// Profile fields as they appear on a resume.
///
/// `job_role` and `raw_skills` keep the submitted text: the prompt and the
/// Nontraditional layout use them unnormalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFields {
    pub name: String,
    pub job_role: String,
    pub position: String,
    pub company: String,
    pub raw_skills: String,
    pub skills: Vec<String>,
    pub experience: String,
}

impl ResumeFields {
    pub fn from_profile(profile: &ApplicantProfile) -> Self {
        Self {
            name: title_case(profile.name.trim()),
            job_role: profile.job_role.clone(),
            position: title_case(profile.position.trim()),
            company: title_case(profile.company.trim()),
            raw_skills: profile.skills.clone(),
            skills: split_skills(&profile.skills),
            experience: capitalize(profile.experience.trim()),
        }
    }

    /// The profile sent to the resume prompt.
    pub fn prompt_profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            name: self.name.clone(),
            job_role: self.job_role.clone(),
            position: self.position.clone(),
            company: self.company.clone(),
            skills: self.raw_skills.clone(),
            experience: self.experience.clone(),
        }
    }

    fn skills_inline(&self) -> String {
        self.skills.join(", ")
    }

    fn skills_bulleted(&self) -> String {
        format!("• {}", self.skills.join("\n• "))
    }
}

/// Returns the text between the first `marker` and the next occurrence of it.
fn segment_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(marker)?;
    Some(rest.split_once(marker).map_or(rest, |(head, _)| head))
}

/// The generated objective: after "Objective:", up to "Skills:".
pub fn extract_objective(generated: &str) -> Option<&str> {
    let after = segment_after(generated, OBJECTIVE_MARKER)?;
    let objective = after
        .split_once(SKILLS_MARKER)
        .map_or(after, |(head, _)| head);
    Some(objective.trim())
}

/// The generated experience: everything after "Experience:".
pub fn extract_experience(generated: &str) -> Option<&str> {
    generated
        .split_once(EXPERIENCE_MARKER)
        .map(|(_, rest)| rest.trim())
}

fn objective_or_fallback(generated: &str) -> String {
    match extract_objective(generated) {
        Some(objective) => objective.to_string(),
        None => OBJECTIVE_FALLBACK.to_string(),
    }
}

fn experience_block(generated: &str, experience: &str) -> String {
    match extract_experience(generated) {
        Some(block) => block.to_string(),
        None if !experience.is_empty() => format!("- {experience}"),
        None => EXPERIENCE_FALLBACK.to_string(),
    }
}

/// Produces the resume body for the chosen mode and style.
///
/// Basic mode ignores both `generated` and the style selector. An unsupported
/// selector in Rich mode yields [`UNSUPPORTED_RESUME_TYPE`].
pub fn format_resume(
    fields: &ResumeFields,
    generated: &str,
    selector: &StyleSelector,
    mode: StyleMode,
) -> String {
    match (mode, selector) {
        (StyleMode::Basic, _) => format_basic(fields),
        (StyleMode::Rich, StyleSelector::Known(style)) => format_rich(*style, fields, generated),
        (StyleMode::Rich, StyleSelector::Unsupported(_)) => UNSUPPORTED_RESUME_TYPE.to_string(),
    }
}

/// Fixed plain-text skeleton populated from the profile alone.
pub fn format_basic(fields: &ResumeFields) -> String {
    let experience = if fields.experience.is_empty() {
        BASIC_EXPERIENCE_FALLBACK.to_string()
    } else {
        fields.experience.clone()
    };

    [
        "=== Objective ===".to_string(),
        format!(
            "A highly motivated {} applying for {} at {}.",
            fields.job_role, fields.position, fields.company
        ),
        String::new(),
        "=== Skills ===".to_string(),
        fields.skills_inline(),
        String::new(),
        "=== Experience ===".to_string(),
        experience.clone(),
        String::new(),
        "=== Highlights ===".to_string(),
        experience,
        String::new(),
        "=== Highlights ===".to_string(),
        "- Passionate about user-friendly design".to_string(),
        "- Experienced in GPT-2 and responsive layouts".to_string(),
        "- Built intelligent resume app with PDF support".to_string(),
    ]
    .join("\n")
}

pub fn format_rich(style: ResumeStyle, fields: &ResumeFields, generated: &str) -> String {
    let objective = objective_or_fallback(generated);
    let experience_block = experience_block(generated, &fields.experience);
    let name = &fields.name;
    let position = &fields.position;
    let company = &fields.company;
    let skills_inline = fields.skills_inline();
    let skills_bulleted = fields.skills_bulleted();

    match style {
        ResumeStyle::Chronological => format!(
            "
### 👤 Name  
{name}

### 🎯 Position Applied  
{position} at {company}


### 🧠 Objective  
{objective}

### 🔧 Skills  
**Core Technologies:** {skills_inline}  
**Tools:** Streamlit, FPDF, GPT-2, CSS  
**Practices:** Agile dev, Clean code, UI/UX design

### 📆 Experience Timeline  
{experience_block}

### 🌟 Highlights  
- Built AI resume generator with GPT-2  
- Designed light/dark themes with CSS  
- Debugged Unicode errors in PDF generation  
- Crafted responsive layouts using HTML & Spring Boot
"
        ),

        ResumeStyle::Functional => format!(
            "
### 👤 Name  
**{name}**

### 🔧 Functional Expertise  
**{position}**

### 🧠 Objective  
{objective}

### 🔍 Core Competencies  
{skills_bulleted}

### 📌 Experience Summary  
{experience_block}

### 🧩 Tools Used  
GPT-2, FPDF, Spring Boot, Streamlit
"
        ),

        ResumeStyle::Combinational => format!(
            "
### 👤 Name  
**{name}**

### 💼 Combined Role  
**{position}**

### 🧠 Objective  
{objective}

### 🧪 Skill Snapshot  
{skills_bulleted}

### 📜 Career Highlights  
{experience_block}

### 📂 Hybrid Strengths  
- Combines creative UI with robust backend logic  
- Excels in team collaboration and agile prototyping
"
        ),

        ResumeStyle::Mini => format!(
            "
### 👤 {name} — **{position}**

**🔹 Objective**  
{objective}

**🔹 Skills**  
{skills_inline}

**🔹 Experience**  
{experience_block}
"
        ),

        ResumeStyle::Nontraditional => {
            let raw_skills = &fields.raw_skills;
            format!(
                "
🌈 **Creative Resume – {name}**

🎯 Role Desired: **{position}**

✨ Purpose  
I bring creativity, versatility, and a bold mindset — applying my strengths in {raw_skills} to design experiences that resonate.

🛠️ What I Bring  
{skills_bulleted}

📸 Notable Work  
{experience_block}

🌐 Technical Expression  
• Styled interfaces using custom CSS themes  
• Integrated GPT-2 for auto text generation  
• Built PDF export logic via FPDF  
• Explored Streamlit UI for interactive flow

📬 Let’s Collaborate!
"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ResumeFields {
        ResumeFields::from_profile(&ApplicantProfile {
            name: "jane doe".to_string(),
            job_role: "Data Analyst".to_string(),
            position: "analyst".to_string(),
            company: "acme".to_string(),
            skills: "Python, SQL".to_string(),
            experience: "3 years at X".to_string(),
        })
    }

    fn section_markers(body: &str) -> Vec<&str> {
        body.lines().filter(|l| l.starts_with("=== ")).collect()
    }

    #[test]
    fn test_fields_normalization() {
        let fields = jane();
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.position, "Analyst");
        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.skills, vec!["Python", "Sql"]);
        assert_eq!(fields.experience, "3 years at x");
        assert_eq!(fields.job_role, "Data Analyst");
    }

    #[test]
    fn test_extract_objective_between_markers() {
        let text = "Objective: Ship useful analytics.\nSkills: Python";
        assert_eq!(extract_objective(text), Some("Ship useful analytics."));
    }

    #[test]
    fn test_extract_objective_without_skills_marker_takes_rest() {
        assert_eq!(
            extract_objective("intro Objective: grow the team"),
            Some("grow the team")
        );
    }

    #[test]
    fn test_extract_objective_stops_at_second_objective() {
        assert_eq!(
            extract_objective("Objective: first Objective: second Skills: x"),
            Some("first")
        );
    }

    #[test]
    fn test_extract_objective_missing_marker() {
        assert_eq!(extract_objective("Skills: Python"), None);
        assert_eq!(objective_or_fallback("nothing here"), OBJECTIVE_FALLBACK);
    }

    #[test]
    fn test_experience_block_prefers_generated_text() {
        assert_eq!(
            experience_block("Experience: Led two audits.", "3 years"),
            "Led two audits."
        );
    }

    #[test]
    fn test_experience_block_falls_back_to_profile_then_fixed_text() {
        assert_eq!(experience_block("no marker", "3 years"), "- 3 years");
        assert_eq!(experience_block("no marker", ""), EXPERIENCE_FALLBACK);
    }

    #[test]
    fn test_basic_sections_in_fixed_order() {
        let body = format_basic(&jane());
        assert_eq!(
            section_markers(&body),
            vec![
                "=== Objective ===",
                "=== Skills ===",
                "=== Experience ===",
                "=== Highlights ===",
                "=== Highlights ===",
            ]
        );
        assert!(body.contains("A highly motivated Data Analyst applying for Analyst at Acme."));
        assert!(body.contains("\nPython, Sql\n"));
    }

    #[test]
    fn test_basic_sections_survive_empty_profile() {
        let fields = ResumeFields::from_profile(&ApplicantProfile::default());
        let body = format_basic(&fields);
        assert_eq!(section_markers(&body).len(), 5);
        assert_eq!(body.matches(BASIC_EXPERIENCE_FALLBACK).count(), 2);
    }

    #[test]
    fn test_basic_ignores_generated_text_and_style() {
        let fields = jane();
        let selector = StyleSelector::Unsupported("Poster".to_string());
        let a = format_resume(&fields, "Objective: A\nExperience: B", &selector, StyleMode::Basic);
        let b = format_resume(&fields, "", &selector, StyleMode::Basic);
        assert_eq!(a, b);
        assert_eq!(a, format_basic(&fields));
    }

    #[test]
    fn test_unsupported_style_returns_error_body() {
        let selector = StyleSelector::Unsupported("Poster".to_string());
        assert_eq!(
            format_resume(&jane(), "", &selector, StyleMode::Rich),
            UNSUPPORTED_RESUME_TYPE
        );
    }

    #[test]
    fn test_chronological_layout() {
        let generated = "Objective: Turn data into decisions.\nSkills: SQL\nExperience: Built dashboards.";
        let body = format_rich(ResumeStyle::Chronological, &jane(), generated);
        assert!(body.starts_with("\n### 👤 Name  \nJane Doe\n"));
        assert!(body.contains("### 🎯 Position Applied  \nAnalyst at Acme\n"));
        assert!(body.contains("### 🧠 Objective  \nTurn data into decisions.\n"));
        assert!(body.contains("**Core Technologies:** Python, Sql  \n"));
        assert!(body.contains("### 📆 Experience Timeline  \nBuilt dashboards.\n"));
    }

    #[test]
    fn test_functional_and_combinational_use_bulleted_skills() {
        for style in [ResumeStyle::Functional, ResumeStyle::Combinational] {
            let body = format_rich(style, &jane(), "");
            assert!(body.contains("• Python\n• Sql\n"), "{style} should bullet skills");
            assert!(body.contains("**Analyst**"));
            assert!(body.contains(OBJECTIVE_FALLBACK));
            assert!(body.contains("- 3 years at x"));
        }
    }

    #[test]
    fn test_mini_layout_heading() {
        let body = format_rich(ResumeStyle::Mini, &jane(), "");
        assert!(body.contains("### 👤 Jane Doe — **Analyst**"));
        assert!(body.contains("**🔹 Skills**  \nPython, Sql\n"));
    }

    #[test]
    fn test_nontraditional_uses_raw_skills_in_purpose() {
        let body = format_rich(ResumeStyle::Nontraditional, &jane(), "");
        assert!(body.contains("applying my strengths in Python, SQL to design"));
        assert!(body.contains("🌈 **Creative Resume – Jane Doe**"));
        assert!(body.contains("📬 Let’s Collaborate!"));
    }

    #[test]
    fn test_every_rich_style_is_deterministic() {
        let generated = "Objective: Be useful.\nExperience: Plenty.";
        for style in ResumeStyle::ALL {
            assert_eq!(
                format_rich(style, &jane(), generated),
                format_rich(style, &jane(), generated)
            );
        }
    }
}
