//! Cover-letter formatting. Separate from the resume style switch: there is
//! exactly one letter layout.

use crate::formatting::text_case::{split_skills, title_case};
use crate::generation::cleaner::{clean_generated_text, Punctuation};
use crate::generation::truncate::truncate_after;
use crate::models::profile::ApplicantProfile;

pub const LETTER_STOP_PHRASE: &str = "Warm regards";
pub const LETTER_FALLBACK_BODY: &str = "Something went wrong while generating the cover letter.";

/// Filler and typo fixes applied to the role before title-casing.
const ROLE_REPLACEMENTS: [(&str, &str); 2] = [
    ("A background in", ""),
    ("Software Software Engineer", "Software Engineer"),
];

/// Profile fields as they appear in the letter. `name` and `position` are used as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFields {
    pub name: String,
    pub position: String,
    pub company: String,
    pub role_clean: String,
    pub skills_formatted: String,
}

impl LetterFields {
    pub fn from_profile(profile: &ApplicantProfile) -> Self {
        Self {
            name: profile.name.clone(),
            position: profile.position.clone(),
            company: title_case(profile.company.trim()),
            role_clean: normalize_role(&profile.job_role),
            skills_formatted: split_skills(&profile.skills).join(", "),
        }
    }
}

pub fn normalize_role(role: &str) -> String {
    let role = ROLE_REPLACEMENTS
        .iter()
        .fold(role.trim().to_string(), |acc, (from, to)| acc.replace(from, to));
    title_case(&role)
}

/// Reduces raw letter output to the "why I'm a fit" fragment: collapse blank
/// lines, drop noisy lines, cut at the closing salutation.
pub fn clean_letter_output(raw: &str) -> String {
    let collapsed = raw.trim().replace("\n\n", "\n");
    let filtered = clean_generated_text(&collapsed, Punctuation::CoverLetter);
    truncate_after(&filtered, LETTER_STOP_PHRASE)
}

pub fn format_cover_letter(fields: &LetterFields, fit_fragment: &str) -> String {
    let LetterFields {
        name,
        position,
        company,
        role_clean,
        skills_formatted,
    } = fields;

    format!(
        "
### 💼 Application for {position} at {company}

**👤 Candidate:** {name}  
**🎯 Target Role:** {role_clean}  
**🔧 Core Skills:** {skills_formatted}

---

**📨 Introduction**  
I am excited to apply for the position of **{position}** at **{company}**, a company renowned for innovation and excellence. With a solid background in {role_clean} and strong proficiency in {skills_formatted}, I bring creativity and precision to every project I work on.

**🧠 Why I'm a Fit**  
{fit_fragment}

**🚀 Alignment with {company}**  
Your mission inspires me — blending technology with purpose. I’m excited about contributing to your forward-thinking goals, bringing both technical capability and design intuition to your team.

**🙏 Closing**  
Thank you for considering my application.  
Warm regards,  
**{name}**
"
    )
}
