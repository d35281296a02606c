// Prompt templates for the text-generation model.
// Fields are interpolated verbatim; the formatters decide what is normalized first.

use crate::models::profile::ApplicantProfile;

/// Resume prompt template.
/// Replace: {name}, {role}, {position}, {company}, {experience}, {skills}
pub const RESUME_PROMPT_TEMPLATE: &str = "
Create a professional resume for {name}, a {role}, applying for {position} at {company}.
Include clearly labeled sections: Objective, Skills, Experience, and Highlights.
Generate detailed experience bullet points based on this input: {experience}
Skills: {skills}
";

/// Cover-letter prompt template.
/// Replace: {name}, {position}, {company}, {skills}, {role}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "Write a professional and structured cover letter for {name}, applying for the position of {position} at {company}.
Highlight strengths in {skills}.
Explain how their background in {role} makes them a strong fit.
Format the response with clear section headings and enthusiastic tone tailored to {company}'s mission.";

/// Builds the resume prompt. `profile` is expected to be normalized already,
/// except `job_role` and `skills`, which are sent as typed.
pub fn build_resume_prompt(profile: &ApplicantProfile) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{role}", &profile.job_role)
        .replace("{position}", &profile.position)
        .replace("{company}", &profile.company)
        .replace("{experience}", &profile.experience)
        .replace("{skills}", &profile.skills)
}

/// Builds the cover-letter prompt from already-cleaned role, skills and company text.
pub fn build_cover_letter_prompt(
    name: &str,
    position: &str,
    company: &str,
    skills_formatted: &str,
    role_clean: &str,
) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{position}", position)
        .replace("{company}", company)
        .replace("{skills}", skills_formatted)
        .replace("{role}", role_clean)
}
