//! Document generation: orchestrates one submission end to end.
//!
//! Flow: prompt → model → clean → truncate → format, once for the resume and
//! once for the cover letter. Model failures are degraded to fallback text;
//! a submission always yields both documents.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::formatting::cover_letter::{
    clean_letter_output, format_cover_letter, LetterFields, LETTER_FALLBACK_BODY,
};
use crate::formatting::resume::{format_resume, ResumeFields, EXPERIENCE_MARKER};
use crate::generation::cleaner::{clean_generated_text, Punctuation};
use crate::generation::prompts::{build_cover_letter_prompt, build_resume_prompt};
use crate::generation::truncate::truncate_after;
use crate::llm_client::{GenerationParams, TextGenerator};
use crate::models::profile::{
    ApplicantProfile, DocumentKind, ExportFormat, StyleMode, StyleSelector, Temperature,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Form fields as posted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRequest {
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    pub resume_type: StyleSelector,
    #[serde(default)]
    pub style_mode: StyleMode,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    Temperature::default().value()
}

impl ApplicationRequest {
    pub fn validate(self) -> Result<Submission, AppError> {
        Ok(Submission {
            temperature: Temperature::new(self.temperature)?,
            profile: self.profile,
            resume_type: self.resume_type,
            style_mode: self.style_mode,
        })
    }
}

/// One validated submission, passed by value through the pipeline.
#[derive(Debug, Clone)]
pub struct Submission {
    pub profile: ApplicantProfile,
    pub resume_type: StyleSelector,
    pub style_mode: StyleMode,
    pub temperature: Temperature,
}

/// One generated document plus its download names.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOut {
    pub body: String,
    /// User-visible message when generation failed and fallback text was used.
    pub error: Option<String>,
    pub txt_file_name: String,
    pub pdf_file_name: String,
}

impl DocumentOut {
    fn new(kind: DocumentKind, name: &str, body: String, error: Option<String>) -> Self {
        Self {
            body,
            error,
            txt_file_name: kind.file_name(name, ExportFormat::Txt),
            pdf_file_name: kind.file_name(name, ExportFormat::Pdf),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDocuments {
    pub resume: DocumentOut,
    pub cover_letter: DocumentOut,
}

/// Result of the cover-letter path.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterOutcome {
    pub body: String,
    pub error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

fn params(max_new_tokens: u32, temperature: Temperature) -> GenerationParams {
    GenerationParams {
        max_new_tokens,
        do_sample: true,
        temperature: temperature.value(),
    }
}

/// Generates, cleans and truncates resume text for `fields`.
///
/// A model failure is logged and yields an empty string, which sends the
/// formatter down its fallback branches.
pub async fn generate_resume_text(
    generator: &dyn TextGenerator,
    fields: &ResumeFields,
    temperature: Temperature,
    max_new_tokens: u32,
) -> String {
    let prompt = build_resume_prompt(&fields.prompt_profile());
    match generator
        .generate(&prompt, params(max_new_tokens, temperature))
        .await
    {
        Ok(raw) => {
            let cleaned = clean_generated_text(&raw, Punctuation::Resume);
            truncate_after(&cleaned, EXPERIENCE_MARKER)
        }
        Err(e) => {
            warn!("Resume generation failed, using fallback sections: {e}");
            String::new()
        }
    }
}

/// Builds the resume body. The model is called in every mode, Basic included.
pub async fn build_resume(
    generator: &dyn TextGenerator,
    submission: &Submission,
    max_new_tokens: u32,
) -> String {
    let fields = ResumeFields::from_profile(&submission.profile);
    let generated =
        generate_resume_text(generator, &fields, submission.temperature, max_new_tokens).await;
    format_resume(
        &fields,
        &generated,
        &submission.resume_type,
        submission.style_mode,
    )
}

/// Builds the cover letter. On model failure the body is the fixed fallback
/// sentence and `error` carries the message to show the user.
pub async fn build_cover_letter(
    generator: &dyn TextGenerator,
    profile: &ApplicantProfile,
    temperature: Temperature,
    max_new_tokens: u32,
) -> LetterOutcome {
    let fields = LetterFields::from_profile(profile);
    let prompt = build_cover_letter_prompt(
        &fields.name,
        &fields.position,
        &fields.company,
        &fields.skills_formatted,
        &fields.role_clean,
    );

    match generator
        .generate(&prompt, params(max_new_tokens, temperature))
        .await
    {
        Ok(raw) => LetterOutcome {
            body: format_cover_letter(&fields, &clean_letter_output(&raw)),
            error: None,
        },
        Err(e) => {
            warn!("Cover letter generation failed: {e}");
            LetterOutcome {
                body: LETTER_FALLBACK_BODY.to_string(),
                error: Some(format!("❌ Cover letter generation failed: {e}")),
            }
        }
    }
}

/// Runs the full submission: resume first, then the cover letter.
pub async fn generate_application(
    generator: &dyn TextGenerator,
    submission: Submission,
    max_new_tokens: u32,
) -> ApplicationDocuments {
    info!(
        "Generating documents: style={:?}, mode={:?}, temperature={}",
        submission.resume_type,
        submission.style_mode,
        submission.temperature.value()
    );

    let resume = build_resume(generator, &submission, max_new_tokens).await;
    let letter = build_cover_letter(
        generator,
        &submission.profile,
        submission.temperature,
        max_new_tokens,
    )
    .await;

    let name = &submission.profile.name;
    ApplicationDocuments {
        resume: DocumentOut::new(DocumentKind::Resume, name, resume, None),
        cover_letter: DocumentOut::new(DocumentKind::CoverLetter, name, letter.body, letter.error),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
