use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::formatting::text_case::title_case;

/// Personal and career details collected from one form submission.
///
/// Values are stored exactly as submitted. Normalization (trimming, casing)
/// happens in the formatters, because each document applies different rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantProfile {
    pub name: String,
    /// The applicant's current role, e.g. "Software Engineer".
    pub job_role: String,
    /// The position being applied for.
    pub position: String,
    pub company: String,
    /// Comma-separated free text.
    pub skills: String,
    /// Free-text experience summary.
    pub experience: String,
}

/// The five rich resume layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResumeStyle {
    Chronological,
    Functional,
    Combinational,
    Mini,
    Nontraditional,
}

impl ResumeStyle {
    pub const ALL: [ResumeStyle; 5] = [
        ResumeStyle::Chronological,
        ResumeStyle::Functional,
        ResumeStyle::Combinational,
        ResumeStyle::Mini,
        ResumeStyle::Nontraditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStyle::Chronological => "Chronological",
            ResumeStyle::Functional => "Functional",
            ResumeStyle::Combinational => "Combinational",
            ResumeStyle::Mini => "Mini",
            ResumeStyle::Nontraditional => "Nontraditional",
        }
    }
}

impl fmt::Display for ResumeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeStyle {
    type Err = String;

    /// Matches after trimming and title-casing, so "  mini " selects `Mini`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = title_case(s.trim());
        ResumeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| s.to_string())
    }
}

/// The resume type as chosen on the form.
///
/// The external form sends free strings, so an unknown value is kept rather
/// than rejected: the formatter answers it with a fixed error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleSelector {
    Known(ResumeStyle),
    Unsupported(String),
}

impl From<String> for StyleSelector {
    fn from(raw: String) -> Self {
        match raw.parse::<ResumeStyle>() {
            Ok(style) => StyleSelector::Known(style),
            Err(raw) => StyleSelector::Unsupported(raw),
        }
    }
}

impl From<StyleSelector> for String {
    fn from(selector: StyleSelector) -> Self {
        match selector {
            StyleSelector::Known(style) => style.as_str().to_string(),
            StyleSelector::Unsupported(raw) => raw,
        }
    }
}

impl From<ResumeStyle> for StyleSelector {
    fn from(style: ResumeStyle) -> Self {
        StyleSelector::Known(style)
    }
}

/// Rich = markdown layout built around generated fragments.
/// Basic = fixed plain skeleton built from the profile alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleMode {
    #[default]
    Rich,
    Basic,
}

/// Sampling temperature for the text-generation model, in [0.3, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.3;
    pub const MAX: f32 = 1.0;

    pub fn new(value: f32) -> Result<Self, AppError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AppError::Validation(format!(
                "temperature must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(0.7)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Txt,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl DocumentKind {
    /// `{name}_resume.{ext}` or `{name}_cover_letter.{ext}`.
    pub fn file_name(&self, name: &str, format: ExportFormat) -> String {
        let suffix = match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
        };
        format!("{name}_{suffix}.{}", format.extension())
    }
}
