// Export: one-shot download artifacts derived from a formatted document.
// The TXT artifact keeps the body verbatim; the PDF artifact is sanitized to ASCII.

pub mod font_metrics;
pub mod pdf;

use bytes::Bytes;
use tracing::debug;

use crate::export::pdf::{render_pdf, FontAssets, PdfError};
use crate::models::profile::{DocumentKind, ExportFormat};

/// A downloadable file: name, MIME type, bytes.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Bytes,
}

/// The document as UTF-8 plain text, unchanged.
pub fn export_text(content: &str, file_name: String) -> ExportArtifact {
    ExportArtifact {
        file_name,
        mime_type: ExportFormat::Txt.mime_type(),
        bytes: Bytes::copy_from_slice(content.as_bytes()),
    }
}

pub fn export_pdf(
    content: &str,
    file_name: String,
    assets: &FontAssets,
) -> Result<ExportArtifact, PdfError> {
    let rendered = render_pdf(content, &file_name, assets)?;
    debug!(
        "Rendered {} ({} bytes, font {:?})",
        file_name,
        rendered.bytes.len(),
        rendered.family
    );
    Ok(ExportArtifact {
        file_name,
        mime_type: ExportFormat::Pdf.mime_type(),
        bytes: Bytes::from(rendered.bytes),
    })
}

/// Builds the artifact for `{name}_{kind}.{ext}`.
pub fn export_document(
    content: &str,
    name: &str,
    kind: DocumentKind,
    format: ExportFormat,
    assets: &FontAssets,
) -> Result<ExportArtifact, PdfError> {
    let file_name = kind.file_name(name, format);
    match format {
        ExportFormat::Txt => Ok(export_text(content, file_name)),
        ExportFormat::Pdf => export_pdf(content, file_name, assets),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::export::pdf::sanitize_for_pdf;

    fn assets() -> FontAssets {
        FontAssets {
            regular: PathBuf::from("/nonexistent/regular.ttf"),
            bold: PathBuf::from("/nonexistent/bold.ttf"),
        }
    }

    const BODY: &str = "### 👤 Name  \nJane Doe\n\n📬 Let’s Collaborate!";

    #[test]
    fn test_txt_keeps_emoji_verbatim() {
        let artifact =
            export_document(BODY, "Jane", DocumentKind::Resume, ExportFormat::Txt, &assets())
                .unwrap();
        assert_eq!(artifact.file_name, "Jane_resume.txt");
        assert_eq!(artifact.mime_type, "text/plain; charset=utf-8");
        assert_eq!(artifact.bytes, Bytes::from(BODY));
    }

    #[test]
    fn test_pdf_artifact_diverges_from_txt() {
        let artifact = export_document(
            BODY,
            "Jane",
            DocumentKind::CoverLetter,
            ExportFormat::Pdf,
            &assets(),
        )
        .unwrap();
        assert_eq!(artifact.file_name, "Jane_cover_letter.pdf");
        assert_eq!(artifact.mime_type, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF"));

        let sanitized = sanitize_for_pdf(BODY);
        assert!(!sanitized.contains('👤'));
        assert!(!sanitized.contains('📬'));
        assert!(BODY.contains('👤'));
    }
}
