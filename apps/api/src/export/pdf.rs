//! Paginated PDF export.
//!
//! # Architecture
//! - `sanitize_for_pdf` strips every non-ASCII character (emoji icons included).
//! - `plan_pdf_lines` is the pure layout pass: line classification, word wrap,
//!   vertical cursor, page breaks. No PDF types involved.
//! - `render_pdf` loads fonts, then draws the plan with printpdf. CPU-bound;
//!   async callers run it through `tokio::task::spawn_blocking`.
//!
//! Geometry mirrors a classic A4 cell layout: 10 mm margins, 10 mm line
//! height, a 1 mm cell padding each side, page break 20 mm above the bottom.

use std::io::Cursor;
use std::path::PathBuf;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use thiserror::Error;
use tracing::warn;

use crate::export::font_metrics::{get_metrics, FontFamily};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const CELL_PADDING_MM: f32 = 1.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const PAGE_BREAK_MARGIN_MM: f32 = 20.0;
const HEADING_SPACE_BEFORE_MM: f32 = 5.0;
const HEADING_SPACE_AFTER_MM: f32 = 2.0;
const MM_PER_PT: f32 = 25.4 / 72.0;

const HEADING_MARKER: &str = "###";
const LABEL_MARKER: &str = "**";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

/// Paths of the TTF assets tried before falling back to built-in Helvetica.
#[derive(Debug, Clone)]
pub struct FontAssets {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

// ────────────────────────────────────────────────────────────────────────────
// Sanitization and line classification
// ────────────────────────────────────────────────────────────────────────────

/// Removes every character at or above U+0080, line by line. Line count is kept.
pub fn sanitize_for_pdf(text: &str) -> String {
    text.split('\n')
        .map(|line| line.chars().filter(char::is_ascii).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// `###` section header: 14pt bold with extra spacing.
    Heading,
    /// `**` label: 12pt bold.
    Label,
    /// Paragraph text: 12pt regular.
    Body,
}

impl LineStyle {
    pub fn font_size_pt(&self) -> f32 {
        match self {
            LineStyle::Heading => 14.0,
            LineStyle::Label | LineStyle::Body => 12.0,
        }
    }

    pub fn is_bold(&self) -> bool {
        !matches!(self, LineStyle::Body)
    }
}

/// Classifies a trimmed line and strips its markup markers.
pub fn classify_line(line: &str) -> (LineStyle, String) {
    let line = line.trim();
    if line.starts_with(HEADING_MARKER) {
        (
            LineStyle::Heading,
            line.replace(HEADING_MARKER, "").trim().to_string(),
        )
    } else if line.starts_with(LABEL_MARKER) {
        (
            LineStyle::Label,
            line.replace(LABEL_MARKER, "").trim().to_string(),
        )
    } else {
        (LineStyle::Body, line.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout pass
// ────────────────────────────────────────────────────────────────────────────

/// One printed line after wrapping and pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    /// Baseline position measured from the top edge of the page.
    pub baseline_mm: f32,
    pub style: LineStyle,
    pub text: String,
}

struct LayoutCursor {
    page: usize,
    y_mm: f32,
}

impl LayoutCursor {
    /// Emits one cell row, breaking to a new page first if it would not fit.
    fn place(&mut self, style: LineStyle, text: String, out: &mut Vec<PlacedLine>) {
        if self.y_mm + LINE_HEIGHT_MM > PAGE_HEIGHT_MM - PAGE_BREAK_MARGIN_MM {
            self.page += 1;
            self.y_mm = MARGIN_MM;
        }
        let font_size_mm = style.font_size_pt() * MM_PER_PT;
        out.push(PlacedLine {
            page: self.page,
            x_mm: MARGIN_MM + CELL_PADDING_MM,
            baseline_mm: self.y_mm + 0.5 * LINE_HEIGHT_MM + 0.3 * font_size_mm,
            style,
            text,
        });
        self.y_mm += LINE_HEIGHT_MM;
    }
}

/// Lays out already-sanitized text for the given font family.
///
/// Empty input lines still occupy one line height.
pub fn plan_pdf_lines(text: &str, family: FontFamily) -> Vec<PlacedLine> {
    let wrap_width_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 2.0 * CELL_PADDING_MM;
    let mut cursor = LayoutCursor {
        page: 0,
        y_mm: MARGIN_MM,
    };
    let mut placed = Vec::new();

    for raw_line in text.split('\n') {
        let (style, content) = classify_line(raw_line);
        let metrics = get_metrics(family, style.is_bold());
        let max_width_em = wrap_width_mm / (style.font_size_pt() * MM_PER_PT);

        if style == LineStyle::Heading {
            cursor.y_mm += HEADING_SPACE_BEFORE_MM;
        }
        for wrapped in metrics.wrap(&content, max_width_em) {
            cursor.place(style, wrapped, &mut placed);
        }
        if style == LineStyle::Heading {
            cursor.y_mm += HEADING_SPACE_AFTER_MM;
        }
    }

    placed
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

struct LoadedFonts {
    family: FontFamily,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Loads the TTF assets, or falls back to built-in Helvetica on any failure.
fn load_fonts(doc: &PdfDocumentReference, assets: &FontAssets) -> Result<LoadedFonts, PdfError> {
    match load_external_fonts(doc, assets) {
        Ok(fonts) => return Ok(fonts),
        Err(reason) => warn!("PDF font assets unavailable ({reason}); using built-in Helvetica"),
    }

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError::Render(format!("{e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError::Render(format!("{e:?}")))?;

    Ok(LoadedFonts {
        family: FontFamily::Helvetica,
        regular,
        bold,
    })
}

fn load_external_fonts(
    doc: &PdfDocumentReference,
    assets: &FontAssets,
) -> Result<LoadedFonts, String> {
    let regular_bytes = std::fs::read(&assets.regular)
        .map_err(|e| format!("{}: {e}", assets.regular.display()))?;
    let bold_bytes =
        std::fs::read(&assets.bold).map_err(|e| format!("{}: {e}", assets.bold.display()))?;

    let regular = doc
        .add_external_font(Cursor::new(regular_bytes))
        .map_err(|e| format!("{}: {e:?}", assets.regular.display()))?;
    let bold = doc
        .add_external_font(Cursor::new(bold_bytes))
        .map_err(|e| format!("{}: {e:?}", assets.bold.display()))?;

    Ok(LoadedFonts {
        family: FontFamily::DejaVuSans,
        regular,
        bold,
    })
}

/// A rendered PDF plus the font family it ended up using.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub family: FontFamily,
}

/// Sanitizes, lays out and draws `content` as an A4 PDF.
pub fn render_pdf(content: &str, title: &str, assets: &FontAssets) -> Result<RenderedPdf, PdfError> {
    let safe_content = sanitize_for_pdf(content);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let fonts = load_fonts(&doc, assets)?;

    let plan = plan_pdf_lines(&safe_content, fonts.family);
    let page_count = plan.last().map_or(1, |line| line.page + 1);

    let mut pages = vec![(first_page, first_layer)];
    for n in 1..page_count {
        let label = format!("Page {}", n + 1);
        pages.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), label));
    }

    for line in plan.iter().filter(|line| !line.text.is_empty()) {
        let (page, layer) = pages[line.page];
        let font = if line.style.is_bold() {
            &fonts.bold
        } else {
            &fonts.regular
        };
        doc.get_page(page).get_layer(layer).use_text(
            line.text.as_str(),
            line.style.font_size_pt(),
            Mm(line.x_mm),
            Mm(PAGE_HEIGHT_MM - line.baseline_mm),
            font,
        );
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| PdfError::Render(format!("{e:?}")))?;

    Ok(RenderedPdf {
        bytes,
        family: fonts.family,
    })
}
