// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logo compositor — lay the normalized logo and two text lines onto a single
// page using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: a page is a `PdfPage` holding a
// `Vec<Op>`, and the document is serialised via `PdfDocument::save()`.

use std::path::Path;

use letterhead_core::error::Result;
use letterhead_core::{FONT_SIZE_PT, PageGeometry, PaperSize, Position};
use printpdf::{
    BuiltinFont, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, RawImage,
    RawImageData, RawImageFormat, TextItem, XObjectTransform,
};
use tracing::{debug, info, instrument};

use crate::image::NormalizedImage;

/// Heading drawn just below the logo.
pub const HEADING_TEXT: &str = "Reporte Generado con Logo";

/// Footer drawn near the bottom-left corner.
pub const FOOTER_TEXT: &str = "Este es un ejemplo de PDF generado con un logo.";

/// Resolution at which one image pixel maps to one point before scaling.
const PLACEMENT_DPI: f32 = 72.0;

/// Builds the one-page logo document.
pub struct LogoCompositor {
    /// Page size of the output.
    paper_size: PaperSize,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl LogoCompositor {
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            title: None,
        }
    }

    /// Create a compositor for US Letter, the page size of the report.
    pub fn letter() -> Self {
        Self::new(PaperSize::Letter)
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Placement of the logo and text for `logo` on this compositor's page.
    pub fn geometry_for(&self, logo: &NormalizedImage) -> Result<PageGeometry> {
        PageGeometry::compute(self.paper_size, logo.width(), logo.height())
    }

    /// Render the page and return the serialised PDF.
    #[instrument(skip(self, logo), fields(width = logo.width(), height = logo.height()))]
    pub fn render(&self, logo: &NormalizedImage) -> Result<Vec<u8>> {
        let geometry = self.geometry_for(logo)?;
        let title = self.title.as_deref().unwrap_or("Reporte con Logo");

        info!(paper = ?self.paper_size, title, "Composing logo PDF");

        let raw = raw_image(logo);
        let mut doc = PdfDocument::new(title);
        let xobject_id = doc.add_image(&raw);

        // The logo is RGB by now; scale its 72-dpi natural size to the target box.
        let mut ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(geometry.logo.x)),
                translate_y: Some(Pt(geometry.logo.y)),
                scale_x: Some(geometry.logo_width / logo.width() as f32),
                scale_y: Some(geometry.logo_height / logo.height() as f32),
                dpi: Some(PLACEMENT_DPI),
                rotate: None,
            },
        }];
        ops.extend(text_line(geometry.heading, HEADING_TEXT));
        ops.extend(text_line(geometry.footer, FOOTER_TEXT));

        let page = PdfPage::new(
            Pt(geometry.page_width).into(),
            Pt(geometry.page_height).into(),
            ops,
        );
        doc.with_pages(vec![page]);

        debug!(
            x = geometry.logo.x,
            y = geometry.logo.y,
            w = geometry.logo_width,
            h = geometry.logo_height,
            "Logo placed on page"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }

        Ok(output)
    }

    /// Render the page and write it to `path`, replacing any existing file.
    pub fn write_to_file(&self, logo: &NormalizedImage, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(logo)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(bytes = bytes.len(), "Wrote logo PDF to {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for LogoCompositor {
    fn default() -> Self {
        Self::letter()
    }
}

/// The flattened RGB pixels in the form printpdf embeds.
fn raw_image(logo: &NormalizedImage) -> RawImage {
    let rgb = logo.as_rgb();
    RawImage {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
        pixels: RawImageData::U8(rgb.as_raw().clone()),
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

/// One line of 12pt Helvetica starting at `pos`.
fn text_line(pos: Position, text: &str) -> [Op; 5] {
    [
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(pos.x),
                y: Pt(pos.y),
            },
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(FONT_SIZE_PT),
            font: BuiltinFont::Helvetica,
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
    ]
}
