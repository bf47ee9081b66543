//! Printable export — the PDF behind the chat's "Export to PDF" button.
//!
//! Rendering is two-stage. [`document_block`] lays a record out as plain
//! text lines, reusing the chat renderer's field order, so the layout is
//! testable without decoding PDF bytes. [`render_pdf`] then paints those
//! lines onto A4 pages with builtin Helvetica. Builtin fonts carry WinAnsi
//! coverage only, which is why the document has no glyph column.

use crate::error::ExportError;
use crate::format::field_rows;
use crate::types::PostOffice;
use chrono::Utc;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex,
};

/// Title line, also the PDF's document title.
pub const DOCUMENT_TITLE: &str = "Indian Pincode Search Results";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 15.0;
const MARGIN_TOP_MM: f32 = 20.0;
const MARGIN_BOTTOM_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

// ---------------------------------------------------------------------------
// Block layout
// ---------------------------------------------------------------------------

/// Lay one record out as plain text lines for the document.
///
/// `index` is 0-based; the first line is a 1-based `Result N` heading,
/// followed by the nine labeled fields in chat order and, when the record
/// has both coordinates, a final `Google Maps:` line.
pub fn document_block(record: &PostOffice, index: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(11);
    lines.push(format!("Result {}", index + 1));

    for (_, label, value) in field_rows(record) {
        lines.push(format!("{label}: {value}"));
    }

    if let Some(url) = record.maps_url() {
        lines.push(format!("Google Maps: {url}"));
    }

    lines
}

// ---------------------------------------------------------------------------
// Painting
// ---------------------------------------------------------------------------

/// Render the full result set as a PDF and return its bytes.
///
/// The document opens with the title, the query it answers, and a UTC
/// generation stamp; each record follows as one [`document_block`]. Pages
/// break automatically once the cursor runs out of room.
pub fn render_pdf(results: &[PostOffice], query: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut cursor = PageCursor::open(&doc, page, layer);
    cursor.line(DOCUMENT_TITLE, TITLE_SIZE, &bold);
    cursor.gap();
    cursor.line(&format!("Search Query: {query}"), BODY_SIZE, &regular);
    let stamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    cursor.line(&format!("Generated: {stamp}"), BODY_SIZE, &regular);

    for (index, record) in results.iter().enumerate() {
        cursor.gap();
        let mut lines = document_block(record, index).into_iter();
        if let Some(heading) = lines.next() {
            cursor.line(&heading, HEADING_SIZE, &bold);
        }
        for line in lines {
            cursor.line(&line, BODY_SIZE, &regular);
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// Write cursor over the current page; top-down, origin at bottom-left.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn open(doc: &'a PdfDocumentReference, page: PdfPageIndex, layer: PdfLayerIndex) -> Self {
        Self {
            doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT_MM - MARGIN_TOP_MM,
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN_BOTTOM_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
        }
        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT_MM / 2.0;
    }
}
