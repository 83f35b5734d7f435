#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::Document as LopdfDocument;
use tabulon::{Cell, Font, PdfDocument, RowBuilder, TableBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a saved PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_document(document: &PdfDocument) -> Result<Self, Box<dyn std::error::Error>> {
        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Decoded content stream of the given 1-based page.
    pub fn page_content(&self, page_number: u32) -> Result<Content, Box<dyn std::error::Error>> {
        let page_id = *self
            .doc
            .get_pages()
            .get(&page_number)
            .ok_or("page not found")?;
        Ok(Content::decode(&self.doc.get_page_content(page_id)?)?)
    }

    pub fn operators(&self, page_number: u32) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self
            .page_content(page_number)?
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect())
    }

    /// Every string shown with `Tj`, in drawing order.
    pub fn shown_strings(&self, page_number: u32) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self
            .page_content(page_number)?
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first())
            .filter_map(|operand| operand.as_str().ok())
            .map(|bytes| bytes.iter().map(|&b| b as char).collect())
            .collect())
    }
}

/// The 300/120/70 Helvetica 8pt layout most tests share.
pub fn invoice_builder() -> TableBuilder {
    TableBuilder::new()
        .add_column_of_width(300.0)
        .add_column_of_width(120.0)
        .add_column_of_width(70.0)
        .with_font_size(8.0)
        .with_font(Font::HELVETICA)
}

pub fn bordered_row(values: [i32; 3]) -> tabulon::Row {
    RowBuilder::new()
        .add(Cell::with_text(values[0]).with_all_borders())
        .add(Cell::with_text(values[1]).with_all_borders())
        .add(Cell::with_text(values[2]).with_all_borders())
        .build()
}
