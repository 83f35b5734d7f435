use crate::error::RenderError;
use crate::metrics::StandardFont;
use crate::page::PdfPage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An in-memory PDF made of drawn pages.
///
/// Each page lists only the [`StandardFont`]s it shows text in, under their
/// resource names. A font used on several pages is written once.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pages: Vec<PdfPage>,
    compress: bool,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            compress: true,
        }
    }

    /// Enables or disables Flate compression of content streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn add_page(&mut self, page: PdfPage) -> &mut Self {
        self.pages.push(page);
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PdfPage] {
        &self.pages
    }

    /// Builds the lopdf object graph for the collected pages.
    pub fn to_lopdf(&self) -> Result<Document, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_ids: BTreeMap<StandardFont, ObjectId> = BTreeMap::new();
        let mut kids = Vec::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            let mut fonts = Dictionary::new();
            for font in page.fonts() {
                let font_id = *font_ids.entry(font).or_insert_with(|| {
                    document.add_object(dictionary! {
                        "Type" => "Font",
                        "Subtype" => "Type1",
                        "BaseFont" => font.postscript_name(),
                        "Encoding" => "WinAnsiEncoding",
                    })
                });
                fonts.set(font.resource_name(), font_id);
            }

            let content_id = document.add_object(Stream::new(Dictionary::new(), page.encode_content()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![Object::Integer(0), Object::Integer(0), page.width().into(), page.height().into()],
                "Contents" => content_id,
                "Resources" => dictionary! { "Font" => fonts },
            });
            log::debug!(
                "Added page {} ({} operations)",
                index + 1,
                page.operations().len()
            );
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        if self.compress {
            document.compress();
        }
        Ok(document)
    }

    pub fn save_to<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        let mut document = self.to_lopdf()?;
        document.save_to(writer)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_to(&mut writer)?;
        writer.flush()?;
        log::info!("Wrote {} page(s) to {}", self.page_count(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Content;
    use tabulon_style::Font;
    use tabulon_surface::DrawingSurface;
    use tabulon_types::{Color, Point, Rect};

    fn drawn_page() -> PdfPage {
        let mut page = PdfPage::a4();
        page.fill_rect(Rect::new(30.0, 790.0, 100.0, 12.0), &Color::LIGHT_GRAY)
            .unwrap();
        page.show_text(Point::new(32.0, 793.0), "Hello", &Font::HELVETICA, 8.0, &Color::BLACK)
            .unwrap();
        page
    }

    fn reload(document: &PdfDocument) -> Document {
        let mut bytes = Vec::new();
        document.save_to(&mut bytes).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        Document::load_mem(&bytes).unwrap()
    }

    #[test]
    fn saved_document_round_trips_content() {
        let mut document = PdfDocument::new();
        document.add_page(drawn_page());

        let loaded = reload(&document);
        let pages = loaded.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let content = Content::decode(&loaded.get_page_content(page_id).unwrap()).unwrap();
        let operators: Vec<&str> = content.operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(
            operators,
            vec!["rg", "re", "f", "BT", "Tf", "rg", "Td", "Tj", "ET"]
        );
        let text = &content.operations[7].operands[0];
        assert_eq!(text.as_str().unwrap(), b"Hello");
    }

    /// Base font names registered in a page's resources, with their object ids.
    fn page_fonts(loaded: &Document, page_id: ObjectId) -> Vec<(String, ObjectId)> {
        let fonts = loaded
            .get_dictionary(page_id)
            .and_then(|page| page.get(b"Resources"))
            .and_then(|r| r.as_dict())
            .and_then(|r| r.get(b"Font"))
            .and_then(|f| f.as_dict())
            .unwrap();
        let mut names: Vec<(String, ObjectId)> = fonts
            .iter()
            .map(|(_, font)| {
                let id = font.as_reference().unwrap();
                let font = loaded.get_dictionary(id).unwrap();
                assert_eq!(font.get(b"Encoding").unwrap().as_name().unwrap(), b"WinAnsiEncoding");
                let name = String::from_utf8_lossy(font.get(b"BaseFont").unwrap().as_name().unwrap());
                (name.into_owned(), id)
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn registers_only_fonts_the_page_uses() {
        let mut document = PdfDocument::new().with_compression(false);
        document.add_page(drawn_page());

        let loaded = reload(&document);
        let page_id = *loaded.get_pages().values().next().unwrap();
        let names: Vec<String> = page_fonts(&loaded, page_id).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Helvetica"]);
    }

    #[test]
    fn pages_share_font_objects() {
        let mut courier = drawn_page();
        courier
            .show_text(Point::new(32.0, 770.0), "Total", &Font::COURIER, 8.0, &Color::BLACK)
            .unwrap();
        let mut document = PdfDocument::new();
        document
            .add_page(drawn_page())
            .add_page(courier)
            .add_page(PdfPage::a4());

        let loaded = reload(&document);
        let ids: Vec<_> = loaded.get_pages().values().copied().collect();
        let first = page_fonts(&loaded, ids[0]);
        let second = page_fonts(&loaded, ids[1]);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].0, "Courier");
        assert_eq!(second[1], first[0]);
        assert!(page_fonts(&loaded, ids[2]).is_empty());
    }

    #[test]
    fn keeps_page_order_and_size() {
        let mut document = PdfDocument::new();
        document
            .add_page(PdfPage::a4())
            .add_page(PdfPage::a4_landscape());
        assert_eq!(document.page_count(), 2);

        let loaded = reload(&document);
        let ids: Vec<_> = loaded.get_pages().values().copied().collect();
        let media_box = |id| {
            loaded
                .get_dictionary(id)
                .unwrap()
                .get(b"MediaBox")
                .unwrap()
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_float().unwrap())
                .collect::<Vec<f32>>()
        };
        assert_eq!(media_box(ids[0]), vec![0.0, 0.0, 595.0, 842.0]);
        assert_eq!(media_box(ids[1]), vec![0.0, 0.0, 842.0, 595.0]);
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.pdf");
        let mut document = PdfDocument::new();
        document.add_page(drawn_page());
        document.save(&path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }
}
