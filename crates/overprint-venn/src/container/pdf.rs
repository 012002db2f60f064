//! lopdf-backed document container

use crate::constants::PDF_VERSION;
use crate::ink_state::OverprintConfig;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

use super::{ContainerSession, DocumentContainer, PageHandle, save_pdf};

/// A single PDF document with a flat page tree
pub struct PdfContainer {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfContainer {
    /// Create an empty document (catalog plus an empty page tree).
    ///
    /// Fails with `ContainerInit` when no `ContainerSession` is live.
    pub fn new() -> Result<Self> {
        ensure_initialized()?;

        let mut document = Document::with_version(PDF_VERSION);

        let pages_id = document.new_object_id();
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(Vec::new())),
            ("Count", Object::Integer(0)),
        ]);
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        document.trailer.set("Root", catalog_id);

        Ok(Self {
            document,
            pages_id,
            page_ids: Vec::new(),
        })
    }

    /// Number of pages created so far
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Borrow the underlying document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the underlying document
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Serialize the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut writer = Vec::new();
        self.document.save_to(&mut writer)?;
        Ok(writer)
    }

    /// Write the document to `path`
    pub async fn save(self, path: impl AsRef<Path>) -> Result<()> {
        save_pdf(self.document, path).await
    }

    fn page_dictionary_mut(&mut self, page: PageHandle) -> Result<&mut Dictionary> {
        if !self.page_ids.contains(&page.0) {
            return Err(VennError::Config(format!(
                "Page {:?} does not belong to this document",
                page.0
            )));
        }
        Ok(self.document.get_dictionary_mut(page.0)?)
    }
}

impl DocumentContainer for PdfContainer {
    fn create_page(&mut self, size: PageSizeRequest) -> Result<PageHandle> {
        ensure_initialized()?;
        size.validate()?;
        // the MediaBox holds f32 reals
        size.at_container_precision().validate()?;

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(size.width_pt as f32),
                Object::Real(size.height_pt as f32),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
        let page_id = self.document.add_object(page_dict);

        let pages = self.document.get_dictionary_mut(self.pages_id)?;
        let kids = pages.get_mut(b"Kids")?.as_array_mut()?;
        kids.push(Object::Reference(page_id));
        let count = kids.len() as i64;
        pages.set("Count", Object::Integer(count));

        self.page_ids.push(page_id);
        log::debug!(
            "Created page {:?} ({} x {} pt)",
            page_id,
            size.width_pt,
            size.height_pt
        );
        Ok(PageHandle(page_id))
    }

    fn register_named_graphics_state(
        &mut self,
        page: PageHandle,
        name: &str,
        config: &OverprintConfig,
    ) -> Result<()> {
        let page_dict = self.page_dictionary_mut(page)?;
        let resources = page_dict.get_mut(b"Resources")?.as_dict_mut()?;
        if !resources.has(b"ExtGState") {
            resources.set("ExtGState", Object::Dictionary(Dictionary::new()));
        }
        let ext_gstates = resources.get_mut(b"ExtGState")?.as_dict_mut()?;
        ext_gstates.set(name, Object::Dictionary(config.to_ext_gstate()));

        log::debug!(
            "Registered /{} (OP {}, OPM {})",
            name,
            config.overprint,
            config.overprint_mode
        );
        Ok(())
    }

    fn attach_content(&mut self, page: PageHandle, bytes: &[u8]) -> Result<()> {
        // validate the handle before allocating the stream object
        self.page_dictionary_mut(page)?;

        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), bytes.to_vec()));
        self.page_dictionary_mut(page)?
            .set("Contents", Object::Reference(content_id));
        Ok(())
    }
}

fn ensure_initialized() -> Result<()> {
    if ContainerSession::is_initialized() {
        Ok(())
    } else {
        Err(VennError::ContainerInit(
            "call ContainerSession::initialize() first".to_string(),
        ))
    }
}
