//! Document container - the PDF side of the pipeline
//!
//! The diagram builder never touches the PDF object graph itself. It talks
//! to a `DocumentContainer`, which knows how to create a page, register a
//! named graphics state on it and attach the content stream.

mod io;
mod pdf;
mod session;

pub use io::{load_pdf, save_pdf, write_diagram, write_variants};
pub use pdf::PdfContainer;
pub use session::ContainerSession;

use crate::diagram::Diagram;
use crate::ink_state::OverprintConfig;
use crate::types::{PageSizeRequest, Result};
use lopdf::ObjectId;

/// Handle to a page created by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(pub ObjectId);

/// The capabilities the diagram pipeline needs from a document
pub trait DocumentContainer {
    /// Create an empty page of the requested size
    fn create_page(&mut self, size: PageSizeRequest) -> Result<PageHandle>;

    /// Register `config` under `/ExtGState /<name>` in the page resources
    fn register_named_graphics_state(
        &mut self,
        page: PageHandle,
        name: &str,
        config: &OverprintConfig,
    ) -> Result<()>;

    /// Replace the page's content with `bytes`
    fn attach_content(&mut self, page: PageHandle, bytes: &[u8]) -> Result<()>;
}

/// Hand a built diagram to `container`.
///
/// The graphics state is registered before the content that invokes it is
/// attached.
pub fn render_diagram<C: DocumentContainer + ?Sized>(
    container: &mut C,
    diagram: &Diagram,
) -> Result<PageHandle> {
    let page = container.create_page(diagram.page_size)?;
    container.register_named_graphics_state(
        page,
        &diagram.graphics_state.name,
        &diagram.graphics_state.config,
    )?;
    container.attach_content(page, diagram.content.as_bytes())?;
    Ok(page)
}
