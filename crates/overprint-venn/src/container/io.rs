//! Document I/O for generated diagrams

use crate::constants::{OVERPRINT_OFF_FILE_NAME, OVERPRINT_ON_FILE_NAME};
use crate::diagram::build_diagram_with;
use crate::options::DiagramOptions;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

use super::{PdfContainer, render_diagram};

/// Load a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save a PDF document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, VennError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Build one diagram variant and write it to `path`.
///
/// Requires a live `ContainerSession`.
pub async fn write_diagram(
    options: &DiagramOptions,
    overprint: bool,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref().to_owned();
    let diagram = build_diagram_with(options, overprint)?;

    let mut container = PdfContainer::new()?;
    render_diagram(&mut container, &diagram)?;
    container.save(&path).await?;

    log::info!(
        "Wrote overprint {} diagram to {}",
        if overprint { "on" } else { "off" },
        path.display()
    );
    Ok(())
}

/// Write both variants (`overprint_off.pdf`, `overprint_on.pdf`) into `out_dir`.
///
/// Returns the paths of the off and on variants.
pub async fn write_variants(
    options: &DiagramOptions,
    out_dir: impl AsRef<Path>,
) -> Result<(PathBuf, PathBuf)> {
    let off_path = out_dir.as_ref().join(OVERPRINT_OFF_FILE_NAME);
    let on_path = out_dir.as_ref().join(OVERPRINT_ON_FILE_NAME);

    tokio::try_join!(
        write_diagram(options, false, &off_path),
        write_diagram(options, true, &on_path),
    )?;

    Ok((off_path, on_path))
}
