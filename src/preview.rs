use crate::error::PreviewError;
use std::fs;
use std::path::{Path, PathBuf};

/// A document written out for viewing.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub path: PathBuf,
    pub page_count: usize,
}

/// Writes `bytes` to `<mount>/<name>.pdf` and reports its page count.
///
/// A missing mount point only skips the preview: it logs a warning and
/// returns `Ok(None)`.
pub fn display(bytes: &[u8], mount: &Path, name: &str) -> Result<Option<Preview>, PreviewError> {
    log::debug!("Displaying PDF in {}", mount.display());
    if !mount.is_dir() {
        log::warn!("Failed to find preview mount point {}", mount.display());
        return Ok(None);
    }

    let path = mount.join(format!("{}.pdf", name));
    fs::write(&path, bytes)?;

    let page_count = lopdf::Document::load_mem(bytes)?.get_pages().len();
    log::info!(
        "PDF has {} pages and is now displayed at {}",
        page_count,
        path.display()
    );
    Ok(Some(Preview { path, page_count }))
}
