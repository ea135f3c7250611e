use folio_render_core::RenderError;
use folio_tree::TreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub mod config;
pub mod engine;
pub mod style;
pub mod wrap;

pub use self::config::{HeadingSizes, LayoutConfig};
pub use self::engine::{LayoutEngine, Surface};
pub use self::style::{is_block_tag, TextStyle};
pub use self::wrap::wrap_words;
