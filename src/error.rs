// src/error.rs
use crate::registry::RendererType;
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// Raised while wiring renderers together, before any document exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("No renderer factory registered for type: {0}")]
    NoFactory(RendererType),

    #[error("Unknown renderer type: {0}")]
    UnknownRendererType(String),

    #[error("Invalid renderer configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(e: serde_json::Error) -> Self {
        ConfigurationError::InvalidConfig(e.to_string())
    }
}

/// A failed document setup. Cloned out to every caller that waited on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Backend initialization failed: {message}")]
pub struct InitializationError {
    message: String,
}

impl InitializationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RenderError> for InitializationError {
    fn from(e: RenderError) -> Self {
        InitializationError::new(e.to_string())
    }
}

/// Errors returned by the asynchronous backend operations.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Backend state lock was poisoned")]
    Lock,
}

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generated document could not be read back: {0}")]
    Pdf(#[from] lopdf::Error),
}
