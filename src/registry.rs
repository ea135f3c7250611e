//! Resolves a renderer type to a backend instance.
//!
//! The registry is an explicit object built by the composition root
//! ([`RendererRegistry::with_pdf`]) and handed to whoever needs a renderer.
//! Factories cache their instance, so every request for a type yields the
//! same backend.

use crate::backend::{PdfBackend, Renderer, SinkFactory};
use crate::config::RendererConfig;
use crate::error::ConfigurationError;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

/// The kinds of backend a registry can hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RendererType {
    Pdf,
}

impl RendererType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererType::Pdf => "pdf",
        }
    }
}

impl fmt::Display for RendererType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(RendererType::Pdf),
            _ => Err(ConfigurationError::UnknownRendererType(s.to_string())),
        }
    }
}

pub trait RendererFactory: Send + Sync {
    fn renderer_type(&self) -> RendererType;

    /// Returns this factory's backend, constructing it on the first call only.
    fn create_renderer(&self) -> Arc<dyn Renderer>;
}

/// Creates at most one [`PdfBackend`] and returns it on every call.
pub struct PdfRendererFactory {
    config: RendererConfig,
    sink_factory: Option<SinkFactory>,
    instance: OnceCell<Arc<PdfBackend>>,
}

impl PdfRendererFactory {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            sink_factory: None,
            instance: OnceCell::new(),
        }
    }

    /// Backends from this factory draw into sinks produced by `sink_factory`
    /// instead of a PDF sink.
    pub fn with_sink_factory(config: RendererConfig, sink_factory: SinkFactory) -> Self {
        Self {
            sink_factory: Some(sink_factory),
            ..Self::new(config)
        }
    }

    /// The concrete backend, for callers that need more than the capability set.
    pub fn backend(&self) -> Arc<PdfBackend> {
        Arc::clone(self.instance.get_or_init(|| {
            log::info!("Created new PDF renderer instance");
            let config = self.config.clone();
            Arc::new(match &self.sink_factory {
                Some(factory) => PdfBackend::with_sink_factory(config, Arc::clone(factory)),
                None => PdfBackend::new(config),
            })
        }))
    }
}

impl Default for PdfRendererFactory {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl RendererFactory for PdfRendererFactory {
    fn renderer_type(&self) -> RendererType {
        RendererType::Pdf
    }

    fn create_renderer(&self) -> Arc<dyn Renderer> {
        self.backend()
    }
}

pub struct RendererRegistry {
    factories: RwLock<HashMap<RendererType, Arc<dyn RendererFactory>>>,
    default_type: RwLock<RendererType>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
            default_type: RwLock::new(RendererType::Pdf),
        }
    }
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the PDF factory registered and selected as default.
    pub fn with_pdf(config: RendererConfig) -> Self {
        let registry = Self::new();
        registry.register_factory(Arc::new(PdfRendererFactory::new(config)));
        registry.set_default_type(RendererType::Pdf);
        log::info!("PDF renderer factory registered successfully");
        registry
    }

    /// Registers `factory` under its type, replacing any earlier factory for that type.
    pub fn register_factory(&self, factory: Arc<dyn RendererFactory>) {
        let renderer_type = factory.renderer_type();
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(renderer_type, factory);
        log::info!("Registered renderer factory for type: {}", renderer_type);
    }

    /// Changes the default type. Ignored, with a warning, if nothing is registered for it.
    pub fn set_default_type(&self, renderer_type: RendererType) {
        if !self.is_registered(renderer_type) {
            log::warn!(
                "Cannot set default type to {} as no factory is registered for it",
                renderer_type
            );
            return;
        }
        *self.default_type.write().unwrap_or_else(PoisonError::into_inner) = renderer_type;
        log::info!("Default renderer type set to: {}", renderer_type);
    }

    pub fn default_type(&self) -> RendererType {
        *self.default_type.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_registered(&self, renderer_type: RendererType) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&renderer_type)
    }

    /// Resolves `requested`, or the default type, to its factory's renderer.
    pub fn create_renderer(
        &self,
        requested: Option<RendererType>,
    ) -> Result<Arc<dyn Renderer>, ConfigurationError> {
        let target = requested.unwrap_or_else(|| self.default_type());
        let factory = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&target)
            .cloned()
            .ok_or(ConfigurationError::NoFactory(target))?;

        log::debug!("Creating renderer of type: {}", target);
        Ok(factory.create_renderer())
    }

    pub fn create_renderer_by_name(&self, name: &str) -> Result<Arc<dyn Renderer>, ConfigurationError> {
        self.create_renderer(Some(name.parse()?))
    }
}
