mod common;

use common::{GeneratedPdf, TestResult, init_logger, recording_factory};
use folio::{
    ConfigurationError, PdfRendererFactory, RenderBackend, Renderer, RendererConfig,
    RendererFactory, RendererRegistry, RendererType, demo,
};
use std::sync::Arc;

fn same_instance(a: &Arc<dyn Renderer>, b: &Arc<dyn Renderer>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[test]
fn test_same_instance_for_repeated_requests() -> TestResult {
    init_logger();
    let registry = RendererRegistry::new();
    registry.register_factory(Arc::new(PdfRendererFactory::default()));

    let first = registry.create_renderer(Some(RendererType::Pdf))?;
    let second = registry.create_renderer(Some(RendererType::Pdf))?;
    let by_default = registry.create_renderer(None)?;
    let by_name = registry.create_renderer_by_name("pdf")?;

    assert!(same_instance(&first, &second));
    assert!(same_instance(&first, &by_default));
    assert!(same_instance(&first, &by_name));
    assert_eq!(first.renderer_type(), RendererType::Pdf);
    Ok(())
}

#[test]
fn test_unregistered_type_is_a_configuration_error() {
    let registry = RendererRegistry::new();

    match registry.create_renderer(Some(RendererType::Pdf)) {
        Err(ConfigurationError::NoFactory(RendererType::Pdf)) => {}
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("an empty registry must not resolve a renderer"),
    }
    assert!(matches!(
        registry.create_renderer_by_name("unregistered-type"),
        Err(ConfigurationError::UnknownRendererType(name)) if name == "unregistered-type"
    ));
}

#[test]
fn test_set_default_type_without_factory_changes_nothing() {
    let registry = RendererRegistry::new();
    assert_eq!(registry.default_type(), RendererType::Pdf);

    registry.set_default_type(RendererType::Pdf);

    assert_eq!(registry.default_type(), RendererType::Pdf);
    assert!(!registry.is_registered(RendererType::Pdf));
    assert!(registry.create_renderer(None).is_err());
}

#[test]
fn test_later_registration_replaces_factory() -> TestResult {
    let registry = RendererRegistry::new();
    let first_factory = Arc::new(PdfRendererFactory::default());
    let replacement = Arc::new(PdfRendererFactory::with_sink_factory(
        RendererConfig::default(),
        recording_factory(),
    ));

    registry.register_factory(first_factory.clone());
    let before = registry.create_renderer(None)?;
    registry.register_factory(replacement.clone());
    let after = registry.create_renderer(None)?;

    assert!(same_instance(&before, &first_factory.create_renderer()));
    assert!(same_instance(&after, &replacement.create_renderer()));
    assert!(!same_instance(&before, &after));
    Ok(())
}

#[test]
fn test_factory_constructs_once_across_threads() {
    let factory = Arc::new(PdfRendererFactory::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || factory.backend())
        })
        .collect();

    let backends: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for backend in &backends[1..] {
        assert!(Arc::ptr_eq(&backends[0], backend));
    }
}

#[tokio::test]
async fn test_sample_document_through_registry() -> TestResult {
    init_logger();
    let registry = RendererRegistry::with_pdf(RendererConfig::default());
    let renderer = registry.create_renderer(None)?;

    let root = demo::build_sample(renderer.as_ref(), "app-root", "Sunday, October 18, 2026");
    renderer.set_value(root, "").await?;
    let pdf = GeneratedPdf::from_bytes(renderer.save().await?)?;

    assert_eq!(pdf.page_count(), 1);
    let shown = pdf.shown_text()?;
    assert_eq!(shown[0].text, demo::TITLE);
    assert_eq!(shown[0].size, 24.0);
    assert!(shown.iter().any(|t| t.text.contains(demo::DESCRIPTION.split(' ').next().unwrap_or_default())));
    let date = shown.last().ok_or("date line missing")?;
    assert!(date.text.contains("2026"));
    assert_eq!(date.color, [1.0, 0.0, 0.0]);
    Ok(())
}
