use folio::{RenderBackend, RendererConfig, RendererRegistry, demo, preview};
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Renders the sample document to a PDF file and optionally previews it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Renders a sample document to PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/output.pdf> [path/to/preview-dir] [path/to/config.json]",
            args[0]
        );
        std::process::exit(1);
    }

    let output_path = &args[1];
    let config = match args.get(3) {
        Some(path) => {
            println!("Loading configuration from {}", path);
            RendererConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => RendererConfig::default(),
    };

    let registry = RendererRegistry::with_pdf(config);
    let renderer = registry.create_renderer(None)?;

    let root = demo::build_sample(renderer.as_ref(), "app-root", &demo::today());
    renderer.set_value(root, "").await?;
    let bytes = renderer.save().await?;

    fs::write(output_path, &bytes)?;
    println!("Successfully generated {}", output_path);

    if let Some(mount) = args.get(2) {
        if let Some(shown) = preview::display(&bytes, Path::new(mount), "folio-demo")? {
            println!("Preview written to {} ({} pages)", shown.path.display(), shown.page_count);
        }
    }
    Ok(())
}
