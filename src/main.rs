use onepage::{build, content, BuildOptions, RenderError, SystemFonts};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RenderError> {
    // logs go to stderr; stdout carries only the three result lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = build(
        &content::kinevo_summary(),
        &SystemFonts::default(),
        &BuildOptions::default(),
    )?;

    println!("PDF gerado: {}", report.pdf_path.display());
    println!("Preview PNG: {}", report.png_path.display());
    println!("y final: {}", report.cursor);

    Ok(())
}
