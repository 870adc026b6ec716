//! Entry point for the vestibulando site builder

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vestibulando_data::{CatalogSource, FileSource, HttpSource};
use vestibulando_site::config::{Cli, Command, SiteConfig};
use vestibulando_site::render::HtmlRenderer;
use vestibulando_site::build_site;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            data,
            out,
            exam,
            log_level,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(&log_level)),
                )
                .init();

            let source: Box<dyn CatalogSource> =
                if data.starts_with("http://") || data.starts_with("https://") {
                    Box::new(HttpSource::new(&data))
                } else {
                    Box::new(FileSource::new(&data))
                };

            let config = SiteConfig::with_out_dir(&out).with_exam(&exam);
            let report = build_site(source.as_ref(), &config, &HtmlRenderer).await?;

            println!(
                "Wrote {} pages ({} institutos, {} cursos) to {}",
                report.total(),
                report.instituto_pages,
                report.curso_pages,
                out.display()
            );
            Ok(())
        }
    }
}
