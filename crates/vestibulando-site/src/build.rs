//! The build orchestrator
//!
//! Fetches the catalog snapshot once, enumerates every route, then
//! resolves and renders each route against that same snapshot. Any
//! resolution miss here means enumeration and resolution disagree about
//! the snapshot, so the whole build aborts with
//! [`BuildError::UnresolvedRoute`] naming the route and the missing key.

use std::path::Path;

use tracing::{debug, info};

use vestibulando_core::paths::{course_paths, institute_paths};
use vestibulando_core::resolve::{resolve_curso, resolve_instituto};
use vestibulando_data::CatalogSource;

use crate::config::SiteConfig;
use crate::error::{BuildError, BuildResult};
use crate::render::PageRenderer;
use crate::routes;

/// Summary of one completed build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub instituto_pages: usize,
    pub curso_pages: usize,
}

impl BuildReport {
    /// Total number of pages written
    pub fn total(&self) -> usize {
        self.instituto_pages + self.curso_pages
    }
}

/// Build the whole site into `config.out_dir`
///
/// Fetches the catalog exactly once; every page is resolved and rendered
/// from that immutable snapshot. Pages are independent and read-only over
/// the snapshot, so they could be rendered concurrently — this builder
/// writes them sequentially, which keeps failure output ordered.
pub async fn build_site(
    source: &dyn CatalogSource,
    config: &SiteConfig,
    renderer: &dyn PageRenderer,
) -> BuildResult<BuildReport> {
    let catalog = source.fetch().await?;
    info!("Catalog snapshot loaded: {} campi", catalog.campi.len());

    let instituto_routes = institute_paths(&catalog);
    let curso_routes = course_paths(&catalog);
    info!(
        "Enumerated {} instituto routes, {} curso routes",
        instituto_routes.len(),
        curso_routes.len()
    );

    let mut report = BuildReport::default();

    for params in &instituto_routes {
        let route = routes::instituto_route(params);
        let page = resolve_instituto(&catalog, params).map_err(|source| {
            BuildError::UnresolvedRoute {
                route: route.display().to_string(),
                source,
            }
        })?;
        let html = renderer.render_instituto(&page, &config.exam);
        write_page(&config.out_dir.join(&route), &html).await?;
        debug!("Wrote {}", route.display());
        report.instituto_pages += 1;
    }

    for params in &curso_routes {
        let route = routes::curso_route(params, &config.exam);
        let page = resolve_curso(&catalog, params, &config.exam).map_err(|source| {
            BuildError::UnresolvedRoute {
                route: route.display().to_string(),
                source,
            }
        })?;
        let html = renderer.render_curso(&page, &config.exam);
        write_page(&config.out_dir.join(&route), &html).await?;
        debug!("Wrote {}", route.display());
        report.curso_pages += 1;
    }

    info!("Build complete: {} pages", report.total());
    Ok(report)
}

async fn write_page(path: &Path, html: &str) -> BuildResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, html).await?;
    Ok(())
}
