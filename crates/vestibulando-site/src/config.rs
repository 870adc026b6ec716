//! Configuration for the site builder

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Configuration for one site build
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory the generated pages are written into
    pub out_dir: PathBuf,
    /// Admission-exam kind to emit score pages for
    pub exam: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("./public"),
            exam: "fuvest".into(),
        }
    }
}

impl SiteConfig {
    /// Create a configuration with a custom output directory
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Set the admission-exam kind
    pub fn with_exam(mut self, exam: impl Into<String>) -> Self {
        self.exam = exam.into();
        self
    }
}

#[derive(Parser)]
#[command(name = "vestibulando-site", about = "Static site builder for the vestibulando catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the full site from one catalog snapshot
    Build {
        /// Catalog location: a JSON file path, or an http(s) URL
        #[arg(long)]
        data: String,
        /// Output directory for the generated pages
        #[arg(long, default_value = "./public")]
        out: PathBuf,
        /// Admission-exam kind to emit score pages for
        #[arg(long, default_value = "fuvest")]
        exam: String,
        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        log_level: String,
    },
}
