// Top-level orchestration
//
// Iterates over the root packages, prepares the output tree, drives the
// walker per root, and assembles the single top-level index document.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Item, Kind};
use crate::render::TemplateEngine;
use crate::stats::CategoryTally;
use crate::walker::{qual_to_path, recreate_dir, PackageWalker};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the top-level index document
const INDEX_FILE: &str = "index.rst";

/// Hidden toctree that keeps the index itself in navigation
const SELF_TOCTREE: &str = "\n.. toctree::\n   :hidden:\n\n   self\n";

/// Closing admonition appended unless the notice is disabled
const GENERATED_NOTICE: &str = "\n\n.. admonition:: Docs Automatically Generated\n   :class: note\n\n   This site was assembled by `gazetteer`_.\n\n.. _gazetteer: https://github.com/sudokatie/gazetteer\n";

/// Documentation generator for a set of root packages
pub struct Generator {
    config: Config,
    engine: TemplateEngine,
}

impl Generator {
    /// Create a new generator with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let engine = TemplateEngine::new()?;
        Ok(Self { config, engine })
    }

    /// Generate all pages and the top-level index for the given packages
    ///
    /// The content tree is deleted and remade first, so stale pages from a
    /// previous run cannot survive. The index document is fully overwritten.
    pub fn document_packages(&self, packages: &[Item]) -> Result<GenerationReport> {
        let docs_root = self.config.output.directory.clone();
        let content_root = docs_root.join(&self.config.output.content_dir);
        fs::create_dir_all(&docs_root)?;
        recreate_dir(&content_root)?;

        let mut report = GenerationReport::default();
        let mut tally = CategoryTally::new();
        let mut nav = String::new();
        let mut walker = PackageWalker::new(
            &self.engine,
            docs_root.clone(),
            self.config.output.content_dir.clone(),
            self.config.walk_options(),
            &mut tally,
        );

        for package in packages {
            if package.kind != Kind::Module {
                return Err(Error::model(format!(
                    "root element `{}` must be a module",
                    package.qualname
                )));
            }

            nav.push_str(&format!(
                "\n\n.. toctree::\n   :maxdepth: 5\n   :hidden:\n   :caption: {}:\n",
                package.heading()
            ));

            let package_dir = content_root.join(qual_to_path(&package.qualname));
            recreate_dir(&package_dir)?;

            if package.doc.is_some() {
                let rel = self.write_about_page(package, &package_dir)?;
                nav.push_str(&format!("\n   {}", rel));
                report.about_pages += 1;
            }

            for entry in walker.walk_root(package)? {
                nav.push_str(&format!("\n   {}", entry));
            }
        }

        report.pages = walker.pages();
        report.indexes = walker.indexes();
        report.collisions = walker.collisions().to_vec();

        let mut index = match &self.config.index.base {
            Some(path) => fs::read_to_string(path)?,
            None => default_index(packages),
        };
        index.push_str(&tally.render(&self.config.index.stats_title));
        index.push_str(SELF_TOCTREE);
        for page in &self.config.index.intro_pages {
            index.push_str(&format!("   {}\n", page.trim()));
        }
        index.push('\n');
        if let Some(preamble) = &self.config.index.preamble {
            index.push_str(preamble);
        }
        index.push_str(&nav);
        if let Some(epilogue) = &self.config.index.epilogue {
            index.push_str(epilogue);
        }
        if self.config.generator.notice {
            index.push_str(GENERATED_NOTICE);
        }
        fs::write(docs_root.join(INDEX_FILE), index)?;

        Ok(report)
    }

    /// Write a root package's about page and return its docs-root relative
    /// path
    ///
    /// Metadata bullets are included only for the fields that are present.
    fn write_about_page(&self, package: &Item, package_dir: &Path) -> Result<String> {
        let title = format!("About {}", package.heading());
        let mut text = format!("{}\n{}\n", title, "=".repeat(title.chars().count()));
        if let Some(author) = &package.author {
            text.push_str(&format!("\n* Author: {}", author));
        }
        if let Some(license) = &package.license {
            text.push_str(&format!("\n* License: {}", license));
        }
        if let Some(copyright) = &package.copyright {
            text.push_str(&format!("\n* Copyright: {}", copyright));
        }
        if let Some(version) = &package.version {
            text.push_str(&format!("\n* Version: {}", version));
        }
        text.push_str("\n\n");
        if let Some(doc) = &package.doc {
            text.push_str(doc);
        }

        fs::write(package_dir.join("about.rst"), text)?;
        Ok(format!(
            "{}/{}/about.rst",
            self.config.output.content_dir,
            qual_to_path(&package.qualname)
        ))
    }
}

/// Default welcome text used when no base index template is configured
fn default_index(packages: &[Item]) -> String {
    let names: Vec<String> = packages
        .iter()
        .map(|p| format!("``{}``", p.qualname))
        .collect();
    let (list, plural) = match names.len() {
        0 | 1 => (names.first().cloned().unwrap_or_default(), ""),
        2 => (names.join(" and "), "s"),
        n => (
            format!("{}, and {}", names[..n - 1].join(", "), names[n - 1]),
            "s",
        ),
    };
    format!(
        "\nWelcome to the docs!\n********************\n\nWelcome to the code documentation for the {} package{}.\n\n",
        list, plural
    )
}

/// Report of what one generation run produced
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Module pages written
    pub pages: usize,
    /// Package index pages written
    pub indexes: usize,
    /// About pages written
    pub about_pages: usize,
    /// Output paths derived more than once during the run
    pub collisions: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Generated {} module pages, {} package indexes, {} about pages",
            self.pages, self.indexes, self.about_pages
        );
        if !self.collisions.is_empty() {
            summary.push_str(&format!(" ({} path collisions)", self.collisions.len()));
        }
        summary
    }
}
