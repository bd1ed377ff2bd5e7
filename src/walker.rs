// The recursive package walk
//
// Partitions a package's module members into plain modules and nested
// sub-packages, writes one page per plain module and one index per
// sub-package, and returns toctree entries for the caller's navigation.
// Sub-package links come before plain-module links in every index block.

use crate::classify::{classify, has_nested_modules, is_private_name, Classification};
use crate::error::{Error, Result};
use crate::model::{Item, Kind};
use crate::render::TemplateEngine;
use crate::stats::CategoryTally;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Options carried through the recursive walk
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Document single-underscore members and modules
    pub show_private: bool,
    /// Request inherited members on class pages
    pub show_inherited: bool,
}

/// Walks one or more root packages and writes their pages
///
/// The walker is scoped to a single generation run: the category tally and
/// the set of derived output paths accumulate across every root it walks.
pub struct PackageWalker<'a> {
    engine: &'a TemplateEngine,
    docs_root: PathBuf,
    content_dir: String,
    options: WalkOptions,
    tally: &'a mut CategoryTally,
    written: HashSet<PathBuf>,
    collisions: Vec<PathBuf>,
    pages: usize,
    indexes: usize,
}

/// Disjoint split of a container's module members
struct Partition<'t> {
    /// Modules with no nested modules of their own, privacy filter applied
    plain: Vec<&'t Item>,
    /// Modules that contain further documentable modules
    nested: Vec<&'t Item>,
}

impl<'a> PackageWalker<'a> {
    /// Create a walker writing under `docs_root`/`content_dir`
    pub fn new(
        engine: &'a TemplateEngine,
        docs_root: impl Into<PathBuf>,
        content_dir: impl Into<String>,
        options: WalkOptions,
        tally: &'a mut CategoryTally,
    ) -> Self {
        Self {
            engine,
            docs_root: docs_root.into(),
            content_dir: content_dir.into(),
            options,
            tally,
            written: HashSet::new(),
            collisions: Vec::new(),
            pages: 0,
            indexes: 0,
        }
    }

    /// Walk a root package
    ///
    /// Writes pages for its plain modules and recurses into sub-packages,
    /// but writes no index for the root itself. Returns the docs-root
    /// relative toctree entries for the top-level index, sub-packages first.
    pub fn walk_root(&mut self, package: &Item) -> Result<Vec<String>> {
        let parts = self.partition(package);
        let mut entries = Vec::with_capacity(parts.nested.len() + parts.plain.len());
        for sub in &parts.nested {
            self.recreate_package_dir(sub)?;
            entries.push(self.walk_nested(sub)?);
        }
        for module in &parts.plain {
            entries.push(self.write_module_page(module)?);
        }
        Ok(entries)
    }

    /// Walk a sub-package: recurse, write its own index page, and return
    /// the docs-root relative path of that index
    fn walk_nested(&mut self, package: &Item) -> Result<String> {
        let parts = self.partition(package);
        let mut entries = Vec::with_capacity(parts.nested.len() + parts.plain.len());
        for sub in &parts.nested {
            self.recreate_package_dir(sub)?;
            self.walk_nested(sub)?;
            entries.push(format!(
                "{}/index.rst",
                file_stem(last_segment(&sub.qualname))
            ));
        }
        for module in &parts.plain {
            self.write_module_page(module)?;
            entries.push(format!("{}.rst", file_stem(last_segment(&module.qualname))));
        }

        let body =
            self.engine
                .render_package_index(package.heading(), package.doc.as_deref(), &entries)?;
        let rel = index_path(&self.content_dir, &package.qualname);
        let path = self.docs_root.join(&rel);
        self.track(&path);
        fs::write(&path, body)?;
        self.indexes += 1;
        Ok(rel)
    }

    /// Split module members into plain modules and sub-packages
    ///
    /// Double-underscore names are dropped outright. Private plain modules
    /// are appended after the non-private ones when private members are
    /// shown, and discarded otherwise. Private sub-packages always recurse.
    fn partition<'t>(&self, package: &'t Item) -> Partition<'t> {
        let mut plain = Vec::new();
        let mut private = Vec::new();
        let mut nested = Vec::new();
        for member in package.module_members() {
            if classify(&member.name, true) == Classification::ExcludedDoubleUnderscore {
                continue;
            }
            if has_nested_modules(member) {
                nested.push(member);
            } else if is_private_name(&member.name) {
                private.push(member);
            } else {
                plain.push(member);
            }
        }
        if self.options.show_private {
            plain.extend(private);
        }
        Partition { plain, nested }
    }

    /// Write the page for one plain module and return its docs-root
    /// relative path
    ///
    /// A module that reaches this point without an export list aborts the
    /// run: that is an authoring error in the documented package, not a
    /// transient condition.
    fn write_module_page(&mut self, module: &Item) -> Result<String> {
        let exports = module
            .exports
            .as_ref()
            .ok_or_else(|| Error::missing_exports(&module.qualname))?;

        if let Some(category) = &module.category {
            self.tally.record(category);
        }

        let mut body =
            self.engine
                .render_module(module.heading(), &module.qualname, self.options.show_private)?;
        for member in &module.members {
            if !exports.iter().any(|e| e == &member.name) {
                continue;
            }
            if classify(&member.name, self.options.show_private) != Classification::Included {
                continue;
            }
            let block = match member.kind {
                Kind::Class => self.engine.render_class(
                    member.heading(),
                    &member.qualname,
                    self.options.show_private,
                    self.options.show_inherited,
                )?,
                Kind::Function => self
                    .engine
                    .render_function(member.heading(), &member.qualname)?,
                Kind::Module => continue,
            };
            if let Some(category) = &member.category {
                self.tally.record(category);
            }
            body.push('\n');
            body.push_str(&block);
        }

        let rel = page_path(&self.content_dir, &module.qualname);
        let path = self.docs_root.join(&rel);
        self.track(&path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        self.pages += 1;
        Ok(rel)
    }

    /// Recreate a sub-package's output directory so stale pages from a
    /// previous run cannot survive
    fn recreate_package_dir(&self, package: &Item) -> Result<()> {
        let dir = self
            .docs_root
            .join(&self.content_dir)
            .join(qual_to_path(&package.qualname));
        recreate_dir(&dir)
    }

    fn track(&mut self, path: &Path) {
        if !self.written.insert(path.to_path_buf()) {
            self.collisions.push(path.to_path_buf());
        }
    }

    /// Output paths derived more than once during this run
    pub fn collisions(&self) -> &[PathBuf] {
        &self.collisions
    }

    /// Module pages written so far
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Package index pages written so far
    pub fn indexes(&self) -> usize {
        self.indexes
    }
}

/// Delete and remake a directory
pub(crate) fn recreate_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// `a.b.c` becomes `a/b/c`; spaces become hyphens
pub fn qual_to_path(qualname: &str) -> String {
    qualname.replace('.', "/").replace(' ', "-")
}

/// A name used as a file name gets spaces replaced with hyphens
pub fn file_stem(name: &str) -> String {
    name.replace(' ', "-")
}

/// Page path for a plain module, relative to the docs root
pub fn page_path(content_dir: &str, qualname: &str) -> String {
    format!("{}/{}.rst", content_dir, qual_to_path(qualname))
}

/// Index path for a package level, relative to the docs root
pub fn index_path(content_dir: &str, qualname: &str) -> String {
    format!("{}/{}/index.rst", content_dir, qual_to_path(qualname))
}

fn last_segment(qualname: &str) -> &str {
    qualname.rsplit('.').next().unwrap_or(qualname)
}
