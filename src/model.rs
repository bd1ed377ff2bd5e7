// Package surface model
//
// The documentable-element tree the generator walks. A manifest file is the
// adapter between whatever produced the package surface (an importer, a
// reflection dump, a hand-written description) and the walk: everything the
// walk branches on is an explicit field here, optional fields included.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of a documentable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Module,
    Class,
    Function,
}

/// One documentable element: a module, class, or function
///
/// `name` is the bare attribute name within its container; `qualname` is the
/// full dotted path from the root package. Members are kept in enumeration
/// order, which the generated pages preserve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub kind: Kind,
    pub name: String,
    pub qualname: String,
    /// Human-friendly heading override
    #[serde(default)]
    pub display_name: Option<String>,
    /// Free-form label tallied into the statistics table
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form documentation text
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Names within this module eligible for documentation; mandatory for
    /// any module that receives its own page
    #[serde(default)]
    pub exports: Option<Vec<String>>,
    /// Child attributes in enumeration order
    #[serde(default)]
    pub members: Vec<Item>,
}

impl Item {
    /// Create a bare item with no optional metadata
    pub fn new(kind: Kind, name: impl Into<String>, qualname: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            qualname: qualname.into(),
            display_name: None,
            category: None,
            doc: None,
            author: None,
            license: None,
            copyright: None,
            version: None,
            exports: None,
            members: Vec::new(),
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the documentation text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the export list
    pub fn with_exports(mut self, exports: Vec<&str>) -> Self {
        self.exports = Some(exports.into_iter().map(String::from).collect());
        self
    }

    /// Set the child members
    pub fn with_members(mut self, members: Vec<Item>) -> Self {
        self.members = members;
        self
    }

    /// Heading used on generated pages: the display name when set, the bare
    /// name otherwise
    pub fn heading(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Child members of kind `module`, in enumeration order
    pub fn module_members(&self) -> impl Iterator<Item = &Item> + '_ {
        self.members.iter().filter(|m| m.kind == Kind::Module)
    }

    /// Look up a direct member by bare name
    pub fn find_member(&self, name: &str) -> Option<&Item> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A package manifest: the root packages to document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub packages: Vec<Item>,
}

impl Manifest {
    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&contents)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the manifest structure
    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(Error::model("manifest lists no packages"));
        }
        for package in &self.packages {
            if package.kind != Kind::Module {
                return Err(Error::model(format!(
                    "package `{}` must have kind `module`",
                    package.qualname
                )));
            }
            validate_item(package)?;
        }
        Ok(())
    }
}

fn validate_item(item: &Item) -> Result<()> {
    if item.name.is_empty() {
        return Err(Error::model(format!(
            "element `{}` has an empty name",
            item.qualname
        )));
    }
    if item.qualname.is_empty() {
        return Err(Error::model(format!(
            "element `{}` has an empty qualified name",
            item.name
        )));
    }
    for member in &item.members {
        validate_item(member)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        let kind: Kind = serde_json::from_str("\"module\"").unwrap();
        assert_eq!(kind, Kind::Module);
        let kind: Kind = serde_json::from_str("\"class\"").unwrap();
        assert_eq!(kind, Kind::Class);
        let kind: Kind = serde_json::from_str("\"function\"").unwrap();
        assert_eq!(kind, Kind::Function);
    }

    #[test]
    fn test_item_optional_fields_default() {
        let json = r#"{"kind": "module", "name": "pkg", "qualname": "pkg"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.display_name.is_none());
        assert!(item.category.is_none());
        assert!(item.doc.is_none());
        assert!(item.exports.is_none());
        assert!(item.members.is_empty());
    }

    #[test]
    fn test_heading_fallback() {
        let item = Item::new(Kind::Module, "mod", "pkg.mod");
        assert_eq!(item.heading(), "mod");

        let item = item.with_display_name("My Module");
        assert_eq!(item.heading(), "My Module");
    }

    #[test]
    fn test_module_members_filters_kind() {
        let item = Item::new(Kind::Module, "pkg", "pkg").with_members(vec![
            Item::new(Kind::Class, "Foo", "pkg.Foo"),
            Item::new(Kind::Module, "sub", "pkg.sub"),
            Item::new(Kind::Function, "run", "pkg.run"),
        ]);
        let mods: Vec<&str> = item.module_members().map(|m| m.name.as_str()).collect();
        assert_eq!(mods, vec!["sub"]);
    }

    #[test]
    fn test_find_member() {
        let item = Item::new(Kind::Module, "pkg", "pkg").with_members(vec![
            Item::new(Kind::Class, "Foo", "pkg.Foo"),
        ]);
        assert!(item.find_member("Foo").is_some());
        assert!(item.find_member("Bar").is_none());
    }

    #[test]
    fn test_manifest_parse() {
        let json = r#"
        {
            "packages": [
                {
                    "kind": "module",
                    "name": "pkg",
                    "qualname": "pkg",
                    "exports": ["mod"],
                    "members": [
                        {"kind": "module", "name": "mod", "qualname": "pkg.mod", "exports": []}
                    ]
                }
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.packages.len(), 1);
        assert_eq!(manifest.packages[0].members[0].qualname, "pkg.mod");
    }

    #[test]
    fn test_manifest_rejects_empty() {
        let manifest = Manifest { packages: vec![] };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_manifest_rejects_non_module_root() {
        let manifest = Manifest {
            packages: vec![Item::new(Kind::Class, "Foo", "Foo")],
        };
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("must have kind `module`"));
    }

    #[test]
    fn test_manifest_rejects_empty_name() {
        let manifest = Manifest {
            packages: vec![Item::new(Kind::Module, "", "pkg")],
        };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_manifest_load_missing_file() {
        let result = Manifest::load(Path::new("/nonexistent/manifest.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_roundtrip() {
        let item = Item::new(Kind::Module, "mod", "pkg.mod")
            .with_display_name("A Module")
            .with_category("Helpers")
            .with_exports(vec!["Foo"]);
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.display_name.as_deref(), Some("A Module"));
        assert_eq!(back.category.as_deref(), Some("Helpers"));
        assert_eq!(back.exports.as_deref(), Some(&["Foo".to_string()][..]));
    }
}
