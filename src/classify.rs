// Member classification
//
// Name-based privacy rules and the nested-module predicate that splits
// containers into plain modules and sub-packages.

use crate::model::{Item, Kind};

/// Outcome of classifying a member name for documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Documented
    Included,
    /// Names starting with two underscores are never documented
    ExcludedDoubleUnderscore,
    /// Single-underscore names are skipped unless private members are shown
    ExcludedPrivate,
}

/// Classify a member name under the given privacy setting
///
/// Double-underscore names are excluded unconditionally; single-underscore
/// names are excluded only when `show_private` is off.
pub fn classify(name: &str, show_private: bool) -> Classification {
    if name.starts_with("__") {
        Classification::ExcludedDoubleUnderscore
    } else if name.starts_with('_') && !show_private {
        Classification::ExcludedPrivate
    } else {
        Classification::Included
    }
}

/// Whether a name counts as private (single leading underscore or more)
pub fn is_private_name(name: &str) -> bool {
    name.starts_with('_')
}

/// Whether a container holds further documentable modules
///
/// True iff the container declares an export list and at least one exported
/// name resolves to a member of kind `module`. A container without an export
/// list has no nested modules; the hard requirement for an export list
/// applies only when a module is selected for its own page.
pub fn has_nested_modules(item: &Item) -> bool {
    let Some(exports) = &item.exports else {
        return false;
    };
    exports.iter().any(|name| {
        item.find_member(name)
            .map(|m| m.kind == Kind::Module)
            .unwrap_or(false)
    })
}
