//! Typed metadata model extracted from marked declarations.
//!
//! All records here are plain values built once per generation round; nothing
//! is mutated after construction except the group map during its single build
//! pass in [`ParameterModel::build`].

use std::collections::BTreeMap;

/// Group key used when a `target_parameter` marker leaves `group` unset.
pub const DEFAULT_GROUP: &str = "default";

/// Sentinel for unset integer marker attributes (container ids, animation
/// references).
pub const UNSET_ID: i32 = -1;

/// A marked declaration paired with its enclosing module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub module_path: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
        }
    }

    /// Path used to reference the declaration from generated code.
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }
}

/// One `target_parameter` marker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEntry {
    pub key: String,
    pub display_name: String,
    /// Rust type text, validated to parse as a type at scan time.
    pub ty: String,
    pub optional: bool,
    pub group: String,
}

/// Per-declaration grouping of parameter entries.
///
/// Groups iterate in lexicographic key order; entries within a group keep
/// their source declaration order. Duplicate keys within one group are kept
/// as-is - the generator does not validate key uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterModel {
    groups: BTreeMap<String, Vec<ParameterEntry>>,
    force_empty: bool,
}

impl ParameterModel {
    /// Single build pass: bucket `entries` by group key in scan order.
    pub fn build(entries: Vec<ParameterEntry>, force_empty: bool) -> Self {
        let mut groups: BTreeMap<String, Vec<ParameterEntry>> = BTreeMap::new();
        for entry in entries {
            groups.entry(entry.group.clone()).or_default().push(entry);
        }
        Self {
            groups,
            force_empty,
        }
    }

    /// Whether a zero-argument factory method is emitted for the declaration.
    ///
    /// True when forced or when no parameter markers were found. A forced
    /// empty method is suppressed when entries exist in the default group:
    /// both would be named `show<Declaration>`, and there is no overloading
    /// to disambiguate them.
    pub fn emits_empty_method(&self) -> bool {
        if self.groups.contains_key(DEFAULT_GROUP) {
            return false;
        }
        self.force_empty || self.groups.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ParameterEntry])> {
        self.groups
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }
}

/// Fixed attributes of an `activity_target` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityAttrs {
    pub enter_anim: i32,
    pub exit_anim: i32,
}

impl Default for ActivityAttrs {
    fn default() -> Self {
        Self {
            enter_anim: UNSET_ID,
            exit_anim: UNSET_ID,
        }
    }
}

/// Attachment mode carried by a `fragment_target` marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FragmentStateAttr {
    #[default]
    Replace,
    Add,
}

impl FragmentStateAttr {
    /// Expression path emitted into generated code.
    pub fn emit_path(&self) -> &'static str {
        match self {
            FragmentStateAttr::Replace => "FragmentState::Replace",
            FragmentStateAttr::Add => "FragmentState::Add",
        }
    }
}

/// Fixed per-declaration attributes of a `fragment_target` marker. Read once
/// and reused identically across every group's generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentAttrs {
    pub container_id: i32,
    pub tag: String,
    pub state: FragmentStateAttr,
    pub enter_anim: i32,
    pub exit_anim: i32,
    pub pop_enter_anim: i32,
    pub pop_exit_anim: i32,
}

impl Default for FragmentAttrs {
    fn default() -> Self {
        Self {
            container_id: UNSET_ID,
            tag: String::new(),
            state: FragmentStateAttr::default(),
            enter_anim: UNSET_ID,
            exit_anim: UNSET_ID,
            pop_enter_anim: UNSET_ID,
            pop_exit_anim: UNSET_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, group: &str) -> ParameterEntry {
        ParameterEntry {
            key: key.to_string(),
            display_name: "unspecified".to_string(),
            ty: "i64".to_string(),
            optional: false,
            group: group.to_string(),
        }
    }

    #[test]
    fn test_groups_preserve_entry_order() {
        let model = ParameterModel::build(
            vec![entry("b", "edit"), entry("a", "edit"), entry("c", "edit")],
            false,
        );

        let groups: Vec<_> = model.groups().collect();
        assert_eq!(groups.len(), 1);
        let (name, entries) = groups[0];
        assert_eq!(name, "edit");
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_groups_iterate_lexicographically() {
        let model = ParameterModel::build(
            vec![entry("x", "view"), entry("y", "edit"), entry("z", "admin")],
            false,
        );

        let names: Vec<_> = model.groups().map(|(name, _)| name).collect();
        assert_eq!(names, ["admin", "edit", "view"]);
    }

    #[test]
    fn test_empty_method_for_zero_entries() {
        let model = ParameterModel::build(Vec::new(), false);
        assert!(model.emits_empty_method());
        assert!(model.is_empty());
    }

    #[test]
    fn test_no_empty_method_for_grouped_entries() {
        let model = ParameterModel::build(vec![entry("userId", "edit")], false);
        assert!(!model.emits_empty_method());
    }

    #[test]
    fn test_force_empty_with_grouped_entries() {
        let model = ParameterModel::build(vec![entry("userId", "edit")], true);
        assert!(model.emits_empty_method());
    }

    #[test]
    fn test_force_empty_suppressed_by_default_group() {
        let model = ParameterModel::build(vec![entry("userId", DEFAULT_GROUP)], true);
        assert!(!model.emits_empty_method());
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let model = ParameterModel::build(vec![entry("userId", "edit"), entry("userId", "edit")], false);
        let (_, entries) = model.groups().next().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_qualified_declaration_path() {
        let declaration = Declaration::new("Profile", "crate::screens");
        assert_eq!(declaration.qualified(), "crate::screens::Profile");
    }
}
