//! Menu and submenu registries - position-keyed entries owned by the host.
//!
//! Hosts feed these from plugin output as JSON arrays of placed entries,
//! the same shape they hand to their router.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One admin menu entry, top-level or nested.
///
/// `title` is what the operator sees (it may carry markup such as update
/// badges); `path` is the stable slug the host uses as lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Human-readable title, possibly with markup.
    pub title: String,
    /// Stable slug/URL used as lookup key. Unique among live top-level
    /// entries; duplicates are a host-side bug this crate doesn't handle.
    pub path: String,
}

impl MenuEntry {
    /// Create an entry from title and path.
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// An entry together with its slot, the JSON shape hosts feed us.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacedEntry {
    position: u32,
    #[serde(flatten)]
    entry: MenuEntry,
}

/// Top-level admin menu: an ordered, sparse, position-indexed collection.
///
/// Positions are arbitrary integers chosen at registration time (core
/// entries low, plugin entries high). Removal deletes the key and leaves
/// every other position untouched.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    entries: BTreeMap<u32, MenuEntry>,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a JSON array of placed entries.
    ///
    /// Malformed JSON yields an empty registry with a warning; a partial
    /// menu is worse than none during host startup.
    pub fn from_json(json: &str) -> Self {
        let mut registry = Self::new();
        match serde_json::from_str::<Vec<PlacedEntry>>(json) {
            Ok(placed) => {
                for p in placed {
                    registry.insert(p.position, p.entry);
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to parse menu JSON");
            }
        }
        registry
    }

    /// Register an entry at a position, replacing any existing occupant.
    pub fn insert(&mut self, position: u32, entry: MenuEntry) {
        self.entries.insert(position, entry);
    }

    /// Remove the entry at a position. The slot becomes empty; other
    /// positions keep their keys.
    pub fn remove(&mut self, position: u32) -> Option<MenuEntry> {
        self.entries.remove(&position)
    }

    /// Get the entry at a position.
    pub fn get(&self, position: u32) -> Option<&MenuEntry> {
        self.entries.get(&position)
    }

    /// Iterate entries in position order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &MenuEntry)> {
        self.entries.iter().map(|(pos, e)| (*pos, e))
    }

    /// Occupied positions, in order.
    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Whether any live entry uses this exact path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.values().any(|e| e.path == path)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Submenu registry: parent path -> sparse position-indexed entries.
///
/// The link to the parent is the key string alone; there is no owning
/// pointer, and a key without a live top-level entry is legal.
#[derive(Debug, Clone, Default)]
pub struct SubmenuRegistry {
    parents: BTreeMap<String, BTreeMap<u32, MenuEntry>>,
}

impl SubmenuRegistry {
    /// Create an empty submenu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a JSON object mapping parent paths to arrays
    /// of placed entries. Malformed JSON yields an empty registry with a
    /// warning.
    pub fn from_json(json: &str) -> Self {
        let mut registry = Self::new();
        match serde_json::from_str::<BTreeMap<String, Vec<PlacedEntry>>>(json) {
            Ok(parents) => {
                for (parent, placed) in parents {
                    for p in placed {
                        registry.insert(&parent, p.position, p.entry);
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to parse submenu JSON");
            }
        }
        registry
    }

    /// Register an entry under a parent at a position.
    pub fn insert(&mut self, parent: &str, position: u32, entry: MenuEntry) {
        self.parents
            .entry(parent.to_string())
            .or_default()
            .insert(position, entry);
    }

    /// Whether this exact string is a parent key.
    pub fn contains_parent(&self, parent: &str) -> bool {
        self.parents.contains_key(parent)
    }

    /// Entries under one parent, in position order.
    pub fn get(&self, parent: &str) -> Option<&BTreeMap<u32, MenuEntry>> {
        self.parents.get(parent)
    }

    /// Mutable entries under one parent.
    pub fn get_mut(&mut self, parent: &str) -> Option<&mut BTreeMap<u32, MenuEntry>> {
        self.parents.get_mut(parent)
    }

    /// Iterate every parent's entry map mutably, in parent-key order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut BTreeMap<u32, MenuEntry>)> {
        self.parents.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Total entry count across all parents.
    pub fn len(&self) -> usize {
        self.parents.values().map(BTreeMap::len).sum()
    }

    /// Check if no parent has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn removal_leaves_other_positions_untouched() {
        let mut menu = MenuRegistry::new();
        menu.insert(5, MenuEntry::new("Posts", "/admin/posts"));
        menu.insert(10, MenuEntry::new("Media", "/admin/media"));
        menu.insert(65, MenuEntry::new("Plugins", "/admin/plugins"));

        menu.remove(10);

        assert_eq!(menu.positions().collect::<Vec<_>>(), vec![5, 65]);
        assert_eq!(menu.get(5).unwrap().title, "Posts");
        assert_eq!(menu.get(65).unwrap().path, "/admin/plugins");
    }

    #[test]
    fn menu_from_json() {
        let json = r#"[
            {"position": 5, "title": "Posts", "path": "/admin/posts"},
            {"position": 65, "title": "Plugins", "path": "/admin/plugins"}
        ]"#;

        let menu = MenuRegistry::from_json(json);

        assert_eq!(menu.len(), 2);
        assert!(menu.contains_path("/admin/plugins"));
    }

    #[test]
    fn menu_from_malformed_json_is_empty() {
        let menu = MenuRegistry::from_json("not json at all");
        assert!(menu.is_empty());
    }

    #[test]
    fn submenu_from_json_groups_by_parent() {
        let json = r#"{
            "/admin/tools": [
                {"position": 1, "title": "Available Tools", "path": "/admin/tools/available"},
                {"position": 2, "title": "Import", "path": "/admin/tools/import"}
            ],
            "/admin/users": [
                {"position": 1, "title": "All Users", "path": "/admin/users/all"}
            ]
        }"#;

        let submenu = SubmenuRegistry::from_json(json);

        assert_eq!(submenu.len(), 3);
        assert!(submenu.contains_parent("/admin/tools"));
        assert_eq!(submenu.get("/admin/users").unwrap().len(), 1);
    }

    #[test]
    fn submenu_parent_without_menu_entry_is_legal() {
        let mut submenu = SubmenuRegistry::new();
        submenu.insert("/admin/orphan", 1, MenuEntry::new("Lost", "/admin/orphan/lost"));

        assert!(submenu.contains_parent("/admin/orphan"));
        assert_eq!(submenu.len(), 1);
    }
}
