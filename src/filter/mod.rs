//! Matching and removal engine.
//!
//! All three operations share one matching rule: case-insensitive,
//! whitespace-trimmed, exact equality against an entry's path or title.
//! Partial and prefix matches are never allowed; over-removal from a sloppy
//! directive would be much worse than a term that silently misses.
//!
//! Directives are parsed fresh on every invocation and every lookup miss is
//! a silent no-op: operators share one config across installs where not
//! every referenced menu or widget exists.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::dashboard::DashboardRegistry;
use crate::menu::{MenuEntry, MenuRegistry, SubmenuRegistry};

/// Trim surrounding whitespace and lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Fixed mapping from human-friendly search terms to canonical identifiers.
///
/// Covers entries whose title and path diverge enough that neither is what
/// an operator would naturally type (the comments menu title carries a
/// pending count, for example). Built once at startup and injected into the
/// filter; each operation gets its own strictly scoped table.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    /// Build a table from alias/canonical pairs. Aliases are stored
    /// normalized.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            map: pairs
                .iter()
                .map(|(alias, canonical)| (normalize(alias), (*canonical).to_string()))
                .collect(),
        }
    }

    /// Default aliases for top-level menu searches.
    pub fn menu_defaults() -> Self {
        Self::from_pairs(&[
            ("plugins", "/admin/plugins"),
            ("comments", "/admin/comments"),
        ])
    }

    /// Default aliases for dashboard widget searches.
    pub fn dashboard_defaults() -> Self {
        Self::from_pairs(&[
            ("recent comments", "dashboard_recent_comments"),
            ("quick draft", "dashboard_quick_draft"),
        ])
    }

    /// Resolve a term: normalize it, then return its canonical value if
    /// aliased, else the normalized term unchanged.
    pub fn resolve(&self, term: &str) -> String {
        let term = normalize(term);
        self.map.get(&term).cloned().unwrap_or(term)
    }
}

/// The removal engine, holding the per-operation alias tables.
#[derive(Debug, Clone)]
pub struct MenuFilter {
    menu_aliases: AliasTable,
    dashboard_aliases: AliasTable,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuFilter {
    /// Create a filter with the default alias tables.
    pub fn new() -> Self {
        Self {
            menu_aliases: AliasTable::menu_defaults(),
            dashboard_aliases: AliasTable::dashboard_defaults(),
        }
    }

    /// Create a filter with custom alias tables.
    pub fn with_aliases(menu_aliases: AliasTable, dashboard_aliases: AliasTable) -> Self {
        Self {
            menu_aliases,
            dashboard_aliases,
        }
    }

    /// Remove top-level menu entries named in a comma-separated spec.
    ///
    /// Each term removes at most the first matching entry in registry
    /// order; top-level paths are unique, so first-match is deterministic.
    pub fn remove_menus(&self, menu: &mut MenuRegistry, spec: &str) {
        for raw in spec.split(',') {
            if let Some(position) = self.find_menu_position(menu, raw)
                && let Some(entry) = menu.remove(position)
            {
                debug!(position, path = %entry.path, "removed menu entry");
            }
        }
    }

    /// Remove submenu entries named in a comma-separated spec.
    ///
    /// Terms are `child` or `parent|child`. Without a parent the child is
    /// removed under every parent; with one, only under that parent. The
    /// parent may be given either as the raw registry key or as a search
    /// term resolved like a top-level menu, so operators don't need to
    /// know internal keys. Unlike top-level removal, every matching entry
    /// goes, not just the first: the same child name recurs across
    /// parents and contexts by design.
    pub fn remove_submenus(&self, menu: &MenuRegistry, submenu: &mut SubmenuRegistry, spec: &str) {
        for raw in spec.split(',') {
            let mut parts = raw.split('|');
            let first = parts.next().unwrap_or_default();
            // Only the first two segments count; extra pipes are discarded.
            let second = parts.next();

            let Some(child_raw) = second else {
                let child = normalize(first);
                remove_from_all_parents(submenu, &child);
                continue;
            };

            let parent = normalize(first);
            let child = normalize(child_raw);
            if parent.is_empty() {
                // "|term" has no usable parent; treated as unscoped.
                remove_from_all_parents(submenu, &child);
            } else if submenu.contains_parent(&parent) {
                // Parent given as the raw registry key.
                remove_under_parent(submenu, &parent, &child);
            } else if let Some(position) = self.find_menu_position(menu, &parent)
                && let Some(entry) = menu.get(position)
            {
                // Parent given as a menu search term.
                let key = entry.path.clone();
                remove_under_parent(submenu, &key, &child);
            }
        }
    }

    /// Remove dashboard widget boxes named in a comma-separated spec,
    /// across every grid context of every dashboard.
    pub fn remove_dashboard_widgets(&self, dashboards: &mut DashboardRegistry, spec: &str) {
        let targets: HashSet<String> = spec
            .split(',')
            .map(normalize)
            .filter(|t| !t.is_empty())
            .map(|t| self.dashboard_aliases.resolve(&t))
            .collect();
        if targets.is_empty() {
            return;
        }

        for boxes in dashboards.contexts_mut() {
            let before = boxes.len();
            boxes.retain(|w| {
                !(targets.contains(&w.id.to_lowercase()) || targets.contains(&normalize(&w.title)))
            });
            let removed = before - boxes.len();
            if removed > 0 {
                debug!(removed, "removed dashboard widgets from grid context");
            }
        }
    }

    /// Resolve a raw search term to the position of the first matching
    /// top-level entry. Empty terms (stray commas in the spec) match
    /// nothing.
    fn find_menu_position(&self, menu: &MenuRegistry, raw: &str) -> Option<u32> {
        let term = normalize(raw);
        if term.is_empty() {
            return None;
        }
        let term = self.menu_aliases.resolve(&term);
        menu.iter()
            .find(|(_, entry)| entry_matches(entry, &term))
            .map(|(position, _)| position)
    }
}

/// Exact match against path first, then trimmed title.
fn entry_matches(entry: &MenuEntry, term: &str) -> bool {
    term == entry.path.to_lowercase() || term == normalize(&entry.title)
}

fn remove_from_all_parents(submenu: &mut SubmenuRegistry, term: &str) {
    for (parent, entries) in submenu.iter_mut() {
        remove_matching(parent, entries, term);
    }
}

fn remove_under_parent(submenu: &mut SubmenuRegistry, parent: &str, term: &str) {
    if let Some(entries) = submenu.get_mut(parent) {
        remove_matching(parent, entries, term);
    }
}

/// Remove every matching entry from one parent's position map.
fn remove_matching(parent: &str, entries: &mut BTreeMap<u32, MenuEntry>, term: &str) {
    let positions: Vec<u32> = entries
        .iter()
        .filter(|(_, entry)| entry_matches(entry, term))
        .map(|(position, _)| *position)
        .collect();
    for position in positions {
        if let Some(entry) = entries.remove(&position) {
            debug!(parent, position, path = %entry.path, "removed submenu entry");
        }
    }
}
