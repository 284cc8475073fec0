//! Dashboard widget registry - dashboard -> grid context -> ordered boxes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One widget box on a dashboard grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetBox {
    /// Canonical widget id (e.g. `dashboard_recent_comments`).
    pub id: String,
    /// Human-readable box title.
    pub title: String,
    /// Rendering payload owned by the host. Never inspected here.
    #[serde(default)]
    pub render: JsonValue,
}

impl WidgetBox {
    /// Create a box with an empty rendering payload.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            render: JsonValue::Null,
        }
    }
}

/// All dashboards' widget boxes, grouped by grid context.
///
/// Three levels deep like the host keeps them: dashboard name (sites can
/// have more than one), grid context within it ("normal", "side", ...),
/// then the ordered boxes in that column.
#[derive(Debug, Clone, Default)]
pub struct DashboardRegistry {
    dashboards: BTreeMap<String, BTreeMap<String, Vec<WidgetBox>>>,
}

impl DashboardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a box to a dashboard's grid context.
    pub fn add(&mut self, dashboard: &str, context: &str, widget: WidgetBox) {
        self.dashboards
            .entry(dashboard.to_string())
            .or_default()
            .entry(context.to_string())
            .or_default()
            .push(widget);
    }

    /// Boxes in one grid context, in order.
    pub fn context(&self, dashboard: &str, context: &str) -> Option<&[WidgetBox]> {
        self.dashboards
            .get(dashboard)
            .and_then(|contexts| contexts.get(context))
            .map(Vec::as_slice)
    }

    /// Iterate every context list mutably, across all dashboards.
    pub fn contexts_mut(&mut self) -> impl Iterator<Item = &mut Vec<WidgetBox>> {
        self.dashboards.values_mut().flat_map(BTreeMap::values_mut)
    }

    /// Whether any context on any dashboard holds a box with this id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.dashboards
            .values()
            .flat_map(BTreeMap::values)
            .flatten()
            .any(|w| w.id == id)
    }

    /// Total box count across all dashboards and contexts.
    pub fn len(&self) -> usize {
        self.dashboards
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Check if no dashboard has any box.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup_by_context() {
        let mut dash = DashboardRegistry::new();
        dash.add("dashboard", "normal", WidgetBox::new("dashboard_activity", "Activity"));
        dash.add("dashboard", "side", WidgetBox::new("dashboard_quick_draft", "Quick Draft"));

        assert_eq!(dash.len(), 2);
        assert!(dash.contains_id("dashboard_activity"));
        let side = dash.context("dashboard", "side").unwrap();
        assert_eq!(side[0].title, "Quick Draft");
    }

    #[test]
    fn contexts_mut_covers_every_dashboard() {
        let mut dash = DashboardRegistry::new();
        dash.add("dashboard", "normal", WidgetBox::new("a", "A"));
        dash.add("network", "side", WidgetBox::new("b", "B"));

        let lists: Vec<_> = dash.contexts_mut().collect();
        assert_eq!(lists.len(), 2);
    }
}
