//! Extension-point surface: hook names, the weight-ordered handler
//! registry, and registration of the removal callbacks.
//!
//! Handlers run in weight order (lower first); equal weights keep
//! registration order. The removal callbacks register with deliberately
//! large weights so every population handler has already run and removal
//! sees the final registries.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::dashboard::DashboardRegistry;
use crate::filter::MenuFilter;
use crate::menu::{MenuRegistry, SubmenuRegistry};

/// Hook point fired after the host assembles the admin menu.
pub const ADMIN_MENU_BUILD: &str = "admin_menu_build";

/// Hook point fired after the host assembles the dashboard widgets.
pub const DASHBOARD_SETUP: &str = "dashboard_setup";

/// Weight for the menu and submenu removal callbacks.
pub const MENU_TRIM_WEIGHT: i32 = 9999;

/// Weight for the dashboard removal callback.
pub const DASHBOARD_TRIM_WEIGHT: i32 = 999;

/// The host-owned admin registries, handed to hook handlers by mutable
/// reference. Handlers mutate them in place; there is no other output.
#[derive(Debug, Clone, Default)]
pub struct AdminRegistries {
    pub menu: MenuRegistry,
    pub submenu: SubmenuRegistry,
    pub dashboards: DashboardRegistry,
}

impl AdminRegistries {
    /// Create empty registries.
    pub fn new() -> Self {
        Self::default()
    }
}

type HookFn = Box<dyn Fn(&mut AdminRegistries)>;

/// A registered handler with its ordering weight.
struct HookHandler {
    weight: i32,
    callback: HookFn,
}

/// Registry mapping hook names to weight-ordered handlers.
///
/// In a live host this role belongs to the host's dispatcher; the crate
/// carries its own so registration ordering is testable without one.
#[derive(Default)]
pub struct HookRegistry {
    handlers: HashMap<String, Vec<HookHandler>>,
}

impl HookRegistry {
    /// Create an empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler on a hook with an ordering weight.
    pub fn register<F>(&mut self, hook: &str, weight: i32, callback: F)
    where
        F: Fn(&mut AdminRegistries) + 'static,
    {
        let handlers = self.handlers.entry(hook.to_string()).or_default();
        handlers.push(HookHandler {
            weight,
            callback: Box::new(callback),
        });
        // Stable sort keeps registration order within a weight.
        handlers.sort_by_key(|h| h.weight);
    }

    /// Invoke a hook: run its handlers in weight order against the
    /// registries. Unknown hooks are a no-op.
    pub fn invoke(&self, hook: &str, registries: &mut AdminRegistries) {
        if let Some(handlers) = self.handlers.get(hook) {
            for handler in handlers {
                (handler.callback)(registries);
            }
        }
    }

    /// Check if any handler is registered on a hook.
    pub fn has_hook(&self, hook: &str) -> bool {
        self.handlers.get(hook).is_some_and(|h| !h.is_empty())
    }

    /// Number of handlers on a hook.
    pub fn handler_count(&self, hook: &str) -> usize {
        self.handlers.get(hook).map(Vec::len).unwrap_or(0)
    }
}

/// Register the removal callbacks for every directive present in the
/// config. An absent directive registers nothing at all, which is distinct
/// from a present-but-empty one (that registers a callback that will match
/// nothing).
///
/// Directive strings are captured raw and parsed on every invocation.
pub fn attach(hooks: &mut HookRegistry, config: &Config, filter: MenuFilter) {
    let filter = Arc::new(filter);

    if let Some(spec) = config.remove_menus.clone() {
        let filter = Arc::clone(&filter);
        debug!(hook = ADMIN_MENU_BUILD, "registering menu removal");
        hooks.register(ADMIN_MENU_BUILD, MENU_TRIM_WEIGHT, move |regs| {
            filter.remove_menus(&mut regs.menu, &spec);
        });
    }

    if let Some(spec) = config.remove_submenus.clone() {
        let filter = Arc::clone(&filter);
        debug!(hook = ADMIN_MENU_BUILD, "registering submenu removal");
        hooks.register(ADMIN_MENU_BUILD, MENU_TRIM_WEIGHT, move |regs| {
            let AdminRegistries { menu, submenu, .. } = regs;
            filter.remove_submenus(menu, submenu, &spec);
        });
    }

    if let Some(spec) = config.remove_dashboard_boxes.clone() {
        let filter = Arc::clone(&filter);
        debug!(hook = DASHBOARD_SETUP, "registering dashboard removal");
        hooks.register(DASHBOARD_SETUP, DASHBOARD_TRIM_WEIGHT, move |regs| {
            filter.remove_dashboard_widgets(&mut regs.dashboards, &spec);
        });
    }
}
