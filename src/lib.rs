//! Admin UI trimming engine.
//!
//! Site operators name admin menu entries, submenu entries, and dashboard
//! widget boxes in comma-separated directives; this crate removes the named
//! entries from the host CMS's in-memory registries after the host has
//! finished populating them. Removal is the only mutation: nothing is
//! inserted, reordered, or persisted, and the pages behind the entries are
//! untouched.
//!
//! The engine hooks into the host at two points (`admin_menu_build` and
//! `dashboard_setup`) with deliberately late weights so every
//! population handler has already run. See [`hooks::attach`].

pub mod config;
pub mod dashboard;
pub mod filter;
pub mod hooks;
pub mod menu;
