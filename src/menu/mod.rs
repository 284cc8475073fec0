//! Admin menu data model.
//!
//! The host populates these registries during `admin_menu_build`; the
//! trimming engine only ever deletes from them. Positions are sparse and
//! key-stable: removing an entry leaves a hole rather than shifting its
//! neighbors, because downstream consumers key off positions.

mod registry;

pub use registry::{MenuEntry, MenuRegistry, SubmenuRegistry};
