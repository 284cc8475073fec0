//! Dashboard widget data model.

mod registry;

pub use registry::{DashboardRegistry, WidgetBox};
