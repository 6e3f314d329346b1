//! Dashboard layouts: equally sized items arranged in a balanced grid.
//!
//! - [`layouts`]: the measurement protocol and the grid arrangement algorithm
//! - [`containers::dashboard::Dashboard`]: the container driving both passes
//! - [`item`], [`adapter`], [`observer`]: item data, widget construction and
//!   change notification

pub mod adapter;
pub mod constraint;
pub mod containers;
pub mod error;
pub mod geometry;
mod grapheme;
pub mod item;
pub mod layouts;
mod log_init;
pub mod observer;
pub mod testing;
pub mod widget;

pub use adapter::{Adapter, DashboardAdapter};
pub use constraint::{Constraint, resolve_size};
pub use containers::dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use geometry::{Region, Size};
pub use item::{
    ContainerItem, Content, DashboardItem, DescribeItem, Icon, ItemMetadata, SimpleItem,
};
pub use layouts::{
    Arrangement, DashboardLayout, Layout, LayoutNode, Negotiation, WidgetPlacement, negotiate,
};
pub use log_init::init_logger;
pub use observer::{DataSetEvent, DataSetNotifier, DataSetObserver};
pub use widget::Widget;
pub use widget::button::{ClickHandler, DashboardButton, ItemClick};

// Re-export the log crate so users can use dashboard::log::info!, etc.
pub use log;
