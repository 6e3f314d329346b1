//! Layout algorithms for arranging dashboard items within a container.
//!
//! ## Architecture
//!
//! - **LayoutNode trait**: the two-phase measurement protocol every child speaks
//! - **negotiate()**: finds the one cell size shared by all visible children
//! - **Layout trait**: defines the `arrange()` method that layouts must implement
//! - **DashboardLayout**: picks the rows/columns split with the most balanced whitespace
//!
//! ## Usage
//!
//! Containers first call [`negotiate`] during their measurement pass, then hand
//! the resulting cell size to a [`DashboardLayout`] during the placement pass.

mod dashboard;
mod negotiator;

pub use dashboard::{Arrangement, DashboardLayout, UNEVEN_GRID_PENALTY};
pub use negotiator::{Negotiation, negotiate};

use crate::constraint::Constraint;
use crate::geometry::{Region, Size};

/// Result of layout arrangement - maps child indices to their computed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetPlacement {
    /// Index of the child widget in the children vector
    pub child_index: usize,
    /// Computed region where this child should be placed
    pub region: Region,
}

/// Measurement protocol between a container and its children.
///
/// Measurement happens in two calls: the container first asks for the
/// child's natural size under a constraint, then commits one exact size that
/// the child must render at.
pub trait LayoutNode {
    /// The size this node would like under the offered constraints.
    fn natural_size(&self, width: Constraint, height: Constraint) -> Size;

    /// Impose the exact size this node will be rendered at.
    fn commit_size(&mut self, size: Size);

    /// Hidden nodes are skipped by measurement and placement alike.
    fn participates_in_layout(&self) -> bool {
        true
    }
}

impl<T: LayoutNode + ?Sized> LayoutNode for Box<T> {
    fn natural_size(&self, width: Constraint, height: Constraint) -> Size {
        self.as_ref().natural_size(width, height)
    }

    fn commit_size(&mut self, size: Size) {
        self.as_mut().commit_size(size);
    }

    fn participates_in_layout(&self) -> bool {
        self.as_ref().participates_in_layout()
    }
}

/// Layout algorithm trait.
///
/// Layouts compute the regions where each visible child should be placed.
pub trait Layout {
    /// Arrange the given visible children within the available region.
    ///
    /// # Arguments
    /// * `visible` - Indices of visible children, in child order
    /// * `available` - The region available for layout
    fn arrange(&mut self, visible: &[usize], available: Region) -> Vec<WidgetPlacement>;
}
