//! Test utilities for dashboard layouts.
//!
//! - [`FixedNode`]: a widget with a fixed natural size that records every
//!   probe and commit it receives
//! - [`placements_to_text`]: a stable text dump of a placement pass, suitable
//!   for snapshot assertions
//!
//! # Example
//! ```ignore
//! use dashboard::testing::{FixedNode, placements_to_text};
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.add_child(Box::new(FixedNode::new(Size::new(10, 3))));
//! dashboard.measure(Constraint::Exact(80), Constraint::Exact(24));
//! let placements = dashboard.layout(Region::new(0, 0, 80, 24));
//! insta::assert_snapshot!(placements_to_text(&placements));
//! ```

use std::cell::RefCell;
use std::fmt::Write;

use crate::constraint::{Constraint, resolve_size};
use crate::geometry::{Region, Size};
use crate::layouts::{LayoutNode, WidgetPlacement};
use crate::widget::Widget;

/// A widget with a fixed natural size.
#[derive(Debug, Default)]
pub struct FixedNode {
    natural: Size,
    visible: bool,
    probes: RefCell<Vec<(Constraint, Constraint)>>,
    committed: Vec<Size>,
    region: Option<Region>,
}

impl FixedNode {
    pub fn new(natural: Size) -> Self {
        Self {
            natural,
            visible: true,
            ..Self::default()
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Constraints offered through `natural_size`, oldest first.
    pub fn probes(&self) -> Vec<(Constraint, Constraint)> {
        self.probes.borrow().clone()
    }

    /// Sizes imposed through `commit_size`, oldest first.
    pub fn committed(&self) -> &[Size] {
        &self.committed
    }
}

impl LayoutNode for FixedNode {
    fn natural_size(&self, width: Constraint, height: Constraint) -> Size {
        self.probes.borrow_mut().push((width, height));
        Size::new(
            resolve_size(self.natural.width, width),
            resolve_size(self.natural.height, height),
        )
    }

    fn commit_size(&mut self, size: Size) {
        self.committed.push(size);
    }

    fn participates_in_layout(&self) -> bool {
        self.visible
    }
}

impl<M> Widget<M> for FixedNode {
    fn place(&mut self, region: Region) {
        self.region = Some(region);
    }

    fn region(&self) -> Option<Region> {
        self.region
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// One line per placement: `#child x,y widthxheight`.
pub fn placements_to_text(placements: &[WidgetPlacement]) -> String {
    let mut text = String::new();
    for placement in placements {
        let r = placement.region;
        let _ = writeln!(
            text,
            "#{} {},{} {}x{}",
            placement.child_index, r.x, r.y, r.width, r.height
        );
    }
    text
}
