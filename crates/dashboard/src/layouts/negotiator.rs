//! Cell size negotiation between a dashboard container and its children.

use crate::constraint::{Constraint, resolve_size};
use crate::geometry::Size;

use super::LayoutNode;

/// Outcome of a measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Negotiation {
    /// The uniform cell size committed to every visible child.
    pub cell: Size,
    /// The container's own size, resolved against the constraints it was offered.
    pub resolved: Size,
}

/// Find one cell size that fits every visible child and commit it.
///
/// Children are first probed with the container constraints relaxed to upper
/// bounds. A degenerate height (below one unit) leaves the height unbounded so
/// a dashboard inside a scrolling parent can size itself from its content.
/// Width and height maxima are tracked independently: the cell is the bounding
/// box of all children, not any one child's aspect ratio.
///
/// Every visible child then receives the exact cell size through
/// [`LayoutNode::commit_size`], even when its natural size already matches.
pub fn negotiate<N: LayoutNode>(
    children: &mut [N],
    width: Constraint,
    height: Constraint,
) -> Negotiation {
    let child_width = width.relaxed();
    let child_height = if height.is_degenerate() {
        Constraint::Unbounded
    } else {
        height.relaxed()
    };

    let cell = children
        .iter()
        .filter(|child| child.participates_in_layout())
        .map(|child| child.natural_size(child_width, child_height))
        .fold(Size::ZERO, Size::max);

    let mut committed = 0usize;
    for child in children.iter_mut().filter(|c| c.participates_in_layout()) {
        child.commit_size(cell);
        committed += 1;
    }

    let resolved = Size::new(
        resolve_size(cell.width, width),
        resolve_size(cell.height, height),
    );

    log::debug!(
        "negotiate: {} children, cell {}x{}, resolved {}x{}",
        committed,
        cell.width,
        cell.height,
        resolved.width,
        resolved.height
    );

    Negotiation { cell, resolved }
}
