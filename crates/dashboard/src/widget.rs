pub mod button;

use crate::geometry::Region;
use crate::layouts::LayoutNode;

/// An element a dashboard can measure, place and click.
/// Generic over `M`, the message type that clicks produce.
pub trait Widget<M>: LayoutNode {
    /// Position the widget at `region`, in the container's coordinates.
    fn place(&mut self, region: Region);

    /// The region assigned by the last placement pass, if any.
    fn region(&self) -> Option<Region>;

    /// Activate the widget. Returns the message the click produced, if any.
    fn on_click(&mut self) -> Option<M> {
        None
    }

    /// Identifier of the item this widget shows.
    fn item_id(&self) -> Option<i64> {
        None
    }

    /// Show or hide the widget. Hidden widgets take no space.
    fn set_visible(&mut self, _visible: bool) {}

    /// Returns a reference to `self` as `&dyn Any` for downcasting.
    ///
    /// The default implementation returns `None`, meaning the widget
    /// doesn't support downcasting. Override this in concrete widget types.
    fn as_any(&self) -> Option<&dyn std::any::Any> {
        None
    }

    /// Returns a mutable reference to `self` as `&mut dyn Any` for downcasting.
    ///
    /// Adapters use this to recycle a previous widget in place.
    fn as_any_mut(&mut self) -> Option<&mut dyn std::any::Any> {
        None
    }
}

impl<M, T: Widget<M> + ?Sized> Widget<M> for Box<T> {
    fn place(&mut self, region: Region) {
        self.as_mut().place(region);
    }

    fn region(&self) -> Option<Region> {
        self.as_ref().region()
    }

    fn on_click(&mut self) -> Option<M> {
        self.as_mut().on_click()
    }

    fn item_id(&self) -> Option<i64> {
        self.as_ref().item_id()
    }

    fn set_visible(&mut self, visible: bool) {
        self.as_mut().set_visible(visible);
    }

    fn as_any(&self) -> Option<&dyn std::any::Any> {
        self.as_ref().as_any()
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn std::any::Any> {
        self.as_mut().as_any_mut()
    }
}
