use std::rc::Rc;

use crate::constraint::{Constraint, resolve_size};
use crate::geometry::{Region, Size};
use crate::grapheme::display_width;
use crate::item::{DashboardItem, Icon};
use crate::layouts::LayoutNode;
use crate::widget::Widget;

/// Cells of padding left and right of the content.
pub const PADDING_X: i32 = 2;
/// Rows of padding above and below the content.
pub const PADDING_Y: i32 = 1;

/// Identifies the button that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemClick {
    /// Id of the item the button shows.
    pub id: i64,
    /// Position of the item in its adapter.
    pub position: usize,
}

/// Shared click handler; every button built by one adapter holds the same one.
pub type ClickHandler<M> = Rc<dyn Fn(ItemClick) -> M>;

/// A clickable dashboard entry: an optional icon stacked above a label.
pub struct DashboardButton<M> {
    id: i64,
    position: usize,
    label: String,
    icon: Option<Icon>,
    enabled: bool,
    visible: bool,
    committed: Option<Size>,
    region: Option<Region>,
    on_click: Option<ClickHandler<M>>,
    // Taken from the bound item; wins over `on_click`.
    item_on_click: Option<ClickHandler<M>>,
}

impl<M> DashboardButton<M> {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            position: 0,
            label: label.into(),
            icon: None,
            enabled: true,
            visible: true,
            committed: None,
            region: None,
            on_click: None,
            item_on_click: None,
        }
    }


    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set a click handler that produces a message.
    pub fn with_on_click(mut self, handler: ClickHandler<M>) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn set_on_click(&mut self, handler: Option<ClickHandler<M>>) {
        self.on_click = handler;
    }

    /// Whether clicks on this button are handled by its item rather than the adapter.
    pub fn has_item_handler(&self) -> bool {
        self.item_on_click.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The exact size imposed by the last measurement pass.
    pub fn committed_size(&self) -> Option<Size> {
        self.committed
    }

    fn content_size(&self) -> Size {
        let label_width = display_width(&self.label);
        let icon_width = self.icon.as_ref().map_or(0, |icon| display_width(icon.glyph()));
        let lines = if self.icon.is_some() { 2 } else { 1 };

        Size::new(
            label_width.max(icon_width) + PADDING_X * 2,
            lines + PADDING_Y * 2,
        )
    }
}

impl<M: 'static> DashboardButton<M> {
    /// Build a button showing `item`, which sits at `position` in its source.
    pub fn from_item<I: DashboardItem>(item: &I, position: usize) -> Self {
        let mut button = Self::new(item.id(), item.text());
        button.bind(item, position);
        button
    }

    /// Overwrite everything the button shows with `item`'s current data,
    /// including the item's own click handler.
    ///
    /// Measurement and placement state is kept; the next passes replace it.
    pub fn bind<I: DashboardItem>(&mut self, item: &I, position: usize) {
        self.id = item.id();
        self.position = position;
        self.label.clear();
        self.label.push_str(item.text());
        self.icon = item.icon().cloned();
        self.enabled = item.is_enabled();
        self.item_on_click = item.click_handler();
    }
}

impl<M> LayoutNode for DashboardButton<M> {
    fn natural_size(&self, width: Constraint, height: Constraint) -> Size {
        let content = self.content_size();
        Size::new(
            resolve_size(content.width, width),
            resolve_size(content.height, height),
        )
    }

    fn commit_size(&mut self, size: Size) {
        self.committed = Some(size);
    }

    fn participates_in_layout(&self) -> bool {
        self.visible
    }
}

impl<M: 'static> Widget<M> for DashboardButton<M> {
    fn place(&mut self, region: Region) {
        self.region = Some(region);
    }

    fn region(&self) -> Option<Region> {
        self.region
    }

    fn on_click(&mut self) -> Option<M> {
        if !self.enabled {
            return None;
        }
        let handler = self.item_on_click.as_ref().or(self.on_click.as_ref())?;
        Some(handler(ItemClick {
            id: self.id,
            position: self.position,
        }))
    }

    fn item_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn as_any(&self) -> Option<&dyn std::any::Any> {
        Some(self)
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn std::any::Any> {
        Some(self)
    }
}
