//! Dashboard items: the id, label, icons and enabled state behind each button.
//!
//! [`SimpleItem`] carries the data directly. [`ContainerItem`] additionally owns
//! an application object; when that object can describe itself (see
//! [`DescribeItem`]) the item's metadata is derived from it.

use std::any::Any;
use std::rc::Rc;

use crate::error::{DashboardError, Result};
use crate::widget::button::{ClickHandler, ItemClick};

/// A glyph shown above an item's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Icon::new(glyph)
    }
}

/// What a dashboard needs to know about an entry.
pub trait DashboardItem {
    /// The icon matching the current enabled state.
    fn icon(&self) -> Option<&Icon>;

    fn text(&self) -> &str;

    fn id(&self) -> i64;

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// The item's own click handler. Buttons prefer it over the adapter's.
    fn click_handler<M: 'static>(&self) -> Option<ClickHandler<M>>
    where
        Self: Sized,
    {
        None
    }
}

/// An item defined by its data alone.
#[derive(Debug, Clone)]
pub struct SimpleItem {
    id: i64,
    text: String,
    icon_enabled: Option<Icon>,
    icon_disabled: Option<Icon>,
    enabled: bool,
    // A `ClickHandler<M>` for whichever message type the caller chose.
    on_click: Option<Rc<dyn Any>>,
}

impl SimpleItem {
    /// Create an enabled item without icons.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            icon_enabled: None,
            icon_disabled: None,
            enabled: true,
            on_click: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon_enabled = Some(icon.into());
        self
    }

    /// Icon shown while the item is disabled. Falls back to the regular icon when unset.
    pub fn with_disabled_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon_disabled = Some(icon.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Handle clicks on this item, ahead of any adapter-wide handler.
    pub fn with_on_click<M, F>(mut self, on_click: F) -> Self
    where
        M: 'static,
        F: Fn(ItemClick) -> M + 'static,
    {
        self.set_on_click(on_click);
        self
    }

    pub fn set_on_click<M, F>(&mut self, on_click: F)
    where
        M: 'static,
        F: Fn(ItemClick) -> M + 'static,
    {
        let handler: ClickHandler<M> = Rc::new(on_click);
        self.on_click = Some(Rc::new(handler));
    }

    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    pub fn has_on_click(&self) -> bool {
        self.on_click.is_some()
    }

    fn apply(&mut self, metadata: ItemMetadata) {
        self.id = metadata.id;
        self.text = metadata.text;
        self.icon_enabled = metadata.icon_enabled;
        self.icon_disabled = metadata.icon_disabled;
    }
}

impl DashboardItem for SimpleItem {
    fn icon(&self) -> Option<&Icon> {
        match (&self.icon_disabled, self.enabled) {
            (Some(disabled), false) => Some(disabled),
            _ => self.icon_enabled.as_ref(),
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn click_handler<M: 'static>(&self) -> Option<ClickHandler<M>> {
        let handler = self.on_click.as_ref()?.downcast_ref::<ClickHandler<M>>();
        if handler.is_none() {
            log::debug!(
                "item {}: click handler does not produce {}",
                self.id,
                std::any::type_name::<M>()
            );
        }
        handler.cloned()
    }
}

/// Application objects that know how they appear on a dashboard.
pub trait DescribeItem {
    fn item_id(&self) -> i64;

    fn item_text(&self) -> String;

    fn icon_enabled(&self) -> Option<Icon> {
        None
    }

    fn icon_disabled(&self) -> Option<Icon> {
        None
    }
}

/// Item data extracted from a [`DescribeItem`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMetadata {
    pub id: i64,
    pub text: String,
    pub icon_enabled: Option<Icon>,
    pub icon_disabled: Option<Icon>,
}

impl ItemMetadata {
    pub fn describe<T: DescribeItem + ?Sized>(content: &T) -> Self {
        Self {
            id: content.item_id(),
            text: content.item_text(),
            icon_enabled: content.icon_enabled(),
            icon_disabled: content.icon_disabled(),
        }
    }
}

/// Content handed to a [`ContainerItem`], classified once when it is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<T> {
    /// Opaque content; the item's metadata must be supplied separately.
    Plain(T),
    /// Content that described itself when it was wrapped.
    Described { content: T, metadata: ItemMetadata },
}

impl<T> Content<T> {
    pub fn plain(content: T) -> Self {
        Content::Plain(content)
    }

    pub fn into_inner(self) -> T {
        match self {
            Content::Plain(content) | Content::Described { content, .. } => content,
        }
    }
}

impl<T: DescribeItem> Content<T> {
    pub fn described(content: T) -> Self {
        let metadata = ItemMetadata::describe(&content);
        Content::Described { content, metadata }
    }
}

/// An item that carries an application object alongside its metadata.
#[derive(Debug, Clone)]
pub struct ContainerItem<T> {
    item: SimpleItem,
    content: Option<T>,
}

impl<T> ContainerItem<T> {
    /// Create an item from explicit metadata, without content.
    pub fn new(item: SimpleItem) -> Self {
        Self {
            item,
            content: None,
        }
    }

    /// Create an item from explicit metadata that also owns `content`.
    pub fn with_content(item: SimpleItem, content: T) -> Self {
        Self {
            item,
            content: Some(content),
        }
    }

    /// Create an item whose metadata is derived from its content.
    ///
    /// Fails immediately when the content did not describe itself.
    pub fn from_content(content: Content<T>, enabled: bool) -> Result<Self> {
        match content {
            Content::Described { content, metadata } => {
                let mut item = SimpleItem::new(metadata.id, "").with_enabled(enabled);
                item.apply(metadata);
                Ok(Self::with_content(item, content))
            }
            Content::Plain(_) => Err(DashboardError::MissingItemMetadata {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    /// Handle clicks on this item, ahead of any adapter-wide handler.
    pub fn with_on_click<M, F>(mut self, on_click: F) -> Self
    where
        M: 'static,
        F: Fn(ItemClick) -> M + 'static,
    {
        self.item.set_on_click(on_click);
        self
    }

    pub fn has_on_click(&self) -> bool {
        self.item.has_on_click()
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    /// Replace the content. Described content also refreshes id, text and icons;
    /// the enabled state is kept.
    pub fn set_content(&mut self, content: Content<T>) {
        let content = match content {
            Content::Plain(content) => content,
            Content::Described { content, metadata } => {
                self.item.apply(metadata);
                content
            }
        };
        self.content = Some(content);
    }

    pub fn take_content(&mut self) -> Option<T> {
        self.content.take()
    }
}

impl<T> DashboardItem for ContainerItem<T> {
    fn icon(&self) -> Option<&Icon> {
        self.item.icon()
    }

    fn text(&self) -> &str {
        self.item.text()
    }

    fn id(&self) -> i64 {
        self.item.id()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.item.set_enabled(enabled);
    }

    fn is_enabled(&self) -> bool {
        self.item.is_enabled()
    }

    fn click_handler<M: 'static>(&self) -> Option<ClickHandler<M>> {
        self.item.click_handler()
    }
}
