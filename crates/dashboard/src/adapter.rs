//! Adapters turn a list of items into dashboard widgets.

use std::rc::Rc;

use crate::item::DashboardItem;
use crate::observer::DataSetNotifier;
use crate::widget::Widget;
use crate::widget::button::{ClickHandler, DashboardButton, ItemClick};

/// An ordered source of dashboard widgets.
pub trait Adapter<M> {
    /// Number of items.
    fn count(&self) -> usize;

    /// Stable identifier of the item at `position`.
    fn item_id(&self, position: usize) -> Option<i64>;

    /// Build the widget for `position`.
    ///
    /// `convert` is the widget previously shown at this position. Adapters
    /// may reuse it; an incompatible widget is dropped and a fresh one built.
    fn view(
        &self,
        position: usize,
        convert: Option<Box<dyn Widget<M>>>,
    ) -> Option<Box<dyn Widget<M>>>;

    /// Deliver future change notifications to `notifier`.
    fn register_observer(&mut self, notifier: DataSetNotifier);

    /// Returns a reference to `self` as `&dyn Any` for downcasting.
    ///
    /// Containers own their adapter as a trait object; this is how callers
    /// get the concrete adapter back to change its items.
    fn as_any(&self) -> Option<&dyn std::any::Any> {
        None
    }

    /// Returns a mutable reference to `self` as `&mut dyn Any` for downcasting.
    fn as_any_mut(&mut self) -> Option<&mut dyn std::any::Any> {
        None
    }
}

/// Adapter over a vector of [`DashboardItem`]s, rendered as [`DashboardButton`]s.
pub struct DashboardAdapter<T, M> {
    items: Vec<T>,
    on_click: Option<ClickHandler<M>>,
    observers: Vec<DataSetNotifier>,
}

impl<T: DashboardItem, M> DashboardAdapter<T, M> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            on_click: None,
            observers: Vec::new(),
        }
    }

    /// Set a click handler that turns the clicked item into a message.
    pub fn with_on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn(ItemClick) -> M + 'static,
    {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to the items. Call [`Self::notify_changed`] afterwards.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.notify_changed();
    }

    pub fn remove(&mut self, position: usize) -> Option<T> {
        if position >= self.items.len() {
            return None;
        }
        let item = self.items.remove(position);
        self.notify_changed();
        Some(item)
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.notify_changed();
    }

    /// Enable or disable the item with `id`. Returns false when no item matches.
    pub fn set_enabled(&mut self, id: i64, enabled: bool) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        item.set_enabled(enabled);
        self.notify_changed();
        true
    }

    pub fn notify_changed(&mut self) {
        self.observers.retain(DataSetNotifier::is_observed);
        for observer in &self.observers {
            observer.notify_changed();
        }
    }

    pub fn notify_invalidated(&mut self) {
        self.observers.retain(DataSetNotifier::is_observed);
        for observer in &self.observers {
            observer.notify_invalidated();
        }
    }
}

impl<T: DashboardItem + 'static, M: 'static> Adapter<M> for DashboardAdapter<T, M> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn item_id(&self, position: usize) -> Option<i64> {
        self.items.get(position).map(DashboardItem::id)
    }

    fn view(
        &self,
        position: usize,
        convert: Option<Box<dyn Widget<M>>>,
    ) -> Option<Box<dyn Widget<M>>> {
        let item = self.items.get(position)?;

        if let Some(mut widget) = convert {
            if let Some(button) = widget
                .as_any_mut()
                .and_then(|any| any.downcast_mut::<DashboardButton<M>>())
            {
                button.bind(item, position);
                button.set_on_click(self.on_click.clone());
                return Some(widget);
            }
            log::debug!("adapter: position {} widget not reusable, rebuilding", position);
        }

        let mut button = DashboardButton::from_item(item, position);
        button.set_on_click(self.on_click.clone());
        Some(Box::new(button))
    }

    fn register_observer(&mut self, notifier: DataSetNotifier) {
        self.observers.push(notifier);
    }

    fn as_any(&self) -> Option<&dyn std::any::Any> {
        Some(self)
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn std::any::Any> {
        Some(self)
    }
}
