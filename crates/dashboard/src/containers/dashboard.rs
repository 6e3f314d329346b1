//! Dashboard container - equally sized items in a balanced grid.
//!
//! The container measures its children in two phases (see
//! [`negotiate`]), then places them with a [`DashboardLayout`]:
//! - `desired_cols`: preferred column count, 0 for none
//! - `desired_rows`: preferred row count, 0 for none
//!
//! Children come either from [`Dashboard::add_child`] or from an [`Adapter`].
//! An attached adapter signals changes through the container's observer,
//! which is drained at the start of every measurement pass.

use crate::adapter::Adapter;
use crate::constraint::Constraint;
use crate::geometry::{Region, Size};
use crate::layouts::{Arrangement, DashboardLayout, Layout, WidgetPlacement, negotiate};
use crate::observer::{DataSetEvent, DataSetObserver};
use crate::widget::Widget;

/// A dashboard grid container.
///
/// ## Example
///
/// ```ignore
/// use dashboard::{Dashboard, DashboardAdapter, SimpleItem};
///
/// let adapter = DashboardAdapter::new(vec![
///     SimpleItem::new(1, "Mail").with_icon("✉"),
///     SimpleItem::new(2, "Calendar"),
/// ])
/// .with_on_click(|click| Message::Open(click.id));
///
/// let mut dashboard = Dashboard::new().with_desired_cols(2);
/// dashboard.set_adapter(Box::new(adapter));
/// ```
pub struct Dashboard<M> {
    children: Vec<Box<dyn Widget<M>>>,
    adapter: Option<Box<dyn Adapter<M>>>,
    observer: DataSetObserver,
    id: Option<String>,

    // Runtime-configurable properties (passed to DashboardLayout on every pass)
    desired_cols: usize,
    desired_rows: usize,

    // Outcome of the last measurement pass
    cell: Size,
    measured: Size,
    placements: Vec<WidgetPlacement>,
}

impl<M: 'static> Dashboard<M> {
    /// Create an empty Dashboard.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            adapter: None,
            observer: DataSetObserver::new(),
            id: None,
            desired_cols: 0,
            desired_rows: 0,
            cell: Size::ZERO,
            measured: Size::ZERO,
            placements: Vec::new(),
        }
    }

    /// Create a Dashboard with the given children.
    pub fn with_children(children: Vec<Box<dyn Widget<M>>>) -> Self {
        let mut dashboard = Self::new();
        dashboard.children = children;
        dashboard
    }

    /// Set the widget ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the preferred number of columns (0 = no preference).
    pub fn with_desired_cols(mut self, cols: usize) -> Self {
        self.desired_cols = cols;
        self
    }

    /// Set the preferred number of rows (0 = no preference).
    pub fn with_desired_rows(mut self, rows: usize) -> Self {
        self.desired_rows = rows;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn desired_cols(&self) -> usize {
        self.desired_cols
    }

    pub fn set_desired_cols(&mut self, cols: usize) {
        self.desired_cols = cols;
    }

    pub fn desired_rows(&self) -> usize {
        self.desired_rows
    }

    pub fn set_desired_rows(&mut self, rows: usize) {
        self.desired_rows = rows;
    }

    pub fn add_child(&mut self, child: Box<dyn Widget<M>>) {
        self.children.push(child);
    }

    pub fn remove_all_children(&mut self) {
        self.children.clear();
        self.placements.clear();
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn get_child(&self, index: usize) -> Option<&dyn Widget<M>> {
        self.children.get(index).map(|child| child.as_ref())
    }

    pub fn get_child_mut(&mut self, index: usize) -> Option<&mut (dyn Widget<M> + 'static)> {
        self.children.get_mut(index).map(|child| child.as_mut())
    }

    /// Count visible children that participate in layout.
    pub fn visible_children(&self) -> usize {
        self.children
            .iter()
            .filter(|c| c.participates_in_layout())
            .count()
    }

    /// The cell size found by the last measurement pass.
    pub fn cell_size(&self) -> Size {
        self.cell
    }

    /// The container size resolved by the last measurement pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Placements from the last placement pass.
    pub fn placements(&self) -> &[WidgetPlacement] {
        &self.placements
    }

    /// A handle for signalling data changes to this dashboard from outside the adapter.
    pub fn notifier(&self) -> crate::observer::DataSetNotifier {
        self.observer.notifier()
    }

    /// Attach an adapter: build children from it, then observe its changes.
    pub fn set_adapter(&mut self, adapter: Box<dyn Adapter<M>>) {
        self.adapter = Some(adapter);
        self.populate_from_adapter();
        let notifier = self.observer.notifier();
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.register_observer(notifier);
        }
    }

    pub fn adapter(&self) -> Option<&dyn Adapter<M>> {
        self.adapter.as_deref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut (dyn Adapter<M> + 'static)> {
        self.adapter.as_deref_mut()
    }

    /// The attached adapter as its concrete type.
    pub fn adapter_as<A: Adapter<M> + 'static>(&self) -> Option<&A> {
        self.adapter()?.as_any()?.downcast_ref::<A>()
    }

    /// The attached adapter as its concrete type, for changing its items.
    ///
    /// Changes made through the adapter's notifying methods are applied on
    /// the next measurement pass.
    pub fn adapter_as_mut<A: Adapter<M> + 'static>(&mut self) -> Option<&mut A> {
        self.adapter_mut()?.as_any_mut()?.downcast_mut::<A>()
    }

    /// Rebuild the children from the adapter.
    ///
    /// The widget previously at each position is offered back to the adapter
    /// for reuse.
    pub fn populate_from_adapter(&mut self) {
        let Some(adapter) = self.adapter.as_ref() else {
            return;
        };

        let mut previous = std::mem::take(&mut self.children).into_iter();
        let count = adapter.count();
        self.children.reserve(count);
        for position in 0..count {
            let convert = previous.next();
            if let Some(old) = &convert {
                log::trace!(
                    "populate: offering widget for item {:?} at {} (now item {:?})",
                    old.item_id(),
                    position,
                    adapter.item_id(position)
                );
            }
            if let Some(view) = adapter.view(position, convert) {
                self.children.push(view);
            }
        }
        self.placements.clear();
        log::debug!("populate: {} children from adapter", self.children.len());
    }

    /// Apply change notifications queued since the last pass.
    ///
    /// Returns true if the children were discarded.
    pub fn sync_data_set(&mut self) -> bool {
        let events = self.observer.drain();
        let Some(last) = events.last().copied() else {
            return false;
        };

        // Each event discards everything, so only the latest one matters.
        match last {
            DataSetEvent::Changed => self.populate_from_adapter(),
            DataSetEvent::Invalidated => self.remove_all_children(),
        }
        log::debug!("sync: applied {} data set events, last {:?}", events.len(), last);
        true
    }

    /// Measurement pass: find the shared cell size and resolve this container's size.
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        self.sync_data_set();
        let negotiation = negotiate(&mut self.children, width, height);
        self.cell = negotiation.cell;
        self.measured = negotiation.resolved;
        self.measured
    }

    fn layout_config(&self) -> DashboardLayout {
        DashboardLayout::new(self.cell)
            .with_desired_cols(self.desired_cols)
            .with_desired_rows(self.desired_rows)
    }

    /// The grid the next placement pass would use for a container of `size`.
    pub fn arrangement(&self, size: Size) -> Option<Arrangement> {
        self.layout_config().arrangement(self.visible_children(), size)
    }

    /// Placement pass: position every visible child inside `region`.
    pub fn layout(&mut self, region: Region) -> Vec<WidgetPlacement> {
        let visible: Vec<usize> = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.participates_in_layout())
            .map(|(i, _)| i)
            .collect();

        let placements = self.layout_config().arrange(&visible, region);
        for placement in &placements {
            self.children[placement.child_index].place(placement.region);
        }
        self.placements = placements.clone();
        placements
    }

    /// Click the child at `index`.
    pub fn click(&mut self, index: usize) -> Option<M> {
        let child = self.children.get_mut(index)?;
        if !child.participates_in_layout() {
            return None;
        }
        child.on_click()
    }

    /// Click whatever the last placement pass put at `(x, y)`.
    pub fn click_at(&mut self, x: i32, y: i32) -> Option<M> {
        let index = self
            .placements
            .iter()
            .find(|p| p.region.contains_point(x, y))
            .map(|p| p.child_index)?;
        self.click(index)
    }
}

impl<M: 'static> Default for Dashboard<M> {
    fn default() -> Self {
        Self::new()
    }
}
