//! Size constraints passed down during measurement.
//!
//! A container offers each child one [`Constraint`] per axis. The child answers
//! with the size it would like, and the container later resolves its own size
//! against the constraint it was offered with [`resolve_size`].
//!
//! - `Exact(n)`: the size is imposed, the child has no say
//! - `AtMost(n)`: the child may pick anything up to `n`
//! - `Unbounded`: no limit, typically a container inside a scrolling parent

/// One axis of a measurement constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Constraint {
    Exact(i32),
    AtMost(i32),
    #[default]
    Unbounded,
}

impl Constraint {
    /// The size carried by this constraint; `Unbounded` carries none and reports 0.
    pub fn size(self) -> i32 {
        match self {
            Constraint::Exact(size) | Constraint::AtMost(size) => size,
            Constraint::Unbounded => 0,
        }
    }

    /// Whether the constraint provides no usable bound (below one unit or unbounded).
    pub fn is_degenerate(self) -> bool {
        self.size() < 1
    }

    /// Relax this constraint into an upper bound of the same size.
    pub fn relaxed(self) -> Constraint {
        Constraint::AtMost(self.size())
    }
}

/// Resolve a content size against the constraint a widget was offered.
///
/// # Behavior
/// - `Exact`: returns the imposed size, ignoring content
/// - `AtMost`: returns `min(content, bound)`
/// - `Unbounded`: returns the content size as-is
pub fn resolve_size(content: i32, constraint: Constraint) -> i32 {
    match constraint {
        Constraint::Exact(size) => size,
        Constraint::AtMost(bound) => content.min(bound),
        Constraint::Unbounded => content,
    }
}
