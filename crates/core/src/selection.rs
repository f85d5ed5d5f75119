//! Single-choice tab/filter selection with controlled and uncontrolled modes.

/// Holds exactly one selected value from a fixed set of tab or filter values.
///
/// The operating mode is fixed at construction, strictly by whether a
/// controlled value was supplied — never by the value's content:
///
/// - **uncontrolled** — the controller owns the current value, starting from
///   the caller's default; [`TabController::select`] stores transitions.
/// - **controlled** — the caller owns the value and supplies it on every
///   query; the controller never stores state and only hands selection
///   intents back.
///
/// For a caller that always provides the current value, both modes behave
/// identically. The controller has no terminal state; it lives as long as
/// the owning view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController<T> {
    mode: Mode<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode<T> {
    Uncontrolled { current: T },
    Controlled,
}

impl<T: Copy + PartialEq> TabController<T> {
    /// Build a controller. Supplying `controlled` selects controlled mode;
    /// `None` selects uncontrolled mode starting at `default`.
    pub fn new(controlled: Option<T>, default: T) -> Self {
        match controlled {
            Some(_) => Self::controlled(),
            None => Self::uncontrolled(default),
        }
    }

    /// Uncontrolled controller owning its state.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            mode: Mode::Uncontrolled { current: default },
        }
    }

    /// Controlled controller; the caller supplies the value on every query.
    pub fn controlled() -> Self {
        Self {
            mode: Mode::Controlled,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, Mode::Controlled)
    }

    /// Resolve the current selection. A caller-provided value always wins.
    /// In controlled mode nothing is stored, so the result is `None` when
    /// the caller provides nothing.
    pub fn current(&self, provided: Option<T>) -> Option<T> {
        provided.or(match &self.mode {
            Mode::Uncontrolled { current } => Some(*current),
            Mode::Controlled => None,
        })
    }

    /// Record a selection intent. Uncontrolled mode stores the value; both
    /// modes hand the intent back so the caller can forward it upward.
    pub fn select(&mut self, next: T) -> T {
        if let Mode::Uncontrolled { current } = &mut self.mode {
            *current = next;
        }
        next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
