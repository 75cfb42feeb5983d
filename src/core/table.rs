//! Dense transition table.

use super::symbol::Symbol;
use std::fmt;
use std::marker::PhantomData;

/// Dense `|S| × |I|` grid of optional target states.
///
/// Cells are stored row-major by state ordinal in a single allocation, so a
/// lookup is one multiply-add and a bounds-checked index. An empty cell means
/// the machine has no edge for that (state, input) pair.
///
/// The table itself has no notion of being frozen; the engine decides when
/// mutation is allowed and shares the table behind an `Arc` once running.
///
/// # Example
///
/// ```rust
/// use tabula::core::TransitionTable;
/// use tabula::symbol_enum;
///
/// symbol_enum! {
///     enum Door { Open, Closed }
/// }
/// symbol_enum! {
///     enum Action { Push, Pull }
/// }
///
/// let mut table = TransitionTable::<Door, Action>::new();
/// table.set(Door::Closed, Action::Push, Door::Open);
///
/// assert_eq!(table.get(Door::Closed, Action::Push), Some(Door::Open));
/// assert_eq!(table.get(Door::Open, Action::Push), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TransitionTable<S: Symbol, I: Symbol> {
    cells: Vec<Option<S>>,
    _inputs: PhantomData<I>,
}

impl<S: Symbol, I: Symbol> TransitionTable<S, I> {
    /// Create a table with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: vec![None; S::count() * I::count()],
            _inputs: PhantomData,
        }
    }

    fn slot(from: S, on: I) -> usize {
        from.index() * I::count() + on.index()
    }

    /// Target of the edge leaving `from` on `on`, if one is defined.
    pub fn get(&self, from: S, on: I) -> Option<S> {
        self.cells[Self::slot(from, on)]
    }

    /// Define the edge `from --on--> to`, returning the target it replaced.
    pub fn set(&mut self, from: S, on: I, to: S) -> Option<S> {
        self.cells[Self::slot(from, on)].replace(to)
    }

    /// Number of defined edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over defined edges as `(from, input, to)`, row by row.
    pub fn edges(&self) -> impl Iterator<Item = (S, I, S)> + '_ {
        S::ALL.iter().flat_map(move |&from| {
            I::ALL
                .iter()
                .filter_map(move |&on| self.get(from, on).map(|to| (from, on, to)))
        })
    }
}

impl<S: Symbol, I: Symbol> Default for TransitionTable<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, I: Symbol> fmt::Debug for TransitionTable<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.edges()).finish()
    }
}
