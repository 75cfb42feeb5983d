//! Accepting-state sets.

use super::symbol::Symbol;
use std::fmt;
use std::marker::PhantomData;

/// Subset of a state domain, one flag per state ordinal.
#[derive(Clone, PartialEq, Eq)]
pub struct AcceptSet<S: Symbol> {
    flags: Vec<bool>,
    _states: PhantomData<S>,
}

impl<S: Symbol> AcceptSet<S> {
    /// The empty set. Nothing is accepted.
    pub fn empty() -> Self {
        Self {
            flags: vec![false; S::count()],
            _states: PhantomData,
        }
    }

    /// Every state in the domain.
    pub fn all() -> Self {
        Self {
            flags: vec![true; S::count()],
            _states: PhantomData,
        }
    }

    pub fn insert(&mut self, state: S) {
        self.flags[state.index()] = true;
    }

    pub fn contains(&self, state: S) -> bool {
        self.flags[state.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&flag| flag)
    }

    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        S::ALL.iter().copied().filter(move |&s| self.contains(s))
    }
}

impl<S: Symbol> Default for AcceptSet<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Symbol> FromIterator<S> for AcceptSet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: Symbol> Extend<S> for AcceptSet<S> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for state in iter {
            self.insert(state);
        }
    }
}

impl<S: Symbol> fmt::Debug for AcceptSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_enum;

    symbol_enum! {
        enum Stage { Draft, Review, Published }
    }

    #[test]
    fn empty_set_accepts_nothing() {
        let set = AcceptSet::<Stage>::empty();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        for &stage in Stage::ALL {
            assert!(!set.contains(stage));
        }
    }

    #[test]
    fn all_accepts_every_state() {
        let set = AcceptSet::<Stage>::all();

        assert_eq!(set.len(), 3);
        assert!(Stage::ALL.iter().all(|&s| set.contains(s)));
    }

    #[test]
    fn collects_from_iterator_without_duplicates() {
        let set: AcceptSet<Stage> = [Stage::Published, Stage::Draft, Stage::Published]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 2);
        assert!(!set.contains(Stage::Review));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Stage::Draft, Stage::Published]
        );
    }
}
