//! Densely indexed symbol domains.
//!
//! Both the states and the inputs of a machine are closed sets of values
//! with a stable declaration order. The engine sizes and indexes its table
//! by those ordinals, so every domain type implements [`Symbol`].

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a closed, ordered, densely indexed domain.
///
/// Implementors are usually fieldless enums. `ALL` lists every member in
/// declaration order and `index` returns the member's position in `ALL`.
/// The two must agree: `Self::ALL[s.index()] == s` for every `s`.
///
/// Most callers derive this through [`symbol_enum!`](crate::symbol_enum).
///
/// # Example
///
/// ```rust
/// use tabula::core::Symbol;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Bit {
///     Zero,
///     One,
/// }
///
/// impl Symbol for Bit {
///     const ALL: &'static [Self] = &[Bit::Zero, Bit::One];
///
///     fn index(self) -> usize {
///         self as usize
///     }
///
///     fn name(self) -> &'static str {
///         match self {
///             Bit::Zero => "Zero",
///             Bit::One => "One",
///         }
///     }
/// }
///
/// assert_eq!(Bit::count(), 2);
/// assert_eq!(Bit::from_index(1), Some(Bit::One));
/// assert_eq!(Bit::from_name("Zero"), Some(Bit::Zero));
/// ```
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every member of the domain, in declaration order.
    const ALL: &'static [Self];

    /// Zero-based ordinal of this member within [`Symbol::ALL`].
    fn index(self) -> usize;

    /// Name used in diagnostics and configuration files.
    fn name(self) -> &'static str;

    /// Number of members in the domain.
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Member with the given ordinal, if any.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Member with the given name, if any.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// First declared member, or `None` for an empty domain.
    fn first() -> Option<Self> {
        Self::ALL.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Yellow,
        Green,
    }

    impl Symbol for Light {
        const ALL: &'static [Self] = &[Light::Red, Light::Yellow, Light::Green];

        fn index(self) -> usize {
            self as usize
        }

        fn name(self) -> &'static str {
            match self {
                Self::Red => "Red",
                Self::Yellow => "Yellow",
                Self::Green => "Green",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Nothing {}

    impl Symbol for Nothing {
        const ALL: &'static [Self] = &[];

        fn index(self) -> usize {
            match self {}
        }

        fn name(self) -> &'static str {
            match self {}
        }
    }

    #[test]
    fn index_agrees_with_declaration_order() {
        for (position, light) in Light::ALL.iter().enumerate() {
            assert_eq!(light.index(), position);
            assert_eq!(Light::from_index(position), Some(*light));
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Light::from_index(3), None);
    }

    #[test]
    fn from_name_resolves_members() {
        assert_eq!(Light::from_name("Yellow"), Some(Light::Yellow));
        assert_eq!(Light::from_name("Blue"), None);
    }

    #[test]
    fn first_is_first_declared() {
        assert_eq!(Light::first(), Some(Light::Red));
        assert_eq!(Light::count(), 3);
    }

    #[test]
    fn empty_domain_has_no_members() {
        assert_eq!(Nothing::count(), 0);
        assert_eq!(Nothing::first(), None);
        assert_eq!(Nothing::from_name("anything"), None);
    }
}
