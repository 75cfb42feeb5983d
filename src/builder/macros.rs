//! Macros for declaring symbol domains.

/// Declare a fieldless enum and implement [`Symbol`](crate::core::Symbol)
/// for it.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`; extra
/// attributes are passed through but must not repeat those derives.
/// Ordinals follow declaration order and names are the variant identifiers.
/// Zero-variant enums are accepted and describe an empty domain, which the
/// engine rejects at construction.
///
/// # Example
///
/// ```
/// use tabula::core::Symbol;
/// use tabula::symbol_enum;
///
/// symbol_enum! {
///     pub enum Token {
///         Digit,
///         Letter,
///         Space,
///     }
/// }
///
/// assert_eq!(Token::count(), 3);
/// assert_eq!(Token::Letter.index(), 1);
/// assert_eq!(Token::Space.name(), "Space");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn index(self) -> usize {
                match self {
                    $(Self::$variant => Self::$variant as usize),*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Symbol;

    symbol_enum! {
        enum Suit {
            Clubs,
            Diamonds,
            Hearts,
            Spades,
        }
    }

    #[test]
    fn symbol_enum_macro_generates_trait() {
        assert_eq!(Suit::count(), 4);
        assert_eq!(
            Suit::ALL,
            &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
        );
        assert_eq!(Suit::Hearts.index(), 2);
        assert_eq!(Suit::Diamonds.name(), "Diamonds");
        assert_eq!(Suit::from_name("Spades"), Some(Suit::Spades));
    }

    #[test]
    fn symbol_enum_supports_visibility_and_attributes() {
        symbol_enum! {
            /// Documented domain.
            #[allow(dead_code)]
            pub enum PublicSymbol {
                A,
                #[allow(non_camel_case_types)]
                b_variant,
            }
        }

        assert_eq!(PublicSymbol::b_variant.name(), "b_variant");
        assert_eq!(PublicSymbol::A.index(), 0);
    }

    #[test]
    fn symbol_enum_accepts_empty_domain() {
        symbol_enum! {
            enum Void {}
        }

        assert_eq!(Void::count(), 0);
        assert_eq!(Void::first(), None);
    }
}
