mod header;

pub use header::*;

/// Declare a fieldless enum together with its variant table, a `Display`
/// impl printing the variant name and one `is_<variant>` predicate per variant.
#[macro_export]
macro_rules! define_it {
    (
        $( #[$attr_meta:meta] )*
        $v:vis enum $name:ident {
            $(
                $( #[$ident_attr_meta:meta] )*
                $idents:ident
            ),* $(,)?
        }
    ) => {
        $( #[$attr_meta] )*
        $v enum $name {
            $(
                $( #[$ident_attr_meta] )*
                $idents ,
            )*
        }

        impl $name {
            pub const ITEMS: &'static [Self] = &[
                $( Self::$idents, )*
            ];
            pub const ITEMS_COUNT: usize = Self::ITEMS.len();

            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$idents => stringify!($idents),
                    )*
                }
            }

            ::pastey::paste! {
                $(
                    #[allow(unused)]
                    pub fn [< is_ $idents:lower >](&self) -> bool {
                        matches!(self, Self::$idents)
                    }
                )*
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::define_it!(
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Color {
            Red,
            DarkBlue,
        }
    );

    #[test]
    fn test_define_it_generates_table_and_predicates() {
        assert_eq!(Color::ITEMS_COUNT, 2);
        assert_eq!(Color::ITEMS, &[Color::Red, Color::DarkBlue]);
        assert_eq!(Color::DarkBlue.to_string(), "DarkBlue");
        assert!(Color::DarkBlue.is_darkblue());
        assert!(!Color::Red.is_darkblue());
    }
}
