//! String predicates.
//!
//! Each constraint accepts any subject that can be viewed as `str`, so `str`,
//! `String` and `Cow<str>` subjects all work.

use super::{Constraint, Describe};

macro_rules! text_constraint {
    ($(#[$meta:meta])* $ctor:ident, $name:ident, $verb:literal, $test:ident) => {
        $(#[$meta])*
        pub fn $ctor(fragment: impl Into<String>) -> $name {
            $name {
                fragment: fragment.into(),
            }
        }

        #[doc = concat!("A constraint that matches strings ", $verb, " a fragment.")]
        #[doc = ""]
        #[doc = concat!("Created by [`", stringify!($ctor), "()`].")]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            fragment: String,
        }

        impl $name {
            /// Returns the fragment subjects are checked for.
            pub fn fragment(&self) -> &str {
                &self.fragment
            }
        }

        impl Describe for $name {
            fn describe(&self) -> String {
                format!(concat!("string ", $verb, " {:?}"), self.fragment)
            }
        }

        impl<S: AsRef<str> + ?Sized> Constraint<S> for $name {
            #[inline]
            fn matches(&self, subject: &S) -> bool {
                subject.as_ref().$test(self.fragment.as_str())
            }
        }
    };
}

text_constraint!(
    /// Creates a constraint that matches strings beginning with `fragment`.
    ///
    /// ```
    /// use vouch_core::constraint::{starts_with, Constraint, Describe};
    ///
    /// let c = starts_with("Given");
    /// assert!(c.matches("Given a stack"));
    /// assert!(!c.matches(&String::from("When I push")));
    /// assert_eq!(c.describe(), r#"string starting with "Given""#);
    /// ```
    starts_with,
    StartsWith,
    "starting with",
    starts_with
);

text_constraint!(
    /// Creates a constraint that matches strings ending with `fragment`.
    ends_with,
    EndsWith,
    "ending with",
    ends_with
);

text_constraint!(
    /// Creates a constraint that matches strings containing `fragment`
    /// anywhere.
    contains,
    Contains,
    "containing",
    contains
);

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn test_fragments() {
        assert!(ends_with(".story").matches("stack.story"));
        assert!(!ends_with(".story").matches("stack.stories"));
        assert!(contains("ac").matches("stack"));
        assert!(!contains("x").matches("stack"));
    }

    #[test]
    fn test_empty_fragment_matches_everything() {
        assert!(starts_with("").matches(""));
        assert!(contains("").matches("anything"));
    }

    #[test]
    fn test_owned_and_borrowed_subjects() {
        let owned = String::from("pending step");
        let cow: Cow<'_, str> = Cow::Borrowed("pending step");
        assert!(starts_with("pending").matches(&owned));
        assert!(starts_with("pending").matches(&cow));
    }

    #[test]
    fn test_descriptions_quote_fragment() {
        assert_eq!(ends_with("!").describe(), r#"string ending with "!""#);
        assert_eq!(contains("a\"b").describe(), r#"string containing "a\"b""#);
    }
}
