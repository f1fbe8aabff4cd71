//! Equality constraints: value, integral, floating point, character and boolean.

use std::fmt::Debug;

use num_traits::{PrimInt, ToPrimitive};

use super::{Constraint, Describe};

/// Creates a constraint that matches subjects equal to `expected`.
///
/// The subject may be any type comparable with the expected value, so a
/// `String` subject can be checked against a `&str`. Absent values are
/// modelled with `Option`: `equal_to(None::<i32>)` matches only `None`.
///
/// # Example
///
/// ```
/// use vouch_core::constraint::{equal_to, Constraint, Describe};
///
/// let name = equal_to("ada");
/// assert!(name.matches(&String::from("ada")));
/// assert!(!name.matches(&String::from("grace")));
/// assert_eq!(name.describe(), r#"equal to <"ada">"#);
///
/// let missing = equal_to(None::<i32>);
/// assert!(missing.matches(&None::<i32>));
/// assert!(!equal_to(Some(3)).matches(&None::<i32>));
/// ```
pub fn equal_to<V>(expected: V) -> EqualTo<V>
where
    V: Debug + Send + Sync,
{
    EqualTo { expected }
}

/// A constraint that matches on value equality.
///
/// Created by [`equal_to()`].
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo<V> {
    expected: V,
}

impl<V> EqualTo<V> {
    /// Returns the value subjects are compared with.
    pub fn expected(&self) -> &V {
        &self.expected
    }
}

impl<V: Debug> Describe for EqualTo<V> {
    fn describe(&self) -> String {
        format!("equal to <{:?}>", self.expected)
    }
}

impl<V, S> Constraint<S> for EqualTo<V>
where
    V: Debug + Send + Sync,
    S: PartialEq<V> + ?Sized,
{
    #[inline]
    fn matches(&self, subject: &S) -> bool {
        *subject == self.expected
    }
}

/// Creates a constraint that matches integral subjects numerically equal to
/// `expected`, whatever their width or signedness.
///
/// The expected value may itself be any primitive integer, including
/// `usize` and `u128`.
///
/// # Panics
///
/// Panics if `expected` is a custom `PrimInt` whose value fits neither
/// `u128` nor `i128`. No primitive integer type can trigger this.
///
/// # Example
///
/// ```
/// use vouch_core::constraint::{integer_equal_to, Constraint, Describe};
///
/// let five = integer_equal_to(5);
/// assert!(five.matches(&5_i32));
/// assert!(five.matches(&5_u64));
/// assert!(!five.matches(&-5_i8));
/// assert_eq!(five.describe(), "integer type equal to 5");
///
/// let items = vec!['a', 'b'];
/// assert!(integer_equal_to(items.len()).matches(&2_u8));
/// ```
pub fn integer_equal_to<T: PrimInt>(expected: T) -> IntegerEqualTo {
    match Integral::of(&expected) {
        Some(expected) => IntegerEqualTo { expected },
        None => panic!("integer value does not fit in 128 bits"),
    }
}

/// An integer normalised so every primitive width compares in one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Integral {
    Negative(i128),
    NonNegative(u128),
}

impl Integral {
    fn of<T: ToPrimitive>(value: &T) -> Option<Self> {
        value
            .to_u128()
            .map(Integral::NonNegative)
            .or_else(|| value.to_i128().map(Integral::Negative))
    }
}

impl std::fmt::Display for Integral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integral::Negative(n) => write!(f, "{n}"),
            Integral::NonNegative(n) => write!(f, "{n}"),
        }
    }
}

/// A constraint that matches integers by numeric value.
///
/// Created by [`integer_equal_to()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerEqualTo {
    expected: Integral,
}

impl Describe for IntegerEqualTo {
    fn describe(&self) -> String {
        format!("integer type equal to {}", self.expected)
    }
}

impl<T: PrimInt> Constraint<T> for IntegerEqualTo {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        Integral::of(subject) == Some(self.expected)
    }
}

/// Creates a constraint that matches numbers exactly equal to `expected`
/// once converted to `f64`.
///
/// Equivalent to `close_to(expected, 0.0)`.
pub fn float_equal_to(expected: f64) -> FloatEqualTo {
    close_to(expected, 0.0)
}

/// Creates a constraint that matches numbers within `tolerance` of
/// `expected`, inclusive.
///
/// # Panics
///
/// Panics if `tolerance` is negative or NaN.
///
/// # Example
///
/// ```
/// use vouch_core::constraint::{close_to, Constraint, Describe};
///
/// let about_pi = close_to(3.14, 0.01);
/// assert!(about_pi.matches(&3.141_59));
/// assert!(!about_pi.matches(&3.2));
/// assert_eq!(about_pi.describe(), "floating point number equal to 3.14 within 0.01");
/// ```
pub fn close_to(expected: f64, tolerance: f64) -> FloatEqualTo {
    assert!(
        tolerance >= 0.0,
        "tolerance must be a non-negative number, got {tolerance:?}"
    );
    FloatEqualTo {
        expected,
        tolerance,
    }
}

/// A constraint that matches numbers within a tolerance of an expected value.
///
/// Created by [`float_equal_to()`] or [`close_to()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatEqualTo {
    expected: f64,
    tolerance: f64,
}

impl FloatEqualTo {
    /// Returns the expected value.
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Returns the inclusive tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Describe for FloatEqualTo {
    fn describe(&self) -> String {
        if self.tolerance > 0.0 {
            format!(
                "floating point number equal to {:?} within {:?}",
                self.expected, self.tolerance
            )
        } else {
            format!("floating point number equal to {:?}", self.expected)
        }
    }
}

impl<T: ToPrimitive> Constraint<T> for FloatEqualTo {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        subject
            .to_f64()
            .is_some_and(|value| (value - self.expected).abs() <= self.tolerance)
    }
}

/// Creates a constraint that matches exactly the character `expected`.
///
/// ```
/// use vouch_core::constraint::{char_equal_to, Constraint, Describe};
///
/// assert!(char_equal_to('x').matches(&'x'));
/// assert_eq!(char_equal_to('x').describe(), "character equal to 'x'");
/// ```
pub fn char_equal_to(expected: char) -> CharEqualTo {
    CharEqualTo { expected }
}

/// A constraint that matches a single character.
///
/// Created by [`char_equal_to()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharEqualTo {
    expected: char,
}

impl Describe for CharEqualTo {
    fn describe(&self) -> String {
        format!("character equal to '{}'", self.expected)
    }
}

impl Constraint<char> for CharEqualTo {
    #[inline]
    fn matches(&self, subject: &char) -> bool {
        *subject == self.expected
    }
}

/// Creates a constraint that matches exactly the boolean `expected`.
pub fn bool_equal_to(expected: bool) -> BoolEqualTo {
    BoolEqualTo { expected }
}

/// A constraint that matches a boolean.
///
/// Created by [`bool_equal_to()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolEqualTo {
    expected: bool,
}

impl Describe for BoolEqualTo {
    fn describe(&self) -> String {
        format!("boolean {}", self.expected)
    }
}

impl Constraint<bool> for BoolEqualTo {
    #[inline]
    fn matches(&self, subject: &bool) -> bool {
        *subject == self.expected
    }
}
