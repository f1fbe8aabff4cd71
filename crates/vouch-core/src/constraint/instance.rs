//! Type-membership constraint.
//!
//! Rust has no runtime subtyping, so a type declares which other types it
//! counts as an instance of: usually the trait objects it implements. The
//! [`instance_of!`](crate::instance_of) macro writes that declaration.

use std::any::{type_name, Any, TypeId};
use std::marker::PhantomData;

use super::{Constraint, Describe};

/// Runtime type membership for a subject.
///
/// The default implementation only recognises the value's own concrete
/// type. Override [`is_instance_of`](Instance::is_instance_of), or use
/// [`instance_of!`](crate::instance_of), to also answer for supertypes.
pub trait Instance: Any {
    /// Returns true if this value is an instance of the type identified by `ty`.
    fn is_instance_of(&self, ty: TypeId) -> bool {
        Any::type_id(self) == ty
    }
}

impl Instance for dyn Any {
    fn is_instance_of(&self, ty: TypeId) -> bool {
        Any::type_id(self) == ty
    }
}

impl Instance for dyn Any + Send + Sync {
    fn is_instance_of(&self, ty: TypeId) -> bool {
        Any::type_id(self) == ty
    }
}

/// Declares the types a value is an instance of.
///
/// The first type is the implementing type itself; every type after the
/// colon is a supertype the value should also match under
/// [`is_a`](crate::constraint::is_a).
///
/// ```
/// use vouch_core::constraint::{is_a, Constraint};
/// use vouch_core::instance_of;
///
/// trait Animal {}
///
/// #[derive(Debug)]
/// struct Cat;
/// impl Animal for Cat {}
///
/// instance_of!(Cat: dyn Animal);
///
/// assert!(is_a::<Cat>().matches(&Cat));
/// assert!(is_a::<dyn Animal>().matches(&Cat));
/// assert!(!is_a::<String>().matches(&Cat));
/// ```
#[macro_export]
macro_rules! instance_of {
    ($ty:ty) => {
        impl $crate::constraint::Instance for $ty {}
    };
    ($ty:ty : $($super:ty),+ $(,)?) => {
        impl $crate::constraint::Instance for $ty {
            fn is_instance_of(&self, ty: ::std::any::TypeId) -> bool {
                ty == ::std::any::TypeId::of::<$ty>()
                    $(|| ty == ::std::any::TypeId::of::<$super>())+
            }
        }
    };
}

instance_of!(bool);
instance_of!(char);
instance_of!(i8);
instance_of!(i16);
instance_of!(i32);
instance_of!(i64);
instance_of!(i128);
instance_of!(isize);
instance_of!(u8);
instance_of!(u16);
instance_of!(u32);
instance_of!(u64);
instance_of!(u128);
instance_of!(usize);
instance_of!(f32);
instance_of!(f64);
instance_of!(String);
instance_of!(&'static str);

/// Creates a constraint that matches instances of `T`, including values
/// that declare `T` as a supertype.
///
/// Subjects must implement [`Instance`]. Foreign types such as `Vec<T>`,
/// `Option<T>` or `PathBuf` cannot be given an `Instance` impl outside this
/// crate, so check them through `&dyn Any`:
///
/// ```
/// use std::any::Any;
/// use vouch_core::constraint::{is_a, Constraint};
///
/// let bytes: Vec<u8> = vec![1, 2, 3];
/// assert!(is_a::<Vec<u8>>().matches(&bytes as &dyn Any));
/// ```
pub fn is_a<T: ?Sized + 'static>() -> IsA<T> {
    IsA {
        _phantom: PhantomData,
    }
}

/// Alias for [`is_a()`], reading as "a `T`".
pub fn a<T: ?Sized + 'static>() -> IsA<T> {
    is_a()
}

/// A constraint that matches by runtime type membership.
///
/// Created by [`is_a()`] or [`a()`].
pub struct IsA<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Clone for IsA<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for IsA<T> {}

impl<T: ?Sized> std::fmt::Debug for IsA<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IsA").field(&type_name::<T>()).finish()
    }
}

impl<T: ?Sized> Describe for IsA<T> {
    fn describe(&self) -> String {
        format!("object of type {}", type_name::<T>())
    }
}

impl<T, S> Constraint<S> for IsA<T>
where
    T: ?Sized + 'static,
    S: Instance + ?Sized,
{
    #[inline]
    fn matches(&self, subject: &S) -> bool {
        subject.is_instance_of(TypeId::of::<T>())
    }
}
