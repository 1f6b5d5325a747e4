//! Entry points producing flat tuples from nested ones.
//!
//! [`untie`] borrows its input and hands out one reference per leaf, in
//! depth-first order. Shared input yields shared references only; exclusive
//! input yields exclusive references except below a shared reference field.
//! [`untup`] consumes its input and hands out the leaves themselves.

use crate::access::Exclusive;
use crate::access::Owned;
use crate::access::Shared;
use crate::flatten::View;
use crate::ref_to::RefTo;
use crate::shape::Shape;

/// A borrow of a nested structure that can be viewed as a flat tuple of
/// references.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be untied into a flat tuple of references",
    label = "expected `&T` or `&mut T` where `T` is a tuple, an array or a declared leaf",
    note = "pass a borrow of a place; to flatten by value use `untup` or `untup_cloned`",
    note = "the flattened result may hold at most 16 leaves"
)]
pub trait Untie {
    type Output;
    fn untie(self) -> Self::Output;
}

impl<'a, T> Untie for &'a T
where
    T: Shape + 'a,
    RefTo<T, Shared<'a>>: View,
{
    type Output = <RefTo<T, Shared<'a>> as View>::Output;

    fn untie(self) -> Self::Output {
        RefTo::<T, Shared<'a>>::new(self).view()
    }
}

impl<'a, T> Untie for &'a mut T
where
    T: Shape + 'a,
    RefTo<T, Exclusive<'a>>: View,
{
    type Output = <RefTo<T, Exclusive<'a>> as View>::Output;

    fn untie(self) -> Self::Output {
        RefTo::<T, Exclusive<'a>>::new(self).view()
    }
}

/// Flattens a borrowed structure into a tuple of references to its leaves.
///
/// ```ignore
/// let mut nested = (1, (2.5, 'c'), ((),));
/// let (a, b, c) = untup::untie(&mut nested);
/// *a += 1;
/// ```
pub fn untie<R>(borrow: R) -> R::Output
where
    R: Untie,
{
    borrow.untie()
}

/// A nested structure that can be consumed into a flat tuple of its leaves.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be flattened into a tuple of values",
    note = "every element must be a tuple, an array of up to 12 elements or a declared leaf",
    note = "the flattened result may hold at most 16 leaves"
)]
pub trait Untup: Sized {
    type Output;
    fn untup(self) -> Self::Output;
}

impl<T> Untup for T
where
    T: Shape,
    RefTo<T, Owned>: View,
{
    type Output = <RefTo<T, Owned> as View>::Output;

    fn untup(self) -> Self::Output {
        RefTo::<T, Owned>::new(self).view()
    }
}

/// Consumes a nested structure and returns its leaves as a flat tuple.
pub fn untup<T>(value: T) -> T::Output
where
    T: Untup,
{
    value.untup()
}

/// Flat copy of a borrowed structure. The source is left untouched.
pub fn untup_cloned<T>(value: &T) -> T::Output
where
    T: Untup + Clone,
{
    value.clone().untup()
}
