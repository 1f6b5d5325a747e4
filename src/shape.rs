use frunk::hlist::HList;

use crate::access::Owned;
use crate::flatten::Flatten;
use crate::ref_to::RefTo;

/// Classifies a type as either an opaque [`Atom`] or a [`Composite`] whose
/// elements are flattened in turn.
///
/// Tuples and arrays of up to twelve elements are composites. References,
/// scalars and the common library types are atoms; other types become atoms
/// through [`leaf!`](crate::leaf!).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is neither a positional container nor a declared leaf",
    label = "cannot tell whether to flatten `{Self}`",
    note = "declare it with `untup::leaf!(...)` or wrap the value in `untup::Opaque`"
)]
pub trait Shape {
    type Kind: Kind;
}

pub trait Kind: sealed::Sealed {
    const POSITIONAL: bool;
}

/// Kind of leaves.
pub enum Atom {}

/// Kind of positional containers.
pub enum Composite {}

impl Kind for Atom {
    const POSITIONAL: bool = false;
}

impl Kind for Composite {
    const POSITIONAL: bool = true;
}

/// A container with a fixed number of positionally accessed elements.
pub trait Positional: Shape<Kind = Composite> {
    const ARITY: usize;
}

/// Whether `T` is descended into when flattening.
pub const fn is_positional<T: Shape>() -> bool {
    <T::Kind as Kind>::POSITIONAL
}

pub const fn arity<T: Positional>() -> usize {
    T::ARITY
}

/// Number of leaves `T` flattens to: one for a leaf, otherwise the sum over
/// its elements.
pub const fn leaf_count<T>() -> usize
where
    RefTo<T, Owned>: Flatten,
{
    <<RefTo<T, Owned> as Flatten>::Output as HList>::LEN
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Atom {}
    impl Sealed for super::Composite {}
}
