use frunk::hlist::HList;

use crate::access::Access;
use crate::leaf::Leaf;
use crate::ref_to::RefTo;
use crate::ref_to::ResolveAll;
use crate::shape::Atom;
use crate::shape::Kind;
use crate::shape::Shape;
use crate::trace;
use crate::tuple::IntoTuple;

/// Flattens a wrapped element into the list of its wrapped leaves, in
/// depth-first, left-to-right order.
pub trait Flatten {
    type Output: HList;
    fn flatten(self) -> Self::Output;
}

/// One step of [`Flatten`], selected by the [`Kind`] of the wrapped type.
///
/// Containers implement this once per access mode; a container reached
/// through [`Shared`](crate::Shared) hands out shared element wrappers only,
/// which is what makes every leaf below it read-only.
pub trait Descend<K: Kind> {
    type Output: HList;
    fn descend(self) -> Self::Output;
}

impl<T, M> Flatten for RefTo<T, M>
where
    T: Shape,
    M: Access<T>,
    Self: Descend<T::Kind>,
{
    type Output = <Self as Descend<T::Kind>>::Output;

    fn flatten(self) -> Self::Output {
        <Self as Descend<T::Kind>>::descend(self)
    }
}

impl<T, M> Descend<Atom> for RefTo<T, M>
where
    T: Leaf,
    M: Access<T>,
{
    type Output = frunk::HList![Self];

    fn descend(self) -> Self::Output {
        trace::leaf::<T, M>();
        frunk::hlist![self]
    }
}

/// Flattens, strips the wrappers and packs the leaves into a tuple.
pub trait View {
    type Output;
    fn view(self) -> Self::Output;
}

impl<X> View for X
where
    X: Flatten,
    X::Output: ResolveAll,
    <X::Output as ResolveAll>::Output: IntoTuple,
{
    type Output = <<X::Output as ResolveAll>::Output as IntoTuple>::Tuple;

    fn view(self) -> Self::Output {
        self.flatten().resolve_all().into_tuple()
    }
}
