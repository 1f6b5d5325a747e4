use core::fmt;

use frunk::hlist::HCons;
use frunk::hlist::HNil;

use crate::access::Access;
use crate::access::Exclusive;
use crate::access::Owned;
use crate::access::Shared;
use crate::leaf::Leaf;

/// An element of declared type `T`, reached through access mode `M`.
///
/// `T` is kept exactly as declared, so a field of type `&mut U` is wrapped as
/// `RefTo<&mut U, _>`. Turning that into a single reference to `U` is left to
/// [`Resolve`].
pub struct RefTo<T, M>
where
    M: Access<T>,
{
    inner: M::Ref,
}

impl<T, M> RefTo<T, M>
where
    M: Access<T>,
{
    pub const fn new(inner: M::Ref) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> M::Ref {
        self.inner
    }
}

impl<T, M> RefTo<T, M>
where
    T: Leaf,
    M: Access<T>,
{
    /// Read-only if the path here was, or if the leaf's own type is.
    pub const READ_ONLY: bool = M::READ_ONLY || T::READ_ONLY;
}

impl<T, M> fmt::Debug for RefTo<T, M>
where
    M: Access<T>,
    M::Ref: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefTo")
            .field(&M::NAME)
            .field(&self.inner)
            .finish()
    }
}

/// Strips the wrapper off a flattened leaf.
pub trait Resolve {
    type Output;
    fn resolve(self) -> Self::Output;
}

impl<'a, L> Resolve for RefTo<L, Shared<'a>>
where
    L: Leaf + 'a,
{
    type Output = L::Ref<'a>;

    fn resolve(self) -> Self::Output {
        L::get(self.into_inner())
    }
}

impl<'a, L> Resolve for RefTo<L, Exclusive<'a>>
where
    L: Leaf + 'a,
{
    type Output = L::Mut<'a>;

    fn resolve(self) -> Self::Output {
        L::get_mut(self.into_inner())
    }
}

impl<L> Resolve for RefTo<L, Owned>
where
    L: Leaf,
{
    type Output = L::Value;

    fn resolve(self) -> Self::Output {
        L::into_value(self.into_inner())
    }
}

pub trait ResolveAll {
    type Output;
    fn resolve_all(self) -> Self::Output;
}

impl ResolveAll for HNil {
    type Output = HNil;

    fn resolve_all(self) -> Self::Output {
        self
    }
}

impl<H, T> ResolveAll for HCons<H, T>
where
    H: Resolve,
    T: ResolveAll,
{
    type Output = HCons<H::Output, T::Output>;

    fn resolve_all(self) -> Self::Output {
        HCons {
            head: self.head.resolve(),
            tail: self.tail.resolve_all(),
        }
    }
}
