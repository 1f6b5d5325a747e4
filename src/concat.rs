use core::ops::Add;

use frunk::hlist::HCons;
use frunk::hlist::HList;
use frunk::hlist::HNil;

use crate::tuple::IntoHList;
use crate::tuple::IntoTuple;

/// Concatenates a list of lists, keeping every element in order.
pub trait Join {
    type Output: HList;
    fn join(self) -> Self::Output;
}

impl Join for HNil {
    type Output = HNil;

    fn join(self) -> Self::Output {
        self
    }
}

impl<H, T> Join for HCons<H, T>
where
    T: Join,
    H: Add<T::Output>,
    <H as Add<T::Output>>::Output: HList,
{
    type Output = <H as Add<T::Output>>::Output;

    fn join(self) -> Self::Output {
        self.head + self.tail.join()
    }
}

/// Concatenates two flat tuples: `concat((1, 2), ('a',)) == (1, 2, 'a')`.
pub fn concat<A, B>(lhs: A, rhs: B) -> crate::eval::Concat<A, B>
where
    A: IntoHList,
    B: IntoHList,
    A::List: Add<B::List>,
    <A::List as Add<B::List>>::Output: IntoTuple,
{
    (lhs.into_hlist() + rhs.into_hlist()).into_tuple()
}
