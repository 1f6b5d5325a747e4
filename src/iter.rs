use core::iter::FusedIterator;

use crate::untie::Untup;

/// Adaptor flattening every item of the wrapped iterator.
///
/// Created by [`UntupExt::untupled`] or [`untupled`].
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Debug)]
#[derive(Clone)]
pub struct Untupled<I> {
    iter: I,
}

impl<I> Untupled<I> {
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Iterator for Untupled<I>
where
    I: Iterator,
    I::Item: Untup,
{
    type Item = <I::Item as Untup>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Untup::untup)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.iter.fold(init, move |acc, item| f(acc, item.untup()))
    }
}

impl<I> DoubleEndedIterator for Untupled<I>
where
    I: DoubleEndedIterator,
    I::Item: Untup,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Untup::untup)
    }
}

impl<I> ExactSizeIterator for Untupled<I>
where
    I: ExactSizeIterator,
    I::Item: Untup,
{
}

impl<I> FusedIterator for Untupled<I>
where
    I: FusedIterator,
    I::Item: Untup,
{
}

pub trait UntupExt: Iterator {
    /// Flattens every item, so that nested items such as those produced by
    /// chained `zip` and `enumerate` calls come out as flat tuples.
    ///
    /// Items that are references to places (as yielded by `iter_mut`) are
    /// leaves and pass through unchanged; flattening applies to the tuple
    /// shape of the item itself.
    fn untupled(self) -> Untupled<Self>
    where
        Self: Sized,
        Self::Item: Untup,
    {
        Untupled { iter: self }
    }
}

impl<I> UntupExt for I where I: Iterator {}

/// Free-function form of [`UntupExt::untupled`].
pub fn untupled<I>(iterable: I) -> Untupled<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Untup,
{
    iterable.into_iter().untupled()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use itertools::izip;

    use super::*;

    #[test]
    fn test_zip_enumerate() {
        let mut vi = [0u32, 1, 2];
        let vf = [0.5f32, 1.5, 2.5];
        for (i, x, f) in vi.iter_mut().zip(vf.iter()).enumerate().untupled() {
            assert_eq!(*x as usize, i);
            *x *= 10;
            if *f > 2.0 {
                *x += 1;
            }
        }
        assert_eq!(vi[1], 10);
        assert_eq!(vi, [0, 10, 21]);
    }

    #[test]
    fn test_free_function() {
        let pairs = [((1u8, 'a'), true), ((2, 'b'), false)];
        let flat: Vec<(u8, char, bool)> = untupled(pairs).collect();
        assert_eq!(flat, [(1, 'a', true), (2, 'b', false)]);
    }

    #[test]
    fn test_windows() {
        let sums = [(1u16, (2u16,)), (3, (4,)), (5, (6,))]
            .into_iter()
            .untupled()
            .tuple_windows::<(_, _)>()
            .map(|((a, b), (c, d))| a + b + c + d)
            .collect::<Vec<_>>();
        assert_eq!(sums, [10, 18]);
    }

    #[test]
    fn test_izip() {
        let names = ["x", "y"];
        let coords = [(1i8, 2i8), (3, 4)];
        let weights = [0.5f64, 2.0];
        let rows: Vec<(&str, i8, i8, f64)> = izip!(names, coords, weights)
            .untupled()
            .collect();
        assert_eq!(rows, [("x", 1, 2, 0.5), ("y", 3, 4, 2.0)]);
    }

    #[test]
    fn test_reverse_and_len() {
        let it = [((1u8,), 2u8), ((3,), 4)].into_iter().untupled();
        assert_eq!(it.len(), 2);
        assert_eq!(it.rev().next(), Some((3, 4)));
    }
}
