//! Conversions between flat tuples and the heterogeneous lists flattening is
//! computed on.
//!
//! Tuples of up to sixteen elements are supported, which bounds the number of
//! leaves a flattened structure may have.

use frunk::hlist::HList;

pub trait IntoHList {
    type List: HList;
    fn into_hlist(self) -> Self::List;
}

#[diagnostic::on_unimplemented(
    message = "the flattened result has more than 16 leaves",
    label = "cannot be packed into a tuple",
    note = "flat tuples hold at most 16 leaves; wrap part of the structure in `untup::Opaque` to keep it as one leaf"
)]
pub trait IntoTuple {
    type Tuple;
    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! tuple_conversions {
    (@impl $($t:ident),*) => {
        impl<$($t),*> IntoHList for ($($t,)*) {
            type List = frunk::HList![$($t),*];

            #[allow(non_snake_case)]
            fn into_hlist(self) -> Self::List {
                let ($($t,)*) = self;
                frunk::hlist![$($t),*]
            }
        }

        impl<$($t),*> IntoTuple for frunk::HList![$($t),*] {
            type Tuple = ($($t,)*);

            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::Tuple {
                let frunk::hlist_pat![$($t),*] = self;
                ($($t,)*)
            }
        }
    };
    () => {
        tuple_conversions!(@impl);
    };
    ($head:ident $(, $tail:ident)*) => {
        tuple_conversions!(@impl $head $(, $tail)*);
        tuple_conversions!($($tail),*);
    };
}

tuple_conversions!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

#[cfg(test)]
mod tests {
    use frunk::hlist;

    use super::*;

    #[test]
    fn test_into_hlist() {
        assert_eq!((1, 'a', "b").into_hlist(), hlist![1, 'a', "b"]);
        assert_eq!(().into_hlist(), hlist![]);
        assert_eq!(((1, 2),).into_hlist(), hlist![(1, 2)]);
    }

    #[test]
    fn test_into_tuple() {
        assert_eq!(hlist![1, 'a', "b"].into_tuple(), (1, 'a', "b"));
        assert_eq!(hlist![].into_tuple(), ());
        assert_eq!(hlist![7].into_tuple(), (7,));
    }

    #[test]
    fn test_widest() {
        type Wide = (u8, u16, u32, u64, i8, i16, i32, i64, i32, i32, i32, i32, i32, i32, i32, i32);
        let wide: Wide = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
        assert_eq!(<<Wide as IntoHList>::List as HList>::LEN, 16);
        let round_trip: Wide = wide.into_hlist().into_tuple();
        assert_eq!((round_trip.0, round_trip.7, round_trip.15), (0, 7, 15));
    }
}
