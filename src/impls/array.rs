use crate::access::Exclusive;
use crate::access::Owned;
use crate::access::Shared;
use crate::concat::Join;
use crate::flatten::Descend;
use crate::flatten::Flatten;
use crate::ref_to::RefTo;
use crate::shape::Composite;
use crate::shape::Positional;
use crate::shape::Shape;
use crate::trace;

macro_rules! positional_array {
    (@descend [$($param:tt)*] [$($bound:tt)*] $mode:ty; $len:literal; $($e:ident)*) => {
        impl<$($param)* T> Descend<Composite> for RefTo<[T; $len], $mode>
        where
            $($bound)*
            RefTo<T, $mode>: Flatten,
            frunk::HList![$(each!($e => <RefTo<T, $mode> as Flatten>::Output)),*]: Join,
        {
            type Output =
                <frunk::HList![$(each!($e => <RefTo<T, $mode> as Flatten>::Output)),*] as Join>::Output;

            #[allow(non_snake_case)]
            fn descend(self) -> Self::Output {
                trace::container::<[T; $len], $mode>();
                let [$($e),*] = self.into_inner();
                frunk::hlist![$(RefTo::<T, $mode>::new($e).flatten()),*].join()
            }
        }
    };
    ($($len:literal => [$($e:ident)*];)*) => {
        $(
            impl<T> Shape for [T; $len] {
                type Kind = Composite;
            }

            impl<T> Positional for [T; $len] {
                const ARITY: usize = $len;
            }

            positional_array!(@descend ['a,] [T: 'a,] Shared<'a>; $len; $($e)*);
            positional_array!(@descend ['a,] [T: 'a,] Exclusive<'a>; $len; $($e)*);
            positional_array!(@descend [] [] Owned; $len; $($e)*);
        )*
    };
}

positional_array! {
    0 => [];
    1 => [A];
    2 => [A B];
    3 => [A B C];
    4 => [A B C D];
    5 => [A B C D E];
    6 => [A B C D E F];
    7 => [A B C D E F G];
    8 => [A B C D E F G H];
    9 => [A B C D E F G H I];
    10 => [A B C D E F G H I J];
    11 => [A B C D E F G H I J K];
    12 => [A B C D E F G H I J K L];
}
