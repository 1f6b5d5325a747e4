use frunk::hlist::HList;

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

macro_rules! positional_tuple {
    (@descend [$($param:tt)*] [$($bound:tt)*] $mode:ty; $($t:ident),*) => {
        impl<$($param)* $($t),*> Descend<Composite> for RefTo<($($t,)*), $mode>
        where
            $($bound)*
            $(RefTo<$t, $mode>: Flatten,)*
            frunk::HList![$(<RefTo<$t, $mode> as Flatten>::Output),*]: Join,
        {
            type Output =
                <frunk::HList![$(<RefTo<$t, $mode> as Flatten>::Output),*] as Join>::Output;

            #[allow(non_snake_case)]
            fn descend(self) -> Self::Output {
                trace::container::<($($t,)*), $mode>();
                let ($($t,)*) = self.into_inner();
                frunk::hlist![$(RefTo::<$t, $mode>::new($t).flatten()),*].join()
            }
        }
    };
    (@impl $($t:ident),*) => {
        impl<$($t),*> Shape for ($($t,)*) {
            type Kind = Composite;
        }

        impl<$($t),*> Positional for ($($t,)*) {
            const ARITY: usize = <frunk::HList![$($t),*] as HList>::LEN;
        }

        positional_tuple!(@descend ['a,] [$($t: 'a,)*] Shared<'a>; $($t),*);
        positional_tuple!(@descend ['a,] [$($t: 'a,)*] Exclusive<'a>; $($t),*);
        positional_tuple!(@descend [] [] Owned; $($t),*);
    };
    () => {
        positional_tuple!(@impl);
    };
    ($head:ident $(, $tail:ident)*) => {
        positional_tuple!(@impl $head $(, $tail)*);
        positional_tuple!($($tail),*);
    };
}

positional_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
