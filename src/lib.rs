#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod access;
pub mod concat;
pub mod flatten;
pub mod iter;
pub mod leaf;
pub mod ref_to;
pub mod shape;
pub mod tuple;
pub mod untie;

mod impls;
mod trace;

pub use access::Access;
pub use access::Exclusive;
pub use access::Mode;
pub use access::Owned;
pub use access::Shared;
pub use concat::concat;
pub use iter::UntupExt;
pub use iter::Untupled;
pub use iter::untupled;
pub use leaf::Leaf;
pub use leaf::Opaque;
pub use ref_to::RefTo;
pub use ref_to::Resolve;
pub use shape::Atom;
pub use shape::Composite;
pub use shape::Kind;
pub use shape::Positional;
pub use shape::Shape;
pub use shape::arity;
pub use shape::is_positional;
pub use shape::leaf_count;
pub use untie::Untie;
pub use untie::Untup;
pub use untie::untie;
pub use untie::untup;
pub use untie::untup_cloned;

pub mod eval {
    use core::ops::Add;

    use crate::tuple::IntoHList;
    use crate::tuple::IntoTuple;

    pub type Untie<R> = <R as super::Untie>::Output;
    pub type Untup<T> = <T as super::Untup>::Output;
    pub type Concat<A, B> =
        <<<A as IntoHList>::List as Add<<B as IntoHList>::List>>::Output as IntoTuple>::Tuple;
    pub type Flat<T, M> = <super::RefTo<T, M> as super::flatten::Flatten>::Output;
}
