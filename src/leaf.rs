use crate::shape::Atom;
use crate::shape::Shape;

/// An element flattening stops at.
///
/// The associated types say what a flattened leaf resolves to in each access
/// mode. Plain values resolve to a reference to themselves. Reference-typed
/// leaves resolve to a reference to their referent, so a `&mut U` field shows
/// up as `&mut U` (or `&U` on a read-only path) rather than as a reference to
/// a reference. A `&'r U` field keeps its own lifetime `'r` in every mode.
pub trait Leaf: Shape<Kind = Atom> + Sized {
    /// What a shared view of this leaf resolves to.
    type Ref<'m>
    where
        Self: 'm;
    /// What an exclusive view of this leaf resolves to.
    type Mut<'m>
    where
        Self: 'm;
    /// What this leaf resolves to when moved out.
    type Value;
    /// Whether the declared type itself only grants read access.
    const READ_ONLY: bool;

    fn get(&self) -> Self::Ref<'_>;
    fn get_mut(&mut self) -> Self::Mut<'_>;
    fn into_value(self) -> Self::Value;
}

impl<U> Shape for &U
where
    U: ?Sized,
{
    type Kind = Atom;
}

impl<'r, U> Leaf for &'r U
where
    U: ?Sized,
{
    type Ref<'m>
        = &'r U
    where
        Self: 'm;
    type Mut<'m>
        = &'r U
    where
        Self: 'm;
    type Value = Self;
    const READ_ONLY: bool = true;

    fn get(&self) -> &'r U {
        *self
    }

    fn get_mut(&mut self) -> &'r U {
        *self
    }

    fn into_value(self) -> Self {
        self
    }
}

impl<U> Shape for &mut U
where
    U: ?Sized,
{
    type Kind = Atom;
}

impl<'r, U> Leaf for &'r mut U
where
    U: ?Sized,
{
    type Ref<'m>
        = &'m U
    where
        Self: 'm;
    type Mut<'m>
        = &'m mut U
    where
        Self: 'm;
    type Value = Self;
    const READ_ONLY: bool = false;

    fn get(&self) -> &U {
        self
    }

    fn get_mut(&mut self) -> &mut U {
        self
    }

    fn into_value(self) -> Self {
        self
    }
}

/// Wraps a value so that it is always treated as a leaf, even when it is
/// itself a tuple or array. The wrapper is stripped on resolution: views
/// yield references to the inner value and `untup` yields the inner value.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(PartialOrd, Ord)]
#[derive(Hash)]
#[derive(Default)]
#[repr(transparent)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Shape for Opaque<T> {
    type Kind = Atom;
}

impl<T> Leaf for Opaque<T> {
    type Ref<'m>
        = &'m T
    where
        Self: 'm;
    type Mut<'m>
        = &'m mut T
    where
        Self: 'm;
    type Value = T;
    const READ_ONLY: bool = false;

    fn get(&self) -> &T {
        &self.0
    }

    fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_value(self) -> T {
        self.0
    }
}

/// Declares types as leaves.
///
/// ```ignore
/// untup::leaf!(Meters, Celsius);
/// untup::leaf!(impl<T> Tagged<T>, impl<'a, T> Window<'a, T>);
/// ```
///
/// The generic form takes bare parameters only; a type that needs bounds
/// implements [`Shape`] and [`Leaf`] by hand, or through the hidden
/// `__leaf_impl!([params with bounds] Type)`.
#[macro_export]
macro_rules! leaf {
    ($(impl<$($param:tt),+> $generic:ty),+ $(,)?) => {
        $(
            $crate::__leaf_impl!([$($param),+] $generic);
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__leaf_impl!([] $ty);
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __leaf_impl {
    ([$($param:tt)*] $ty:ty) => {
        impl<$($param)*> $crate::Shape for $ty {
            type Kind = $crate::Atom;
        }

        impl<$($param)*> $crate::Leaf for $ty {
            type Ref<'m>
                = &'m Self
            where
                Self: 'm;
            type Mut<'m>
                = &'m mut Self
            where
                Self: 'm;
            type Value = Self;
            const READ_ONLY: bool = false;

            fn get(&self) -> &Self {
                self
            }

            fn get_mut(&mut self) -> &mut Self {
                self
            }

            fn into_value(self) -> Self {
                self
            }
        }
    };
}

/// Derive-style form of [`leaf!`] for non-generic structs and enums, for use
/// with `macro_rules_attribute`:
///
/// ```ignore
/// use macro_rules_attribute::derive;
///
/// #[derive(Debug, Clone, Copy, untup::Leaf!)]
/// struct Meters(u32);
/// ```
#[macro_export]
macro_rules! Leaf {
    ($(#[$attr:meta])* $vis:vis struct $name:ident $($rest:tt)*) => {
        $crate::leaf!($name);
    };
    ($(#[$attr:meta])* $vis:vis enum $name:ident $($rest:tt)*) => {
        $crate::leaf!($name);
    };
}

#[cfg(test)]
mod tests {
    use macro_rules_attribute::derive;

    use super::*;
    use crate::Leaf;
    use crate::untie;
    use crate::untup;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Meters(u32);

    crate::leaf!(Meters);

    #[derive(Debug, Clone, PartialEq, Leaf!)]
    enum Signal {
        Low,
        High,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged<T>(&'static str, T);

    crate::leaf!(impl<T> Tagged<T>);

    #[test]
    fn test_reference_leaf_targets() {
        let mut value = 3;
        {
            let mut shared: &i32 = &value;
            assert_eq!(Leaf::get(&shared), &3);
            assert_eq!(Leaf::get_mut(&mut shared), &3);
        }

        let mut exclusive: &mut i32 = &mut value;
        *Leaf::get_mut(&mut exclusive) = 4;
        assert_eq!(Leaf::get(&exclusive), &4);
        assert_eq!(value, 4);

        let kept: &i32 = {
            let holder: &i32 = &value;
            Leaf::get(&holder)
        };
        assert_eq!(*kept, 4);

        assert!(<&i32 as Leaf>::READ_ONLY);
        assert!(!<&mut i32 as Leaf>::READ_ONLY);
        assert!(!<i32 as Leaf>::READ_ONLY);
    }

    #[test]
    fn test_declared_leaves() {
        let mut record = (Meters(5), (Signal::Low, Tagged("x", (1, 2))));
        let (meters, signal, tagged): (&mut Meters, &mut Signal, &mut Tagged<(i32, i32)>) =
            untie(&mut record);
        meters.0 += 1;
        *signal = Signal::High;
        tagged.1.0 = 10;
        assert_eq!(record, (Meters(6), (Signal::High, Tagged("x", (10, 2)))));
    }

    #[test]
    fn test_opaque() {
        let mut record = (1i32, Opaque([0u8; 32]));
        let (n, bytes): (&mut i32, &mut [u8; 32]) = untie(&mut record);
        *n = 2;
        bytes[31] = 0xFF;
        assert_eq!(record.0, 2);
        assert_eq!(record.1.0[31], 0xFF);

        let (n, pair): (i32, (i32, i32)) = untup((7i32, Opaque((1i32, 2i32))));
        assert_eq!((n, pair), (7, (1, 2)));

        let wrapped = (Opaque((3u8, 4u8)),);
        let (inner,): (&(u8, u8),) = untie(&wrapped);
        assert_eq!(*inner, (3, 4));
    }
}
