use core::marker::PhantomData;

/// The access a traversal carries down to every element it reaches.
pub trait Mode: sealed::Sealed {
    /// Whether elements reached in this mode may only be read.
    const READ_ONLY: bool;
    const NAME: &'static str;
}

/// How an element of type `T` is held while traversed in a given [`Mode`].
pub trait Access<T>: Mode {
    type Ref;
}

/// Traversal through `&'a` borrows. Everything reached this way is read-only.
pub struct Shared<'a>(PhantomData<&'a ()>);

/// Traversal through `&'a mut` borrows.
pub struct Exclusive<'a>(PhantomData<&'a mut ()>);

/// By-value traversal: the element itself is moved along.
pub struct Owned(());

impl Mode for Shared<'_> {
    const READ_ONLY: bool = true;
    const NAME: &'static str = "shared";
}

impl Mode for Exclusive<'_> {
    const READ_ONLY: bool = false;
    const NAME: &'static str = "exclusive";
}

impl Mode for Owned {
    const READ_ONLY: bool = false;
    const NAME: &'static str = "owned";
}

impl<'a, T: 'a> Access<T> for Shared<'a> {
    type Ref = &'a T;
}

impl<'a, T: 'a> Access<T> for Exclusive<'a> {
    type Ref = &'a mut T;
}

impl<T> Access<T> for Owned {
    type Ref = T;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Shared<'_> {}
    impl Sealed for super::Exclusive<'_> {}
    impl Sealed for super::Owned {}
}
