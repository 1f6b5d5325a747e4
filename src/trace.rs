//! Hooks reporting each resolved type while flattening, behind the `trace`
//! feature.

use crate::access::Mode;
use crate::leaf::Leaf;
use crate::shape::Positional;

#[cfg(feature = "trace")]
pub(crate) fn leaf<T: Leaf, M: Mode>() {
    log::trace!(
        target: "untup",
        "leaf `{}` via {} access (read-only: {})",
        core::any::type_name::<T>(),
        M::NAME,
        M::READ_ONLY || T::READ_ONLY,
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn leaf<T: Leaf, M: Mode>() {}

#[cfg(feature = "trace")]
pub(crate) fn container<T: Positional, M: Mode>() {
    log::trace!(
        target: "untup",
        "descending into `{}` via {} access (arity {})",
        core::any::type_name::<T>(),
        M::NAME,
        T::ARITY,
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn container<T: Positional, M: Mode>() {}
