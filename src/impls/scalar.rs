use core::cell::Cell;
use core::cell::RefCell;
use core::cmp::Ordering;
use core::cmp::Reverse;
use core::marker::PhantomData;
use core::net::IpAddr;
use core::net::Ipv4Addr;
use core::net::Ipv6Addr;
use core::net::SocketAddr;
use core::num::NonZeroI8;
use core::num::NonZeroI16;
use core::num::NonZeroI32;
use core::num::NonZeroI64;
use core::num::NonZeroI128;
use core::num::NonZeroIsize;
use core::num::NonZeroU8;
use core::num::NonZeroU16;
use core::num::NonZeroU32;
use core::num::NonZeroU64;
use core::num::NonZeroU128;
use core::num::NonZeroUsize;
use core::num::Wrapping;
use core::ops::Range;
use core::ops::RangeInclusive;
use core::time::Duration;

crate::leaf!(bool, char);
crate::leaf!(u8, u16, u32, u64, u128, usize);
crate::leaf!(i8, i16, i32, i64, i128, isize);
crate::leaf!(f32, f64);
crate::leaf!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
);
crate::leaf!(Duration, Ordering);
crate::leaf!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

crate::leaf!(
    impl<T> Option<T>,
    impl<T, E> Result<T, E>,
    impl<T> Range<T>,
    impl<T> RangeInclusive<T>,
    impl<T> PhantomData<T>,
    impl<T> Cell<T>,
    impl<T> RefCell<T>,
    impl<T> Wrapping<T>,
    impl<T> Reverse<T>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf_count;
    use crate::untie;

    #[test]
    fn test_wrappers_are_not_descended() {
        assert_eq!(leaf_count::<(Option<(u8, u8)>, Result<(u8,), ()>)>(), 2);
        assert_eq!(leaf_count::<(Range<u32>, Cell<(i8, i8)>)>(), 2);
    }

    #[test]
    fn test_option_leaf() {
        let mut record: (u8, Option<(u8, u8)>) = (1, Some((2, 3)));
        let (_, maybe) = untie(&mut record);
        if let Some(pair) = maybe {
            pair.1 = 30;
        }
        assert_eq!(record, (1, Some((2, 30))));
    }

    #[test]
    fn test_cell_through_shared_view() {
        let record: (Cell<u32>, (Duration, Ordering)) =
            (Cell::new(1), (Duration::from_millis(5), Ordering::Less));
        let (counter, elapsed, _) = untie(&record);
        counter.set(counter.get() + 1);
        assert_eq!(*elapsed, Duration::from_millis(5));
        assert_eq!(record.0.get(), 2);
    }
}
