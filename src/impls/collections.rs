use alloc::borrow::Cow;
use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::collections::BTreeSet;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

crate::leaf!(String);

crate::leaf!(
    impl<T> Vec<T>,
    impl<T> VecDeque<T>,
    impl<T> BTreeSet<T>,
    impl<K, V> BTreeMap<K, V>,
);

crate::__leaf_impl!([T: ?Sized] Box<T>);
crate::__leaf_impl!([T: ?Sized] Rc<T>);
crate::__leaf_impl!([T: ?Sized] Arc<T>);
crate::__leaf_impl!(['b, B: ToOwned + ?Sized + 'b] Cow<'b, B>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::untie;
    use crate::untup;
    use crate::untup_cloned;

    #[test]
    fn test_heap_leaves() {
        let mut record: (String, (Vec<(u8, u8)>, Box<(u8,)>)) =
            (String::from("id"), (vec![(1, 2)], Box::new((3,))));
        let (name, items, boxed) = untie(&mut record);
        name.push('!');
        items.push((4, 5));
        boxed.0 = 30;
        assert_eq!(record.0, "id!");
        assert_eq!(record.1.0, [(1, 2), (4, 5)]);
        assert_eq!(*record.1.1, (30,));
    }

    #[test]
    fn test_copy_is_independent() {
        let record: (String, (u32, Rc<str>)) = (String::from("a"), (7, Rc::from("shared")));
        let (mut name, count, text) = untup_cloned(&record);
        name.push('b');
        assert_eq!(record.0, "a");
        assert_eq!((name.as_str(), count), ("ab", 7));
        assert_eq!(Rc::strong_count(&text), 2);

        let (name, _, _) = untup(record);
        assert_eq!(name, "a");
    }

    #[test]
    fn test_cow() {
        let record: (Cow<'_, str>, (u8,)) = (Cow::Borrowed("x"), (1,));
        let (text, one) = untup(record);
        assert_eq!((&*text, one), ("x", 1));
    }
}
