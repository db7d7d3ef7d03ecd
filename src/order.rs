use std::cmp::Ordering;

/// A total order over keys, injected at map construction.
///
/// The order must be total, deterministic, and consistent with equality:
/// two keys are considered equal iff `compare` returns `Ordering::Equal`.
/// It must not change for the lifetime of the map; every structural
/// invariant of the tree is phrased in terms of it.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The natural order of the key type.
///
/// This is the default comparator: `RankMap<K, V>` orders by `K: Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Any ordering closure is a comparator, so custom orders can be supplied
/// without a newtype:
///
/// ```
/// use rankmap::RankMap;
///
/// let mut m = RankMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// m.insert(1, "one");
/// m.insert(2, "two");
/// assert_eq!(m.entry_at(0).unwrap(), (&2, &"two"));
/// ```
impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
