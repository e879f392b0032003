use std::{collections::HashSet, hash::Hash};

pub trait SliceUtil<T> {
    /// Returns `true` if the slice only contains unique values
    fn is_unique(&self) -> bool;
}

impl<T: Eq + Hash> SliceUtil<T> for [T] {
    fn is_unique(&self) -> bool {
        is_unique(self)
    }
}

#[macro_export]
macro_rules! assert_unique {
    ($slice:expr) => {{
        use $crate::slice::SliceUtil;
        let slice = &$slice;
        assert!(
            slice.is_unique(),
            "expected `{}` to be unique, but it wasn't; actual={:?}",
            stringify!($slice),
            slice,
        );
    }};
}

pub fn is_unique<T: Eq + Hash>(slice: &[T]) -> bool {
    let mut s = HashSet::new();
    slice.iter().all(|el| s.insert(el))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_detected() {
        assert!(is_unique(&["a", "b", "c"]));
        assert!(!is_unique(&["a", "b", "a"]));
        assert!(vec![1, 2, 3].is_unique());
    }

    #[test]
    #[should_panic(expected = "to be unique")]
    fn assert_unique_panics() {
        assert_unique!(vec![1, 1]);
    }
}
