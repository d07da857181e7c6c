use std::fmt;
use std::hash::BuildHasher;

use rustc_hash::FxBuildHasher;

/// Maps a string key to the hash code of the bucket it lives in.
///
/// Implementations must be pure: the same key always yields the same code
/// for the lifetime of a table, otherwise stored keys become unreachable.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

/// Sums the code point of every char in the key.
///
/// Anagrams collide and short keys cluster in a small range of codes,
/// the bucket layer handles that by chaining.
pub fn code_point_sum(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u32::from(c) as u64))
}

/// The default hasher, see [`code_point_sum`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodePointSum;

impl KeyHasher for CodePointSum {
    fn hash_key(&self, key: &str) -> u64 {
        code_point_sum(key)
    }
}

/// Hashes the key bytes with `FxHasher`, spreading keys over far more
/// buckets than [`CodePointSum`].
#[derive(Clone, Copy, Default)]
pub struct FxKeyHasher(FxBuildHasher);

impl fmt::Debug for FxKeyHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FxKeyHasher").finish()
    }
}

impl KeyHasher for FxKeyHasher {
    fn hash_key(&self, key: &str) -> u64 {
        self.0.hash_one(key)
    }
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_key_hashes_to_zero() {
        assert_eq!(code_point_sum(""), 0);
        assert_eq!(CodePointSum.hash_key(""), 0);
    }

    #[test]
    fn test_known_sums() {
        assert_eq!(code_point_sum("a"), 97);
        assert_eq!(code_point_sum("ab"), 97 + 98);
        assert_eq!(code_point_sum("cat"), 99 + 97 + 116);
        assert_eq!(code_point_sum("a b!"), 97 + 32 + 98 + 33);
    }

    #[test]
    fn test_anagrams_collide() {
        assert_eq!(code_point_sum("ab"), code_point_sum("ba"));
        assert_eq!(code_point_sum("listen"), code_point_sum("silent"));
    }

    #[test]
    fn test_multi_byte_chars_use_code_point() {
        // 'é' is U+00E9, two bytes in utf-8
        assert_eq!(code_point_sum("é"), 0xE9);
        // '€' is U+20AC, three bytes in utf-8
        assert_eq!(code_point_sum("€"), 0x20AC);
        // '🦀' is U+1F980, four bytes in utf-8
        assert_eq!(code_point_sum("🦀"), 0x1F980);
        assert_ne!(code_point_sum("€"), "€".bytes().map(u64::from).sum::<u64>());
    }

    #[test]
    fn test_closure_as_hasher() {
        let constant = |_: &str| 7u64;
        assert_eq!(constant.hash_key("anything"), 7);
        assert_eq!(constant.hash_key(""), 7);
    }

    #[test]
    fn test_fx_hasher_separates_anagrams() {
        let h = FxKeyHasher::default();
        assert_ne!(h.hash_key("ab"), h.hash_key("ba"));
    }

    #[test]
    fn test_hasher_debug_output() {
        assert_eq!(format!("{:?}", FxKeyHasher::default()), "FxKeyHasher");
        assert_eq!(format!("{:?}", CodePointSum), "CodePointSum");
    }

    proptest! {
        #[test]
        fn prop_hash_is_deterministic(key in any::<String>()) {
            prop_assert_eq!(code_point_sum(&key), code_point_sum(&key));
            let fx = FxKeyHasher::default();
            prop_assert_eq!(fx.hash_key(&key), fx.hash_key(&key));
        }

        #[test]
        fn prop_hash_ignores_order(key in "[a-z]{0,16}") {
            let reversed: String = key.chars().rev().collect();
            prop_assert_eq!(code_point_sum(&key), code_point_sum(&reversed));
        }

        #[test]
        fn prop_hash_is_additive(a in any::<String>(), b in any::<String>()) {
            let joined = format!("{a}{b}");
            prop_assert_eq!(code_point_sum(&joined), code_point_sum(&a) + code_point_sum(&b));
        }
    }
}
