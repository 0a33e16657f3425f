//! Name and attribute generation keyed by customer ordinal
//!
//! Gender, first name, last name, middle initial and tax id each come from
//! an **independent** sub-sequence forked from a fixed per-attribute base
//! seed and the customer ordinal. Any attribute of any customer can be
//! recomputed in isolation, in any order, by any generator, without a full
//! replay - this is what lets an account-permission row name a customer
//! thousands of ordinals away without touching the row's own sequence.
//!
//! The optional [`PersonCache`] memoizes the gender/name lookups for one
//! load unit at a time. It is purely an optimization: with or without it,
//! every value is identical.

use crate::reference::ReferenceBundle;
use crate::rng::Sequence;
use crate::scaling::{higher_id, LOAD_UNIT_SIZE};
use serde::{Deserialize, Serialize};

/// Base seed of the gender sub-sequence.
pub const GENDER_BASE_SEED: u64 = 9_568_922;

/// Base seed of the first-name sub-sequence.
pub const FIRST_NAME_BASE_SEED: u64 = 95_066_470;

/// Base seed of the last-name sub-sequence.
pub const LAST_NAME_BASE_SEED: u64 = 35_846_049;

/// Base seed of the middle-initial sub-sequence.
pub const MIDDLE_INITIAL_BASE_SEED: u64 = 71_434_514;

/// Base seed of the tax-id sub-sequence.
pub const TAX_ID_BASE_SEED: u64 = 8_731_255;

/// Tax identifier pattern (`n` digit, `a` uppercase letter).
pub const TAX_ID_FORMAT: &str = "nnn-aa-nnnnnn";

const FEMALE_PERCENT: i32 = 49;
const MIDDLE_INITIAL_PERCENT: i32 = 30;

/// Full set of person attributes for one customer ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub is_female: bool,
    pub first_name: String,
    pub last_name: String,
    pub middle_initial: Option<char>,
    pub tax_id: String,
}

/// Gender for a customer ordinal.
pub fn is_female(ordinal: u64) -> bool {
    Sequence::fork(GENDER_BASE_SEED, ordinal).percent(FEMALE_PERCENT)
}

/// First name for a customer ordinal.
///
/// Consults the gender sub-sequence to pick the list, then draws from the
/// first-name sub-sequence; the two forks stay independent.
pub fn first_name(bundle: &ReferenceBundle, ordinal: u64) -> String {
    let mut seq = Sequence::fork(FIRST_NAME_BASE_SEED, ordinal);
    let list = if is_female(ordinal) {
        &bundle.female_first_names
    } else {
        &bundle.male_first_names
    };
    list.random(&mut seq).clone()
}

/// Last name for a customer ordinal.
pub fn last_name(bundle: &ReferenceBundle, ordinal: u64) -> String {
    let mut seq = Sequence::fork(LAST_NAME_BASE_SEED, ordinal);
    bundle.last_names.random(&mut seq).clone()
}

/// Middle initial for a customer ordinal; most customers have none.
pub fn middle_initial(ordinal: u64) -> Option<char> {
    let mut seq = Sequence::fork(MIDDLE_INITIAL_BASE_SEED, ordinal);
    if seq.percent(MIDDLE_INITIAL_PERCENT) {
        Some((b'A' + seq.int_range(0, 25) as u8) as char)
    } else {
        None
    }
}

/// Tax identifier for a customer ordinal.
pub fn tax_id(ordinal: u64) -> String {
    Sequence::fork(TAX_ID_BASE_SEED, ordinal).alphanum_formatted(TAX_ID_FORMAT)
}

/// All attributes of one customer.
pub fn person(bundle: &ReferenceBundle, ordinal: u64) -> Person {
    Person {
        is_female: is_female(ordinal),
        first_name: first_name(bundle, ordinal),
        last_name: last_name(bundle, ordinal),
        middle_initial: middle_initial(ordinal),
        tax_id: tax_id(ordinal),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CachedName {
    is_female: bool,
    /// Unique-record index into the gendered first-name list.
    first: u32,
    /// Unique-record index into the last-name list.
    last: u32,
}

/// One-load-unit memo of gender and name lookups
///
/// Sized to exactly one load unit and keyed by within-unit position;
/// crossing into a different load unit invalidates every entry in bulk.
/// Multiple generators asking for the same customer's name (the customer
/// row, the account name, the permission rows) then share one weighted
/// draw instead of repeating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCache {
    unit: u64,
    entries: Vec<Option<CachedName>>,
}

impl Default for PersonCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonCache {
    pub fn new() -> Self {
        Self {
            unit: u64::MAX,
            entries: vec![None; LOAD_UNIT_SIZE as usize],
        }
    }

    /// Gender plus first/last name for `ordinal`, memoized within the
    /// current load unit. Identical to the uncached functions.
    pub fn name_of(&mut self, bundle: &ReferenceBundle, ordinal: u64) -> (bool, String, String) {
        let unit = higher_id(ordinal);
        if unit != self.unit {
            self.entries.fill(None);
            self.unit = unit;
        }
        let slot = ((ordinal - 1) % LOAD_UNIT_SIZE) as usize;
        let entry = match self.entries[slot] {
            Some(entry) => entry,
            None => {
                let female = is_female(ordinal);
                let list = if female {
                    &bundle.female_first_names
                } else {
                    &bundle.male_first_names
                };
                let mut first_seq = Sequence::fork(FIRST_NAME_BASE_SEED, ordinal);
                let mut last_seq = Sequence::fork(LAST_NAME_BASE_SEED, ordinal);
                let entry = CachedName {
                    is_female: female,
                    first: list.random_index(&mut first_seq) as u32,
                    last: bundle.last_names.random_index(&mut last_seq) as u32,
                };
                self.entries[slot] = Some(entry);
                entry
            }
        };
        let list = if entry.is_female {
            &bundle.female_first_names
        } else {
            &bundle.male_first_names
        };
        (
            entry.is_female,
            list.get(entry.first as usize).clone(),
            bundle.last_names.get(entry.last as usize).clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_are_stable_per_ordinal() {
        let bundle = ReferenceBundle::builtin();
        for ordinal in [1u64, 2, 999, 1000, 1001, 54321] {
            assert_eq!(is_female(ordinal), is_female(ordinal));
            assert_eq!(first_name(&bundle, ordinal), first_name(&bundle, ordinal));
            assert_eq!(last_name(&bundle, ordinal), last_name(&bundle, ordinal));
            assert_eq!(middle_initial(ordinal), middle_initial(ordinal));
            assert_eq!(tax_id(ordinal), tax_id(ordinal));
        }
    }

    #[test]
    fn test_tax_id_matches_pattern() {
        let id = tax_id(42);
        let bytes = id.as_bytes();
        assert_eq!(bytes.len(), TAX_ID_FORMAT.len());
        for (pattern, ch) in TAX_ID_FORMAT.bytes().zip(bytes) {
            match pattern {
                b'n' => assert!(ch.is_ascii_digit()),
                b'a' => assert!(ch.is_ascii_uppercase()),
                literal => assert_eq!(*ch, literal),
            }
        }
    }

    #[test]
    fn test_gender_split_near_configured_percent() {
        let females = (1..=10_000u64).filter(|&o| is_female(o)).count();
        // 49% expected over 10k ordinals.
        assert!((4600..=5200).contains(&females), "female count {females}");
    }

    #[test]
    fn test_cache_matches_uncached_lookups() {
        let bundle = ReferenceBundle::builtin();
        let mut cache = PersonCache::new();
        // Walk across a load-unit boundary, revisiting ordinals, to cover
        // both memoized hits and bulk invalidation.
        for &ordinal in &[1u64, 2, 1, 999, 1000, 1000, 1001, 1002, 1001, 2001, 1] {
            let (female, first, last) = cache.name_of(&bundle, ordinal);
            assert_eq!(female, is_female(ordinal));
            assert_eq!(first, first_name(&bundle, ordinal));
            assert_eq!(last, last_name(&bundle, ordinal));
        }
    }

    #[test]
    fn test_lookup_does_not_disturb_caller_sequence() {
        let bundle = ReferenceBundle::builtin();
        let mut seq = Sequence::new(777);
        let expected = {
            let mut replay = Sequence::new(777);
            replay.int64_range(0, 1_000_000)
        };
        let _ = person(&bundle, 123);
        let _ = person(&bundle, 456);
        assert_eq!(seq.int64_range(0, 1_000_000), expected);
    }
}
