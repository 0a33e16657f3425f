//! News item generator
//!
//! Two items per company, emitted as item-major units so the item row and
//! its company cross-reference always travel together. The body is built
//! from the weighted vocabulary; the headline and summary are its leading
//! words, so they never need draws of their own. Draw order per item:
//! word count, one pick per word, attribution gate, author gender gate
//! and author first/last names when attributed, publication day,
//! publication millisecond.

use serde::{Deserialize, Serialize};

use crate::core::{Date, Timestamp, MSECS_PER_DAY};
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::{NewsItemRow, NewsUnit, NewsXRefRow};
use crate::reference::ReferenceBundle;
use crate::scaling::ids::{company_id, news_item_id};
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, COMPANIES_PER_UNIT,
    LOAD_UNIT_SIZE, NEWS_ITEMS_PER_COMPANY,
};

/// Base seed of the news table sequence.
pub const NEWS_BASE_SEED: u64 = 75_160_070;

/// Per-item draw budget; items consume at most 27.
pub const NEWS_ITEM_RNG_SKIP: u64 = 64;

const MIN_ITEM_WORDS: i32 = 8;
const MAX_ITEM_WORDS: i32 = 20;
const HEADLINE_WORDS: usize = 4;
const SUMMARY_WORDS: usize = 8;
const ATTRIBUTED_PERCENT: i32 = 20;
const FEMALE_PERCENT: i32 = 49;
const NEWS_SOURCE: &str = "MarketWire";

pub struct NewsGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    item_start0: u64,
    item_count: u64,
    publish_base: Date,
    publish_span_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> NewsGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(NEWS_BASE_SEED, LOAD_UNIT_SIZE, NEWS_ITEM_RNG_SKIP),
            item_start0: start_offset(params.start_customer, COMPANIES_PER_UNIT)
                * NEWS_ITEMS_PER_COMPANY,
            item_count: scaled_count(params.customer_count, COMPANIES_PER_UNIT)
                * NEWS_ITEMS_PER_COMPANY,
            publish_base: Date::from_ymd(2000, 1, 3),
            publish_span_days: 5 * 365,
        })
    }
}

impl TableGenerator for NewsGenerator<'_> {
    type State = NewsState;
    type Row = NewsUnit;

    fn start(&self) -> NewsState {
        NewsState {
            cursor: self.schedule.start_cursor(self.item_start0),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &NewsState) -> bool {
        state.emitted < self.item_count
    }

    fn step(&self, state: NewsState) -> (NewsState, NewsUnit) {
        assert!(self.has_more(&state), "news generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let item_ordinal0 = cursor.ordinal;
        let company_ordinal = item_ordinal0 / NEWS_ITEMS_PER_COMPANY + 1;
        let seq = &mut cursor.seq;

        let word_count = seq.int_range(MIN_ITEM_WORDS, MAX_ITEM_WORDS) as usize;
        let words: Vec<&str> = (0..word_count)
            .map(|_| self.bundle.news_words.random(seq).as_str())
            .collect();
        let author = if seq.percent(ATTRIBUTED_PERCENT) {
            let first_list = if seq.percent(FEMALE_PERCENT) {
                &self.bundle.female_first_names
            } else {
                &self.bundle.male_first_names
            };
            let first = first_list.random(seq);
            let last = self.bundle.last_names.random(seq);
            Some(format!("{first} {last}"))
        } else {
            None
        };
        let day_offset = seq.int64_range(0, self.publish_span_days - 1);
        let msec_of_day = seq.int64_range(0, MSECS_PER_DAY as i64 - 1) as u32;

        let item = NewsItemRow {
            ni_id: news_item_id(item_ordinal0 + 1),
            headline: words[..HEADLINE_WORDS.min(words.len())].join(" "),
            summary: words[..SUMMARY_WORDS.min(words.len())].join(" "),
            item: words.join(" "),
            dts: Timestamp::new(self.publish_base.add_days(day_offset), msec_of_day),
            source: NEWS_SOURCE.to_string(),
            author,
        };
        let xref = NewsXRefRow {
            ni_id: item.ni_id,
            co_id: company_id(company_ordinal),
        };

        cursor.ordinal += 1;
        (
            NewsState {
                cursor,
                emitted: state.emitted + 1,
            },
            NewsUnit { item, xref },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::TableGenerator;

    fn units(customers: u64) -> Vec<NewsUnit> {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(customers, 10);
        NewsGenerator::new(&params, &bundle).unwrap().rows().collect()
    }

    #[test]
    fn test_two_items_per_company() {
        let all = units(1000);
        assert_eq!(all.len(), 1000); // 500 companies * 2
        assert_eq!(all[0].xref.co_id, company_id(1));
        assert_eq!(all[1].xref.co_id, company_id(1));
        assert_eq!(all[2].xref.co_id, company_id(2));
        assert_eq!(all[999].xref.co_id, company_id(500));
    }

    #[test]
    fn test_item_ids_match_their_xref() {
        for (index, unit) in units(1000).iter().enumerate() {
            assert_eq!(unit.item.ni_id, news_item_id(index as u64 + 1));
            assert_eq!(unit.xref.ni_id, unit.item.ni_id);
        }
    }

    #[test]
    fn test_headline_and_summary_prefix_the_body() {
        for unit in units(1000) {
            assert!(unit.item.item.starts_with(&unit.item.headline));
            assert!(unit.item.item.starts_with(&unit.item.summary));
            let words = unit.item.item.split(' ').count();
            assert!((MIN_ITEM_WORDS as usize..=MAX_ITEM_WORDS as usize).contains(&words));
        }
    }

    #[test]
    fn test_attribution_rate_near_configured_percent() {
        let attributed = units(5000)
            .iter()
            .filter(|u| u.item.author.is_some())
            .count();
        // 20% of 5000 items expected.
        assert!(
            (800..=1200).contains(&attributed),
            "attributed count {attributed}"
        );
    }
}
