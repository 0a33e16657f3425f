//! Partition independence: a whole run and the concatenation of its
//! unit-aligned partitions must produce byte-identical rows for every
//! table, with no communication between the partitions.

use market_datagen_core_rs::generators::{
    AddressGenerator, BrokerGenerator, CompanyCompetitorGenerator, CompanyGenerator,
    CustomerAccountsGenerator, CustomerGenerator, DailyMarketGenerator, FinancialGenerator,
    NewsGenerator, SecurityGenerator, TableGenerator, WatchListGenerator,
};
use market_datagen_core_rs::{GenerationParams, ReferenceBundle, RowDigest};

const TOTAL: u64 = 2000;
const TRADE_DAYS: u64 = 3;

fn whole() -> GenerationParams {
    let mut p = GenerationParams::whole_run(TOTAL, TRADE_DAYS);
    p.scale_factor = 500;
    p
}

fn partition(start: u64, count: u64) -> GenerationParams {
    GenerationParams {
        customer_count: count,
        start_customer: start,
        total_customers: TOTAL,
        scale_factor: 500,
        initial_trade_days: TRADE_DAYS,
    }
}

/// Rows of the whole run vs the two half partitions, for any generator
/// constructor.
fn assert_partitions_agree<'b, G, F>(bundle: &'b ReferenceBundle, build: F)
where
    G: TableGenerator,
    G::Row: PartialEq + std::fmt::Debug,
    F: Fn(&GenerationParams, &'b ReferenceBundle) -> G,
{
    let full: Vec<G::Row> = build(&whole(), bundle).rows().collect();
    let mut split: Vec<G::Row> = build(&partition(1, 1000), bundle).rows().collect();
    split.extend(build(&partition(1001, 1000), bundle).rows());
    assert_eq!(full.len(), split.len(), "row counts diverged");
    for (index, (a, b)) in full.iter().zip(&split).enumerate() {
        assert_eq!(a, b, "row {index} diverged");
    }
}

#[test]
fn test_customer_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| CustomerGenerator::new(p, b).unwrap());
}

#[test]
fn test_address_partitions_agree() {
    // Addresses emit two regions (companies then customers); partitions
    // split each region, so the concatenation must be region-reordered.
    let bundle = ReferenceBundle::builtin();
    let full: Vec<_> = AddressGenerator::new(&whole(), &bundle)
        .unwrap()
        .rows()
        .collect();
    let first: Vec<_> = AddressGenerator::new(&partition(1, 1000), &bundle)
        .unwrap()
        .rows()
        .collect();
    let second: Vec<_> = AddressGenerator::new(&partition(1001, 1000), &bundle)
        .unwrap()
        .rows()
        .collect();
    // Companies: 500 per partition, 1000 total; customers follow.
    let mut split = Vec::new();
    split.extend_from_slice(&first[..500]);
    split.extend_from_slice(&second[..500]);
    split.extend_from_slice(&first[500..]);
    split.extend_from_slice(&second[500..]);
    assert_eq!(full, split);
}

#[test]
fn test_account_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| CustomerAccountsGenerator::new(p, b).unwrap());
}

#[test]
fn test_broker_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| BrokerGenerator::new(p, b).unwrap());
}

#[test]
fn test_company_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| CompanyGenerator::new(p, b).unwrap());
}

#[test]
fn test_competitor_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| CompanyCompetitorGenerator::new(p, b).unwrap());
}

#[test]
fn test_security_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| SecurityGenerator::new(p, b).unwrap());
}

#[test]
fn test_daily_market_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| DailyMarketGenerator::new(p, b).unwrap());
}

#[test]
fn test_financial_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| FinancialGenerator::new(p, b).unwrap());
}

#[test]
fn test_news_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| NewsGenerator::new(p, b).unwrap());
}

#[test]
fn test_watch_list_partitions_agree() {
    assert_partitions_agree(&ReferenceBundle::builtin(), |p, b| WatchListGenerator::new(p, b).unwrap());
}

#[test]
fn test_split_run_agrees_by_digest() {
    let bundle = ReferenceBundle::builtin();
    let mut full = RowDigest::new();
    for row in CustomerGenerator::new(&whole(), &bundle).unwrap().rows() {
        full.update(&row).unwrap();
    }

    let mut split = RowDigest::new();
    for start in [1u64, 1001] {
        let quarter = partition(start, 1000);
        for row in CustomerGenerator::new(&quarter, &bundle).unwrap().rows() {
            split.update(&row).unwrap();
        }
    }
    assert_eq!(full.row_count(), split.row_count());
    assert_eq!(full.finalize(), split.finalize());
}

#[test]
fn test_partition_output_is_stable_across_repeat_runs() {
    let bundle = ReferenceBundle::builtin();
    let params = partition(1001, 1000);
    let once: Vec<_> = SecurityGenerator::new(&params, &bundle)
        .unwrap()
        .rows()
        .collect();
    let twice: Vec<_> = SecurityGenerator::new(&params, &bundle)
        .unwrap()
        .rows()
        .collect();
    assert_eq!(once, twice);
}
