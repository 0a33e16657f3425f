//! End-to-end generation of a one-unit data set: row counts, referential
//! integrity across tables, and digest stability across repeat runs.

use std::collections::HashSet;

use market_datagen_core_rs::generators::{
    AddressGenerator, BrokerGenerator, CompanyCompetitorGenerator, CompanyGenerator,
    CustomerAccountsGenerator, CustomerGenerator, DailyMarketGenerator, FinancialGenerator,
    NewsGenerator, SecurityGenerator, TableGenerator, TaxRateGenerator, WatchListGenerator,
};
use market_datagen_core_rs::{GenerationParams, ReferenceBundle, RowDigest};

const TRADE_DAYS: u64 = 5;

fn params() -> GenerationParams {
    GenerationParams::whole_run(1000, TRADE_DAYS)
}

#[test]
fn test_one_unit_row_counts() {
    let bundle = ReferenceBundle::builtin();
    let p = params();
    assert_eq!(CustomerGenerator::new(&p, &bundle).unwrap().rows().count(), 1000);
    assert_eq!(AddressGenerator::new(&p, &bundle).unwrap().rows().count(), 1500);
    assert_eq!(CompanyGenerator::new(&p, &bundle).unwrap().rows().count(), 500);
    assert_eq!(
        CompanyCompetitorGenerator::new(&p, &bundle).unwrap().rows().count(),
        1500
    );
    assert_eq!(SecurityGenerator::new(&p, &bundle).unwrap().rows().count(), 685);
    assert_eq!(BrokerGenerator::new(&p, &bundle).unwrap().rows().count(), 10);
    assert_eq!(NewsGenerator::new(&p, &bundle).unwrap().rows().count(), 1000);
    assert_eq!(
        FinancialGenerator::new(&p, &bundle).unwrap().rows().count(),
        500 * 20
    );
    assert_eq!(
        DailyMarketGenerator::new(&p, &bundle).unwrap().rows().count(),
        685 * TRADE_DAYS as usize
    );
    assert_eq!(WatchListGenerator::new(&p, &bundle).unwrap().rows().count(), 1000);
    assert_eq!(
        TaxRateGenerator::new(&bundle).rows().count(),
        bundle.tax_rates_country.total_len() + bundle.tax_rates_division.total_len()
    );
}

#[test]
fn test_cross_table_referential_integrity() {
    let bundle = ReferenceBundle::builtin();
    let p = params();

    let address_ids: HashSet<u64> = AddressGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .map(|r| r.ad_id)
        .collect();
    let customer_ids: HashSet<u64> = CustomerGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .inspect(|r| assert!(address_ids.contains(&r.ad_id), "customer address missing"))
        .map(|r| r.c_id)
        .collect();
    let company_ids: HashSet<u64> = CompanyGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .inspect(|r| assert!(address_ids.contains(&r.ad_id), "company address missing"))
        .map(|r| r.co_id)
        .collect();
    let broker_ids: HashSet<u64> = BrokerGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .map(|r| r.b_id)
        .collect();
    let symbols: HashSet<String> = SecurityGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .inspect(|r| assert!(company_ids.contains(&r.co_id), "security issuer missing"))
        .map(|r| r.symbol)
        .collect();

    for unit in CustomerAccountsGenerator::new(&p, &bundle).unwrap().rows() {
        for account in &unit.accounts {
            assert!(customer_ids.contains(&account.c_id), "account owner missing");
            assert!(broker_ids.contains(&account.b_id), "account broker missing");
        }
        let account_ids: HashSet<u64> = unit.accounts.iter().map(|a| a.ca_id).collect();
        for permission in &unit.permissions {
            assert!(account_ids.contains(&permission.ca_id), "permission account missing");
        }
    }

    for row in CompanyCompetitorGenerator::new(&p, &bundle).unwrap().rows() {
        assert!(company_ids.contains(&row.co_id));
        assert!(company_ids.contains(&row.competitor_co_id));
    }

    for unit in NewsGenerator::new(&p, &bundle).unwrap().rows() {
        assert!(company_ids.contains(&unit.xref.co_id), "news company missing");
    }

    for row in FinancialGenerator::new(&p, &bundle).unwrap().rows() {
        assert!(company_ids.contains(&row.co_id), "financial company missing");
    }

    for row in DailyMarketGenerator::new(&p, &bundle).unwrap().rows() {
        assert!(symbols.contains(&row.symbol), "market symbol missing");
    }

    for unit in WatchListGenerator::new(&p, &bundle).unwrap().rows() {
        assert!(customer_ids.contains(&unit.list.c_id), "list owner missing");
        for item in &unit.items {
            assert!(symbols.contains(&item.symbol), "watched symbol missing");
        }
    }
}

#[test]
fn test_repeat_runs_produce_identical_digests() {
    let bundle = ReferenceBundle::builtin();
    let p = params();
    let digest_of_run = || {
        let mut digest = RowDigest::new();
        for row in CustomerGenerator::new(&p, &bundle).unwrap().rows() {
            digest.update(&row).unwrap();
        }
        for row in SecurityGenerator::new(&p, &bundle).unwrap().rows() {
            digest.update(&row).unwrap();
        }
        for unit in CustomerAccountsGenerator::new(&p, &bundle).unwrap().rows() {
            digest.update(&unit).unwrap();
        }
        for row in DailyMarketGenerator::new(&p, &bundle).unwrap().rows() {
            digest.update(&row).unwrap();
        }
        digest.finalize()
    };
    assert_eq!(digest_of_run(), digest_of_run());
}

#[test]
fn test_scale_follows_customer_count() {
    let bundle = ReferenceBundle::builtin();
    let p = GenerationParams::whole_run(3000, TRADE_DAYS);
    assert_eq!(CompanyGenerator::new(&p, &bundle).unwrap().rows().count(), 1500);
    assert_eq!(SecurityGenerator::new(&p, &bundle).unwrap().rows().count(), 2055);
    assert_eq!(BrokerGenerator::new(&p, &bundle).unwrap().rows().count(), 30);
    assert_eq!(NewsGenerator::new(&p, &bundle).unwrap().rows().count(), 3000);
}

#[test]
fn test_first_rows_match_recorded_values() {
    // Recorded field values of the first row of each table under the
    // default seeds and the embedded reference data. Run-vs-run tests
    // cannot see a drift that hits every run identically; these literals
    // fail on any change to the sequence constants, the draw order, or
    // the reseed math.
    use market_datagen_core_rs::scaling::ids::{address_id, broker_id, company_id, customer_id};
    use market_datagen_core_rs::{Date, Money};

    let bundle = ReferenceBundle::builtin();
    let p = params();

    let customer = CustomerGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .next()
        .unwrap();
    assert_eq!(customer.c_id, customer_id(1));
    assert_eq!(customer.st_id, "ACTV");
    assert_eq!(customer.tier, 1);
    assert_eq!(customer.first_name, "ROBERT");
    assert_eq!(customer.last_name, "BROWN");
    assert_eq!(customer.gender, 'M');
    assert_eq!(customer.middle_initial, None);
    assert_eq!(customer.tax_id, "553-WS-396948");
    assert_eq!(customer.dob, Date::from_ymd(1962, 7, 27));
    assert_eq!(customer.phone_1, "312-137-2958");
    assert_eq!(customer.phone_2, "415-510-5239");
    assert_eq!(customer.email_1, "Rbrown@example.com");
    assert_eq!(customer.email_2, "Rbrown@mail.test");

    let address = AddressGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .next()
        .unwrap();
    assert_eq!(address.ad_id, address_id(1));
    assert_eq!(address.line1, "3966 Maple Ln");
    assert_eq!(address.line2, None);
    assert_eq!(address.zip, "V6C2B5");
    assert_eq!(address.town, "Vancouver");
    assert_eq!(address.division, "BC");
    assert_eq!(address.country_code, 2);

    let broker = BrokerGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .next()
        .unwrap();
    assert_eq!(broker.b_id, broker_id(1));
    assert_eq!(broker.name, "DANIEL DAVIS");
    assert_eq!(broker.num_trades, 223_166);
    assert_eq!(broker.commission, Money::from_cents(2_173_838));

    let company = CompanyGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .next()
        .unwrap();
    assert_eq!(company.co_id, company_id(1));
    assert_eq!(company.name, "Acme Holdings");
    assert_eq!(company.in_id, "BK");
    assert_eq!(company.sp_rate, "AA");
    assert_eq!(company.ceo, "LISA SMITH");
    assert_eq!(company.desc, "Banking company in the Financials sector");
    assert_eq!(company.open_date, Date::from_ymd(1889, 6, 25));

    let security = SecurityGenerator::new(&p, &bundle)
        .unwrap()
        .rows()
        .next()
        .unwrap();
    assert_eq!(security.symbol, "ACME");
    assert_eq!(security.co_id, company_id(1));
    assert_eq!(security.name, "Acme Holdings");
    assert_eq!(security.issue, "COMMON");
    assert_eq!(security.ex_id, "NYSE");
    assert_eq!(security.num_outstanding, 609_031_102);
    assert_eq!(security.start_date, Date::from_ymd(1971, 3, 19));
    assert_eq!(security.exch_date, Date::from_ymd(1972, 11, 29));
    assert_eq!((security.pe * 100.0).round() as i64, 936);
    assert_eq!(security.dividend, Money::from_cents(98));
    assert_eq!(security.week52_high, Money::from_cents(2_321));
    assert_eq!(security.week52_low, Money::from_cents(2_013));
    assert_eq!(security.week52_high_date, Date::from_ymd(2004, 8, 28));
    assert_eq!(security.week52_low_date, Date::from_ymd(2004, 2, 7));
    assert_eq!((security.yield_pct * 100.0).round() as i64, 382);
}
