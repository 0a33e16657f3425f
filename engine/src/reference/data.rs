//! Embedded reference data
//!
//! A compact stand-in for the benchmark's flat reference files, shaped the
//! same way the loaded files would be. Lists are deliberately short: small
//! files force the name/symbol wraparound suffixes to appear at modest
//! scale, which keeps that logic exercised in every test run.

use super::{
    BucketedList, ExchangeRecord, IndustryRecord, ReferenceBundle, TaxRateRecord, WeightedList,
    ZipRecord,
};

const FEMALE_FIRST_NAMES: &[(&str, u32)] = &[
    ("MARY", 9),
    ("PATRICIA", 7),
    ("LINDA", 7),
    ("BARBARA", 6),
    ("ELIZABETH", 6),
    ("JENNIFER", 5),
    ("MARIA", 5),
    ("SUSAN", 4),
    ("MARGARET", 3),
    ("DOROTHY", 3),
    ("LISA", 2),
    ("NANCY", 2),
    ("KAREN", 2),
    ("BETTY", 1),
    ("HELEN", 1),
];

const MALE_FIRST_NAMES: &[(&str, u32)] = &[
    ("JAMES", 9),
    ("JOHN", 8),
    ("ROBERT", 7),
    ("MICHAEL", 7),
    ("WILLIAM", 6),
    ("DAVID", 5),
    ("RICHARD", 4),
    ("CHARLES", 4),
    ("JOSEPH", 3),
    ("THOMAS", 3),
    ("CHRISTOPHER", 2),
    ("DANIEL", 2),
    ("PAUL", 1),
    ("MARK", 1),
    ("DONALD", 1),
];

const LAST_NAMES: &[(&str, u32)] = &[
    ("SMITH", 9),
    ("JOHNSON", 8),
    ("WILLIAMS", 7),
    ("JONES", 6),
    ("BROWN", 6),
    ("DAVIS", 5),
    ("MILLER", 5),
    ("WILSON", 4),
    ("MOORE", 3),
    ("TAYLOR", 3),
    ("ANDERSON", 2),
    ("THOMAS", 2),
    ("JACKSON", 2),
    ("WHITE", 1),
    ("HARRIS", 1),
    ("MARTIN", 1),
];

const STREETS: &[&str] = &[
    "Main", "Oak", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Pine",
    "River", "Spring", "Ridge", "Church", "Willow", "Sunset",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Pl"];

/// (code, town, division, division_code, country_code)
const ZIPS: &[(&str, &str, &str, u32, u32)] = &[
    ("10001", "New York", "NY", 1, 1),
    ("02101", "Boston", "MA", 2, 1),
    ("60601", "Chicago", "IL", 3, 1),
    ("94101", "San Francisco", "CA", 4, 1),
    ("73301", "Austin", "TX", 5, 1),
    ("33101", "Miami", "FL", 6, 1),
    ("98101", "Seattle", "WA", 7, 1),
    ("80201", "Denver", "CO", 8, 1),
    ("M5H2N2", "Toronto", "ON", 9, 2),
    ("H3B1X8", "Montreal", "QC", 10, 2),
    ("V6C2B5", "Vancouver", "BC", 11, 2),
    ("T2P2M5", "Calgary", "AB", 12, 2),
];

const COMPANY_NAMES: &[&str] = &[
    "Acme Holdings",
    "Pinnacle Industries",
    "Blue Harbor Group",
    "Summit Manufacturing",
    "Ironwood Energy",
    "Cascade Logistics",
    "Meridian Health",
    "Granite Financial",
    "Beacon Technologies",
    "Silverline Retail",
    "Northfield Mining",
    "Crestview Media",
    "Oakline Foods",
    "Vantage Aerospace",
    "Harborview Shipping",
    "Redstone Chemicals",
    "Lakeshore Utilities",
    "Copperfield Textiles",
    "Stonebridge Telecom",
    "Clearwater Pharma",
];

const SYMBOLS: &[&str] = &[
    "ACME", "PNCL", "BLHB", "SMMF", "IRWD", "CSLG", "MRDH", "GRFN", "BCNT", "SLRT", "NFMN",
    "CRVM", "OKLF", "VNTA", "HRVS", "RDSC", "LKSU", "CPTX", "STBT", "CLWP",
];

const SP_RATINGS: &[(&str, u32)] = &[
    ("AAA", 2),
    ("AA", 4),
    ("A", 8),
    ("BBB", 10),
    ("BB", 7),
    ("B", 4),
    ("CCC", 2),
    ("CC", 1),
    ("C", 1),
    ("D", 1),
];

const SECURITY_ISSUES: &[(&str, u32)] = &[
    ("COMMON", 90),
    ("PREF_A", 4),
    ("PREF_B", 3),
    ("PREF_C", 2),
    ("PREF_D", 1),
];

/// (id, name, sector)
const INDUSTRIES: &[(&str, &str, &str)] = &[
    ("AE", "Aerospace", "Industrials"),
    ("BK", "Banking", "Financials"),
    ("CH", "Chemicals", "Materials"),
    ("EN", "Energy", "Energy"),
    ("FD", "Food Products", "Consumer Staples"),
    ("HC", "Health Care", "Health Care"),
    ("MD", "Media", "Communication Services"),
    ("MN", "Mining", "Materials"),
    ("RT", "Retail", "Consumer Discretionary"),
    ("SW", "Software", "Information Technology"),
    ("TL", "Telecom", "Communication Services"),
    ("UT", "Utilities", "Utilities"),
];

const EXCHANGES: &[(&str, &str)] = &[
    ("NYSE", "New York Stock Exchange"),
    ("NASDAQ", "Nasdaq Stock Market"),
    ("AMEX", "American Stock Exchange"),
    ("PCX", "Pacific Exchange"),
];

const STATUS_TYPES: &[&str] = &["ACTV", "CMPT", "CNCL", "PNDG", "SBMT"];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "mail.test", "post.test", "inbox.test", "mailbox.test", "letters.test",
];

const AREA_CODES: &[&str] = &[
    "212", "617", "312", "415", "512", "305", "206", "303", "416", "514", "604", "403",
];

const NEWS_WORDS: &[(&str, u32)] = &[
    ("market", 8),
    ("earnings", 7),
    ("quarterly", 6),
    ("growth", 6),
    ("revenue", 6),
    ("announced", 5),
    ("outlook", 5),
    ("shares", 5),
    ("expansion", 4),
    ("dividend", 4),
    ("forecast", 4),
    ("acquisition", 3),
    ("regulatory", 3),
    ("production", 3),
    ("demand", 3),
    ("guidance", 2),
    ("restructuring", 2),
    ("litigation", 1),
    ("merger", 1),
    ("downgrade", 1),
];

/// (code, name, rate) per country bucket, keyed by country_code.
const COUNTRY_TAX_RATES: &[&[(&str, &str, f64)]] = &[
    &[
        ("US1", "US Federal Bracket One", 0.15),
        ("US2", "US Federal Bracket Two", 0.25),
        ("US3", "US Federal Bracket Three", 0.28),
        ("US4", "US Federal Bracket Four", 0.33),
        ("US5", "US Federal Bracket Five", 0.35),
    ],
    &[
        ("CA1", "Canada Federal Bracket One", 0.15),
        ("CA2", "Canada Federal Bracket Two", 0.22),
        ("CA3", "Canada Federal Bracket Three", 0.26),
        ("CA4", "Canada Federal Bracket Four", 0.29),
    ],
];

/// (code, name, rate) per division bucket, keyed by division_code.
const DIVISION_TAX_RATES: &[&[(&str, &str, f64)]] = &[
    &[("NY1", "New York State", 0.0685)],
    &[("MA1", "Massachusetts", 0.053)],
    &[("IL1", "Illinois", 0.0495)],
    &[("CA1D", "California Low", 0.04), ("CA2D", "California High", 0.093)],
    &[("TX1", "Texas", 0.0)],
    &[("FL1", "Florida", 0.0)],
    &[("WA1", "Washington", 0.0)],
    &[("CO1", "Colorado", 0.0463)],
    &[("ON1", "Ontario", 0.0915)],
    &[("QC1", "Quebec", 0.1475)],
    &[("BC1", "British Columbia", 0.0770)],
    &[("AB1", "Alberta", 0.10)],
];

fn weighted_strings(items: &[(&str, u32)]) -> WeightedList<String> {
    WeightedList::new(
        items
            .iter()
            .map(|&(name, weight)| (name.to_string(), weight))
            .collect(),
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tax_buckets(groups: &[&[(&str, &str, f64)]]) -> BucketedList<TaxRateRecord> {
    BucketedList::new(
        groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|&(code, name, rate)| TaxRateRecord {
                        code: code.to_string(),
                        name: name.to_string(),
                        rate,
                    })
                    .collect()
            })
            .collect(),
    )
}

pub(super) fn builtin() -> ReferenceBundle {
    ReferenceBundle {
        female_first_names: weighted_strings(FEMALE_FIRST_NAMES),
        male_first_names: weighted_strings(MALE_FIRST_NAMES),
        last_names: weighted_strings(LAST_NAMES),
        streets: strings(STREETS),
        street_suffixes: strings(STREET_SUFFIXES),
        zips: ZIPS
            .iter()
            .map(|&(code, town, division, division_code, country_code)| ZipRecord {
                code: code.to_string(),
                town: town.to_string(),
                division: division.to_string(),
                division_code,
                country_code,
            })
            .collect(),
        company_names: strings(COMPANY_NAMES),
        symbols: strings(SYMBOLS),
        sp_ratings: weighted_strings(SP_RATINGS),
        security_issues: weighted_strings(SECURITY_ISSUES),
        industries: INDUSTRIES
            .iter()
            .map(|&(id, name, sector)| IndustryRecord {
                id: id.to_string(),
                name: name.to_string(),
                sector: sector.to_string(),
            })
            .collect(),
        exchanges: EXCHANGES
            .iter()
            .map(|&(id, name)| ExchangeRecord {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
        status_types: strings(STATUS_TYPES),
        email_domains: strings(EMAIL_DOMAINS),
        area_codes: strings(AREA_CODES),
        news_words: weighted_strings(NEWS_WORDS),
        tax_rates_country: tax_buckets(COUNTRY_TAX_RATES),
        tax_rates_division: tax_buckets(DIVISION_TAX_RATES),
    }
}
