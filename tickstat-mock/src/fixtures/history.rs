use chrono::{DateTime, TimeZone, Utc};
use tickstat_core::{PricePoint, PriceSeries};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, hour, min, 0).unwrap()
}

fn build(rows: &[(f64, u32, u32)]) -> PriceSeries {
    PriceSeries::from_points(
        rows.iter()
            .map(|&(price, hour, min)| PricePoint::new(price, at(hour, min)))
            .collect(),
    )
}

/// Deterministic series per known symbol.
///
/// AAPL and MSFT share all five timestamps (correlation paths fully
/// exercisable); GOOG is sampled on disjoint minutes; TSLA overlaps AAPL on
/// a single timestamp.
pub fn by_symbol(s: &str) -> Option<PriceSeries> {
    match s {
        "AAPL" => Some(build(&[
            (187.5, 13, 30),
            (188.1, 13, 31),
            (187.8, 13, 32),
            (188.4, 13, 33),
            (188.0, 13, 34),
        ])),
        "MSFT" => Some(build(&[
            (415.2, 13, 30),
            (414.8, 13, 31),
            (415.9, 13, 32),
            (414.5, 13, 33),
            (415.3, 13, 34),
        ])),
        "GOOG" => Some(build(&[
            (176.2, 13, 40),
            (176.8, 13, 41),
            (176.5, 13, 42),
            (177.1, 13, 43),
            (176.9, 13, 44),
        ])),
        "TSLA" => Some(build(&[
            (182.0, 13, 30),
            (183.5, 13, 50),
            (183.1, 13, 51),
        ])),
        _ => None,
    }
}
