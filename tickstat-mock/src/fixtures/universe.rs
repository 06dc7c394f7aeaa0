use tickstat_core::TickerUniverse;

pub fn listing() -> TickerUniverse {
    [
        ("Apple Inc.", "AAPL"),
        ("Microsoft Corporation", "MSFT"),
        ("Alphabet Inc. Class C", "GOOG"),
        ("Tesla, Inc.", "TSLA"),
    ]
    .into_iter()
    .map(|(n, s)| (n.to_string(), s.to_string()))
    .collect()
}
