// Unit tests for the display record projection

use stock_insights::alphavantage::RawOverviewRecord;
use stock_insights::report::display::*;

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_KEYS: [&str; 10] = [
        "Name",
        "Sector",
        "Industry",
        "Country",
        "Description",
        "MarketCapitalization",
        "DividendYield",
        "52WeekHigh",
        "52WeekLow",
        "Currency",
    ];

    fn complete() -> RawOverviewRecord {
        let mut raw: RawOverviewRecord = [
            ("Symbol", "AAPL"),
            ("Name", "Apple Inc"),
            ("Sector", "TECHNOLOGY"),
            ("Industry", "ELECTRONIC COMPUTERS"),
            ("Country", "USA"),
            ("Description", "Apple Inc. designs consumer electronics."),
            ("MarketCapitalization", "3000000000"),
            ("DividendYield", "0.005"),
            ("52WeekHigh", "199.62"),
            ("52WeekLow", "164.08"),
            ("Currency", "USD"),
        ]
        .into_iter()
        .collect();
        raw.insert("Exchange", "NASDAQ");
        raw
    }

    #[test]
    fn test_twelve_entries_for_every_missing_key() {
        // Drop each source key in turn, and then all of them
        for missing in SOURCE_KEYS.iter().chain(["Exchange"].iter()) {
            let source = complete();
            let raw: RawOverviewRecord = source.iter().filter(|(k, _)| k != missing).collect();

            let display = build_display_record(&raw);
            let entries = display.entries();
            assert_eq!(entries.len(), 12);
            assert!(entries.iter().all(|(_, v)| !v.is_empty()), "missing {}", missing);
        }

        let display = build_display_record(&RawOverviewRecord::new());
        assert!(display.entries().iter().all(|(_, v)| *v == "N/A"));
    }

    #[test]
    fn test_missing_name_fills_both_name_fields() {
        let source = complete();
        let raw: RawOverviewRecord = source.iter().filter(|(k, _)| *k != "Name").collect();

        let display = build_display_record(&raw);
        assert_eq!(display.company_name, "N/A");
        assert_eq!(display.full_name, "N/A");
        assert_eq!(display.sector, "TECHNOLOGY");
    }

    #[test]
    fn test_one_bad_field_does_not_affect_others() {
        let mut raw = complete();
        raw.insert("MarketCapitalization", "not a number");

        let display = build_display_record(&raw);
        assert_eq!(display.market_capitalization, "N/A");
        assert_eq!(display.dividend_yield, "0.50%");
        assert_eq!(display.week_52_high, "$199.62");
        assert_eq!(display.week_52_low, "$164.08");
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let mut raw = complete();
        raw.insert("PERatio", "29.5");
        raw.insert("Symbol", "AAPL");

        let display = build_display_record(&raw);
        assert_eq!(display.entries().len(), 12);
        assert_eq!(display.exchange, "NASDAQ");
        assert_eq!(display.financial_currency, "USD");
    }

    #[test]
    fn test_labels_match_serialized_keys() {
        let display = build_display_record(&complete());
        let json = serde_json::to_value(&display).unwrap();
        for label in LABELS {
            assert!(json.get(label).is_some(), "missing {}", label);
        }
    }
}
