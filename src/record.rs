// Record parsing for the delimited catalog format:
//   vendor_id,price,item_name[,item_name...]
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// One structurally valid catalog line. The price applies to every item on
// the line ("value meal" bundles list several items sharing one price).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuRecord {
    pub vendor_id: u32,
    pub price: Decimal,
    pub items: Vec<String>,
}

// Canonical form for an item name: surrounding whitespace stripped,
// case-folded to lowercase. Names that are empty after trimming are not
// items at all, so they come back as `None`. Ingestion and query both go
// through here, which is what makes "Tofu_Log" in the file and
// " tofu_log " in a query the same item.
pub fn normalize_item(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

// Parses one raw line into a MenuRecord.
//
// A line with fewer than three fields is structurally invalid and yields
// `Ok(None)`: the caller skips it and moves on. A line with enough fields
// but a malformed vendor id or price yields `Err` and aborts the ingestion
// run. Empty item tokens are dropped; a line whose item fields all
// normalize to empty still parses (with an empty item list), matching the
// skip rule which counts raw fields, not surviving items.
pub fn parse_record(line: &str) -> Result<Option<MenuRecord>, CatalogError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Ok(None);
    }

    let id_field = fields[0].trim();
    let vendor_id: u32 = id_field
        .parse()
        .map_err(|_| CatalogError::InvalidVendorId(id_field.to_string()))?;

    let price_field = fields[1].trim();
    let price: Decimal = price_field
        .parse()
        .map_err(|_| CatalogError::InvalidPrice(price_field.to_string()))?;

    let items = fields[2..].iter().filter_map(|f| normalize_item(f)).collect();

    Ok(Some(MenuRecord {
        vendor_id,
        price,
        items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test]
    fn test_parse_single_item_line() {
        let record = parse_record("2,6.50,tofu_log").unwrap().unwrap();
        assert_eq!(record.vendor_id, 2);
        assert_eq!(record.price, dec!(6.50));
        assert_eq!(record.items, vec!["tofu_log".to_string()]);
    }

    #[test]
    fn test_parse_bundle_line() {
        let record = parse_record("6,9.00,extreme_fajita,fancy_european_water")
            .unwrap()
            .unwrap();
        assert_eq!(record.vendor_id, 6);
        assert_eq!(record.price, dec!(9.00));
        assert_eq!(
            record.items,
            vec![
                "extreme_fajita".to_string(),
                "fancy_european_water".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        let record = parse_record(" 2 , 6.50 , Tofu_Log ").unwrap().unwrap();
        assert_eq!(record.vendor_id, 2);
        assert_eq!(record.price, dec!(6.50));
        assert_eq!(record.items, vec!["tofu_log".to_string()]);
    }

    // Fewer than three fields means the line is skipped, never an error
    #[test_case("" ; "empty line")]
    #[test_case("99" ; "id only")]
    #[test_case("99,4.25" ; "id and price only")]
    #[test_case("not,numeric" ; "two junk fields")]
    fn test_short_lines_are_skipped(line: &str) {
        assert!(parse_record(line).unwrap().is_none());
    }

    #[test]
    fn test_non_integer_vendor_id_is_fatal() {
        let err = parse_record("abc,6.50,tofu_log").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidVendorId(ref f) if f == "abc"));
    }

    #[test]
    fn test_non_decimal_price_is_fatal() {
        let err = parse_record("2,cheap,tofu_log").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(ref f) if f == "cheap"));
    }

    #[test]
    fn test_empty_item_tokens_are_dropped() {
        let record = parse_record("2,6.50, ,tofu_log,,  ").unwrap().unwrap();
        assert_eq!(record.items, vec!["tofu_log".to_string()]);
    }

    #[test]
    fn test_all_items_empty_still_parses() {
        // Three raw fields, so structurally valid even though no item survives
        let record = parse_record("33,1.00,  ").unwrap().unwrap();
        assert_eq!(record.vendor_id, 33);
        assert!(record.items.is_empty());
    }

    #[test_case("tofu_log", Some("tofu_log") ; "already canonical")]
    #[test_case("  Tofu_Log  ", Some("tofu_log") ; "mixed case with whitespace")]
    #[test_case("CHEF_SALAD", Some("chef_salad") ; "upper case")]
    #[test_case("   ", None ; "whitespace only")]
    #[test_case("", None ; "empty")]
    fn test_normalize_item(raw: &str, expected: Option<&str>) {
        assert_eq!(normalize_item(raw).as_deref(), expected);
    }
}
