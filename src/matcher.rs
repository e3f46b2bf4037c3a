// Query side: find the vendor that covers a requested set of items at the
// lowest total cost.
use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::record::normalize_item;

// The winning vendor for a query. Absence of a match is `None` at the call
// site, never a sentinel pair, so a legitimate zero-cost match stays
// distinguishable from "no vendor qualifies".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VendorMatch {
    pub vendor_id: u32,
    pub total_price: Decimal,
}

// Splits a comma-separated query into the deduplicated requested-item set,
// normalized exactly like ingestion. Duplicates collapse to one
// requirement and are priced once.
fn requested_items(input: &str) -> HashSet<String> {
    input.split(',').filter_map(normalize_item).collect()
}

impl Catalog {
    // Picks the cheapest vendor stocking every requested item.
    //
    // Vendors are scanned in first-seen ingestion order and the running
    // best is replaced only on a strictly lower total, so ties resolve to
    // the vendor encountered first. An empty requested set is vacuously
    // covered by every vendor and returns the first one at total zero.
    // Read-only; safe to call any number of times.
    pub fn pick_best_vendor(&self, requested: &str) -> Option<VendorMatch> {
        let wanted = requested_items(requested);

        let mut best: Option<VendorMatch> = None;
        for vendor in self.vendors() {
            if !wanted.iter().all(|item| vendor.menu.contains_key(item)) {
                continue;
            }

            let total: Decimal = wanted.iter().map(|item| vendor.menu[item]).sum();
            if best.as_ref().map_or(true, |b| total < b.total_price) {
                best = Some(VendorMatch {
                    vendor_id: vendor.id,
                    total_price: total,
                });
            }
        }
        best
    }
}
