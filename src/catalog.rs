// Catalog construction: one ingestion pass over raw delimited lines builds
// the vendor -> menu structure that queries run against.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::record::parse_record;

// A vendor and its menu. Menu keys are normalized item names; the stored
// price is the cheapest one observed across every ingested line naming
// that vendor+item pair.
#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub id: u32,
    pub menu: HashMap<String, Decimal>,
}

// The frozen result of ingestion. Vendors iterate in the order their ids
// were first encountered, which is what makes query tie-breaks
// deterministic (first-seen vendor wins on equal totals).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    vendors: Vec<Vendor>,
}

impl Catalog {
    pub fn vendors(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.iter()
    }

    pub fn get(&self, vendor_id: u32) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == vendor_id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

// Accumulates vendors across ingestion, then freezes into a Catalog.
// The side index gives O(1) vendor lookup per line while the Vec keeps
// first-seen order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    vendors: Vec<Vendor>,
    index: HashMap<u32, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // Ingests one raw line. Structurally short lines are skipped without
    // touching any vendor; malformed numeric fields abort the run. A valid
    // line always materializes its vendor entry, even when every item token
    // on it normalizes to empty.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), CatalogError> {
        let record = match parse_record(line)? {
            Some(record) => record,
            None => {
                debug!(line, "skipping structurally invalid catalog line");
                return Ok(());
            }
        };

        let slot = match self.index.get(&record.vendor_id) {
            Some(&slot) => slot,
            None => {
                self.vendors.push(Vendor {
                    id: record.vendor_id,
                    menu: HashMap::new(),
                });
                let slot = self.vendors.len() - 1;
                self.index.insert(record.vendor_id, slot);
                slot
            }
        };

        let menu = &mut self.vendors[slot].menu;
        for item in record.items {
            match menu.get(&item) {
                // A repeated listing only wins at a strictly lower price
                Some(existing) if *existing <= record.price => {}
                _ => {
                    menu.insert(item, record.price);
                }
            }
        }

        Ok(())
    }

    // Ingests a sequence of raw lines, in order, exactly once.
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.ingest_line(line.as_ref())?;
        }
        Ok(())
    }

    // Ingests a catalog file line by line. An unreadable source is a
    // recoverable condition: it is logged and returned, and the builder
    // keeps whatever state it had before the call, so the caller can still
    // build and query a partial (typically empty) catalog.
    pub fn ingest_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "catalog source unavailable");
                return Err(e.into());
            }
        };

        for line in BufReader::new(file).lines() {
            self.ingest_line(&line?)?;
        }
        Ok(())
    }

    pub fn build(self) -> Catalog {
        Catalog {
            vendors: self.vendors,
        }
    }
}
