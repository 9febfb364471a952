//! Aggregation model: classify records by tag and accumulate timings.

use crate::log::LogRecord;
use std::collections::BTreeMap;

/// Write-site tags, in output order.
pub const WRITE_TAGS: [&str; 6] = ["WRITE1", "WRITE2", "WRITE3", "WRITE4", "WRITE5", "WRITE6"];

/// Read-site tags, in output order.
pub const READ_TAGS: [&str; 5] = ["READ1", "READ2", "READ3", "READ4", "READ5"];

/// Residual-site watch-list, in output order. Other residual tags are
/// accumulated under their own literal key but printed only on request.
pub const RESIDUAL_TAGS: [&str; 6] = ["RD1", "RD2", "RD3", "RD4", "RD5", "RD6"];

/// Category of a tag. First match wins: write set, then read set, then
/// residual catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Write,
    Read,
    Residual,
}

pub fn classify(tag: &str) -> TagClass {
    if WRITE_TAGS.contains(&tag) {
        TagClass::Write
    } else if READ_TAGS.contains(&tag) {
        TagClass::Read
    } else {
        TagClass::Residual
    }
}

/// Per-category tag -> collected values, pre-seeded with the fixed
/// enumerations so absent tags still report zeroes.
#[derive(Debug, Default)]
pub struct Accumulators {
    pub writes: BTreeMap<String, Vec<f64>>,
    pub reads: BTreeMap<String, Vec<f64>>,
    pub residual: BTreeMap<String, Vec<f64>>,
}

impl Accumulators {
    pub fn new() -> Self {
        let mut acc = Accumulators::default();
        for tag in WRITE_TAGS {
            acc.writes.insert(tag.to_string(), Vec::new());
        }
        for tag in READ_TAGS {
            acc.reads.insert(tag.to_string(), Vec::new());
        }
        for tag in RESIDUAL_TAGS {
            acc.residual.insert(tag.to_string(), Vec::new());
        }
        acc
    }

    pub fn record(&mut self, rec: &LogRecord) {
        let map = match classify(&rec.tag) {
            TagClass::Write => &mut self.writes,
            TagClass::Read => &mut self.reads,
            TagClass::Residual => &mut self.residual,
        };
        map.entry(rec.tag.clone()).or_default().push(rec.value);
    }
}

/// Aggregate view of one tag's collected values.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStats {
    pub tag: String,
    pub count: usize,
    pub sum: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryData {
    /// Write tags in enumeration order.
    pub writes: Vec<TagStats>,
    /// Read tags in enumeration order.
    pub reads: Vec<TagStats>,
    /// Watch-list residual tags in enumeration order.
    pub residual: Vec<TagStats>,
    /// Residual tags seen in the data but not on the watch-list, sorted.
    pub unseeded: Vec<TagStats>,
}

fn stats_for(map: &BTreeMap<String, Vec<f64>>, tag: &str) -> TagStats {
    let values = map.get(tag).map(Vec::as_slice).unwrap_or(&[]);
    // Empty f64 sums come out as -0.0; adding positive zero normalizes
    // the sign so absent tags print "0.0".
    let sum: f64 = values.iter().sum::<f64>() + 0.0;
    TagStats {
        tag: tag.to_string(),
        count: values.len(),
        sum,
    }
}

/// Run the single aggregation pass and package the per-tag stats in
/// their fixed output order.
pub fn build_summary(records: &[LogRecord]) -> SummaryData {
    let mut acc = Accumulators::new();
    for rec in records {
        acc.record(rec);
    }

    let writes = WRITE_TAGS.iter().map(|t| stats_for(&acc.writes, t)).collect();
    let reads = READ_TAGS.iter().map(|t| stats_for(&acc.reads, t)).collect();
    let residual = RESIDUAL_TAGS
        .iter()
        .map(|t| stats_for(&acc.residual, t))
        .collect();

    let unseeded = acc
        .residual
        .iter()
        .filter(|(tag, _)| !RESIDUAL_TAGS.contains(&tag.as_str()))
        .map(|(tag, _)| stats_for(&acc.residual, tag))
        .collect();

    SummaryData {
        writes,
        reads,
        residual,
        unseeded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(tag: &str, value: f64) -> LogRecord {
        LogRecord {
            tag: tag.to_string(),
            value,
        }
    }

    #[test]
    fn classification_priority() {
        assert_eq!(classify("WRITE4"), TagClass::Write);
        assert_eq!(classify("READ5"), TagClass::Read);
        assert_eq!(classify("RD2"), TagClass::Residual);
        assert_eq!(classify("RD7"), TagClass::Residual);
        assert_eq!(classify("write1"), TagClass::Residual); // case-sensitive
    }

    #[test]
    fn sums_group_by_exact_tag() {
        let records = vec![
            rec("WRITE1", 2.0),
            rec("READ1", 1.5),
            rec("WRITE1", 3.0),
            rec("RD3", 0.5),
        ];
        let data = build_summary(&records);

        assert_eq!(data.writes[0].tag, "WRITE1");
        assert_eq!(data.writes[0].sum, 5.0);
        assert_eq!(data.reads[0].sum, 1.5);
        assert_eq!(data.residual[2].tag, "RD3");
        assert_eq!(data.residual[2].count, 1);
        assert_eq!(data.residual[2].sum, 0.5);
    }

    #[test]
    fn absent_tags_report_zero() {
        let data = build_summary(&[]);
        assert_eq!(data.writes.len(), 6);
        assert_eq!(data.reads.len(), 5);
        assert_eq!(data.residual.len(), 6);
        for s in data.writes.iter().chain(&data.reads).chain(&data.residual) {
            assert_eq!(s.count, 0);
            assert_eq!(s.sum, 0.0);
        }
        assert!(data.unseeded.is_empty());
    }

    #[test]
    fn absent_tag_sum_is_positive_zero() {
        // An empty f64 iterator sums to -0.0; the stats must not leak
        // the sign into rendered output.
        let data = build_summary(&[rec("WRITE1", 1.0)]);
        for s in data.writes.iter().chain(&data.reads).chain(&data.residual) {
            assert!(s.sum.is_sign_positive(), "{} sum is -0.0", s.tag);
        }
    }

    #[test]
    fn output_order_is_fixed_regardless_of_input_order() {
        let forward = build_summary(&[rec("WRITE2", 1.0), rec("READ3", 2.0)]);
        let reversed = build_summary(&[rec("READ3", 2.0), rec("WRITE2", 1.0)]);
        assert_eq!(forward, reversed);

        let tags: Vec<&str> = forward.writes.iter().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, WRITE_TAGS.to_vec());
    }

    #[test]
    fn unseeded_residual_tags_are_tracked_separately() {
        let records = vec![rec("RD9", 9.0), rec("RD7", 1.0), rec("RD7", 2.0)];
        let data = build_summary(&records);

        // Watch-list stays zero; extras come out sorted.
        assert_eq!(data.residual[0].sum, 0.0);
        assert_eq!(
            data.unseeded,
            vec![
                TagStats {
                    tag: "RD7".to_string(),
                    count: 2,
                    sum: 3.0,
                },
                TagStats {
                    tag: "RD9".to_string(),
                    count: 1,
                    sum: 9.0,
                },
            ]
        );
    }
}
