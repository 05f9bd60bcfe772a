use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::baseline::BaselineTable;

/// Classification of one filename after reconciling baseline and current.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    Unchanged,
    Modified,
    New,
    Missing,
}

impl FileStatus {
    /// Exact label used in rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Unchanged => "UNCHANGED",
            FileStatus::Modified => "MODIFIED",
            FileStatus::New => "NEW",
            FileStatus::Missing => "MISSING",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub name: String,
    pub status: FileStatus,
    /// Absent for NEW rows.
    pub baseline_digest: Option<String>,
    /// Absent for MISSING rows.
    pub current_digest: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
}

/// Per-status tallies, for summaries.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub unchanged: u64,
    pub modified: u64,
    pub new: u64,
    pub missing: u64,
}

impl ComparisonReport {
    pub fn counts(&self) -> StatusCounts {
        let mut c = StatusCounts::default();
        for row in &self.rows {
            match row.status {
                FileStatus::Unchanged => c.unchanged += 1,
                FileStatus::Modified => c.modified += 1,
                FileStatus::New => c.new += 1,
                FileStatus::Missing => c.missing += 1,
            }
        }
        c
    }
}

/// Reconcile `current` against `baseline`.
///
/// Every name in baseline ∪ current appears in exactly one row. Rows come
/// out in baseline order first (MISSING interleaved where the baseline had
/// the name), then current-only names in current order.
pub fn compare(baseline: &BaselineTable, current: &BaselineTable) -> ComparisonReport {
    let current_by_name: HashMap<&str, &str> = current
        .records
        .iter()
        .map(|r| (r.name.as_str(), r.digest.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(baseline.len() + current.len());

    for r in &baseline.records {
        match current_by_name.get(r.name.as_str()) {
            Some(&cur) => {
                let status = if cur == r.digest {
                    FileStatus::Unchanged
                } else {
                    FileStatus::Modified
                };
                rows.push(ComparisonRow {
                    name: r.name.clone(),
                    status,
                    baseline_digest: Some(r.digest.clone()),
                    current_digest: Some(cur.to_string()),
                });
            }
            None => rows.push(ComparisonRow {
                name: r.name.clone(),
                status: FileStatus::Missing,
                baseline_digest: Some(r.digest.clone()),
                current_digest: None,
            }),
        }
    }

    let baseline_names: HashSet<&str> = baseline
        .records
        .iter()
        .map(|r| r.name.as_str())
        .collect();

    for r in &current.records {
        if !baseline_names.contains(r.name.as_str()) {
            rows.push(ComparisonRow {
                name: r.name.clone(),
                status: FileStatus::New,
                baseline_digest: None,
                current_digest: Some(r.digest.clone()),
            });
        }
    }

    ComparisonReport { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::build_baseline;

    fn table(pairs: &[(&str, &[u8])]) -> BaselineTable {
        let batch: Vec<(String, Vec<u8>)> = pairs
            .iter()
            .map(|(n, b)| (n.to_string(), b.to_vec()))
            .collect();
        build_baseline(&batch, None).unwrap()
    }

    fn statuses(report: &ComparisonReport) -> Vec<(&str, FileStatus)> {
        report
            .rows
            .iter()
            .map(|r| (r.name.as_str(), r.status))
            .collect()
    }

    #[test]
    fn unchanged_and_modified() {
        let baseline = table(&[("essay1.txt", b"one"), ("essay2.txt", b"two")]);
        let current = table(&[("essay1.txt", b"one"), ("essay2.txt", b"two edited")]);
        let report = compare(&baseline, &current);
        assert_eq!(
            statuses(&report),
            [
                ("essay1.txt", FileStatus::Unchanged),
                ("essay2.txt", FileStatus::Modified),
            ]
        );
        let modified = &report.rows[1];
        assert!(modified.baseline_digest.is_some());
        assert!(modified.current_digest.is_some());
        assert_ne!(modified.baseline_digest, modified.current_digest);
    }

    #[test]
    fn new_file_detected() {
        let baseline = table(&[("a.txt", b"one")]);
        let current = table(&[("a.txt", b"one"), ("b.txt", b"two")]);
        let report = compare(&baseline, &current);
        assert_eq!(
            statuses(&report),
            [("a.txt", FileStatus::Unchanged), ("b.txt", FileStatus::New)]
        );
        assert_eq!(report.rows[1].baseline_digest, None);
        assert!(report.rows[1].current_digest.is_some());
    }

    #[test]
    fn missing_file_detected() {
        let baseline = table(&[("a.txt", b"one"), ("c.txt", b"three")]);
        let current = table(&[("a.txt", b"one")]);
        let report = compare(&baseline, &current);
        assert_eq!(
            statuses(&report),
            [
                ("a.txt", FileStatus::Unchanged),
                ("c.txt", FileStatus::Missing),
            ]
        );
        assert!(report.rows[1].baseline_digest.is_some());
        assert_eq!(report.rows[1].current_digest, None);
    }

    #[test]
    fn empty_tables_give_empty_report() {
        let report = compare(&BaselineTable::default(), &BaselineTable::default());
        assert!(report.rows.is_empty());
        assert_eq!(report.counts(), StatusCounts::default());
    }

    #[test]
    fn every_union_name_appears_exactly_once() {
        let baseline = table(&[("a", b"1"), ("b", b"2"), ("c", b"3")]);
        let current = table(&[("b", b"2x"), ("c", b"3"), ("d", b"4"), ("e", b"5")]);
        let report = compare(&baseline, &current);

        let mut seen: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
        assert_eq!(report.rows.len(), 5);
    }

    #[test]
    fn ordering_is_baseline_then_current_only() {
        let baseline = table(&[("z", b"1"), ("gone", b"2"), ("a", b"3")]);
        let current = table(&[("n2", b"4"), ("a", b"3"), ("z", b"1"), ("n1", b"5")]);
        let report = compare(&baseline, &current);
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        // baseline order first (including the missing row), then current-only
        // names in current order.
        assert_eq!(names, ["z", "gone", "a", "n2", "n1"]);
    }

    #[test]
    fn counts_tally_by_status() {
        let baseline = table(&[("a", b"1"), ("b", b"2"), ("c", b"3")]);
        let current = table(&[("a", b"1"), ("b", b"2x"), ("d", b"4")]);
        let c = compare(&baseline, &current).counts();
        assert_eq!(
            c,
            StatusCounts {
                unchanged: 1,
                modified: 1,
                new: 1,
                missing: 1,
            }
        );
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let baseline = table(&[("a", b"1"), ("b", b"2")]);
        let current = table(&[("b", b"2"), ("c", b"3")]);
        assert_eq!(compare(&baseline, &current), compare(&baseline, &current));
    }
}
