use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chex_core::error::Result;
use chex_core::hash::digest::digest;
use chex_core::{
    BaselineOptions, ComparisonReport, DuplicatePolicy, HashAlgo, build_baseline, compare,
    read_baseline, write_baseline, write_report,
};

/// Name recorded for a path: its final component, which is what an upload
/// widget would report. Falls back to the full path for inputs like `..`.
fn reported_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read each input into a (name, bytes) pair for the core.
fn read_batch(inputs: &[PathBuf]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut batch = Vec::with_capacity(inputs.len());
    for p in inputs {
        let bytes = fs::read(p)?;
        tracing::debug!(path = %p.display(), bytes = bytes.len(), "read input");
        batch.push((reported_name(p), bytes));
    }
    Ok(batch)
}

pub fn handle_baseline(
    out: PathBuf,
    inputs: Vec<PathBuf>,
    algo: HashAlgo,
    dups: DuplicatePolicy,
) -> Result<()> {
    let batch = read_batch(&inputs)?;
    let opts = BaselineOptions {
        algo,
        duplicates: dups,
    };
    let table = build_baseline(&batch, Some(&opts))?;

    let f = File::create(&out)?;
    write_baseline(&table, f)?;

    for r in &table.records {
        println!("{}  {}", r.digest, r.name);
    }
    tracing::info!(files = table.len(), out = %out.display(), "baseline written");
    eprintln!("baseline: {} files -> {}", table.len(), out.display());
    Ok(())
}

pub fn handle_compare(
    baseline_path: PathBuf,
    inputs: Vec<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
    algo: HashAlgo,
    dups: DuplicatePolicy,
) -> Result<()> {
    let baseline = read_baseline(File::open(&baseline_path)?)?;
    let batch = read_batch(&inputs)?;
    let opts = BaselineOptions {
        algo,
        duplicates: dups,
    };
    let current = build_baseline(&batch, Some(&opts))?;
    let report = compare(&baseline, &current);
    tracing::info!(
        baseline = %baseline_path.display(),
        rows = report.rows.len(),
        "comparison complete"
    );

    if json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(stdout)?;
    } else {
        print_report(&report);
    }

    if let Some(out) = out {
        let f = File::create(&out)?;
        write_report(&report, f)?;
        eprintln!("report: {} rows -> {}", report.rows.len(), out.display());
    }

    let c = report.counts();
    eprintln!(
        "compare: {} unchanged, {} modified, {} new, {} missing",
        c.unchanged, c.modified, c.new, c.missing
    );
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    for row in &report.rows {
        println!("{:<9}  {}", row.status.label(), row.name);
    }
}

pub fn handle_show(baseline: PathBuf) -> Result<()> {
    let table = read_baseline(File::open(&baseline)?)?;
    for r in &table.records {
        println!("{}  {}", r.digest, r.name);
    }
    Ok(())
}

pub fn handle_digest(inputs: Vec<PathBuf>, algo: HashAlgo) -> Result<()> {
    for p in &inputs {
        let bytes = fs::read(p)?;
        println!("{}  {}", digest(algo, &bytes), p.display());
    }
    Ok(())
}
