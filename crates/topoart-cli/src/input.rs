//! Sample ingestion: CSV parsing, min-max scaling, synthetic blobs.
//!
//! The engine expects every component already inside `[0, 1]`; this module is
//! the preprocessing step that gets raw data there.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse '{field}' as a number")]
    Parse { line: usize, field: String },

    #[error("line {line}: expected {expected} columns, found {got}")]
    Ragged { line: usize, expected: usize, got: usize },

    #[error("no samples found")]
    Empty,
}

/// Parse comma-separated rows of numbers.
///
/// Blank lines and lines starting with `#` are skipped. A first row that
/// does not parse as numbers is treated as a header and skipped as well.
pub fn parse_csv(text: &str) -> Result<Vec<Vec<f64>>, InputError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut header_allowed = true;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed: Result<Vec<f64>, String> = line
            .split(',')
            .map(|f| f.trim().parse::<f64>().map_err(|_| f.trim().to_string()))
            .collect();

        let row = match parsed {
            Ok(row) => row,
            Err(_) if header_allowed => {
                header_allowed = false;
                continue;
            }
            Err(field) => return Err(InputError::Parse { line: i + 1, field }),
        };
        header_allowed = false;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(InputError::Ragged { line: i + 1, expected: first.len(), got: row.len() });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(rows)
}

pub fn read_csv(path: &Path) -> Result<Vec<Vec<f64>>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(&text)
}

/// Rescale every column to `[0, 1]` in place. Constant columns become `0.5`.
pub fn min_max_normalize(rows: &mut [Vec<f64>]) {
    let Some(first) = rows.first() else { return };
    let dim = first.len();

    for j in 0..dim {
        let (lo, hi) = rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r[j]), hi.max(r[j]))
        });
        let span = hi - lo;
        for r in rows.iter_mut() {
            r[j] = if span > 0.0 { ((r[j] - lo) / span).clamp(0.0, 1.0) } else { 0.5 };
        }
    }
}

/// `n` samples drawn round-robin from `k` random centers, each component
/// jittered uniformly by up to `spread` and clamped into `[0, 1]`.
pub fn synthetic_blobs(n: usize, k: usize, dim: usize, spread: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k = k.max(1);
    let centers: Vec<Vec<f64>> = (0..k)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.1..0.9)).collect())
        .collect();

    (0..n)
        .map(|i| {
            centers[i % k]
                .iter()
                .map(|c| {
                    let jitter = if spread > 0.0 { rng.gen_range(-spread..spread) } else { 0.0 };
                    (c + jitter).clamp(0.0, 1.0)
                })
                .collect()
        })
        .collect()
}
