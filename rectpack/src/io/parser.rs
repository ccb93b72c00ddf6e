//! Plain-text instance format:
//!
//! ```text
//! N K
//! w_1 h_1          (N item lines)
//! ...
//! W_1 H_1 C_1      (K bin lines)
//! ...
//! ```
//! All values are non-negative integers, item and bin dimensions must be positive.
//! Blank lines are ignored. Items and bins receive 1-based ids in order of appearance.

use crate::io::ext_repr::{ExtBin, ExtInstance, ExtItem};
use anyhow::{Context, Result, bail, ensure};

/// Parses an instance in the plain-text format. Fails on the first malformed line.
pub fn parse_instance(text: &str, name: &str) -> Result<ExtInstance> {
    let mut lines = LineReader::new(text);

    let [n_items, n_bins] = lines.next_record::<2>("header")?;

    let items = (1..=n_items)
        .map(|id| {
            let [width, height] = lines.next_record::<2>("item")
                .with_context(|| format!("failed to read item {id} of {n_items}"))?;
            ensure!(
                width > 0 && height > 0,
                "item {id} has a non-positive dimension: {width}x{height}"
            );
            ensure!(
                width.checked_mul(height).is_some(),
                "area of item {id} does not fit in 64 bits: {width}x{height}"
            );
            Ok(ExtItem { id, width, height })
        })
        .collect::<Result<Vec<_>>>()?;

    let bins = (1..=n_bins)
        .map(|id| {
            let [width, height, cost] = lines.next_record::<3>("bin")
                .with_context(|| format!("failed to read bin {id} of {n_bins}"))?;
            ensure!(
                width > 0 && height > 0,
                "bin {id} has a non-positive dimension: {width}x{height}"
            );
            ensure!(
                width.checked_mul(height).is_some(),
                "area of bin {id} does not fit in 64 bits: {width}x{height}"
            );
            Ok(ExtBin {
                id,
                width,
                height,
                cost,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some((line_nr, line)) = lines.remaining.next() {
        bail!("unexpected content after the last bin at line {line_nr}: {line:?}");
    }

    Ok(ExtInstance {
        name: name.to_string(),
        items,
        bins,
    })
}

/// Non-empty lines of the input, paired with their 1-based line number.
struct LineReader<'a> {
    remaining: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect::<Vec<_>>();
        LineReader {
            remaining: lines.into_iter(),
        }
    }

    /// Reads the next line and parses it into exactly `N` integers.
    fn next_record<const N: usize>(&mut self, kind: &str) -> Result<[u64; N]> {
        let Some((line_nr, line)) = self.remaining.next() else {
            bail!("unexpected end of input, expected a {kind} line");
        };
        let fields = line.split_whitespace().collect::<Vec<_>>();
        ensure!(
            fields.len() == N,
            "line {line_nr}: expected {N} fields for a {kind} line, found {}: {line:?}",
            fields.len()
        );

        let mut record = [0; N];
        for (value, field) in record.iter_mut().zip(fields) {
            *value = field
                .parse()
                .with_context(|| format!("line {line_nr}: invalid value {field:?} in {kind} line"))?;
        }
        Ok(record)
    }
}
