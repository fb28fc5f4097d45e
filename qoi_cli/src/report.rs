use std::fmt;
use std::time::Duration;

/// Measurements for one codec on one image.
#[derive(Clone, Debug, PartialEq)]
pub struct CodecResult {
  pub algorithm: &'static str,
  pub decode_time: Duration,
  pub encode_time: Duration,
  /// Encoded size in bytes.
  pub size: usize,
  /// Encoded size divided by the raw size of the pixel data.
  pub rate: f64,
}

/// A light, box-drawn table with a title row spanning every column and a
/// separator between all rows.
pub struct Table {
  title: String,
  header: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl Table {
  pub fn new(title: impl Into<String>, header: &[&str]) -> Self {
    Self {
      title: title.into(),
      header: header.iter().map(|cell| cell.to_string()).collect(),
      rows: Vec::new(),
    }
  }

  /// Appends a row, padding or truncating it to the header's column count.
  pub fn push_row(&mut self, mut row: Vec<String>) {
    row.resize(self.header.len(), String::new());
    self.rows.push(row);
  }

  fn column_widths(&self) -> Vec<usize> {
    let mut widths: Vec<usize> = self.header.iter().map(|cell| cell.chars().count()).collect();

    for row in &self.rows {
      for (width, cell) in widths.iter_mut().zip(row) {
        *width = (*width).max(cell.chars().count());
      }
    }

    // Widen the last column when the title does not fit.
    let inner: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    let title_len = self.title.chars().count();

    if let Some(last) = widths.last_mut() {
      if title_len > inner {
        *last += title_len - inner;
      }
    }

    widths
  }
}

/// The table for one benchmarked image, with one row per codec.
pub fn benchmark_table(path: &str, results: &[CodecResult]) -> Table {
  let mut table = Table::new(
    path,
    &["Algorithm", "Decode Time", "Encode Time", "Size (KB)", "Rate"],
  );

  for result in results {
    table.push_row(vec![
      result.algorithm.to_string(),
      format!("{:?}", result.decode_time),
      format!("{:?}", result.encode_time),
      format!("{:.2}", result.size as f64 / 1024.0),
      format!("{:.1} %", result.rate * 100.0),
    ]);
  }

  table
}

fn border(f: &mut fmt::Formatter<'_>, widths: &[usize], left: char, mid: char, right: char) -> fmt::Result {
  let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
  writeln!(f, "{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
  let cells: Vec<String> = widths
    .iter()
    .zip(cells)
    .map(|(width, cell)| format!(" {:<width$} ", cell, width = width))
    .collect();
  writeln!(f, "│{}│", cells.join("│"))
}

impl fmt::Display for Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let widths = self.column_widths();
    let inner = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

    writeln!(f, "┌{}┐", "─".repeat(inner + 2))?;
    writeln!(f, "│ {:<inner$} │", self.title, inner = inner)?;
    border(f, &widths, '├', '┬', '┤')?;
    row(f, &widths, &self.header)?;

    for cells in &self.rows {
      border(f, &widths, '├', '┼', '┤')?;
      row(f, &widths, cells)?;
    }

    border(f, &widths, '└', '┴', '┘')
  }
}
