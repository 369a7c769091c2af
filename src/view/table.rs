//! Plain-text column layout helpers.

use unicode_width::UnicodeWidthStr;

/// Pad `text` with spaces to `width` terminal columns.
///
/// Text already wider than `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

/// Widest display width among `texts`.
pub fn max_width<'a>(texts: impl IntoIterator<Item = &'a str>) -> usize {
    texts.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Render rows as left-aligned columns separated by two spaces.
///
/// The last column is never padded, so lines carry no trailing whitespace.
pub fn render_columns(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| max_width(rows.iter().filter_map(|row| row.get(col).map(String::as_str))))
        .collect();

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(col, cell)| {
                    if col == last {
                        cell.clone()
                    } else {
                        pad_to_width(cell, widths[col])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format whole dollars with thousands separators (`$1,200,000`).
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
