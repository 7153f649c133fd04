use crate::error::BriefError;
use crate::extraction::PageContent;
use crate::model::{PageRange, RawTable};
use std::cmp::Reverse;
use std::collections::HashMap;

// Stream-style reconstruction from pdftotext -layout output. There are no
// ruling lines to go by: a column is wherever text sits at the same
// horizontal position across rows, and cells within a line are separated by
// gaps of two or more spaces.

/// Extract the first table on each page of `range` and stack the rows in
/// page order.
pub fn extract_range(pages: &[PageContent], range: PageRange) -> Result<RawTable, BriefError> {
    let page_count = pages.len();
    if range.begin == 0 || range.begin > range.end || range.end > page_count {
        return Err(BriefError::InvalidPageRange {
            begin: range.begin,
            end: range.end,
            page_count,
        });
    }

    let mut combined = RawTable::default();
    for page_number in range.begin..=range.end {
        let table = pages
            .iter()
            .find(|p| p.page_number == page_number)
            .and_then(detect_table)
            .ok_or(BriefError::NoTableDetected { page: page_number })?;
        tracing::debug!(
            page = page_number,
            rows = table.len(),
            columns = table.width(),
            "detected table"
        );
        combined.extend(table);
    }

    // Pages can disagree on column count; narrower rows get empty cells.
    combined.pad_rows();
    Ok(combined)
}

/// Detect the first table on a page.
///
/// The table area runs from the first to the last line holding at least two
/// cells. Returns None when no such line exists.
pub fn detect_table(page: &PageContent) -> Option<RawTable> {
    let rows: Vec<Vec<Segment>> = page
        .lines
        .iter()
        .map(|l| split_segments(l))
        .filter(|segs| !segs.is_empty())
        .collect();

    let first = rows.iter().position(|r| r.len() >= 2)?;
    let last = rows.iter().rposition(|r| r.len() >= 2)?;
    let area = &rows[first..=last];

    let layout = Layout::infer(area);
    let cells = area.iter().map(|segments| layout.assign(segments)).collect();

    Some(RawTable::new(cells))
}

/// A run of text on one line, with its character-column extent.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    start: usize,
    /// Exclusive.
    end: usize,
    text: String,
}

impl Segment {
    fn midpoint(&self) -> usize {
        (self.start + self.end) / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn distance(&self, pos: usize) -> usize {
        if pos < self.start {
            self.start - pos
        } else if pos >= self.end {
            pos + 1 - self.end
        } else {
            0
        }
    }
}

/// Split a line into segments separated by gaps of 2+ whitespace characters.
///
/// Positions are counted in characters, not bytes, so that non-ASCII dashes
/// and quotes do not shift the columns.
fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;
    let mut gap = 0;

    for (col, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            gap += 1;
            continue;
        }

        let continues = gap < 2;
        gap = 0;

        if continues {
            if let Some(seg) = current.as_mut() {
                if col > seg.end {
                    seg.text.push(' ');
                }
                seg.text.push(c);
                seg.end = col + 1;
                continue;
            }
        }

        if let Some(seg) = current.take() {
            segments.push(seg);
        }
        current = Some(Segment {
            start: col,
            end: col + 1,
            text: c.to_string(),
        });
    }

    if let Some(seg) = current {
        segments.push(seg);
    }

    segments
}

/// Column layout of one table area.
struct Layout {
    /// Rows whose first cell starts left of this column carry a label.
    label_edge: usize,
    width: usize,
    columns: Vec<Span>,
}

impl Layout {
    /// Infer the column count and extents from the labelled rows.
    ///
    /// Header rows have no label cell, so they do not vote on the width. The
    /// width is the most common cell count among labelled rows; ties go to
    /// the narrower layout, whose extra cells are label text split by a wide
    /// gap.
    fn infer(rows: &[Vec<Segment>]) -> Layout {
        let label_edge = rows
            .iter()
            .filter_map(|r| r.get(1))
            .map(|seg| seg.start)
            .min()
            .unwrap_or(usize::MAX);

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for row in rows {
            if row.len() >= 2 && is_labelled(row, label_edge) {
                *counts.entry(row.len()).or_default() += 1;
            }
        }

        let width = counts
            .iter()
            .max_by_key(|(width, freq)| (**freq, Reverse(**width)))
            .map(|(width, _)| *width)
            .unwrap_or(1);

        let mut columns: Vec<Span> = Vec::with_capacity(width);
        for row in rows {
            if row.len() < width || !is_labelled(row, label_edge) {
                continue;
            }
            for (i, seg) in merge_leading(row, width).iter().enumerate() {
                match columns.get_mut(i) {
                    Some(span) => {
                        span.start = span.start.min(seg.start);
                        span.end = span.end.max(seg.end);
                    }
                    None => columns.push(Span {
                        start: seg.start,
                        end: seg.end,
                    }),
                }
            }
        }

        Layout {
            label_edge,
            width,
            columns,
        }
    }

    /// Cells for one row of the area.
    ///
    /// Full labelled rows map positionally; partial rows and headers go to
    /// the nearest column extent.
    fn assign(&self, segments: &[Segment]) -> Vec<String> {
        if segments.len() >= self.width && is_labelled(segments, self.label_edge) {
            return merge_leading(segments, self.width)
                .into_iter()
                .map(|seg| seg.text)
                .collect();
        }
        assign_to_columns(segments, &self.columns)
    }
}

fn is_labelled(row: &[Segment], label_edge: usize) -> bool {
    row.first().is_some_and(|seg| seg.start < label_edge)
}

/// Fold surplus leading segments into one so the row has `width` cells.
fn merge_leading(row: &[Segment], width: usize) -> Vec<Segment> {
    if row.len() <= width || width == 0 {
        return row.to_vec();
    }

    let surplus = row.len() - width + 1;
    let head = &row[..surplus];
    let label = Segment {
        start: head[0].start,
        end: head[surplus - 1].end,
        text: head
            .iter()
            .map(|seg| seg.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    };

    std::iter::once(label)
        .chain(row[surplus..].iter().cloned())
        .collect()
}

/// Place each segment in the column whose extent is closest to its midpoint.
fn assign_to_columns(segments: &[Segment], columns: &[Span]) -> Vec<String> {
    let mut cells = vec![String::new(); columns.len()];

    for seg in segments {
        let mid = seg.midpoint();
        let Some(idx) = columns
            .iter()
            .enumerate()
            .min_by_key(|(_, span)| span.distance(mid))
            .map(|(i, _)| i)
        else {
            continue;
        };

        let cell = &mut cells[idx];
        if !cell.is_empty() {
            cell.push(' ');
        }
        cell.push_str(&seg.text);
    }

    cells
}
