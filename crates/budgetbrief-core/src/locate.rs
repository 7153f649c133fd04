use crate::config::ScrapeConfig;
use crate::error::BriefError;
use crate::extraction::PageContent;
use crate::model::PageRange;

/// Pages (1-based, in order) whose text contains `pattern`.
///
/// Both sides are whitespace-normalized first: the layout output pads words
/// with runs of spaces and wraps headings across lines.
pub fn matching_pages(pages: &[PageContent], pattern: &str) -> Vec<usize> {
    let needle = normalize_ws(pattern);
    if needle.is_empty() {
        return Vec::new();
    }

    pages
        .iter()
        .filter(|p| p.normalized_text().contains(&needle))
        .map(|p| p.page_number)
        .collect()
}

/// Pick the page a pattern refers to from its candidate matches.
///
/// Reports open with a table of contents that repeats the section titles, so
/// a first match at or before `early_page_limit` is skipped in favour of the
/// second. A lone early match is rejected.
pub fn select_page(matches: &[usize], early_page_limit: usize) -> Option<usize> {
    let first = *matches.first()?;
    if first > early_page_limit {
        Some(first)
    } else {
        matches.get(1).copied()
    }
}

/// Find the page where `pattern` marks the table.
pub fn find_match_page(
    pages: &[PageContent],
    pattern: &str,
    early_page_limit: usize,
) -> Option<usize> {
    let matches = matching_pages(pages, pattern);
    let selected = select_page(&matches, early_page_limit);
    tracing::debug!(pattern, ?matches, ?selected, "page search");
    selected
}

/// Locate the begin and end pages of the target table.
///
/// Begin patterns are tried in order; the first one that selects a page wins.
pub fn locate_range(
    pages: &[PageContent],
    config: &ScrapeConfig,
) -> Result<PageRange, BriefError> {
    let begin = config
        .begin_patterns
        .iter()
        .find_map(|p| find_match_page(pages, p, config.early_page_limit))
        .ok_or_else(|| BriefError::BeginPatternNotFound {
            patterns: config.begin_patterns.clone(),
        })?;

    let end = find_match_page(pages, &config.end_pattern, config.early_page_limit)
        .ok_or_else(|| BriefError::EndPatternNotFound {
            pattern: config.end_pattern.clone(),
        })?;

    Ok(PageRange { begin, end })
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn document(marks: &[(usize, &str)], page_count: usize) -> Vec<PageContent> {
        (1..=page_count)
            .map(|n| {
                let text = marks
                    .iter()
                    .filter(|(p, _)| *p == n)
                    .map(|(_, t)| *t)
                    .collect::<Vec<_>>();
                page(n, &text)
            })
            .collect()
    }

    #[test]
    fn test_select_skips_early_first_match() {
        assert_eq!(select_page(&[2, 9], 5), Some(9));
    }

    #[test]
    fn test_select_keeps_late_first_match() {
        assert_eq!(select_page(&[7, 12], 5), Some(7));
    }

    #[test]
    fn test_select_boundary_page_counts_as_early() {
        assert_eq!(select_page(&[5, 8], 5), Some(8));
        assert_eq!(select_page(&[6, 8], 5), Some(6));
    }

    #[test]
    fn test_select_single_early_match_is_rejected() {
        assert_eq!(select_page(&[3], 5), None);
    }

    #[test]
    fn test_select_no_matches() {
        assert_eq!(select_page(&[], 5), None);
    }

    #[test]
    fn test_matching_pages_ignores_layout_spacing() {
        let pages = vec![
            page(1, &["PROGRAM   PROJECTS BY", "PROGRAM AREA ......... 40"]),
            page(2, &["nothing here"]),
            page(3, &["      PROGRAM PROJECTS BY PROGRAM AREA"]),
        ];
        assert_eq!(
            matching_pages(&pages, "PROGRAM PROJECTS BY PROGRAM AREA"),
            vec![1, 3]
        );
    }

    #[test]
    fn test_matching_pages_is_case_sensitive() {
        let pages = vec![page(1, &["Projects by Program Area"])];
        assert!(matching_pages(&pages, "PROJECTS BY PROGRAM AREA").is_empty());
    }

    #[test]
    fn test_locate_range_falls_back_to_second_begin_pattern() {
        let pages = document(
            &[
                (2, "Projects by Program Area"),
                (40, "Projects by Program Area"),
                (2, "TOTAL, EPA"),
                (43, "TOTAL, EPA"),
            ],
            45,
        );
        let range = locate_range(&pages, &ScrapeConfig::default()).unwrap();
        assert_eq!(range, PageRange { begin: 40, end: 43 });
    }

    #[test]
    fn test_locate_range_prefers_first_begin_pattern() {
        let pages = document(
            &[
                (30, "PROGRAM PROJECTS BY PROGRAM AREA"),
                (35, "Projects by Program Area"),
                (32, "TOTAL, EPA"),
            ],
            40,
        );
        let range = locate_range(&pages, &ScrapeConfig::default()).unwrap();
        assert_eq!(range, PageRange { begin: 30, end: 32 });
    }

    #[test]
    fn test_locate_range_missing_begin() {
        let pages = document(&[(20, "TOTAL, EPA")], 25);
        let err = locate_range(&pages, &ScrapeConfig::default()).unwrap_err();
        assert!(matches!(err, BriefError::BeginPatternNotFound { .. }));
    }

    #[test]
    fn test_locate_range_missing_end() {
        let pages = document(&[(20, "Projects by Program Area")], 25);
        let err = locate_range(&pages, &ScrapeConfig::default()).unwrap_err();
        assert!(matches!(err, BriefError::EndPatternNotFound { .. }));
    }
}
