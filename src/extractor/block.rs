use crate::error::{Result, TokgenError};

/// Comment opener stripped from enum body lines.
pub const COMMENT_MARKER: &str = "//";

/// A located enum declaration body: the half-open line range between the
/// start-marker line and the end-marker line.
///
/// `start` is the index of the line immediately after the start marker;
/// `end` is the index of the end-marker line itself. `start <= end` holds by
/// construction; `start == end` is an empty declaration body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumBlock {
    pub start: usize,
    pub end: usize,
}

impl EnumBlock {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start
    }
}

/// Scanner state for block location. Modeling the scan explicitly keeps the
/// only-first-occurrence rule unambiguous: once a marker has been matched the
/// scanner leaves the state that looks for it, so later occurrences of either
/// literal cannot re-trigger a match.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    SeekingStart,
    SeekingEnd { start: usize },
}

/// Locate the first block bounded by `start_marker` and `end_marker`.
///
/// Markers are matched as case-sensitive substrings of a line. The target
/// declaration must be the first block in the document containing the start
/// marker; an earlier unrelated block that happens to contain it will be
/// matched instead. That contract comes from the upstream header layout and
/// is deliberately not validated here.
///
/// Scanning stops at the end-marker line; the remainder of the document is
/// never examined. A start without an end is a fatal structural error, as is
/// no start at all. No partial result is ever produced.
pub fn locate_enum_block(
    lines: &[&str],
    start_marker: &str,
    end_marker: &str,
    source: &str,
) -> Result<EnumBlock> {
    let mut state = ScanState::SeekingStart;

    for (index, line) in lines.iter().enumerate() {
        match state {
            ScanState::SeekingStart => {
                if line.contains(start_marker) {
                    state = ScanState::SeekingEnd { start: index + 1 };
                }
            }
            ScanState::SeekingEnd { start } => {
                if line.contains(end_marker) {
                    // index >= start by construction of the state change
                    debug_assert!(start <= index);
                    return Ok(EnumBlock { start, end: index });
                }
            }
        }
    }

    match state {
        ScanState::SeekingStart => Err(TokgenError::StartMarkerNotFound {
            marker: start_marker.to_string(),
            path: source.to_string(),
        }),
        ScanState::SeekingEnd { .. } => Err(TokgenError::EndMarkerNotFound {
            marker: end_marker.to_string(),
            path: source.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};

    fn locate(lines: &[&str]) -> Result<EnumBlock> {
        locate_enum_block(lines, DEFAULT_START_MARKER, DEFAULT_END_MARKER, "test")
    }

    #[test]
    fn test_locates_simple_block() {
        let lines = vec![
            "#ifndef _TOKEN_H_",
            "typedef enum {",
            "    TOKEN_IF,",
            "    TOKEN_ELSE,",
            "} TokenType;",
            "#endif",
        ];
        let block = locate(&lines).unwrap();
        assert_eq!(block, EnumBlock { start: 2, end: 4 });
        assert_eq!(block.line_count(), 2);
    }

    #[test]
    fn test_empty_body_is_valid() {
        let lines = vec!["typedef enum {", "} TokenType;"];
        let block = locate(&lines).unwrap();
        assert_eq!(block, EnumBlock { start: 1, end: 1 });
        assert!(block.is_empty());
    }

    #[test]
    fn test_missing_start_marker() {
        let lines = vec!["int main(void);", "} TokenType;"];
        let err = locate(&lines).unwrap_err();
        assert!(matches!(err, TokgenError::StartMarkerNotFound { .. }));
    }

    #[test]
    fn test_missing_end_marker_is_fatal() {
        let lines = vec!["typedef enum {", "    TOKEN_IF,"];
        let err = locate(&lines).unwrap_err();
        assert!(matches!(err, TokgenError::EndMarkerNotFound { .. }));
    }

    #[test]
    fn test_first_start_occurrence_wins() {
        let lines = vec![
            "typedef enum {",
            "    TOKEN_IF,",
            "typedef enum {",
            "    TOKEN_WRONG,",
            "} TokenType;",
        ];
        let block = locate(&lines).unwrap();
        // Block opens after the FIRST marker; the second occurrence is body text.
        assert_eq!(block.start, 1);
        assert_eq!(block.end, 4);
    }

    #[test]
    fn test_scan_stops_at_first_end_marker() {
        let lines = vec![
            "typedef enum {",
            "    TOKEN_IF,",
            "} TokenType;",
            "typedef enum {",
            "    UNRELATED,",
            "} TokenType;",
        ];
        let block = locate(&lines).unwrap();
        assert_eq!(block, EnumBlock { start: 1, end: 2 });
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let lines = vec!["} TokenType;", "typedef enum {", "    TOKEN_IF,", "} TokenType;"];
        let block = locate(&lines).unwrap();
        assert_eq!(block, EnumBlock { start: 2, end: 3 });
    }

    #[test]
    fn test_markers_match_as_substrings() {
        let lines = vec!["  typedef enum {  // token kinds", "A,", "  } TokenType;  "];
        let block = locate(&lines).unwrap();
        assert_eq!(block, EnumBlock { start: 1, end: 2 });
    }

    #[test]
    fn test_custom_markers() {
        let lines = vec!["enum Kind {", "A, B,", "};"];
        let block = locate_enum_block(&lines, "enum Kind {", "};", "test").unwrap();
        assert_eq!(block, EnumBlock { start: 1, end: 2 });
    }
}
