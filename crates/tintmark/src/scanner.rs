//! Scan/match core shared by both output adapters.
//!
//! A single left-to-right pass over a string, yielding the interleaved
//! sequence of plain-text runs and `[color=SPEC]BODY[/color]` matches.
//! Matches are non-overlapping and found in document order; anything that
//! fails to form a complete, valid tag flows through as plain text.

use crate::color::ColorSpec;

const OPEN: &str = "[color=";
const CLOSE: &str = "[/color]";

/// One fragment of a scanned string.
///
/// A scan yields text and span fragments in document order. Empty text
/// runs (before a match at position 0, between back-to-back matches,
/// after a match at end of input) are omitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment<'a> {
    /// A run of plain text containing no complete tag.
    Text(&'a str),
    /// One matched tag: the validated color spec and the literal body.
    ///
    /// The body is opaque: it is everything up to the first `[/color]`
    /// after the opening tag and is never itself re-scanned.
    Span {
        /// The validated color specification.
        color: ColorSpec,
        /// Literal, unprocessed body text.
        body: &'a str,
    },
}

/// A complete match found in the input.
#[derive(Clone, Debug)]
struct TagMatch<'a> {
    /// Byte offset of the opening `[`.
    start: usize,
    /// Byte offset just past the closing `[/color]`.
    end: usize,
    color: ColorSpec,
    body: &'a str,
}

/// Scanner over a string, yielding [`Fragment`]s.
///
/// # Examples
///
/// ```
/// use tintmark::{Fragment, Scanner};
///
/// let fragments: Vec<_> = Scanner::new("A [color=red]B[/color] C").collect();
/// assert_eq!(fragments.len(), 3);
/// assert_eq!(fragments[0], Fragment::Text("A "));
/// assert_eq!(fragments[2], Fragment::Text(" C"));
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// Match found ahead of the cursor while emitting the text before it.
    queued: Option<TagMatch<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            queued: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(m) = self.queued.take() {
            self.pos = m.end;
            return Some(Fragment::Span {
                color: m.color,
                body: m.body,
            });
        }

        if self.pos >= self.input.len() {
            return None;
        }

        match find_match(self.input, self.pos) {
            Some(m) if m.start == self.pos => {
                self.pos = m.end;
                Some(Fragment::Span {
                    color: m.color,
                    body: m.body,
                })
            }
            Some(m) => {
                let text = &self.input[self.pos..m.start];
                self.queued = Some(m);
                Some(Fragment::Text(text))
            }
            None => {
                let text = &self.input[self.pos..];
                self.pos = self.input.len();
                Some(Fragment::Text(text))
            }
        }
    }
}

/// Returns true if the input contains at least one complete tag.
///
/// Both adapters use this as their identity-preservation probe: when it
/// returns false the input is passed through untouched.
pub fn contains_tag(input: &str) -> bool {
    find_match(input, 0).is_some()
}

/// Find the first complete match at or after `from`.
///
/// Candidates are tried left to right; a candidate that fails (bad spec,
/// no `]`, no closing tag) is skipped and the search resumes one byte
/// later, so malformed tags degrade to plain text.
fn find_match(input: &str, from: usize) -> Option<TagMatch<'_>> {
    let mut search = from;
    while let Some(rel) = input[search..].find(OPEN) {
        let start = search + rel;
        if let Some(m) = match_at(input, start) {
            return Some(m);
        }
        search = start + 1;
    }
    None
}

/// Try to complete a match whose opening `[` is at `start`.
fn match_at(input: &str, start: usize) -> Option<TagMatch<'_>> {
    let spec_start = start + OPEN.len();
    let spec_len = input[spec_start..].find(']')?;
    let color = ColorSpec::parse(&input[spec_start..spec_start + spec_len]).ok()?;

    let body_start = spec_start + spec_len + 1;
    let close = input[body_start..].find(CLOSE)?;
    let body = &input[body_start..body_start + close];

    Some(TagMatch {
        start,
        end: body_start + close + CLOSE.len(),
        color,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<Fragment<'_>> {
        Scanner::new(input).collect()
    }

    fn span<'a>(color: &str, body: &'a str) -> Fragment<'a> {
        Fragment::Span {
            color: ColorSpec::parse(color).unwrap(),
            body,
        }
    }

    #[test]
    fn scan_plain_text() {
        assert_eq!(scan("Hello World"), vec![Fragment::Text("Hello World")]);
    }

    #[test]
    fn scan_empty_input() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn scan_single_tag() {
        assert_eq!(scan("[color=red]B[/color]"), vec![span("red", "B")]);
    }

    #[test]
    fn scan_tag_with_surrounding_text() {
        assert_eq!(
            scan("A [color=red]B[/color] C"),
            vec![Fragment::Text("A "), span("red", "B"), Fragment::Text(" C")]
        );
    }

    #[test]
    fn scan_back_to_back_tags() {
        // No empty text fragment between adjacent matches
        assert_eq!(
            scan("[color=red]A[/color][color=blue]B[/color]"),
            vec![span("red", "A"), span("blue", "B")]
        );
    }

    #[test]
    fn scan_hex_spec() {
        assert_eq!(
            scan("[color=#B0041A]Bộ sưu tập[/color]"),
            vec![span("#B0041A", "Bộ sưu tập")]
        );
    }

    #[test]
    fn scan_unterminated_tag() {
        assert_eq!(scan("[color=red]A"), vec![Fragment::Text("[color=red]A")]);
    }

    #[test]
    fn scan_invalid_spec() {
        assert_eq!(
            scan("[color=12]A[/color]"),
            vec![Fragment::Text("[color=12]A[/color]")]
        );
    }

    #[test]
    fn scan_empty_spec() {
        assert_eq!(
            scan("[color=]A[/color]"),
            vec![Fragment::Text("[color=]A[/color]")]
        );
    }

    #[test]
    fn scan_empty_body() {
        assert_eq!(scan("[color=red][/color]"), vec![span("red", "")]);
    }

    #[test]
    fn scan_body_is_non_greedy() {
        // First [/color] wins; the trailing close is plain text
        assert_eq!(
            scan("[color=red]A[/color]B[/color]"),
            vec![span("red", "A"), Fragment::Text("B[/color]")]
        );
    }

    #[test]
    fn scan_nested_open_is_opaque() {
        // A nested opening tag inside the body is not matched recursively
        assert_eq!(
            scan("[color=red]A[color=blue]B[/color]"),
            vec![span("red", "A[color=blue]B")]
        );
    }

    #[test]
    fn scan_invalid_candidate_then_valid_match() {
        assert_eq!(
            scan("[color=12]A[/color][color=red]B[/color]"),
            vec![Fragment::Text("[color=12]A[/color]"), span("red", "B")]
        );
    }

    #[test]
    fn contains_tag_probe() {
        assert!(contains_tag("[color=red]A[/color]"));
        assert!(!contains_tag("[color=red]A"));
        assert!(!contains_tag("plain"));
    }
}
