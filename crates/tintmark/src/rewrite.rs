//! Literal-markup-string output adapter.
//!
//! Rewrites color tags in a raw string into inline-styled `<span>`
//! markup, for pipelines that post-process rendered markup text rather
//! than a node tree.

use std::borrow::Cow;

use crate::scanner::{Fragment, Scanner, contains_tag};

/// Rewrite every `[color=SPEC]BODY[/color]` occurrence in `input` into
/// `<span style="color:SPEC">BODY</span>`.
///
/// Returns `Cow::Borrowed` when the input contains no complete tag, so a
/// no-match string is passed through without allocation. The body is
/// emitted literally; escaping it for the target markup is the consuming
/// renderer's concern.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tintmark::rewrite;
///
/// let out = rewrite("A [color=red]B[/color] C");
/// assert_eq!(out, r#"A <span style="color:red">B</span> C"#);
///
/// // No match: borrowed pass-through
/// assert!(matches!(rewrite("[color=red]A"), Cow::Borrowed(_)));
/// ```
pub fn rewrite(input: &str) -> Cow<'_, str> {
    if !contains_tag(input) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    for fragment in Scanner::new(input) {
        match fragment {
            Fragment::Text(run) => out.push_str(run),
            Fragment::Span { color, body } => {
                out.push_str(&format!(r#"<span style="color:{}">{}</span>"#, color, body));
            }
        }
    }
    Cow::Owned(out)
}
