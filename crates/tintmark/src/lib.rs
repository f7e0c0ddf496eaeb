//! Bracket-color markup transformer.
//!
//! This crate rewrites a custom inline tag, `[color=SPEC]text[/color]`,
//! into styled inline spans, leaving all surrounding text untouched.
//!
//! # Overview
//!
//! The tag's color spec is either a hex triplet/sextet or a bare keyword:
//!
//! - `[color=red]sale[/color]` - color keyword (one or more letters)
//! - `[color=#B0041A]Bộ sưu tập[/color]` - `#` plus 3 or 6 hex digits
//!
//! Matching is permissive: a tag that never completes (no closing
//! `[/color]`, an invalid spec, a missing `]`) is not an error, it simply
//! fails to match and is rendered literally. The body runs to the first
//! `[/color]` after the opening tag and is treated as opaque text; nested
//! tags inside it are not matched recursively.
//!
//! # Output modes
//!
//! Two renderer-facing adapters share one scan core:
//!
//! - [`transform()`] - rewrites the text nodes of a [`Document`] tree,
//!   splicing [`Element`] span nodes in place among their siblings
//! - [`rewrite()`] - rewrites a raw string into literal
//!   `<span style="color:...">` markup
//!
//! # Usage
//!
//! ```
//! use tintmark::{rewrite, transform, Document, Node};
//!
//! // String mode
//! let out = rewrite("New [color=red]sale[/color] items");
//! assert_eq!(out, r#"New <span style="color:red">sale</span> items"#);
//!
//! // Tree mode
//! let doc = Document::new(vec![Node::text("New [color=red]sale[/color] items")]);
//! assert_eq!(doc.transform().nodes().len(), 3);
//! ```

pub mod color;
pub mod error;
pub mod node;
pub mod rewrite;
pub mod scanner;
pub mod transform;

// Re-export main types at crate root
pub use color::ColorSpec;
pub use error::ColorSpecError;
pub use node::{Document, Element, Node};
pub use rewrite::rewrite;
pub use scanner::{Fragment, Scanner};
pub use transform::transform;
