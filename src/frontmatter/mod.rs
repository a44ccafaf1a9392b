//! YAML front matter for markdown documents
//!
//! A document is a `---` delimited YAML mapping followed by a blank line and
//! the markdown body. [`parse`] and [`serialize`] are inverse operations:
//! `parse(&serialize(body, meta)?)` always yields `(meta, body)` again, while
//! the reverse direction may normalize YAML formatting.

mod codec;

pub use codec::{Frontmatter, get_str, parse, serialize};
