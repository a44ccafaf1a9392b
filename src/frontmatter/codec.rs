//! Split and join YAML front matter and markdown body.

use serde_yaml::{Mapping, Value};

use crate::error::{Result, fs::io_error};

/// Front matter of a document: an ordered YAML mapping.
pub type Frontmatter = Mapping;

const DELIMITER: &str = "---";

/// Parse content into its front matter mapping and body.
///
/// Content without a leading `---` block, or whose block is never closed,
/// is returned whole as body with empty front matter. A block that is not a
/// YAML mapping degrades to empty front matter; the body after the block is
/// still returned.
pub fn parse(content: &str) -> (Frontmatter, String) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some((yaml, rest)) = split_block(content) else {
        return (Mapping::new(), content.to_string());
    };

    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    (parse_mapping(yaml), body.to_string())
}

/// Serialize a body and front matter into document text.
///
/// Empty front matter is written as an empty `---` block so the file keeps
/// the same shape.
pub fn serialize(body: &str, frontmatter: &Frontmatter) -> Result<String> {
    if frontmatter.is_empty() {
        return Ok(format!("{DELIMITER}\n{DELIMITER}\n\n{body}"));
    }

    let yaml = serde_yaml::to_string(frontmatter)
        .map_err(|e| io_error(format!("Failed to serialize front matter: {e}")))?;
    let yaml = if yaml.ends_with('\n') {
        yaml
    } else {
        format!("{yaml}\n")
    };

    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"))
}

/// Get a scalar from the front matter as a string.
pub fn get_str(frontmatter: &Frontmatter, key: &str) -> Option<String> {
    match frontmatter.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => match &tagged.value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Returns the YAML text between the delimiters and everything after the
/// closing delimiter line.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !first.ends_with('\n') || trim_eol(first) != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if trim_eol(line) == DELIMITER {
            return Some((&content[yaml_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn trim_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn parse_mapping(yaml: &str) -> Frontmatter {
    if yaml.trim().is_empty() {
        return Mapping::new();
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            tracing::warn!("front matter is not a mapping, ignoring it");
            Mapping::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "malformed front matter, ignoring it");
            Mapping::new()
        }
    }
}
