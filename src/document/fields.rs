//! Post front matter fields edited from the command line

use chrono::{DateTime, NaiveDate};
use serde_yaml::Value;

use crate::document::PUBLISHED_KEY;
use crate::error::{CmsError, Result};
use crate::frontmatter::Frontmatter;

/// Front matter of a freshly created post.
pub fn new_post_frontmatter(title: &str, today: NaiveDate) -> Frontmatter {
    let mut fm = Frontmatter::new();
    fm.insert("title".into(), title.into());
    fm.insert(PUBLISHED_KEY.into(), date_value(today));
    fm.insert("description".into(), "".into());
    fm.insert("tags".into(), Value::Sequence(Vec::new()));
    fm.insert("category".into(), "".into());
    fm.insert("draft".into(), false.into());
    fm
}

/// Normalize a published date to `YYYY-MM-DD`.
///
/// Accepts a plain date or an RFC 3339 timestamp.
pub fn normalize_published(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| CmsError::InvalidDate {
            value: input.to_string(),
        })
}

/// Split a comma separated tag list, trimming each entry.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a `key=value` assignment. The value is read as YAML, so
/// `draft=true` stores a boolean and `tags=[a, b]` a list.
pub fn parse_assignment(input: &str) -> Result<(String, Value)> {
    let invalid = || CmsError::InvalidFieldAssignment {
        input: input.to_string(),
    };

    let (key, raw) = input.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }

    let value = if raw.trim().is_empty() {
        Value::String(String::new())
    } else {
        serde_yaml::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    };
    Ok((key.to_string(), value))
}

/// Field changes applied on top of existing front matter
#[derive(Debug, Default, Clone)]
pub struct PostFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub published: Option<String>,
    pub tags: Option<String>,
    pub draft: Option<bool>,
    /// Raw `key=value` assignments
    pub set: Vec<String>,
}

impl PostFields {
    /// Overlay these fields onto `fm`. Keys not mentioned are kept.
    pub fn apply(&self, fm: &mut Frontmatter) -> Result<()> {
        let text_fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                fm.insert(key.into(), value.as_str().into());
            }
        }

        if let Some(published) = &self.published {
            fm.insert(PUBLISHED_KEY.into(), date_value(normalize_published(published)?));
        }

        if let Some(tags) = &self.tags {
            let tags = parse_tags(tags).into_iter().map(Value::String).collect();
            fm.insert("tags".into(), Value::Sequence(tags));
        }

        if let Some(draft) = self.draft {
            fm.insert("draft".into(), draft.into());
        }

        for assignment in &self.set {
            let (key, value) = parse_assignment(assignment)?;
            fm.insert(key.into(), value);
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.published.is_none()
            && self.tags.is_none()
            && self.draft.is_none()
            && self.set.is_empty()
    }
}

fn date_value(date: NaiveDate) -> Value {
    Value::String(date.format("%Y-%m-%d").to_string())
}
