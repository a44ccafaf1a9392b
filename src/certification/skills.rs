//! Splitting the skills spec body around its certifications heading

use std::sync::LazyLock;

use regex::Regex;

/// Name of the spec that carries certifications
pub const SKILLS_SPEC: &str = "skills";

/// Heading written between free-form content and the cards fragment
pub const CERTIFICATIONS_HEADING: &str = "# Certifications";

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#\s*Certifications").expect("valid regex"));

/// Split a skills body into `(content, certifications_html)`.
///
/// The split happens at the first case-insensitive `# Certifications`; both
/// halves are trimmed. Without the heading the body is returned unchanged
/// with an empty fragment. Any matching heading in the free-form part will
/// split there instead.
pub fn split_certifications(body: &str) -> (String, String) {
    match HEADING_RE.find(body) {
        Some(heading) => (
            body[..heading.start()].trim().to_string(),
            body[heading.end()..].trim().to_string(),
        ),
        None => (body.to_string(), String::new()),
    }
}

/// Rejoin content and certifications fragment into a skills body.
pub fn join_certifications(content: &str, certs_html: &str) -> String {
    format!("{content}\n\n{CERTIFICATIONS_HEADING}\n\n{certs_html}")
}
