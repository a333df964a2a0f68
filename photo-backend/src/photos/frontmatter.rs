//! Parse and generate YAML frontmatter for photo markdown files.
//!
//! Frontmatter is held as an ordered `serde_yaml::Mapping` so keys this
//! backend does not know about survive a rewrite, in their original order.

use serde_yaml::{Mapping, Value};

/// A markdown file split into its frontmatter and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownDoc {
    pub frontmatter: Mapping,
    pub body: String,
}

/// Parse a complete markdown file (frontmatter + body)
pub fn parse_doc(content: &str) -> Result<MarkdownDoc, serde_yaml::Error> {
    let (yaml, body) = split_frontmatter(content);
    Ok(MarkdownDoc {
        frontmatter: parse_mapping(yaml)?,
        body: body.to_string(),
    })
}

/// Split content into (frontmatter_yaml, body). Returns empty frontmatter if none found.
fn split_frontmatter(content: &str) -> (&str, &str) {
    let trimmed = content.trim_start_matches('\u{feff}');
    let Some(after_open) = trimmed
        .strip_prefix("---\n")
        .or_else(|| trimmed.strip_prefix("---\r\n"))
    else {
        return ("", content);
    };

    // Closing delimiter directly after the opener means an empty block
    if let Some(rest) = strip_delimiter_line(after_open) {
        return ("", rest);
    }

    match after_open.find("\n---") {
        Some(close_idx) => {
            let yaml = &after_open[..close_idx + 1];
            match strip_delimiter_line(&after_open[close_idx + 1..]) {
                Some(body) => (yaml, body),
                None => ("", content),
            }
        }
        None => ("", content),
    }
}

/// If `s` starts with a `---` line, return what follows it
fn strip_delimiter_line(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("---")?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn parse_mapping(yaml: &str) -> Result<Mapping, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Mapping::new()),
        other => serde_yaml::from_value(other),
    }
}

/// Render frontmatter + body back into markdown
pub fn stringify(frontmatter: &Mapping, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = if frontmatter.is_empty() {
        String::new()
    } else {
        serde_yaml::to_string(frontmatter)?
    };

    let mut out = String::with_capacity(yaml.len() + body.len() + 8);
    out.push_str("---\n");
    out.push_str(&yaml);
    out.push_str("---\n");
    out.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
