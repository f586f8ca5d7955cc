//! Generation-1 document frontmatter
//!
//! The legacy free-text profile is an MDX document with a leading
//! `---`-delimited metadata block of `key: value` lines. Only the keys the
//! resolver needs are extracted; parsing is lenient and never fails, since
//! these documents were written by hand.

/// Metadata extracted from a generation-1 document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub keywords: Vec<String>,
}

impl Frontmatter {
    /// Parse the frontmatter block of a legacy document.
    ///
    /// Returns an empty value for documents without a block or with keys we
    /// do not recognize; malformed lines are skipped.
    pub fn parse(document: &str) -> Self {
        let mut out = Self::default();
        let Some(block) = frontmatter_block(document) else {
            return out;
        };

        for line in block.lines() {
            let Some((key, raw_value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(raw_value.trim());
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "title" => out.title = Some(value),
                "description" => out.description = Some(value),
                "image" => out.image = Some(value),
                "location" => out.location = Some(value),
                "keywords" => out.keywords = parse_list(&value),
                _ => {}
            }
        }
        out
    }
}

/// Extract the text between the opening and closing `---` fences.
fn frontmatter_block(document: &str) -> Option<&str> {
    let rest = document.strip_prefix("---")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> String {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value).to_string()
}

/// Parse `[a, b]` or a bare comma-separated list.
fn parse_list(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .collect()
}
