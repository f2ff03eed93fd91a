use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use super::{DeckPayload, Slide};
use crate::markdown;

const SLIDE_DELIMITER: &str = "\n---\n";

static NOTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!--\s*NOTES:\s*(.*?)\s*-->").expect("valid notes pattern"));

static COLUMNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s):::columns\s*\n(.*?)\s*\n:::").expect("valid columns pattern"));

static COLUMN_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\|\|\s*").expect("valid separator pattern"));

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid heading pattern"));

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split markdown text into slides on `---` delimiter lines.
pub fn parse_content(text: &str) -> Vec<Slide> {
    let text = text.replace("\r\n", "\n");
    text.split(SLIDE_DELIMITER)
        .map(strip_edge_delimiters)
        .filter(|raw| !raw.is_empty())
        .map(build_slide)
        .collect()
}

/// Title of the deck: first level-1 heading of the first slide, else `fallback`.
pub fn deck_title(slides: &[Slide], fallback: &str) -> String {
    slides
        .first()
        .and_then(|s| H1_RE.captures(&s.content))
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Parse a whole document into the wire payload, using `stem` as the fallback title.
pub fn parse_document(text: &str, stem: &str) -> DeckPayload {
    let slides = parse_content(text);
    DeckPayload::from_slides(deck_title(&slides, stem), &slides)
}

/// Read and parse a markdown file.
pub async fn load_file(path: &Path) -> Result<DeckPayload, ParseError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ParseError::NotFound(path.to_path_buf())
        } else {
            ParseError::Io { path: path.to_path_buf(), source: e }
        }
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let payload = parse_document(&text, &stem);
    log::debug!("Parsed {} slides from {}", payload.total, path.display());
    Ok(payload)
}

/// A delimiter on the very first or last line has no neighbour to split against.
fn strip_edge_delimiters(raw: &str) -> &str {
    let mut raw = raw.trim();
    if raw == "---" {
        return "";
    }
    if let Some(rest) = raw.strip_prefix("---\n") {
        raw = rest.trim_start();
    }
    if let Some(rest) = raw.strip_suffix("\n---") {
        raw = rest.trim_end();
    }
    raw
}

fn build_slide(raw: &str) -> Slide {
    let (content, notes) = extract_notes(raw);
    Slide::new(transform_columns(&content), notes)
}

fn extract_notes(raw: &str) -> (String, Option<String>) {
    let notes = NOTES_RE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string());
    match notes {
        Some(notes) => {
            let content = NOTES_RE.replace_all(raw, "").trim().to_string();
            (content, Some(notes))
        }
        None => (raw.to_string(), None),
    }
}

fn transform_columns(content: &str) -> String {
    COLUMNS_RE
        .replace_all(content, |caps: &Captures| {
            let mut parts = COLUMN_SEPARATOR_RE.splitn(&caps[1], 2);
            match (parts.next(), parts.next()) {
                (Some(left), Some(right)) => format!(
                    "<div class=\"columns-container\">\n\
                     <div class=\"column-left\">\n{}\n</div>\n\
                     <div class=\"column-right\">\n{}\n</div>\n\
                     </div>",
                    markdown::render(left.trim()).trim_end(),
                    markdown::render(right.trim()).trim_end(),
                ),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
