use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Class prefix keeps highlight scopes apart from the viewer's own classes.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Highlight one code block into a `<pre>` element.
///
/// An explicit language that is unknown or fails is degraded to an automatic
/// pass (first-line detection, then plain text). Returns `None` only if that
/// pass fails too, in which case the caller emits the block unhighlighted.
pub fn highlight_block(code: &str, lang: Option<&str>) -> Option<String> {
    let lang = lang.map(sanitize_lang).filter(|l| !l.is_empty());

    if let Some(lang) = lang.as_deref() {
        match SYNTAX_SET.find_syntax_by_token(lang) {
            Some(syntax) => match classed_html(code, syntax) {
                Ok(html) => return Some(wrap(&html, Some(lang))),
                Err(e) => log::warn!("Highlighting error in {lang} block: {e}"),
            },
            None => log::warn!("No syntax for '{lang}', auto-detecting"),
        }
    }

    let syntax = SYNTAX_SET
        .find_syntax_by_first_line(code)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    match classed_html(code, syntax) {
        Ok(html) => Some(wrap(&html, lang.as_deref())),
        Err(e) => {
            log::warn!("Automatic highlighting failed: {e}");
            None
        }
    }
}

/// Stylesheet for the highlight classes in the named syntect theme.
pub fn theme_css(theme_name: &str) -> Option<String> {
    let theme = THEME_SET.themes.get(theme_name)?;
    match css_for_theme_with_class_style(theme, CLASS_STYLE) {
        Ok(css) => Some(css),
        Err(e) => {
            log::error!("Failed to build CSS for theme {theme_name}: {e}");
            None
        }
    }
}

fn classed_html(code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}

fn wrap(inner: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!(
            "<pre class=\"highlight\"><code class=\"language-{lang}\">{inner}</code></pre>\n"
        ),
        None => format!("<pre class=\"highlight\"><code>{inner}</code></pre>\n"),
    }
}

// Info strings are user text; only keep characters safe inside a class attribute.
fn sanitize_lang(lang: &str) -> String {
    lang.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#' | '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_keeps_its_class() {
        let html = highlight_block("x = 1\n", Some("python")).unwrap();
        assert!(html.starts_with("<pre class=\"highlight\"><code class=\"language-python\">"));
    }

    #[test]
    fn hostile_info_string_is_sanitized() {
        let html = highlight_block("x\n", Some("js\"><script>")).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("language-jsscript"));
    }

    #[test]
    fn unknown_language_falls_back_to_detection() {
        let html = highlight_block("#!/bin/sh\necho hi\n", Some("nosuchlang")).unwrap();
        assert!(html.starts_with("<pre class=\"highlight\"><code class=\"language-nosuchlang\">"));
        assert!(html.contains("hl-"));
    }

    #[test]
    fn both_themes_have_css() {
        assert!(theme_css("base16-ocean.dark").unwrap().contains(".hl-"));
        assert!(theme_css("InspiredGitHub").is_some());
        assert!(theme_css("no-such-theme").is_none());
    }
}
