// Template context structures for Askama templates.

use askama::Template;

use crate::presentation::KeyBinding;

/// The viewer page. Key lists are handed to the page script as JSON so the
/// browser can suppress scrolling synchronously.
#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub app_name: String,
    pub key_bindings: &'static [KeyBinding],
    pub bound_keys_json: String,
    pub suppressed_keys_json: String,
    pub default_theme: &'static str,
}
