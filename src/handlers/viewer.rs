use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::markdown;
use crate::presentation::{KEY_BINDINGS, SUPPRESSED_KEYS, Theme, bound_keys};
use crate::templates_structs::ViewerTemplate;

/// GET / - The viewer page. The deck itself is loaded by the page script.
pub async fn index() -> Result<HttpResponse, AppError> {
    let tmpl = ViewerTemplate {
        app_name: "MarkDeck".to_string(),
        key_bindings: KEY_BINDINGS,
        bound_keys_json: serde_json::to_string(&bound_keys()).unwrap_or_default(),
        suppressed_keys_json: serde_json::to_string(SUPPRESSED_KEYS).unwrap_or_default(),
        default_theme: Theme::default().as_str(),
    };
    render(tmpl)
}

/// GET /highlight/{theme}.css - Code highlighting styles for a viewer theme.
pub async fn highlight_css(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let theme = Theme::from_name(&name).ok_or_else(|| AppError::NotFound(format!("theme {name}")))?;

    let css = markdown::theme_css(theme.highlight_theme())
        .ok_or_else(|| AppError::Stylesheet(theme.highlight_theme().to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(css))
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
