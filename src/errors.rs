use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::deck::ParseError;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Session(String),
    Parse(ParseError),
    NoPresentationFile,
    NotStarted,
    NotFound(String),
    Stylesheet(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Parse(ParseError::NotFound(path)) => {
                write!(f, "File not found: {}", path.display())
            }
            AppError::Parse(e) => write!(f, "Error parsing file: {e}"),
            AppError::NoPresentationFile => write!(f, "No presentation file specified"),
            AppError::NotStarted => write!(f, "Presentation has not been started"),
            AppError::NotFound(what) => write!(f, "Not found: {what}"),
            AppError::Stylesheet(theme) => write!(f, "Could not build stylesheet for {theme}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({ "error": self.to_string() });
        match self {
            AppError::NoPresentationFile => HttpResponse::BadRequest().json(body),
            AppError::Parse(ParseError::NotFound(_)) | AppError::NotFound(_) => {
                HttpResponse::NotFound().json(body)
            }
            AppError::NotStarted => HttpResponse::Conflict().json(body),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e)
    }
}

impl From<actix_session::SessionGetError> for AppError {
    fn from(e: actix_session::SessionGetError) -> Self {
        AppError::Session(e.to_string())
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(e: actix_session::SessionInsertError) -> Self {
        AppError::Session(e.to_string())
    }
}

/// Render an askama template into an HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let html = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
