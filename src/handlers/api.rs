use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::deck::{DeckSource, parser};
use crate::errors::AppError;

/// GET /api/slides - Parsed slides of the presented markdown file.
pub async fn slides(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let DeckSource::File(path) = &state.source else {
        return Err(AppError::NoPresentationFile);
    };

    let payload = parser::load_file(path).await?;
    Ok(HttpResponse::Ok().json(payload))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
