//! Template routes
//!
//! One resource, one handler. Dispatch order:
//! 1. an `id` query value longer than one byte selects a single-record lookup, whatever the method
//! 2. `GET` lists every template
//! 3. `POST` stores the template in the body and echoes its id
//! 4. anything else is `405` with an empty body

use appcreator::TemplateId;
use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::{debug, error, info};

use crate::{
    AppState,
    error::{ApiError, Result},
};

/// Create template routes
pub fn router() -> Router<AppState> {
    Router::new().route("/templates", any(handle_templates))
}

async fn handle_templates(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response> {
    if let Some(id) = lookup_id(&params) {
        return get_template_by_id(&state, id.into()).await;
    }

    match method {
        Method::GET => list_templates(&state).await,
        Method::POST => add_template(&state, &body).await,
        _ => Ok(StatusCode::METHOD_NOT_ALLOWED.into_response()),
    }
}

/// First `id` query value, if it is long enough to be a lookup
fn lookup_id(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .filter(|id| id.len() > 1)
}

async fn list_templates(state: &AppState) -> Result<Response> {
    debug!("Listing templates");

    let templates = state.store.get_all().await.map_err(|e| {
        error!("Failed to list templates: {}", e);
        ApiError::store("Unable to fetch templates from database.", e)
    })?;

    json_response(appcreator::encode(&templates)?)
}

async fn get_template_by_id(state: &AppState, id: TemplateId) -> Result<Response> {
    debug!("Getting template: {}", id);

    let template = state.store.get_by_id(&id).await.map_err(|e| {
        error!("Failed to fetch template {}: {}", id, e);
        ApiError::store("Error fetching template from database.", e)
    })?;

    json_response(appcreator::encode(&template)?)
}

async fn add_template(state: &AppState, body: &[u8]) -> Result<Response> {
    let template = appcreator::decode(body).map_err(|e| {
        debug!("Rejected template payload: {}", e);
        ApiError::from(e)
    })?;

    let key = state.store.put(&template).await.map_err(|e| {
        error!("Failed to save template {}: {}", template.id, e);
        ApiError::store("Failed to save template in the database.", e)
    })?;

    info!("Template added to datastore: {} ({})", key, template.name);

    Ok((StatusCode::OK, key.0).into_response())
}

fn json_response(body: Vec<u8>) -> Result<Response> {
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
