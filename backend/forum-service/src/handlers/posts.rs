use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::handlers::see_other_home;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitPostForm {
    pub message: Option<String>,
}

/// POST /post, /api/post - submit a message
pub async fn submit_post(
    form: web::Form<SubmitPostForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    info!("Submitting post");

    let message = form
        .into_inner()
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing message form parameter".to_string()))?;

    state.posts.submit(&message).await?;

    Ok(see_other_home())
}
