use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::handlers::see_other_home;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsForm {
    fn into_parts(self) -> Result<(String, String)> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok((username, password))
            }
            _ => Err(AppError::BadRequest(
                "Missing username or password form parameter".to_string(),
            )),
        }
    }
}

/// POST /api/signUp
pub async fn sign_up(
    form: web::Form<CredentialsForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    info!("Signing up");

    let (username, password) = form.into_inner().into_parts()?;
    state.auth.register(&username, &password).await?;

    Ok(see_other_home())
}

/// POST /api/login
pub async fn login(
    form: web::Form<CredentialsForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    info!("Logging in");

    let (username, password) = form.into_inner().into_parts()?;
    state.auth.login(&username, &password).await?;

    Ok(see_other_home())
}
