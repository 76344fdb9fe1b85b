use actix_files::NamedFile;
use actix_web::web;

use crate::AppState;

/// GET /login
pub async fn login_page(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(state.static_dir.join("login.html")).await?)
}

/// GET /signup
pub async fn signup_page(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(state.static_dir.join("signup.html")).await?)
}
