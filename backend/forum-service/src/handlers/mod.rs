/// HTTP handlers for the forum
///
/// | Path | Method | Handler |
/// |---|---|---|
/// | `/` | GET | feed page |
/// | `/post`, `/api/post` | POST | submit a message |
/// | `/api/signUp` | POST | register |
/// | `/api/login` | POST | log in |
/// | `/login`, `/signup` | GET | static forms |
/// | `/static/*` | GET | static files |
///
/// Any other method on these paths is answered with 405.
pub mod auth;
pub mod feed;
pub mod pages;
pub mod posts;

pub use auth::{login, sign_up};
pub use feed::get_index;
pub use pages::{login_page, signup_page};
pub use posts::submit_post;

use actix_files::Files;
use actix_web::{http::header, web, HttpResponse};

use crate::error::{AppError, Result};
use crate::AppState;

/// Register all routes and shared state on an app
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let static_dir = state.static_dir.clone();

    cfg.app_data(state)
        .app_data(form_config())
        .service(
            web::resource("/")
                .route(web::get().to(get_index))
                .default_service(web::to(method_not_allowed)),
        );

    for path in ["/post", "/api/post"] {
        cfg.service(
            web::resource(path)
                .route(web::post().to(submit_post))
                .default_service(web::to(method_not_allowed)),
        );
    }

    cfg.service(
        web::resource("/api/signUp")
            .route(web::post().to(sign_up))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/login")
            .route(web::post().to(login))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/login")
            .route(web::get().to(login_page))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/signup")
            .route(web::get().to(signup_page))
            .default_service(web::to(method_not_allowed)),
    )
    .route("/health", web::get().to(health))
    .route("/metrics", web::get().to(crate::metrics::serve_metrics))
    .service(Files::new("/static", static_dir));
}

/// Malformed form bodies are a client error with a fixed message
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejecting malformed form");
        AppError::BadRequest("Malformed form parameters".to_string()).into()
    })
}

async fn method_not_allowed() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

pub(crate) fn see_other_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /health - storage round-trip check
async fn health(state: web::Data<AppState>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": crate::SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "page_counter": state.counter.current(),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("SQLite query failed: {}", e),
            "service": crate::SERVICE_NAME,
        })),
    }
}
