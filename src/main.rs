use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use staffdesk::api::ApiClient;
use staffdesk::auth;
use staffdesk::config::Config;
use staffdesk::handlers;
use staffdesk::state::SharedStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Using registry service at {}", config.api_base_url);

    let api = web::Data::new(ApiClient::new(config.api_base_url.clone()));
    let store = web::Data::new(SharedStore::default());

    // Session encryption key — load from SESSION_KEY env var so sign-ins
    // survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(api.clone())
            .app_data(store.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Root redirect
            .route("/", web::get().to(|| async {
                actix_web::HttpResponse::SeeOther()
                    .insert_header(("Location", "/dashboard"))
                    .finish()
            }))
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/dashboard", web::get().to(handlers::dashboard::index))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    .route("/export", web::get().to(handlers::export_handlers::download))
                    // Candidate moderation
                    .route("/candidates/{id}", web::get().to(handlers::candidate_handlers::detail))
                    .route("/candidates/{id}/status", web::post().to(handlers::candidate_handlers::update_status))
                    .route("/candidates/{id}/delete", web::post().to(handlers::candidate_handlers::delete))
                    // Company moderation
                    .route("/companies/{id}", web::get().to(handlers::company_handlers::detail))
                    .route("/companies/{id}/status", web::post().to(handlers::company_handlers::update_status))
                    .route("/companies/{id}/delete", web::post().to(handlers::company_handlers::delete))
                    // Admin account management (super admin only)
                    .route("/admins", web::get().to(handlers::admin_handlers::list))
                    .route("/admins", web::post().to(handlers::admin_handlers::create))
                    .route("/admins/{id}/toggle", web::post().to(handlers::admin_handlers::toggle_active))
                    .route("/admins/{id}/delete", web::post().to(handlers::admin_handlers::delete))
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
