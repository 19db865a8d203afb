//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod journal;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor error handling and every user and journal route.
///
/// Callers provide [`state::HttpState`] as app data.
///
/// ```
/// use actix_web::App;
/// use gratitude_journal::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(users::get_user)
        .service(users::create_user)
        .service(users::create_named_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(journal::get_entry)
        .service(journal::update_entry)
        .service(journal::delete_entry)
        .service(journal::list_entries)
        .service(journal::add_entry);
}
