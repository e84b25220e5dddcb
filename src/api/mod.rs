//! HTTP routes for Artistly

pub mod data;

use actix_web::web;

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .service(data::health)
        // Static catalog documents
        .service(web::scope("/data").configure(data::configure));
}
