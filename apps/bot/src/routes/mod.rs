use actix_web::web;

pub mod health;
pub mod interactions;

/// Configure application routes for the server and for test contexts.
///
/// In production, `main.rs` wires these into an `App` together with the
/// trace and logging middleware; tests register the same paths directly so
/// endpoint behavior can be exercised without a listening socket.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Interactions webhook: /interactions
    cfg.service(web::scope("/interactions").configure(interactions::configure_routes));
}
