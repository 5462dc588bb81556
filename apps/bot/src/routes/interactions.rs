//! Interactions webhook route.
//!
//! Signature verification happens upstream of this service; payloads
//! arriving here are already authenticated. The handler decodes the raw
//! interaction into a typed event once, then hands it to the lifecycle
//! controller.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::protocol::event;
use crate::protocol::interaction::Interaction;
use crate::state::app_state::AppState;

async fn post_interaction(
    body: web::Json<Interaction>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let event = event::decode(body.into_inner())?;
    let reply = app_state.flow().handle(event).await?;
    Ok(HttpResponse::Ok().json(reply))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(post_interaction));
}
