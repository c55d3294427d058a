//! WebSocket upgrade route.

use actix_web::web;

use crate::ws::session;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/ws").route(web::get().to(session::upgrade)));
}
