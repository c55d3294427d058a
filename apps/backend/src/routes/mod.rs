use actix_web::web;

pub mod fixtures;
pub mod health;
pub mod matches;
pub mod players;
pub mod realtime;
pub mod teams;
pub mod tournaments;

/// Register all application routes.
///
/// Used by `main.rs` and by tests that spin up an in-memory app, so the
/// two always agree on the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(tournaments::configure_routes)
        .configure(teams::configure_routes)
        .configure(players::configure_routes)
        .configure(fixtures::configure_routes)
        .configure(matches::configure_routes)
        .configure(realtime::configure_routes);
}
