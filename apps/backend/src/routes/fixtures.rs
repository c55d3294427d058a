//! Fixture generation, round advancement and standings routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::matches::Match;
use crate::routes::matches::MatchResponse;
use crate::services::fixtures::{self, FixtureOptions};
use crate::services::standings;
use crate::state::app_state::AppState;
use crate::ws::protocol::{ServerMsg, Topic};

#[derive(Debug, Deserialize, Default)]
struct GenerateFixturesRequest {
    seed: Option<u64>,
    group_size: Option<usize>,
}

/// POST /api/tournaments/{tournament_id}/fixtures
///
/// Body is optional; an empty POST generates with defaults.
async fn generate_fixtures(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: Option<web::Json<GenerateFixturesRequest>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let req = body.map(web::Json::into_inner).unwrap_or_default();
    let options = FixtureOptions {
        seed: req.seed,
        group_size: req.group_size,
    };

    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { fixtures::generate(txn, tournament_id, options).await })
    })
    .await?;

    broadcast_fixtures(&app_state, tournament_id, &created);

    let body: Vec<MatchResponse> = created.into_iter().map(MatchResponse::from).collect();
    Ok(HttpResponse::Created().json(body))
}

/// POST /api/tournaments/{tournament_id}/rounds/advance
async fn advance_round(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();

    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { fixtures::advance_round(txn, tournament_id).await })
    })
    .await?;

    broadcast_fixtures(&app_state, tournament_id, &created);

    let body: Vec<MatchResponse> = created.into_iter().map(MatchResponse::from).collect();
    Ok(HttpResponse::Created().json(body))
}

/// GET /api/tournaments/{tournament_id}/fixtures
async fn list_fixtures(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let matches = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            crate::repos::tournaments::require_tournament(txn, tournament_id).await?;
            Ok(crate::repos::matches::list_by_tournament(txn, tournament_id).await?)
        })
    })
    .await?;

    let body: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/tournaments/{tournament_id}/standings
async fn get_standings(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let table = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            crate::repos::tournaments::require_tournament(txn, tournament_id).await?;
            standings::standings_for_tournament(txn, tournament_id).await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(table))
}

fn broadcast_fixtures(app_state: &AppState, tournament_id: i64, created: &[Match]) {
    let round = created.iter().map(|m| m.round).max().unwrap_or(0);
    app_state.registry().broadcast(
        tournament_id,
        ServerMsg::FixturesUpdate {
            topic: Topic::Tournament { id: tournament_id },
            round: round as i32,
            match_count: created.len(),
        },
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}/fixtures")
            .route(web::post().to(generate_fixtures))
            .route(web::get().to(list_fixtures)),
    );
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}/rounds/advance")
            .route(web::post().to(advance_round)),
    );
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}/standings")
            .route(web::get().to(get_standings)),
    );
}
