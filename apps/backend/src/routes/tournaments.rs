//! Tournament CRUD routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::tournaments::{Tournament, TournamentUpdate};
use crate::services::tournaments as tournament_service;
use crate::services::tournaments::CreateTournamentInput;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateTournamentRequest {
    name: String,
    sport: Option<String>,
    format: String,
    scoring_system: Option<String>,
    location: Option<String>,
    start_date: Option<Date>,
}

#[derive(Debug, Deserialize)]
struct UpdateTournamentRequest {
    name: Option<String>,
    sport: Option<String>,
    location: Option<String>,
    start_date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub format: String,
    pub scoring_system: String,
    pub location: Option<String>,
    pub start_date: Option<Date>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            sport: t.sport,
            format: t.format.as_str().to_string(),
            scoring_system: t.scoring_system.as_str().to_string(),
            location: t.location,
            start_date: t.start_date,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// POST /api/tournaments
async fn create_tournament(
    http_req: HttpRequest,
    body: web::Json<CreateTournamentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            tournament_service::create_tournament(
                txn,
                CreateTournamentInput {
                    name: req.name,
                    sport: req.sport,
                    format: req.format,
                    scoring_system: req.scoring_system,
                    location: req.location,
                    start_date: req.start_date,
                },
            )
            .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(TournamentResponse::from(tournament)))
}

/// GET /api/tournaments
async fn list_tournaments(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournaments = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournament_service::list_tournaments(txn).await })
    })
    .await?;

    let body: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/tournaments/{tournament_id}
async fn get_tournament(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournament_service::get_tournament(txn, tournament_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TournamentResponse::from(tournament)))
}

/// PATCH /api/tournaments/{tournament_id}
async fn update_tournament(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateTournamentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let req = body.into_inner();
    let dto = TournamentUpdate {
        name: req.name,
        sport: req.sport,
        location: req.location.map(Some),
        start_date: req.start_date.map(Some),
    };

    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(
            async move { tournament_service::update_tournament(txn, tournament_id, dto).await },
        )
    })
    .await?;

    Ok(HttpResponse::Ok().json(TournamentResponse::from(tournament)))
}

/// DELETE /api/tournaments/{tournament_id}
async fn delete_tournament(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournament_service::delete_tournament(txn, tournament_id).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tournaments")
            .route(web::post().to(create_tournament))
            .route(web::get().to(list_tournaments)),
    );
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}")
            .route(web::get().to(get_tournament))
            .route(web::patch().to(update_tournament))
            .route(web::delete().to(delete_tournament)),
    );
}
