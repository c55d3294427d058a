//! Match detail and result submission routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::Bracket;
use crate::entities::matches::MatchStatus;
use crate::error::AppError;
use crate::repos::matches::Match;
use crate::repos::sub_matches::{self, SubMatch};
use crate::services::match_results::{self, SubMatchInput, SubmitResultInput};
use crate::services::standings::{self, StandingsRow};
use crate::state::app_state::AppState;
use crate::ws::protocol::{ServerMsg, Topic};

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub round: i16,
    pub round_name: String,
    pub match_number: i32,
    pub bracket: Bracket,
    pub team1_id: i64,
    pub team2_id: i64,
    pub team1_score: i32,
    pub team2_score: i32,
    pub team1_player_goals: Option<i32>,
    pub team2_player_goals: Option<i32>,
    pub winner_id: Option<i64>,
    pub status: MatchStatus,
    pub scheduled_date: Option<time::OffsetDateTime>,
    pub venue: Option<String>,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            round: m.round,
            round_name: m.round_name,
            match_number: m.match_number,
            bracket: m.bracket,
            team1_id: m.team1_id,
            team2_id: m.team2_id,
            team1_score: m.team1_score,
            team2_score: m.team2_score,
            team1_player_goals: m.team1_player_goals,
            team2_player_goals: m.team2_player_goals,
            winner_id: m.winner_id,
            status: m.status,
            scheduled_date: m.scheduled_date,
            venue: m.venue,
        }
    }
}

#[derive(Debug, Serialize)]
struct SubMatchResponse {
    id: i64,
    match_order: i16,
    team1_player_id: i64,
    team2_player_id: i64,
    team1_player_goals: i32,
    team2_player_goals: i32,
}

impl From<SubMatch> for SubMatchResponse {
    fn from(s: SubMatch) -> Self {
        Self {
            id: s.id,
            match_order: s.match_order,
            team1_player_id: s.team1_player_id,
            team2_player_id: s.team2_player_id,
            team1_player_goals: s.team1_player_goals,
            team2_player_goals: s.team2_player_goals,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchDetailResponse {
    #[serde(flatten)]
    base: MatchResponse,
    sub_matches: Vec<SubMatchResponse>,
}

#[derive(Debug, Deserialize)]
struct SubMatchEntry {
    team1_player_id: i64,
    team2_player_id: i64,
    team1_goals: i32,
    team2_goals: i32,
}

#[derive(Debug, Deserialize, Default)]
struct SubmitResultRequest {
    team1_score: Option<i32>,
    team2_score: Option<i32>,
    team1_player_goals: Option<i32>,
    team2_player_goals: Option<i32>,
    sub_matches: Option<Vec<SubMatchEntry>>,
}

/// GET /api/matches/{match_id}
async fn get_match(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    let (m, subs) = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let m = crate::repos::matches::require_match(txn, match_id).await?;
            let subs = sub_matches::list_by_match(txn, match_id).await?;
            Ok((m, subs))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MatchDetailResponse {
        base: MatchResponse::from(m),
        sub_matches: subs.into_iter().map(SubMatchResponse::from).collect(),
    }))
}

/// POST /api/matches/{match_id}/result
///
/// Records the result, recomputes standings, and fans both out to
/// websocket subscribers after the transaction commits.
async fn submit_result(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SubmitResultRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    let req = body.into_inner();

    let input = SubmitResultInput {
        team1_score: req.team1_score,
        team2_score: req.team2_score,
        team1_player_goals: req.team1_player_goals,
        team2_player_goals: req.team2_player_goals,
        sub_matches: req.sub_matches.map(|subs| {
            subs.into_iter()
                .map(|s| SubMatchInput {
                    team1_player_id: s.team1_player_id,
                    team2_player_id: s.team2_player_id,
                    team1_goals: s.team1_goals,
                    team2_goals: s.team2_goals,
                })
                .collect()
        }),
    };

    let (updated, table) = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let updated = match_results::submit_result(txn, match_id, input).await?;
            let table =
                standings::standings_for_tournament(txn, updated.tournament_id).await?;
            Ok((updated, table))
        })
    })
    .await?;

    // Broadcast only after the transaction committed
    broadcast_result(&app_state, &updated, table);

    Ok(HttpResponse::Ok().json(MatchResponse::from(updated)))
}

fn broadcast_result(app_state: &AppState, updated: &Match, table: Vec<StandingsRow>) {
    let registry = app_state.registry();
    let topic = Topic::Tournament {
        id: updated.tournament_id,
    };

    registry.broadcast(
        updated.tournament_id,
        ServerMsg::MatchUpdate {
            topic: topic.clone(),
            match_id: updated.id,
            round: updated.round as i32,
            status: "completed".to_string(),
            team1_score: updated.team1_score,
            team2_score: updated.team2_score,
            winner_id: updated.winner_id,
        },
    );
    registry.broadcast(
        updated.tournament_id,
        ServerMsg::StandingsUpdate {
            topic,
            standings: table,
        },
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/matches/{match_id}").route(web::get().to(get_match)));
    cfg.service(
        web::resource("/api/matches/{match_id}/result").route(web::post().to(submit_result)),
    );
}
