use serde::{Deserialize, Serialize};

use crate::services::standings::StandingsRow;

pub const PROTOCOL_VERSION: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Topic {
    #[serde(rename_all = "snake_case")]
    Tournament { id: i64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Hello { protocol: i32 },
    Subscribe { topic: Topic },
    Unsubscribe { topic: Topic },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    HelloAck {
        protocol: i32,
    },

    Ack {
        message: &'static str,
    },

    /// A match result was recorded or changed.
    MatchUpdate {
        topic: Topic,
        match_id: i64,
        round: i32,
        status: String,
        team1_score: i32,
        team2_score: i32,
        winner_id: Option<i64>,
    },

    /// Standings recomputed after a result change.
    StandingsUpdate {
        topic: Topic,
        standings: Vec<StandingsRow>,
    },

    /// Fixtures were generated or a new round was created.
    FixturesUpdate {
        topic: Topic,
        round: i32,
        match_count: usize,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadProtocol,
    BadRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadProtocol => "bad_protocol",
            ErrorCode::BadRequest => "bad_request",
        }
    }
}
