use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::app_state::AppState;
use crate::ws::hub::{LiveEvent, TournamentSessionRegistry};
use crate::ws::protocol::{ClientMsg, ErrorCode, ServerMsg, Topic, PROTOCOL_VERSION};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(conn_id, app_state.registry());
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    registry: Arc<TournamentSessionRegistry>,

    /// tournament id -> registration token
    subscriptions: HashMap<i64, Uuid>,

    last_heartbeat: Instant,
    hello_done: bool,
}

impl WsSession {
    fn new(conn_id: Uuid, registry: Arc<TournamentSessionRegistry>) -> Self {
        Self {
            conn_id,
            registry,
            subscriptions: HashMap::new(),
            last_heartbeat: Instant::now(),
            hello_done: false,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code,
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn unregister_all(&mut self) {
        for (tournament_id, token) in self.subscriptions.drain() {
            self.registry.unregister(tournament_id, token);
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.unregister_all();
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };

                match cmd {
                    ClientMsg::Hello { protocol } => {
                        if protocol != PROTOCOL_VERSION {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadProtocol,
                                "Unsupported protocol version",
                            );
                            return;
                        }
                        self.hello_done = true;
                        Self::send_json(
                            ctx,
                            &ServerMsg::HelloAck {
                                protocol: PROTOCOL_VERSION,
                            },
                        );
                    }

                    ClientMsg::Subscribe { topic } => {
                        if !self.hello_done {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadRequest,
                                "Must send hello first",
                            );
                            return;
                        }

                        let Topic::Tournament { id: tournament_id } = topic;

                        // Re-subscribing to the same topic is idempotent
                        if !self.subscriptions.contains_key(&tournament_id) {
                            let recipient = ctx.address().recipient::<LiveEvent>();
                            let token = self.registry.register(tournament_id, recipient);
                            self.subscriptions.insert(tournament_id, token);
                        }

                        Self::send_json(
                            ctx,
                            &ServerMsg::Ack {
                                message: "subscribed",
                            },
                        );
                    }

                    ClientMsg::Unsubscribe { topic } => {
                        if !self.hello_done {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadRequest,
                                "Must send hello first",
                            );
                            return;
                        }
                        let Topic::Tournament { id: tournament_id } = topic;
                        if let Some(token) = self.subscriptions.remove(&tournament_id) {
                            self.registry.unregister(tournament_id, token);
                        }
                        Self::send_json(
                            ctx,
                            &ServerMsg::Ack {
                                message: "unsubscribed",
                            },
                        );
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<LiveEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: LiveEvent, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
