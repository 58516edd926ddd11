//! MCP HTTP/SSE handlers for Actix-Web (listener mode).

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use log::{debug, info};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::mcp::service::McpService;
use crate::mcp::sse::{SessionTable, MESSAGES_PATH};

/// Shared state for the listener.
pub struct McpState {
    pub service: McpService,
    pub sessions: Arc<SessionTable>,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self {
            service,
            sessions: Arc::new(SessionTable::new()),
        }
    }
}

/// GET /health
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "server": "buildez-mcp" }))
}

/// GET|POST /sse and /mcp - open an event-stream session.
pub async fn sse_handler(state: web::Data<Arc<McpState>>) -> impl Responder {
    let (session_id, events) = state.sessions.open(state.service.clone());
    info!("new SSE connection, session {session_id}");

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header((header::CONNECTION, "keep-alive"))
        .streaming(events)
}

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// POST /messages - always accepted.
///
/// The body is forwarded only when `sessionId` names a live session; the
/// JSON-RPC response is then delivered over that session's stream.
pub async fn messages_handler(
    state: web::Data<Arc<McpState>>,
    query: web::Query<MessageQuery>,
    body: web::Bytes,
) -> impl Responder {
    let session_id = query
        .session_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok());

    match (session_id, String::from_utf8(body.to_vec())) {
        (Some(session_id), Ok(raw)) => {
            if !state.sessions.dispatch(&session_id, raw).await {
                debug!("message for unknown session {session_id} ignored");
            }
        }
        _ => debug!("message without a live session ignored"),
    }

    HttpResponse::Accepted().finish()
}

/// Fallback - static service descriptor.
pub async fn descriptor_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "Buildez MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "sse": "/sse",
        },
        "documentation": "https://buildez.ai/docs/mcp",
    }))
}

/// Permissive CORS: any origin, `GET`/`POST`/`OPTIONS`, `Content-Type`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

/// Configure MCP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_handler))
            .default_service(web::to(descriptor_handler)),
    );

    for path in ["/sse", "/mcp"] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(sse_handler))
                .route(web::post().to(sse_handler))
                .default_service(web::to(descriptor_handler)),
        );
    }

    cfg.service(
        web::resource(MESSAGES_PATH)
            .route(web::post().to(messages_handler))
            .default_service(web::to(descriptor_handler)),
    );
}

/// Run the HTTP listener until shutdown.
pub async fn serve(service: McpService, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(Arc::new(McpState::new(service)));

    info!("starting HTTP server on port {port}");
    info!("SSE endpoint: http://localhost:{port}/sse");

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(state.clone())
            .configure(config)
            .default_service(web::to(descriptor_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
