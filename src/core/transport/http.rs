//! HTTP transport implementation.
//!
//! Two inbound surfaces share the same JSON-RPC dispatch:
//! - `POST /mcp` (configurable) - plain JSON-RPC over POST for standard
//!   HTTP clients (curl, agents speaking streamable HTTP).
//! - `GET /sse` + `POST /sse/message` - SSE sessions: the GET opens a stream
//!   whose first event carries the session's message endpoint, and POSTs to
//!   that endpoint are answered over the stream.
//!
//! Any other path returns HTTP 404 with body "Not found".

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use futures::{Stream, StreamExt, stream};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Open SSE sessions, keyed by session id. Each entry is the sending half
/// of the session's event stream.
type SessionMap = Arc<RwLock<HashMap<String, mpsc::Sender<JsonRpcResponse>>>>;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Open SSE sessions.
    sessions: SessionMap,
}

impl AppState {
    /// Create state for the given server.
    pub fn new(server: McpServer) -> Self {
        Self {
            server,
            sessions: SessionMap::default(),
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let app = build_router(AppState::new(server), &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → SSE:      GET /sse");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router: JSON-RPC endpoint, SSE session endpoints, and a
/// 404 fallback for everything else.
fn build_router(state: AppState, config: &HttpConfig) -> Router {
    let mut app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/sse", get(handle_sse))
        .route("/sse/message", post(handle_sse_message))
        .fallback(handle_not_found)
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Fallback for unrouted paths.
async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Handle JSON-RPC requests over plain POST.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Open an SSE session.
///
/// The first event names the endpoint the client must POST its JSON-RPC
/// requests to; every response is then delivered as a "message" event.
async fn handle_sse(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let (tx, rx) = mpsc::channel::<JsonRpcResponse>(16);

    state.sessions.write().await.insert(session_id.clone(), tx);
    info!("SSE session opened: {}", session_id);

    let endpoint = format!("/sse/message?sessionId={}", session_id);
    let initial = stream::once(async move {
        Ok::<_, Infallible>(Event::default().event("endpoint").data(endpoint))
    });

    // When the client disconnects the receiver is dropped; the session entry
    // is removed on the next failed send in handle_sse_message.
    let messages = stream::unfold(rx, |mut rx| async move {
        let response = rx.recv().await?;
        let data = serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        Some((
            Ok::<_, Infallible>(Event::default().event("message").data(data)),
            rx,
        ))
    });

    Sse::new(initial.chain(messages)).keep_alive(KeepAlive::default())
}

/// Query parameters for the SSE message endpoint.
#[derive(Debug, Deserialize)]
struct SseMessageQuery {
    #[serde(rename = "sessionId")]
    session_id: String,
}

/// Handle a JSON-RPC request for an open SSE session.
///
/// The response travels over the session's event stream; the POST itself is
/// acknowledged with 202 Accepted.
#[instrument(skip_all, fields(session_id = %query.session_id, method))]
async fn handle_sse_message(
    State(state): State<AppState>,
    Query(query): Query<SseMessageQuery>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);

    let tx = state.sessions.read().await.get(&query.session_id).cloned();
    let Some(tx) = tx else {
        warn!("Unknown SSE session: {}", query.session_id);
        return (StatusCode::NOT_FOUND, "Session not found");
    };

    let response = process_request(&state, request).await;

    if tx.send(response).await.is_err() {
        state.sessions.write().await.remove(&query.session_id);
        warn!("SSE session closed: {}", query.session_id);
        return (StatusCode::GONE, "Session closed");
    }

    (StatusCode::ACCEPTED, "Accepted")
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        // Initialize the MCP session
        "initialize" => handle_initialize(state, request),

        // List available tools
        "tools/list" => handle_tools_list(state, request),

        // Call a tool
        "tools/call" => handle_tools_call(state, request).await,

        // Notifications (no response needed for stateless HTTP)
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        // Unknown method
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = serde_json::json!({
        "protocolVersion": "2024-11-05",
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": "Telegram notification server. Use send_telegram_message to deliver \
                         a message to a Telegram chat via the Bot API."
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools = state.server.list_tools();
    let result = serde_json::json!({
        "tools": tools
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}
