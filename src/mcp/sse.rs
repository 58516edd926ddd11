//! SSE sessions for listener mode.
//!
//! Each `GET /sse` opens a session: the client receives an `endpoint` event
//! naming the URL to POST messages to, and every JSON-RPC response for the
//! session is pushed back as a `message` event. Messages within one session
//! are handled sequentially by a dedicated task.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web::Bytes;
use futures::stream::{self, Stream, StreamExt};
use log::{error, info};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use uuid::Uuid;

use crate::mcp::service::McpService;

pub const MESSAGES_PATH: &str = "/messages";
const SESSION_BUFFER: usize = 32;

/// Live SSE sessions, keyed by session id.
#[derive(Default)]
pub struct SessionTable {
    inbound: RwLock<HashMap<Uuid, mpsc::Sender<String>>>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inbound.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbound.read().is_empty()
    }

    /// Register a session and return its id with the event stream to send to
    /// the client. The session is removed once the stream is dropped.
    pub fn open(
        self: &Arc<Self>,
        service: McpService,
    ) -> (Uuid, impl Stream<Item = Result<Bytes, std::io::Error>> + 'static) {
        let session_id = Uuid::new_v4();
        let (inbound_tx, mut inbound_rx) = mpsc::channel::<String>(SESSION_BUFFER);
        let (outbound_tx, outbound_rx) = mpsc::channel::<String>(SESSION_BUFFER);

        self.inbound.write().insert(session_id, inbound_tx);
        info!("SSE session {session_id} opened ({} active)", self.len());

        actix_web::rt::spawn(async move {
            while let Some(raw) = inbound_rx.recv().await {
                let Some(response) = service.handle_message(&raw).await else {
                    continue;
                };
                let payload = match serde_json::to_string(&response) {
                    Ok(payload) => payload,
                    Err(err) => {
                        error!("failed to serialize response for session {session_id}: {err}");
                        continue;
                    }
                };
                if outbound_tx.send(payload).await.is_err() {
                    break;
                }
            }
        });

        let guard = SessionGuard {
            session_id,
            table: Arc::clone(self),
        };
        let endpoint = format!("event: endpoint\ndata: {MESSAGES_PATH}?sessionId={session_id}\n\n");

        let events = stream::once(async move { Ok::<_, std::io::Error>(Bytes::from(endpoint)) })
            .chain(ReceiverStream::new(outbound_rx).map(move |payload| {
                let _session = &guard;
                Ok(Bytes::from(format!("event: message\ndata: {payload}\n\n")))
            }));

        (session_id, events)
    }

    /// Queue a raw message for a live session. Returns `false` when the
    /// session does not exist or has closed.
    pub async fn dispatch(&self, session_id: &Uuid, raw: String) -> bool {
        let sender = self.inbound.read().get(session_id).cloned();
        match sender {
            Some(sender) => sender.send(raw).await.is_ok(),
            None => false,
        }
    }

    fn close(&self, session_id: &Uuid) {
        if self.inbound.write().remove(session_id).is_some() {
            info!("SSE session {session_id} closed");
        }
    }
}

/// Removes its session from the table when the event stream is dropped.
struct SessionGuard {
    session_id: Uuid,
    table: Arc<SessionTable>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.table.close(&self.session_id);
    }
}
