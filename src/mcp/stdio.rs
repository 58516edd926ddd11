//! STDIO transport - newline-delimited JSON-RPC.
//!
//! Requests are handled one at a time in arrival order. Logging goes to
//! stderr, so stdout carries protocol traffic only.

use std::io;

use futures::StreamExt;
use log::{info, warn};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};

use crate::mcp::rpc::OutboundResponse;
use crate::mcp::service::McpService;

/// Upper bound for a single inbound line.
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// Serve the service on the process's stdin/stdout until stdin closes.
pub async fn run(service: McpService) -> io::Result<()> {
    info!("starting in STDIO mode");
    serve(&service, tokio::io::stdin(), tokio::io::stdout()).await?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Serve the service over any line-oriented reader/writer pair.
pub async fn serve<R, W>(service: &McpService, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_BYTES));

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(LinesCodecError::MaxLineLengthExceeded) => {
                warn!("dropping message longer than {MAX_LINE_BYTES} bytes");
                let response = OutboundResponse::parse_error("Message too large");
                write_response(&mut writer, &response).await?;
                continue;
            }
            Err(LinesCodecError::Io(err)) => return Err(err),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(response) = service.handle_message(trimmed).await {
            write_response(&mut writer, &response).await?;
        }
    }

    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &OutboundResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = serde_json::to_vec(response).map_err(io::Error::other)?;
    payload.push(b'\n');
    writer.write_all(&payload).await?;
    writer.flush().await
}
