//! The real-time event stream: websocket frames in, decoded events out.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use super::ApiError;
use crate::event::ChatEvent;

/// Connect to the RTM websocket and forward every decoded event into
/// `events`. Malformed frames are dropped with a debug log. Returns when the
/// socket closes or the receiving side is gone.
pub async fn run(url: String, events: mpsc::Sender<ChatEvent>) -> Result<(), ApiError> {
    let (socket, _) = connect_async(url.as_str()).await?;
    tracing::info!("listening on slack messages");
    let (_, mut frames) = socket.split();

    while let Some(frame) = frames.next().await {
        let text = match frame {
            Ok(WsMessage::Text(text)) => text,
            Ok(WsMessage::Close(_)) => break,
            Ok(_) => continue,
            Err(err) => {
                tracing::warn!(error = %err, "websocket read failed");
                break;
            }
        };
        match ChatEvent::decode(&text) {
            Ok(event) => {
                if events.send(event).await.is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "dropping malformed frame");
            }
        }
    }
    Ok(())
}
