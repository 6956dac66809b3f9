use anyhow::{Context, Result, anyhow};
use common::{ClientCommand, ServerEvent};
use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use tracing::{debug, warn};
use url::Url;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// The viewer's half of the message channel. One connection per session,
/// created at startup and owned until the program exits.
pub struct Transport {
    writer: WsSink,
    reader_task: JoinHandle<()>,
}

impl Transport {
    /// Connects to the server and starts pumping inbound frames into the
    /// returned channel. A closed channel means the connection dropped.
    pub async fn connect(base: &Url) -> Result<(Transport, mpsc::UnboundedReceiver<ServerEvent>)> {
        let ws_url = websocket_url(base)?;
        let (stream, _) = connect_async(ws_url.as_str())
            .await
            .with_context(|| format!("Failed to connect to websocket {ws_url}"))?;
        let (writer, mut reader) = stream.split();

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let reader_task = tokio::spawn(async move {
            while let Some(msg) = reader.next().await {
                match msg {
                    Ok(Message::Text(text)) => match ServerEvent::from_frame(&text) {
                        Ok(event) => {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(err) => debug!("ignoring unparsed server frame: {err:#}"),
                    },
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(err) => {
                        warn!("websocket read failed: {err}");
                        break;
                    }
                }
            }
        });

        Ok((
            Transport {
                writer,
                reader_task,
            },
            event_rx,
        ))
    }

    /// Fire-and-forget: a command either reaches the server or the connection
    /// is gone. There is no retry; the user repeats the action if they care.
    pub async fn send(&mut self, command: &ClientCommand) -> Result<()> {
        let frame = command.to_frame()?;
        self.writer
            .send(Message::Text(frame.into()))
            .await
            .context("websocket send failed")
    }

    pub async fn close(mut self) {
        let _ = self.writer.send(Message::Close(None)).await;
        self.reader_task.abort();
    }
}

/// Derives the websocket endpoint from the server's base HTTP URL.
pub fn websocket_url(base: &Url) -> Result<Url> {
    let mut ws_url = base.clone();
    let scheme = match base.scheme() {
        "https" | "wss" => "wss",
        _ => "ws",
    };
    ws_url
        .set_scheme(scheme)
        .map_err(|_| anyhow!("Failed to set websocket scheme"))?;
    ws_url.set_path("/ws");
    ws_url.set_query(None);
    Ok(ws_url)
}

pub fn normalize_base_url(raw: &str) -> Result<Url> {
    // A bare "host:port" parses as a URL whose scheme is the host name, so
    // only accept schemes we can actually speak.
    let parsed = Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https" | "ws" | "wss"));
    match parsed {
        Some(url) => Ok(url),
        None => Url::parse(&format!("http://{raw}")).context("Invalid base URL"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn websocket_url_rewrites_scheme_and_path() {
        let base = normalize_base_url("http://localhost:8080").unwrap();
        assert_eq!(websocket_url(&base).unwrap().as_str(), "ws://localhost:8080/ws");

        let base = normalize_base_url("https://play.example.com/lobby?x=1").unwrap();
        assert_eq!(
            websocket_url(&base).unwrap().as_str(),
            "wss://play.example.com/ws"
        );
    }

    #[test]
    fn bare_host_defaults_to_http() {
        let base = normalize_base_url("localhost:8080").unwrap();
        assert_eq!(base.scheme(), "http");
    }
}
