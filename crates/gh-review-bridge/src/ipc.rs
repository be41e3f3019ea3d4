//! Unix socket transport to the host process
//!
//! Each invoke opens a fresh connection, writes one JSON request line and
//! reads one JSON response line:
//!
//! ```text
//! → {"method":"poll_device_flow","params":{"device_code":"..."}}
//! ← {"result":{"authenticated":false,"username":null}}
//! ← {"error":"authorization_pending"}
//! ```

use crate::invoke::{Invoke, InvokeError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

#[derive(Debug, Serialize)]
struct IpcRequest<'a> {
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct IpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Newline-delimited JSON transport over a Unix domain socket
#[derive(Debug, Clone)]
pub struct IpcTransport {
    socket_path: PathBuf,
}

impl IpcTransport {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn round_trip(&self, request_line: &str) -> std::io::Result<Option<String>> {
        let mut stream = UnixStream::connect(&self.socket_path).await?;
        stream.write_all(request_line.as_bytes()).await?;
        stream.flush().await?;

        let mut lines = BufReader::new(stream).lines();
        lines.next_line().await
    }
}

#[async_trait]
impl Invoke for IpcTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError> {
        let request = IpcRequest {
            method: command,
            params: args,
        };
        let mut request_line = serde_json::to_string(&request)
            .map_err(|e| InvokeError::Transport(format!("Failed to encode request: {}", e)))?;
        request_line.push('\n');

        let response_line = self
            .round_trip(&request_line)
            .await
            .map_err(|e| {
                InvokeError::Transport(format!(
                    "Failed to reach host at {}: {}",
                    self.socket_path.display(),
                    e
                ))
            })?
            .ok_or_else(|| InvokeError::Transport("Host closed connection without reply".to_string()))?;

        let response: IpcResponse = serde_json::from_str(&response_line)
            .map_err(|e| InvokeError::Transport(format!("Malformed host reply: {}", e)))?;

        match response.error {
            Some(payload) if !payload.is_null() => Err(InvokeError::Rejected(payload)),
            _ => Ok(response.result.unwrap_or(Value::Null)),
        }
    }
}
