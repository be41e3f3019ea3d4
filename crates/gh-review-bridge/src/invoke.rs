//! JSON invoke adapter
//!
//! The host speaks untyped JSON: `invoke(name, args) -> result | error`.
//! [`InvokeBridge`] wraps any such transport and exposes the typed
//! [`CommandBridge`] interface on top of it.

use crate::bridge::{commands, CommandBridge};
use crate::error::BridgeError;
use crate::types::{AuthStatus, DeviceFlowInit, PullRequestWithChecks};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure of a raw invoke call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
    /// The host handled the command and returned an error payload
    #[error("command rejected: {0}")]
    Rejected(Value),

    /// The request never reached the host, or the reply was lost
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Raw, untyped command transport
#[async_trait]
pub trait Invoke: Send + Sync {
    /// Send `command` with `args` and wait for the host's reply
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError>;
}

/// [`CommandBridge`] over an untyped [`Invoke`] transport
#[derive(Debug, Clone)]
pub struct InvokeBridge<I> {
    transport: I,
}

impl<I: Invoke> InvokeBridge<I> {
    pub fn new(transport: I) -> Self {
        Self { transport }
    }

    /// Get a reference to the underlying transport
    pub fn transport(&self) -> &I {
        &self.transport
    }

    async fn call<T: DeserializeOwned>(&self, command: &str, args: Value) -> Result<T, BridgeError> {
        log::debug!("Bridge: invoking {}", command);
        let value = self
            .transport
            .invoke(command, args)
            .await
            .map_err(|e| match e {
                InvokeError::Rejected(payload) => BridgeError::from_rejection(command, &payload),
                InvokeError::Transport(message) => BridgeError::Transport(message),
            })?;

        serde_json::from_value(value).map_err(|e| BridgeError::Decode {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<I: Invoke> CommandBridge for InvokeBridge<I> {
    async fn check_auth_status(&self) -> Result<AuthStatus, BridgeError> {
        self.call(commands::CHECK_AUTH_STATUS, json!({})).await
    }

    async fn start_device_flow(&self) -> Result<DeviceFlowInit, BridgeError> {
        self.call(commands::START_DEVICE_FLOW, json!({})).await
    }

    async fn poll_device_flow(&self, device_code: &str) -> Result<AuthStatus, BridgeError> {
        self.call(
            commands::POLL_DEVICE_FLOW,
            json!({ "device_code": device_code }),
        )
        .await
    }

    async fn logout(&self) -> Result<(), BridgeError> {
        // The host replies with null (or nothing); only failure matters here
        let _: Value = self.call(commands::LOGOUT, json!({})).await?;
        Ok(())
    }

    async fn fetch_review_requested_prs(&self) -> Result<Vec<PullRequestWithChecks>, BridgeError> {
        self.call(commands::FETCH_REVIEW_REQUESTED_PRS, json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Replies from a fixed table and records every request
    #[derive(Default)]
    struct TableTransport {
        replies: HashMap<&'static str, Result<Value, InvokeError>>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl TableTransport {
        fn reply(mut self, command: &'static str, reply: Result<Value, InvokeError>) -> Self {
            self.replies.insert(command, reply);
            self
        }
    }

    #[async_trait]
    impl Invoke for TableTransport {
        async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError> {
            self.requests
                .lock()
                .unwrap()
                .push((command.to_string(), args));
            self.replies
                .get(command)
                .cloned()
                .unwrap_or_else(|| Err(InvokeError::Transport("no reply".to_string())))
        }
    }

    #[tokio::test]
    async fn test_poll_sends_device_code() {
        let transport = TableTransport::default().reply(
            commands::POLL_DEVICE_FLOW,
            Ok(json!({"authenticated": true, "username": "alice"})),
        );
        let bridge = InvokeBridge::new(transport);

        let status = bridge.poll_device_flow("dc1").await.unwrap();
        assert_eq!(status, AuthStatus::logged_in("alice"));

        let requests = bridge.transport().requests.lock().unwrap();
        assert_eq!(requests[0].0, "poll_device_flow");
        assert_eq!(requests[0].1, json!({"device_code": "dc1"}));
    }

    #[tokio::test]
    async fn test_pending_rejection_is_classified() {
        let transport = TableTransport::default().reply(
            commands::POLL_DEVICE_FLOW,
            Err(InvokeError::Rejected(json!("authorization_pending"))),
        );
        let bridge = InvokeBridge::new(transport);

        let err = bridge.poll_device_flow("dc1").await.unwrap_err();
        assert_eq!(err, BridgeError::AuthorizationPending);
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_transport() {
        let bridge = InvokeBridge::new(TableTransport::default());

        let err = bridge.check_auth_status().await.unwrap_err();
        assert_eq!(err, BridgeError::Transport("no reply".to_string()));
    }

    #[tokio::test]
    async fn test_mismatched_payload_is_decode_error() {
        let transport = TableTransport::default()
            .reply(commands::START_DEVICE_FLOW, Ok(json!({"user_code": "ABCD"})));
        let bridge = InvokeBridge::new(transport);

        let err = bridge.start_device_flow().await.unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Decode { ref command, .. } if command == "start_device_flow"
        ));
    }

    #[tokio::test]
    async fn test_logout_accepts_null_reply() {
        let transport = TableTransport::default().reply(commands::LOGOUT, Ok(Value::Null));
        let bridge = InvokeBridge::new(transport);

        assert!(bridge.logout().await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_empty_list() {
        let transport =
            TableTransport::default().reply(commands::FETCH_REVIEW_REQUESTED_PRS, Ok(json!([])));
        let bridge = InvokeBridge::new(transport);

        assert!(bridge.fetch_review_requested_prs().await.unwrap().is_empty());
    }
}
