//! Typed wrappers over the four host RPC methods.
//!
//! Method names and payload shapes are part of the host contract and must
//! not change: `get_market`, `make_offer`, `accept_offer`, `stroke`.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use easel::stroke::StrokeUpload;
use market::book::MarketSnapshot;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::bridge::{self, BridgeError};

/// Fetch the full market snapshot.
///
/// # Errors
///
/// Propagates [`BridgeError`] from the host boundary.
pub async fn get_market() -> Result<MarketSnapshot, BridgeError> {
    let value = bridge::invoke("get_market").await?;
    decode("get_market", value)
}

/// Submit a new offer, or withdraw the standing one by passing `None`.
///
/// Resolves to the server's idea of the standing offer amount.
///
/// # Errors
///
/// Propagates [`BridgeError`] from the host boundary.
pub async fn make_offer(amount: Option<f64>) -> Result<Option<f64>, BridgeError> {
    let value = bridge::invoke_with("make_offer", &Value::from(amount)).await?;
    decode("make_offer", value)
}

/// Accept a standing offer by id; resolves to the realized profit.
///
/// # Errors
///
/// Propagates [`BridgeError`] from the host boundary; the host rejects when
/// the offer is stale or on the caller's own side.
pub async fn accept_offer(id: &str) -> Result<f64, BridgeError> {
    let value = bridge::invoke_with("accept_offer", &Value::from(id)).await?;
    decode("accept_offer", value)
}

/// Upload one finalized stroke. The server attaches the sender's color and
/// fans it out to the other participants.
///
/// # Errors
///
/// Propagates [`BridgeError`] from the host boundary.
pub async fn send_stroke(upload: &StrokeUpload) -> Result<(), BridgeError> {
    let payload = serde_json::to_value(upload)
        .map_err(|err| BridgeError::Json(err.to_string()))?;
    bridge::invoke_with("stroke", &payload).await?;
    Ok(())
}

fn decode<T: DeserializeOwned>(method: &'static str, value: Value) -> Result<T, BridgeError> {
    serde_json::from_value(value)
        .map_err(|err| BridgeError::Response { method, message: err.to_string() })
}
