//! Typed parsing of server push events.
//!
//! The host delivers custom events as an event name plus a JSON payload.
//! Parsing happens here, at the crate boundary, so the rest of the client
//! only ever sees [`MarketEvent`] values. Malformed payloads surface as
//! typed errors for the dispatch layer to log; they never panic.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde_json::Value;

use crate::book::MarketSnapshot;

/// Event name for full market snapshots.
pub const OFFERS_AND_TXS: &str = "OffersAndTxs";
/// Event name for the participant's own offer being accepted.
pub const OFFER_ACCEPTED: &str = "OfferAccepted";

/// Error returned by [`MarketEvent::parse`].
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The event name is not part of the market protocol.
    #[error("unknown market event: {0}")]
    UnknownEvent(String),
    /// The payload did not match the event's schema.
    #[error("malformed {event} payload: {source}")]
    Payload {
        /// Which event failed to parse.
        event: &'static str,
        /// Underlying serde failure.
        source: serde_json::Error,
    },
}

/// A push event on the market page, parsed into its typed form.
#[derive(Clone, Debug, PartialEq)]
pub enum MarketEvent {
    /// Full snapshot replacement of the local market state.
    OffersAndTxs(MarketSnapshot),
    /// The participant's standing offer was accepted by someone else.
    ///
    /// The wire payload is a positional `[traded, profit]` pair.
    OfferAccepted {
        /// Whether the participant has now traded (always true in practice).
        traded: bool,
        /// Realized profit from the trade.
        profit: f64,
    },
}

impl MarketEvent {
    /// Parse a named event payload into a typed event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownEvent`] for names outside the market
    /// protocol and [`EventError::Payload`] when the payload does not match
    /// the event's schema.
    pub fn parse(name: &str, data: Value) -> Result<Self, EventError> {
        match name {
            OFFERS_AND_TXS => {
                let snapshot = serde_json::from_value::<MarketSnapshot>(data)
                    .map_err(|source| EventError::Payload { event: OFFERS_AND_TXS, source })?;
                Ok(Self::OffersAndTxs(snapshot))
            }
            OFFER_ACCEPTED => {
                let (traded, profit) = serde_json::from_value::<(bool, f64)>(data)
                    .map_err(|source| EventError::Payload { event: OFFER_ACCEPTED, source })?;
                Ok(Self::OfferAccepted { traded, profit })
            }
            other => Err(EventError::UnknownEvent(other.to_owned())),
        }
    }
}
