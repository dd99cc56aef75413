//! Typed subscriptions over the host's custom events.
//!
//! Each subscription parses the raw JSON payload at the boundary and hands
//! typed values to its handler; malformed payloads are logged and dropped so
//! one bad broadcast cannot wedge the page.

use easel::stroke::Stroke;
use market::event::{MarketEvent, OFFER_ACCEPTED, OFFERS_AND_TXS};

use super::bridge;

/// Event name for strokes drawn by other participants.
pub const STROKES: &str = "Strokes";

/// Subscribe to both market push events with one typed handler.
pub fn on_market_events(handler: impl Fn(MarketEvent) + Clone + 'static) {
    for name in [OFFERS_AND_TXS, OFFER_ACCEPTED] {
        let handler = handler.clone();
        bridge::on_custom_event(name, move |data| match MarketEvent::parse(name, data) {
            Ok(event) => handler(event),
            Err(err) => leptos::logging::warn!("{err}"),
        });
    }
}

/// Subscribe to stroke broadcasts from other participants.
pub fn on_remote_strokes(mut handler: impl FnMut(Vec<Stroke>) + 'static) {
    bridge::on_custom_event(STROKES, move |data| {
        match serde_json::from_value::<Vec<Stroke>>(data) {
            Ok(strokes) => handler(strokes),
            Err(err) => leptos::logging::warn!("dropping malformed {STROKES} payload: {err}"),
        }
    });
}
