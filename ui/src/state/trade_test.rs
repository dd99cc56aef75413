#![allow(clippy::float_cmp)]

use market::book::{MarketSnapshot, Offer};
use market::event::MarketEvent;
use market::role::{Role, Side};

use super::*;

fn buyer() -> TradeState {
    TradeState::new(Role::Buyer, None)
}

fn snapshot_with_ask(price: f64) -> MarketSnapshot {
    MarketSnapshot {
        asks: vec![Offer { id: "a".to_owned(), price }],
        ..Default::default()
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_state_is_idle_and_untraded() {
    let state = buyer();
    assert!(!state.busy);
    assert!(!state.traded);
    assert!(state.error.is_none());
    assert!(state.market.asks.is_empty());
}

#[test]
fn standing_offer_restores_from_page_vars() {
    let state = TradeState::new(Role::Seller, Some(4.5));
    assert!(state.has_offer());
    assert_eq!(state.offer_amount, Some(4.5));
}

// =============================================================
// Push events
// =============================================================

#[test]
fn snapshot_push_replaces_market_wholesale() {
    let mut state = buyer();
    state.apply(MarketEvent::OffersAndTxs(snapshot_with_ask(9.0)));
    state.apply(MarketEvent::OffersAndTxs(snapshot_with_ask(2.0)));
    assert_eq!(state.market.asks.len(), 1);
    assert_eq!(state.market.asks[0].price, 2.0);
}

#[test]
fn offer_accepted_push_ends_the_round() {
    let mut state = TradeState::new(Role::Seller, Some(3.0));
    state.apply(MarketEvent::OfferAccepted { traded: true, profit: 1.5 });
    assert!(state.traded);
    assert_eq!(state.profit, Some(1.5));
    assert!(!state.has_offer());
}

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn begin_request_claims_the_guard_once() {
    let mut state = buyer();
    assert!(state.begin_request());
    assert!(!state.begin_request());
    assert!(state.busy);
}

#[test]
fn begin_request_clears_a_stale_error() {
    let mut state = buyer();
    state.request_failed("offer no longer valid".to_owned());
    assert!(state.begin_request());
    assert!(state.error.is_none());
}

#[test]
fn offer_submission_releases_the_guard() {
    let mut state = buyer();
    state.begin_request();
    state.offer_submitted(Some(6.0));
    assert!(!state.busy);
    assert_eq!(state.offer_amount, Some(6.0));
}

#[test]
fn withdrawal_clears_the_standing_offer() {
    let mut state = TradeState::new(Role::Buyer, Some(6.0));
    state.begin_request();
    state.offer_submitted(None);
    assert!(!state.has_offer());
}

#[test]
fn accepting_completes_the_trade() {
    let mut state = buyer();
    state.begin_request();
    state.trade_completed(2.0);
    assert!(!state.busy);
    assert!(state.traded);
    assert_eq!(state.profit, Some(2.0));
}

#[test]
fn failure_releases_the_guard_and_surfaces_the_error() {
    let mut state = buyer();
    state.begin_request();
    state.request_failed("make_offer failed: bad amount".to_owned());
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some("make_offer failed: bad amount"));
    // The next request can start immediately.
    assert!(state.begin_request());
}

// =============================================================
// Acceptance and submission gates
// =============================================================

#[test]
fn buyer_accepts_asks_only() {
    let state = buyer();
    assert!(state.can_accept(Side::Ask));
    assert!(!state.can_accept(Side::Bid));
}

#[test]
fn seller_accepts_bids_only() {
    let state = TradeState::new(Role::Seller, None);
    assert!(state.can_accept(Side::Bid));
    assert!(!state.can_accept(Side::Ask));
}

#[test]
fn nothing_is_clickable_while_busy() {
    let mut state = buyer();
    state.begin_request();
    assert!(!state.can_accept(Side::Ask));
    assert!(!state.can_submit());
}

#[test]
fn nothing_is_clickable_after_trading() {
    let mut state = buyer();
    state.apply(MarketEvent::OfferAccepted { traded: true, profit: 0.5 });
    assert!(!state.can_accept(Side::Ask));
    assert!(!state.can_submit());
}
