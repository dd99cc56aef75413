//! Trade-page state: the participant's view of the market round.
//!
//! One controller owns what the original page kept in module-level globals:
//! the latest snapshot, the standing offer, the traded/profit outcome, the
//! in-flight request guard, and the last surfaced error. Push events enter
//! through [`TradeState::apply`]; RPC lifecycles go through
//! [`TradeState::begin_request`] and its completion methods.

#[cfg(test)]
#[path = "trade_test.rs"]
mod trade_test;

use market::book::MarketSnapshot;
use market::event::MarketEvent;
use market::role::{Role, Side};

/// The market page's application state.
#[derive(Clone, Debug)]
pub struct TradeState {
    /// This participant's role for the whole round.
    pub role: Role,
    /// Latest snapshot; replaced wholesale on every `OffersAndTxs` push.
    pub market: MarketSnapshot,
    /// The participant's standing offer amount, if any.
    pub offer_amount: Option<f64>,
    /// Whether the participant has traded this round (terminal).
    pub traded: bool,
    /// Realized profit once traded.
    pub profit: Option<f64>,
    /// True while a user-initiated RPC is in flight; disables the UI.
    pub busy: bool,
    /// Last RPC failure, rendered inline until the next successful request.
    pub error: Option<String>,
}

impl TradeState {
    #[must_use]
    pub fn new(role: Role, offer_amount: Option<f64>) -> Self {
        Self {
            role,
            market: MarketSnapshot::default(),
            offer_amount,
            traded: false,
            profit: None,
            busy: false,
            error: None,
        }
    }

    // --- Push events ---

    /// Apply a parsed push event. The only entry point for server pushes.
    pub fn apply(&mut self, event: MarketEvent) {
        match event {
            MarketEvent::OffersAndTxs(snapshot) => self.market = snapshot,
            MarketEvent::OfferAccepted { traded, profit } => {
                self.traded = traded;
                self.profit = Some(profit);
                self.offer_amount = None;
            }
        }
    }

    // --- Request lifecycle ---

    /// Claim the in-flight guard. Returns false when a request is already
    /// running; callers must not issue the RPC in that case.
    pub fn begin_request(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// A `make_offer` call resolved; the server echoed the standing amount.
    pub fn offer_submitted(&mut self, amount: Option<f64>) {
        self.busy = false;
        self.offer_amount = amount;
    }

    /// An `accept_offer` call resolved with the realized profit.
    pub fn trade_completed(&mut self, profit: f64) {
        self.busy = false;
        self.traded = true;
        self.profit = Some(profit);
        self.offer_amount = None;
    }

    /// An RPC failed: release the guard and surface the failure.
    pub fn request_failed(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    // --- Queries ---

    /// Whether the participant may accept offers on the given book side.
    #[must_use]
    pub fn can_accept(&self, side: Side) -> bool {
        !self.busy && !self.traded && self.role.may_accept(side)
    }

    /// Whether the offer form is usable right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.traded
    }

    /// Whether the participant has a standing offer.
    #[must_use]
    pub fn has_offer(&self) -> bool {
        self.offer_amount.is_some()
    }
}
