//! Wire types and display ordering for the order book.
//!
//! These types mirror the server's `OffersAndTxs` payload field for field so
//! serde round-trips stay lossless. The snapshot is replaced wholesale on
//! every push; there is no client-side merging.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use serde::{Deserialize, Serialize};

/// A standing offer on one side of the book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Server-assigned offer identifier (UUID string).
    pub id: String,
    /// Offer price.
    pub price: f64,
}

/// An executed trade.
///
/// The wire payload carries additional bookkeeping fields (round, acceptor);
/// only the ones the page renders are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Execution price.
    pub price: f64,
    /// Execution time in seconds since the Unix epoch.
    pub time: f64,
}

/// Full market state as pushed by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Standing sell offers.
    #[serde(default)]
    pub asks: Vec<Offer>,
    /// Standing buy offers.
    #[serde(default)]
    pub bids: Vec<Offer>,
    /// Executed trades.
    #[serde(default)]
    pub txs: Vec<Transaction>,
}

impl MarketSnapshot {
    /// Asks in display order: non-decreasing price, cheapest first.
    #[must_use]
    pub fn sorted_asks(&self) -> Vec<Offer> {
        let mut asks = self.asks.clone();
        asks.sort_by(|a, b| a.price.total_cmp(&b.price));
        asks
    }

    /// Bids in display order: non-increasing price, highest first.
    #[must_use]
    pub fn sorted_bids(&self) -> Vec<Offer> {
        let mut bids = self.bids.clone();
        bids.sort_by(|a, b| b.price.total_cmp(&a.price));
        bids
    }

    /// Transactions in display order: most recent first.
    #[must_use]
    pub fn recent_txs(&self) -> Vec<Transaction> {
        let mut txs = self.txs.clone();
        txs.sort_by(|a, b| b.time.total_cmp(&a.time));
        txs
    }
}
