//! Buyer/seller roles and acceptance rules.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Which side of the book an offer sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// A sell offer.
    Ask,
    /// A buy offer.
    Bid,
}

/// The participant's market role for the whole round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Holds a private value; profits by buying below it.
    Buyer,
    /// Holds a private cost; profits by selling above it.
    Seller,
}

impl Role {
    /// Derive the role from the host's `buyer` page variable.
    #[must_use]
    pub fn from_buyer_flag(buyer: bool) -> Self {
        if buyer { Self::Buyer } else { Self::Seller }
    }

    /// The side of the book this role's own offers land on.
    #[must_use]
    pub fn own_side(self) -> Side {
        match self {
            Self::Buyer => Side::Bid,
            Self::Seller => Side::Ask,
        }
    }

    /// Whether this role may accept an offer on the given side.
    ///
    /// Buyers accept asks, sellers accept bids; nobody accepts offers on
    /// their own side of the book.
    #[must_use]
    pub fn may_accept(self, side: Side) -> bool {
        match self {
            Self::Buyer => side == Side::Ask,
            Self::Seller => side == Side::Bid,
        }
    }
}
