//! Client-side data model for the continuous double-auction market.
//!
//! This crate owns everything the market page knows about the world: the
//! snapshot pushed by the server (offers and executed transactions), the
//! display ordering of the book, which side of the book a participant may
//! accept, and the typed parsing of inbound push events. It has no browser
//! dependencies; the `ui` crate maps it onto the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`book`] | Wire types and display ordering for the order book |
//! | [`event`] | Typed parsing of server push events |
//! | [`role`] | Buyer/seller roles and acceptance rules |

pub mod book;
pub mod event;
pub mod role;
