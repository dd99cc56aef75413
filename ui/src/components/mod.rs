//! Reusable view components for the two pages.
//!
//! Components stay presentational: they receive signals and callbacks from
//! their page and never talk to the host bridge directly. The one exception
//! is [`easel_host`], which owns the imperative drawing engine.

pub mod book_panel;
pub mod easel_host;
pub mod offer_form;
pub mod trade_status;
