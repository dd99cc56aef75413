//! Application state owned by the pages.
//!
//! State lives in plain structs mutated through typed methods; pages wrap
//! them in `RwSignal`s and the event layer feeds them parsed events.

pub mod trade;
