//! LedgerDeck: a local-first desktop tracker. Profiles own projects,
//! projects group ledgers. The binary wires the Dioxus frontend to the
//! JSON-file store; everything testable lives in this library crate.

pub mod backend;
pub mod frontend;
