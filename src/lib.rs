//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! the initial deal, player hits and stands, dealer play, and settlement.
//! Use [`TableRules`] to configure dealer behavior and [`TableRegistry`] to
//! run any number of independent tables.
//!
//! # Example
//!
//! ```no_run
//! use ventuno::{Table, TableRules};
//!
//! let table = Table::new(TableRules::default());
//! let view = table.start();
//! let _ = view;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod api;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod registry;
pub mod result;
pub mod rules;
mod sync;
pub mod table;

// Re-export main types
pub use api::{CardView, TableView};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::EngineError;
pub use hand::{DealerHand, Hand, Score, score};
pub use registry::{TableId, TableRegistry};
pub use result::{Outcome, RoundResult, resolve};
pub use rules::TableRules;
pub use table::{RoundPhase, Table, should_draw};
