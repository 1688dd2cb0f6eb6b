//! Table engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::api::TableView;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::{Outcome, RoundResult};
use crate::rules::TableRules;

mod actions;
mod deal;
mod dealer;
pub mod phase;

pub use dealer::should_draw;
pub use phase::RoundPhase;

/// Everything belonging to one round.
///
/// The whole struct moves under a single lock, so a round is always observed
/// and mutated as a unit.
pub(crate) struct Round {
    /// Cards left to draw this round.
    pub(crate) deck: Deck,
    /// The player's hand.
    pub(crate) player: Hand,
    /// The dealer's hand.
    pub(crate) dealer: DealerHand,
    /// Where the round currently stands.
    pub(crate) phase: RoundPhase,
    /// Result of the round once settled.
    pub(crate) result: Option<RoundResult>,
}

impl Round {
    /// The state of a table before its first deal.
    const fn idle() -> Self {
        Self {
            deck: Deck::empty(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: RoundPhase::Idle,
            result: None,
        }
    }

    /// A round about to be dealt from the given deck.
    const fn fresh(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: RoundPhase::PlayerTurn,
            result: None,
        }
    }

    /// Ends the round with the given outcome and records the final totals.
    pub(crate) fn settle(&mut self, outcome: Outcome) {
        self.dealer.reveal_hole();
        self.phase = RoundPhase::Settled;
        let result = RoundResult {
            outcome,
            player_total: self.player.value(),
            dealer_total: self.dealer.value(),
        };
        log::info!(
            "round settled: {outcome:?} (player {} dealer {})",
            result.player_total,
            result.dealer_total
        );
        self.result = Some(result);
    }

    /// Ends the round without a result after the deck ran dry.
    ///
    /// The dead round stays on the table so views keep rendering it; only a
    /// new deal replaces it.
    pub(crate) fn abort_empty_deck(&mut self) {
        log::error!("deck exhausted mid-round, ending the round without a result");
        self.dealer.reveal_hole();
        self.phase = RoundPhase::Settled;
        self.result = None;
    }
}

/// A single-player blackjack table.
///
/// The table owns the deck, both hands, and the round phase. Use
/// [`TableRules`] to configure dealer behavior.
///
/// # Example
///
/// ```no_run
/// use ventuno::{Table, TableRules};
///
/// let table = Table::new(TableRules::default());
/// let view = table.start();
/// let _ = view;
/// ```
pub struct Table {
    /// House rules for this table.
    pub rules: TableRules,
    /// State of the current round.
    round: Mutex<Round>,
    /// Random number generator for shuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table seeded from the operating system.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new(rules: TableRules) -> Self {
        Self::from_rng(rules, ChaCha8Rng::from_os_rng())
    }

    /// Creates a table with a deterministic shuffle seed.
    ///
    /// Two tables built from the same seed and rules deal identical rounds.
    #[must_use]
    pub fn with_seed(rules: TableRules, seed: u64) -> Self {
        Self::from_rng(rules, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rules: TableRules, rng: ChaCha8Rng) -> Self {
        Self {
            rules,
            round: Mutex::new(Round::idle()),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.round.lock().phase
    }

    /// Returns the result of the last settled round.
    ///
    /// `None` before the first deal, while a round is in progress, and for a
    /// round that ended because the deck ran out.
    pub fn result(&self) -> Option<RoundResult> {
        self.round.lock().result
    }

    /// Returns the number of undrawn cards in the current round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.round.lock().deck.len()
    }

    /// Builds a snapshot of the table as the player may see it.
    ///
    /// Reading a view never changes the round, so repeated calls between
    /// actions render identically.
    pub fn view(&self) -> TableView {
        TableView::of(&self.round.lock())
    }

    /// Shuffles a fresh deck for the next round.
    fn shuffle_deck(&self) -> Deck {
        Deck::shuffled(&mut self.rng.lock())
    }
}
