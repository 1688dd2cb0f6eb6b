use crate::error::EngineError;
use crate::hand::Score;
use crate::result::resolve;
use crate::rules::TableRules;

use super::{Round, RoundPhase, Table};

/// Decides whether the dealer takes another card.
///
/// The dealer draws below 17 and stands above it. On exactly 17 the dealer
/// stands, unless the 17 is soft and `rules.dealer_hits_soft_17` is set. A
/// bust hand never draws.
#[must_use]
pub const fn should_draw(score: Score, rules: TableRules) -> bool {
    if score.total < 17 {
        true
    } else {
        score.total == 17 && score.soft && rules.dealer_hits_soft_17
    }
}

impl Table {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer reveals the hole card, draws while [`should_draw`] says
    /// to, then the round settles on [`resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw; the
    /// round ends without a result.
    pub(super) fn play_dealer(&self, round: &mut Round) -> Result<(), EngineError> {
        round.phase = RoundPhase::DealerTurn;
        round.dealer.reveal_hole();

        while should_draw(round.dealer.score(), self.rules) {
            let Some(card) = round.deck.draw() else {
                round.abort_empty_deck();
                return Err(EngineError::EmptyDeck);
            };
            log::debug!("dealer draws {card}");
            round.dealer.add_card(card);
        }

        round.settle(resolve(round.player.score(), round.dealer.score()));

        Ok(())
    }
}
