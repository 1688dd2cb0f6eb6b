use crate::api::TableView;
use crate::error::EngineError;
use crate::result::resolve;

use super::{RoundPhase, Table};

impl Table {
    /// Player action: hit (draw a card).
    ///
    /// Going over 21 settles the round as a player bust. Reaching exactly 21
    /// stands automatically and the dealer plays out.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out of cards. Only the latter ends the round.
    pub fn hit(&self) -> Result<TableView, EngineError> {
        let mut round = self.round.lock();
        if round.phase != RoundPhase::PlayerTurn {
            return Err(EngineError::IllegalState);
        }

        let Some(card) = round.deck.draw() else {
            round.abort_empty_deck();
            return Err(EngineError::EmptyDeck);
        };
        log::debug!("player draws {card}");
        round.player.add_card(card);

        let score = round.player.score();
        if score.bust {
            let result = resolve(score, round.dealer.score());
            round.settle(result);
        } else if score.total == 21 {
            self.play_dealer(&mut round)?;
        }

        Ok(TableView::of(&round))
    }

    /// Player action: stand (keep the current hand).
    ///
    /// The dealer reveals the hole card, draws to the house rule, and the
    /// round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out of cards while the dealer draws. Only the latter ends the round.
    pub fn stand(&self) -> Result<TableView, EngineError> {
        let mut round = self.round.lock();
        if round.phase != RoundPhase::PlayerTurn {
            return Err(EngineError::IllegalState);
        }

        self.play_dealer(&mut round)?;

        Ok(TableView::of(&round))
    }
}
