use crate::api::TableView;
use crate::deck::Deck;
use crate::result::Outcome;

use super::{Round, Table};

impl Table {
    /// Starts a new round, replacing whatever came before.
    ///
    /// Valid in every phase: an unfinished round is discarded along with its
    /// deck. Cards alternate from a freshly shuffled deck: player, dealer up
    /// card, player, dealer hole card. A natural on either side settles the
    /// round on the spot.
    pub fn start(&self) -> TableView {
        let deck = self.shuffle_deck();
        self.start_with_deck(deck)
    }

    /// Starts a new round drawing from a caller-supplied deck.
    ///
    /// Behaves exactly like [`Table::start`] otherwise. Useful for replays
    /// and deterministic tests. A deck too small for the initial deal ends
    /// the round immediately without a result.
    pub fn start_with_deck(&self, deck: Deck) -> TableView {
        let mut round = self.round.lock();
        *round = Round::fresh(deck);

        for _ in 0..2 {
            let Some(card) = round.deck.draw() else {
                round.abort_empty_deck();
                return TableView::of(&round);
            };
            round.player.add_card(card);

            let Some(card) = round.deck.draw() else {
                round.abort_empty_deck();
                return TableView::of(&round);
            };
            round.dealer.add_card(card);
        }

        log::debug!(
            "round dealt: player {} dealer shows {}",
            round.player.value(),
            round.dealer.visible_value()
        );

        match (round.player.is_blackjack(), round.dealer.is_blackjack()) {
            (true, true) => round.settle(Outcome::Push),
            (true, false) => round.settle(Outcome::PlayerBlackjack),
            (false, true) => round.settle(Outcome::DealerWin),
            (false, false) => {}
        }

        TableView::of(&round)
    }
}
