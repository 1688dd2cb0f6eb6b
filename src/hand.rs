//! Hand scoring and the player and dealer hand types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// What the evaluator found in a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Best total with every Ace resolved to 11 or 1.
    pub total: u8,
    /// Whether an Ace is still counted as 11.
    pub soft: bool,
    /// Whether the total exceeds 21.
    pub bust: bool,
    /// Whether this is a natural: exactly two cards worth 21.
    pub blackjack: bool,
}

/// Scores a set of cards.
///
/// Every Ace starts at 11; while the total exceeds 21 and an Ace is still
/// counted high, one Ace is demoted to 1. The result is the same for the
/// same cards no matter how often it is computed. An empty slice scores as
/// a hard 0.
#[must_use]
pub fn score(cards: &[Card]) -> Score {
    let mut total: u8 = 0;
    let mut high_aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            high_aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    Score {
        total,
        soft: high_aces > 0 && total <= 21,
        bust: total > 21,
        blackjack: cards.len() == 2 && total == 21,
    }
}

/// The player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 where that does not bust the hand, otherwise
    /// as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.score().total
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().soft
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().bust
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.score().blackjack
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card and stays concealed until the
/// dealer's turn begins; views built before [`DealerHand::reveal_hole`] mark
/// it hidden.
#[derive(Debug, Clone)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (the first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the cards currently showing.
    ///
    /// Before the hole card is revealed this is the up card alone.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |card| card.value())
        }
    }

    /// Scores the full hand, hole card included.
    #[must_use]
    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.score().total
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().soft
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().bust
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.score().blackjack
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
