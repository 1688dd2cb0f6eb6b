//! Serializable views of the table, shaped for clients.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::result::RoundResult;
use crate::table::{Round, RoundPhase};

/// A card as shown to the player.
///
/// A face-down card carries no information: rank and suit both read
/// `"Hidden"` until the dealer turns it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Rank symbol: `"A"`, `"2"` through `"10"`, `"J"`, `"Q"`, `"K"`, or
    /// `"Hidden"`.
    pub rank: String,
    /// Suit name: `"Hearts"`, `"Diamonds"`, `"Clubs"`, `"Spades"`, or
    /// `"Hidden"`.
    pub suit: String,
    /// Whether the card is face down.
    pub hidden: bool,
}

impl CardView {
    fn face_up(card: Card) -> Self {
        Self {
            rank: String::from(card.rank_symbol()),
            suit: String::from(card.suit.name()),
            hidden: false,
        }
    }

    fn face_down() -> Self {
        Self {
            rank: String::from("Hidden"),
            suit: String::from("Hidden"),
            hidden: true,
        }
    }
}

/// Snapshot of the table as the player may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// The player's cards, all face up.
    pub player_hand: Vec<CardView>,
    /// The dealer's cards. The hole card stays face down until the dealer's
    /// turn begins.
    pub dealer_hand: Vec<CardView>,
    /// Announcement line for the current state: the player's running total
    /// during their turn, the outcome once the round settles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured result, present once the round has settled with a winner
    /// determination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
}

impl TableView {
    /// Renders the round. Never mutates it, so equal rounds render equally.
    pub(crate) fn of(round: &Round) -> Self {
        let player_hand = round
            .player
            .cards()
            .iter()
            .copied()
            .map(CardView::face_up)
            .collect();

        let hole_revealed = round.dealer.is_hole_revealed();
        let dealer_hand = round
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(position, &card)| {
                if position == 0 || hole_revealed {
                    CardView::face_up(card)
                } else {
                    CardView::face_down()
                }
            })
            .collect();

        let message = match round.phase {
            RoundPhase::PlayerTurn => {
                Some(format!("Your hand is worth {}", round.player.value()))
            }
            RoundPhase::Settled => round.result.map(|result| String::from(result.outcome.message())),
            RoundPhase::Idle | RoundPhase::DealerTurn => None,
        };

        Self {
            player_hand,
            dealer_hand,
            message,
            result: round.result,
        }
    }
}
