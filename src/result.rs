//! Round outcomes and the showdown resolver.

use serde::{Deserialize, Serialize};

use crate::hand::Score;

/// How a settled round ended.
///
/// The outcome is the authoritative record of a round; display text is
/// derived from it through [`Outcome::message`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player was dealt a natural the dealer could not match.
    PlayerBlackjack,
    /// Player outscored the dealer at showdown.
    PlayerWin,
    /// Dealer outscored the player, or was dealt the only natural.
    DealerWin,
    /// Equal totals at showdown, or both sides were dealt naturals.
    Push,
    /// Player drew over 21.
    PlayerBust,
    /// Dealer drew over 21.
    DealerBust,
}

impl Outcome {
    /// The announcement line for this outcome.
    ///
    /// Fixed per variant, so re-reading a settled round renders the same
    /// text every time.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push! It's a tie!",
            Self::PlayerBust => "Bust! You lose!",
            Self::DealerBust => "Dealer busts! You win!",
        }
    }
}

/// Names the winner from two finished scores.
///
/// The rules apply in order: a player bust loses outright, before the
/// dealer's cards are considered; a dealer bust then wins for the player;
/// otherwise the higher total wins and equal totals push. Naturals never
/// reach this comparison, they settle when the cards are dealt.
#[must_use]
pub const fn resolve(player: Score, dealer: Score) -> Outcome {
    if player.bust {
        Outcome::PlayerBust
    } else if dealer.bust {
        Outcome::DealerBust
    } else if player.total > dealer.total {
        Outcome::PlayerWin
    } else if player.total < dealer.total {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_total: u8,
    /// The dealer's final hand value.
    pub dealer_total: u8,
}
