//! Table rule configuration.

use serde::{Deserialize, Serialize};

/// House rules for a table.
///
/// Use the builder to customize rules:
///
/// ```
/// use ventuno::TableRules;
///
/// let rules = TableRules::default().with_dealer_hits_soft_17(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TableRules {
    /// Whether the dealer draws again on a soft 17.
    ///
    /// When `false` (the default) the dealer stands on every 17, soft or
    /// hard.
    #[serde(default)]
    pub dealer_hits_soft_17: bool,
}

impl TableRules {
    /// Sets whether the dealer draws again on a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use ventuno::TableRules;
    ///
    /// let rules = TableRules::default().with_dealer_hits_soft_17(true);
    /// assert!(rules.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }
}
