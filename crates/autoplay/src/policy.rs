use serde::{Deserialize, Serialize};

/// How the simulator spends money in the shop each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyPolicy {
    /// Never buys; measures the starting set alone.
    Never,
    /// Buys a uniformly chosen affordable offer while the allowance lasts.
    Random,
    /// Always the cheapest affordable offer.
    Cheapest,
    /// Always the most expensive affordable offer.
    Priciest,
}
