use crate::{ResourceCost, Symbol};

/// One purchasable slot in the current shop: a freshly instantiated symbol
/// and what it costs.
#[derive(Debug, Clone)]
pub struct ShopOffer {
    pub symbol: Symbol,
    pub cost: ResourceCost,
}

/// The shop session. Offers are ephemeral: regenerated when the shop opens
/// or refreshes, discarded when it closes. The refresh slot doubles in price
/// per use within a session and re-bases from the player's money on close.
#[derive(Debug, Clone)]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
    pub is_open: bool,
    /// Purchases left before the shop closes itself. Reset to 1 on close;
    /// ShoppingBags on the board raise it during the evaluate pass.
    pub buy_count: u32,
    /// Armed by a Refresh symbol; lets the session refresh more than once.
    pub refreshable: bool,
    pub refresh_count: u32,
    pub refresh_cost: i64,
}

impl ShopState {
    pub fn new() -> Self {
        Self {
            offers: Vec::new(),
            is_open: false,
            buy_count: 1,
            refreshable: false,
            refresh_count: 0,
            refresh_cost: 1,
        }
    }

    /// The refresh slot shows once per session for free-standing shops, and
    /// without limit while a Refresh symbol keeps the session armed.
    pub fn refresh_offered(&self) -> bool {
        self.is_open && (self.refreshable || self.refresh_count == 0)
    }

    pub fn take_offer(&mut self, index: usize) -> Option<ShopOffer> {
        if index < self.offers.len() {
            Some(self.offers.remove(index))
        } else {
            None
        }
    }

    /// Close-time reset. Unsold offers are dropped, never owned; the next
    /// session's refresh starts proportional to current money.
    pub fn reset_on_close(&mut self, money: i64) {
        self.offers.clear();
        self.is_open = false;
        self.refreshable = false;
        self.refresh_count = 0;
        self.refresh_cost = 1 + money / 100;
        self.buy_count = 1;
    }
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new()
    }
}
