use super::{Game, GameError};
use crate::{money_cost, Event, EventBus, ShopOffer, Symbol};

impl Game {
    /// Instantiates a fresh offer list from the catalog sampler using the
    /// luck currently in force.
    fn sample_offers(&mut self) -> Vec<ShopOffer> {
        let picks = self.catalog.generate_shop(
            self.settings.shop_slots,
            self.inventory.luck(),
            false,
            self.settings.rare_threshold,
            &mut self.rng,
        );
        let picked: Vec<_> = picks
            .iter()
            .map(|&idx| {
                let entry = &self.catalog.entries[idx];
                (entry.kind.clone(), entry.price)
            })
            .collect();
        let mut offers = Vec::with_capacity(picked.len());
        for (kind, price) in picked {
            let id = self.alloc_symbol_id();
            let kind = kind.duplicate(&mut self.rng);
            offers.push(ShopOffer {
                symbol: Symbol::new(id, kind),
                cost: money_cost(price),
            });
        }
        offers
    }

    pub(crate) fn open_shop(&mut self, events: &mut EventBus) {
        if self.shop.is_open {
            return;
        }
        self.shop.offers = self.sample_offers();
        self.shop.is_open = true;
        events.push(Event::ShopOpened {
            offers: self.shop.offers.len(),
            refresh_cost: if self.shop.refresh_offered() {
                Some(self.shop.refresh_cost)
            } else {
                None
            },
        });
    }

    pub(crate) fn close_shop(&mut self, events: &mut EventBus) {
        if !self.shop.is_open {
            return;
        }
        self.shop.reset_on_close(self.inventory.money());
        events.push(Event::ShopClosed);
    }

    /// Buys the offer at `index`. Refused without mutation when the shop is
    /// closed, the allowance is spent, or the cost cannot be covered.
    pub fn buy(&mut self, index: usize, events: &mut EventBus) -> Result<(), GameError> {
        if !self.shop.is_open {
            return Err(GameError::ShopClosed);
        }
        if self.shop.buy_count == 0 {
            return Err(GameError::NoPurchasesLeft);
        }
        let cost = self
            .shop
            .offers
            .get(index)
            .ok_or(GameError::InvalidOffer)?
            .cost
            .clone();
        self.inventory.pay_cost(&cost)?;
        let offer = self.shop.take_offer(index).ok_or(GameError::InvalidOffer)?;
        for (&resource, &amount) in offer.cost.iter() {
            events.push(Event::ResourceEarned {
                resource,
                amount: -amount,
                at: None,
            });
        }
        self.shop.buy_count -= 1;
        events.push(Event::ShopBought {
            tag: offer.symbol.kind.tag().to_string(),
            money: self.inventory.money(),
        });
        self.inventory.add(offer.symbol);
        if self.shop.buy_count == 0 {
            self.close_shop(events);
        }
        Ok(())
    }

    /// Pays the refresh cost and resamples the offers. The cost doubles each
    /// time within one session.
    pub fn refresh_shop(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        if !self.shop.is_open {
            return Err(GameError::ShopClosed);
        }
        if !self.shop.refresh_offered() {
            return Err(GameError::RefreshUnavailable);
        }
        self.shop.refresh_count += 1;
        let cost = money_cost(self.shop.refresh_cost);
        self.inventory.pay_cost(&cost)?;
        let paid = self.shop.refresh_cost;
        self.shop.refresh_cost *= 2;
        self.shop.offers = self.sample_offers();
        events.push(Event::ShopRefreshed {
            cost: paid,
            money: self.inventory.money(),
        });
        Ok(())
    }
}
