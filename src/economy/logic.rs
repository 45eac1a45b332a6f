use super::gacha::{create_default_reel, pick_winner_index, TrinketRoll};
use super::risk::RiskLevel;
use crate::character::{DerivedStats, StatType, Stats};
use crate::core::constants::*;
use crate::items::{armor, weapon, Armor, ArmorId, Weapon, WeaponId, ARMOR, WEAPONS};
use crate::progression::ProgressionData;
use crate::trinkets::{trinkets_by_rarity, TrinketId, TrinketRarity};
use crate::utils::random_range_int;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives a snapshot after every persisted mutation.
pub trait CommitSink {
    fn commit(&mut self, data: &ProgressionData);

    /// Blocks until previously committed snapshots are durable.
    fn flush(&mut self) {}
}

/// Discards commits.
pub struct NullSink;

impl CommitSink for NullSink {
    fn commit(&mut self, _data: &ProgressionData) {}
}

/// Keeps every committed snapshot in memory. Clones share the same log.
#[derive(Clone, Default)]
pub struct MemorySink {
    commits: Rc<RefCell<Vec<ProgressionData>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.commits.borrow().len()
    }

    pub fn last(&self) -> Option<ProgressionData> {
        self.commits.borrow().last().cloned()
    }
}

impl CommitSink for MemorySink {
    fn commit(&mut self, data: &ProgressionData) {
        self.commits.borrow_mut().push(data.clone());
    }
}

/// A catalog entry annotated with the player's ownership.
#[derive(Debug, Clone, Copy)]
pub struct ShopEntry<T: 'static> {
    pub item: &'static T,
    pub is_bought: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrinketListing {
    pub id: TrinketId,
    pub is_bought: bool,
    pub is_selected: bool,
}

/// Owns the progression document and every rule that mutates it.
///
/// Mutations that fail a precondition return `false` (or `None`) and leave
/// state untouched. Successful persisted mutations are forwarded to the
/// commit sink.
pub struct Economy {
    data: ProgressionData,
    bonus_stats: Stats,
    sink: Box<dyn CommitSink>,
}

impl Economy {
    pub fn new(data: ProgressionData, sink: Box<dyn CommitSink>) -> Self {
        Self {
            data,
            bonus_stats: Stats::ZERO,
            sink,
        }
    }

    pub fn data(&self) -> &ProgressionData {
        &self.data
    }

    pub fn balance(&self) -> u64 {
        self.data.balance
    }

    pub fn bonus_stats(&self) -> Stats {
        self.bonus_stats
    }

    pub fn selected_weapon(&self) -> &'static Weapon {
        weapon(self.data.selected_weapon)
    }

    pub fn selected_armor(&self) -> &'static Armor {
        armor(self.data.selected_armor)
    }

    fn commit(&mut self) {
        self.sink.commit(&self.data);
    }

    pub fn flush(&mut self) {
        self.sink.flush();
    }

    // ---- Stats ----

    /// Base + weapon + armor + temporary bonuses, floored at zero.
    pub fn effective_stats(&self) -> Stats {
        (self.data.base_stats
            + self.selected_weapon().stat_modifier
            + self.selected_armor().stat_modifier
            + self.bonus_stats)
            .clamped()
    }

    pub fn derived_stats(&self) -> DerivedStats {
        DerivedStats::calculate(&self.effective_stats(), self.selected_weapon())
    }

    /// Adds a temporary bonus. Reversal is another call with the negation.
    pub fn add_bonus_stats(&mut self, bonus: Stats) {
        self.bonus_stats += bonus;
    }

    pub fn stat_upgrade_cost(&self, stat: StatType) -> Option<u64> {
        let level = self.data.base_stats.get(stat);
        usize::try_from(level)
            .ok()
            .and_then(|level| STAT_LEVEL_COSTS.get(level).copied())
    }

    pub fn can_upgrade_stat(&self, stat: StatType) -> bool {
        self.stat_upgrade_cost(stat)
            .is_some_and(|cost| self.data.balance >= cost)
    }

    /// Highest reachable base level for any stat.
    pub fn max_stat_level(&self) -> i32 {
        STAT_LEVEL_COSTS.len() as i32
    }

    pub fn upgrade_stat(&mut self, stat: StatType) -> bool {
        let Some(cost) = self.stat_upgrade_cost(stat) else {
            return false;
        };
        if self.data.balance < cost {
            return false;
        }
        self.data.balance -= cost;
        self.data.base_stats.increment(stat);
        self.commit();
        true
    }

    // ---- Balance ----

    pub fn max_balance(&self) -> Option<u64> {
        self.data.risk_level.cap()
    }

    pub fn is_full_balance(&self) -> bool {
        self.max_balance() == Some(self.data.balance)
    }

    /// Adds currency, clamped to the current risk cap.
    pub fn add_balance(&mut self, amount: u64) {
        let raised = self.data.balance.saturating_add(amount);
        let capped = match self.max_balance() {
            Some(cap) => raised.min(cap),
            None => raised,
        };
        if capped != self.data.balance {
            self.data.balance = capped;
            self.commit();
        }
    }

    /// Adds `floor(count * multiplier * boxPrice)`.
    pub fn add_boxes(&mut self, count: u32, multiplier: f64) {
        let total = (count as f64 * multiplier * self.selected_weapon().box_price).floor();
        if total > 0.0 {
            self.add_balance(total as u64);
        }
    }

    // ---- Risk ----

    pub fn risk_upgrade_cost(&self) -> Option<u64> {
        self.data.risk_level.upgrade_cost()
    }

    pub fn next_risk_level(&self) -> Option<RiskLevel> {
        self.data.risk_level.next()
    }

    pub fn can_upgrade_risk(&self) -> bool {
        self.risk_upgrade_cost()
            .is_some_and(|cost| self.data.balance >= cost)
    }

    pub fn upgrade_risk(&mut self) -> bool {
        let (Some(cost), Some(next)) = (self.risk_upgrade_cost(), self.next_risk_level()) else {
            return false;
        };
        if self.data.balance < cost {
            return false;
        }
        self.data.balance -= cost;
        self.data.risk_level = next;
        log::info!("Risk level raised to {}", next.name());
        self.commit();
        true
    }

    // ---- Equipment ----

    pub fn buy_weapon(&mut self, id: WeaponId) -> bool {
        let cost = weapon(id).cost;
        if self.data.bought_weapons.contains(&id) || self.data.balance < cost {
            return false;
        }
        self.data.balance -= cost;
        self.data.bought_weapons.insert(id);
        self.data.selected_weapon = id;
        log::info!("Bought weapon {}", id.key());
        self.commit();
        true
    }

    pub fn select_weapon(&mut self, id: WeaponId) -> bool {
        if !self.data.bought_weapons.contains(&id) {
            return false;
        }
        self.data.selected_weapon = id;
        self.commit();
        true
    }

    pub fn buy_armor(&mut self, id: ArmorId) -> bool {
        let cost = armor(id).cost;
        if self.data.bought_armor.contains(&id) || self.data.balance < cost {
            return false;
        }
        self.data.balance -= cost;
        self.data.bought_armor.insert(id);
        self.data.selected_armor = id;
        log::info!("Bought armor {}", id.key());
        self.commit();
        true
    }

    pub fn select_armor(&mut self, id: ArmorId) -> bool {
        if !self.data.bought_armor.contains(&id) {
            return false;
        }
        self.data.selected_armor = id;
        self.commit();
        true
    }

    /// Weapons sorted by cost.
    pub fn weapon_shop(&self) -> Vec<ShopEntry<Weapon>> {
        let mut entries: Vec<ShopEntry<Weapon>> = WEAPONS
            .iter()
            .map(|w| ShopEntry {
                item: w,
                is_bought: self.data.bought_weapons.contains(&w.id),
                is_selected: self.data.selected_weapon == w.id,
            })
            .collect();
        entries.sort_by_key(|entry| entry.item.cost);
        entries
    }

    /// Armor sorted by cost.
    pub fn armor_shop(&self) -> Vec<ShopEntry<Armor>> {
        let mut entries: Vec<ShopEntry<Armor>> = ARMOR
            .iter()
            .map(|a| ShopEntry {
                item: a,
                is_bought: self.data.bought_armor.contains(&a.id),
                is_selected: self.data.selected_armor == a.id,
            })
            .collect();
        entries.sort_by_key(|entry| entry.item.cost);
        entries
    }

    // ---- Prestige ----

    pub fn can_reset(&self) -> bool {
        self.data.balance >= RESET_COST
    }

    /// Prestige reset. Everything returns to defaults except the
    /// meta-progression: light shards (increased), trinkets, the loop
    /// counter (increased) and the sound setting.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.can_reset() {
            return false;
        }

        let shards_gained = RESET_SHARDS_PER_ROLL
            * random_range_int(rng, RESET_SHARD_ROLL_MIN, RESET_SHARD_ROLL_MAX);
        let previous = std::mem::take(&mut self.data);

        self.data.light_shards = previous.light_shards.saturating_add(shards_gained);
        self.data.bought_trinkets = previous.bought_trinkets;
        self.data.selected_trinket = previous.selected_trinket;
        self.data.loop_count = previous.loop_count + 1;
        self.data.sound_enabled = previous.sound_enabled;

        log::info!(
            "Prestige reset: loop {}, +{} light shards",
            self.data.loop_count,
            shards_gained
        );
        self.commit();
        true
    }

    // ---- Trinkets ----

    pub fn can_buy_trinket_roll(&self) -> bool {
        self.data.light_shards >= TRINKET_ROLL_COST
    }

    /// Spends light shards on a gacha roll. The winner is added to the
    /// collection if new.
    pub fn buy_trinket_roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TrinketRoll> {
        if !self.can_buy_trinket_roll() {
            return None;
        }

        let reel = create_default_reel(rng);
        let winner_index = pick_winner_index(rng, reel.len())?;
        let winner = *reel.get(winner_index)?;

        self.data.light_shards -= TRINKET_ROLL_COST;
        let is_new = self.data.bought_trinkets.insert(winner);
        log::info!(
            "Trinket roll won {}{}",
            winner.key(),
            if is_new { " (new)" } else { "" }
        );
        self.commit();

        Some(TrinketRoll {
            reel,
            winner,
            winner_index,
            is_new,
        })
    }

    /// Trinkets grouped by rarity, each group sorted by key.
    pub fn trinket_list(&self) -> Vec<(TrinketRarity, Vec<TrinketListing>)> {
        TrinketRarity::all()
            .iter()
            .map(|rarity| {
                let listings = trinkets_by_rarity(*rarity)
                    .into_iter()
                    .map(|id| TrinketListing {
                        id,
                        is_bought: self.data.bought_trinkets.contains(&id),
                        is_selected: self.data.selected_trinket == Some(id),
                    })
                    .collect();
                (*rarity, listings)
            })
            .collect()
    }

    /// Equips an owned trinket, or unequips it if it is already equipped.
    pub fn select_trinket(&mut self, id: TrinketId) -> bool {
        if !self.data.bought_trinkets.contains(&id) {
            return false;
        }
        self.data.selected_trinket = if self.data.selected_trinket == Some(id) {
            None
        } else {
            Some(id)
        };
        self.commit();
        true
    }

    // ---- Settings & debug ----

    pub fn toggle_sound(&mut self) {
        self.data.sound_enabled = !self.data.sound_enabled;
        self.commit();
    }

    /// Debug: fill the balance and grant light shards.
    pub fn cheat(&mut self) {
        self.data.balance = match self.max_balance() {
            Some(cap) => cap,
            None => self.data.balance.saturating_add(CHEAT_BALANCE_BONUS),
        };
        self.data.light_shards = CHEAT_LIGHT_SHARDS;
        log::debug!("Cheat applied");
        self.commit();
    }

    /// Debug: forget every trinket.
    pub fn reset_trinkets(&mut self) {
        self.data.bought_trinkets.clear();
        self.data.selected_trinket = None;
        self.commit();
    }
}
