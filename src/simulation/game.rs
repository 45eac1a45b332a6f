//! The simulation context: every piece of mutable game state in one place,
//! handed to item hooks as `&mut Game`.

use super::audio::{AudioSink, NullAudio, SoundRequest};
use super::gauge::SanityGauge;
use super::weapon_view::WeaponView;
use crate::assets::{AssetError, AssetLoader, Assets, SoundId, SpriteId};
use crate::character::{Character, DerivedStats, Stats};
use crate::core::constants::*;
use crate::core::{Clock, SystemClock, TimerQueue, Vec2};
use crate::economy::{CommitSink, Economy, NullSink, TrinketRoll};
use crate::items::{ArmorId, HitParams, ItemHooks, PanicHook, WeaponId};
use crate::particles::{DestroyAction, Particle, ParticleSystem};
use crate::progression::ProgressionData;
use crate::sanity::{PanicStep, SanityChange, SanityState};
use crate::utils::random_range;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("asset preload failed: {0}")]
    Assets(#[from] AssetError),
    #[error("data directory unavailable: {0}")]
    DataDir(#[from] io::Error),
}

/// Deferred work scheduled against the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimedEvent {
    SanityRegen,
    PanicStep,
    /// Adds the carried (already negated) stats back.
    RevertBonus(Stats),
}

/// Runtime wiring for a [`Game`]. Tests swap in a manual clock, a seeded
/// RNG and recording sinks.
pub struct GameConfig {
    pub clock: Box<dyn Clock>,
    pub rng: Box<dyn RngCore>,
    pub audio: Box<dyn AudioSink>,
    pub sink: Box<dyn CommitSink>,
    /// Initial surface size in pixels; updated by every rendered frame.
    pub surface_size: Vec2,
    /// Multiplies pointer displacement before the swing speed and tilt are
    /// measured. Coarse pointers (terminal cells) use more than 1.
    pub swing_scale: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock::new()),
            rng: Box::new(StdRng::from_entropy()),
            audio: Box::new(NullAudio),
            sink: Box::new(NullSink),
            surface_size: Vec2::new(800.0, 600.0),
            swing_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    /// Position at the previous move event; `None` outside the surface.
    pub last_position: Option<Vec2>,
}

/// Per-item bookkeeping that lives outside the progression document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    pub live_spiders: u32,
    pub bullets_fired: u32,
}

/// How [`Game::spawn_boxes`] dresses its particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub sprite: SpriteId,
    pub size: f64,
    pub gravity: f64,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            sprite: SpriteId::Box,
            size: BOX_BASE_SIZE,
            gravity: BOX_GRAVITY,
        }
    }
}

pub struct Game {
    pub rng: Box<dyn RngCore>,
    pub economy: Economy,
    pub sanity: SanityState,
    pub particles: ParticleSystem,
    pub character: Character,
    pub weapon_view: WeaponView,
    pub pointer: Pointer,
    pub item_state: ItemState,
    pub gauge: SanityGauge,
    pub(super) assets: Assets,
    pub(super) clock: Box<dyn Clock>,
    pub(super) timers: TimerQueue<TimedEvent>,
    pub(super) audio: Box<dyn AudioSink>,
    pub(super) surface_size: Vec2,
    pub(super) swing_scale: f64,
    pub(super) last_hit_ms: Option<f64>,
    pub(super) next_idle_sound_ms: Option<f64>,
    pub(super) last_frame_ms: Option<f64>,
    pub(super) accepting_input: bool,
}

impl Game {
    /// Preloads every asset and builds the context around a loaded document.
    /// Any asset failure aborts initialisation.
    pub fn init(
        data: ProgressionData,
        loader: &mut dyn AssetLoader,
        config: GameConfig,
    ) -> Result<Self, InitError> {
        let assets = Assets::preload(loader)?;
        let economy = Economy::new(data, config.sink);
        let max_sanity = economy.derived_stats().max_sanity;

        log::info!(
            "Simulation ready: {} equipped, balance {}",
            economy.selected_weapon().name,
            economy.balance()
        );

        Ok(Self {
            rng: config.rng,
            economy,
            sanity: SanityState::new(max_sanity),
            particles: ParticleSystem::new(),
            character: Character::new(),
            weapon_view: WeaponView::new(),
            pointer: Pointer::default(),
            item_state: ItemState::default(),
            gauge: SanityGauge::new(max_sanity),
            assets,
            clock: config.clock,
            timers: TimerQueue::new(),
            audio: config.audio,
            surface_size: config.surface_size,
            swing_scale: config.swing_scale,
            last_hit_ms: None,
            next_idle_sound_ms: None,
            last_frame_ms: None,
            accepting_input: true,
        })
    }

    /// Stops input, drops every pending timer and particle, and waits for
    /// queued saves.
    pub fn teardown(&mut self) {
        self.accepting_input = false;
        self.timers.clear();
        self.sanity.timer = None;
        self.particles.clear();
        self.item_state = ItemState::default();
        self.weapon_view.visible = false;
        self.weapon_view.chain = None;
        self.economy.flush();
        log::info!("Simulation torn down");
    }

    pub fn now(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    pub fn is_accepting_input(&self) -> bool {
        self.accepting_input
    }

    pub fn last_hit_ms(&self) -> Option<f64> {
        self.last_hit_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn derived_stats(&self) -> DerivedStats {
        self.economy.derived_stats()
    }

    pub fn character_center(&self) -> Vec2 {
        Character::center(self.surface_size.x, self.surface_size.y)
    }

    pub fn sanity_fraction(&self) -> f64 {
        self.sanity.fraction(self.derived_stats().max_sanity)
    }

    // ---- Sanity ----

    /// Applies a sanity delta and schedules whatever the transition needs.
    /// Ignored while in panic.
    pub fn change_sanity(&mut self, delta: f64) {
        let derived = self.derived_stats();
        match self.sanity.apply_delta(delta, derived.max_sanity) {
            SanityChange::Ignored | SanityChange::Full => {}
            SanityChange::Depleted => {
                self.cancel_sanity_timer();
                let deadline = self.now() + derived.regeneration_delay_ms;
                self.sanity.timer = Some(self.timers.schedule(deadline, TimedEvent::SanityRegen));
            }
            SanityChange::EnteredPanic => {
                self.cancel_sanity_timer();
                log::debug!("Panic entered");
                self.run_panic_hooks(|hooks| hooks.on_panic);

                let deadline = self.now() + self.derived_stats().panic_restore_delay_ms;
                self.sanity.timer = Some(self.timers.schedule(deadline, TimedEvent::PanicStep));
            }
        }
    }

    fn cancel_sanity_timer(&mut self) {
        if let Some(id) = self.sanity.timer.take() {
            self.timers.cancel(id);
        }
    }

    /// Weapon first, then armor.
    fn run_panic_hooks(&mut self, select: fn(&ItemHooks) -> Option<PanicHook>) {
        let weapon_hook = select(&self.economy.selected_weapon().hooks);
        let armor_hook = select(&self.economy.selected_armor().hooks);
        if let Some(hook) = weapon_hook {
            hook(self);
        }
        if let Some(hook) = armor_hook {
            hook(self);
        }
    }

    pub(super) fn run_hit_hooks(&mut self, hit: &HitParams) {
        let weapon_hook = self.economy.selected_weapon().hooks.on_hit;
        let armor_hook = self.economy.selected_armor().hooks.on_hit;
        if let Some(hook) = weapon_hook {
            hook(self, hit);
        }
        if let Some(hook) = armor_hook {
            hook(self, hit);
        }
    }

    // ---- Timers ----

    /// Fires every timer due at the current clock time, in deadline order.
    pub fn process_timers(&mut self) {
        let now = self.now();
        while let Some((id, deadline, event)) = self.timers.pop_due(now) {
            match event {
                TimedEvent::SanityRegen => {
                    if self.sanity.timer == Some(id) {
                        self.sanity.timer = None;
                    }
                    self.sanity.regenerate(self.derived_stats().max_sanity);
                }
                TimedEvent::PanicStep => {
                    let derived = self.derived_stats();
                    match self.sanity.panic_step(derived.max_sanity) {
                        PanicStep::Continue => {
                            let next = deadline + derived.panic_restore_delay_ms;
                            self.sanity.timer =
                                Some(self.timers.schedule(next, TimedEvent::PanicStep));
                        }
                        PanicStep::Recovered => {
                            log::debug!("Panic ended");
                            self.run_panic_hooks(|hooks| hooks.on_panic_end);
                        }
                    }
                }
                TimedEvent::RevertBonus(stats) => {
                    self.economy.add_bonus_stats(stats);
                    self.clamp_sanity();
                }
            }
        }
    }

    /// Adds `bonus` now and schedules its reversal after `duration_ms`.
    pub fn add_temporary_bonus(&mut self, bonus: Stats, duration_ms: f64) {
        self.economy.add_bonus_stats(bonus);
        let deadline = self.now() + duration_ms;
        self.timers.schedule(deadline, TimedEvent::RevertBonus(-bonus));
    }

    // ---- Particles ----

    /// Bursts `count` reward boxes out of `position`.
    pub fn spawn_boxes(&mut self, position: Vec2, count: u32, style: BoxStyle) {
        for _ in 0..count {
            let angle = random_range(&mut self.rng, 0.0, std::f64::consts::TAU);
            let speed = BOX_MIN_SPEED + self.rng.gen::<f64>() * BOX_SPEED_SPREAD;
            let velocity = Vec2::from_angle(angle, speed) - Vec2::new(0.0, BOX_LAUNCH_LIFT);
            self.particles.spawn(Particle {
                velocity,
                opacity_decay: BOX_OPACITY_DECAY,
                gravity: style.gravity,
                on_destroy: Some(DestroyAction::BoxPickup),
                ..Particle::new(position, style.sprite, style.size)
            });
        }
    }

    // ---- Audio ----

    /// Plays a cue unless sound is disabled in the progression settings.
    pub fn play_sound(&mut self, id: SoundId, playback_rate: f64, volume: f64) {
        if !self.economy.data().sound_enabled {
            return;
        }
        self.audio.play(SoundRequest {
            id,
            playback_rate,
            volume,
        });
    }

    pub(super) fn play_sound_varied(&mut self, id: SoundId, min_rate: f64, max_rate: f64) {
        let rate = random_range(&mut self.rng, min_rate, max_rate);
        self.play_sound(id, rate, 1.0);
    }

    // ---- Economy actions that need the RNG ----

    pub fn prestige(&mut self) -> bool {
        if !self.economy.reset(&mut self.rng) {
            return false;
        }
        self.clamp_sanity();
        true
    }

    // ---- Equipment ----
    //
    // Equipment feeds max sanity, so every change clamps.

    pub fn buy_weapon(&mut self, id: WeaponId) -> bool {
        let bought = self.economy.buy_weapon(id);
        self.clamp_sanity();
        bought
    }

    pub fn select_weapon(&mut self, id: WeaponId) -> bool {
        let selected = self.economy.select_weapon(id);
        self.clamp_sanity();
        selected
    }

    pub fn buy_armor(&mut self, id: ArmorId) -> bool {
        let bought = self.economy.buy_armor(id);
        self.clamp_sanity();
        bought
    }

    pub fn select_armor(&mut self, id: ArmorId) -> bool {
        let selected = self.economy.select_armor(id);
        self.clamp_sanity();
        selected
    }

    fn clamp_sanity(&mut self) {
        self.sanity.clamp_to(self.derived_stats().max_sanity);
    }

    pub fn roll_trinket(&mut self) -> Option<TrinketRoll> {
        self.economy.buy_trinket_roll(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::core::ManualClock;
    use rand_chacha::ChaCha8Rng;

    fn test_game(data: ProgressionData) -> (Game, ManualClock) {
        let clock = ManualClock::new();
        let config = GameConfig {
            clock: Box::new(clock.clone()),
            rng: Box::new(ChaCha8Rng::seed_from_u64(12345)),
            ..GameConfig::default()
        };
        let game = Game::init(data, &mut BuiltinAssets, config).unwrap();
        (game, clock)
    }

    #[test]
    fn test_init_starts_full() {
        let (game, _) = test_game(ProgressionData::default());
        assert_eq!(game.sanity.current, 80.0);
        assert!(!game.sanity.is_panic);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_regen_timer_resets_to_full() {
        let (mut game, clock) = test_game(ProgressionData::default());
        game.change_sanity(-10.0);
        assert_eq!(game.sanity.current, 70.0);
        assert_eq!(game.pending_timers(), 1);

        clock.advance(1000.0);
        game.change_sanity(-10.0);
        // superseded, still one timer
        assert_eq!(game.pending_timers(), 1);

        let delay = game.derived_stats().regeneration_delay_ms;
        clock.advance(delay - 1.0);
        game.process_timers();
        assert_eq!(game.sanity.current, 60.0);
        clock.advance(10.0);
        game.process_timers();
        assert_eq!(game.sanity.current, 80.0);
        assert_eq!(game.sanity.timer, None);
    }

    #[test]
    fn test_panic_runs_hooks_then_steps_back() {
        let (mut game, clock) = test_game(ProgressionData::default());
        game.change_sanity(-500.0);
        assert!(game.sanity.is_panic);
        // Penitence armor restores 20 on entering panic.
        assert_eq!(game.sanity.current, 20.0);

        let delay = game.derived_stats().panic_restore_delay_ms;
        clock.advance(delay * 59.0);
        game.process_timers();
        assert!(game.sanity.is_panic);
        assert_eq!(game.sanity.current, 79.0);
        clock.advance(delay);
        game.process_timers();
        assert!(!game.sanity.is_panic);
        assert_eq!(game.sanity.current, 80.0);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_temporary_bonus_reverts() {
        let (mut game, clock) = test_game(ProgressionData::default());
        game.add_temporary_bonus(Stats::new(0, 0, 1, 1), 2500.0);
        assert_eq!(game.economy.bonus_stats(), Stats::new(0, 0, 1, 1));
        clock.advance(2500.0);
        game.process_timers();
        assert_eq!(game.economy.bonus_stats(), Stats::ZERO);
    }

    #[test]
    fn test_smile_armor_bonus_after_panic() {
        let mut data = ProgressionData::default();
        data.bought_armor.insert(ArmorId::Smile);
        data.selected_armor = ArmorId::Smile;
        data.bought_weapons.insert(WeaponId::GoldRush);
        data.selected_weapon = WeaponId::GoldRush;
        let (mut game, clock) = test_game(data);

        game.change_sanity(-1000.0);
        assert!(game.sanity.is_panic);
        clock.advance(60_000.0);
        game.process_timers();
        assert!(!game.sanity.is_panic);
        assert_eq!(game.economy.bonus_stats(), Stats::new(5, 0, 5, 5));

        clock.advance(5000.0);
        game.process_timers();
        assert_eq!(game.economy.bonus_stats(), Stats::ZERO);
    }

    #[test]
    fn test_spawn_boxes_style() {
        let (mut game, _) = test_game(ProgressionData::default());
        game.spawn_boxes(Vec2::new(100.0, 100.0), 5, BoxStyle::default());
        assert_eq!(game.particles.len(), 5);
        for p in game.particles.iter() {
            assert_eq!(p.sprite, SpriteId::Box);
            assert_eq!(p.on_destroy, Some(DestroyAction::BoxPickup));
            assert!(p.velocity.length() < BOX_MIN_SPEED + BOX_SPEED_SPREAD + BOX_LAUNCH_LIFT);
        }
    }

    #[test]
    fn test_teardown_clears_state() {
        let (mut game, _) = test_game(ProgressionData::default());
        game.change_sanity(-10.0);
        game.spawn_boxes(Vec2::ZERO, 3, BoxStyle::default());
        game.teardown();
        assert_eq!(game.pending_timers(), 0);
        assert!(game.particles.is_empty());
        assert!(!game.is_accepting_input());
    }
}
