//! The simulation context and everything that drives it: pointer input,
//! the hit pipeline, timers and per-frame update/draw.

pub mod audio;
pub mod frame;
pub mod game;
pub mod gauge;
pub mod hit;
pub mod weapon_view;

pub use audio::{AudioSink, LogAudio, NullAudio, RecordingAudio, SoundRequest};
pub use game::{BoxStyle, Game, GameConfig, InitError, ItemState, Pointer, TimedEvent};
pub use gauge::SanityGauge;
pub use hit::{box_tier, hurt_chance};
pub use weapon_view::WeaponView;
