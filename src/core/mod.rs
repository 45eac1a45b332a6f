//! Constants, time and geometry shared by every simulation component.

pub mod clock;
pub mod constants;
pub mod geometry;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::{OrientedRect, Vec2};
pub use timers::{TimerId, TimerQueue};
