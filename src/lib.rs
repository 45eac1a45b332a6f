//! Glupo - a terminal reward-engine toy.
//!
//! This module exposes the simulation for testing and for the binary.

pub mod assets;
pub mod chain;
pub mod character;
pub mod core;
pub mod economy;
pub mod input;
pub mod items;
pub mod particles;
pub mod progression;
pub mod render;
pub mod sanity;
pub mod simulation;
pub mod trinkets;
pub mod ui;
pub mod utils;
