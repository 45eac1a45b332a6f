//! Sound output seam. The simulation decides what to play; a sink decides how.

use crate::assets::SoundId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundRequest {
    pub id: SoundId,
    pub playback_rate: f64,
    pub volume: f64,
}

pub trait AudioSink {
    fn play(&mut self, request: SoundRequest);
}

/// Drops every request.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _request: SoundRequest) {}
}

/// Terminal front end: no mixer, so requests only reach the log.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, request: SoundRequest) {
        log::debug!(
            "play {} rate={:.2} volume={:.2}",
            request.id.key(),
            request.playback_rate,
            request.volume
        );
    }
}

/// Keeps every request. Clones share the same log, so a caller can hand one
/// clone to the simulation and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Rc<RefCell<Vec<SoundRequest>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundRequest> {
        self.played.borrow().clone()
    }

    pub fn ids(&self) -> Vec<SoundId> {
        self.played.borrow().iter().map(|r| r.id).collect()
    }

    pub fn last(&self) -> Option<SoundRequest> {
        self.played.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, request: SoundRequest) {
        log::trace!("sound {} x{:.2}", request.id.key(), request.playback_rate);
        self.played.borrow_mut().push(request);
    }
}
