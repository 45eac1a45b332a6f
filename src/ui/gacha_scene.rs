//! Animated reel for a trinket roll.
//!
//! The reel decelerates from the first item onto the winner. Every item that
//! passes the marker ticks, alternating cues on index parity, and landing
//! plays the fanfare.

use crate::assets::SoundId;
use crate::economy::TrinketRoll;
use crate::simulation::Game;
use crate::ui::sprites::rarity_color;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SPIN_MS: f64 = 4000.0;
const VISIBLE_SIDE: usize = 3;

pub struct GachaScene {
    roll: TrinketRoll,
    started_ms: f64,
    /// Fractional reel position under the marker.
    position: f64,
    last_ticked: usize,
    finished: bool,
}

/// Cubic ease-out on `[0, 1]`.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

impl GachaScene {
    pub fn new(roll: TrinketRoll, now_ms: f64) -> Self {
        Self {
            roll,
            started_ms: now_ms,
            position: 0.0,
            last_ticked: 0,
            finished: false,
        }
    }

    pub fn roll(&self) -> &TrinketRoll {
        &self.roll
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_index(&self) -> usize {
        self.position.round() as usize
    }

    /// Advances the animation and plays its cues through the game.
    pub fn update(&mut self, game: &mut Game) {
        if self.finished {
            return;
        }
        let t = (game.now() - self.started_ms) / SPIN_MS;
        self.position = ease_out(t) * self.roll.winner_index as f64;

        let index = self.current_index();
        if index != self.last_ticked {
            self.last_ticked = index;
            let tick = if index % 2 == 0 {
                SoundId::GachaTick1
            } else {
                SoundId::GachaTick2
            };
            game.play_sound(tick, 1.0, 1.0);
        }

        if t >= 1.0 {
            self.finished = true;
            game.play_sound(SoundId::GachaFanfare, 1.0, 1.0);
        }
    }

    /// Jumps straight to the result.
    pub fn skip(&mut self, game: &mut Game) {
        if !self.finished {
            self.started_ms = game.now() - SPIN_MS;
            self.update(game);
        }
    }
}

pub fn draw_gacha(frame: &mut Frame, area: Rect, scene: &GachaScene) {
    let width = area.width.min(70);
    let height = 9;
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Light Reel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let reel = &scene.roll.reel;
    let center = scene.current_index();
    let mut spans = Vec::new();
    for offset in -(VISIBLE_SIDE as i64)..=VISIBLE_SIDE as i64 {
        let index = center as i64 + offset;
        let Some(id) = usize::try_from(index).ok().and_then(|i| reel.get(i)) else {
            spans.push(Span::raw("      "));
            continue;
        };
        let crate::render::Rgb(r, g, b) = rarity_color(id.rarity());
        let mut style = Style::default().fg(Color::Rgb(r, g, b));
        if offset == 0 {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let name: String = id.name().chars().take(6).collect();
        spans.push(Span::styled(format!(" {:^6}", name), style));
    }

    let result = if scene.is_finished() {
        let winner = scene.roll.winner;
        Line::from(format!(
            "{} ({}){}",
            winner.name(),
            winner.rarity().name(),
            if scene.roll.is_new { "  NEW!" } else { "" }
        ))
    } else {
        Line::from("...")
    };

    let text = vec![
        Line::from(""),
        Line::from("v").alignment(Alignment::Center),
        Line::from(spans).alignment(Alignment::Center),
        Line::from("^").alignment(Alignment::Center),
        Line::from(""),
        result.alignment(Alignment::Center),
        Line::from("[Enter] Skip / Close").style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::core::ManualClock;
    use crate::progression::ProgressionData;
    use crate::simulation::{GameConfig, RecordingAudio};
    use crate::trinkets::TrinketId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roll() -> TrinketRoll {
        TrinketRoll {
            reel: vec![TrinketId::Dante; 40],
            winner: TrinketId::Dante,
            winner_index: 20,
            is_new: true,
        }
    }

    fn game() -> (Game, ManualClock, RecordingAudio) {
        let clock = ManualClock::new();
        let audio = RecordingAudio::new();
        let config = GameConfig {
            clock: Box::new(clock.clone()),
            rng: Box::new(ChaCha8Rng::seed_from_u64(12345)),
            audio: Box::new(audio.clone()),
            ..GameConfig::default()
        };
        let game = Game::init(ProgressionData::default(), &mut BuiltinAssets, config).unwrap();
        (game, clock, audio)
    }

    #[test]
    fn test_lands_on_winner_with_fanfare() {
        let (mut game, clock, audio) = game();
        let mut scene = GachaScene::new(roll(), 0.0);
        for _ in 0..300 {
            clock.advance(16.0);
            scene.update(&mut game);
        }
        assert!(scene.is_finished());
        assert_eq!(scene.current_index(), 20);
        let ids = audio.ids();
        assert_eq!(ids.last(), Some(&SoundId::GachaFanfare));
        assert_eq!(ids.iter().filter(|id| **id == SoundId::GachaFanfare).count(), 1);
        assert!(ids.contains(&SoundId::GachaTick1));
        assert!(ids.contains(&SoundId::GachaTick2));
    }

    #[test]
    fn test_skip_finishes_immediately() {
        let (mut game, _, audio) = game();
        let mut scene = GachaScene::new(roll(), 0.0);
        scene.skip(&mut game);
        assert!(scene.is_finished());
        assert_eq!(scene.current_index(), 20);
        assert_eq!(audio.last().map(|r| r.id), Some(SoundId::GachaFanfare));
    }
}
