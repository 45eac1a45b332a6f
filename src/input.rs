//! Input handling for the terminal front end.
//!
//! Keys drive the shop and overlays through a priority chain; mouse motion
//! and focus changes become pointer events for the simulation.

use crate::ui::gacha_scene::GachaScene;
use crate::ui::shop::ShopOutcome;
use crate::ui::App;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Main dispatcher for key input. Handles the priority chain.
pub fn handle_key(key: KeyEvent, app: &mut App) -> InputResult {
    // 1. Gacha reel (blocks all other input)
    if app.gacha.is_some() {
        handle_gacha(key, app);
        return InputResult::Continue;
    }

    // 2. Debug menu
    if app.debug_mode {
        if key.code == KeyCode::Char('`') {
            app.debug_menu.toggle();
            return InputResult::Continue;
        }
        if app.debug_menu.is_open {
            handle_debug_menu(key, app);
            return InputResult::Continue;
        }
    }

    // 3. Shop and global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Up => app.shop.navigate_up(),
        KeyCode::Down => app.shop.navigate_down(&app.game.economy),
        KeyCode::Tab => app.shop.switch_tab(),
        KeyCode::Enter => activate_shop(app),
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.game.economy.toggle_sound();
            let state = if app.game.economy.data().sound_enabled {
                "on"
            } else {
                "off"
            };
            app.set_message(format!("Sound {}", state));
        }
        _ => {}
    }
    InputResult::Continue
}

fn handle_gacha(key: KeyEvent, app: &mut App) {
    if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
        return;
    }
    let Some(scene) = app.gacha.as_mut() else {
        return;
    };
    if scene.is_finished() {
        let winner = scene.roll().winner;
        app.gacha = None;
        app.set_message(format!("Obtained {}", winner.name()));
    } else {
        scene.skip(&mut app.game);
    }
}

fn handle_debug_menu(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => app.debug_menu.navigate_up(),
        KeyCode::Down => app.debug_menu.navigate_down(),
        KeyCode::Enter => {
            let msg = app.debug_menu.trigger_selected(&mut app.game);
            app.set_message(msg);
        }
        KeyCode::Esc => app.debug_menu.close(),
        _ => {}
    }
}

fn activate_shop(app: &mut App) {
    match app.shop.activate(&mut app.game) {
        ShopOutcome::Done(message) => app.set_message(message),
        ShopOutcome::Rolled(roll) => {
            log::info!(
                "Rolled {} at reel index {}",
                roll.winner.name(),
                roll.winner_index
            );
            app.gacha = Some(GachaScene::new(roll, app.game.now()));
        }
        ShopOutcome::Nothing => app.set_message("Not available"),
    }
}

/// Mouse motion inside the play area swings the weapon; leaving it hides it.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        return;
    }
    if app.gacha.is_some() {
        return;
    }
    match app.surface_point(mouse.column, mouse.row) {
        Some(point) if app.game.pointer.last_position.is_some() => app.game.pointer_move(point),
        Some(point) => app.game.pointer_enter(point),
        None => {
            if app.game.pointer.last_position.is_some() {
                app.game.pointer_leave();
            }
        }
    }
}

/// Terminal focus loss counts as the pointer leaving the surface.
pub fn handle_focus(gained: bool, app: &mut App) {
    if !gained {
        app.game.pointer_leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::economy::TrinketRoll;
    use crate::progression::ProgressionData;
    use crate::simulation::{Game, GameConfig};
    use crate::trinkets::TrinketId;
    use crate::ui::cell_surface::SWING_SCALE;
    use crate::ui::shop::ShopTab;
    use crossterm::event::{KeyModifiers, MouseButton};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::layout::Rect;

    fn app(data: ProgressionData, debug_mode: bool) -> App {
        let game = Game::init(data, &mut BuiltinAssets, GameConfig::default()).unwrap();
        let mut app = App::new(game, debug_mode);
        app.play_area = Rect::new(0, 0, 50, 19);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(ProgressionData::default(), false);
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut app), InputResult::Quit);
        assert_eq!(handle_key(key(KeyCode::Esc), &mut app), InputResult::Quit);
        assert_eq!(handle_key(key(KeyCode::Down), &mut app), InputResult::Continue);
        assert_eq!(app.shop.selected, 1);
    }

    #[test]
    fn test_tab_switches_shop() {
        let mut app = app(ProgressionData::default(), false);
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.shop.tab, ShopTab::Light);
    }

    #[test]
    fn test_enter_buys_stat_upgrade() {
        let mut data = ProgressionData::default();
        data.balance = 100;
        let mut app = app(data, false);
        handle_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.game.economy.balance(), 0);
        assert!(app.message().is_some());
    }

    #[test]
    fn test_gacha_blocks_other_keys() {
        let mut app = app(ProgressionData::default(), false);
        let roll = TrinketRoll {
            reel: vec![TrinketId::Dante; 10],
            winner: TrinketId::Dante,
            winner_index: 5,
            is_new: true,
        };
        app.gacha = Some(GachaScene::new(roll, app.game.now()));

        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut app), InputResult::Continue);
        handle_key(key(KeyCode::Enter), &mut app);
        assert!(app.gacha.as_ref().is_some_and(|s| s.is_finished()));
        handle_key(key(KeyCode::Enter), &mut app);
        assert!(app.gacha.is_none());
    }

    #[test]
    fn test_debug_menu_only_in_debug_mode() {
        let mut app = app(ProgressionData::default(), false);
        handle_key(key(KeyCode::Char('`')), &mut app);
        assert!(!app.debug_menu.is_open);

        let mut app = self::app(ProgressionData::default(), true);
        handle_key(key(KeyCode::Char('`')), &mut app);
        assert!(app.debug_menu.is_open);
        handle_key(key(KeyCode::Enter), &mut app);
        assert!(!app.debug_menu.is_open);
        assert_eq!(app.game.economy.balance(), 500);
    }

    #[test]
    fn test_mouse_enter_move_leave() {
        let mut app = app(ProgressionData::default(), false);
        handle_mouse(mouse(MouseEventKind::Moved, 2, 2), &mut app);
        assert!(app.game.weapon_view.visible);
        assert!(app.game.pointer.last_position.is_some());

        handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2), &mut app);
        assert_eq!(app.game.pointer.position.x, 72.0);

        handle_mouse(mouse(MouseEventKind::Moved, 60, 2), &mut app);
        assert!(!app.game.weapon_view.visible);
        assert!(app.game.pointer.last_position.is_none());
    }

    #[test]
    fn test_one_column_swing_hits_with_cell_scale() {
        let config = GameConfig {
            rng: Box::new(ChaCha8Rng::seed_from_u64(12345)),
            swing_scale: SWING_SCALE,
            ..GameConfig::default()
        };
        let game = Game::init(ProgressionData::default(), &mut BuiltinAssets, config).unwrap();
        let mut app = App::new(game, false);
        app.play_area = Rect::new(0, 0, 50, 19);

        // Column 24, row 7 sits on the character centre (400, 240)
        handle_mouse(mouse(MouseEventKind::Moved, 23, 7), &mut app);
        handle_mouse(mouse(MouseEventKind::Moved, 24, 7), &mut app);
        assert!(app.game.last_hit_ms().is_some());
        assert!(app.game.economy.balance() > 0);
    }

    #[test]
    fn test_one_column_swing_misses_unscaled() {
        let mut app = app(ProgressionData::default(), false);
        handle_mouse(mouse(MouseEventKind::Moved, 23, 7), &mut app);
        handle_mouse(mouse(MouseEventKind::Moved, 24, 7), &mut app);
        assert!(app.game.last_hit_ms().is_none());
    }

    #[test]
    fn test_focus_lost_hides_weapon() {
        let mut app = app(ProgressionData::default(), false);
        handle_mouse(mouse(MouseEventKind::Moved, 2, 2), &mut app);
        handle_focus(false, &mut app);
        assert!(!app.game.weapon_view.visible);
    }
}
