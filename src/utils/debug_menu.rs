//! Debug menu for testing progression without grinding.
//!
//! Activated with `--debug` flag. Press backtick to toggle menu.

use crate::simulation::Game;

/// Menu options available in debug mode
pub const DEBUG_OPTIONS: &[&str] = &[
    "Fill Balance + Light Shards",
    "Reset Trinkets",
    "Trigger Panic",
];

/// Debug menu state
#[derive(Debug, Clone, Default)]
pub struct DebugMenu {
    pub is_open: bool,
    pub selected_index: usize,
}

impl DebugMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < DEBUG_OPTIONS.len() {
            self.selected_index += 1;
        }
    }

    /// Trigger the selected debug action. Returns a message describing what happened.
    pub fn trigger_selected(&mut self, game: &mut Game) -> &'static str {
        let msg = match self.selected_index {
            0 => trigger_cheat(game),
            1 => trigger_reset_trinkets(game),
            2 => trigger_panic(game),
            _ => "Unknown option",
        };
        self.close();
        msg
    }
}

fn trigger_cheat(game: &mut Game) -> &'static str {
    game.economy.cheat();
    "Balance filled, light shards granted!"
}

fn trigger_reset_trinkets(game: &mut Game) -> &'static str {
    game.economy.reset_trinkets();
    "Trinkets cleared!"
}

fn trigger_panic(game: &mut Game) -> &'static str {
    if game.sanity.is_panic {
        return "Already panicking!";
    }
    let current = game.sanity.current;
    game.change_sanity(-current);
    "Panic triggered!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::core::constants::CHEAT_LIGHT_SHARDS;
    use crate::progression::ProgressionData;
    use crate::simulation::GameConfig;
    use crate::trinkets::TrinketId;

    fn test_game(data: ProgressionData) -> Game {
        Game::init(data, &mut BuiltinAssets, GameConfig::default()).unwrap()
    }

    #[test]
    fn test_menu_navigation() {
        let mut menu = DebugMenu::new();
        menu.open();
        assert_eq!(menu.selected_index, 0);

        menu.navigate_down();
        menu.navigate_down();
        assert_eq!(menu.selected_index, 2);

        // Can't go past end
        menu.navigate_down();
        assert_eq!(menu.selected_index, 2);

        // Can't go before start
        menu.navigate_up();
        menu.navigate_up();
        menu.navigate_up();
        assert_eq!(menu.selected_index, 0);
    }

    #[test]
    fn test_toggle() {
        let mut menu = DebugMenu::new();
        assert!(!menu.is_open);

        menu.toggle();
        assert!(menu.is_open);

        menu.toggle();
        assert!(!menu.is_open);
    }

    #[test]
    fn test_trigger_cheat() {
        let mut game = test_game(ProgressionData::default());
        let mut menu = DebugMenu::new();
        menu.open();
        let msg = menu.trigger_selected(&mut game);
        assert_eq!(msg, "Balance filled, light shards granted!");
        assert_eq!(game.economy.balance(), 500);
        assert_eq!(game.economy.data().light_shards, CHEAT_LIGHT_SHARDS);
        assert!(!menu.is_open);
    }

    #[test]
    fn test_trigger_reset_trinkets() {
        let mut data = ProgressionData::default();
        data.bought_trinkets.insert(TrinketId::Ayin);
        data.selected_trinket = Some(TrinketId::Ayin);
        let mut game = test_game(data);
        assert_eq!(trigger_reset_trinkets(&mut game), "Trinkets cleared!");
        assert!(game.economy.data().bought_trinkets.is_empty());
        assert_eq!(game.economy.data().selected_trinket, None);
    }

    #[test]
    fn test_trigger_panic() {
        let mut game = test_game(ProgressionData::default());
        assert_eq!(trigger_panic(&mut game), "Panic triggered!");
        assert!(game.sanity.is_panic);

        // Can't trigger again
        assert_eq!(trigger_panic(&mut game), "Already panicking!");
    }
}
