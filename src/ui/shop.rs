//! Shop lists: stat/risk/equipment/prestige upgrades and the light shop.

use crate::character::StatType;
use crate::core::constants::{RESET_COST, TRINKET_ROLL_COST};
use crate::economy::{Economy, TrinketRoll};
use crate::items::{ArmorId, WeaponId};
use crate::simulation::Game;
use crate::trinkets::TrinketId;
use crate::ui::sprites::rarity_color;
use crate::utils::format_balance;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTab {
    Upgrades,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    UpgradeStat(StatType),
    UpgradeRisk,
    Weapon(WeaponId),
    Armor(ArmorId),
    Prestige,
    ToggleSound,
    RollTrinket,
    Trinket(TrinketId),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopLine {
    pub label: String,
    pub detail: String,
    pub enabled: bool,
    pub highlighted: bool,
    pub color: Option<Color>,
    pub action: ShopAction,
}

pub enum ShopOutcome {
    Nothing,
    Done(String),
    Rolled(TrinketRoll),
}

#[derive(Debug, Clone)]
pub struct ShopMenu {
    pub tab: ShopTab,
    pub selected: usize,
}

impl Default for ShopMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopMenu {
    pub fn new() -> Self {
        Self {
            tab: ShopTab::Upgrades,
            selected: 0,
        }
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            ShopTab::Upgrades => ShopTab::Light,
            ShopTab::Light => ShopTab::Upgrades,
        };
        self.selected = 0;
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn navigate_down(&mut self, economy: &Economy) {
        if self.selected + 1 < self.lines(economy).len() {
            self.selected += 1;
        }
    }

    pub fn lines(&self, economy: &Economy) -> Vec<ShopLine> {
        match self.tab {
            ShopTab::Upgrades => upgrade_lines(economy),
            ShopTab::Light => light_lines(economy),
        }
    }

    /// Runs the highlighted entry. Economy rules decide whether anything
    /// actually happens.
    pub fn activate(&mut self, game: &mut Game) -> ShopOutcome {
        let Some(line) = self.lines(&game.economy).into_iter().nth(self.selected) else {
            return ShopOutcome::Nothing;
        };

        let economy = &mut game.economy;
        let done = match line.action {
            ShopAction::UpgradeStat(stat) => economy
                .upgrade_stat(stat)
                .then(|| format!("{} raised", stat.name())),
            ShopAction::UpgradeRisk => economy
                .upgrade_risk()
                .then(|| format!("Risk level now {}", economy.data().risk_level.name())),
            ShopAction::Weapon(id) => {
                if economy.data().bought_weapons.contains(&id) {
                    game.select_weapon(id).then(|| format!("Equipped {}", line.label))
                } else {
                    game.buy_weapon(id).then(|| format!("Bought {}", line.label))
                }
            }
            ShopAction::Armor(id) => {
                if economy.data().bought_armor.contains(&id) {
                    game.select_armor(id).then(|| format!("Equipped {}", line.label))
                } else {
                    game.buy_armor(id).then(|| format!("Bought {}", line.label))
                }
            }
            ShopAction::ToggleSound => {
                economy.toggle_sound();
                Some(if economy.data().sound_enabled {
                    "Sound on".to_string()
                } else {
                    "Sound off".to_string()
                })
            }
            ShopAction::Trinket(id) => economy
                .select_trinket(id)
                .then(|| match economy.data().selected_trinket {
                    Some(_) => format!("Wearing {}", id.name()),
                    None => "Pendant removed".to_string(),
                }),
            ShopAction::Prestige => game
                .prestige()
                .then(|| format!("Loop {} begins", game.economy.data().loop_count)),
            ShopAction::RollTrinket => {
                return match game.roll_trinket() {
                    Some(roll) => ShopOutcome::Rolled(roll),
                    None => ShopOutcome::Nothing,
                };
            }
        };

        match done {
            Some(message) => ShopOutcome::Done(message),
            None => ShopOutcome::Nothing,
        }
    }
}

fn cost_text(cost: Option<u64>) -> String {
    format_balance(cost, "max")
}

fn upgrade_lines(economy: &Economy) -> Vec<ShopLine> {
    let data = economy.data();
    let mut lines = Vec::new();

    for stat in StatType::all() {
        lines.push(ShopLine {
            label: format!(
                "{} {}/{}",
                stat.name(),
                data.base_stats.get(stat),
                economy.max_stat_level()
            ),
            detail: cost_text(economy.stat_upgrade_cost(stat)),
            enabled: economy.can_upgrade_stat(stat),
            highlighted: false,
            color: None,
            action: ShopAction::UpgradeStat(stat),
        });
    }

    lines.push(ShopLine {
        label: match economy.next_risk_level() {
            Some(next) => format!("Risk {} -> {}", data.risk_level.name(), next.name()),
            None => format!("Risk {}", data.risk_level.name()),
        },
        detail: cost_text(economy.risk_upgrade_cost()),
        enabled: economy.can_upgrade_risk(),
        highlighted: false,
        color: None,
        action: ShopAction::UpgradeRisk,
    });

    for entry in economy.weapon_shop() {
        lines.push(ShopLine {
            label: entry.item.name.to_string(),
            detail: if entry.is_bought {
                "owned".to_string()
            } else {
                cost_text(Some(entry.item.cost))
            },
            enabled: entry.is_bought || economy.balance() >= entry.item.cost,
            highlighted: entry.is_selected,
            color: Some(Color::LightRed),
            action: ShopAction::Weapon(entry.item.id),
        });
    }

    for entry in economy.armor_shop() {
        lines.push(ShopLine {
            label: format!("{} armor", entry.item.name),
            detail: if entry.is_bought {
                "owned".to_string()
            } else {
                cost_text(Some(entry.item.cost))
            },
            enabled: entry.is_bought || economy.balance() >= entry.item.cost,
            highlighted: entry.is_selected,
            color: Some(Color::LightBlue),
            action: ShopAction::Armor(entry.item.id),
        });
    }

    lines.push(ShopLine {
        label: "Prestige".to_string(),
        detail: cost_text(Some(RESET_COST)),
        enabled: economy.can_reset(),
        highlighted: false,
        color: Some(Color::Magenta),
        action: ShopAction::Prestige,
    });

    lines.push(ShopLine {
        label: "Sound".to_string(),
        detail: if data.sound_enabled { "on" } else { "off" }.to_string(),
        enabled: true,
        highlighted: false,
        color: None,
        action: ShopAction::ToggleSound,
    });

    lines
}

fn light_lines(economy: &Economy) -> Vec<ShopLine> {
    let mut lines = vec![ShopLine {
        label: "Roll the reel".to_string(),
        detail: format!("{} shards", TRINKET_ROLL_COST),
        enabled: economy.can_buy_trinket_roll(),
        highlighted: false,
        color: Some(Color::Yellow),
        action: ShopAction::RollTrinket,
    }];

    for (_, listings) in economy.trinket_list() {
        for listing in listings {
            let crate::render::Rgb(r, g, b) = rarity_color(listing.id.rarity());
            lines.push(ShopLine {
                label: if listing.is_bought {
                    listing.id.name().to_string()
                } else {
                    "???".to_string()
                },
                detail: listing.id.rarity().name().to_string(),
                enabled: listing.is_bought,
                highlighted: listing.is_selected,
                color: Some(Color::Rgb(r, g, b)),
                action: ShopAction::Trinket(listing.id),
            });
        }
    }

    lines
}

pub fn draw_shop(frame: &mut Frame, area: Rect, menu: &ShopMenu, economy: &Economy) {
    let title = match menu.tab {
        ShopTab::Upgrades => " Shop [Tab: Light] ",
        ShopTab::Light => " Light Shop [Tab: Upgrades] ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let items: Vec<ListItem> = menu
        .lines(economy)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == menu.selected { "> " } else { "  " };
            let marker = if line.highlighted { "*" } else { " " };
            let mut style = Style::default().fg(line.color.unwrap_or(Color::White));
            if !line.enabled {
                style = style.fg(Color::DarkGray);
            }
            if i == menu.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}{}", prefix, marker, line.label), style),
                Span::styled(format!("  {}", line.detail), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::NullSink;
    use crate::progression::ProgressionData;

    #[test]
    fn test_upgrade_tab_layout() {
        let economy = Economy::new(ProgressionData::default(), Box::new(NullSink));
        let lines = ShopMenu::new().lines(&economy);
        // 4 stats, risk, 8 weapons, 6 armor, prestige, sound
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0].action, ShopAction::UpgradeStat(StatType::Fortitude));
        assert!(lines
            .iter()
            .any(|l| l.action == ShopAction::Weapon(WeaponId::Penitence) && l.highlighted));
        assert!(!lines.iter().any(|l| l.action == ShopAction::Prestige && l.enabled));
    }

    #[test]
    fn test_light_tab_hides_unowned_names() {
        let mut data = ProgressionData::default();
        data.bought_trinkets.insert(TrinketId::Dante);
        let economy = Economy::new(data, Box::new(NullSink));
        let mut menu = ShopMenu::new();
        menu.switch_tab();
        let lines = menu.lines(&economy);
        assert_eq!(lines.len(), 21);
        assert!(!lines[0].enabled);
        let dante = lines
            .iter()
            .find(|l| l.action == ShopAction::Trinket(TrinketId::Dante))
            .unwrap();
        assert_eq!(dante.label, "Dante");
        assert!(lines.iter().filter(|l| l.label == "???").count() == 19);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let economy = Economy::new(ProgressionData::default(), Box::new(NullSink));
        let mut menu = ShopMenu::new();
        menu.navigate_up();
        assert_eq!(menu.selected, 0);
        for _ in 0..100 {
            menu.navigate_down(&economy);
        }
        assert_eq!(menu.selected, 20);
    }
}
