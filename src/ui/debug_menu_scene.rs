//! `--debug` overlay: the cheat actions next to a live readout of the
//! simulation they act on.

use crate::simulation::Game;
use crate::trinkets::TRINKETS;
use crate::utils::debug_menu::{DebugMenu, DEBUG_OPTIONS};
use crate::utils::format_balance;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 64;
const ACTIONS_WIDTH: u16 = 30;

/// Label/value pairs describing the state the debug actions touch.
pub fn inspector_rows(game: &Game) -> Vec<(&'static str, String)> {
    let economy = &game.economy;
    let data = economy.data();
    let derived = game.derived_stats();
    let stats = economy.effective_stats();
    let bonus = economy.bonus_stats();

    let sanity_state = if game.sanity.is_panic {
        "PANIC"
    } else if game.sanity.current >= derived.max_sanity {
        "full"
    } else {
        "regenerating"
    };

    vec![
        (
            "Balance",
            format!(
                "{} / {}",
                format_balance(Some(economy.balance()), ""),
                format_balance(economy.max_balance(), "inf")
            ),
        ),
        ("Shards", data.light_shards.to_string()),
        ("Loop", data.loop_count.to_string()),
        (
            "Sanity",
            format!(
                "{:.0}/{:.0} {}",
                game.sanity.current, derived.max_sanity, sanity_state
            ),
        ),
        (
            "Stats",
            format!(
                "F{} P{} T{} J{}",
                stats.fortitude, stats.prudence, stats.temperance, stats.justice
            ),
        ),
        (
            "Bonus",
            format!(
                "F{:+} P{:+} T{:+} J{:+}",
                bonus.fortitude, bonus.prudence, bonus.temperance, bonus.justice
            ),
        ),
        ("Timers", game.pending_timers().to_string()),
        ("Particles", game.particles.len().to_string()),
        (
            "Trinkets",
            format!("{}/{} owned", data.bought_trinkets.len(), TRINKETS.len()),
        ),
    ]
}

pub fn render_debug_menu(frame: &mut Frame, area: Rect, menu: &DebugMenu, game: &Game) {
    let rows = inspector_rows(game);
    let height = (rows.len().max(DEBUG_OPTIONS.len() + 2) + 3) as u16;
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(OVERLAY_WIDTH) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: OVERLAY_WIDTH.min(area.width),
        height: height.min(area.height),
    };
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let [body, help] = split_help(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(ACTIONS_WIDTH), Constraint::Min(10)])
        .split(body);

    let actions: Vec<ListItem> = DEBUG_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == menu.selected_index {
                ListItem::new(format!("> {}", option)).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", option))
            }
        })
        .collect();
    frame.render_widget(List::new(actions), columns[0]);

    let readout: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            let color = if value.ends_with("PANIC") {
                Color::Red
            } else {
                Color::White
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(Color::Gray)),
                Span::styled(value, Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(readout), columns[1]);

    frame.render_widget(
        Paragraph::new("Up/Down select  Enter run  ` close")
            .style(Style::default().fg(Color::DarkGray)),
        help,
    );
}

fn split_help(inner: Rect) -> [Rect; 2] {
    let help_height = inner.height.min(1);
    [
        Rect {
            height: inner.height - help_height,
            ..inner
        },
        Rect {
            y: inner.y + inner.height - help_height,
            height: help_height,
            ..inner
        },
    ]
}

/// Corner tag shown whenever `--debug` is on; turns red during panic.
pub fn render_debug_indicator(frame: &mut Frame, area: Rect, game: &Game) {
    let (text, color) = if game.sanity.is_panic {
        ("[DEBUG:PANIC]", Color::Red)
    } else {
        ("[DEBUG]", Color::Yellow)
    };
    let width = (text.len() as u16).min(area.width);
    let tag = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        tag,
    );
}
