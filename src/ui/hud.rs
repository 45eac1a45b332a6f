use crate::character::StatType;
use crate::simulation::Game;
use crate::utils::format_balance;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Side panel: balance, progression and the derived stat sheet.
pub fn draw_hud(frame: &mut Frame, area: Rect, game: &Game, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Wallet
            Constraint::Min(0),    // Stats
        ])
        .split(area);

    draw_wallet(frame, chunks[0], game, message);
    draw_stats(frame, chunks[1], game);
}

fn draw_wallet(frame: &mut Frame, area: Rect, game: &Game, message: Option<&str>) {
    let data = game.economy.data();
    let balance_color = if game.economy.is_full_balance() {
        Color::Red
    } else {
        Color::Yellow
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Boxes  "),
            Span::styled(
                format_balance(Some(data.balance), "∞"),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" / {}", format_balance(game.economy.max_balance(), "∞")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("Risk   {}", data.risk_level.name())),
        Line::from(format!(
            "Loop   {}    Light shards {}",
            data.loop_count, data.light_shards
        )),
        Line::from(Span::styled(
            message.unwrap_or("").to_string(),
            Style::default().fg(Color::Cyan),
        )),
    ];

    let block = Block::default().title(" Glupo ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_stats(frame: &mut Frame, area: Rect, game: &Game) {
    let effective = game.economy.effective_stats();
    let bonus = game.economy.bonus_stats();
    let derived = game.derived_stats();

    let mut lines: Vec<Line> = StatType::all()
        .iter()
        .map(|stat| {
            let extra = bonus.get(*stat);
            let mut spans = vec![Span::raw(format!(
                "{} {:>3}",
                stat.abbrev(),
                effective.get(*stat)
            ))];
            if extra != 0 {
                spans.push(Span::styled(
                    format!(" ({:+})", extra),
                    Style::default().fg(Color::Green),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let sanity_style = if game.sanity.is_panic {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightBlue)
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Sanity {:.0}/{:.0}{}",
            game.sanity.current,
            derived.max_sanity,
            if game.sanity.is_panic { " PANIC" } else { "" }
        ),
        sanity_style,
    )));
    lines.push(Line::from(format!(
        "Boxes/hit {}-{} x{}",
        derived.min_boxes, derived.max_boxes, derived.box_price
    )));
    lines.push(Line::from(format!(
        "Crit {:.0}% x{}",
        derived.critical_chance * 100.0,
        derived.critical_multiplier
    )));
    lines.push(Line::from(format!(
        "Cooldown {:.0}ms (x{:.1})",
        derived.real_cooldown_ms, derived.cooldown_modifier
    )));
    lines.push(Line::from(format!(
        "Regen {:.0}ms  Panic step {:.0}ms",
        derived.regeneration_delay_ms, derived.panic_restore_delay_ms
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{} / {} armor",
        game.economy.selected_weapon().name,
        game.economy.selected_armor().name
    )));
    if let Some(trinket) = game.economy.data().selected_trinket {
        lines.push(Line::from(format!("Pendant: {}", trinket.name())));
    }

    let block = Block::default().title(" Stats ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
