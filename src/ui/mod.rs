pub mod cell_surface;
pub mod debug_menu_scene;
pub mod gacha_scene;
pub mod hud;
pub mod shop;
pub mod sprites;

use crate::core::Vec2;
use crate::simulation::Game;
use crate::ui::cell_surface::CellSurface;
use crate::ui::gacha_scene::{draw_gacha, GachaScene};
use crate::ui::shop::{draw_shop, ShopMenu};
use crate::utils::debug_menu::DebugMenu;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SIDE_PANEL_WIDTH: u16 = 46;
const MESSAGE_MS: f64 = 3000.0;

/// Everything the terminal front end owns besides the simulation itself.
pub struct App {
    pub game: Game,
    pub surface: CellSurface,
    pub shop: ShopMenu,
    pub gacha: Option<GachaScene>,
    pub debug_menu: DebugMenu,
    pub debug_mode: bool,
    /// Inner rect of the play area as last drawn, for mouse mapping.
    pub play_area: Rect,
    message: Option<(String, f64)>,
}

impl App {
    pub fn new(game: Game, debug_mode: bool) -> Self {
        Self {
            game,
            surface: CellSurface::new(0, 0),
            shop: ShopMenu::new(),
            gacha: None,
            debug_menu: DebugMenu::new(),
            debug_mode,
            play_area: Rect::default(),
            message: None,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), self.game.now()));
    }

    pub fn message(&self) -> Option<&str> {
        match &self.message {
            Some((text, at)) if self.game.now() - at < MESSAGE_MS => Some(text.as_str()),
            _ => None,
        }
    }

    /// Maps a terminal cell to surface pixels, or `None` outside the play area.
    pub fn surface_point(&self, column: u16, row: u16) -> Option<Vec2> {
        let area = self.play_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| CellSurface::cell_center(column - area.x, row - area.y))
    }

    /// Advances animations that run outside the simulation frame.
    pub fn tick(&mut self) {
        if let Some(scene) = self.gacha.as_mut() {
            scene.update(&mut self.game);
        }
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.size();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(size);

    draw_play_area(frame, columns[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(22), // HUD
            Constraint::Min(6),     // Shop
            Constraint::Length(1),  // Footer
        ])
        .split(columns[1]);

    hud::draw_hud(frame, side[0], &app.game, app.message());
    draw_shop(frame, side[1], &app.shop, &app.game.economy);
    draw_footer(frame, side[2]);

    if let Some(scene) = &app.gacha {
        draw_gacha(frame, size, scene);
    }

    if app.debug_mode {
        debug_menu_scene::render_debug_indicator(frame, size, &app.game);
        if app.debug_menu.is_open {
            debug_menu_scene::render_debug_menu(frame, size, &app.debug_menu, &app.game);
        }
    }
}

fn draw_play_area(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.play_area = inner;
    app.surface.resize(inner.width, inner.height);
    let now = app.game.now();
    app.game.render_frame(&mut app.surface, now);
    frame.render_widget(&app.surface, inner);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("[Mouse] Swing  [↑/↓/Enter] Shop  [Tab] Tab  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
