//! Core TUI application state and event loop.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use battlemenu_core::{ActorMenu, WindowRect, build_actor_menu_at, help_text, place_help_window};
use battlemenu_data::{Database, GameParty};
use battlemenu_menu::MenuBuilder;
use battlemenu_shared::{ActorId, AppConfig, load_config};

use crate::widgets::status_bar;

/// Application state.
pub(crate) struct App {
    db: Database,
    data_dir: PathBuf,
    config: AppConfig,
    builder: MenuBuilder,
    /// Actor ids in id order; `selected_actor` indexes into this.
    actor_ids: Vec<ActorId>,
    pub selected_actor: usize,
    pub selected_entry: usize,
    /// Preview level; `None` uses each actor's initial level.
    level_override: Option<u32>,
    /// Full catalog inventory vs. an empty bag.
    full_inventory: bool,
    /// Resolved menu for the selected actor.
    menu: Option<ActorMenu>,
    pub should_quit: bool,
    pub show_help: bool,
    pub status: String,
}

impl App {
    fn new(data_dir: PathBuf) -> Result<Self> {
        let config = load_config()?;
        let db = Database::load(&data_dir)?;
        let builder = MenuBuilder::new(config.commands.force_default);
        let actor_ids: Vec<ActorId> = db.actors().map(|a| a.data.id).collect();

        let mut app = Self {
            db,
            data_dir,
            config,
            builder,
            actor_ids,
            selected_actor: 0,
            selected_entry: 0,
            level_override: None,
            full_inventory: true,
            menu: None,
            should_quit: false,
            show_help: false,
            status: "Ready — press ? for help".to_string(),
        };
        app.rebuild_menu();
        Ok(app)
    }

    fn selected_actor_id(&self) -> Option<ActorId> {
        self.actor_ids.get(self.selected_actor).copied()
    }

    /// Level shown in the pane title: the override, or the actor's own.
    fn effective_level(&self) -> u32 {
        if let Some(level) = self.level_override {
            return level;
        }
        self.selected_actor_id()
            .and_then(|id| self.db.actor(id))
            .map(|a| a.data.initial_level)
            .unwrap_or(1)
    }

    fn party(&self) -> GameParty {
        if self.full_inventory {
            GameParty::with_all_items(&self.db)
        } else {
            GameParty::with_items(std::iter::empty::<u32>())
        }
    }

    fn rebuild_menu(&mut self) {
        let Some(actor_id) = self.selected_actor_id() else {
            self.menu = None;
            self.status = "No actors in the database.".to_string();
            return;
        };

        match build_actor_menu_at(
            &self.db,
            &self.party(),
            actor_id,
            self.level_override,
            &self.builder,
        ) {
            Ok(menu) => {
                if self.selected_entry >= menu.entries.len() {
                    self.selected_entry = menu.entries.len().saturating_sub(1);
                }
                self.menu = Some(menu);
            }
            Err(e) => {
                self.menu = None;
                self.status = format!("Menu build failed: {e}");
            }
        }
    }

    fn reload_database(&mut self) {
        match Database::load(&self.data_dir) {
            Ok(db) => {
                self.db = db;
                self.actor_ids = self.db.actors().map(|a| a.data.id).collect();
                if self.selected_actor >= self.actor_ids.len() {
                    self.selected_actor = self.actor_ids.len().saturating_sub(1);
                }
                self.status = format!("Reloaded {}", self.data_dir.display());
                self.rebuild_menu();
            }
            Err(e) => {
                self.status = format!("Reload failed: {e}");
            }
        }
    }
}

/// Entry point — sets up terminal, runs event loop, restores terminal.
pub(crate) fn run(data_dir: Option<PathBuf>) -> Result<()> {
    // Resolve the data directory before touching the terminal so load
    // errors print normally.
    let config = load_config()?;
    let dir = data_dir.unwrap_or_else(|| PathBuf::from(&config.data.directory));
    let mut app = App::new(dir)?;

    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Global keybindings (always active)
    match code {
        KeyCode::Char('q') | KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // If help is showing, consume any key to dismiss
    if app.show_help {
        app.show_help = false;
        return;
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selected_entry > 0 {
                app.selected_entry -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app.menu.as_ref().map(|m| m.entries.len()).unwrap_or(0);
            if app.selected_entry + 1 < count {
                app.selected_entry += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.selected_actor > 0 {
                app.selected_actor -= 1;
                app.selected_entry = 0;
                app.rebuild_menu();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.selected_actor + 1 < app.actor_ids.len() {
                app.selected_actor += 1;
                app.selected_entry = 0;
                app.rebuild_menu();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.level_override = Some(app.effective_level() + 1);
            app.status = format!("Previewing at level {}", app.effective_level());
            app.rebuild_menu();
        }
        KeyCode::Char('-') => {
            let level = app.effective_level().saturating_sub(1).max(1);
            app.level_override = Some(level);
            app.status = format!("Previewing at level {level}");
            app.rebuild_menu();
        }
        KeyCode::Char('0') => {
            app.level_override = None;
            app.status = "Previewing at initial levels".to_string();
            app.rebuild_menu();
        }
        KeyCode::Char('i') => {
            app.full_inventory = !app.full_inventory;
            app.status = if app.full_inventory {
                "Party owns every item".to_string()
            } else {
                "Party inventory emptied".to_string()
            };
            app.rebuild_menu();
        }
        KeyCode::Char('r') => {
            app.reload_database();
        }
        _ => {}
    }
}

fn draw(f: &mut Frame, app: &App) {
    let show_help_panel = app.config.help.show;
    let mut constraints = vec![Constraint::Min(1)]; // Content
    if show_help_panel {
        constraints.push(Constraint::Length(4)); // Description panel
    }
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(chunks[0]);

    draw_actor_list(f, app, panes[0]);
    draw_menu_pane(f, app, panes[1]);

    if show_help_panel {
        draw_description_panel(f, app, chunks[1], chunks[chunks.len() - 1]);
    }

    // Status bar
    let bar = status_bar(&app.status);
    f.render_widget(bar, chunks[chunks.len() - 1]);

    // Help overlay
    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_actor_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .actor_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let name = app
                .db
                .actor(*id)
                .map(|a| a.data.name.clone())
                .unwrap_or_default();
            let style = if i == app.selected_actor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if i == app.selected_actor { "▸ " } else { "  " };
            ListItem::new(format!("{prefix}{id:>3}  {name}")).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Actors ({}) ", app.actor_ids.len())),
    );
    f.render_widget(list, area);
}

fn draw_menu_pane(f: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = &app.menu else {
        let empty = Paragraph::new("No menu to show.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Commands "));
        f.render_widget(empty, area);
        return;
    };

    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut style = if i == app.selected_entry {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut label = entry.label.clone();
            if !entry.enabled {
                style = style.fg(Color::DarkGray);
                label.push_str("  (disabled)");
            }
            let prefix = if i == app.selected_entry { "▸ " } else { "  " };
            ListItem::new(format!("{prefix}{label}")).style(style)
        })
        .collect();

    let title = format!(
        " {} — Lv {} — {} command(s) ",
        menu.actor_name,
        app.effective_level(),
        menu.entries.len()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

/// Description panel for the highlighted entry, placed the way the battle
/// screen would place its help window.
fn draw_description_panel(f: &mut Frame, app: &App, default_area: Rect, status_area: Rect) {
    let text = app
        .menu
        .as_ref()
        .and_then(|m| m.entries.get(app.selected_entry))
        .and_then(|entry| help_text(entry, &app.db))
        .unwrap_or_default();

    let area = match place_help_window(
        &app.config.help,
        rect_to_window(default_area),
        rect_to_window(status_area),
    ) {
        Some(placed) => window_to_rect(placed, f.area()),
        // Host-default placement keeps the layout slot.
        None => default_area,
    };

    let panel = Paragraph::new(text)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Description "));
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(panel, area);
}

fn rect_to_window(rect: Rect) -> WindowRect {
    WindowRect {
        x: rect.x as i32,
        y: rect.y as i32,
        width: rect.width as u32,
        height: rect.height as u32,
    }
}

/// Clamp a placed window back into the terminal area.
fn window_to_rect(window: WindowRect, bounds: Rect) -> Rect {
    let x = window.x.clamp(0, bounds.width.saturating_sub(1) as i32) as u16;
    let y = window.y.clamp(0, bounds.height.saturating_sub(1) as i32) as u16;
    Rect {
        x,
        y,
        width: window.width.min((bounds.width - x) as u32) as u16,
        height: window.height.min((bounds.height - y) as u32) as u16,
    }
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  ↑/↓ or k/j   Select command entry"),
        Line::from("  ←/→ or h/l   Previous/next actor"),
        Line::from("  + / -        Raise/lower preview level"),
        Line::from("  0            Reset to initial levels"),
        Line::from("  i            Toggle party inventory"),
        Line::from("  r            Reload data files"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}

/// Create a centered rectangle with percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
