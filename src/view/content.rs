//! Browse area rendering (album grid, song list)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{BrowseTab, Catalog, PlayerState, UiState};
use super::utils::{format_duration, render_scrollable_list, truncate_string};

const GRID_COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 5;

pub fn render_browse(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    catalog: &Catalog,
    player: &PlayerState,
) {
    match ui_state.active_tab {
        BrowseTab::Albums => render_album_grid(frame, area, ui_state, catalog),
        BrowseTab::Songs => render_song_list(frame, area, ui_state, catalog, player),
    }
}

fn render_album_grid(frame: &mut Frame, area: Rect, ui_state: &UiState, catalog: &Catalog) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::uniform(1));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let row_count = catalog.albums.len().div_ceil(GRID_COLUMNS);
    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); row_count];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row_index, chunk) in catalog.albums.chunks(GRID_COLUMNS).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(rows[row_index]);

        for (col_index, album) in chunk.iter().enumerate() {
            let grid_index = row_index * GRID_COLUMNS + col_index;
            let is_selected = grid_index == ui_state.album_selected;

            let border_style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let title_style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let card = Paragraph::new(vec![
                Line::from(Span::styled(album.title.clone(), title_style)),
                Line::from(Span::styled(
                    album.year.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    format!("▦ {}", album.artwork),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            );

            frame.render_widget(card, columns[col_index]);
        }
    }
}

fn render_song_list(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    catalog: &Catalog,
    player: &PlayerState,
) {
    let content_width = area.width.saturating_sub(4) as usize;
    // " {num}  {marker} {title}   {duration}"
    let title_width = content_width.saturating_sub(3 + 2 + 2 + 3 + 5);

    let items: Vec<ListItem> = catalog
        .songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let is_current = song.id == player.current_song().id;
            let is_selected = i == ui_state.song_selected;

            let marker = if is_current && player.is_playing() {
                "▶"
            } else if is_current {
                "♪"
            } else {
                " "
            };

            let text = format!(
                " {:>2}  {} {}   {:>5}",
                i + 1,
                marker,
                truncate_string(&song.title, title_width),
                format_duration(song.duration_secs),
            );

            let style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(text).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));

    render_scrollable_list(frame, area, items, ui_state.song_selected, block);
}
