//! Layout rendering (artist header, tab bar)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{BrowseTab, Catalog, UiState};

pub fn render_header(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let summary = format!(
        "Artist · {} albums · {} songs",
        catalog.albums.len(),
        catalog.songs.len()
    );

    let lines = vec![
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Blue)),
            Span::styled(
                catalog.artist.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray))),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, area);
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let titles = [BrowseTab::Albums, BrowseTab::Songs].map(|t| Line::from(t.title()));
    let selected = match ui_state.active_tab {
        BrowseTab::Albums => 0,
        BrowseTab::Songs => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(tabs, area);
}
