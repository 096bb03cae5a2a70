//! Now-playing rendering: the mini bar and the expanded full-screen player

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph},
    Frame,
};

use crate::model::PlayerState;
use super::utils::format_duration;

/// Rows the collapsed mini bar occupies at the bottom of the screen
pub const MINI_PLAYER_HEIGHT: u16 = 3;

/// Scale between drag coordinate units and terminal rows. Gesture input is
/// multiplied by this on the way into the state machine, and the expanded
/// player's drag offset is divided by it on the way back out to rows.
pub const POINTS_PER_ROW: f32 = 40.0;

/// Where the mini bar sits; the gesture controller hit-tests taps against
/// the same rectangle the renderer draws into.
pub fn mini_player_area(screen: Rect) -> Rect {
    let height = MINI_PLAYER_HEIGHT.min(screen.height);
    Rect {
        x: screen.x,
        y: screen.bottom() - height,
        width: screen.width,
        height,
    }
}

pub fn render_mini_player(frame: &mut Frame, area: Rect, player: &PlayerState) {
    let song = player.current_song();

    let status_text = if player.is_playing() {
        format!(" ▶ {} | {} ", song.title, song.artist)
    } else {
        format!(" ⏸ {} | {} ", song.title, song.artist)
    };

    let time_str = format!(
        "{} / {}",
        format_duration(player.progress()),
        format_duration(song.duration_secs)
    );

    let progress_ratio = if song.duration_secs > 0.0 {
        (player.progress() / song.duration_secs).clamp(0.0, 1.0) as f64
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status_text)
                .title_bottom(Line::from(" O Open | Space Play/Pause ").right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}

/// Draws the full-screen player over the browse screen. While a dismiss
/// drag is in flight the whole sheet rides down with it, revealing the
/// screen underneath.
pub fn render_expanded_player(frame: &mut Frame, player: &PlayerState) {
    let screen = frame.area();
    let drag_rows = (player.drag_offset() / POINTS_PER_ROW).round() as u16;
    if drag_rows >= screen.height {
        return;
    }

    let area = Rect {
        x: screen.x,
        y: screen.y + drag_rows,
        width: screen.width,
        height: screen.height - drag_rows,
    };

    frame.render_widget(Clear, area);

    let sheet = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" ▂▂▂ ").centered())
        .title_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = sheet.inner(area);
    frame.render_widget(sheet, area);

    if inner.height < 8 {
        // Not enough room mid-drag for the full layout; keep just the bar
        render_progress_section(frame, inner, player);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Artwork
            Constraint::Length(3), // Title + artist
            Constraint::Length(3), // Progress gauge
            Constraint::Length(1), // Controls hint
        ])
        .split(inner);

    render_artwork(frame, chunks[0], player);

    let song = player.current_song();
    let title_lines = vec![
        Line::from(Span::styled(
            song.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            song.artist.clone(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(title_lines), chunks[1]);

    render_progress_section(frame, chunks[2], player);

    let hint = Line::from(Span::styled(
        "Space Play/Pause | ←/→ Seek | Esc Close | drag ↓ to dismiss",
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[3]);
}

fn render_artwork(frame: &mut Frame, area: Rect, player: &PlayerState) {
    let song = player.current_song();

    // Keep the artwork panel roughly square-ish and centered
    let width = (area.height.saturating_mul(2)).clamp(16, area.width.saturating_sub(2).max(16));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let panel = Rect {
        x,
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    };

    let glyph_row = panel.height / 2;
    let lines: Vec<Line> = (0..panel.height)
        .map(|row| {
            if row == glyph_row {
                Line::from(Span::styled(
                    "♪",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ))
                .centered()
            } else {
                Line::from("")
            }
        })
        .collect();

    let artwork = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(format!(" {} ", song.artwork)).centered())
            .title_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(artwork, panel);
}

fn render_progress_section(frame: &mut Frame, area: Rect, player: &PlayerState) {
    let song = player.current_song();

    let progress_ratio = if song.duration_secs > 0.0 {
        (player.progress() / song.duration_secs).clamp(0.0, 1.0) as f64
    } else {
        0.0
    };

    let time_str = format!(
        "{} / {}",
        format_duration(player.progress()),
        format_duration(song.duration_secs)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mini_bar_hugs_the_bottom_edge() {
        let screen = Rect::new(0, 0, 80, 24);
        let bar = mini_player_area(screen);
        assert_eq!(bar.bottom(), screen.bottom());
        assert_eq!(bar.height, MINI_PLAYER_HEIGHT);
        assert_eq!(bar.width, screen.width);
    }

    #[test]
    fn mini_bar_fits_a_tiny_screen() {
        let screen = Rect::new(0, 0, 20, 2);
        let bar = mini_player_area(screen);
        assert_eq!(bar.height, 2);
        assert_eq!(bar.bottom(), screen.bottom());
    }
}
