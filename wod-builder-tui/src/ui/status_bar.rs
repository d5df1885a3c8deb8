// wod-builder-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, ActiveTab, App, WodPane};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
        ActiveModal::None => match app.active_tab {
            ActiveTab::Wod => match app.wod_pane {
                WodPane::Workout => "[Tab] Focus | [↑↓/jk] Nav | [e]dit | [s]ets | [i]nsert | [d]elete | [JK] Move | [c]opy | [?] Help | [q]uit ",
                WodPane::Catalog => "[Tab] Focus | [↑↓/jk] Nav | [Enter] Select | [+/-/p] Add | [c]opy | [x] Clear | [?] Help | [q]uit ",
            },
            ActiveTab::History | ActiveTab::Settings => "[F1] WOD | [?] Help | [q]uit ",
        },
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::EditText { .. } | ActiveModal::EditLabel { .. } => {
            " [Esc] Cancel | [Enter] Save "
        }
        ActiveModal::SetsReps { .. } => " [Esc] Cancel | [Enter] Confirm | [Tab] Navigate ",
        ActiveModal::ConfirmClear => " [y] Clear | [n/Esc] Keep ",
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let (message, color) = match (&app.last_error, &app.last_info) {
        (Some(err), _) => (err.as_str(), Color::Red),
        (None, Some(info)) => (info.as_str(), Color::Green),
        (None, None) => ("", Color::White),
    };
    let message_paragraph = Paragraph::new(message)
        .style(Style::default().bg(Color::DarkGray).fg(color))
        .alignment(Alignment::Right);
    f.render_widget(message_paragraph, status_chunks[1]);
}
