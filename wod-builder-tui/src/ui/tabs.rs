// wod-builder-tui/src/ui/tabs.rs
use crate::app::{ActiveTab, App};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles = vec!["WOD (F1)", "History (F2)", "Settings (F3)"];
    let selected = match app.active_tab {
        ActiveTab::Wod => 0,
        ActiveTab::History => 1,
        ActiveTab::Settings => 2,
    };
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("WOD Builder"))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}
