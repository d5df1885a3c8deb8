// wod-builder-tui/src/ui/placeholders.rs
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_history_placeholder(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::styled("History", Style::default().add_modifier(Modifier::BOLD)),
        Line::from("Past workouts will show up here."),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let api_url = app
        .service
        .api_base_url()
        .unwrap_or_else(|_| "(not set)".to_string());
    let config = &app.service.config;
    let text = vec![
        Line::styled("Settings", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!(
            "Config file:      {}",
            app.service.get_config_path().display()
        )),
        Line::from(format!("Catalog API URL:  {api_url}")),
        Line::from(format!(
            "Superset presets: {}",
            app.service.superset_preset_labels().join(", ")
        )),
        Line::from(format!(
            "Sets & reps:      {}",
            config.sets_reps_presets.join(", ")
        )),
        Line::from(format!("Timers:           {}", config.timer_presets.join(", "))),
        Line::from(format!("Toolbar preset:   {} Sets", config.toolbar_preset_count)),
        Line::from(""),
        Line::styled(
            "Edit the config file and restart to change these.",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
