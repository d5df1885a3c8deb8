// wod-builder-tui/src/ui/wod_tab.rs
use crate::app::{App, CatalogRow, WodPane, WorkoutRow};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use wod_builder_lib::{CollectionRef, Focus, LoadState};

pub fn render_wod_tab(f: &mut Frame, app: &mut App, area: Rect) {
    match app.loader.state() {
        LoadState::Loaded(_) => {}
        LoadState::Idle | LoadState::Loading => {
            render_centered_message(f, area, vec![Line::from("Loading exercises...")]);
            return;
        }
        LoadState::Failed(message) => {
            let lines = vec![
                Line::styled(message.clone(), Style::default().fg(Color::Red)),
                Line::from(""),
                Line::styled("Press 'r' to retry.", italic()),
            ];
            render_centered_message(f, area, lines);
            return;
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_workout_panel(f, app, chunks[0]);
    render_catalog_panel(f, app, chunks[1]);
}

fn render_centered_message(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let block = Block::default().borders(Borders::ALL).title("WOD");
    let inner = block.inner(area);
    f.render_widget(block, area);
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height.saturating_sub(top),
        ..inner
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, text_area);
}

fn italic() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

fn pane_block(title: &str, active: bool) -> Block<'_> {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn render_workout_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let active = app.wod_pane == WodPane::Workout;
    let block = pane_block("WOD", active);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let toolbar = Line::from(vec![
        Span::styled("[+]", Style::default().fg(Color::Green)),
        Span::raw(" Exercise  "),
        Span::styled("[-]", Style::default().fg(Color::Green)),
        Span::raw(" Line  "),
        Span::styled("[p]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {} Sets", app.service.config.toolbar_preset_count)),
    ]);
    f.render_widget(Paragraph::new(toolbar), chunks[0]);

    let rows = app.workout_rows();
    if rows.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::styled("No exercises yet.", italic()),
            Line::from("Pick one from the catalog or press '+'."),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hint, chunks[1]);
        return;
    }

    let focus = app.builder.focus();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(workout_row_line(app, *row, focus)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.workout_list_state);
}

fn workout_row_line(app: &App, row: WorkoutRow, focus: Focus) -> Line<'static> {
    let workout = app.workout();
    match row {
        WorkoutRow::GroupHeader(group) => {
            let label = workout
                .group(group)
                .map(|g| g.label.clone())
                .unwrap_or_default();
            let marker = if focus == Focus::group_title(group) { "● " } else { "" };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("┌ {label}"),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        WorkoutRow::GroupAdd(_) => Line::from(Span::styled(
            "│ + Add Exercise",
            Style::default().fg(Color::DarkGray),
        )),
        WorkoutRow::Item(at) => {
            let Some(item) = workout.item(&at) else {
                return Line::from("");
            };
            let mut spans = Vec::new();
            if Focus::from(at) == focus {
                spans.push(Span::raw("● "));
            }
            if let CollectionRef::Group(_) = at.collection {
                spans.push(Span::styled("│ ", Style::default().fg(Color::Blue)));
            }
            if item.is_divider() {
                spans.push(Span::styled(
                    "────────────",
                    Style::default().fg(Color::DarkGray),
                ));
                return Line::from(spans);
            }
            if item.text.is_empty() {
                spans.push(Span::styled(
                    "(blank)",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            } else {
                spans.push(Span::raw(item.text.clone()));
            }
            if let Some(sets_reps) = item.sets_reps.as_deref().filter(|s| !s.is_empty()) {
                spans.push(Span::styled(
                    format!("  {sets_reps}"),
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        }
    }
}

fn render_catalog_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let active = app.wod_pane == WodPane::Catalog;
    let block = pane_block("Exercises", active);

    let rows = app.catalog_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(catalog_row_line(app, *row)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.catalog_list_state);
}

fn expand_marker(expanded: bool) -> &'static str {
    if expanded {
        "▼ "
    } else {
        "▶ "
    }
}

fn catalog_row_line(app: &App, row: CatalogRow) -> Line<'static> {
    match row {
        CatalogRow::Category(ci) => {
            let name = app
                .loader
                .catalog()
                .and_then(|c| c.categories().get(ci))
                .map(|c| c.name.clone())
                .unwrap_or_default();
            let marker = expand_marker(app.is_expanded(&name));
            Line::from(Span::styled(
                format!("{marker}{name}"),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        }
        CatalogRow::Exercise(ci, ei) => {
            let name = app
                .loader
                .catalog()
                .and_then(|c| c.categories().get(ci))
                .and_then(|c| c.exercises.get(ei))
                .cloned()
                .unwrap_or_default();
            Line::from(format!("    {name}"))
        }
        CatalogRow::Section(section) => {
            let marker = expand_marker(app.is_expanded(section.title()));
            Line::from(Span::styled(
                format!("{marker}{}", section.title()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
        }
        CatalogRow::Preset(section, i) => {
            let value = app
                .preset_values(section)
                .get(i)
                .cloned()
                .unwrap_or_default();
            Line::from(Span::styled(
                format!("    {value}"),
                Style::default().fg(Color::Magenta),
            ))
        }
    }
}
