// wod-builder-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App, SetsRepsField},
    ui::layout::{centered_rect, centered_rect_fixed},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &mut App) {
    // The preset list keeps its selection in the modal state
    if let ActiveModal::SetsReps { .. } = app.active_modal {
        return render_sets_reps_modal(f, app);
    }
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::EditText { input, .. } => {
            render_input_modal(f, "Edit Exercise", "Text:", input)
        }
        ActiveModal::EditLabel { input, .. } => {
            render_input_modal(f, "Edit Superset", "Number of sets:", input)
        }
        ActiveModal::ConfirmClear => render_confirm_clear_modal(f),
        ActiveModal::SetsReps { .. } | ActiveModal::None => {}
    }
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::new().yellow())
}

fn focused_style(focused: bool) -> Style {
    if focused {
        Style::default().reversed()
    } else {
        Style::default()
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 75, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" F1-F3: Switch Tabs"),
        Line::from(""),
        Line::from("--- WOD Tab (F1) ---").style(Style::new().bold().underlined()),
        Line::from(" Tab: Switch Focus (WOD <=> Exercises)"),
        Line::from(" k / ↑, j / ↓: Navigate"),
        Line::from(" +: Add Blank Exercise"),
        Line::from(" -: Add Divider Line"),
        Line::from(" p: Add Superset Preset"),
        Line::from(" c: Copy Workout To Clipboard"),
        Line::from(" x: Clear Workout"),
        Line::from(" r: Reload Exercises"),
        Line::from(""),
        Line::from("--- WOD List ---").style(Style::new().bold().underlined()),
        Line::from(" e / Enter: Edit Text Or Superset Sets"),
        Line::from(" s: Edit Sets & Reps"),
        Line::from(" i: Insert Blank Exercise After"),
        Line::from(" d / Delete: Delete Exercise Or Superset"),
        Line::from(" K / J: Move Exercise Up / Down"),
        Line::from(""),
        Line::from("--- Exercises List ---").style(Style::new().bold().underlined()),
        Line::from(" Enter / Space: Expand Section Or Add Exercise"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_input_modal(f: &mut Frame, title: &str, prompt: &str, input: &str) {
    let area = centered_rect_fixed(50, 7, f.size());
    f.render_widget(Clear, area);
    f.render_widget(modal_block(title), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    f.render_widget(Paragraph::new(prompt), chunks[0]);
    f.render_widget(
        Paragraph::new(input).style(Style::default().reversed()),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(" [Enter] Save  [Esc] Cancel ").style(Style::new().italic().dark_gray()),
        chunks[3],
    );
    f.set_cursor(chunks[1].x + input.chars().count() as u16, chunks[1].y);
}

fn render_sets_reps_modal(f: &mut Frame, app: &mut App) {
    let presets = app.service.config.sets_reps_presets.clone();
    let ActiveModal::SetsReps {
        input,
        focused_field,
        preset_state,
        ..
    } = &mut app.active_modal
    else {
        return;
    };

    let height = presets.len() as u16 + 9;
    let area = centered_rect_fixed(50, height, f.size());
    f.render_widget(Clear, area);
    f.render_widget(modal_block("Sets & Reps"), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Presets label
            Constraint::Length(presets.len() as u16), // Preset list
            Constraint::Length(1),                    // Spacer
            Constraint::Length(1),                    // Input label
            Constraint::Length(1),                    // Input
            Constraint::Length(1),                    // Spacer
            Constraint::Length(1),                    // Buttons
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    let presets_focused = *focused_field == SetsRepsField::Presets;
    f.render_widget(Paragraph::new("Presets:"), chunks[0]);
    let items: Vec<ListItem> = presets.into_iter().map(ListItem::new).collect();
    let mut list = List::new(items).highlight_symbol("> ");
    if presets_focused {
        list = list.highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    }
    f.render_stateful_widget(list, chunks[1], preset_state);

    f.render_widget(Paragraph::new("Custom:"), chunks[3]);
    f.render_widget(
        Paragraph::new(input.as_str())
            .style(focused_style(*focused_field == SetsRepsField::Input)),
        chunks[4],
    );

    render_buttons(
        f,
        chunks[6],
        *focused_field == SetsRepsField::Save,
        *focused_field == SetsRepsField::Cancel,
    );

    if *focused_field == SetsRepsField::Input {
        f.set_cursor(chunks[4].x + input.chars().count() as u16, chunks[4].y);
    }
}

fn render_buttons(f: &mut Frame, area: Rect, ok_focused: bool, cancel_focused: bool) {
    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ok_button = Paragraph::new(" Save ")
        .alignment(Alignment::Center)
        .style(focused_style(ok_focused));
    f.render_widget(ok_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(focused_style(cancel_focused));
    f.render_widget(cancel_button, button_layout[1]);
}

fn render_confirm_clear_modal(f: &mut Frame) {
    let area = centered_rect_fixed(40, 5, f.size());
    f.render_widget(Clear, area);
    let text = vec![
        Line::from("Clear the whole workout?"),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Red)),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().fg(Color::Green)),
            Span::raw(" No"),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .block(modal_block("Confirm"))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
