// src/app/modals.rs
use super::navigation_helpers::{list_next, list_previous};
use super::state::{ActiveModal, App, SetsRepsField};
use crossterm::event::{KeyCode, KeyEvent};

// Shared single-line text editing for modal inputs
fn edit_input(input: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        _ => {}
    }
}

pub fn handle_help_modal_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
            app.active_modal = ActiveModal::None;
        }
        _ => {}
    }
}

pub fn handle_edit_text_modal_input(app: &mut App, key: KeyEvent) {
    if let ActiveModal::EditText { target, input } = &mut app.active_modal {
        match key.code {
            KeyCode::Esc => app.active_modal = ActiveModal::None,
            KeyCode::Enter => {
                let (target, text) = (*target, std::mem::take(input));
                app.active_modal = ActiveModal::None;
                if !app.builder.edit_text(&target, &text) {
                    app.set_error("That item no longer exists".to_string());
                }
            }
            _ => edit_input(input, key),
        }
    }
}

pub fn handle_edit_label_modal_input(app: &mut App, key: KeyEvent) {
    if let ActiveModal::EditLabel { group, input } = &mut app.active_modal {
        match key.code {
            KeyCode::Esc => app.active_modal = ActiveModal::None,
            KeyCode::Enter => {
                let (group, raw) = (*group, std::mem::take(input));
                app.active_modal = ActiveModal::None;
                // Non-digits are stripped by the builder
                app.builder.edit_superset_label(group, &raw);
            }
            _ => edit_input(input, key),
        }
    }
}

pub fn handle_sets_reps_modal_input(app: &mut App, key: KeyEvent) {
    let preset_count = app.service.config.sets_reps_presets.len();
    let mut save: Option<(wod_builder_lib::ItemRef, String)> = None;
    let mut close = false;

    if let ActiveModal::SetsReps {
        target,
        input,
        focused_field,
        preset_state,
    } = &mut app.active_modal
    {
        match key.code {
            KeyCode::Esc => close = true,
            KeyCode::Tab => {
                *focused_field = match *focused_field {
                    SetsRepsField::Presets => SetsRepsField::Input,
                    SetsRepsField::Input => SetsRepsField::Save,
                    SetsRepsField::Save => SetsRepsField::Cancel,
                    SetsRepsField::Cancel => SetsRepsField::Presets,
                };
            }
            KeyCode::BackTab => {
                *focused_field = match *focused_field {
                    SetsRepsField::Presets => SetsRepsField::Cancel,
                    SetsRepsField::Input => SetsRepsField::Presets,
                    SetsRepsField::Save => SetsRepsField::Input,
                    SetsRepsField::Cancel => SetsRepsField::Save,
                };
            }
            _ => match *focused_field {
                SetsRepsField::Presets => match key.code {
                    KeyCode::Char('k') | KeyCode::Up => list_previous(preset_state, preset_count),
                    KeyCode::Char('j') | KeyCode::Down => list_next(preset_state, preset_count),
                    KeyCode::Enter => {
                        // Picking a preset fills the input, Save still has to be pressed
                        if let Some(preset) = preset_state
                            .selected()
                            .and_then(|i| app.service.config.sets_reps_presets.get(i))
                        {
                            *input = preset.clone();
                            *focused_field = SetsRepsField::Input;
                        }
                    }
                    _ => {}
                },
                SetsRepsField::Input => match key.code {
                    KeyCode::Enter => save = Some((*target, input.clone())),
                    _ => edit_input(input, key),
                },
                SetsRepsField::Save => {
                    if key.code == KeyCode::Enter {
                        save = Some((*target, input.clone()));
                    }
                }
                SetsRepsField::Cancel => {
                    if key.code == KeyCode::Enter {
                        close = true;
                    }
                }
            },
        }
    }

    if let Some((target, value)) = save {
        app.active_modal = ActiveModal::None;
        if !app.builder.edit_sets_reps(&target, &value) {
            app.set_error("That item no longer exists".to_string());
        }
    } else if close {
        app.active_modal = ActiveModal::None;
    }
}

pub fn handle_confirm_clear_modal_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.active_modal = ActiveModal::None;
            app.clear_workout();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.active_modal = ActiveModal::None;
        }
        _ => {}
    }
}
