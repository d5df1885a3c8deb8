// src/app/input.rs
use super::modals::{
    handle_confirm_clear_modal_input, handle_edit_label_modal_input, handle_edit_text_modal_input,
    handle_help_modal_input, handle_sets_reps_modal_input,
};
use super::state::{ActiveModal, ActiveTab, App, WodPane};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use wod_builder_lib::LoadState;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            self.handle_modal_input(key);
            return Ok(());
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::F(1) => self.active_tab = ActiveTab::Wod,
            KeyCode::F(2) => self.active_tab = ActiveTab::History,
            KeyCode::F(3) => self.active_tab = ActiveTab::Settings,
            _ => match self.active_tab {
                ActiveTab::Wod => self.handle_wod_input(key),
                ActiveTab::History | ActiveTab::Settings => {}
            },
        }
        Ok(())
    }

    fn handle_modal_input(&mut self, key: KeyEvent) {
        match self.active_modal {
            ActiveModal::Help => handle_help_modal_input(self, key),
            ActiveModal::EditText { .. } => handle_edit_text_modal_input(self, key),
            ActiveModal::EditLabel { .. } => handle_edit_label_modal_input(self, key),
            ActiveModal::SetsReps { .. } => handle_sets_reps_modal_input(self, key),
            ActiveModal::ConfirmClear => handle_confirm_clear_modal_input(self, key),
            ActiveModal::None => {}
        }
    }

    fn handle_wod_input(&mut self, key: KeyEvent) {
        // Until the catalog is in, the only thing to do is retry
        match self.loader.state() {
            LoadState::Loaded(_) => {}
            LoadState::Failed(_) | LoadState::Idle => {
                if key.code == KeyCode::Char('r') {
                    self.start_catalog_load();
                }
                return;
            }
            LoadState::Loading => return,
        }

        // Keys that work from either pane
        match key.code {
            KeyCode::Tab => {
                self.wod_pane = match self.wod_pane {
                    WodPane::Workout => WodPane::Catalog,
                    WodPane::Catalog => WodPane::Workout,
                };
                return;
            }
            KeyCode::Char('+') => return self.add_blank_at_focus(),
            KeyCode::Char('-') => return self.add_divider_at_focus(),
            KeyCode::Char('p') => return self.add_preset_at_focus(),
            KeyCode::Char('c') => return self.copy_workout(),
            KeyCode::Char('x') => return self.open_clear_confirmation(),
            KeyCode::Char('r') => return self.start_catalog_load(),
            _ => {}
        }

        match self.wod_pane {
            WodPane::Workout => match key.code {
                KeyCode::Char('k') | KeyCode::Up => self.workout_previous(),
                KeyCode::Char('j') | KeyCode::Down => self.workout_next(),
                KeyCode::Char('K') => self.move_selected(false),
                KeyCode::Char('J') => self.move_selected(true),
                KeyCode::Char('e') | KeyCode::Enter => self.open_edit_modal(),
                KeyCode::Char('s') => self.open_sets_reps_modal(),
                KeyCode::Char('i') => self.insert_after_selected(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                _ => {}
            },
            WodPane::Catalog => match key.code {
                KeyCode::Char('k') | KeyCode::Up => self.catalog_previous(),
                KeyCode::Char('j') | KeyCode::Down => self.catalog_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_catalog_row(),
                _ => {}
            },
        }
    }
}
