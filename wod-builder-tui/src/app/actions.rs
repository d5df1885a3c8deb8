// src/app/actions.rs
use super::navigation_helpers::{clamp_selection, list_next, list_previous};
use super::state::{ActiveModal, App, CatalogRow, PresetSection, SetsRepsField, WorkoutRow};
use crate::clipboard::copy_to_clipboard;
use ratatui::widgets::ListState;
use wod_builder_lib::{Focus, ItemRef};

impl App {
    // Moving the cursor onto a row is the terminal version of tapping a field
    pub(crate) fn sync_focus_with_selection(&mut self) {
        match self.selected_workout_row() {
            Some(WorkoutRow::GroupHeader(group) | WorkoutRow::GroupAdd(group)) => {
                self.builder.set_focus(Focus::group_title(group));
            }
            Some(WorkoutRow::Item(at)) => self.builder.set_focus(Focus::from(at)),
            None => {}
        }
    }

    pub(crate) fn workout_next(&mut self) {
        let len = self.workout_rows().len();
        list_next(&mut self.workout_list_state, len);
        self.sync_focus_with_selection();
    }

    pub(crate) fn workout_previous(&mut self) {
        let len = self.workout_rows().len();
        list_previous(&mut self.workout_list_state, len);
        self.sync_focus_with_selection();
    }

    pub(crate) fn catalog_next(&mut self) {
        let len = self.catalog_rows().len();
        list_next(&mut self.catalog_list_state, len);
    }

    pub(crate) fn catalog_previous(&mut self) {
        let len = self.catalog_rows().len();
        list_previous(&mut self.catalog_list_state, len);
    }

    // Row count changes after every mutation, keep the cursor valid
    fn after_workout_change(&mut self) {
        let len = self.workout_rows().len();
        clamp_selection(&mut self.workout_list_state, len);
    }

    fn select_workout_row(&mut self, target: WorkoutRow) {
        if let Some(index) = self.workout_rows().iter().position(|row| *row == target) {
            self.workout_list_state.select(Some(index));
        }
    }

    // --- Catalog panel ---

    pub(crate) fn toggle_section(&mut self, name: &str) {
        let entry = self.expanded.entry(name.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Enter on a catalog row: expand/collapse headers, apply entries.
    pub(crate) fn activate_catalog_row(&mut self) {
        let Some(row) = self.selected_catalog_row() else {
            return;
        };
        match row {
            CatalogRow::Category(ci) => {
                let name = self
                    .loader
                    .catalog()
                    .and_then(|c| c.categories().get(ci))
                    .map(|c| c.name.clone());
                if let Some(name) = name {
                    self.toggle_section(&name);
                }
            }
            CatalogRow::Section(section) => self.toggle_section(section.title()),
            CatalogRow::Exercise(ci, ei) => {
                let name = self
                    .loader
                    .catalog()
                    .and_then(|c| c.categories().get(ci))
                    .and_then(|c| c.exercises.get(ei))
                    .cloned();
                if let Some(name) = name {
                    self.builder.select_from_catalog(&name);
                    self.set_info(format!("Added {name}"));
                }
            }
            CatalogRow::Preset(section, index) => {
                let Some(value) = self.preset_values(section).get(index).cloned() else {
                    return;
                };
                match section {
                    PresetSection::Supersets => {
                        self.builder.add_superset(&value);
                    }
                    PresetSection::SetsReps => {
                        if !self.builder.apply_sets_reps_to_focus(&value) {
                            self.set_error("Focus an exercise first".to_string());
                        }
                    }
                    PresetSection::Timer => {
                        self.builder.select_from_catalog(&value);
                    }
                }
            }
        }
        self.after_workout_change();
    }

    // --- Toolbar ---

    pub(crate) fn add_blank_at_focus(&mut self) {
        self.builder.add_blank_at_focus();
        self.after_workout_change();
    }

    pub(crate) fn add_divider_at_focus(&mut self) {
        self.builder.add_divider_at_focus();
        self.after_workout_change();
    }

    pub(crate) fn add_preset_at_focus(&mut self) {
        let count = self.service.config.toolbar_preset_count;
        self.builder.add_preset_at_focus(count);
        self.after_workout_change();
    }

    // --- Row actions ---

    pub(crate) fn insert_after_selected(&mut self) {
        match self.selected_workout_row() {
            Some(WorkoutRow::Item(at)) => {
                self.builder.insert_after(&at);
            }
            Some(WorkoutRow::GroupHeader(group) | WorkoutRow::GroupAdd(group)) => {
                self.builder.add_blank_to_group(group, None);
            }
            None => {
                self.builder.add_blank();
            }
        }
        self.after_workout_change();
    }

    pub(crate) fn delete_selected(&mut self) {
        match self.selected_workout_row() {
            Some(WorkoutRow::Item(at)) => {
                if let Some(id) = self.workout().item(&at).map(|item| item.id) {
                    self.builder.delete(id);
                }
            }
            Some(WorkoutRow::GroupHeader(group)) => {
                self.builder.delete_superset(group);
            }
            Some(WorkoutRow::GroupAdd(_)) | None => return,
        }
        self.after_workout_change();
    }

    /// Keyboard drag: moves the selected item one step within its collection.
    pub(crate) fn move_selected(&mut self, down: bool) {
        let Some(WorkoutRow::Item(at)) = self.selected_workout_row() else {
            return;
        };
        let len = self.workout().collection(at.collection).map_or(0, <[_]>::len);
        let to = match (down, at.index) {
            (true, i) if i + 1 < len => i + 1,
            (false, i) if i > 0 => i - 1,
            _ => return,
        };
        match self.builder.move_item(at.collection, at.index, to) {
            Ok(()) => {
                let moved = ItemRef {
                    index: to,
                    ..at
                };
                self.select_workout_row(WorkoutRow::Item(moved));
                self.sync_focus_with_selection();
            }
            Err(e) => self.set_error(format!("Reorder failed: {e}")),
        }
    }

    // --- Modals ---

    pub(crate) fn open_edit_modal(&mut self) {
        match self.selected_workout_row() {
            Some(WorkoutRow::Item(at)) => {
                let Some(item) = self.workout().item(&at) else {
                    return;
                };
                if item.is_divider() {
                    return;
                }
                self.active_modal = ActiveModal::EditText {
                    target: at,
                    input: item.text.clone(),
                };
            }
            Some(WorkoutRow::GroupHeader(group)) => {
                let input = self
                    .workout()
                    .group(group)
                    .and_then(|g| g.set_count())
                    .unwrap_or_default()
                    .to_string();
                self.active_modal = ActiveModal::EditLabel { group, input };
            }
            Some(WorkoutRow::GroupAdd(group)) => {
                self.builder.add_blank_to_group(group, None);
                self.after_workout_change();
            }
            None => {}
        }
    }

    pub(crate) fn open_sets_reps_modal(&mut self) {
        let Some(WorkoutRow::Item(at)) = self.selected_workout_row() else {
            return;
        };
        let Some(item) = self.workout().item(&at) else {
            return;
        };
        if item.is_divider() {
            return;
        }
        let mut preset_state = ListState::default();
        preset_state.select(Some(0));
        self.active_modal = ActiveModal::SetsReps {
            target: at,
            input: item.sets_reps.clone().unwrap_or_default(),
            focused_field: SetsRepsField::Input,
            preset_state,
        };
    }

    pub(crate) fn open_clear_confirmation(&mut self) {
        if !self.workout().is_empty() {
            self.active_modal = ActiveModal::ConfirmClear;
        }
    }

    pub(crate) fn clear_workout(&mut self) {
        self.builder.clear();
        self.after_workout_change();
        self.set_info("Workout cleared".to_string());
    }

    pub(crate) fn copy_workout(&mut self) {
        let text = self.builder.export();
        match copy_to_clipboard(&text) {
            Ok(()) if text.is_empty() => self.set_info("Nothing to copy".to_string()),
            Ok(()) => self.set_info("Workout copied to clipboard".to_string()),
            Err(e) => self.set_error(format!("Clipboard error: {e}")),
        }
    }
}
