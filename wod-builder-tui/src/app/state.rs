// wod-builder-tui/src/app/state.rs
use ratatui::widgets::ListState;
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use wod_builder_lib::{
    AppService, Catalog, CatalogClient, CatalogError, CatalogLoader, GroupId, ItemRef,
    RequestTicket, WodBuilder, Workout,
};

pub const SUPERSETS_SECTION: &str = "Supersets";
pub const SETS_REPS_SECTION: &str = "Sets & Reps";
pub const TIMER_SECTION: &str = "Timer";

// Represents the active UI tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Wod,
    History,
    Settings,
}

// Which side of the WOD tab has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WodPane {
    Workout,
    Catalog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetsRepsField {
    Presets,
    Input,
    Save,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    EditText {
        target: ItemRef,
        input: String,
    },
    SetsReps {
        target: ItemRef,
        input: String,
        focused_field: SetsRepsField,
        preset_state: ListState,
    },
    EditLabel {
        group: GroupId,
        input: String, // digits only, like the numeric keypad field
    },
    ConfirmClear,
}

/// One line of the WOD panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutRow {
    GroupHeader(GroupId),
    Item(ItemRef),
    /// Shown in an empty group, adds the first item.
    GroupAdd(GroupId),
}

/// Preset sections listed under the catalog categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetSection {
    Supersets,
    SetsReps,
    Timer,
}

impl PresetSection {
    pub const ALL: [PresetSection; 3] = [
        PresetSection::Supersets,
        PresetSection::SetsReps,
        PresetSection::Timer,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PresetSection::Supersets => SUPERSETS_SECTION,
            PresetSection::SetsReps => SETS_REPS_SECTION,
            PresetSection::Timer => TIMER_SECTION,
        }
    }
}

/// One line of the catalog panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogRow {
    Category(usize),
    Exercise(usize, usize),
    Section(PresetSection),
    Preset(PresetSection, usize),
}

pub type CatalogResult = (RequestTicket, Result<Catalog, CatalogError>);

// Holds the application state
pub struct App {
    pub service: AppService,
    pub builder: WodBuilder,
    pub active_tab: ActiveTab,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub last_error: Option<String>, // For status bar errors
    pub last_info: Option<String>,
    pub(crate) message_clear_time: Option<Instant>,

    // === Catalog loading ===
    pub loader: CatalogLoader,
    pub(crate) runtime: Handle,
    pub(crate) catalog_tx: Sender<CatalogResult>,
    pub(crate) catalog_rx: Receiver<CatalogResult>,

    // === WOD Tab State ===
    pub wod_pane: WodPane,
    pub workout_list_state: ListState,
    pub catalog_list_state: ListState,
    pub expanded: HashMap<String, bool>, // Category / section name -> expanded
}

impl App {
    pub fn new(service: AppService, runtime: Handle) -> Self {
        let (catalog_tx, catalog_rx) = channel();
        let mut app = App {
            service,
            builder: WodBuilder::new(),
            active_tab: ActiveTab::Wod,
            should_quit: false,
            active_modal: ActiveModal::None,
            last_error: None,
            last_info: None,
            message_clear_time: None,
            loader: CatalogLoader::new(),
            runtime,
            catalog_tx,
            catalog_rx,
            wod_pane: WodPane::Catalog,
            workout_list_state: ListState::default(),
            catalog_list_state: ListState::default(),
            expanded: HashMap::new(),
        };
        app.start_catalog_load();
        app
    }

    pub fn workout(&self) -> &Workout {
        self.builder.workout()
    }

    pub(crate) fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.last_info = None;
        self.message_clear_time = Some(Instant::now() + Duration::from_secs(5));
    }

    pub(crate) fn set_info(&mut self, msg: String) {
        self.last_info = Some(msg);
        self.last_error = None;
        self.message_clear_time = Some(Instant::now() + Duration::from_secs(3));
    }

    /// Clears status messages once their time is up.
    pub fn tick(&mut self) {
        if let Some(clear_time) = self.message_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.last_info = None;
                self.message_clear_time = None;
            }
        }
        self.poll_catalog();
    }

    // --- Catalog loading ---

    /// Issues a fetch (initial load or retry). A newer fetch always wins.
    pub fn start_catalog_load(&mut self) {
        let ticket = self.loader.begin();
        let client: CatalogClient = match self.service.catalog_client(None) {
            Ok(client) => client,
            Err(e) => {
                self.set_error(e.to_string());
                self.loader
                    .resolve(ticket, Err(CatalogError::Server(e.to_string())));
                return;
            }
        };
        let tx = self.catalog_tx.clone();
        self.runtime.spawn(async move {
            let result = client.fetch().await;
            // Receiver gone means the app is shutting down
            let _ = tx.send((ticket, result));
        });
    }

    fn poll_catalog(&mut self) {
        while let Ok((ticket, result)) = self.catalog_rx.try_recv() {
            if self.loader.resolve(ticket, result) {
                self.on_catalog_changed();
            }
        }
    }

    // Collapse every category of a freshly loaded catalog, keep section state
    pub(crate) fn on_catalog_changed(&mut self) {
        let categories: Vec<String> = self
            .loader
            .catalog()
            .map(|c| c.categories().iter().map(|cat| cat.name.clone()).collect())
            .unwrap_or_default();
        self.expanded
            .retain(|name, _| PresetSection::ALL.iter().any(|s| s.title() == name));
        for name in categories {
            self.expanded.insert(name, false);
        }
        self.catalog_list_state.select(Some(0));
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.get(name).copied().unwrap_or(false)
    }

    // --- Row models ---

    pub fn workout_rows(&self) -> Vec<WorkoutRow> {
        workout_rows(self.builder.workout())
    }

    pub fn catalog_rows(&self) -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        if let Some(catalog) = self.loader.catalog() {
            for (ci, category) in catalog.categories().iter().enumerate() {
                rows.push(CatalogRow::Category(ci));
                if self.is_expanded(&category.name) {
                    rows.extend(
                        (0..category.exercises.len()).map(|ei| CatalogRow::Exercise(ci, ei)),
                    );
                }
            }
        }
        for section in PresetSection::ALL {
            rows.push(CatalogRow::Section(section));
            if self.is_expanded(section.title()) {
                let count = self.preset_values(section).len();
                rows.extend((0..count).map(|i| CatalogRow::Preset(section, i)));
            }
        }
        rows
    }

    pub fn preset_values(&self, section: PresetSection) -> Vec<String> {
        match section {
            PresetSection::Supersets => self.service.superset_preset_labels(),
            PresetSection::SetsReps => self.service.config.sets_reps_presets.clone(),
            PresetSection::Timer => self.service.config.timer_presets.clone(),
        }
    }

    pub fn selected_workout_row(&self) -> Option<WorkoutRow> {
        let index = self.workout_list_state.selected()?;
        self.workout_rows().get(index).copied()
    }

    pub fn selected_catalog_row(&self) -> Option<CatalogRow> {
        let index = self.catalog_list_state.selected()?;
        self.catalog_rows().get(index).copied()
    }
}

/// Supersets first (header, then items), then the flat list.
pub fn workout_rows(workout: &Workout) -> Vec<WorkoutRow> {
    let mut rows = Vec::with_capacity(workout.item_count() + workout.supersets().len());
    for group in workout.supersets() {
        rows.push(WorkoutRow::GroupHeader(group.id));
        if group.exercises.is_empty() {
            rows.push(WorkoutRow::GroupAdd(group.id));
        }
        rows.extend(
            (0..group.exercises.len()).map(|i| WorkoutRow::Item(ItemRef::group(group.id, i))),
        );
    }
    rows.extend((0..workout.selected().len()).map(|i| WorkoutRow::Item(ItemRef::flat(i))));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_rows_list_groups_before_flat_items() {
        let mut builder = WodBuilder::new();
        builder.select_from_catalog("Squat");
        let empty = builder.add_superset("2 Sets");
        let filled = builder.add_superset("3 Sets");
        builder.add_blank_to_group(filled, None);

        let rows = workout_rows(builder.workout());
        assert_eq!(
            rows,
            vec![
                WorkoutRow::GroupHeader(empty),
                WorkoutRow::GroupAdd(empty),
                WorkoutRow::GroupHeader(filled),
                WorkoutRow::Item(ItemRef::group(filled, 0)),
                WorkoutRow::Item(ItemRef::flat(0)),
            ]
        );
    }
}
