// wod-builder-tui/src/app.rs
mod actions;
mod input;
mod modals;
mod navigation_helpers;
pub mod state;

pub use state::{
    workout_rows, ActiveModal, ActiveTab, App, CatalogRow, PresetSection, SetsRepsField,
    WodPane, WorkoutRow,
};
