// wod-builder-tui/src/ui.rs
mod layout;
mod modals;
mod placeholders;
mod status_bar;
mod tabs;
mod wod_tab;

// Re-export the main render function
pub use layout::render_ui;
