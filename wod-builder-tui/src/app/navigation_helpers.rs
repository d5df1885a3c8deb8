// src/app/navigation_helpers.rs
use ratatui::widgets::ListState;

pub fn list_next(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn list_previous(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => list_len - 1,
        Some(i) => i - 1,
        None => list_len.saturating_sub(1),
    };
    state.select(Some(i));
}

/// Keeps the selection inside the list after it shrank.
pub fn clamp_selection(state: &mut ListState, list_len: usize) {
    match state.selected() {
        _ if list_len == 0 => state.select(None),
        Some(i) if i >= list_len => state.select(Some(list_len - 1)),
        None => state.select(Some(0)),
        Some(_) => {}
    }
}
