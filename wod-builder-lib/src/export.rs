//src/export.rs
use crate::model::{ExerciseItem, Workout};

/// Plain-text form of the workout for pasting elsewhere.
///
/// One line per item (dividers become empty lines), each superset introduced by
/// its label and separated from earlier content by a blank line. Every line is
/// newline-terminated and a final blank line closes any non-empty output.
pub fn format_workout(workout: &Workout) -> String {
    let mut lines: Vec<String> = workout.selected().iter().map(export_line).collect();

    for group in workout.supersets() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(group.label.clone());
        lines.extend(group.exercises.iter().map(export_line));
    }

    if lines.is_empty() {
        return String::new();
    }
    lines.push(String::new());

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn export_line(item: &ExerciseItem) -> String {
    if item.is_divider() {
        return String::new();
    }
    match item.sets_reps.as_deref() {
        Some(sets_reps) if !sets_reps.is_empty() => {
            format!("{} {}", item.text, sets_reps).trim().to_string()
        }
        _ => item.text.clone(),
    }
}
