// src/plan.rs
// Plain-text workout plans: one builder command per line, `#` starts a comment.
// Superset positions `G` and item positions `I` are 0-based; an item is either
// `I` (flat list) or `G:I` (inside superset G).
use anyhow::{anyhow, bail, Context, Result};
use wod_builder_lib::{sets_label, CollectionRef, Focus, GroupId, ItemRef, WodBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRef {
    Flat(usize),
    Group(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanCollection {
    Flat,
    Group(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Blank,
    Divider,
    Preset(u32),
    BlankAtFocus,
    DividerAtFocus,
    PresetAtFocus(u32),
    Select(String),
    Text(PlanRef, String),
    SetsReps(PlanRef, String),
    SetsRepsAtFocus(String),
    InsertAfter(PlanRef),
    Delete(PlanRef),
    Superset(u32),
    Label(usize, String),
    DeleteSuperset(usize),
    GroupBlank(usize, Option<usize>),
    Move(PlanCollection, usize, usize),
    FocusNone,
    FocusFlat(usize),
    FocusGroupItem(usize, usize),
    FocusGroupTitle(usize),
    Clear,
}

fn parse_index(token: &str) -> Result<usize> {
    token
        .parse()
        .with_context(|| format!("'{token}' is not a position"))
}

fn parse_count(token: &str) -> Result<u32> {
    token
        .parse()
        .with_context(|| format!("'{token}' is not a set count"))
}

fn parse_ref(token: &str) -> Result<PlanRef> {
    match token.split_once(':') {
        Some((group, index)) => Ok(PlanRef::Group(parse_index(group)?, parse_index(index)?)),
        None => Ok(PlanRef::Flat(parse_index(token)?)),
    }
}

fn parse_collection(token: &str) -> Result<PlanCollection> {
    if token == "flat" {
        Ok(PlanCollection::Flat)
    } else {
        Ok(PlanCollection::Group(parse_index(token)?))
    }
}

// Splits "cmd arg rest of line" without losing inner spacing of the rest.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

pub fn parse_line(line: &str) -> Result<Option<PlanStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (cmd, rest) = split_word(line);
    let (arg, tail) = split_word(rest);

    let step = match cmd {
        "blank" => PlanStep::Blank,
        "divider" => PlanStep::Divider,
        "preset" => PlanStep::Preset(parse_count(arg)?),
        "toolbar" => match arg {
            "blank" => PlanStep::BlankAtFocus,
            "divider" => PlanStep::DividerAtFocus,
            "preset" => PlanStep::PresetAtFocus(parse_count(tail)?),
            other => bail!("Unknown toolbar action '{other}'"),
        },
        "select" if rest.is_empty() => bail!("select needs an exercise name"),
        "select" => PlanStep::Select(rest.to_string()),
        "text" => PlanStep::Text(parse_ref(arg)?, tail.to_string()),
        "sets-reps" => PlanStep::SetsReps(parse_ref(arg)?, tail.to_string()),
        "sets-reps-focus" => PlanStep::SetsRepsAtFocus(rest.to_string()),
        "insert-after" => PlanStep::InsertAfter(parse_ref(arg)?),
        "delete" => PlanStep::Delete(parse_ref(arg)?),
        "superset" => PlanStep::Superset(parse_count(arg)?),
        "label" => PlanStep::Label(parse_index(arg)?, tail.to_string()),
        "delete-superset" => PlanStep::DeleteSuperset(parse_index(arg)?),
        "group-blank" => {
            let after = if tail.is_empty() {
                None
            } else {
                Some(parse_index(tail)?)
            };
            PlanStep::GroupBlank(parse_index(arg)?, after)
        }
        "move" => {
            let (from, to) = split_word(tail);
            PlanStep::Move(parse_collection(arg)?, parse_index(from)?, parse_index(to)?)
        }
        "focus" => match arg {
            "none" => PlanStep::FocusNone,
            "flat" => PlanStep::FocusFlat(parse_index(tail)?),
            "group" => {
                let (group, slot) = split_word(tail);
                let group = parse_index(group)?;
                if slot == "title" {
                    PlanStep::FocusGroupTitle(group)
                } else {
                    PlanStep::FocusGroupItem(group, parse_index(slot)?)
                }
            }
            other => bail!("Unknown focus target '{other}'"),
        },
        "clear" => PlanStep::Clear,
        other => bail!("Unknown plan command '{other}'"),
    };
    Ok(Some(step))
}

pub fn parse_plan(source: &str) -> Result<Vec<PlanStep>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            parse_line(line)
                .with_context(|| format!("Plan line {}: '{}'", n + 1, line.trim()))
                .transpose()
        })
        .collect()
}

fn group_at(builder: &WodBuilder, position: usize) -> Result<GroupId> {
    builder
        .workout()
        .supersets()
        .get(position)
        .map(|g| g.id)
        .ok_or_else(|| anyhow!("No superset at position {position}"))
}

fn item_ref(builder: &WodBuilder, plan_ref: PlanRef) -> Result<ItemRef> {
    Ok(match plan_ref {
        PlanRef::Flat(index) => ItemRef::flat(index),
        PlanRef::Group(group, index) => ItemRef::group(group_at(builder, group)?, index),
    })
}

/// Applies one step. Stale item positions are tolerated the same way the
/// builder tolerates them; unknown superset positions are an error in a plan.
pub fn apply(builder: &mut WodBuilder, step: &PlanStep) -> Result<()> {
    match step {
        PlanStep::Blank => {
            builder.add_blank();
        }
        PlanStep::Divider => {
            builder.add_divider();
        }
        PlanStep::Preset(count) => {
            builder.add_preset(*count);
        }
        PlanStep::BlankAtFocus => {
            builder.add_blank_at_focus();
        }
        PlanStep::DividerAtFocus => {
            builder.add_divider_at_focus();
        }
        PlanStep::PresetAtFocus(count) => {
            builder.add_preset_at_focus(*count);
        }
        PlanStep::Select(name) => {
            builder.select_from_catalog(name);
        }
        PlanStep::Text(r, text) => {
            let at = item_ref(builder, *r)?;
            builder.edit_text(&at, text);
        }
        PlanStep::SetsReps(r, value) => {
            let at = item_ref(builder, *r)?;
            builder.edit_sets_reps(&at, value);
        }
        PlanStep::SetsRepsAtFocus(value) => {
            builder.apply_sets_reps_to_focus(value);
        }
        PlanStep::InsertAfter(r) => {
            let at = item_ref(builder, *r)?;
            builder.insert_after(&at);
        }
        PlanStep::Delete(r) => {
            let at = item_ref(builder, *r)?;
            if let Some(id) = builder.workout().item(&at).map(|i| i.id) {
                builder.delete(id);
            }
        }
        PlanStep::Superset(count) => {
            builder.add_superset(&sets_label(count));
        }
        PlanStep::Label(group, raw) => {
            let group = group_at(builder, *group)?;
            builder.edit_superset_label(group, raw);
        }
        PlanStep::DeleteSuperset(group) => {
            let group = group_at(builder, *group)?;
            builder.delete_superset(group);
        }
        PlanStep::GroupBlank(group, after) => {
            let group = group_at(builder, *group)?;
            builder.add_blank_to_group(group, *after);
        }
        PlanStep::Move(collection, from, to) => {
            let collection = match collection {
                PlanCollection::Flat => CollectionRef::Flat,
                PlanCollection::Group(g) => CollectionRef::Group(group_at(builder, *g)?),
            };
            builder.move_item(collection, *from, *to)?;
        }
        PlanStep::FocusNone => builder.set_focus(Focus::Unset),
        PlanStep::FocusFlat(index) => builder.set_focus(Focus::Flat(*index)),
        PlanStep::FocusGroupItem(group, index) => {
            let group = group_at(builder, *group)?;
            builder.set_focus(Focus::group_item(group, *index));
        }
        PlanStep::FocusGroupTitle(group) => {
            let group = group_at(builder, *group)?;
            builder.set_focus(Focus::group_title(group));
        }
        PlanStep::Clear => builder.clear(),
    }
    Ok(())
}

/// Parses and replays a whole plan on a fresh builder.
pub fn compose(source: &str) -> Result<WodBuilder> {
    let steps = parse_plan(source)?;
    let mut builder = WodBuilder::new();
    for (n, step) in steps.iter().enumerate() {
        apply(&mut builder, step).with_context(|| format!("Plan step {} ({:?})", n + 1, step))?;
    }
    Ok(builder)
}
