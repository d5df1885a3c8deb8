//src/builder.rs
use crate::export::format_workout;
use crate::focus::Focus;
use crate::ids::{GroupId, IdGenerator, ItemId, SequentialIds};
use crate::model::{CollectionRef, ExerciseItem, InsertAt, ItemRef, SupersetGroup, Workout};
use crate::reorder::{moved_order, ReorderError};
use tracing::debug;

/// Label for a set count, e.g. `"3 Sets"`.
pub fn sets_label(count: impl std::fmt::Display) -> String {
    format!("{count} Sets")
}

/// Keeps only ASCII digits, the way the numeric set-count field does.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// The workout builder: owns the workout, the focus and the id source.
///
/// Every operation is total. Stale references (deleted items, positions past
/// the end, vanished groups) degrade to appends or no-ops instead of failing.
#[derive(Debug, Clone, Default)]
pub struct WodBuilder<G: IdGenerator = SequentialIds> {
    workout: Workout,
    focus: Focus,
    ids: G,
}

impl WodBuilder<SequentialIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: IdGenerator> WodBuilder<G> {
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            workout: Workout::new(),
            focus: Focus::Unset,
            ids,
        }
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Records the field the user interacted with last.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    fn new_item(&mut self, text: impl Into<String>) -> ExerciseItem {
        ExerciseItem::new(ItemId(self.ids.next_id()), text)
    }

    fn focused_flat_insert(&self) -> InsertAt {
        self.focus
            .flat_index()
            .map_or(InsertAt::End, InsertAt::After)
    }

    // --- Flat list additions ---

    pub fn add_blank(&mut self) -> ItemId {
        let item = self.new_item("");
        let id = item.id;
        self.workout
            .insert_items(CollectionRef::Flat, InsertAt::End, vec![item]);
        id
    }

    pub fn add_divider(&mut self) -> ItemId {
        let item = ExerciseItem::divider(ItemId(self.ids.next_id()));
        let id = item.id;
        self.workout
            .insert_items(CollectionRef::Flat, InsertAt::End, vec![item]);
        id
    }

    /// Appends a divider followed by a `"{count} Sets"` line as one unit.
    pub fn add_preset(&mut self, count: u32) -> (ItemId, ItemId) {
        self.insert_preset(InsertAt::End, count)
    }

    /// Toolbar variant of [`Self::add_blank`]: lands after a focused flat-list row.
    pub fn add_blank_at_focus(&mut self) -> ItemId {
        let at = self.focused_flat_insert();
        let item = self.new_item("");
        let id = item.id;
        self.workout.insert_items(CollectionRef::Flat, at, vec![item]);
        id
    }

    pub fn add_divider_at_focus(&mut self) -> ItemId {
        let at = self.focused_flat_insert();
        let item = ExerciseItem::divider(ItemId(self.ids.next_id()));
        let id = item.id;
        self.workout.insert_items(CollectionRef::Flat, at, vec![item]);
        id
    }

    pub fn add_preset_at_focus(&mut self, count: u32) -> (ItemId, ItemId) {
        let at = self.focused_flat_insert();
        self.insert_preset(at, count)
    }

    fn insert_preset(&mut self, at: InsertAt, count: u32) -> (ItemId, ItemId) {
        let divider = ExerciseItem::divider(ItemId(self.ids.next_id()));
        let label = self.new_item(sets_label(count));
        let ids = (divider.id, label.id);
        self.workout
            .insert_items(CollectionRef::Flat, at, vec![divider, label]);
        ids
    }

    /// Inserts a catalog (or timer) entry where the focus points.
    pub fn select_from_catalog(&mut self, name: &str) -> ItemId {
        let (collection, at) = self.focus.insertion_point();
        let item = self.new_item(name);
        let id = item.id;
        self.workout.insert_items(collection, at, vec![item]);
        id
    }

    // --- Item edits ---

    /// Returns false when `at` no longer points at an item.
    pub fn edit_text(&mut self, at: &ItemRef, text: &str) -> bool {
        match self.workout.item_mut(at) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => {
                debug!("edit_text: nothing at {:?}", at);
                false
            }
        }
    }

    pub fn edit_sets_reps(&mut self, at: &ItemRef, value: &str) -> bool {
        match self.workout.item_mut(at) {
            Some(item) => {
                item.sets_reps = Some(value.to_string());
                true
            }
            None => {
                debug!("edit_sets_reps: nothing at {:?}", at);
                false
            }
        }
    }

    /// Applies a sets & reps preset to the focused item, if focus is on one.
    pub fn apply_sets_reps_to_focus(&mut self, value: &str) -> bool {
        match self.focus.item_ref() {
            Some(at) => self.edit_sets_reps(&at, value),
            None => false,
        }
    }

    /// Creates a blank item right after `at`, in the same collection.
    pub fn insert_after(&mut self, at: &ItemRef) -> ItemId {
        let item = self.new_item("");
        let id = item.id;
        self.workout
            .insert_items(at.collection, InsertAt::After(at.index), vec![item]);
        id
    }

    /// Blank item inside a group: after `after`, or at the top when `None`.
    pub fn add_blank_to_group(&mut self, group: GroupId, after: Option<usize>) -> ItemId {
        let item = self.new_item("");
        let id = item.id;
        let at = after.map_or(InsertAt::Start, InsertAt::After);
        self.workout
            .insert_items(CollectionRef::Group(group), at, vec![item]);
        id
    }

    /// Removes the item by identity. Focus is left untouched.
    pub fn delete(&mut self, id: ItemId) -> bool {
        self.workout.remove(id).is_some()
    }

    // --- Superset groups ---

    pub fn add_superset(&mut self, label: &str) -> GroupId {
        let id = GroupId(self.ids.next_id());
        self.workout.push_group(SupersetGroup {
            id,
            label: label.to_string(),
            exercises: Vec::new(),
        });
        id
    }

    /// Stores `"{digits} Sets"`; everything but ASCII digits is dropped first.
    pub fn edit_superset_label(&mut self, group: GroupId, raw: &str) -> bool {
        match self.workout.group_mut(group) {
            Some(g) => {
                g.label = sets_label(digits_only(raw));
                true
            }
            None => false,
        }
    }

    /// Removes the group together with every item in it.
    pub fn delete_superset(&mut self, group: GroupId) -> bool {
        self.workout.remove_group(group).is_some()
    }

    pub fn clear(&mut self) {
        self.workout.clear();
    }

    // --- Reordering ---

    pub fn reorder(
        &mut self,
        collection: CollectionRef,
        order: &[ItemId],
    ) -> Result<(), ReorderError> {
        self.workout.reorder(collection, order)
    }

    /// Moves one item within its collection, as a drag gesture would.
    pub fn move_item(
        &mut self,
        collection: CollectionRef,
        from: usize,
        to: usize,
    ) -> Result<(), ReorderError> {
        let items = self
            .workout
            .collection(collection)
            .ok_or(ReorderError::UnknownCollection(collection))?;
        let order = moved_order(items, from, to)?;
        self.workout.reorder(collection, &order)
    }

    pub fn export(&self) -> String {
        format_workout(&self.workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("3abc"), "3");
        assert_eq!(digits_only("1 0"), "10");
        assert_eq!(digits_only("-４"), "");
        assert_eq!(digits_only(""), "");
    }
}
