//src/model.rs
use crate::ids::{GroupId, ItemId};
use std::fmt;

/// Reserved item text that renders as a visual divider instead of an exercise.
pub const DIVIDER_TEXT: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseItem {
    pub id: ItemId,
    pub text: String,
    pub sets_reps: Option<String>, // None = never set, Some("") still counts as set
}

impl ExerciseItem {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sets_reps: None,
        }
    }

    pub fn divider(id: ItemId) -> Self {
        Self::new(id, DIVIDER_TEXT)
    }

    pub fn is_divider(&self) -> bool {
        self.text == DIVIDER_TEXT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersetGroup {
    pub id: GroupId,
    pub label: String, // e.g. "3 Sets"
    pub exercises: Vec<ExerciseItem>,
}

impl SupersetGroup {
    /// The first run of digits in the label, which is what the set-count field shows.
    pub fn set_count(&self) -> Option<&str> {
        let start = self.label.find(|c: char| c.is_ascii_digit())?;
        let rest = &self.label[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

/// Which ordered sequence of items an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionRef {
    Flat,
    Group(GroupId),
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionRef::Flat => write!(f, "flat list"),
            CollectionRef::Group(id) => write!(f, "superset {}", id),
        }
    }
}

/// Position of an item inside a collection, as known by the field that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub collection: CollectionRef,
    pub index: usize,
}

impl ItemRef {
    pub const fn flat(index: usize) -> Self {
        Self {
            collection: CollectionRef::Flat,
            index,
        }
    }

    pub const fn group(group: GroupId, index: usize) -> Self {
        Self {
            collection: CollectionRef::Group(group),
            index,
        }
    }
}

/// Where new items land inside a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Start,
    /// Right after this index. Past-the-end indexes append.
    After(usize),
    End,
}

impl InsertAt {
    fn resolve(self, len: usize) -> usize {
        match self {
            InsertAt::Start => 0,
            InsertAt::After(index) => index.saturating_add(1).min(len),
            InsertAt::End => len,
        }
    }
}

/// The workout being assembled: superset groups (rendered first) and the flat list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workout {
    selected: Vec<ExerciseItem>,
    supersets: Vec<SupersetGroup>,
}

impl Workout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[ExerciseItem] {
        &self.selected
    }

    pub fn supersets(&self) -> &[SupersetGroup] {
        &self.supersets
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.supersets.is_empty()
    }

    /// Number of items across the flat list and all groups.
    pub fn item_count(&self) -> usize {
        self.selected.len()
            + self
                .supersets
                .iter()
                .map(|g| g.exercises.len())
                .sum::<usize>()
    }

    pub fn group(&self, id: GroupId) -> Option<&SupersetGroup> {
        self.supersets.iter().find(|g| g.id == id)
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> Option<&mut SupersetGroup> {
        self.supersets.iter_mut().find(|g| g.id == id)
    }

    pub fn collection(&self, collection: CollectionRef) -> Option<&[ExerciseItem]> {
        match collection {
            CollectionRef::Flat => Some(&self.selected),
            CollectionRef::Group(id) => self.group(id).map(|g| g.exercises.as_slice()),
        }
    }

    pub(crate) fn collection_mut(
        &mut self,
        collection: CollectionRef,
    ) -> Option<&mut Vec<ExerciseItem>> {
        match collection {
            CollectionRef::Flat => Some(&mut self.selected),
            CollectionRef::Group(id) => self.group_mut(id).map(|g| &mut g.exercises),
        }
    }

    pub fn item(&self, at: &ItemRef) -> Option<&ExerciseItem> {
        self.collection(at.collection)?.get(at.index)
    }

    pub(crate) fn item_mut(&mut self, at: &ItemRef) -> Option<&mut ExerciseItem> {
        self.collection_mut(at.collection)?.get_mut(at.index)
    }

    /// Locates an item anywhere in the workout.
    pub fn find(&self, id: ItemId) -> Option<ItemRef> {
        if let Some(index) = self.selected.iter().position(|i| i.id == id) {
            return Some(ItemRef::flat(index));
        }
        self.supersets.iter().find_map(|group| {
            group
                .exercises
                .iter()
                .position(|i| i.id == id)
                .map(|index| ItemRef::group(group.id, index))
        })
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Inserts `items` contiguously. Returns the collection they ended up in,
    /// which is the flat list when the requested group no longer exists.
    pub(crate) fn insert_items(
        &mut self,
        collection: CollectionRef,
        at: InsertAt,
        items: Vec<ExerciseItem>,
    ) -> CollectionRef {
        let (target, at) = if self.collection(collection).is_some() {
            (collection, at)
        } else {
            tracing::debug!("{} is gone, appending to the flat list instead", collection);
            (CollectionRef::Flat, InsertAt::End)
        };
        if let Some(list) = self.collection_mut(target) {
            let pos = at.resolve(list.len());
            list.splice(pos..pos, items);
        }
        target
    }

    /// Removes by identity from whichever collection holds the item.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<ExerciseItem> {
        let at = self.find(id)?;
        let list = self.collection_mut(at.collection)?;
        Some(list.remove(at.index))
    }

    pub(crate) fn push_group(&mut self, group: SupersetGroup) {
        self.supersets.push(group);
    }

    pub(crate) fn remove_group(&mut self, id: GroupId) -> Option<SupersetGroup> {
        let index = self.supersets.iter().position(|g| g.id == id)?;
        Some(self.supersets.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.selected.clear();
        self.supersets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(label: &str) -> SupersetGroup {
        SupersetGroup {
            id: GroupId(1),
            label: label.to_string(),
            exercises: Vec::new(),
        }
    }

    #[test]
    fn set_count_reads_first_digit_run() {
        assert_eq!(group("3 Sets").set_count(), Some("3"));
        assert_eq!(group("12 Sets").set_count(), Some("12"));
        assert_eq!(group(" Sets").set_count(), None);
    }

    #[test]
    fn insert_after_past_end_appends() {
        let mut workout = Workout::new();
        workout.insert_items(
            CollectionRef::Flat,
            InsertAt::End,
            vec![ExerciseItem::new(ItemId(1), "A")],
        );
        workout.insert_items(
            CollectionRef::Flat,
            InsertAt::After(usize::MAX),
            vec![ExerciseItem::new(ItemId(2), "B")],
        );
        let texts: Vec<_> = workout.selected().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
    }
}
