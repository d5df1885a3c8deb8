//src/focus.rs
use crate::ids::GroupId;
use crate::model::{CollectionRef, InsertAt, ItemRef};

/// Position inside a superset group that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSlot {
    /// The set-count field in the group header. Inserts go to the group end.
    Title,
    Index(usize),
}

/// The most recently focused editable position. Advisory only: it decides where
/// the next added item lands and is never cleared or shifted by mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Unset,
    Flat(usize),
    Group { group: GroupId, slot: GroupSlot },
}

impl Focus {
    pub const fn group_item(group: GroupId, index: usize) -> Self {
        Focus::Group {
            group,
            slot: GroupSlot::Index(index),
        }
    }

    pub const fn group_title(group: GroupId) -> Self {
        Focus::Group {
            group,
            slot: GroupSlot::Title,
        }
    }

    /// Where a catalog selection should be inserted.
    pub fn insertion_point(&self) -> (CollectionRef, InsertAt) {
        match *self {
            Focus::Unset => (CollectionRef::Flat, InsertAt::End),
            Focus::Flat(index) => (CollectionRef::Flat, InsertAt::After(index)),
            Focus::Group {
                group,
                slot: GroupSlot::Title,
            } => (CollectionRef::Group(group), InsertAt::End),
            Focus::Group {
                group,
                slot: GroupSlot::Index(index),
            } => (CollectionRef::Group(group), InsertAt::After(index)),
        }
    }

    /// The focused item, if focus sits on an item rather than a header.
    pub fn item_ref(&self) -> Option<ItemRef> {
        match *self {
            Focus::Flat(index) => Some(ItemRef::flat(index)),
            Focus::Group {
                group,
                slot: GroupSlot::Index(index),
            } => Some(ItemRef::group(group, index)),
            Focus::Unset
            | Focus::Group {
                slot: GroupSlot::Title,
                ..
            } => None,
        }
    }

    pub fn flat_index(&self) -> Option<usize> {
        match *self {
            Focus::Flat(index) => Some(index),
            _ => None,
        }
    }
}

impl From<ItemRef> for Focus {
    fn from(at: ItemRef) -> Self {
        match at.collection {
            CollectionRef::Flat => Focus::Flat(at.index),
            CollectionRef::Group(group) => Focus::group_item(group, at.index),
        }
    }
}
