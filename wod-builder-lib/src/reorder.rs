//src/reorder.rs
use crate::ids::ItemId;
use crate::model::{CollectionRef, ExerciseItem, Workout};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("No such collection: {0}")]
    UnknownCollection(CollectionRef),
    #[error("Reorder must list every item exactly once (expected {expected}, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Item {0} appears more than once in the new order")]
    Duplicate(ItemId),
    #[error("Item {0} does not belong to this collection")]
    Foreign(ItemId),
    #[error("Position {index} is out of range (collection holds {len} items)")]
    OutOfRange { index: usize, len: usize },
}

impl Workout {
    /// Replaces the order of one collection with `order`, which must be a
    /// permutation of the ids it currently holds. Nothing changes on error.
    pub(crate) fn reorder(
        &mut self,
        collection: CollectionRef,
        order: &[ItemId],
    ) -> Result<(), ReorderError> {
        let Some(items) = self.collection_mut(collection) else {
            return Err(ReorderError::UnknownCollection(collection));
        };
        validate_permutation(items, order)?;

        let mut by_id: HashMap<ItemId, ExerciseItem> = std::mem::take(items)
            .into_iter()
            .map(|item| (item.id, item))
            .collect();
        *items = order.iter().filter_map(|id| by_id.remove(id)).collect();
        Ok(())
    }
}

fn validate_permutation(items: &[ExerciseItem], order: &[ItemId]) -> Result<(), ReorderError> {
    if items.len() != order.len() {
        return Err(ReorderError::LengthMismatch {
            expected: items.len(),
            actual: order.len(),
        });
    }
    let current: HashSet<ItemId> = items.iter().map(|i| i.id).collect();
    let mut seen = HashSet::with_capacity(order.len());
    for id in order {
        if !current.contains(id) {
            return Err(ReorderError::Foreign(*id));
        }
        if !seen.insert(*id) {
            return Err(ReorderError::Duplicate(*id));
        }
    }
    Ok(())
}

/// The order a drag from `from` to `to` produces. `to` past the end means last.
pub fn moved_order(
    items: &[ExerciseItem],
    from: usize,
    to: usize,
) -> Result<Vec<ItemId>, ReorderError> {
    if from >= items.len() {
        return Err(ReorderError::OutOfRange {
            index: from,
            len: items.len(),
        });
    }
    let mut order: Vec<ItemId> = items.iter().map(|i| i.id).collect();
    let id = order.remove(from);
    order.insert(to.min(order.len()), id);
    Ok(order)
}
