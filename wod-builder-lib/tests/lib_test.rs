use anyhow::Result;
use std::collections::HashSet;
use wod_builder_lib::{
    decode_records, decode_response, load_config_util, save_config_util, Catalog, CatalogError,
    CatalogLoader, CatalogRecord, CollectionRef, Config, Focus, GroupId, IdGenerator, ItemId,
    ItemRef, LoadState, ReorderError, WodBuilder, LOAD_FAILED_MESSAGE,
};

// Builder with three flat items "A", "B", "C"
fn builder_abc() -> (WodBuilder, [ItemId; 3]) {
    let mut builder = WodBuilder::new();
    let ids = ["A", "B", "C"].map(|text| builder.select_from_catalog(text));
    (builder, ids)
}

fn flat_texts(builder: &WodBuilder) -> Vec<String> {
    builder
        .workout()
        .selected()
        .iter()
        .map(|i| i.text.clone())
        .collect()
}

fn flat_ids(builder: &WodBuilder) -> Vec<ItemId> {
    builder.workout().selected().iter().map(|i| i.id).collect()
}

fn group_texts(builder: &WodBuilder, group: GroupId) -> Vec<String> {
    builder
        .workout()
        .group(group)
        .map(|g| g.exercises.iter().map(|i| i.text.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_add_blank_divider_and_preset_append() {
    let mut builder = WodBuilder::new();
    let blank = builder.add_blank();
    let divider = builder.add_divider();
    let (line, label) = builder.add_preset(3);

    assert_eq!(flat_ids(&builder), vec![blank, divider, line, label]);
    assert_eq!(flat_texts(&builder), vec!["", "---", "---", "3 Sets"]);
    assert!(builder.workout().selected()[1].is_divider());
    assert_ne!(line, label);
    assert!(builder.workout().selected()[0].sets_reps.is_none());
}

#[test]
fn test_select_inserts_after_focused_flat_index() {
    let (mut builder, [a, b, c]) = builder_abc();
    builder.set_focus(Focus::Flat(1));

    let pushup = builder.select_from_catalog("Push-up");

    assert_eq!(flat_ids(&builder), vec![a, b, pushup, c]);
    assert_eq!(flat_texts(&builder), vec!["A", "B", "Push-up", "C"]);
}

#[test]
fn test_select_with_stale_flat_focus_appends() {
    let mut builder = WodBuilder::new();
    let a = builder.select_from_catalog("A");
    let b = builder.select_from_catalog("B");
    builder.set_focus(Focus::Flat(5));

    let row = builder.select_from_catalog("Row");

    assert_eq!(flat_ids(&builder), vec![a, b, row]);
}

#[test]
fn test_select_without_focus_appends() {
    let (mut builder, _) = builder_abc();
    builder.select_from_catalog("D");
    assert_eq!(flat_texts(&builder), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_delete_while_focused_keeps_focus_and_falls_back() {
    let (mut builder, [_, _, c]) = builder_abc();
    builder.set_focus(Focus::Flat(2));
    assert!(builder.delete(c));

    // Focus is never moved by a delete
    assert_eq!(builder.focus(), Focus::Flat(2));

    builder.select_from_catalog("Lunge");
    assert_eq!(flat_texts(&builder), vec!["A", "B", "Lunge"]);
}

#[test]
fn test_select_into_group_positions() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("3 Sets");

    builder.set_focus(Focus::group_title(group));
    builder.select_from_catalog("Squat");
    builder.select_from_catalog("Dip");
    assert_eq!(group_texts(&builder, group), vec!["Squat", "Dip"]);

    builder.set_focus(Focus::group_item(group, 0));
    builder.select_from_catalog("Curl");
    assert_eq!(group_texts(&builder, group), vec!["Squat", "Curl", "Dip"]);

    builder.set_focus(Focus::group_item(group, 10));
    builder.select_from_catalog("Row");
    assert_eq!(
        group_texts(&builder, group),
        vec!["Squat", "Curl", "Dip", "Row"]
    );
    assert!(builder.workout().selected().is_empty());
}

#[test]
fn test_select_into_deleted_group_lands_in_flat_list() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("2 Sets");
    builder.set_focus(Focus::group_title(group));
    assert!(builder.delete_superset(group));

    let id = builder.select_from_catalog("Plank");

    assert_eq!(flat_ids(&builder), vec![id]);
}

#[test]
fn test_edit_text_and_sets_reps_in_place() {
    let (mut builder, [a, b, c]) = builder_abc();

    assert!(builder.edit_text(&ItemRef::flat(1), "Bench"));
    assert!(builder.edit_sets_reps(&ItemRef::flat(1), "(20 lbs) x 10 x 3"));
    assert!(builder.edit_sets_reps(&ItemRef::flat(2), ""));

    assert_eq!(flat_ids(&builder), vec![a, b, c]);
    let items = builder.workout().selected();
    assert_eq!(items[1].text, "Bench");
    assert_eq!(items[1].sets_reps.as_deref(), Some("(20 lbs) x 10 x 3"));
    // Empty still counts as present
    assert_eq!(items[2].sets_reps.as_deref(), Some(""));
    assert!(items[0].sets_reps.is_none());
}

#[test]
fn test_edit_against_stale_reference_is_noop() {
    let (mut builder, _) = builder_abc();
    let before = builder.workout().clone();

    assert!(!builder.edit_text(&ItemRef::flat(7), "X"));
    assert!(!builder.edit_sets_reps(&ItemRef::group(GroupId(999), 0), "3x10"));

    assert_eq!(builder.workout(), &before);
}

#[test]
fn test_edit_group_item() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("3 Sets");
    builder.add_blank_to_group(group, None);

    assert!(builder.edit_text(&ItemRef::group(group, 0), "Pull-up"));
    assert!(builder.edit_sets_reps(&ItemRef::group(group, 0), "x 8"));

    let item = &builder.workout().group(group).unwrap().exercises[0];
    assert_eq!(item.text, "Pull-up");
    assert_eq!(item.sets_reps.as_deref(), Some("x 8"));
}

#[test]
fn test_insert_after_flat_and_group() {
    let (mut builder, [a, b, c]) = builder_abc();
    let blank = builder.insert_after(&ItemRef::flat(0));
    assert_eq!(flat_ids(&builder), vec![a, blank, b, c]);

    let tail = builder.insert_after(&ItemRef::flat(42));
    assert_eq!(flat_ids(&builder).last(), Some(&tail));

    let group = builder.add_superset("4 Sets");
    builder.add_blank_to_group(group, None);
    builder.edit_text(&ItemRef::group(group, 0), "Row");
    builder.insert_after(&ItemRef::group(group, 0));
    assert_eq!(group_texts(&builder, group), vec!["Row", ""]);
}

#[test]
fn test_add_blank_to_group_prepends_without_index() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("2 Sets");
    builder.set_focus(Focus::group_title(group));
    builder.select_from_catalog("Squat");

    builder.add_blank_to_group(group, None);
    builder.add_blank_to_group(group, Some(1));

    assert_eq!(group_texts(&builder, group), vec!["", "Squat", ""]);
}

#[test]
fn test_delete_preserves_others_and_is_idempotent() {
    let mut builder = WodBuilder::new();
    let a = builder.add_blank();
    let b = builder.add_blank();
    let c = builder.insert_after(&ItemRef::flat(0));
    let d = builder.add_blank();
    assert_eq!(flat_ids(&builder), vec![a, c, b, d]);

    assert!(builder.delete(c));
    let after_once = builder.workout().clone();
    assert_eq!(flat_ids(&builder), vec![a, b, d]);

    assert!(!builder.delete(c));
    assert_eq!(builder.workout(), &after_once);
}

// Deterministic generator so a failing seed can be replayed
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as usize % bound.max(1)
    }
}

// Every item id, superset groups first, then the flat list
fn all_ids(builder: &WodBuilder) -> Vec<ItemId> {
    let workout = builder.workout();
    workout
        .supersets()
        .iter()
        .flat_map(|g| g.exercises.iter())
        .chain(workout.selected())
        .map(|item| item.id)
        .collect()
}

#[test]
fn test_generated_sequences_delete_only_their_target() -> Result<()> {
    for seed in 0..200u64 {
        let mut rng = Lcg(seed);
        let mut builder = WodBuilder::new();
        let group = builder.add_superset("3 Sets");

        for step in 0..60 {
            let flat_len = builder.workout().selected().len();
            let group_len = builder
                .workout()
                .group(group)
                .map_or(0, |g| g.exercises.len());

            match rng.below(7) {
                0 => {
                    builder.add_blank();
                }
                // Positions may be one past the end, which appends
                1 => {
                    builder.insert_after(&ItemRef::flat(rng.below(flat_len + 1)));
                }
                2 => {
                    builder.insert_after(&ItemRef::group(group, rng.below(group_len + 1)));
                }
                3 => {
                    let focus = if rng.below(2) == 0 {
                        Focus::Flat(rng.below(flat_len + 1))
                    } else {
                        Focus::group_item(group, rng.below(group_len + 1))
                    };
                    builder.set_focus(focus);
                    builder.select_from_catalog("Squat");
                }
                4 => {
                    let collection = if rng.below(2) == 0 {
                        CollectionRef::Flat
                    } else {
                        CollectionRef::Group(group)
                    };
                    let order: Vec<ItemId> = builder
                        .workout()
                        .collection(collection)
                        .unwrap_or_default()
                        .iter()
                        .map(|item| item.id)
                        .collect();
                    let before = builder.workout().clone();
                    builder.reorder(collection, &order)?;
                    assert_eq!(builder.workout(), &before, "seed {seed} step {step}");
                }
                _ => {
                    let before = all_ids(&builder);
                    if before.is_empty() {
                        continue;
                    }
                    let target = before[rng.below(before.len())];
                    assert!(builder.delete(target), "seed {seed} step {step}");

                    let expected: Vec<ItemId> =
                        before.into_iter().filter(|id| *id != target).collect();
                    assert_eq!(all_ids(&builder), expected, "seed {seed} step {step}");

                    let after_once = builder.workout().clone();
                    assert!(!builder.delete(target));
                    assert_eq!(builder.workout(), &after_once, "seed {seed} step {step}");
                }
            }

            let ids = all_ids(&builder);
            let unique: HashSet<ItemId> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "seed {seed} step {step}");
        }
    }
    Ok(())
}

#[test]
fn test_delete_finds_items_inside_groups() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("3 Sets");
    let inner = builder.add_blank_to_group(group, None);
    let flat = builder.add_blank();

    assert!(builder.delete(inner));
    assert!(builder.workout().group(group).unwrap().exercises.is_empty());
    assert_eq!(flat_ids(&builder), vec![flat]);
}

#[test]
fn test_superset_label_editing() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("2 Sets");

    assert!(builder.edit_superset_label(group, "3abc"));
    assert_eq!(builder.workout().group(group).unwrap().label, "3 Sets");
    assert_eq!(
        builder.workout().group(group).unwrap().set_count(),
        Some("3")
    );

    assert!(builder.edit_superset_label(group, ""));
    assert_eq!(builder.workout().group(group).unwrap().label, " Sets");

    assert!(!builder.edit_superset_label(GroupId(12345), "5"));
}

#[test]
fn test_delete_superset_cascades() {
    let mut builder = WodBuilder::new();
    let keep = builder.add_superset("2 Sets");
    let gone = builder.add_superset("3 Sets");
    let inner_a = builder.add_blank_to_group(gone, None);
    let inner_b = builder.add_blank_to_group(gone, Some(0));
    let kept_item = builder.add_blank_to_group(keep, None);

    assert!(builder.delete_superset(gone));

    assert!(builder.workout().group(gone).is_none());
    assert!(!builder.workout().contains(inner_a));
    assert!(!builder.workout().contains(inner_b));
    assert!(!builder.delete(inner_a));
    assert!(!builder.delete(inner_b));
    assert!(builder.workout().contains(kept_item));
    assert!(!builder.delete_superset(gone));
}

#[test]
fn test_ids_unique_across_collections() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("3 Sets");
    let mut ids = vec![
        builder.add_blank(),
        builder.add_blank_to_group(group, None),
        builder.add_divider(),
    ];
    let (x, y) = builder.add_preset(2);
    ids.extend([x, y]);

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
    assert!(ids.iter().all(|id| id.0 != group.0));
}

#[test]
fn test_clear_empties_everything() {
    let (mut builder, _) = builder_abc();
    builder.add_superset("2 Sets");
    builder.set_focus(Focus::Flat(1));

    builder.clear();

    assert!(builder.workout().is_empty());
    assert_eq!(builder.workout().item_count(), 0);
    assert_eq!(builder.export(), "");
}

#[test]
fn test_toolbar_adds_follow_flat_focus() {
    let (mut builder, _) = builder_abc();
    builder.set_focus(Focus::Flat(0));
    builder.add_divider_at_focus();
    assert_eq!(flat_texts(&builder), vec!["A", "---", "B", "C"]);

    builder.add_preset_at_focus(3);
    assert_eq!(
        flat_texts(&builder),
        vec!["A", "---", "3 Sets", "---", "B", "C"]
    );

    // Group focus is ignored by the toolbar
    let group = builder.add_superset("2 Sets");
    builder.set_focus(Focus::group_item(group, 0));
    builder.add_blank_at_focus();
    assert_eq!(flat_texts(&builder).last().map(String::as_str), Some(""));
    assert!(builder.workout().group(group).unwrap().exercises.is_empty());
}

#[test]
fn test_apply_sets_reps_to_focus() {
    let (mut builder, _) = builder_abc();
    assert!(!builder.apply_sets_reps_to_focus("(10 lbs) x 10 x 3"));

    builder.set_focus(Focus::Flat(2));
    assert!(builder.apply_sets_reps_to_focus("(10 lbs) x 10 x 3"));
    assert_eq!(
        builder.workout().selected()[2].sets_reps.as_deref(),
        Some("(10 lbs) x 10 x 3")
    );

    let group = builder.add_superset("3 Sets");
    builder.set_focus(Focus::group_title(group));
    assert!(!builder.apply_sets_reps_to_focus("x 5"));
}

#[test]
fn test_reorder_replaces_order_and_keeps_identity() -> Result<()> {
    let (mut builder, [a, b, c]) = builder_abc();
    builder.edit_sets_reps(&ItemRef::flat(0), "3x10");

    builder.reorder(CollectionRef::Flat, &[c, a, b])?;

    assert_eq!(flat_ids(&builder), vec![c, a, b]);
    assert_eq!(builder.workout().selected()[1].sets_reps.as_deref(), Some("3x10"));
    Ok(())
}

#[test]
fn test_reorder_identity_is_noop() -> Result<()> {
    let (mut builder, ids) = builder_abc();
    let before = builder.workout().clone();

    builder.reorder(CollectionRef::Flat, &ids)?;

    assert_eq!(builder.workout(), &before);
    Ok(())
}

#[test]
fn test_reorder_rejects_non_permutations() {
    let (mut builder, [a, b, c]) = builder_abc();
    let before = builder.workout().clone();

    assert_eq!(
        builder.reorder(CollectionRef::Flat, &[a, b]),
        Err(ReorderError::LengthMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(
        builder.reorder(CollectionRef::Flat, &[a, a, b]),
        Err(ReorderError::Duplicate(a))
    );
    assert_eq!(
        builder.reorder(CollectionRef::Flat, &[a, b, ItemId(999)]),
        Err(ReorderError::Foreign(ItemId(999)))
    );
    let missing = CollectionRef::Group(GroupId(999));
    assert_eq!(
        builder.reorder(missing, &[c]),
        Err(ReorderError::UnknownCollection(missing))
    );

    assert_eq!(builder.workout(), &before);
}

#[test]
fn test_reorder_is_scoped_to_one_collection() -> Result<()> {
    let mut builder = WodBuilder::new();
    let flat = builder.add_blank();
    let group = builder.add_superset("3 Sets");
    builder.set_focus(Focus::group_title(group));
    let x = builder.select_from_catalog("X");
    let y = builder.select_from_catalog("Y");

    builder.reorder(CollectionRef::Group(group), &[y, x])?;
    assert_eq!(group_texts(&builder, group), vec!["Y", "X"]);

    // An item from the flat list can't be dragged into the group
    assert_eq!(
        builder.reorder(CollectionRef::Group(group), &[y, flat]),
        Err(ReorderError::Foreign(flat))
    );
    Ok(())
}

#[test]
fn test_move_item() -> Result<()> {
    let (mut builder, [a, b, c]) = builder_abc();

    builder.move_item(CollectionRef::Flat, 0, 2)?;
    assert_eq!(flat_ids(&builder), vec![b, c, a]);

    builder.move_item(CollectionRef::Flat, 2, 0)?;
    assert_eq!(flat_ids(&builder), vec![a, b, c]);

    builder.move_item(CollectionRef::Flat, 1, 99)?;
    assert_eq!(flat_ids(&builder), vec![a, c, b]);

    assert_eq!(
        builder.move_item(CollectionRef::Flat, 3, 0),
        Err(ReorderError::OutOfRange { index: 3, len: 3 })
    );
    Ok(())
}

#[test]
fn test_export_flat_list() {
    let mut builder = WodBuilder::new();
    builder.select_from_catalog("Squat");
    builder.edit_sets_reps(&ItemRef::flat(0), "3x10");
    builder.add_divider();

    assert_eq!(builder.export(), "Squat 3x10\n\n\n");
}

#[test]
fn test_export_supersets_and_trimming() {
    let mut builder = WodBuilder::new();
    builder.add_blank();
    builder.edit_sets_reps(&ItemRef::flat(0), "x 5");
    builder.select_from_catalog("Plank");
    builder.edit_sets_reps(&ItemRef::flat(1), "");

    let group = builder.add_superset("2 Sets");
    builder.set_focus(Focus::group_title(group));
    builder.select_from_catalog("Curl");
    builder.select_from_catalog("---");

    assert_eq!(builder.export(), "x 5\nPlank\n\n2 Sets\nCurl\n\n\n");
}

#[test]
fn test_export_superset_only_has_no_leading_blank() {
    let mut builder = WodBuilder::new();
    let group = builder.add_superset("3 Sets");
    builder.add_blank_to_group(group, None);
    builder.edit_text(&ItemRef::group(group, 0), "Dip");

    assert_eq!(builder.export(), "3 Sets\nDip\n\n");
    assert_eq!(WodBuilder::new().export(), "");
}

struct ScriptedIds(Vec<u64>);

impl IdGenerator for ScriptedIds {
    fn next_id(&mut self) -> u64 {
        self.0.remove(0)
    }
}

#[test]
fn test_injected_id_generator() {
    let mut builder = WodBuilder::with_id_generator(ScriptedIds(vec![40, 41, 42]));
    assert_eq!(builder.add_blank(), ItemId(40));
    assert_eq!(builder.add_superset("2 Sets"), GroupId(41));
    assert_eq!(builder.add_divider(), ItemId(42));
}

#[test]
fn test_catalog_decoding_keeps_order_and_skips_malformed() -> Result<()> {
    let body = br#"{
        "success": true,
        "grouped": {
            "Upper": ["Push-up", "Row"],
            "Broken": "not a list",
            "Core": ["Plank", null, ""],
            "Lower": []
        }
    }"#;

    let catalog = decode_response(body)?;

    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Upper", "Core", "Lower"]);
    assert_eq!(
        catalog.category("Core").unwrap().exercises,
        vec!["Plank", "Untitled", "Untitled"]
    );
    assert_eq!(catalog.exercise_count(), 5);
    Ok(())
}

#[test]
fn test_catalog_decoding_failures() {
    let err = decode_response(br#"{"success": false, "error": "Notion down"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Server(ref m) if m == "Notion down"));

    let err = decode_response(br#"{"success": false}"#).unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch grouped exercises");

    assert!(matches!(
        decode_response(b"<html>"),
        Err(CatalogError::Decode(_))
    ));

    let empty = decode_response(br#"{"success": true}"#).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_catalog_from_records() {
    let catalog = Catalog::from_records(vec![
        CatalogRecord {
            name: Some("Squat".into()),
            category: Some("Legs".into()),
        },
        CatalogRecord {
            name: None,
            category: Some("Arms".into()),
        },
        CatalogRecord {
            name: Some("Lunge".into()),
            category: Some("Legs".into()),
        },
        CatalogRecord {
            name: Some("Plank".into()),
            category: None,
        },
    ]);

    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Legs", "Arms", "Uncategorized"]);
    assert_eq!(catalog.category("Legs").unwrap().exercises, vec!["Squat", "Lunge"]);
    assert_eq!(catalog.category("Arms").unwrap().exercises, vec!["Untitled"]);
}

#[test]
fn test_decode_records_groups_an_export_file() -> Result<()> {
    let body = br#"[
        {"name": "Squat", "category": "Legs"},
        {"name": "", "category": "Arms"},
        {"category": "Legs"},
        {"name": "Plank", "category": null}
    ]"#;

    let catalog = decode_records(body)?;

    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Legs", "Arms", "Uncategorized"]);
    assert_eq!(catalog.category("Legs").unwrap().exercises, vec!["Squat", "Untitled"]);
    assert_eq!(catalog.category("Uncategorized").unwrap().exercises, vec!["Plank"]);

    assert!(matches!(
        decode_records(br#"{"success": true}"#),
        Err(CatalogError::Decode(_))
    ));
    Ok(())
}

#[test]
fn test_loader_drops_stale_responses() -> Result<()> {
    let mut loader = CatalogLoader::new();
    assert_eq!(loader.state(), &LoadState::Idle);

    let first = loader.begin();
    let retry = loader.begin();
    assert!(loader.is_loading());

    let fresh = decode_response(br#"{"success": true, "grouped": {"New": ["A"]}}"#)?;
    let stale = decode_response(br#"{"success": true, "grouped": {"Old": ["B"]}}"#)?;

    assert!(loader.resolve(retry, Ok(fresh.clone())));
    assert!(!loader.resolve(first, Ok(stale)));
    assert_eq!(loader.catalog(), Some(&fresh));
    Ok(())
}

#[test]
fn test_loader_failure_then_retry() {
    let mut loader = CatalogLoader::new();
    let ticket = loader.begin();
    assert!(loader.resolve(ticket, Err(CatalogError::Server("boom".into()))));
    assert_eq!(
        loader.state(),
        &LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
    );
    assert!(loader.catalog().is_none());

    let retry = loader.begin();
    assert!(loader.resolve(retry, Ok(Catalog::default())));
    assert_eq!(loader.catalog(), Some(&Catalog::default()));
}

#[test]
fn test_config_defaults_written_and_reloaded() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");

    let config = load_config_util(&path)?;
    assert!(path.exists());
    assert_eq!(config, Config::default());
    assert_eq!(config.superset_presets, vec![2, 3, 4]);
    assert_eq!(config.timer_presets, vec!["1 min", "2 mins", "3 mins"]);

    let updated = Config {
        api_base_url: Some("http://localhost:3001".to_string()),
        toolbar_preset_count: 5,
        ..Config::default()
    };
    save_config_util(&path, &updated)?;
    assert_eq!(load_config_util(&path)?, updated);
    Ok(())
}

#[test]
fn test_config_partial_file_uses_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_base_url = \"http://example.test\"\n")?;

    let config = load_config_util(&path)?;

    assert_eq!(config.api_base_url.as_deref(), Some("http://example.test"));
    assert_eq!(config.sets_reps_presets.len(), 4);
    assert_eq!(config.toolbar_preset_count, 3);
    Ok(())
}
