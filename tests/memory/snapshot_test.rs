/*!
 * Snapshot Tests
 * Ordering, purity, and serialization of state reports
 */

use pretty_assertions::assert_eq;
use quickfit::{MemoryInfo, QuickFitManager, SeedEntry, SeedLayout};

fn entry(size: u32, blocks: &[&str]) -> SeedEntry {
    SeedEntry {
        size,
        blocks: blocks.iter().map(|b| b.to_string()).collect(),
    }
}

fn seeded_manager() -> QuickFitManager {
    QuickFitManager::with_seed(SeedLayout::new(vec![
        entry(50, &["Block1", "Block2"]),
        entry(100, &["Block3", "Block4"]),
        entry(200, &["Block5"]),
    ]))
}

#[test]
fn classes_report_in_seed_order() {
    let snapshot = seeded_manager().snapshot();

    let sizes: Vec<u32> = snapshot.classes.iter().map(|class| class.size).collect();
    assert_eq!(sizes, vec![50, 100, 200]);
}

#[test]
fn emptied_classes_stay_visible() {
    let manager = seeded_manager();
    manager.allocate("P1", 200).unwrap();

    let snapshot = manager.snapshot();
    let class_200 = snapshot
        .classes
        .iter()
        .find(|class| class.size == 200)
        .unwrap();
    assert!(class_200.free_blocks.is_empty());
}

#[test]
fn seeded_empty_pool_is_reported() {
    let manager = QuickFitManager::with_seed(SeedLayout::new(vec![entry(75, &[])]));

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.classes.len(), 1);
    assert_eq!(snapshot.classes[0].size, 75);
    assert!(snapshot.classes[0].free_blocks.is_empty());
}

#[test]
fn bindings_report_in_binding_order() {
    let manager = seeded_manager();

    manager.allocate("P2", 100).unwrap();
    manager.allocate("P1", 50).unwrap();

    let ids: Vec<String> = manager
        .snapshot()
        .bindings
        .iter()
        .map(|binding| binding.process_id.clone())
        .collect();
    assert_eq!(ids, vec!["P2", "P1"]);

    // A process re-bound after deallocation moves to the tail.
    manager.deallocate("P2").unwrap();
    manager.allocate("P2", 100).unwrap();

    let ids: Vec<String> = manager
        .snapshot()
        .bindings
        .iter()
        .map(|binding| binding.process_id.clone())
        .collect();
    assert_eq!(ids, vec!["P1", "P2"]);
}

#[test]
fn consecutive_snapshots_are_identical() {
    let manager = seeded_manager();
    manager.allocate("P1", 50).unwrap();

    assert_eq!(manager.snapshot(), manager.snapshot());
}

#[test]
fn snapshot_has_no_side_effects() {
    let manager = seeded_manager();

    let before = manager.snapshot();
    let _ = manager.snapshot();
    manager.allocate("P1", 50).unwrap();
    manager.deallocate("P1").unwrap();
    let _ = manager.snapshot();

    // Pools differ (Block1 moved to the tail) but class order does not.
    let after = manager.snapshot();
    let before_sizes: Vec<u32> = before.classes.iter().map(|class| class.size).collect();
    let after_sizes: Vec<u32> = after.classes.iter().map(|class| class.size).collect();
    assert_eq!(before_sizes, after_sizes);
    assert!(after.bindings.is_empty());
}

#[test]
fn stats_count_pools_and_bindings() {
    let manager = seeded_manager();
    manager.allocate("P1", 50).unwrap();

    let stats = manager.stats();
    assert_eq!(stats.size_classes, 3);
    assert_eq!(stats.free_blocks, 4);
    assert_eq!(stats.active_bindings, 1);
}

#[test]
fn stats_work_through_the_info_trait() {
    let manager = seeded_manager();
    let info: &dyn MemoryInfo = &manager;

    assert_eq!(info.stats().free_blocks, 5);
    assert_eq!(info.snapshot().classes.len(), 3);
}

#[test]
fn snapshot_serializes_with_snake_case_fields() {
    let manager = seeded_manager();
    manager.allocate("P1", 50).unwrap();

    let value = serde_json::to_value(manager.snapshot()).unwrap();
    assert_eq!(value["classes"][0]["size"], 50);
    assert_eq!(value["classes"][0]["free_blocks"][0], "Block2");
    assert_eq!(value["bindings"][0]["process_id"], "P1");
    assert_eq!(value["bindings"][0]["block"], "Block1");
}

#[test]
fn snapshot_renders_as_text() {
    let manager = seeded_manager();
    manager.allocate("P1", 100).unwrap();

    let rendered = manager.snapshot().to_string();
    assert!(rendered.contains("Available memory blocks:"));
    assert!(rendered.contains("50 KB: Block1, Block2"));
    assert!(rendered.contains("100 KB: Block4"));
    assert!(rendered.contains("Allocated processes:"));
    assert!(rendered.contains("P1: Block3 (100 KB)"));
}
