use proptest::prelude::*;
use rowmark::prelude::*;
use serde_json::{Value, json};

fn rows(ids: &[i64]) -> Vec<Value> {
    ids.iter().map(|id| json!({"id": id})).collect()
}

fn assert_aligned(table: &Table<Value>) {
    assert_eq!(table.data().len(), table.store().statuses().len());
}

// ============================================================================
// Dataset operations
// ============================================================================

#[test]
fn test_set_data_then_get_data() {
    let mut table = Table::new(TableConfig::new("t"));
    table.set_data(rows(&[1, 2, 3]));

    assert_eq!(table.data(), rows(&[1, 2, 3]).as_slice());
    assert_aligned(&table);
}

#[test]
fn test_add_item_uses_configured_position() {
    let config = TableConfig::new("t").insert_position(InsertPosition::Start);
    let mut table = Table::with_rows(config, rows(&[1, 2]));

    assert_eq!(table.add_item(json!({"id": 0})), 0);
    assert_eq!(table.add_item_at(json!({"id": 3}), InsertPosition::End), 3);

    assert_eq!(table.data(), rows(&[0, 1, 2, 3]).as_slice());
    assert_eq!(table.store().last_insert_position(), Some(InsertPosition::End));
    assert_aligned(&table);
}

#[test]
fn test_remove_items_unknown_value_leaves_table_unchanged() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1, 2]));
    table.check_row(1, true).unwrap();
    let statuses = table.store().statuses().to_vec();

    assert_eq!(table.remove_items("id", &[json!("x")]), 0);

    assert_eq!(table.data(), rows(&[1, 2]).as_slice());
    assert_eq!(table.store().statuses(), statuses.as_slice());
}

#[test]
fn test_remove_items_by_configured_key() {
    let mut table = Table::with_rows(
        TableConfig::new("codes").key_field("code"),
        vec![json!({"code": "a"}), json!({"code": "b"}), json!({"code": "c"})],
    );

    assert_eq!(table.remove_items_by_key(&[json!("c"), json!("a")]), 2);

    assert_eq!(table.data(), &[json!({"code": "b"})]);
    assert_aligned(&table);
}

#[test]
fn test_added_row_has_no_errors() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1]));
    table.store_mut().push_error(0, CellError::new("id", "bad")).unwrap();

    table.add_item(json!({"id": 2}));
    let errors = table.error_rows();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index, 0);
}

#[test]
fn test_error_rows_follow_removals() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1, 2, 3]));
    table.store_mut().push_error(2, CellError::new("id", "bad")).unwrap();

    table.remove_items("id", &[json!(1)]);

    let errors = table.error_rows();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index, 1);
    assert_eq!(errors[0].data, json!({"id": 3}));
}

#[test]
fn test_change_data_cleared_by_set_data() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1]));
    table.store_mut().record_change(json!({"id": 1, "name": "edited"}));
    assert_eq!(table.change_data().len(), 1);

    table.set_data(rows(&[4]));

    assert!(table.change_data().is_empty());
}

// ============================================================================
// Views and render tracking
// ============================================================================

#[test]
fn test_visible_rows() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1, 2, 3]));
    table.set_view(vec![2_usize, 0, 10]);

    assert_eq!(table.visible_indices(), vec![2, 0]);
    assert_eq!(table.visible_rows(), rows(&[3, 1]));
}

#[test]
fn test_dirty_flag() {
    let mut table = Table::with_rows(TableConfig::default(), rows(&[1]));
    assert!(!table.is_dirty());

    table.add_item(json!({"id": 2}));
    assert!(table.is_dirty());
    table.clear_dirty();

    table.remove_items("id", &[json!(9)]);
    assert!(!table.is_dirty());

    table.toggle(SelectionScope::Current, None);
    assert!(table.is_dirty());
}

#[test]
fn test_table_ids_are_unique() {
    let a: Table<Value> = Table::new(TableConfig::default());
    let b: Table<Value> = Table::new(TableConfig::default());
    assert_ne!(a.id(), b.id());
}

// ============================================================================
// Length invariant
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    SetData(Vec<i64>),
    Add(i64, bool),
    Remove(Vec<i64>),
    Check(usize, bool),
    Toggle(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec(0i64..8, 0..6).prop_map(Op::SetData),
        (0i64..8, any::<bool>()).prop_map(|(id, start)| Op::Add(id, start)),
        prop::collection::vec(0i64..10, 0..4).prop_map(Op::Remove),
        (0usize..10, any::<bool>()).prop_map(|(index, checked)| Op::Check(index, checked)),
        any::<bool>().prop_map(Op::Toggle),
    ]
}

proptest! {
    #[test]
    fn prop_rows_and_statuses_stay_aligned(ops in prop::collection::vec(op(), 0..40)) {
        let mut table = Table::new(TableConfig::default());
        for op in ops {
            match op {
                Op::SetData(ids) => table.set_data(rows(&ids)),
                Op::Add(id, start) => {
                    let position = if start { InsertPosition::Start } else { InsertPosition::End };
                    table.add_item_at(json!({"id": id}), position);
                }
                Op::Remove(ids) => {
                    let values: Vec<Value> = ids.iter().map(|id| json!(id)).collect();
                    table.remove_items("id", &values);
                }
                Op::Check(index, checked) => {
                    let in_range = index < table.data().len();
                    prop_assert_eq!(table.check_row(index, checked).is_ok(), in_range);
                }
                Op::Toggle(all) => {
                    let scope = if all { SelectionScope::All } else { SelectionScope::Current };
                    table.toggle(scope, None);
                }
            }
            prop_assert_eq!(table.data().len(), table.store().statuses().len());
            prop_assert_eq!(table.header().primary(), table.header().pinned());
        }
    }
}
