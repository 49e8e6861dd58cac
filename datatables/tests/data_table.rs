use std::collections::BTreeMap;
use std::sync::Arc;

use datatables::prelude::*;
use tabledom::{find_element, render_lines, Position};

type Row = BTreeMap<String, Value>;

fn rows(names: &[&str]) -> Vec<Row> {
    names
        .iter()
        .map(|name| {
            let mut row = Row::new();
            row.insert("name".into(), Value::from(*name));
            row
        })
        .collect()
}

fn name_columns() -> Vec<Column<Row>> {
    vec![Column::new("name", "Name")]
}

fn checked(root: &Element, id: &str) -> Option<bool> {
    find_element(root, id)
        .and_then(|el| el.get_data("checked"))
        .map(|v| v == "true")
}

fn row_checkbox(i: usize) -> String {
    format!("data-table-row-{}-checkbox", i)
}

#[test]
fn test_three_row_selection_through_events() {
    let table = DataTable::new(TableConfig::default());
    let data = rows(&["web", "api", "docs"]);
    let columns = name_columns();

    let root = table.compose(&data, &columns).unwrap();
    for i in 0..3 {
        assert_eq!(checked(&root, &row_checkbox(i)), Some(false));
    }
    assert_eq!(checked(&root, "data-table-select-all"), Some(false));

    assert!(table.dispatch(&row_checkbox(1), "on_activate"));
    let root = table.compose(&data, &columns).unwrap();
    assert_eq!(table.selection().as_slice(), &[false, true, false]);
    assert_eq!(checked(&root, &row_checkbox(1)), Some(true));
    assert_eq!(checked(&root, "data-table-select-all"), Some(false));

    table.dispatch(&row_checkbox(0), "on_activate");
    table.dispatch(&row_checkbox(2), "on_activate");
    let root = table.compose(&data, &columns).unwrap();
    assert_eq!(table.selection().as_slice(), &[true, true, true]);
    assert_eq!(checked(&root, "data-table-select-all"), Some(true));

    assert!(table.dispatch("data-table-select-all", "on_activate"));
    let root = table.compose(&data, &columns).unwrap();
    assert_eq!(table.selection().as_slice(), &[false, false, false]);
    assert_eq!(checked(&root, "data-table-select-all"), Some(false));
}

#[test]
fn test_shrinking_data_resets_selection() {
    let table = DataTable::new(TableConfig::default());
    let columns = name_columns();

    table.compose(&rows(&["a", "b", "c", "d", "e"]), &columns).unwrap();
    table.toggle_one(0);
    table.toggle_one(3);
    assert_eq!(table.selection().checked_indices(), vec![0, 3]);

    table.compose(&rows(&["a", "b"]), &columns).unwrap();
    assert_eq!(table.selection().as_slice(), &[false, false]);
}

#[test]
fn test_same_size_data_keeps_selection() {
    let table = DataTable::new(TableConfig::default());
    let columns = name_columns();

    table.compose(&rows(&["a", "b"]), &columns).unwrap();
    table.toggle_one(1);
    table.compose(&rows(&["c", "d"]), &columns).unwrap();
    assert_eq!(table.selection().as_slice(), &[false, true]);
}

#[test]
fn test_override_replaces_checkbox() {
    let table = DataTable::new(TableConfig::default()).overwrite_row_action_items(Arc::new(
        |_value: &Value, row: &Row, i: usize| {
            (row.value("name") == Value::from("locked"))
                .then(|| Element::text("--").id(format!("lock-{}", i)))
        },
    ));
    let data = rows(&["open", "locked"]);
    let root = table.compose(&data, &name_columns()).unwrap();

    assert_eq!(checked(&root, &row_checkbox(0)), Some(false));
    assert!(find_element(&root, &row_checkbox(1)).is_none());
    assert!(find_element(&root, "lock-1").is_some());
    assert!(!table.dispatch(&row_checkbox(1), "on_activate"));

    // The header checkbox is unaffected by overrides.
    assert_eq!(checked(&root, "data-table-select-all"), Some(false));
}

#[test]
fn test_override_returning_none_shows_checkbox_state() {
    let table = DataTable::new(TableConfig::default())
        .overwrite_row_action_items(Arc::new(|_: &Value, _: &Row, _: usize| None));
    let data = rows(&["a", "b"]);
    table.compose(&data, &name_columns()).unwrap();
    table.toggle_one(1);

    let root = table.compose(&data, &name_columns()).unwrap();
    assert_eq!(checked(&root, &row_checkbox(0)), Some(false));
    assert_eq!(checked(&root, &row_checkbox(1)), Some(true));
}

#[test]
fn test_select_all_includes_overwritten_rows() {
    let table = DataTable::new(TableConfig::default()).overwrite_row_action_items(Arc::new(
        |_: &Value, _: &Row, i: usize| (i == 1).then(|| Element::text("--")),
    ));
    let data = rows(&["a", "b", "c"]);
    table.compose(&data, &name_columns()).unwrap();

    assert!(table.dispatch(&row_checkbox(0), "on_activate"));
    assert!(table.dispatch(&row_checkbox(2), "on_activate"));
    assert!(!table.dispatch(&row_checkbox(1), "on_activate"));
    assert!(!table.is_all_checked());

    let root = table.compose(&data, &name_columns()).unwrap();
    assert_eq!(checked(&root, "data-table-select-all"), Some(false));

    assert!(table.dispatch("data-table-select-all", "on_activate"));
    assert_eq!(table.selection().as_slice(), &[true, true, true]);

    let root = table.compose(&data, &name_columns()).unwrap();
    assert_eq!(checked(&root, "data-table-select-all"), Some(true));
    assert!(find_element(&root, &row_checkbox(1)).is_none());
}

#[test]
fn test_empty_data() {
    let table = DataTable::new(TableConfig::default());
    let root = table.compose(&[], &name_columns()).unwrap();

    assert!(table.selection().is_empty());
    assert!(find_element(&root, "data-table-row-0").is_none());

    let select_all = find_element(&root, "data-table-select-all").unwrap();
    assert_eq!(select_all.get_data("checked").map(String::as_str), Some("false"));
    assert!(select_all.disabled);
    assert!(!table.dispatch("data-table-select-all", "on_activate"));

    table.toggle_all();
    assert!(!table.is_all_checked());
}

#[test]
fn test_empty_columns_keep_injected_columns() {
    let table = DataTable::new(TableConfig::default());
    let root = table.compose(&rows(&["a"]), &[]).unwrap();

    assert!(find_element(&root, "data-table-head-0").is_some());
    assert!(find_element(&root, "data-table-head-1").is_some());
    assert!(find_element(&root, "data-table-head-2").is_none());
    assert!(find_element(&root, &row_checkbox(0)).is_some());
    assert!(find_element(&root, "data-table-row-0-menu").is_some());
}

#[test]
fn test_reserved_and_empty_keys_are_rejected() {
    let table: DataTable<Row> = DataTable::new(TableConfig::default());
    let data = rows(&["a"]);

    let err = table
        .compose(&data, &[Column::new("name", "Name"), Column::new("menu", "Menu")])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::ReservedColumnKey {
            key: "menu".into(),
            index: 1
        }
    );

    let err = table
        .compose(&data, &[Column::new("operation", "Op")])
        .unwrap_err();
    assert!(matches!(err, TableError::ReservedColumnKey { index: 0, .. }));

    let err = table.compose(&data, &[Column::new("", "Blank")]).unwrap_err();
    assert_eq!(err, TableError::EmptyColumnKey { index: 0 });
}

#[test]
fn test_duplicate_caller_keys_are_allowed() {
    let table = DataTable::new(TableConfig::default());
    let columns = vec![Column::new("name", "Name"), Column::new("name", "Again")];
    let root = table.compose(&rows(&["a"]), &columns).unwrap();

    assert!(find_element(&root, "data-table-cell-0-1").is_some());
    assert!(find_element(&root, "data-table-cell-0-2").is_some());
}

#[test]
fn test_custom_cell_renderer_receives_value_row_and_index() {
    let table = DataTable::new(TableConfig::default());
    let columns = vec![Column::new("name", "Name").render(Arc::new(
        |value: &Value, _row: &Row, i: usize| Element::text(format!("{}:{}", i, value)),
    ))];
    let root = table.compose(&rows(&["a", "b"]), &columns).unwrap();

    let cell = find_element(&root, "data-table-cell-1-1").unwrap();
    assert_eq!(cell.text_content(), "1:b");
}

#[test]
fn test_menu_column_not_rederived_on_selection_change() {
    let items: RowMenuItems<Row> = Arc::new(|_: &Value, _: &Row, _: usize| Vec::new());
    let mut table = DataTable::new(TableConfig::default()).render_row_menu_items(items.clone());
    let data = rows(&["a", "b"]);
    let columns = name_columns();

    table.compose(&data, &columns).unwrap();
    assert_eq!(table.menu_column_computations(), 1);

    table.dispatch(&row_checkbox(0), "on_activate");
    table.dispatch("data-table-select-all", "on_activate");
    table.compose(&data, &columns).unwrap();
    table.compose(&data, &columns).unwrap();
    assert_eq!(table.menu_column_computations(), 1);

    // Same callback, same colors.
    table.set_render_row_menu_items(Some(items));
    table.compose(&data, &columns).unwrap();
    assert_eq!(table.menu_column_computations(), 1);

    table.set_theme(Arc::new(GeistTheme::dark()));
    table.compose(&data, &columns).unwrap();
    assert_eq!(table.menu_column_computations(), 2);

    table.set_render_row_menu_items(Some(Arc::new(|_: &Value, _: &Row, _: usize| {
        vec![Element::text("Delete")]
    })));
    table.compose(&data, &columns).unwrap();
    assert_eq!(table.menu_column_computations(), 3);
}

#[test]
fn test_row_menu_opens_and_dismisses() {
    let table = DataTable::new(TableConfig::default()).render_row_menu_items(Arc::new(
        |_: &Value, _: &Row, i: usize| {
            vec![
                Element::text("Visit").id(format!("visit-{}", i)),
                Element::text("Delete").id(format!("delete-{}", i)),
            ]
        },
    ));
    let data = rows(&["a", "b"]);
    let columns = name_columns();

    let root = table.compose(&data, &columns).unwrap();
    assert!(find_element(&root, "data-table-row-0-menu-overlay").is_none());

    assert!(table.dispatch("data-table-row-0-menu-trigger", "on_activate"));
    assert_eq!(table.open_menu(), Some(0));

    let root = table.compose(&data, &columns).unwrap();
    let overlay = find_element(&root, "data-table-row-0-menu-overlay").unwrap();
    assert_eq!(overlay.position, Position::Absolute);
    assert!(overlay.interaction_scope);
    assert_eq!(overlay.min_width, Some(10));
    assert!(find_element(overlay, "delete-0").is_some());
    assert!(find_element(overlay, "delete-0").unwrap().style_focused.is_some());
    assert!(find_element(&root, "data-table-row-1-menu-overlay").is_none());

    // Opening another row's menu closes the first.
    table.dispatch("data-table-row-1-menu-trigger", "on_activate");
    assert_eq!(table.open_menu(), Some(1));
    let root = table.compose(&data, &columns).unwrap();
    assert!(find_element(&root, "data-table-row-0-menu-overlay").is_none());

    assert!(table.dispatch_with(
        "data-table-row-1-menu-overlay",
        "on_outside_click",
        EventData::OutsideClick { target: None },
    ));
    assert_eq!(table.open_menu(), None);
}

#[test]
fn test_menu_without_items_opens_empty() {
    let table = DataTable::new(TableConfig::default());
    let data = rows(&["a"]);

    table.compose(&data, &name_columns()).unwrap();
    table.dispatch("data-table-row-0-menu-trigger", "on_activate");
    let root = table.compose(&data, &name_columns()).unwrap();

    let overlay = find_element(&root, "data-table-row-0-menu-overlay").unwrap();
    assert!(overlay.content.children().is_empty());
}

#[test]
fn test_menu_selection_independent() {
    let table = DataTable::new(TableConfig::default());
    let data = rows(&["a", "b"]);
    table.compose(&data, &name_columns()).unwrap();

    table.dispatch("data-table-row-1-menu-trigger", "on_activate");
    table.dispatch(&row_checkbox(0), "on_activate");
    assert_eq!(table.open_menu(), Some(1));
    assert_eq!(table.selection().as_slice(), &[true, false]);
}

#[test]
fn test_renders_header_and_rows() {
    let table = DataTable::new(TableConfig::default());
    let root = table.compose(&rows(&["a"]), &name_columns()).unwrap();
    let lines: Vec<String> = render_lines(&root, &GeistTheme::light())
        .iter()
        .map(|l| l.text())
        .collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "╭──────────────╮");
    assert_eq!(lines[1], "│ [ ]  NAME    │");
    assert_eq!(lines[3].trim(), "[ ]  a     ⋮");
}

#[test]
fn test_header_uppercases_labels_only() {
    let table = DataTable::new(TableConfig::default());
    let data = rows(&["a"]);
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("id", "Id").header(Element::text("Id")),
    ];
    table.compose(&data, &columns).unwrap();
    table.dispatch("data-table-select-all", "on_activate");

    let root = table.compose(&data, &columns).unwrap();
    let lines: Vec<String> = render_lines(&root, &GeistTheme::light())
        .iter()
        .map(|l| l.text())
        .collect();

    assert!(lines[1].starts_with("│ [x]  NAME"), "{:?}", lines[1]);
    assert!(lines[1].contains(" Id "), "{:?}", lines[1]);
    assert!(lines[3].trim().starts_with("[x]  a"), "{:?}", lines[3]);
}

#[test]
fn test_tables_do_not_share_state() {
    let first = DataTable::new(TableConfig::default().id("first"));
    let second = DataTable::new(TableConfig::default().id("second"));
    let data = rows(&["a"]);

    first.compose(&data, &name_columns()).unwrap();
    second.compose(&data, &name_columns()).unwrap();
    first.dispatch("first-row-0-checkbox", "on_activate");

    assert!(first.is_all_checked());
    assert!(!second.is_all_checked());
    assert!(!second.dispatch("first-row-0-checkbox", "on_activate"));
}

#[test]
fn test_needs_compose_after_events() {
    let table = DataTable::new(TableConfig::default());
    let data = rows(&["a", "b"]);

    table.compose(&data, &name_columns()).unwrap();
    assert!(!table.needs_compose());

    table.dispatch(&row_checkbox(0), "on_activate");
    assert!(table.needs_compose());
    table.compose(&data, &name_columns()).unwrap();
    assert!(!table.needs_compose());

    table.dispatch("data-table-row-1-menu-trigger", "on_activate");
    assert!(table.needs_compose());
    table.compose(&data, &name_columns()).unwrap();

    table.set_sticky(true);
    assert!(table.needs_compose());
}
