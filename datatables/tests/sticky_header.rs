use std::collections::BTreeMap;

use datatables::prelude::*;
use datatables::widgets::{HeaderSpec, HeaderStyle, TableHead};
use tabledom::{
    clickable_ids, find_element, flow_height, natural_height, render_lines, Position, Visibility,
};

type Row = BTreeMap<String, Value>;

fn spec() -> HeaderSpec {
    let columns: Vec<Column<Row>> = vec![
        Column::new("name", "Name").width(12),
        Column::new("framework", "Framework"),
    ];
    HeaderSpec::from_columns(&columns)
}

fn block_height(head: &TableHead<'_>) -> u16 {
    let block = head.build();
    // Height the block occupies is what its in-flow children reserve.
    block
        .content
        .children()
        .iter()
        .map(flow_height)
        .sum()
}

#[test]
fn test_spec_follows_columns() {
    let spec = spec();
    assert_eq!(spec.len(), 2);
    assert_eq!(spec.cells[0].label, "Name");
    assert_eq!(spec.cells[0].width, Some(12));
    assert_eq!(spec.cells[1].width, None);
}

#[test]
fn test_spacer_matches_live_height_in_both_modes() {
    let spec = spec();
    for is_sticky in [false, true] {
        let head = TableHead::new("t", &spec)
            .style(HeaderStyle::from_theme(&GeistTheme::light()))
            .is_sticky(is_sticky);
        let (live, spacer) = head.build_copies();
        assert_eq!(natural_height(&live), natural_height(&spacer));
        assert_eq!(block_height(&head), natural_height(&live));
    }
}

#[test]
fn test_sticky_copies() {
    let spec = spec();
    let (live, spacer) = TableHead::new("t", &spec)
        .is_sticky(true)
        .sticky_top(2)
        .build_copies();

    assert_eq!(live.position, Position::Fixed);
    assert_eq!(live.top, Some(2));
    assert_eq!(live.z_index, 1);

    assert_eq!(spacer.position, Position::Static);
    assert_eq!(spacer.visibility, Visibility::Hidden);
    assert!(!spacer.hit_testable);
    assert_eq!(spacer.id, "t-head-spacer");
    assert!(find_element(&spacer, "t-head-0-spacer").is_some());
}

#[test]
fn test_non_sticky_copies() {
    let spec = spec();
    let (live, spacer) = TableHead::new("t", &spec).build_copies();

    assert_eq!(live.position, Position::Static);
    assert_eq!(spacer.visibility, Visibility::Collapsed);
    assert_eq!(flow_height(&spacer), 0);
}

#[test]
fn test_fixed_width_is_pinned() {
    let spec = spec();
    let (live, _) = TableHead::new("t", &spec).build_copies();
    let name = find_element(&live, "t-head-0").unwrap();
    assert_eq!(name.min_width, Some(12));
    assert_eq!(name.max_width, Some(12));

    // Content sized: "Framework" plus one cell of padding each side.
    let framework = find_element(&live, "t-head-1").unwrap();
    assert_eq!(framework.min_width, Some(11));
}

#[test]
fn test_spacer_is_never_clickable() {
    let table = DataTable::new(TableConfig::default());
    let mut row = Row::new();
    row.insert("name".into(), Value::from("web"));
    let data = vec![row];
    let columns = vec![Column::new("name", "Name")];

    for is_sticky in [false, true] {
        table.set_sticky(is_sticky);
        let root = table.compose(&data, &columns).unwrap();
        let ids = clickable_ids(&root);
        assert!(ids.iter().any(|id| id == "data-table-select-all"));
        assert!(!ids.iter().any(|id| id.ends_with("-spacer")));
    }
}

#[test]
fn test_sticky_table_renders_like_static_table() {
    let table = DataTable::new(TableConfig::default());
    let mut row = Row::new();
    row.insert("name".into(), Value::from("web"));
    let data = vec![row];
    let columns = vec![Column::new("name", "Name")];
    let theme = GeistTheme::light();

    let text = |root: &Element| -> Vec<String> {
        render_lines(root, &theme).iter().map(|l| l.text()).collect()
    };

    let flowing = text(&table.compose(&data, &columns).unwrap());
    table.set_sticky(true);
    let root = table.compose(&data, &columns).unwrap();
    assert_eq!(
        find_element(&root, "data-table-head").unwrap().position,
        Position::Fixed
    );
    assert_eq!(text(&root), flowing);
}

#[test]
fn test_sticky_disabled_in_config_ignores_state() {
    let table = DataTable::new(TableConfig::default().sticky(false));
    let columns: Vec<Column<Row>> = vec![Column::new("name", "Name")];
    table.set_sticky(true);

    let root = table.compose(&[], &columns).unwrap();
    let live = find_element(&root, "data-table-head").unwrap();
    assert_eq!(live.position, Position::Static);
}
