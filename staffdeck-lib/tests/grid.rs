use staffdeck_lib::grid::{Column, GridRow, RenderedRow, render_rows};
use staffdeck_lib::model::EmployeeId;

struct TestRow {
    id: EmployeeId,
    name: String,
}

impl GridRow for TestRow {
    fn id(&self) -> EmployeeId {
        self.id
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

fn rows() -> Vec<TestRow> {
    vec![
        TestRow {
            id: 1,
            name: "Ada".into(),
        },
        TestRow {
            id: 2,
            name: "Grace".into(),
        },
    ]
}

#[test]
fn test_field_columns_use_raw_lookup() {
    let columns = vec![Column::field("Name", "name")];
    let rendered = render_rows(&rows(), &columns);

    assert_eq!(
        rendered,
        vec![
            RenderedRow::Data {
                id: 1,
                cells: vec!["Ada".to_string()],
            },
            RenderedRow::Data {
                id: 2,
                cells: vec!["Grace".to_string()],
            },
        ]
    );
}

#[test]
fn test_missing_field_renders_as_empty_cell() {
    let columns = vec![Column::field("Missing", "nope")];
    let rendered = render_rows(&rows(), &columns);

    match &rendered[0] {
        RenderedRow::Data { cells, .. } => assert_eq!(cells[0], ""),
        RenderedRow::Placeholder { .. } => panic!("expected a data row"),
    }
}

#[test]
fn test_custom_renderer_output_is_used_verbatim() {
    let columns = vec![Column::custom("Shout", |row: &TestRow| {
        format!("{}!", row.name.to_uppercase())
    })];
    let rendered = render_rows(&rows(), &columns);

    match &rendered[0] {
        RenderedRow::Data { cells, .. } => assert_eq!(cells[0], "ADA!"),
        RenderedRow::Placeholder { .. } => panic!("expected a data row"),
    }
}

#[test]
fn test_zero_rows_yield_one_placeholder_spanning_all_columns() {
    let columns = vec![Column::field("A", "a"), Column::field("B", "b")];
    let rendered = render_rows::<TestRow>(&[], &columns);

    // Two data columns plus the reserved selection column.
    assert_eq!(rendered, vec![RenderedRow::Placeholder { span: 3 }]);
}

#[test]
fn test_zero_rows_and_zero_columns_span_one() {
    let rendered = render_rows::<TestRow>(&[], &[]);
    assert_eq!(rendered, vec![RenderedRow::Placeholder { span: 1 }]);
}

#[test]
fn test_column_display_hints() {
    let column = Column::<TestRow>::field("Actions", "actions")
        .width(12)
        .hide_label();

    assert_eq!(column.width, Some(12));
    assert!(column.hide_label);
    assert_eq!(column.label, "Actions");
}

#[test]
fn test_cells_follow_column_order() {
    let columns = vec![
        Column::custom("Id", |row: &TestRow| row.id.to_string()),
        Column::field("Name", "name"),
    ];
    let rendered = render_rows(&rows(), &columns);

    match &rendered[1] {
        RenderedRow::Data { id, cells } => {
            assert_eq!(*id, 2);
            assert_eq!(cells, &vec!["2".to_string(), "Grace".to_string()]);
        }
        RenderedRow::Placeholder { .. } => panic!("expected a data row"),
    }
}
