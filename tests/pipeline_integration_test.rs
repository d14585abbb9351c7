// ==========================================
// 库存导出重整 - 处理管道集成测试
// ==========================================
// 覆盖: 解析 → 列选择 → 规范化 → 报表/仓库投影
// ==========================================


use inventory_export::config::ColumnSpec;
use inventory_export::domain::{RawTable, CANONICAL_COLUMNS, SORT_KEY};
use inventory_export::importer::{
    normalize, select_columns, ImportError, InventoryProcessor,
};
use inventory_export::logging;
use inventory_export::projector::{project_report, project_warehouse};
use test_helpers::{create_test_csv, fixture_path, RawRowBuilder};

fn run(rows: Vec<Vec<String>>) -> Result<inventory_export::Table, ImportError> {
    let raw = RawTable::new(rows);
    let selected = select_columns(&raw, &ColumnSpec::inventory_export())?;
    normalize(&selected)
}

#[test]
fn test_fixture_file_end_to_end() {
    logging::init_test();

    let processor = InventoryProcessor::with_defaults();
    let outcome = processor
        .process_file(fixture_path("inventory_export.csv"))
        .expect("处理夹具文件失败");

    assert_eq!(outcome.raw_rows, 4);
    let table = &outcome.normalized;
    assert_eq!(table.len(), 4);
    assert_eq!(table.width(), 12);

    assert_eq!(
        table.column_values("unit_id").unwrap(),
        vec!["U-3", "U-1", "U-2", "U-4"]
    );
    assert_eq!(table.index(), &[2, 1, 0, 3]);

    assert_eq!(
        table.column_values("product_description").unwrap(),
        vec!["Red Widget", "Blue Widget", "Bolt", "No label"]
    );
    assert_eq!(
        table.column_values("cus_id").unwrap(),
        vec!["1001", "1001", "2002", "3003"]
    );
    assert_eq!(table.value(2, "cus_name"), Some("Beta Ltd"));
    assert_eq!(table.value(2, "aisle"), Some("01"));
}

#[test]
fn test_example_row_decomposes() {
    let table = run(vec![RawRowBuilder::new().build()]).unwrap();

    assert_eq!(table.value(0, "cus_id"), Some("1001"));
    assert_eq!(table.value(0, "cus_name"), Some("Acme Corp"));
    assert_eq!(table.value(0, "zone"), Some("A"));
    assert_eq!(table.value(0, "aisle"), Some("12"));
    assert_eq!(table.value(0, "rack"), Some("3"));
    assert_eq!(table.value(0, "level"), Some("2"));
    assert_eq!(table.value(0, "product_description"), Some("Blue Widget"));
}

#[test]
fn test_one_output_row_per_input_row() {
    let rows: Vec<Vec<String>> = (0..25)
        .map(|i| {
            RawRowBuilder::new()
                .product_id(&format!("P{:02}", 25 - i))
                .unit_id(&format!("U{}", i))
                .build()
        })
        .collect();

    let table = run(rows).unwrap();
    assert_eq!(table.len(), 25);
    assert!(table.rows().iter().all(|r| r.len() == CANONICAL_COLUMNS.len()));
}

#[test]
fn test_rows_ordered_by_composite_key() {
    let rows = vec![
        RawRowBuilder::new().product_id("P2").unit_location("A*1*1*1").build(),
        RawRowBuilder::new().product_id("P1").unit_location("B*2*1*1").build(),
        RawRowBuilder::new().product_id("P1").unit_location("B*1*9*1").build(),
        RawRowBuilder::new().product_id("P1").unit_location("B*1*2*3").build(),
        RawRowBuilder::new().product_id("P1").unit_location("B*1*2*1").build(),
        RawRowBuilder::new().product_id("P0").unit_location("Z*9*9*9").build(),
    ];
    let table = run(rows).unwrap();

    let positions: Vec<usize> = SORT_KEY
        .iter()
        .map(|c| table.column_position(c).unwrap())
        .collect();
    let keys: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|r| positions.iter().map(|&p| r[p].as_str()).collect())
        .collect();

    for pair in keys.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} 应排在 {:?} 之前", pair[0], pair[1]);
    }
    assert_eq!(table.value(0, "product_id"), Some("P0"));
}

#[test]
fn test_primary_key_wins_over_zone() {
    let rows = vec![
        RawRowBuilder::new().product_id("P2").unit_location("A*1*1*1").build(),
        RawRowBuilder::new().product_id("P1").unit_location("B*1*1*1").build(),
    ];
    let table = run(rows).unwrap();
    assert_eq!(table.column_values("product_id").unwrap(), vec!["P1", "P2"]);
    assert_eq!(table.column_values("zone").unwrap(), vec!["B", "A"]);
}

#[test]
fn test_customer_round_trip() {
    let values = ["CID:1001-Acme Corp", "X:42-Solo", "PFX:A:B-Name With Spaces"];
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            RawRowBuilder::new()
                .cusid_name(v)
                .product_id(&format!("P{}", i))
                .build()
        })
        .collect();
    let table = run(rows).unwrap();

    for (i, original) in values.iter().enumerate() {
        let (_, without_prefix) = original.split_once(':').unwrap();
        let rebuilt = format!(
            "{}-{}",
            table.value(i, "cus_id").unwrap(),
            table.value(i, "cus_name").unwrap()
        );
        assert_eq!(rebuilt, without_prefix);
    }
}

#[test]
fn test_malformed_location_fails_request() {
    let rows = vec![
        RawRowBuilder::new().build(),
        RawRowBuilder::new().unit_location("A*12*3").build(),
    ];
    let result = run(rows);
    match result {
        Err(ImportError::FieldFormatError { row, field, value, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "unit_location");
            assert_eq!(value, "A*12*3");
        }
        other => panic!("期望 FieldFormatError，实际 {:?}", other),
    }
}

#[test]
fn test_customer_without_hyphen_fails_request() {
    let rows = vec![RawRowBuilder::new().cusid_name("CID:1001 Acme").build()];
    assert!(matches!(run(rows), Err(ImportError::FieldFormatError { .. })));
}

#[test]
fn test_customer_with_two_hyphens_fails_request() {
    let rows = vec![RawRowBuilder::new().cusid_name("CID:1001-Acme-West").build()];
    assert!(matches!(run(rows), Err(ImportError::FieldFormatError { .. })));
}

#[test]
fn test_narrow_row_is_shape_mismatch() {
    let rows = vec![
        RawRowBuilder::new().build(),
        RawRowBuilder::new().truncate(28).build(),
    ];
    assert!(matches!(
        run(rows),
        Err(ImportError::ShapeMismatch {
            row: 2,
            required: 29,
            actual: 28
        })
    ));
}

#[test]
fn test_decompose_twice_is_identical() {
    let rows = vec![
        RawRowBuilder::new().product_id("P3").build(),
        RawRowBuilder::new().product_id("P1").unit_location("C*1*1*1").build(),
    ];
    let raw = RawTable::new(rows);
    let selected = select_columns(&raw, &ColumnSpec::inventory_export()).unwrap();

    let first = normalize(&selected).unwrap();
    let second = normalize(&selected).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_warehouse_equals_report_minus_unit_id() {
    let rows = vec![
        RawRowBuilder::new().product_id("P2").unit_id("U-9").build(),
        RawRowBuilder::new().product_id("P1").unit_id("U-8").build(),
    ];
    let normalized = run(rows).unwrap();

    let report = project_report(&normalized);
    let warehouse = project_warehouse(&normalized).unwrap();

    let mut expected_columns: Vec<String> = report.columns().to_vec();
    expected_columns.retain(|c| c != "unit_id");
    assert_eq!(warehouse.columns(), expected_columns.as_slice());
    assert_eq!(report.len(), warehouse.len());

    for column in warehouse.columns() {
        assert_eq!(
            warehouse.column_values(column).unwrap(),
            report.column_values(column).unwrap(),
            "列 {} 的值应一致",
            column
        );
    }

    assert_eq!(report.index(), &[0, 1]);
    assert_eq!(warehouse.index(), &[1, 0]);
}

#[test]
fn test_projections_are_independent_copies() {
    let normalized = run(vec![RawRowBuilder::new().build()]).unwrap();
    let snapshot = normalized.clone();

    let report = project_report(&normalized);
    let warehouse = project_warehouse(&normalized).unwrap();
    drop(report);
    drop(warehouse);

    // 投影顺序无关，输入快照不变
    let warehouse_first = project_warehouse(&normalized).unwrap();
    let report_second = project_report(&normalized);
    assert_eq!(normalized, snapshot);
    assert_eq!(report_second.len(), warehouse_first.len());
}

#[test]
fn test_process_file_from_temp_csv() {
    let rows = vec![
        RawRowBuilder::new().cusid_name("CID:7-\"Quoted, Inc\"").build(),
    ];
    let file = create_test_csv(&rows).unwrap();

    let outcome = InventoryProcessor::with_defaults()
        .process_file(file.path())
        .unwrap();
    assert_eq!(outcome.normalized.value(0, "cus_name"), Some("\"Quoted, Inc\""));
}
