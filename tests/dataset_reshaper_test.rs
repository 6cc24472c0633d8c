use std::fs;
use std::path::Path;

use arinote::application::services::{
    CSV_FILENAME, DatasetReshaper, ReshapeError, SIMPLIFIED_JSON_FILENAME,
};
use serde_json::{Value, json};
use tempfile::TempDir;

const CSV_HEADER: &str = "brand_name,generic_name,manufacturer_name,product_type,active_ingredients,route,substance_name,application_number";

fn create_project(raw: &str) -> (TempDir, DatasetReshaper) {
    let dir = TempDir::new().unwrap();
    let reshaper = DatasetReshaper::for_project_root(dir.path()).unwrap();
    let input = reshaper.default_input_path();
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(&input, raw).unwrap();
    (dir, reshaper)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn given_single_brand_record_when_reshaping_then_json_and_csv_hold_defaults() {
    let (_dir, reshaper) = create_project(r#"{"results":[{"brand_name":"Aspirin"}]}"#);

    let output = reshaper
        .reshape(&reshaper.default_input_path(), &reshaper.default_output_dir())
        .unwrap();

    assert_eq!(output.record_count, 1);
    assert_eq!(
        output.json_path,
        reshaper.default_output_dir().join(SIMPLIFIED_JSON_FILENAME)
    );
    assert_eq!(
        read_json(&output.json_path),
        json!([{
            "brand_name": "Aspirin",
            "generic_name": "",
            "manufacturer_name": "",
            "product_type": "",
            "active_ingredients": [],
            "route": "",
            "substance_name": "",
            "application_number": ""
        }])
    );

    let csv = fs::read_to_string(&output.csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec![CSV_HEADER, "Aspirin,,,,[],,,"]);
    assert!(output.csv_path.ends_with(CSV_FILENAME));
}

#[test]
fn given_output_when_reshaping_then_json_is_indented() {
    let (_dir, reshaper) = create_project(r#"{"results":[{"brand_name":"Aspirin"}]}"#);

    let output = reshaper
        .reshape(&reshaper.default_input_path(), &reshaper.default_output_dir())
        .unwrap();

    let text = fs::read_to_string(&output.json_path).unwrap();
    assert!(text.starts_with("[\n  {\n    \"brand_name\": \"Aspirin\""));
}

#[test]
fn given_many_records_when_reshaping_then_order_is_preserved_in_both_outputs() {
    let (_dir, reshaper) = create_project(
        r#"{"results":[
            {"brand_name":"Zyrtec","route":"ORAL"},
            {"brand_name":"Advil","active_ingredients":[{"name":"IBUPROFEN","strength":"200 mg"}]},
            {"generic_name":"metformin, extended release"}
        ]}"#,
    );

    let output = reshaper
        .reshape(&reshaper.default_input_path(), &reshaper.default_output_dir())
        .unwrap();

    assert_eq!(output.record_count, 3);
    let records = read_json(&output.json_path);
    assert_eq!(records[0]["brand_name"], json!("Zyrtec"));
    assert_eq!(records[1]["active_ingredients"][0]["strength"], json!("200 mg"));
    assert_eq!(records[2]["generic_name"], json!("metformin, extended release"));

    let mut reader = csv::Reader::from_path(&output.csv_path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][5], "ORAL");
    assert_eq!(&rows[1][4], r#"[{"name":"IBUPROFEN","strength":"200 mg"}]"#);
    assert_eq!(&rows[2][1], "metformin, extended release");
}

#[test]
fn given_missing_output_dir_when_reshaping_then_it_is_created() {
    let (dir, reshaper) = create_project(r#"{"results":[]}"#);
    let output_dir = dir.path().join("exports/nested");

    let output = reshaper
        .reshape(&reshaper.default_input_path(), &output_dir)
        .unwrap();

    assert_eq!(output.record_count, 0);
    assert!(output.json_path.exists());
    assert_eq!(read_json(&output.json_path), json!([]));
}

#[test]
fn given_malformed_json_when_reshaping_then_returns_malformed_json_error() {
    let (_dir, reshaper) = create_project("{\"results\": [");

    let result = reshaper.reshape(&reshaper.default_input_path(), &reshaper.default_output_dir());

    let error = result.unwrap_err();
    assert!(matches!(error, ReshapeError::MalformedJson { .. }));
    assert!(!error.is_path_validation());
}

#[test]
fn given_missing_input_when_reshaping_then_returns_io_error() {
    let dir = TempDir::new().unwrap();
    let reshaper = DatasetReshaper::for_project_root(dir.path()).unwrap();

    let result = reshaper.reshape(&reshaper.default_input_path(), &reshaper.default_output_dir());

    assert!(matches!(result, Err(ReshapeError::Io { .. })));
}

#[test]
fn given_output_dir_outside_root_when_reshaping_then_validation_error_and_nothing_written() {
    let (dir, reshaper) = create_project(r#"{"results":[{"brand_name":"Aspirin"}]}"#);
    let escape = dir.path().join("../escaped-output");

    let error = reshaper
        .reshape(&reshaper.default_input_path(), &escape)
        .unwrap_err();

    assert!(error.is_path_validation());
    assert!(!escape.exists());
}

#[test]
fn given_input_in_sibling_dir_when_reshaping_then_validation_error() {
    let parent = TempDir::new().unwrap();
    let root = parent.path().join("project");
    let sibling = parent.path().join("projectx");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&sibling).unwrap();
    fs::write(sibling.join("raw.json"), r#"{"results":[]}"#).unwrap();
    let reshaper = DatasetReshaper::for_project_root(&root).unwrap();

    let error = reshaper
        .reshape(&sibling.join("raw.json"), &root.join("out"))
        .unwrap_err();

    assert!(error.is_path_validation());
}

#[cfg(unix)]
#[test]
fn given_output_file_symlinked_outside_root_when_reshaping_then_validation_error_and_nothing_written() {
    let parent = TempDir::new().unwrap();
    let root = parent.path().join("project");
    let outside = parent.path().join("outside");
    fs::create_dir_all(root.join("out")).unwrap();
    fs::create_dir_all(&outside).unwrap();
    fs::write(root.join("in.json"), r#"{"results":[{"brand_name":"Aspirin"}]}"#).unwrap();
    std::os::unix::fs::symlink(outside.join("stolen.csv"), root.join("out").join(CSV_FILENAME))
        .unwrap();
    let reshaper = DatasetReshaper::for_project_root(&root).unwrap();

    let error = reshaper
        .reshape(&root.join("in.json"), &root.join("out"))
        .unwrap_err();

    assert!(error.is_path_validation());
    assert!(!outside.join("stolen.csv").exists());
    assert!(!root.join("out").join(SIMPLIFIED_JSON_FILENAME).exists());
}

#[test]
fn given_array_and_null_values_when_reshaping_then_json_keeps_them_and_csv_renders_them() {
    let (_dir, reshaper) = create_project(
        r#"{"results":[{"brand_name":"Aspirin","route":["ORAL"],"generic_name":null}]}"#,
    );

    let output = reshaper
        .reshape(&reshaper.default_input_path(), &reshaper.default_output_dir())
        .unwrap();

    let records = read_json(&output.json_path);
    assert_eq!(records[0]["route"], json!(["ORAL"]));
    assert_eq!(records[0]["generic_name"], Value::Null);

    let mut reader = csv::Reader::from_path(&output.csv_path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], "");
    assert_eq!(&row[5], r#"["ORAL"]"#);
}
