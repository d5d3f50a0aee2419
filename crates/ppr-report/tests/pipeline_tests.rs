//! End-to-end pipeline tests: CSV text in, two serialized reports out

use ppr_report::pipeline::{
    self, GB_REPORT_FILENAME, IE_REPORT_FILENAME, POSTCODE_COLUMN,
};
use ppr_report::{Country, Table};

/// A small but realistic slice of the audit export schema
fn sample_export() -> String {
    let headers = [
        "order_internal_id",
        "client_name",
        POSTCODE_COLUMN,
        "What was the time when you entered the shop?",
        "What time did you leave the shop?",
        "Please confirm below whether or not you were asked for ID:",
    ];
    let rows = [
        ["1001", "Paddy Power", "SW1A 1AA", "Invalid date", "14:30", "Yes"],
        ["1002", "Paddy Power", "D02 AF30", "10:15", "Invalid date", "No"],
        ["1003", "Paddy Power", "BT1 1AA", "09:00", "09:45", "Yes"],
        ["1004", "Paddy Power", "", "11:20", "Invalid date", "No"],
        ["1005", "Paddy Power", "M1 1AE", "12:00", "Invalid date", "Yes"],
    ];

    let mut csv = headers.join(",") + "\n";
    for row in rows {
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

#[test]
fn splitting_and_recombining_preserves_row_count() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();
    assert_eq!(bundle.input_rows, 5);
    assert_eq!(bundle.gb.rows + bundle.ie.rows, bundle.input_rows);
    assert_eq!(bundle.gb.rows, 2); // SW1A 1AA, M1 1AE
    assert_eq!(bundle.ie.rows, 3); // Eircode, BT, blank
}

#[test]
fn reports_use_the_fixed_artifact_names() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();
    assert_eq!(bundle.gb.filename, GB_REPORT_FILENAME);
    assert_eq!(bundle.ie.filename, IE_REPORT_FILENAME);
    assert_eq!(bundle.report(Country::Gb).country, Country::Gb);
}

#[test]
fn reports_are_bom_prefixed_csv() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();
    for report in [&bundle.gb, &bundle.ie] {
        assert!(report.csv.starts_with(&[0xEF, 0xBB, 0xBF]));
        let parsed = Table::from_csv_bytes(&report.csv).unwrap();
        assert_eq!(parsed.row_count(), report.rows);
        assert_eq!(
            parsed.column_count(),
            report.country.field_mapping().columns.len()
        );
    }
}

#[test]
fn gb_report_carries_postcodes_and_blank_unmapped_columns() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();
    let gb = Table::from_csv_bytes(&bundle.gb.csv).unwrap();

    let post_code = gb.column_index("Post Code").unwrap();
    let postcodes: Vec<&str> = gb.rows().iter().map(|r| r[post_code].as_str()).collect();
    assert_eq!(postcodes, vec!["SW1A 1AA", "M1 1AE"]);

    // "Premises Name" maps to site_name, which the input does not carry
    let premises = gb.column_index("Premises Name").unwrap();
    assert!(gb.rows().iter().all(|r| r[premises].is_empty()));
}

#[test]
fn invalid_date_sentinel_is_blanked_in_designated_columns_end_to_end() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();

    // GB column AA draws from the entry-time question; row 1001 fed it the
    // sentinel, which must not survive serialization.
    let gb = Table::from_csv_bytes(&bundle.gb.csv).unwrap();
    let aa = ppr_report::mapping::column_index("AA").unwrap();
    assert_eq!(gb.rows()[0][aa], "");

    // GB column BC draws from the leave-time question; row 1005 fed it the
    // sentinel too.
    let bc = ppr_report::mapping::column_index("BC").unwrap();
    assert_eq!(gb.rows()[1][bc], "");

    // IE column BH draws from the leave-time question; rows 1002 and 1004
    // carried the sentinel there.
    let ie = Table::from_csv_bytes(&bundle.ie.csv).unwrap();
    let bh = ppr_report::mapping::column_index("BH").unwrap();
    assert!(ie.rows().iter().all(|r| r[bh] != "Invalid date"));
}

#[test]
fn placeholder_headers_are_blank_in_serialized_output() {
    let bundle = pipeline::generate_reports(sample_export().as_bytes()).unwrap();
    for report in [&bundle.gb, &bundle.ie] {
        let parsed = Table::from_csv_bytes(&report.csv).unwrap();
        assert!(
            parsed.headers().iter().all(|h| !h.starts_with("Unnamed:")),
            "{} still contains placeholder headers",
            report.filename
        );
    }
}

#[test]
fn convert_file_writes_both_reports_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("audits_basic_data_export.csv");
    std::fs::write(&input, sample_export()).unwrap();

    let out_dir = dir.path().join("reports");
    let bundle = pipeline::convert_file(&input, &out_dir).unwrap();

    for report in [&bundle.gb, &bundle.ie] {
        let written = std::fs::read(out_dir.join(report.filename)).unwrap();
        assert_eq!(written, report.csv);
    }
}

#[test]
fn export_without_postcode_column_fails_with_typed_error() {
    let err = pipeline::generate_reports(b"client_name\nPaddy Power\n").unwrap_err();
    assert!(err.to_string().contains(POSTCODE_COLUMN));
}

#[test]
fn bom_prefixed_input_is_accepted() {
    let mut input = vec![0xEF, 0xBB, 0xBF];
    input.extend_from_slice(sample_export().as_bytes());
    let bundle = pipeline::generate_reports(&input).unwrap();
    assert_eq!(bundle.input_rows, 5);
}
