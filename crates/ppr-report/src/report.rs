//! Report construction: projects an audit table through a field mapping and
//! applies the two output fixups

use crate::mapping::{column_index, FieldMapping};
use crate::table::Table;
use tracing::debug;

/// Literal emitted by the upstream export when a date failed to parse.
/// Blanked in the designated report columns only.
const INVALID_DATE_SENTINEL: &str = "Invalid date";

/// Prefix of positional placeholder headers whose labels are blanked in the
/// emitted header row. The columns themselves (and their data) remain.
const UNNAMED_HEADER_PREFIX: &str = "Unnamed:";

/// Build one regional report from the (already filtered) audit rows.
///
/// The output has exactly one column per mapping entry, in mapping order.
/// Entries with no source, and entries whose source column is absent from
/// the input, produce all-blank columns.
pub fn build_report(input: &Table, mapping: &FieldMapping) -> Table {
    // Resolve each mapping entry to a source column position once.
    let source_indexes: Vec<Option<usize>> = mapping
        .columns
        .iter()
        .map(|(_, source)| source.and_then(|name| input.column_index(name)))
        .collect();

    let headers: Vec<String> = mapping
        .columns
        .iter()
        .map(|(header, _)| header.to_string())
        .collect();

    let mut report = Table::new(headers);
    for row in input.rows() {
        let out_row: Vec<String> = source_indexes
            .iter()
            .map(|source| match source {
                Some(idx) => row[*idx].clone(),
                None => String::new(),
            })
            .collect();
        report.push_row(out_row);
    }

    blank_invalid_dates(&mut report, mapping);
    blank_placeholder_headers(&mut report);

    report
}

/// Replace the `Invalid date` sentinel with an empty string in the mapping's
/// designated columns. Positions outside the actual column count are skipped.
fn blank_invalid_dates(report: &mut Table, mapping: &FieldMapping) {
    for letters in mapping.invalid_date_columns {
        let Some(idx) = column_index(letters) else {
            continue;
        };
        if idx >= report.column_count() {
            debug!(column = %letters, "date fixup column outside report, skipping");
            continue;
        }
        for row in report.rows_mut() {
            if row[idx] == INVALID_DATE_SENTINEL {
                row[idx].clear();
            }
        }
    }
}

/// Blank the label of every placeholder header in the emitted header row
fn blank_placeholder_headers(report: &mut Table) {
    for header in report.headers_mut() {
        if header.starts_with(UNNAMED_HEADER_PREFIX) {
            header.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{FieldMapping, GB_VISITS, IE_VISITS};
    use crate::classify::Country;

    fn audit_table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::with_rows(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_report_shape_matches_mapping_regardless_of_input() {
        let input = audit_table(&["unrelated"], &[&["x"], &["y"]]);
        let report = build_report(&input, &GB_VISITS);
        assert_eq!(report.column_count(), GB_VISITS.columns.len());
        assert_eq!(report.row_count(), 2);

        let report = build_report(&input, &IE_VISITS);
        assert_eq!(report.column_count(), IE_VISITS.columns.len());
    }

    #[test]
    fn test_mapped_columns_are_populated_and_rest_are_blank() {
        let input = audit_table(&["site_post_code"], &[&["SW1A1AA"]]);
        let report = build_report(&input, &GB_VISITS);

        let post_code_idx = GB_VISITS
            .columns
            .iter()
            .position(|(header, _)| *header == "Post Code")
            .unwrap();
        let row = &report.rows()[0];
        for (idx, cell) in row.iter().enumerate() {
            if idx == post_code_idx {
                assert_eq!(cell, "SW1A1AA");
            } else {
                assert_eq!(cell, "", "column {} should be blank", idx);
            }
        }
    }

    #[test]
    fn test_missing_source_columns_degrade_to_blank() {
        let input = audit_table(&["client_name"], &[&["Paddy Power"]]);
        let report = build_report(&input, &GB_VISITS);
        let row = &report.rows()[0];
        assert_eq!(row[1], "Paddy Power");
        // order_internal_id is absent from the input: blank, not an error
        assert_eq!(row[0], "");
    }

    #[test]
    fn test_duplicate_source_feeds_every_consumer() {
        let source = "Were you challenged for ID on entry, at the machine, after machine play, or at the counter?";
        let input = audit_table(&[source], &[&["On entry"]]);
        let report = build_report(&input, &GB_VISITS);

        let consumers: Vec<usize> = GB_VISITS
            .columns
            .iter()
            .enumerate()
            .filter(|(_, (_, src))| *src == Some(source))
            .map(|(idx, _)| idx)
            .collect();
        assert!(consumers.len() > 1);
        for idx in consumers {
            assert_eq!(report.rows()[0][idx], "On entry");
        }
    }

    #[test]
    fn test_invalid_date_blanked_only_in_designated_columns() {
        // GB position AA (index 26) draws from the shop entry time question;
        // feed the sentinel through both that column and an undesignated one.
        let entry_time = "What was the time when you entered the shop?";
        let input = audit_table(
            &["client_name", entry_time],
            &[&["Invalid date", "Invalid date"]],
        );
        let report = build_report(&input, &GB_VISITS);

        let gb_aa = crate::mapping::column_index("AA").unwrap();
        assert_eq!(report.rows()[0][gb_aa], "");
        // Client Name is not a designated column: sentinel passes through
        assert_eq!(report.rows()[0][1], "Invalid date");
    }

    #[test]
    fn test_invalid_date_blanked_in_ie_positions() {
        let entry_time = "What was the time when you entered the shop?";
        let leave_time = "What time did you leave the shop?";
        let input = audit_table(
            &[entry_time, leave_time],
            &[&["Invalid date", "Invalid date"]],
        );
        let report = build_report(&input, &IE_VISITS);

        let ie_ab = crate::mapping::column_index("AB").unwrap();
        let ie_bh = crate::mapping::column_index("BH").unwrap();
        assert_eq!(report.rows()[0][ie_ab], "");
        assert_eq!(report.rows()[0][ie_bh], "");
    }

    #[test]
    fn test_partial_sentinel_matches_are_left_alone() {
        let entry_time = "What was the time when you entered the shop?";
        let input = audit_table(&[entry_time], &[&["Invalid date for sure"]]);
        let report = build_report(&input, &GB_VISITS);
        let gb_aa = crate::mapping::column_index("AA").unwrap();
        assert_eq!(report.rows()[0][gb_aa], "Invalid date for sure");
    }

    #[test]
    fn test_fixup_position_beyond_width_is_skipped() {
        static NARROW: FieldMapping = FieldMapping {
            country: Country::Gb,
            columns: &[("Only", Some("only"))],
            invalid_date_columns: &["BC"],
        };
        let input = audit_table(&["only"], &[&["Invalid date"]]);
        let report = build_report(&input, &NARROW);
        // BC is far outside a one-column report: silently skipped
        assert_eq!(report.rows()[0][0], "Invalid date");
    }

    #[test]
    fn test_placeholder_headers_are_blanked_but_columns_remain() {
        let source = "Please confirm below whether or not you were asked for ID:";
        let input = audit_table(&[source], &[&["Yes"]]);
        let report = build_report(&input, &GB_VISITS);

        assert_eq!(report.column_count(), GB_VISITS.columns.len());
        assert!(report.headers().iter().all(|h| !h.starts_with("Unnamed:")));

        // GB "Unnamed: 58" draws from the confirmation question: the data
        // survives even though its label is blanked.
        let idx = GB_VISITS
            .columns
            .iter()
            .position(|(header, _)| *header == "Unnamed: 58")
            .unwrap();
        assert_eq!(report.headers()[idx], "");
        assert_eq!(report.rows()[0][idx], "Yes");
    }
}
