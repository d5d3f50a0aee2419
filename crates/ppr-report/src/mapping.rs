//! Static field mappings between the audit export schema and the two
//! regional report schemas.
//!
//! Each mapping is an ordered list of `(report column, export column)`
//! pairs. `None` on the right means the report column has no source and is
//! emitted blank. Order is significant: the report's columns appear exactly
//! in list order. Several report columns deliberately draw from the same
//! export field, and `Unnamed: N` entries are positional placeholders whose
//! header labels are blanked on output; both are part of the report contract
//! and must not be "fixed".

use crate::classify::Country;

/// An ordered projection from export columns to report columns, plus the
/// report columns (as spreadsheet letter coordinates) in which the literal
/// `Invalid date` is blanked.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub country: Country,
    pub columns: &'static [(&'static str, Option<&'static str>)],
    pub invalid_date_columns: &'static [&'static str],
}

impl Country {
    /// The field mapping for this country's report
    pub fn field_mapping(&self) -> &'static FieldMapping {
        match self {
            Country::Gb => &GB_VISITS,
            Country::Ie => &IE_VISITS,
        }
    }
}

/// Convert a spreadsheet-style column coordinate (`A`..`Z`, `AA`..) to a
/// 0-based index. Returns `None` for anything but uppercase ASCII letters.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut idx: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        idx = idx * 26 + (c as usize - 'A' as usize + 1);
    }
    Some(idx - 1)
}

/// GB visit report mapping
pub static GB_VISITS: FieldMapping = FieldMapping {
    country: Country::Gb,
    columns: GB_COLUMNS,
    invalid_date_columns: &["AA", "BC"],
};

/// IE visit report mapping
pub static IE_VISITS: FieldMapping = FieldMapping {
    country: Country::Ie,
    columns: IE_COLUMNS,
    invalid_date_columns: &["AB", "BH"],
};

static GB_COLUMNS: &[(&str, Option<&str>)] = &[
    ("Order Number", Some("order_internal_id")),
    ("Client Name", Some("client_name")),
    ("Audit ID", Some("internal_id")),
    ("Site ID", Some("site_internal_id")),
    ("Order Deadline", Some("end_date")),
    ("Responsibility", Some("responsibility")),
    ("Premises Name", Some("site_name")),
    ("Address1", Some("site_address_1")),
    ("Address2", Some("site_address_2")),
    ("Address3", Some("site_address_3")),
    ("Post Code", Some("site_post_code")),
    ("Submitted Date", Some("submitted_date")),
    ("Approved Date", Some("approval_date")),
    ("Item To Order", Some("item_to_order")),
    ("Actual Visit Date", Some("date_of_visit")),
    ("Actual Visit Time", Some("time_of_visit")),
    ("AMPM", None),
    ("Pass-Fail", Some("primary_result")),
    ("Pass-Fail2", Some("secondary_result")),
    (
        "Abort Reason",
        Some("Please detail why you were unable to conduct this audit:"),
    ),
    ("Extra Site 1", Some("site_code")),
    ("Extra Site 2", None),
    ("Extra Site 3", None),
    (
        "Extra Site 4",
        Some("Were you challenged for ID on entry, at the machine, after machine play, or at the counter?"),
    ),
    ("Till ID?", None),
    ("VISITORSEX", None),
    (
        "ON ENTRY / BROWSING",
        Some("What was the time when you entered the shop?"),
    ),
    (
        "As you entered the shop was eye contact made by a member of staff?",
        Some("As you entered the shop was eye contact made by a member of staff?"),
    ),
    (
        "Were you acknowledged by any staff members?",
        Some("Were you acknowledged by any staff members?"),
    ),
    (
        "Were you challenged for ID on entry, at the machine or after machine play? (Please indicate below at which point of your visit you were challenged):",
        Some("Were you challenged for ID on entry, at the machine, after machine play, or at the counter?"),
    ),
    (
        "Were you asked for ID before or after you put a coin into the machine?",
        Some("Were you asked for ID before or after you put a coin into the machine?"),
    ),
    (
        "Please accurately describe the staff member who asked you for ID at one of these points:",
        Some("Please accurately describe the staff member who asked you for ID at one of these points:"),
    ),
    (
        "Was the staff member wearing a name badge?",
        Some("Was the staff member wearing a name badge?"),
    ),
    (
        "Was the member of staff wearing a (black) Paddy Power uniform?",
        Some("What was the name of the staff member?"),
    ),
    (
        "Please describe the manner in which you were challenged and add any other comments you feel are relevant:",
        Some("Please describe the manner in which you were challenged and add any other comments you feel are relevant:"),
    ),
    ("MACHINE AREA", None),
    (
        "Did all the gaming machines appear to be working?",
        Some("Did all the gaming machines appear to be working?"),
    ),
    (
        "Were all the machines visible from the counter?",
        Some("Were all the machines visible from the counter?"),
    ),
    (
        "Please describe what the staff member was doing as you approached the counter:",
        Some("Please describe what the staff member was doing as you approached the counter:"),
    ),
    (
        "Did the staff member who served you make eye contact with you during the transaction?",
        Some("Did the staff member who served you make eye contact with you during the transaction?"),
    ),
    (
        "When was eye contact first made?",
        Some("When was eye contact first made?"),
    ),
    ("Were \"Think 21\" signs visible in the machine area?", None),
    ("PLACING THE BET", None),
    (
        "Please describe what the server was doing as you approached the counter (e.g. serving a customer, talking to colleagues):",
        None,
    ),
    (
        "At the till, did the person who served you ask your age?",
        None,
    ),
    (
        "Did the staff member who served you at the till ask for ID?",
        None,
    ),
    (
        "Please enter the 17 digit number from your betting slip:",
        Some("Please enter the 17 digit number from your betting slip:"),
    ),
    ("Unnamed: 47", None),
    (
        "How many staff were visible in the shop at the time of your visit?",
        Some("How many staff were visible in the shop at the time of your visit?"),
    ),
    (
        "When were the staff first aware of you in the shop?",
        Some("When were the staff first aware of you in the shop?"),
    ),
    (
        "How many customers were in the shop at the time of your audit?",
        Some("How many customers were in the shop at the time of your audit?"),
    ),
    (
        "Did you see any 'Think 21' posters in the shop?",
        Some("Did you see any 'Think 25' posters in the shop?"),
    ),
    (
        "Did you see any 'Think 21' posters behind the counter?",
        Some("Did you see any 'Think 25' posters behind the counter?"),
    ),
    (
        "Please give a detailed report of your audit, providing a full description of your experience from entering to leaving the shop:",
        Some("Please give a detailed report of your audit, providing a full description of your experience from entering to leaving the shop:"),
    ),
    (
        "What time did you leave the shop?",
        Some("What time did you leave the shop?"),
    ),
    (
        "Were you wearing a face mask/covering during the audit?",
        None,
    ),
    (
        "Please confirm in the space below whether or not you were asked for ID:",
        None,
    ),
    ("Unnamed: 57", None),
    (
        "Unnamed: 58",
        Some("Please confirm below whether or not you were asked for ID:"),
    ),
    ("Unnamed: 59", None),
    ("Unnamed: 60", None),
    ("Unnamed: 61", None),
    (
        "Unnamed: 62",
        Some("Please confirm below whether or not you were asked for ID:"),
    ),
];

static IE_COLUMNS: &[(&str, Option<&str>)] = &[
    ("Order Number", Some("order_internal_id")),
    ("Client Name", Some("client_name")),
    ("Audit ID", Some("internal_id")),
    ("Site ID", Some("site_internal_id")),
    ("Order End Date", Some("end_date")),
    ("Responsibility", Some("responsibility")),
    ("Site Name", Some("site_name")),
    ("Address 1", Some("site_address_1")),
    ("Address 2", Some("site_address_2")),
    ("Address 3", Some("site_address_3")),
    ("Post Code", Some("site_post_code")),
    ("Submitted Date", Some("submitted_date")),
    ("Approved Date", Some("approval_date")),
    ("Item To Order", Some("item_to_order")),
    ("Date of Visit", Some("date_of_visit")),
    ("Actual Visit Time", Some("time_of_visit")),
    ("AMPM", None),
    ("Pass-Fail", Some("primary_result")),
    ("Pass-Fail2", Some("secondary_result")),
    (
        "Abort Reason",
        Some("Please detail why you were unable to conduct this audit:"),
    ),
    ("Extra Site 1", Some("site_code")),
    ("Unnamed: 21", None),
    ("Unnamed: 22", None),
    (
        "Were you challenged for ID on entry, at the machine, after machine play, or at the counter?",
        Some("Were you challenged for ID on entry, at the machine, after machine play, or at the counter?"),
    ),
    ("Unnamed: 24", None),
    ("Unnamed: 25", None),
    ("Unnamed: 26", None),
    (
        "What was the time when you entered the shop?",
        Some("What was the time when you entered the shop?"),
    ),
    (
        "As you entered the shop was eye contact made by a member of staff?",
        Some("As you entered the shop was eye contact made by a member of staff?"),
    ),
    (
        "Were you acknowledged by any staff members?",
        Some("Were you acknowledged by any staff members?"),
    ),
    (
        "Please describe any acknowledgement by staff members:",
        Some("Please describe any acknowledgement by staff members:"),
    ),
    (
        "Please explain what may have prevented staff from greeting you:",
        Some("Please explain what may have prevented staff from greeting you:"),
    ),
    (
        "If so, what was their name?",
        Some("Were you challenged for ID on entry, at the machine, after machine play, or at the counter?"),
    ),
    (
        "Was the member of staff wearing a (black) Paddy Power uniform?",
        Some("Were you asked for ID before or after you put a coin into the machine?"),
    ),
    (
        "Please describe the manner in which you were challenged and add any other comments you feel are relevant:",
        Some("Please describe the manner in which you were challenged and add any other comments you feel are relevant:"),
    ),
    (
        "Did the staff member appear to record any of the details from your ID?",
        Some("Did the staff member appear to record any of the details from your ID?"),
    ),
    (
        "Please accurately describe the staff member who asked you for ID at one of these points:",
        Some("Please accurately describe the staff member who asked you for ID at one of these points:"),
    ),
    (
        "If not, please state why:",
        Some("Was the staff member who served you wearing a name badge?"),
    ),
    (
        "Did all the gaming machines appear to be working?",
        Some("As required, did you browse for 2 minutes, including time at the self-service machine?"),
    ),
    (
        "Were all the machines visible from the counter?",
        Some("Please explain why you did not browse for 2 minutes:"),
    ),
    (
        "Please describe what the staff member was doing as you approached the counter:",
        Some("Please describe what the staff member was doing as you approached the counter:"),
    ),
    (
        "Did the staff member who served you make eye contact with you?",
        Some("Did the staff member who served you make eye contact with you?"),
    ),
    (
        "When was eye contact first made?",
        Some("When was eye contact first made?"),
    ),
    (
        "Please accurately describe the staff member who served you:",
        Some("Please accurately describe the staff member who served you:"),
    ),
    (
        "Did the staff member who served you smile?",
        Some("Did the staff member who served you smile?"),
    ),
    (
        "Did the staff member who served you greet you?",
        Some("Did the staff member who served you greet you?"),
    ),
    (
        "Was the staff member who served you wearing a name badge?",
        Some("Was the staff member who served you wearing a name badge?"),
    ),
    (
        "What was the name of the staff member who served you?",
        Some("What was the name of the staff member who served you?"),
    ),
    (
        "Please enter the 17 digit number from the bottom of your betting slip:",
        Some("Please enter the 17 digit number from the bottom of your betting slip:"),
    ),
    (
        "How many staff were on duty in the shop at the time of your audit?",
        Some("How many staff were on duty in the shop at the time of your audit?"),
    ),
    (
        "Was the staff member wearing a shirt and tie or a shirt and cravat, as shown in the briefing document?",
        Some("Was the staff member wearing a shirt and tie or a shirt and cravat, as shown in the briefing document?"),
    ),
    (
        "Describe what the staff member was wearing:",
        Some("Describe what the staff member was wearing:"),
    ),
    (
        "When were the staff first aware of you in the shop?",
        Some("When were the staff first aware of you in the shop?"),
    ),
    (
        "How many customers were in the shop at the time of your audit?",
        Some("How many customers were in the shop at the time of your audit?"),
    ),
    (
        "Did you see any 'Think 21' signage on the front door of the shop?",
        Some("Did you see any 'Think 21' signage on the front door of the shop?"),
    ),
    (
        "Did you see any 'Think 21' posters in the shop?",
        Some("Did you see any 'Think 21' posters in the shop?"),
    ),
    (
        "Did you see any 'Think 21' behind the counter?",
        Some("Did you see any 'Think 21' behind the counter?"),
    ),
    (
        "Please give a detailed report of your audit, providing a full description of your experience from entering to leaving the shop:",
        Some("Please give a detailed report of your audit, providing a full description of your experience from entering to leaving the shop:"),
    ),
    (
        "Unnamed: 58",
        Some("Please rate your overall customer service experience between 1-5 (where 1 is poor and 5 is excellent):"),
    ),
    (
        "Please rate your overall customer service experience between 1-5 (where 1 is poor and 5 is excellent):",
        Some("What time did you leave the shop?"),
    ),
    (
        "Were you wearing a face mask/covering during the audit?",
        None,
    ),
    (
        "Were you asked to remove your mask/covering during the audit?",
        None,
    ),
    (
        "Please use this space to explain anything unusual about your visit or to clarify any detail of your report:",
        Some("Please use this space to explain anything unusual about your visit or to clarify any detail of your report:"),
    ),
    (
        "As required, did you browse for 2 minutes, including time at the self-service machine?",
        Some("As required, did you browse for 2 minutes, including time at the self-service machine?"),
    ),
    (
        "Please explain why you did not browse for 2 minutes:",
        Some("Please explain why you did not browse for 2 minutes:"),
    ),
    (
        "Please confirm below whether or not you were asked for ID:",
        Some("Please confirm below whether or not you were asked for ID:"),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_single_letters() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("B"), Some(1));
        assert_eq!(column_index("Z"), Some(25));
    }

    #[test]
    fn test_column_index_double_letters() {
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("AB"), Some(27));
        assert_eq!(column_index("BC"), Some(54));
        assert_eq!(column_index("BH"), Some(59));
    }

    #[test]
    fn test_column_index_rejects_invalid_input() {
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("a"), None);
        assert_eq!(column_index("A1"), None);
        assert_eq!(column_index("A A"), None);
    }

    #[test]
    fn test_mapping_shapes() {
        assert_eq!(GB_VISITS.columns.len(), 63);
        assert_eq!(IE_VISITS.columns.len(), 66);
    }

    #[test]
    fn test_invalid_date_positions_fall_inside_mappings() {
        for mapping in [&GB_VISITS, &IE_VISITS] {
            for letters in mapping.invalid_date_columns {
                let idx = column_index(letters).unwrap();
                assert!(idx < mapping.columns.len(), "{} out of range", letters);
            }
        }
    }

    #[test]
    fn test_post_code_source_drives_both_reports() {
        for mapping in [&GB_VISITS, &IE_VISITS] {
            let (_, source) = mapping
                .columns
                .iter()
                .find(|(header, _)| *header == "Post Code")
                .unwrap();
            assert_eq!(*source, Some("site_post_code"));
        }
    }

    #[test]
    fn test_unnamed_placeholders_present() {
        assert!(GB_VISITS
            .columns
            .iter()
            .any(|(header, _)| header.starts_with("Unnamed:")));
        assert!(IE_VISITS
            .columns
            .iter()
            .any(|(header, _)| header.starts_with("Unnamed:")));
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(Country::Gb.field_mapping().columns.len(), 63);
        assert_eq!(Country::Ie.field_mapping().columns.len(), 66);
    }
}
