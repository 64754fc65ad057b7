//! CSV export of registrations.
//!
//! Every value is double-quoted and embedded quotes are doubled, so commas,
//! quotes, and line breaks inside free-text fields survive a round trip
//! through any RFC 4180 reader.

use crate::domain::registration::Registration;

/// Column order of the export, named after the record's own fields.
pub const CSV_COLUMNS: [&str; 15] = [
    "id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "current_role_title",
    "experience_level",
    "program_type",
    "areas_of_interest",
    "schedule_preference",
    "goals_expectations",
    "terms_accepted",
    "status",
    "created_at",
    "updated_at",
];

/// Renders the header plus one line per registration, joined by `\n`
/// without a trailing newline.
pub fn export_csv<'a, I>(registrations: I) -> String
where
    I: IntoIterator<Item = &'a Registration>,
{
    let mut lines = vec![CSV_COLUMNS.join(",")];
    lines.extend(registrations.into_iter().map(csv_line));
    lines.join("\n")
}

fn csv_line(r: &Registration) -> String {
    let values: [String; 15] = [
        r.id().to_string(),
        r.first_name().to_string(),
        r.last_name().to_string(),
        r.email().to_string(),
        r.phone().to_string(),
        r.current_role_title().unwrap_or_default().to_string(),
        r.experience_level().to_string(),
        r.program_type().to_string(),
        r.areas_of_interest().unwrap_or_default().to_string(),
        r.schedule_preference()
            .map(|s| s.to_string())
            .unwrap_or_default(),
        r.goals_expectations().unwrap_or_default().to_string(),
        r.terms_accepted().to_string(),
        r.status().to_string(),
        r.created_at().to_rfc3339(),
        r.updated_at().to_rfc3339(),
    ];
    values
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
