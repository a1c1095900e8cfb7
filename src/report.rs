//! Tag report rendering: display table and CSV export.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::TagError;
use crate::tags::TagMap;

/// Shown instead of the table when the tag map is empty.
pub const NO_TAGS_MESSAGE: &str = "(No tags found.)";

/// Sorted (tag, count) pairs, ascending by tag.
fn sorted_entries(tags: &TagMap) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = tags.iter().map(|(t, &c)| (t.as_str(), c)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Render the tag map as a two-column table, one row per tag in ascending
/// order, tag left-aligned to 15 columns. Empty map renders the fixed
/// "no tags" message.
pub fn format_table(tags: &TagMap) -> String {
    if tags.is_empty() {
        return format!("{NO_TAGS_MESSAGE}\n");
    }
    let mut out = String::from("TAG\tFREQ\n----------------\n");
    for (tag, count) in sorted_entries(tags) {
        let _ = writeln!(out, "{tag:<15} {count}");
    }
    out
}

/// CSV records: `TAG,FREQ` header, then one `tag,count` row per entry in
/// ascending tag order. Tags are alphabetic-only, so no quoting is needed.
pub fn csv_lines(tags: &TagMap) -> Vec<String> {
    let mut lines = vec!["TAG,FREQ".to_string()];
    lines.extend(
        sorted_entries(tags)
            .into_iter()
            .map(|(tag, count)| format!("{tag},{count}")),
    );
    lines
}

/// Write the CSV records to a file, newline-terminated.
pub fn save_csv(tags: &TagMap, path: &Path) -> Result<(), TagError> {
    let mut out = csv_lines(tags).join("\n");
    out.push('\n');
    fs::write(path, out).map_err(|source| TagError::file_access(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagMap {
        TagMap::from([
            ("mat".to_string(), 1),
            ("cat".to_string(), 2),
            ("sat".to_string(), 1),
        ])
    }

    #[test]
    fn table_lists_tags_alphabetically() {
        let table = format_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "TAG\tFREQ");
        assert_eq!(lines[1], "----------------");
        assert_eq!(lines[2], format!("{:<15} {}", "cat", 2));
        assert_eq!(lines[3], format!("{:<15} {}", "mat", 1));
        assert_eq!(lines[4], format!("{:<15} {}", "sat", 1));
    }

    #[test]
    fn empty_map_renders_fixed_message() {
        assert_eq!(format_table(&TagMap::new()), "(No tags found.)\n");
    }

    #[test]
    fn csv_has_header_and_sorted_rows() {
        let lines = csv_lines(&sample());
        assert_eq!(lines, ["TAG,FREQ", "cat,2", "mat,1", "sat,1"]);
    }

    #[test]
    fn csv_round_trips_by_first_comma() {
        let tags = sample();
        let mut parsed = TagMap::new();
        for line in csv_lines(&tags).iter().skip(1) {
            let (tag, count) = line.split_once(',').unwrap();
            parsed.insert(tag.to_string(), count.parse().unwrap());
        }
        assert_eq!(parsed, tags);
    }

    #[test]
    fn saved_file_is_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.csv");
        save_csv(&sample(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "TAG,FREQ\ncat,2\nmat,1\nsat,1\n");
    }

    #[test]
    fn unwritable_path_is_a_file_access_error() {
        let err = save_csv(&sample(), Path::new("/nonexistent/dir/tags.csv")).unwrap_err();
        assert!(matches!(err, TagError::FileAccess { .. }));
    }
}
