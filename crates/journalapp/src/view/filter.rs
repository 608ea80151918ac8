use crate::model::JournalEntry;

/// Whether `entry` belongs in the view for `text`.
///
/// Dates match on a case-sensitive substring, account and description on a
/// case-insensitive one. A row matching any of the three is kept; empty text keeps
/// every row.
pub fn matches(entry: &JournalEntry, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    entry.date.contains(text)
        || entry.account.to_lowercase().contains(&needle)
        || entry.description.to_lowercase().contains(&needle)
}

/// Entries matching `text`, in store order.
pub fn filter_entries<'a>(entries: &'a [JournalEntry], text: &str) -> Vec<&'a JournalEntry> {
    entries.iter().filter(|entry| matches(entry, text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::sample_entries;

    fn dates(rows: &[&JournalEntry]) -> Vec<String> {
        rows.iter().map(|e| e.date.clone()).collect()
    }

    #[test]
    fn empty_text_keeps_everything() {
        let entries = sample_entries();
        assert_eq!(filter_entries(&entries, "").len(), entries.len());
    }

    #[test]
    fn account_match_is_case_insensitive() {
        let entries = sample_entries();
        let rows = filter_entries(&entries, "cASH");
        assert_eq!(
            dates(&rows),
            vec!["2025-01-01", "2025-01-03", "2025-01-06", "2025-01-08"]
        );
        assert!(rows.iter().all(|e| e.account == "Cash"));
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let entries = sample_entries();
        let rows = filter_entries(&entries, "service");
        assert_eq!(dates(&rows), vec!["2025-01-04", "2025-01-10"]);
    }

    #[test]
    fn date_match_is_substring() {
        let entries = sample_entries();
        let rows = filter_entries(&entries, "01-0");
        assert_eq!(rows.len(), 9);
        assert!(!rows.iter().any(|e| e.date == "2025-01-10"));
    }

    #[test]
    fn date_match_is_case_sensitive() {
        let mut entries = sample_entries();
        entries[0].date = "Q1-opening".into();
        entries[0].account = "Cash".into();
        entries[0].description = "Initial balance".into();

        assert_eq!(filter_entries(&entries, "Q1").len(), 1);
        assert!(filter_entries(&entries, "q1").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_rows() {
        let entries = sample_entries();
        for text in ["a", "Bank", "xyz", "2025", "ELEC", "-07"] {
            let kept = filter_entries(&entries, text);
            let expected: Vec<&JournalEntry> =
                entries.iter().filter(|e| matches(e, text)).collect();
            assert_eq!(kept, expected, "filter {:?}", text);
            for entry in &entries {
                let any = entry.date.contains(text)
                    || entry.account.to_lowercase().contains(&text.to_lowercase())
                    || entry.description.to_lowercase().contains(&text.to_lowercase());
                assert_eq!(kept.contains(&entry), any, "{:?} on {}", text, entry.date);
            }
        }
    }
}
