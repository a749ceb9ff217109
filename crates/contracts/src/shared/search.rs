//! Case-insensitive substring search over resource records

use super::record::Record;

/// Keeps the records whose designated fields contain `term`, ignoring case.
///
/// Several fields are OR-ed. An empty term keeps everything; null or missing
/// fields never match.
pub fn filter_records<'a>(records: &'a [Record], term: &str, fields: &[&str]) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle, fields))
        .collect()
}

/// `needle` must already be lowercase
fn matches(record: &Record, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| {
        record
            .raw_text(field)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [
            json!({"name": "Urea", "price": 12.5}),
            json!({"name": "DAP", "price": 20}),
            json!({"name": null, "price": 7}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect()
    }

    #[test]
    fn test_filter_by_name() {
        let all = records();
        let found = filter_records(&all, "ur", &["name"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("name"), "Urea");
        assert_eq!(found[0].text("price"), "12.5");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let all = records();
        assert_eq!(filter_records(&all, "dAp", &["name"]).len(), 1);
        assert_eq!(filter_records(&all, "UREA", &["name"]).len(), 1);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let all = records();
        let found = filter_records(&all, "", &["name"]);
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(all.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_fields_are_ored() {
        let all = records();
        let found = filter_records(&all, "7", &["name", "price"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("name"), "NULL");
    }

    #[test]
    fn test_result_is_exact_partition() {
        let all = records();
        for term in ["a", "e", "x", "2", "Ur", " "] {
            let found = filter_records(&all, term, &["name"]);
            let needle = term.to_lowercase();
            for record in &all {
                let hit = record
                    .raw_text("name")
                    .is_some_and(|v| v.to_lowercase().contains(&needle));
                assert_eq!(found.contains(&record), hit, "term {term:?}");
            }
        }
    }
}
