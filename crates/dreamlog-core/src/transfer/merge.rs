//! Merge of imported dreams into an already loaded collection.

use std::collections::HashMap;

use crate::storage::types::Dream;

/// Merge `imported` into `existing`, keyed by id.
///
/// Imported records win on id collision and take the slot of the record they
/// replace. Ids not seen before are appended in import order. When
/// `imported` repeats an id, the last occurrence wins.
pub fn merge_imported(existing: Vec<Dream>, imported: &[Dream]) -> Vec<Dream> {
    let mut merged: Vec<Dream> = Vec::with_capacity(existing.len() + imported.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for dream in existing.into_iter().chain(imported.iter().cloned()) {
        match slots.get(&dream.id) {
            Some(&slot) => merged[slot] = dream,
            None => {
                slots.insert(dream.id.clone(), merged.len());
                merged.push(dream);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(id: &str, title: &str) -> Dream {
        Dream {
            id: id.to_string(),
            date: "2024-01-01".to_string(),
            title: title.to_string(),
            content: String::new(),
        }
    }

    fn ids_and_titles(dreams: &[Dream]) -> Vec<(&str, &str)> {
        dreams
            .iter()
            .map(|d| (d.id.as_str(), d.title.as_str()))
            .collect()
    }

    #[test]
    fn test_imported_wins_on_collision() {
        let merged = merge_imported(vec![dream("1", "A")], &[dream("1", "B")]);
        assert_eq!(ids_and_titles(&merged), vec![("1", "B")]);
    }

    #[test]
    fn test_existing_absent_from_import_is_kept() {
        let merged = merge_imported(
            vec![dream("1", "A"), dream("2", "keep")],
            &[dream("1", "B"), dream("3", "new")],
        );
        assert_eq!(
            ids_and_titles(&merged),
            vec![("1", "B"), ("2", "keep"), ("3", "new")]
        );
    }

    #[test]
    fn test_duplicate_ids_in_import_last_wins() {
        let merged = merge_imported(Vec::new(), &[dream("1", "first"), dream("1", "second")]);
        assert_eq!(ids_and_titles(&merged), vec![("1", "second")]);
    }

    #[test]
    fn test_empty_import_returns_existing() {
        let existing = vec![dream("1", "A"), dream("2", "B")];
        assert_eq!(merge_imported(existing.clone(), &[]), existing);
    }
}
