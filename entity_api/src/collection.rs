//! Insert and upsert rules shared by every store backend. A collection is held as a
//! map from `_id` to document so iteration is always in `_id` order.

use std::collections::{BTreeMap, HashSet};

use log::*;

use crate::error::{EntityApiErrorKind, Error};
use crate::store::{document_id, Document, UpsertOutcome};

pub(crate) type Collection = BTreeMap<String, Document>;

pub(crate) fn insert_all(
    collection: &mut Collection,
    documents: Vec<Document>,
) -> Result<u64, Error> {
    let keyed = keyed(documents)?;

    let mut seen = HashSet::new();
    for (id, _) in &keyed {
        if collection.contains_key(id) || !seen.insert(id.as_str()) {
            warn!("Rejecting insert: duplicate _id {id}");
            return Err(Error::new(EntityApiErrorKind::DuplicateKey));
        }
    }

    let inserted = keyed.len() as u64;
    collection.extend(keyed);
    Ok(inserted)
}

pub(crate) fn upsert_all(
    collection: &mut Collection,
    documents: Vec<Document>,
) -> Result<UpsertOutcome, Error> {
    let mut outcome = UpsertOutcome::default();
    for (id, document) in keyed(documents)? {
        match collection.insert(id, document) {
            Some(_) => outcome.replaced += 1,
            None => outcome.inserted += 1,
        }
    }
    Ok(outcome)
}

// Every document is validated before the collection is touched.
fn keyed(documents: Vec<Document>) -> Result<Vec<(String, Document)>, Error> {
    documents
        .into_iter()
        .map(|document| document_id(&document).map(|id| (id, document)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_all_is_all_or_nothing() {
        let mut collection = Collection::new();
        insert_all(&mut collection, vec![json!({"_id": "a"})]).unwrap();

        let err = insert_all(
            &mut collection,
            vec![json!({"_id": "b"}), json!({"_id": "a"})],
        )
        .unwrap_err();

        assert_eq!(err.error_kind, EntityApiErrorKind::DuplicateKey);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn insert_all_rejects_repeats_inside_one_batch() {
        let mut collection = Collection::new();
        let err = insert_all(
            &mut collection,
            vec![json!({"_id": "a"}), json!({"_id": "a"})],
        )
        .unwrap_err();

        assert_eq!(err.error_kind, EntityApiErrorKind::DuplicateKey);
        assert!(collection.is_empty());
    }

    #[test]
    fn upsert_all_counts_inserts_and_replacements() {
        let mut collection = Collection::new();
        let first = upsert_all(
            &mut collection,
            vec![json!({"_id": "a", "v": 1}), json!({"_id": "b", "v": 1})],
        )
        .unwrap();
        assert_eq!(first, UpsertOutcome { inserted: 2, replaced: 0 });

        let second = upsert_all(&mut collection, vec![json!({"_id": "a", "v": 2})]).unwrap();
        assert_eq!(second, UpsertOutcome { inserted: 0, replaced: 1 });
        assert_eq!(collection["a"]["v"], 2);
    }

    #[test]
    fn upsert_all_leaves_collection_untouched_on_invalid_document() {
        let mut collection = Collection::new();
        let err = upsert_all(
            &mut collection,
            vec![json!({"_id": "a"}), json!({"name": "no id"})],
        )
        .unwrap_err();

        assert_eq!(err.error_kind, EntityApiErrorKind::InvalidDocument);
        assert!(collection.is_empty());
    }
}
