use chrono::{NaiveDateTime, Utc};
use rand::Rng;

use crate::seed::corpus::Corpus;
use crate::seed::generator::{generate_document_id, generate_document_text, wrap_payload};

/// The (application, form, version) triple the seeded rows are filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormKey {
    pub app: String,
    pub form: String,
    pub form_version: i32,
}

/// One synthesized document. The store writes two rows from it: the
/// document-data row, and an index row carrying the same key, document id,
/// timestamps, and draft flag plus the surrogate id the database assigns to
/// the data row.
#[derive(Debug, Clone)]
pub struct SeedDocument {
    pub key: FormKey,
    /// 16-digit numeric string.
    pub document_id: String,
    pub created: NaiveDateTime,
    pub last_modified: NaiveDateTime,
    pub deleted: bool,
    pub draft: bool,
    /// `<_>...</_>` envelope around the generated text.
    pub xml: String,
}

impl SeedDocument {
    /// Random id, random body of at least `document_size` characters, and one
    /// timestamp shared by the created and last-modified columns of both rows.
    pub fn synthesize(
        key: &FormKey,
        document_size: usize,
        corpus: &Corpus,
        rng: &mut impl Rng,
    ) -> Self {
        let now = Utc::now().naive_utc();
        let text = generate_document_text(corpus, document_size, rng);
        SeedDocument {
            key: key.clone(),
            document_id: generate_document_id(rng),
            created: now,
            last_modified: now,
            deleted: false,
            draft: false,
            xml: wrap_payload(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn test_key() -> FormKey {
        FormKey {
            app: "benchmark".into(),
            form: "fulltext".into(),
            form_version: 1,
        }
    }

    #[test]
    fn synthesized_document_starts_live_and_final() {
        let corpus = Corpus::load(None).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let document = SeedDocument::synthesize(&test_key(), 10, &corpus, &mut rng);

        assert!(!document.deleted);
        assert!(!document.draft);
        assert_eq!(document.created, document.last_modified);
        assert_eq!(document.key, test_key());
    }

    #[test]
    fn synthesized_payload_wraps_enough_text() {
        let corpus = Corpus::load(None).unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let document = SeedDocument::synthesize(&test_key(), 10, &corpus, &mut rng);

        let inner = document
            .xml
            .strip_prefix("<_>")
            .and_then(|rest| rest.strip_suffix("</_>"))
            .expect("payload envelope");
        assert!(inner.len() >= 10);
    }
}
