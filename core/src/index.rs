use crate::tokenizer::tokenize;
use crate::DocumentId;
use std::collections::{BTreeMap, BTreeSet};

/// Term -> posting set. Ordered containers keep iteration (and therefore
/// serialization) independent of the order documents were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<DocumentId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Add `doc` to the posting set of `term`.
    pub fn insert(&mut self, term: impl Into<String>, doc: DocumentId) {
        self.postings.entry(term.into()).or_default().insert(doc);
    }

    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocumentId>> { self.postings.get(term) }

    pub fn contains_term(&self, term: &str) -> bool { self.postings.contains_key(term) }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    /// Terms in ascending order with their posting sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<DocumentId>)> {
        self.postings.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Union of every posting set: the documents that contributed at least one term.
    pub fn all_docs(&self) -> BTreeSet<DocumentId> {
        self.postings.values().flatten().cloned().collect()
    }
}

/// Accumulates documents into an [`InvertedIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: InvertedIndex,
    num_docs: usize,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Build an index from a full corpus in one call.
    pub fn build<I, S>(documents: I) -> InvertedIndex
    where
        I: IntoIterator<Item = (DocumentId, S)>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for (id, text) in documents {
            builder.add_document(id, text.as_ref());
        }
        builder.finish()
    }

    pub fn add_document(&mut self, id: DocumentId, text: &str) {
        let terms: BTreeSet<String> = tokenize(text).into_iter().collect();
        tracing::debug!(doc = %id, terms = terms.len(), "indexed document");
        for term in terms {
            self.index.insert(term, id.clone());
        }
        self.num_docs += 1;
    }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn finish(self) -> InvertedIndex { self.index }
}
