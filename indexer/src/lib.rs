use anyhow::{Context, Result};
use search_core::persist::{is_storable_doc_id, save_index};
use search_core::{DocumentId, IndexBuilder, InvertedIndex};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of document files written by the crawler.
pub const DOC_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub num_docs: usize,
    pub num_terms: usize,
}

/// Every `*.txt` file directly inside `input` (a directory or a single file),
/// sorted by name. The file stem is the document id. Subdirectories are not
/// scanned, so each stem names exactly one file.
pub fn document_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if input.is_file() {
        files.push(input.to_path_buf());
    } else if input.is_dir() {
        for entry in WalkDir::new(input).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.with_context(|| format!("scanning {}", input.display()))?;
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some(DOC_EXTENSION) {
                files.push(p.to_path_buf());
            }
        }
    } else {
        anyhow::bail!("input {} does not exist", input.display());
    }
    Ok(files)
}

/// Document id for a file, if its stem is UTF-8 and can be stored in the
/// index file.
pub fn doc_id_for(path: &Path) -> Option<DocumentId> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| is_storable_doc_id(s))
        .map(DocumentId::from)
}

pub fn index_directory(input: &Path) -> Result<(InvertedIndex, usize)> {
    let mut builder = IndexBuilder::new();
    for file in document_files(input)? {
        let Some(id) = doc_id_for(&file) else {
            tracing::warn!(path = %file.display(), "skipping file whose name is not a valid document id");
            continue;
        };
        let text = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
        builder.add_document(id, &text);
    }
    let num_docs = builder.num_docs();
    Ok((builder.finish(), num_docs))
}

pub fn build_index(input: &Path, output: &Path) -> Result<BuildSummary> {
    let (index, num_docs) = index_directory(input)?;
    tracing::info!(num_docs, num_terms = index.num_terms(), "ingested documents");
    save_index(output, &index)?;
    tracing::info!(output = %output.display(), "index build complete");
    Ok(BuildSummary { num_docs, num_terms: index.num_terms() })
}
