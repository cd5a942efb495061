//! Flat, line-oriented index file: `term: doc1, doc2, ...`, terms and
//! postings ascending, one line per term.

use crate::error::{IndexError, ParseError};
use crate::{DocumentId, InvertedIndex};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Whether `id` survives a write/parse round trip: non-empty, no `,`, no
/// line breaks, no surrounding whitespace.
pub fn is_storable_doc_id(id: &str) -> bool {
    !id.is_empty() && id.trim() == id && !id.contains([',', '\n', '\r'])
}

/// Serialize `index` in the line format. Ids that could not be read back
/// unchanged are rejected with `InvalidInput`.
pub fn write_index<W: Write>(index: &InvertedIndex, mut out: W) -> io::Result<()> {
    for (term, postings) in index.iter() {
        if let Some(bad) = postings.iter().find(|d| !is_storable_doc_id(d.as_str())) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("document id `{bad}` cannot be stored in the index file"),
            ));
        }
        let docs: Vec<&str> = postings.iter().map(DocumentId::as_str).collect();
        writeln!(out, "{term}: {}", docs.join(", "))?;
    }
    Ok(())
}

pub fn to_string(index: &InvertedIndex) -> io::Result<String> {
    let mut buf = Vec::new();
    write_index(index, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the index file atomically.
pub fn save_index(path: &Path, index: &InvertedIndex) -> Result<(), IndexError> {
    to_string(index)
        .and_then(|text| write_atomic(path, text.as_bytes()))
        .map_err(|source| IndexError::Write { path: path.to_path_buf(), source })
}

pub fn load_index(path: &Path) -> Result<InvertedIndex, IndexError> {
    let text = fs::read_to_string(path)
        .map_err(|source| IndexError::Read { path: path.to_path_buf(), source })?;
    let index = parse_index(&text)
        .map_err(|source| IndexError::Parse { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), terms = index.num_terms(), "loaded index");
    Ok(index)
}

/// Parse the whole file; the first bad line aborts loading.
pub fn parse_index(text: &str) -> Result<InvertedIndex, ParseError> {
    let mut index = InvertedIndex::new();
    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let err = |reason: &str| ParseError { line: lineno, reason: reason.to_string() };
        if line.trim().is_empty() {
            return Err(err("blank line"));
        }
        let (term, docs) = line.split_once(':').ok_or_else(|| err("missing ':' separator"))?;
        let term = term.trim();
        if term.is_empty() {
            return Err(err("empty term"));
        }
        if index.contains_term(term) {
            return Err(err(&format!("duplicate term `{term}`")));
        }
        for doc in docs.split(',').map(str::trim) {
            if doc.is_empty() {
                return Err(err("empty document id"));
            }
            index.insert(term, DocumentId::from(doc));
        }
    }
    Ok(index)
}

/// Write `bytes` to `path` so readers see either the old file or the full new
/// one: write `<path>.tmp`, fsync, rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let tmp = tmp_path(path);
    let res = (|| {
        let mut f = File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    res
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
