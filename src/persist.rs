//! Flat text codec for the frequency table.
//!
//! One record per line, `<word> <frequency>`, no header. Loading merges into
//! the existing store by adding frequencies, so loading the same file twice
//! doubles every weight.

use crate::error::PersistError;
use crate::trie::TrieStore;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parses one record. Tokens past the second are ignored.
fn parse_record(line: &str) -> Option<(&str, u64)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    let frequency = tokens.next()?.parse().ok()?;
    Some((word, frequency))
}

/// Writes every terminal node in depth-first order; returns the record count.
pub fn write_to<W: Write>(store: &TrieStore, writer: &mut W) -> io::Result<usize> {
    let mut written = 0;
    let mut result = Ok(());
    store.root().for_each_word(&mut |node| {
        if result.is_ok() {
            result = writeln!(writer, "{} {}", node.word(), node.frequency());
            written += 1;
        }
    });
    result?;
    writer.flush()?;
    Ok(written)
}

/// Merges records into `store`, skipping lines that do not parse.
pub fn read_from<R: BufRead>(store: &mut TrieStore, reader: R) -> io::Result<usize> {
    let mut loaded = 0;
    for (lineno, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let record = std::str::from_utf8(&line).ok().and_then(parse_record);
        match record {
            Some((word, frequency)) => {
                store.insert(word, frequency);
                loaded += 1;
            }
            None => {
                if !line.iter().all(u8::is_ascii_whitespace) {
                    warn!("skipping malformed record on line {}", lineno + 1);
                }
            }
        }
    }
    Ok(loaded)
}

pub fn save(store: &TrieStore, path: &Path) -> Result<usize, PersistError> {
    let write_err = |source: io::Error| {
        warn!("could not save model to {}: {}", path.display(), source);
        PersistError::Write {
            path: path.to_path_buf(),
            source,
        }
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let written = write_to(store, &mut writer).map_err(write_err)?;
    info!("model saved to {} ({} words)", path.display(), written);
    Ok(written)
}

pub fn load(store: &mut TrieStore, path: &Path) -> Result<usize, PersistError> {
    let file = File::open(path).map_err(|source| {
        warn!("could not load model from {}: {}", path.display(), source);
        PersistError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let loaded = read_from(store, BufReader::new(file)).map_err(|source| {
        warn!("reading {} stopped early: {}", path.display(), source);
        PersistError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("model loaded from {} ({} words)", path.display(), loaded);
    Ok(loaded)
}
