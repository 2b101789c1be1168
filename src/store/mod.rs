//! Quote persistence.
//!
//! This module provides the [`QuoteStore`], a JSON-file-backed quote list.
//! The store is the thin storage collaborator around the engine: it appends,
//! lists, finds and updates quote snapshots and never recomputes anything.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::Quote;

/// A JSON-file-backed quote store.
///
/// The whole quote list lives in one JSON file using the legacy stored
/// shape. A mutex serializes writers, and every mutation rewrites the file
/// through a temp-file rename so readers never observe a partial write.
///
/// # Example
///
/// ```no_run
/// use quote_engine::store::QuoteStore;
///
/// let store = QuoteStore::open("./data/quotes.json").unwrap();
/// for quote in store.list_all().unwrap() {
///     println!("{} ({:?})", quote.id, quote.status);
/// }
/// ```
#[derive(Debug)]
pub struct QuoteStore {
    path: PathBuf,
    quotes: Mutex<Vec<Quote>>,
}

impl QuoteStore {
    /// Opens a store at the given path.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write. An existing file must parse as a quote list.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        let path_str = path.display().to_string();

        let quotes = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| EngineError::StoreRead {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
            serde_json::from_str(&content).map_err(|e| EngineError::StoreRead {
                path: path_str,
                message: e.to_string(),
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            quotes: Mutex::new(quotes),
        })
    }

    /// Appends a quote to the store.
    pub fn append(&self, quote: Quote) -> EngineResult<()> {
        let mut quotes = self.lock()?;
        quotes.push(quote);
        self.persist(&quotes)
    }

    /// Returns the quote with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::QuoteNotFound`] if no quote has the id.
    pub fn find_by_id(&self, id: &str) -> EngineResult<Quote> {
        let quotes = self.lock()?;
        quotes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| EngineError::QuoteNotFound { id: id.to_string() })
    }

    /// Returns all quotes in insertion order.
    pub fn list_all(&self) -> EngineResult<Vec<Quote>> {
        Ok(self.lock()?.clone())
    }

    /// Replaces the stored quote with the same id.
    ///
    /// Used for the accept transition; the quote's frozen computation is
    /// carried over unchanged by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::QuoteNotFound`] if no quote has the id.
    pub fn update(&self, quote: &Quote) -> EngineResult<()> {
        let mut quotes = self.lock()?;
        let slot = quotes.iter_mut().find(|q| q.id == quote.id).ok_or_else(|| {
            EngineError::QuoteNotFound {
                id: quote.id.clone(),
            }
        })?;
        *slot = quote.clone();
        self.persist(&quotes)
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, Vec<Quote>>> {
        self.quotes.lock().map_err(|_| EngineError::Store {
            message: "quote store lock poisoned".to_string(),
        })
    }

    /// Writes the full list through a temp file + rename so the store file
    /// is replaced in a single atomic step.
    fn persist(&self, quotes: &[Quote]) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        let json =
            serde_json::to_string_pretty(quotes).map_err(|e| EngineError::StoreWrite {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| EngineError::StoreWrite {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| EngineError::StoreWrite {
            path: path_str,
            message: e.to_string(),
        })
    }
}
