//! Catalog Loader Module
//!
//! Loads the comic collection in a background thread to avoid blocking the UI.
//! The remote fetch runs on a single-threaded tokio runtime owned by that thread;
//! the result comes back over a channel and is picked up by `poll()`.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use super::client::CatalogClient;
use super::types::ComicRecord;
use super::wire::parse_catalog;
use crate::error::ComiqError;

/// Where the collection comes from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Signed request against the catalog API
    Remote(CatalogClient),
    /// Previously saved catalog response on disk
    File(PathBuf),
}

/// Represents the current state of catalog loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete,
    Error(ComiqError),
}

/// Manages catalog loading in a background thread
pub struct CatalogLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<Vec<ComicRecord>, ComiqError>>>,
}

impl CatalogLoader {
    /// Spawn a background thread that loads the collection from `source`
    pub fn spawn(source: CatalogSource) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_blocking(source);
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading (and after the result was taken),
    /// or Some with the result exactly once.
    pub fn poll(&mut self) -> Option<Result<Vec<ComicRecord>, ComiqError>> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(_) => LoadingState::Complete,
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                let err = ComiqError::Io("Catalog loader thread disconnected".to_string());
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    /// Get the current loading state
    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Load the collection synchronously
///
/// Used by the background thread and by print mode.
pub fn load_blocking(source: CatalogSource) -> Result<Vec<ComicRecord>, ComiqError> {
    match source {
        CatalogSource::File(path) => load_file_sync(&path),
        CatalogSource::Remote(client) => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| ComiqError::Io(format!("failed to start runtime: {}", e)))?;
            rt.block_on(client.fetch())
        }
    }
}

fn load_file_sync(path: &Path) -> Result<Vec<ComicRecord>, ComiqError> {
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
