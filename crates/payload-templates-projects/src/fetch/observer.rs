//! Fetch progress observation
//!
//! Fetching never fails on these events; they only inform the caller. The CLI
//! turns them into terminal output, library users can log them through
//! [`TracingFetchObserver`].

use camino::Utf8PathBuf;

/// Informational events emitted while fetching a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// The destination already has entries; files will be merged and overwritten
    DestinationNotEmpty { path: Utf8PathBuf },

    /// The archive has been downloaded
    Downloaded { bytes: u64 },

    /// The template files have been written
    Extracted { files: usize },
}

/// Observer for fetch events
pub trait FetchObserver {
    /// Called for every event, in the order they occur
    fn on_event(&self, event: &FetchEvent);
}

impl<F> FetchObserver for F
where
    F: Fn(&FetchEvent),
{
    fn on_event(&self, event: &FetchEvent) {
        self(event)
    }
}

/// Observer that logs events with `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFetchObserver;

impl FetchObserver for TracingFetchObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::DestinationNotEmpty { path } => {
                tracing::warn!(path = %path, "destination not empty");
            }
            FetchEvent::Downloaded { bytes } => {
                tracing::debug!(bytes = bytes, "template archive downloaded");
            }
            FetchEvent::Extracted { files } => {
                tracing::info!(files = files, "template extracted");
            }
        }
    }
}
