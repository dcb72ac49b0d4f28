//! Mock dataset source for testing — serves a fixed snapshot or a failure.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use vib_protocol::{Dataset, RecordKey, VehicleRecord};

use crate::error::{FetchError, FetchResult};
use crate::source::DatasetSource;

/// A mock source returning a pre-loaded dataset, or failing every fetch.
pub struct MockDatasetSource {
    dataset: Option<Dataset>,
    fetches: AtomicUsize,
}

impl MockDatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails with a 503 status.
    pub fn failing() -> Self {
        Self {
            dataset: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source with a few well-known San Andreas vehicles.
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            VehicleRecord {
                id: Some(RecordKey::from("400")),
                hex: Some(RecordKey::from("190")),
                name: Some("Landstalker".into()),
                model: Some("landstal".into()),
                gxt: Some("LANDSTK".into()),
                notes: None,
            },
            VehicleRecord {
                id: Some(RecordKey::from("401")),
                hex: Some(RecordKey::from("191")),
                name: Some("Bravura".into()),
                model: Some("bravura".into()),
                gxt: Some("BRAVURA".into()),
                notes: None,
            },
            VehicleRecord {
                id: Some(RecordKey::from(520u64)),
                hex: Some(RecordKey::from("208")),
                name: Some("Hydra".into()),
                model: Some("hydra".into()),
                gxt: None,
                notes: Some("rare spawn".into()),
            },
        ])
    }

    /// Number of `fetch` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockDatasetSource {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

#[async_trait]
impl DatasetSource for MockDatasetSource {
    async fn fetch(&self) -> FetchResult<Dataset> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.dataset.clone().ok_or(FetchError::Status(503))
    }
}
