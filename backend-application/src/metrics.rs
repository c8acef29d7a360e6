use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    receipts_processed: AtomicU64,
    validation_errors: AtomicU64,
    points_lookups: AtomicU64,
    not_found: AtomicU64,
}

impl Metrics {
    pub fn record_processed(&self) {
        self.receipts_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_error(&self) {
        self.validation_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_points_lookup(&self) {
        self.points_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, stored: usize) -> String {
        let processed = self.receipts_processed.load(Ordering::Relaxed);
        let errors = self.validation_errors.load(Ordering::Relaxed);
        let lookups = self.points_lookups.load(Ordering::Relaxed);
        let not_found = self.not_found.load(Ordering::Relaxed);

        format!(
            "# TYPE receipts_processed_total counter\n\
receipts_processed_total {}\n\
# TYPE receipts_validation_errors_total counter\n\
receipts_validation_errors_total {}\n\
# TYPE receipts_points_lookups_total counter\n\
receipts_points_lookups_total {}\n\
# TYPE receipts_not_found_total counter\n\
receipts_not_found_total {}\n\
# TYPE receipts_stored gauge\n\
receipts_stored {}\n",
            processed, errors, lookups, not_found, stored
        )
    }
}
