//! Startup seeding from the bundled dictionary file.

use kansai_core::error::CoreError;
use kansai_core::seed::BundledDictionary;

use crate::store::WordStore;

/// Outcome of [`seed_if_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
    /// `true` when the store already had rows and nothing was attempted.
    pub already_populated: bool,
}

/// Insert every bundled entry if the store is empty.
///
/// A non-empty store is left untouched. Entries that fail validation or
/// insertion are logged and counted as skipped; only a failure to read the
/// row count aborts.
pub async fn seed_if_empty(
    store: &dyn WordStore,
    dictionary: &BundledDictionary,
) -> Result<SeedReport, CoreError> {
    if store.count().await? > 0 {
        tracing::info!("Word store already has data, skipping seed");
        return Ok(SeedReport {
            already_populated: true,
            ..SeedReport::default()
        });
    }

    let (valid, rejected) = dictionary.validated();
    let mut report = SeedReport {
        skipped: rejected.len(),
        ..SeedReport::default()
    };

    for (word, err) in &rejected {
        tracing::warn!(word = %word, error = %err, "Skipping invalid bundled entry");
    }

    for fields in &valid {
        match store.insert(fields).await {
            Ok(_) => report.inserted += 1,
            Err(e) => {
                tracing::error!(word = %fields.word(), error = %e, "Error inserting bundled entry");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Dictionary data seeded"
    );
    Ok(report)
}
