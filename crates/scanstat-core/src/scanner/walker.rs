/// Directory walk driver.
///
/// Walks a subtree with `jwalk` on the calling thread and feeds every
/// regular file into a [`ScanAggregate`]. Directories, symlinks and other
/// special entries are not observed. Entries that cannot be read are
/// skipped and counted; one bad entry never aborts the scan.
///
/// # Cancellation
///
/// `cancel_flag` is polled before each entry. When it is set the walk stops,
/// the aggregate is sealed with `completed = false`, and the partial report
/// reflects every file observed up to that point.
use crate::analysis::ScanAggregate;
use crate::error::ScanError;
use crate::scanner::options::ScanOptions;
use crate::scanner::progress::ScanProgress;
use crate::scanner::ScanOutcome;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Check that `root_path` exists and is a directory.
pub fn validate_root(root_path: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root_path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root_path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ScanError::RootNotFound(root_path.to_path_buf()))
        }
        Err(source) => Err(ScanError::RootUnreadable {
            path: root_path.to_path_buf(),
            source,
        }),
    }
}

/// Scan `root_path` synchronously and return the sealed report.
///
/// `on_progress` receives an `Update` every `options.progress_every` files,
/// an `Error` for each skipped entry, and finally `Complete` or `Cancelled`.
pub fn scan_tree<F>(
    root_path: &Path,
    options: &ScanOptions,
    cancel_flag: &AtomicBool,
    mut on_progress: F,
) -> Result<ScanOutcome, ScanError>
where
    F: FnMut(ScanProgress),
{
    validate_root(root_path)?;

    let start = Instant::now();
    let progress_every = options.progress_every.max(1);
    let mut aggregate = ScanAggregate::with_limits(options.top_files, options.top_extensions);
    let mut error_count: u64 = 0;

    info!("Scanning {}", root_path.display());

    // Serial, sorted walk: traversal order is deterministic and the
    // aggregator is only ever touched from this thread.
    let walker = jwalk::WalkDir::new(root_path)
        .skip_hidden(options.skip_hidden)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        if cancel_flag.load(Ordering::Relaxed) {
            let files_found = aggregate.total_files();
            info!("Scan cancelled after {files_found} files");
            on_progress(ScanProgress::Cancelled { files_found });
            return Ok(ScanOutcome {
                report: aggregate.finalize(false),
                duration: start.elapsed(),
                error_count,
            });
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                error_count += 1;
                let path = err
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                debug!("Skipping unreadable entry {path}: {err}");
                on_progress(ScanProgress::Error {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        // A directory whose children could not be listed (e.g. access
        // denied) still arrives as `Ok`, carrying the read error.
        if let Some(err) = &entry.read_children_error {
            error_count += 1;
            let path = entry.path();
            debug!("Skipping unreadable directory {}: {err}", path.display());
            on_progress(ScanProgress::Error {
                path: path.to_string_lossy().into_owned(),
                message: err.to_string(),
            });
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let size = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta.len(),
            Err(err) => {
                error_count += 1;
                debug!("Skipping {}: {err}", path.display());
                on_progress(ScanProgress::Error {
                    path: path.to_string_lossy().into_owned(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        aggregate.observe(&file_name, size);

        if aggregate.total_files().is_multiple_of(progress_every) {
            on_progress(ScanProgress::Update {
                files_found: aggregate.total_files(),
                total_bytes: aggregate.total_bytes(),
                current_path: path.to_string_lossy().into_owned(),
            });
        }
    }

    let duration = start.elapsed();
    debug!(
        "Scan walk complete: {} files, {} bytes, {} skipped in {:?}",
        aggregate.total_files(),
        aggregate.total_bytes(),
        error_count,
        duration
    );
    on_progress(ScanProgress::Complete {
        duration,
        error_count,
    });

    Ok(ScanOutcome {
        report: aggregate.finalize(true),
        duration,
        error_count,
    })
}
