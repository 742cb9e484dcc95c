/// Scanner module — runs the directory walk on a background thread.
///
/// The aggregator is owned entirely by the scan thread. The caller gets
/// advisory progress through a bounded channel and receives the sealed
/// [`Report`] by value when it joins the handle; no statistics state is
/// shared between threads.
pub mod options;
pub mod progress;
pub mod walker;

pub use options::ScanOptions;
pub use walker::scan_tree;

use crate::analysis::Report;
use crate::error::ScanError;
use progress::ScanProgress;

use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// The scanner uses `try_send`, so once the queue is full further updates
/// are dropped instead of stalling the walk.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Result of one scan run.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The sealed statistics.
    pub report: Report,
    /// Wall-clock time spent walking.
    pub duration: Duration,
    /// Entries skipped because they could not be read.
    pub error_count: u64,
}

/// Handle to a running or completed scan.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    cancel_flag: Arc<AtomicBool>,
    thread: thread::JoinHandle<Result<ScanOutcome, ScanError>>,
}

impl ScanHandle {
    /// Request the scan to stop before its next directory entry.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// `true` once the scan thread has returned.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the scan thread and take its outcome.
    pub fn join(self) -> Result<ScanOutcome, ScanError> {
        self.thread.join().map_err(|_| ScanError::WorkerPanicked)?
    }
}

/// Start a new scan of `root_path` on a background thread.
///
/// The root is validated before the thread is spawned, so a missing or
/// non-directory root fails here rather than on `join`.
pub fn start_scan(root_path: PathBuf, options: ScanOptions) -> Result<ScanHandle, ScanError> {
    walker::validate_root(&root_path)?;

    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("scanstat-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", root_path.display());
            let result = walker::scan_tree(&root_path, &options, &cancel_clone, |msg| {
                // Dropped updates are fine; the report comes back via join.
                let _ = progress_tx.try_send(msg);
            });
            if let Err(err) = &result {
                warn!("Scan of {} failed: {err}", root_path.display());
            }
            result
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        thread,
    })
}
