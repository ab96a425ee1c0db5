//! `scribble compose`: type a note, stop typing, it gets saved.
//!
//! A helper thread reads stdin line by line into a channel. The main thread waits on
//! the channel with a timeout taken from the [`Debouncer`], so all store access stays
//! on the main thread. Every line restarts the quiet window; once the window passes
//! without input (or stdin closes) the draft is handed to `on_save` exactly once.

use scribble::autosave::{Debouncer, Draft};
use scribble::error::Result;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Spawns the stdin reader and runs the debounce loop until one draft is saved.
pub fn run<F>(delay: Duration, on_save: F) -> Result<()>
where
    F: FnOnce(Draft) -> Result<()>,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    match next_draft(&rx, delay) {
        Some(draft) => on_save(draft),
        None => Ok(()),
    }
}

/// Collects lines until the debouncer fires or the sender hangs up.
///
/// Returns `None` when input ended without a single line, or when every line
/// was blank.
pub fn next_draft(rx: &Receiver<String>, delay: Duration) -> Option<Draft> {
    let mut debouncer: Debouncer<Draft> = Debouncer::new(delay);
    let mut lines: Vec<String> = Vec::new();

    loop {
        let received = match debouncer.time_until_due(Instant::now()) {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) => {
                lines.push(line);
                debouncer.schedule(Instant::now(), Draft::from_lines(&lines));
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(draft) = debouncer.poll(Instant::now()) {
                    debug!(lines = lines.len(), "autosave window elapsed");
                    return Some(draft).filter(|d| !d.is_blank());
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                debug!(lines = lines.len(), "input closed, flushing draft");
                return debouncer.flush().filter(|d| !d.is_blank());
            }
        }
    }
}
