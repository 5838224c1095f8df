//! Circular Log Buffer
//!
//! Fixed-capacity store of the most recent formatted log lines.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to a circular buffer of log lines.
///
/// Cloning is cheap; every clone sees the same lines.
#[derive(Clone, Debug)]
pub struct LogRing {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogRing {
    /// A capacity of zero is bumped to one so the newest line is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Dump every buffered line, one per line, oldest first
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lock().iter() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    // A panic while holding the lock only ever leaves whole lines behind,
    // so a poisoned buffer is still usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
