// Notification store module
// Append-only record list behind a single readers-writer lock

use chrono::Local;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::record::Notification;

/// Thread-safe, append-only log of notification records.
///
/// Appends take the write side of the lock, snapshots the read side. Every
/// record is pushed whole while the write guard is held, so readers never
/// observe a partial append.
#[derive(Debug, Default)]
pub struct NotificationLog {
    records: RwLock<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record and return a copy of it.
    ///
    /// The id sequence and timestamp are taken under the write lock, so ids
    /// are distinct and timestamps never decrease in append order.
    pub fn append(&self, message: impl Into<String>) -> Notification {
        let message = message.into();
        let mut records = self.write();
        // Clamp to the previous timestamp in case the wall clock steps back
        let now = Local::now();
        let timestamp = records.last().map_or(now, |last| last.timestamp.max(now));
        let record = Notification::new(records.len() + 1, message, timestamp);
        records.push(record.clone());
        record
    }

    /// Copy of every record in append order
    pub fn snapshot(&self) -> Vec<Notification> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed record,
    // so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Notification>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Notification>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_log() {
        let log = NotificationLog::new();
        assert!(log.snapshot().is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_returns_stored_record() {
        let log = NotificationLog::new();
        let record = log.append("hello");

        assert_eq!(record.message, "hello");
        assert_eq!(record.status, "sent");
        assert_eq!(log.snapshot(), vec![record]);
    }

    #[test]
    fn test_append_accepts_empty_message() {
        let log = NotificationLog::new();
        let record = log.append("");
        assert_eq!(record.message, "");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_append_order_preserved() {
        let log = NotificationLog::new();
        let messages: Vec<String> = (1..=20).map(|i| format!("m{i}")).collect();
        for m in &messages {
            log.append(m.as_str());
        }

        let snapshot = log.snapshot();
        let stored: Vec<&str> = snapshot.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(stored, messages);

        for pair in snapshot.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_concurrent_appends_distinct_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 50;

        let log = Arc::new(NotificationLog::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        log.append(format!("t{t}-{i}"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), THREADS * PER_THREAD);

        let ids: HashSet<&str> = snapshot.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), THREADS * PER_THREAD);

        let messages: HashSet<&str> = snapshot.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_concurrent_readers_see_whole_prefixes() {
        let log = Arc::new(NotificationLog::new());

        let writer = {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..200 {
                    log.append(format!("m{i}"));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = log.snapshot();
                        for (i, n) in snapshot.iter().enumerate() {
                            assert_eq!(n.message, format!("m{i}"));
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
        assert_eq!(log.len(), 200);
    }

    #[test]
    fn test_snapshot_isolation() {
        let log = NotificationLog::new();
        log.append("first");

        let before = log.snapshot();
        let added = log.append("second");
        let after = log.snapshot();

        assert!(!before.iter().any(|n| n.id == added.id));
        assert!(after.iter().any(|n| n.id == added.id));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let log = NotificationLog::new();
        log.append("kept");

        let mut snapshot = log.snapshot();
        snapshot.clear();
        snapshot.push(log.append("extra"));
        snapshot[0].message = "changed".to_string();

        let fresh = log.snapshot();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].message, "kept");
        assert_eq!(fresh[1].message, "extra");
    }
}
