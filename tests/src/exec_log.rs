use crate::logging_driver::DriverOp;
use filmes_core::{driver::Operation, stmt::Document};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forget everything logged so far
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the oldest logged operation
    pub fn pop(&self) -> Option<DriverOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of stream (full read) operations attempted
    pub fn streams(&self) -> usize {
        self.count(Operation::is_stream)
    }

    /// Number of insert operations attempted
    pub fn inserts(&self) -> usize {
        self.count(Operation::is_insert)
    }

    /// Number of operations the driver rejected
    pub fn failures(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.response.is_none())
            .count()
    }

    /// Documents handed to successful inserts, in order
    pub fn inserted_documents(&self) -> Vec<Document> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match (&op.operation, &op.response) {
                (Operation::Insert(insert), Some(response)) if response.rows.is_inserted() => {
                    Some(insert.document.clone())
                }
                _ => None,
            })
            .collect()
    }
}
