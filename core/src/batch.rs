//! Batch runner: one action against many tenants.
//!
//! # Design
//! Each entry carries its own endpoint and credentials and runs the full
//! login → action → logout sequence in isolation. Errors, and panics, are
//! recorded in that entry's [`BatchResult`] and never abort the batch.
//!
//! Sequential batches run on the caller's thread and keep submission order.
//! Parallel batches spawn one scoped thread per entry; the only shared state
//! is the result vector behind a mutex, filled in completion order.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::action::Action;
use crate::client::Client;
use crate::error::ApiError;
use crate::session::Credentials;
use crate::transport::{Deadline, Transport};

/// One unit of batch work.
#[derive(Debug, Clone)]
pub struct BatchEntry<I> {
    pub credentials: Credentials,
    pub input: I,
}

impl<I> BatchEntry<I> {
    pub fn new(credentials: Credentials, input: I) -> Self {
        Self { credentials, input }
    }
}

#[derive(Debug, Clone)]
pub struct Batch<I> {
    pub parallel: bool,
    /// Budget for login plus the action of each entry. Logout runs under the
    /// client's release timeout instead.
    pub entry_timeout: Option<Duration>,
    pub entries: Vec<BatchEntry<I>>,
}

impl<I> Batch<I> {
    pub fn sequential(entries: Vec<BatchEntry<I>>) -> Self {
        Self {
            parallel: false,
            entry_timeout: None,
            entries,
        }
    }

    pub fn parallel(entries: Vec<BatchEntry<I>>) -> Self {
        Self {
            parallel: true,
            entry_timeout: None,
            entries,
        }
    }

    pub fn with_entry_timeout(mut self, timeout: Duration) -> Self {
        self.entry_timeout = Some(timeout);
        self
    }
}

/// Outcome of one entry, tagged with the tenant it ran against.
///
/// Serializes as `{"success", "imobId", "data"?, "error"?: {"message"}}`.
#[derive(Debug)]
pub struct BatchResult<O> {
    pub imob_id: String,
    pub outcome: Result<O, ApiError>,
}

impl<O> BatchResult<O> {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn data(&self) -> Option<&O> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.as_ref().err()
    }
}

impl<O: Serialize> Serialize for BatchResult<O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a, O> {
            success: bool,
            imob_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            data: Option<&'a O>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<WireError>,
        }

        #[derive(Serialize)]
        struct WireError {
            message: String,
        }

        Wire {
            success: self.is_success(),
            imob_id: &self.imob_id,
            data: self.data(),
            error: self.error().map(|e| WireError { message: e.to_string() }),
        }
        .serialize(serializer)
    }
}

impl<T: Transport> Client<T> {
    /// Run `A` once per entry and return one result per entry.
    ///
    /// Results follow submission order when `batch.parallel` is false and
    /// completion order otherwise. Blocks until every entry finished.
    pub fn run_multi<A>(&self, batch: &Batch<A::Input>) -> Vec<BatchResult<A::Output>>
    where
        A: Action,
        A::Input: Sync,
        A::Output: Send,
    {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "run_multi",
            %run_id,
            action = A::NAME,
            entries = batch.entries.len(),
            parallel = batch.parallel
        );
        let _enter = span.enter();

        if !batch.parallel {
            return batch
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| self.run_entry::<A>(index, entry, batch.entry_timeout))
                .collect();
        }

        let results = Mutex::new(Vec::with_capacity(batch.entries.len()));
        thread::scope(|scope| {
            for (index, entry) in batch.entries.iter().enumerate() {
                let results = &results;
                let span = span.clone();
                scope.spawn(move || {
                    let _enter = span.enter();
                    let result = self.run_entry::<A>(index, entry, batch.entry_timeout);
                    results.lock().unwrap_or_else(PoisonError::into_inner).push(result);
                });
            }
        });
        results.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn run_entry<A: Action>(
        &self,
        index: usize,
        entry: &BatchEntry<A::Input>,
        timeout: Option<Duration>,
    ) -> BatchResult<A::Output> {
        let imob_id = entry.credentials.imob_id.clone();
        let span = tracing::debug_span!("batch_entry", index, imob_id = %imob_id);
        let _enter = span.enter();

        let deadline = timeout.map(Deadline::after).unwrap_or_default();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.with_session(&entry.credentials, deadline, |session| {
                self.run::<A>(session, &entry.input, deadline)
            })
        }))
        .unwrap_or_else(|payload| Err(ApiError::Panicked(panic_message(payload.as_ref()))));

        match &outcome {
            Ok(_) => tracing::debug!("entry succeeded"),
            Err(err) => tracing::warn!(error = %err, "entry failed"),
        }

        BatchResult { imob_id, outcome }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
