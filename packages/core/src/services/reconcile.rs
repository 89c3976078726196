//! Reconciliation
//!
//! Diffs one parse outcome against the set of currently-open remote task
//! identifiers:
//!
//! - a tagged row whose identifier is no longer open was completed or
//!   deleted remotely and gets its checkbox flipped in the document
//! - a parsed task without a live remote identifier is genuinely new and
//!   will be created
//!
//! Creation is ordered so a parent's create call always precedes any child
//! that references it.

use crate::models::{LocalId, ParseOutcome, ParsedTask};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// The two disjoint outputs of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Tasks to create remotely, in document order.
    pub new_tasks: Vec<ParsedTask>,
    /// Rows whose previously-tagged task is no longer open remotely.
    pub completed_rows: Vec<usize>,
}

/// Diff a parse outcome against the open remote identifiers.
pub fn reconcile(outcome: &ParseOutcome, open_ids: &HashSet<String>) -> Reconciliation {
    let completed_rows = outcome
        .tagged_rows
        .iter()
        .filter(|tagged| !open_ids.contains(&tagged.remote_id))
        .map(|tagged| tagged.row)
        .collect();

    // Tagged lines never materialize as parsed tasks, so a task record with
    // any remote identifier, live or dead, was synced once already and is
    // never re-created.
    let new_tasks = outcome
        .tasks
        .iter()
        .filter(|task| task.remote_id.is_none())
        .cloned()
        .collect();

    Reconciliation {
        new_tasks,
        completed_rows,
    }
}

/// Order tasks for creation: top-level tasks first, then children, with the
/// original relative order preserved inside each group.
///
/// Parents always sit earlier in the document than their children, so within
/// the child group document order already places every parent before its own
/// descendants. The partition guarantees the invariant even across subtrees.
pub fn order_for_creation(tasks: Vec<ParsedTask>) -> Vec<ParsedTask> {
    let (mut top_level, children): (Vec<ParsedTask>, Vec<ParsedTask>) =
        tasks.into_iter().partition(|task| task.is_top_level());
    top_level.extend(children);
    top_level
}

/// Write-once map from parse-time local id to the remote identifier returned
/// by that task's create call.
///
/// Each key is written exactly once, by the create call of the task it
/// belongs to; once written it never changes. That makes the map safe for
/// concurrent readers of a key after its writer has completed, which is all
/// a future concurrent creation loop would need. A second write to the same
/// key indicates corrupted bookkeeping and is ignored with a warning.
#[derive(Debug, Default)]
pub struct RemoteIdMap {
    inner: HashMap<LocalId, String>,
}

impl RemoteIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the remote identifier created for `local_id`.
    pub fn record(&mut self, local_id: LocalId, remote_id: String) {
        match self.inner.entry(local_id) {
            Entry::Vacant(entry) => {
                entry.insert(remote_id);
            }
            Entry::Occupied(entry) => {
                tracing::warn!(
                    local_id,
                    existing = %entry.get(),
                    "ignoring duplicate remote id for local id"
                );
            }
        }
    }

    /// Resolve the remote identifier of `local_id`, if its create call has
    /// completed.
    pub fn resolve(&self, local_id: LocalId) -> Option<&str> {
        self.inner.get(&local_id).map(String::as_str)
    }
}
