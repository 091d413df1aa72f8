//! Process table queries.
//!
//! The same filtering problem expressed three ways: criteria functions,
//! fluent [`PredicateBuilder`] methods, and canned [`Specification`]s.
//!
//! ```rust
//! use strainer::builder::PredicateBuilder;
//! use strainer::process::{Process, ProcessManager};
//!
//! let manager = ProcessManager::sample();
//! let busy = PredicateBuilder::<Process>::new()
//!     .with_status("running")
//!     .with_min_priority(5)
//!     .build();
//!
//! let titles: Vec<&str> = manager.find(&busy).into_iter().map(|p| p.title.as_str()).collect();
//! assert_eq!(titles, vec!["Go", "Rust"]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::PredicateBuilder;
use crate::predicate::{filter_ref, Predicate};
use crate::specification::Specification;

/// Priority at or above which a process counts as high priority.
pub const HIGH_PRIORITY: u8 = 5;

/// A running or stopped system process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Process {
    /// Process identifier.
    pub id: u32,
    /// Command title.
    pub title: String,
    /// Lifecycle state, e.g. `running` or `stopped`.
    pub status: String,
    /// Scheduling priority; higher is more important.
    pub priority: u8,
    /// Owning user.
    pub owner: String,
    /// CPU usage in percent.
    pub cpu_usage: f64,
    /// Resident memory in MB.
    pub memory: u64,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ID: {}, Title: {}, Status: {}, Priority: {}, Owner: {}}}",
            self.id, self.title, self.status, self.priority, self.owner
        )
    }
}

/// Processes titled exactly `title`.
pub fn by_title(title: &str) -> impl Predicate<Process> + Clone {
    let title = title.to_string();
    move |p: &Process| p.title == title
}

/// The process with identifier `id`.
pub fn by_id(id: u32) -> impl Predicate<Process> + Clone {
    move |p: &Process| p.id == id
}

/// Processes in state `status`.
pub fn by_status(status: &str) -> impl Predicate<Process> + Clone {
    let status = status.to_string();
    move |p: &Process| p.status == status
}

/// Processes with priority at least `min_priority`.
pub fn by_min_priority(min_priority: u8) -> impl Predicate<Process> + Clone {
    move |p: &Process| p.priority >= min_priority
}

/// Processes owned by `owner`.
pub fn by_owner(owner: &str) -> impl Predicate<Process> + Clone {
    let owner = owner.to_string();
    move |p: &Process| p.owner == owner
}

/// Processes using at most `max_cpu` percent CPU.
pub fn by_max_cpu(max_cpu: f64) -> impl Predicate<Process> + Clone {
    move |p: &Process| p.cpu_usage <= max_cpu
}

/// Processes using at least `min_memory` MB.
pub fn by_min_memory(min_memory: u64) -> impl Predicate<Process> + Clone {
    move |p: &Process| p.memory >= min_memory
}

impl PredicateBuilder<Process> {
    /// Add a [`by_title`] criterion.
    pub fn with_title(self, title: &str) -> Self {
        self.with(by_title(title))
    }

    /// Add a [`by_id`] criterion.
    pub fn with_id(self, id: u32) -> Self {
        self.with(by_id(id))
    }

    /// Add a [`by_status`] criterion.
    pub fn with_status(self, status: &str) -> Self {
        self.with(by_status(status))
    }

    /// Add a [`by_min_priority`] criterion.
    pub fn with_min_priority(self, min_priority: u8) -> Self {
        self.with(by_min_priority(min_priority))
    }

    /// Add a [`by_owner`] criterion.
    pub fn with_owner(self, owner: &str) -> Self {
        self.with(by_owner(owner))
    }

    /// Add a [`by_max_cpu`] criterion.
    pub fn with_max_cpu(self, max_cpu: f64) -> Self {
        self.with(by_max_cpu(max_cpu))
    }

    /// Add a [`by_min_memory`] criterion.
    pub fn with_min_memory(self, min_memory: u64) -> Self {
        self.with(by_min_memory(min_memory))
    }
}

/// Processes whose status is `running`.
pub fn running() -> Specification<Process> {
    Specification::new(by_status("running"))
}

/// Processes at or above [`HIGH_PRIORITY`].
pub fn high_priority() -> Specification<Process> {
    Specification::new(by_min_priority(HIGH_PRIORITY))
}

/// Processes owned by `owner`.
pub fn owned_by(owner: &str) -> Specification<Process> {
    Specification::new(by_owner(owner))
}

/// In-memory process table.
#[derive(Debug, Clone, Default)]
pub struct ProcessManager {
    processes: Vec<Process>,
}

impl ProcessManager {
    /// Wrap an existing process list.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// The six-process demo table.
    pub fn sample() -> Self {
        let rows = [
            (1, "Go", "running", 5, "user1", 25.5, 1024),
            (2, "Python", "running", 3, "user2", 15.2, 2048),
            (3, "C++", "stopped", 7, "user1", 0.0, 512),
            (4, "Java", "running", 4, "user3", 45.8, 4096),
            (5, "Rust", "running", 6, "user1", 10.3, 1536),
            (6, "Node", "stopped", 2, "user2", 0.0, 768),
        ];
        Self::new(
            rows.into_iter()
                .map(|(id, title, status, priority, owner, cpu_usage, memory)| Process {
                    id,
                    title: title.to_string(),
                    status: status.to_string(),
                    priority,
                    owner: owner.to_string(),
                    cpu_usage,
                    memory,
                })
                .collect(),
        )
    }

    /// Processes matching `predicate`, in table order.
    pub fn find<P>(&self, predicate: &P) -> Vec<&Process>
    where
        P: Predicate<Process> + ?Sized,
    {
        let hits = filter_ref(&self.processes, predicate);
        tracing::debug!(
            scanned = self.processes.len(),
            matched = hits.len(),
            "process query"
        );
        hits
    }

    /// Every process, in table order.
    pub fn all(&self) -> &[Process] {
        &self.processes
    }
}
