//! Deferred Tasks
//!
//! Zero-delay task queue standing in for `setTimeout(fn, 0)`. Focus moves
//! are queued here so attribute writes commit before focus lands.

use std::collections::VecDeque;

use fos_dom::NodeId;

/// Deferred work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Move keyboard focus to an element
    Focus(NodeId),
}

/// FIFO of tasks waiting for the next turn of the event loop
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task for the next turn
    pub fn defer(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Queue a focus move for the next turn
    pub fn defer_focus(&mut self, target: NodeId) {
        self.defer(Task::Focus(target));
    }

    /// Take everything queued so far. Tasks queued while these run wait for
    /// the following turn.
    pub fn take_turn(&mut self) -> Vec<Task> {
        self.tasks.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
