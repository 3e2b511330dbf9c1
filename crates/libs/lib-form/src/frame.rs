//! # Deferred Frame Work
//!
//! Focus transfer after a segment switch and selection restore after a password
//! toggle must run on the next animation frame: doing them inside the click
//! handler loses against the browser's default click handling.
//!
//! The controller only *queues* [`FrameTask`]s. The host decides when the next
//! frame happens (`requestAnimationFrame` in the browser, an explicit call in
//! tests) and then drains the queue.

use crate::host::{FormHost, SelectionRange};

#[derive(Debug, Clone, PartialEq)]
pub enum FrameTask<E> {
    Focus(E),
    RestoreSelection { input: E, range: SelectionRange },
}

impl<E> FrameTask<E> {
    pub fn apply<H: FormHost<Element = E>>(&self, host: &H) {
        match self {
            FrameTask::Focus(element) => host.focus(element),
            FrameTask::RestoreSelection { input, range } => host.set_selection(input, *range),
        }
    }
}

/// Pending frame work plus a flag telling whether a frame was already requested.
#[derive(Debug)]
pub struct FrameQueue<E> {
    tasks: Vec<FrameTask<E>>,
    requested: bool,
}

impl<E> Default for FrameQueue<E> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            requested: false,
        }
    }
}

impl<E> FrameQueue<E> {
    pub fn push(&mut self, task: FrameTask<E>) {
        self.tasks.push(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[FrameTask<E>] {
        &self.tasks
    }

    /// Returns `true` once per batch: when work is pending and no frame has been
    /// requested for it yet.
    pub fn take_request(&mut self) -> bool {
        if self.tasks.is_empty() || self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Remove all pending tasks and re-arm the request flag.
    pub fn drain(&mut self) -> Vec<FrameTask<E>> {
        self.requested = false;
        std::mem::take(&mut self.tasks)
    }
}
