//! Event queue for coalescing view updates.
//!
//! Inputs arrive faster than panes are worth rebuilding. Events are queued
//! and drained in one pass; the drain keeps only the latest input snapshot
//! so stale rebuilds never run.

use std::collections::VecDeque;

use crate::inputs::ChartInputs;

/// Events a chart view reacts to.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A new input snapshot replaces the current one.
    InputsChanged(ChartInputs),
    /// The display region's width changed.
    ViewportResized,
    /// The view is going away.
    Unmount,
}

/// FIFO queue of pending view events.
#[derive(Debug, Default)]
pub struct ViewEventBus {
    events: VecDeque<ViewEvent>,
}

/// One drained batch, collapsed to the work actually worth doing.
#[derive(Debug, Default)]
pub struct DrainedBatch {
    /// Latest input snapshot in the batch, if any arrived.
    pub inputs: Option<ChartInputs>,
    pub resized: bool,
    pub unmount: bool,
}

impl ViewEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: ViewEvent) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Drains every pending event into a coalesced batch. Later input
    /// snapshots supersede earlier ones; an unmount supersedes everything
    /// after it would have run anyway.
    pub fn drain(&mut self) -> DrainedBatch {
        let mut batch = DrainedBatch::default();
        for event in self.events.drain(..) {
            match event {
                ViewEvent::InputsChanged(inputs) => batch.inputs = Some(inputs),
                ViewEvent::ViewportResized => batch.resized = true,
                ViewEvent::Unmount => batch.unmount = true,
            }
        }
        batch
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
