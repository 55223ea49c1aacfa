//! Resize subscription bookkeeping.
//!
//! Each mounted pane holds one token; a pane with no token never receives
//! width updates. Tokens are released at dispose, so a zero active count
//! after teardown proves nothing leaked.

/// Subscription handle for one pane. Released explicitly; not cloneable.
#[derive(Debug, PartialEq, Eq)]
pub struct ResizeToken(usize);

/// Tracks which panes are subscribed to viewport resizes.
#[derive(Debug, Default)]
pub struct ResizeHub {
    next_id: usize,
    active: Vec<usize>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    pub fn register(&mut self) -> ResizeToken {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(id);
        ResizeToken(id)
    }

    /// Releases a subscription. Consuming the token makes double-release
    /// unrepresentable.
    pub fn release(&mut self, token: ResizeToken) {
        self.active.retain(|&id| id != token.0);
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
