//! Display-region seam.
//!
//! The embedder owns the real display resource (a window area, a canvas, a
//! widget slot); a pane only queries it synchronously. Exactly one pane set
//! binds to a region at a time, enforced by ownership in the view layer.

/// A rectangular host area a pane binds to.
pub trait DisplayRegion {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Whether the region is still part of a live display tree.
    ///
    /// Teardown against a detached region must stay silent; panes check
    /// this before releasing display-side resources.
    fn is_attached(&self) -> bool {
        true
    }
}

/// A fixed-size region, for embedders without dynamic layout and for tests.
#[derive(Debug, Clone)]
pub struct FixedRegion {
    pub width: u32,
    pub attached: bool,
}

impl FixedRegion {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            attached: true,
        }
    }
}

impl DisplayRegion for FixedRegion {
    fn width(&self) -> u32 {
        self.width
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
