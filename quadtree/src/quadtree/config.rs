use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Objects a leaf may hold before the next insertion into it splits it.
    /// A soft target: leaves pinned at `depth_limit` grow past it.
    pub node_capacity: usize,
    /// Deepest level a node may be created at. The root is depth 0.
    pub depth_limit: usize,
    /// Generations built eagerly at construction, clamped to
    /// `1..=depth_limit`.
    pub initial_levels: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 8,
            depth_limit: 6,
            initial_levels: 1,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity {
                node_capacity: self.node_capacity,
            });
        }
        if self.depth_limit == 0 {
            return Err(QuadtreeError::InvalidDepthLimit {
                depth_limit: self.depth_limit,
            });
        }
        Ok(())
    }

    pub(crate) fn initial_levels(&self) -> usize {
        self.initial_levels.clamp(1, self.depth_limit)
    }
}

pub(crate) fn validate_bounds(rect: &Rectangle) -> QuadtreeResult<()> {
    if !rect.x.is_finite() || !rect.y.is_finite() {
        return Err(QuadtreeError::InvalidRectanglePosition {
            x: rect.x,
            y: rect.y,
        });
    }
    if !rect.width.is_finite() || !rect.height.is_finite() || rect.width <= 0.0 || rect.height <= 0.0
    {
        return Err(QuadtreeError::InvalidRectangleDims {
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}
