use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims { width: f32, height: f32 },
    InvalidRectanglePosition { x: f32, y: f32 },
    InvalidCapacity { node_capacity: usize },
    InvalidDepthLimit { depth_limit: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "quadtree bounds width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
            QuadtreeError::InvalidRectanglePosition { x, y } => {
                write!(
                    f,
                    "quadtree bounds centre must be finite (x: {}, y: {})",
                    x, y
                )
            }
            QuadtreeError::InvalidCapacity { node_capacity } => {
                write!(
                    f,
                    "node capacity must be at least 1 (node_capacity: {})",
                    node_capacity
                )
            }
            QuadtreeError::InvalidDepthLimit { depth_limit } => {
                write!(
                    f,
                    "depth limit must be at least 1 since the root always subdivides (depth_limit: {})",
                    depth_limit
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
