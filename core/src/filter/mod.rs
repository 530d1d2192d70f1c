pub mod depth;

pub use depth::{DepthFilter, DEFAULT_MIN_DEPTH_M};
