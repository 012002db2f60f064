//! Geometry for the overprint diagram
//!
//! This module handles the geometric calculations behind the drawing:
//! - Layout planning (page size, disk centers, shared radius)
//! - Circle approximation with four cubic Bezier curves

mod bezier;
mod layout;
mod types;

pub use bezier::*;
pub use layout::*;
pub use types::*;
