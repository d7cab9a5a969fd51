//! Rendering collaborators
//!
//! The simulation only exposes `Drawable` records. Renderers live here and
//! never mutate the session.

pub mod ascii;

pub use ascii::render;
