//! Small declarative view layer: build a [`Node`] tree, render it with
//! [`to_html`]. Nothing here interpolates raw markup.

pub mod node;
pub mod render;

pub use node::*;
pub use render::*;
