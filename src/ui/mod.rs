//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw.rs` - Screen layout and alert overlay
//! - `theme.rs` - Light/dark palettes and presets
//! - `scroll.rs` - Assignment list viewport
//! - `widgets.rs` - Text field, button and switch widgets

mod draw;
pub mod scroll;
pub mod theme;
pub mod widgets;

// Re-export main draw function
pub use draw::draw;
