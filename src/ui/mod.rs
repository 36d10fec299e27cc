// UI Layer
pub mod components;
pub mod layout;
pub mod pages;
pub mod renderer;
pub mod theme;

// Re-export app-facing types for convenience
pub use layout::LayoutManager;
pub use theme::{DisplayMode, ThemeManager};
