// UI Components
pub mod card;
pub mod command_bar;
pub mod fallback;
pub mod footer;
pub mod header;
pub mod spinner;
pub mod warning;

// Re-export components for convenience
pub use card::{card, grid};
pub use command_bar::CommandBar;
pub use fallback::FallbackPanel;
pub use footer::Footer;
pub use header::Header;
pub use spinner::Spinner;
pub use warning::WarningScreen;
