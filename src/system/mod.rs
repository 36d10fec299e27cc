// System Layer
pub mod host;
pub mod logging;
pub mod storage;

pub use host::{preferred_color_scheme, EnvironmentInfo};
pub use logging::{init_logging, install_panic_hook};
pub use storage::{MemoryStore, PreferenceStore, TomlFileStore};
