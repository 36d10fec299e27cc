// Data Models
pub mod auth;
pub mod farm;
pub mod loading;
pub mod marketplace;
pub mod page;
pub mod polyhouse;
pub mod text_input;

pub use auth::{AuthField, AuthForm, AuthTab};
pub use loading::{LoadingIndicator, LoadingTask};
pub use marketplace::MarketState;
pub use page::{Page, PageStates};
pub use polyhouse::{ControlKind, PolyhouseState};
pub use text_input::TextInput;
