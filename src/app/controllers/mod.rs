pub(super) mod page_controller;
pub(super) mod recovery_controller;
