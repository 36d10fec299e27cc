// Core Layer
pub mod actions;
pub mod boundary;
