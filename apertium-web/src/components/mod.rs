pub mod footer;
pub mod modal;
