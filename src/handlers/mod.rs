pub mod api;
pub mod presenter;
pub mod viewer;
