pub mod event;
pub mod protocol;
