pub mod settings;
pub mod sync;
pub mod views;
