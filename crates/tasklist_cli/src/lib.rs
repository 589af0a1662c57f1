pub mod cli;
pub mod i18n;
pub mod render;
pub mod session;
