pub mod decrypt;
pub mod encrypt;
pub mod history_helpers;
pub mod list;
pub mod log;
pub mod transform_helpers;
