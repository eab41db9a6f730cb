pub mod cipher;
pub mod history;
