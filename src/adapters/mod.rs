pub mod ciphers;
pub mod history;
