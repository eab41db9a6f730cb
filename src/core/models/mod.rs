pub mod cipher_spec;
pub mod operation;
