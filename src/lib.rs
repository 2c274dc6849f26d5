#![doc = "vector-upload: upload a local document to OpenAI and add it to a vector store."]

//! The binary is a thin wrapper over [`cli::run`]. The [`contract::Uploader`] trait
//! separates the upload-and-register sequence in [`register`] from the HTTP client
//! in [`upload`], so the sequence can be tested against a mock.

pub mod cli;
pub mod contract;
pub mod load_config;
pub mod register;
pub mod upload;

pub use cli::{run, Cli};
