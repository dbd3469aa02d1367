//! gpts-files: upload, list and delete the files attached to an OpenAI GPT
//! assistant.
//!
//! [`openai::OpenAIClient`] wraps the three API operations and is usable on
//! its own; [`cli`] holds the command-line front end built on top of it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod openai;

pub use config::ClientConfig;
pub use errors::{GptsError, GptsResult};
pub use openai::{FileList, FileRecord, OpenAIClient};
