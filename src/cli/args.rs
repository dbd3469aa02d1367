//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::{ClientConfig, ENV_API_KEY, ENV_BASE_URL, ENV_GPTS_ID, ENV_TIMEOUT};
use crate::errors::GptsResult;

/// Manage files for OpenAI GPTs
#[derive(Parser, Debug)]
#[command(name = "gpts-files")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// OpenAI API key
    #[arg(long, env = ENV_API_KEY, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// OpenAI GPTs ID
    #[arg(long, env = ENV_GPTS_ID, global = true)]
    pub gpts_id: Option<String>,

    /// API root (default: https://api.openai.com/v1)
    #[arg(long, env = ENV_BASE_URL, value_hint = ValueHint::Url, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: 60)
    #[arg(
        long,
        env = ENV_TIMEOUT,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a file to a GPTs
    Upload {
        /// Local file to upload
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// New filename for the upload (optional)
        #[arg(short = 'n', long)]
        new_name: Option<String>,
    },

    /// List all files attached to a GPTs [alias: ls]
    #[command(alias = "ls")]
    List,

    /// Remove a file from a GPTs [alias: rm]
    #[command(alias = "rm")]
    Delete {
        /// ID of the file to remove
        file_id: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn client_config(&self) -> GptsResult<ClientConfig> {
        ClientConfig::new(
            self.api_key.clone(),
            self.gpts_id.clone(),
            self.base_url.clone(),
            self.timeout,
        )
    }
}
