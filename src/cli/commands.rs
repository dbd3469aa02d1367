use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::config::ClientConfig;
use crate::errors::GptsResult;
use crate::openai::OpenAIClient;

pub async fn execute_command(cli: &Cli) -> GptsResult<()> {
    match &cli.command {
        Commands::Upload { file, new_name } => _upload(cli, file, new_name.as_deref()).await,
        Commands::List => _list(cli).await,
        Commands::Delete { file_id } => _delete(cli, file_id).await,
        Commands::Completion { shell } => {
            _completion(*shell);
            Ok(())
        }
    }
}

fn _client(cli: &Cli) -> GptsResult<(OpenAIClient, ClientConfig)> {
    let config = cli.client_config()?;
    debug!(?config, "client config");
    let client = OpenAIClient::new(&config)?;
    Ok((client, config))
}

#[instrument(skip(cli))]
async fn _upload(cli: &Cli, file: &Path, new_name: Option<&str>) -> GptsResult<()> {
    let (client, config) = _client(cli)?;
    let record = client.upload(file, &config.assistant_id, new_name).await?;
    output::success(&format!("File uploaded successfully: {}", record.id));
    Ok(())
}

#[instrument(skip(cli))]
async fn _list(cli: &Cli) -> GptsResult<()> {
    let (client, config) = _client(cli)?;
    let files = client.list(&config.assistant_id).await?;
    debug!(count = files.data.len(), "listed files");
    output::info(&output::render_table(&files.data));
    Ok(())
}

#[instrument(skip(cli))]
async fn _delete(cli: &Cli, file_id: &str) -> GptsResult<()> {
    let (client, config) = _client(cli)?;
    client.delete(file_id, &config.assistant_id).await?;
    output::success("File deleted successfully");
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
