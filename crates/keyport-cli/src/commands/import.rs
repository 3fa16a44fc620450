use anyhow::Context;
use clap::Args;
use colored::Colorize;
use keyport_import::{ImportOrchestrator, ImportPayloadResult};
use keyport_import_cxf::CxfPayloadDecoder;
use keyport_import_types::UserId;
use keyport_vault_client::{
    HttpBulkUploadService, HttpSyncEngine, VaultApiClient, VaultClientConfig,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Args)]
pub struct ImportCommand {
    /// Vault account id the access token belongs to
    #[arg(long)]
    pub user_id: String,

    /// Credential exchange payload file, or `-` to read from stdin
    #[arg(long)]
    pub payload_file: PathBuf,

    /// Vault API base URL
    #[arg(long, env = "KEYPORT_SERVER_URL")]
    pub server_url: String,

    /// Vault API access token
    #[arg(long, env = "KEYPORT_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", env = "KEYPORT_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

/// Read the payload from a file, or from stdin when the path is `-`
pub(crate) fn read_payload(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .context("Failed to read payload from stdin")?;
        return Ok(payload);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file {}", path.display()))
}

/// Process exit code for an import outcome
pub(crate) fn exit_code(result: &ImportPayloadResult) -> i32 {
    match result {
        ImportPayloadResult::Success | ImportPayloadResult::NoItems => 0,
        ImportPayloadResult::Error(_) => 1,
        ImportPayloadResult::SyncFailed(_) => 2,
    }
}

fn print_result(result: &ImportPayloadResult) {
    match result {
        ImportPayloadResult::Success => {
            println!("{} {}", "✅".green(), result.to_string().bright_green())
        }
        ImportPayloadResult::NoItems => println!("{}", result.to_string().bright_white()),
        ImportPayloadResult::SyncFailed(_) => {
            println!("{}", result.to_string().bright_yellow());
            println!(
                "{}",
                "Your items are stored in the vault. Refresh to see them.".bright_white()
            );
        }
        ImportPayloadResult::Error(_) => eprintln!("{}", result.to_string().bright_red()),
    }
}

impl ImportCommand {
    pub fn execute(self) -> anyhow::Result<i32> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            anyhow::bail!("--user-id must not be empty");
        }
        let user_id = UserId::new(user_id);

        let payload = read_payload(&self.payload_file)?;
        debug!("Read {} byte payload", payload.len());

        let mut config = VaultClientConfig::new(self.server_url, self.access_token);
        config.timeout_secs = self.timeout_secs;
        let api = VaultApiClient::new(config).context("Invalid vault configuration")?;

        let orchestrator = ImportOrchestrator::new(
            Arc::new(CxfPayloadDecoder::new()),
            Arc::new(HttpBulkUploadService::new(api.clone())),
            Arc::new(HttpSyncEngine::new(api)),
        );

        info!("Importing credentials for {}", user_id);
        let rt = tokio::runtime::Runtime::new()?;
        let result = rt.block_on(orchestrator.import_payload(&user_id, payload));

        print_result(&result);
        Ok(exit_code(&result))
    }
}
