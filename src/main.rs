use anyhow::Result;
use std::env;

use party_intake::{
    HttpDocumentStoreFactory, IntakeConfig, Orchestrator, SaveOutcome, SidecarStateStore,
    VaultClient,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    println!("📇 Party Intake - validate and persist the sample records");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Config comes from an optional JSON file path argument
    let mut config = match args.get(1) {
        Some(path) => IntakeConfig::from_file(path)?,
        None => IntakeConfig::default(),
    };

    // The vault token may come from the environment when the config file
    // leaves it empty
    if let Some(export) = config.export.as_mut() {
        if export.vault_token.is_empty() {
            export.vault_token = env::var("PARTY_VAULT_TOKEN").unwrap_or_default();
        }
    }

    let vault_token = config
        .export
        .as_ref()
        .map(|e| e.vault_token.clone())
        .unwrap_or_default();
    let export_enabled = config.export.is_some();

    println!("\n💾 Saving records via {}...", config.state_store.base_url);

    let state = SidecarStateStore::new(config.state_store.base_url.clone());
    let secrets = VaultClient::new(vault_token);

    let orchestrator = Orchestrator::new(
        config,
        Box::new(state),
        Box::new(secrets),
        Box::new(HttpDocumentStoreFactory),
    );

    let report = orchestrator.run()?;

    for outcome in &report.outcomes {
        match outcome {
            SaveOutcome::Saved { key } => {
                println!("✓ Data saved for key {} in the state store", key);
            }
            SaveOutcome::Rejected { kind, errors } => {
                println!("✗ Invalid {} data - skipped", kind);
                for error in errors {
                    println!("  - {}", error);
                }
            }
        }
    }

    if export_enabled {
        println!("\n📬 Exported {} record(s) to the document store", report.exported);
    }

    println!("\n✅ Intake run complete");

    Ok(())
}
