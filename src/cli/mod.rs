//! Command-line interface.
//!
//! The step does exactly one thing per invocation, so there are no
//! subcommands: every input is a flag with an environment-variable binding
//! matching the names the surrounding pipeline sets.

pub mod output;

use clap::Parser;
use tracing::info;

use crate::core::inputs::Inputs;
use crate::core::secret::Secret;
use crate::core::{document, keystore, publish};
use crate::error::Result;

/// Generate a Cordova build config (build.json) from signing inputs.
#[derive(Parser)]
#[command(
    name = "cordova-build-config",
    about = "Generates a Cordova build.json from Android keystore and iOS code-signing inputs",
    version
)]
pub struct Cli {
    /// Build configuration to generate settings for (release or debug)
    #[arg(long, env = "configuration", default_value = "")]
    pub configuration: String,

    /// iOS development team identifier
    #[arg(long, env = "development_team", default_value = "")]
    pub development_team: String,

    /// iOS code-sign identity
    #[arg(long, env = "code_sign_identity", default_value = "")]
    pub code_sign_identity: String,

    /// iOS provisioning profile
    #[arg(long, env = "provisioning_profile", default_value = "")]
    pub provisioning_profile: String,

    /// iOS distribution channel; `none` disables the iOS section
    #[arg(long, env = "package_type", default_value = "")]
    pub package_type: String,

    /// Keystore location: file:// path or remote URL; empty disables Android
    #[arg(long, env = "keystore_url", default_value = "")]
    pub keystore_url: String,

    /// Android keystore (store) password
    #[arg(long, env = "keystore_password", default_value = "", hide_env_values = true)]
    pub keystore_password: Secret,

    /// Android keystore alias
    #[arg(long, env = "keystore_alias", default_value = "")]
    pub keystore_alias: String,

    /// Android private key password
    #[arg(long, env = "private_key_password", default_value = "", hide_env_values = true)]
    pub private_key_password: Secret,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the raw inputs into the typed, immutable input set.
    ///
    /// This is the validation gate: it runs before any filesystem or
    /// network I/O so malformed input fails fast.
    pub fn into_inputs(self) -> Result<Inputs> {
        Ok(Inputs {
            configuration: self.configuration.parse()?,
            development_team: self.development_team,
            code_sign_identity: self.code_sign_identity,
            provisioning_profile: self.provisioning_profile,
            package_type: self.package_type.parse()?,
            keystore_url: self.keystore_url,
            keystore_password: self.keystore_password,
            keystore_alias: self.keystore_alias,
            private_key_password: self.private_key_password,
        })
    }
}

/// Run the whole generation pipeline: validate, resolve the keystore,
/// assemble, display the redacted view, persist, publish.
pub fn execute(cli: Cli) -> Result<()> {
    let inputs = cli.into_inputs()?;
    print_inputs(&inputs);

    // Created once, shared by the keystore download and the artifact write.
    // Kept past process exit: later pipeline stages read the artifact path.
    let scratch_dir = tempfile::Builder::new()
        .prefix("__cordova-build-config__")
        .tempdir()?
        .keep();
    info!("scratch directory: {}", scratch_dir.display());

    let keystore_path = if inputs.keystore_url.is_empty() {
        None
    } else {
        output::section("android build config");
        let path = keystore::resolve(&inputs.keystore_url, &scratch_dir)?;
        output::kv("keystore", path.display());
        Some(path)
    };

    let document = document::assemble(&inputs, keystore_path.as_deref());
    if document.is_empty() {
        output::warn("no ios or android build config inputs set, nothing to generate");
        return Ok(());
    }

    output::section("generating config file");
    // Display goes through the redacted projection; the artifact on disk
    // keeps the literal credentials for the downstream build tool.
    let rendered = serde_json::to_string_pretty(&document.redacted())?;
    println!("{}", rendered);

    let artifact_path = publish::write_document(&document, &scratch_dir)?;
    publish::export_output(publish::OUTPUT_KEY, &artifact_path.display().to_string())?;

    println!();
    output::success(&format!(
        "the build.json path is now available in {} (value: {})",
        publish::OUTPUT_KEY,
        artifact_path.display()
    ));

    Ok(())
}

/// Echo the received inputs, with secret-classified fields masked.
fn print_inputs(inputs: &Inputs) {
    output::header("configs:");
    output::kv("configuration", inputs.configuration);

    output::section("ios signing configs:");
    output::kv("development_team", &inputs.development_team);
    output::kv("code_sign_identity", &inputs.code_sign_identity);
    output::kv("provisioning_profile", &inputs.provisioning_profile);
    output::kv("package_type", inputs.package_type);

    output::section("android signing configs:");
    output::kv("keystore_url", &inputs.keystore_url);
    output::kv("keystore_password", &inputs.keystore_password);
    output::kv("keystore_alias", &inputs.keystore_alias);
    output::kv("private_key_password", &inputs.private_key_password);
}
