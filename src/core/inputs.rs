//! Validated step inputs.
//!
//! Raw environment strings are validated exactly once into an immutable
//! `Inputs` value, which is then threaded through the rest of the pipeline.
//! The two enumerated fields get real types; everything else is free text.

use std::fmt;
use std::str::FromStr;

use crate::core::secret::Secret;
use crate::error::Error;

/// Build configuration the generated settings are keyed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    Release,
    Debug,
}

impl Configuration {
    pub const OPTIONS: &'static str = "release, debug";

    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Release => "release",
            Configuration::Debug => "debug",
        }
    }
}

impl FromStr for Configuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(Configuration::Release),
            "debug" => Ok(Configuration::Debug),
            _ => Err(Error::InvalidInput {
                field: "configuration",
                value: s.to_string(),
                options: Self::OPTIONS,
            }),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// iOS distribution channel. `None` disables the iOS section entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    None,
    Development,
    Enterprise,
    AdHoc,
    AppStore,
}

impl PackageType {
    pub const OPTIONS: &'static str = "none, development, enterprise, ad-hoc, app-store";

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::None => "none",
            PackageType::Development => "development",
            PackageType::Enterprise => "enterprise",
            PackageType::AdHoc => "ad-hoc",
            PackageType::AppStore => "app-store",
        }
    }
}

impl FromStr for PackageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PackageType::None),
            "development" => Ok(PackageType::Development),
            "enterprise" => Ok(PackageType::Enterprise),
            "ad-hoc" => Ok(PackageType::AdHoc),
            "app-store" => Ok(PackageType::AppStore),
            _ => Err(Error::InvalidInput {
                field: "package_type",
                value: s.to_string(),
                options: Self::OPTIONS,
            }),
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full, validated input set for one run.
///
/// Constructed once before any I/O; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub configuration: Configuration,

    pub development_team: String,
    pub code_sign_identity: String,
    pub provisioning_profile: String,
    pub package_type: PackageType,

    pub keystore_url: String,
    pub keystore_password: Secret,
    pub keystore_alias: String,
    pub private_key_password: Secret,
}
