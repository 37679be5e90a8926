//! Build configuration document.
//!
//! The central artifact: an `android` and/or `ios` section, each keyed by
//! the single build configuration name. Assembly is a pure function of the
//! validated inputs; redaction is a pure projection to a display-only view.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::core::inputs::{Inputs, PackageType};
use crate::core::secret::Secret;

/// Android signing settings for one build configuration.
///
/// Empty fields are omitted from the serialized document.
#[derive(Debug, Clone, Serialize)]
pub struct AndroidItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keystore: String,
    #[serde(rename = "storePassword", skip_serializing_if = "Secret::is_empty")]
    pub store_password: Secret,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub password: Secret,
}

/// iOS code-signing settings for one build configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IosItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code_sign_identity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provisioning_profile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub development_team: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub package_type: String,
}

/// The assembled build configuration document, serialized as `build.json`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<BTreeMap<String, AndroidItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<BTreeMap<String, IosItem>>,
}

impl BuildConfiguration {
    /// True when neither section was produced — the "nothing to generate"
    /// short-circuit.
    pub fn is_empty(&self) -> bool {
        self.android.is_none() && self.ios.is_none()
    }

    /// Project to the display-only view with credential fields masked.
    pub fn redacted(&self) -> RedactedView {
        RedactedView {
            android: self.android.as_ref().map(|section| {
                section
                    .iter()
                    .map(|(name, item)| {
                        (
                            name.clone(),
                            RedactedAndroidItem {
                                keystore: item.keystore.clone(),
                                store_password: item.store_password.masked().to_string(),
                                alias: item.alias.clone(),
                                password: item.password.masked().to_string(),
                            },
                        )
                    })
                    .collect()
            }),
            ios: self.ios.clone(),
        }
    }
}

/// Secret-safe rendering of the document, only ever written to log output.
///
/// Structurally identical to [`BuildConfiguration`] except that the two
/// Android password fields carry the mask token. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RedactedView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<BTreeMap<String, RedactedAndroidItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<BTreeMap<String, IosItem>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedactedAndroidItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keystore: String,
    #[serde(rename = "storePassword", skip_serializing_if = "String::is_empty")]
    pub store_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

/// Assemble the document from validated inputs.
///
/// The Android section is produced iff a resolved keystore path is supplied;
/// the iOS section iff the package type is not `none`. Both land under the
/// single configuration name. Credential fields pass through verbatim.
pub fn assemble(inputs: &Inputs, keystore_path: Option<&Path>) -> BuildConfiguration {
    let mut document = BuildConfiguration::default();
    let name = inputs.configuration.as_str().to_string();

    if let Some(path) = keystore_path {
        let item = AndroidItem {
            keystore: path.display().to_string(),
            store_password: inputs.keystore_password.clone(),
            alias: inputs.keystore_alias.clone(),
            password: inputs.private_key_password.clone(),
        };
        document.android = Some(BTreeMap::from([(name.clone(), item)]));
    }

    if inputs.package_type != PackageType::None {
        let item = IosItem {
            code_sign_identity: inputs.code_sign_identity.clone(),
            provisioning_profile: inputs.provisioning_profile.clone(),
            development_team: inputs.development_team.clone(),
            package_type: inputs.package_type.as_str().to_string(),
        };
        document.ios = Some(BTreeMap::from([(name, item)]));
    }

    document
}
