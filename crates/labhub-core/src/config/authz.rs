//! Authorization configuration.
//!
//! Group names and public path prefixes consumed by the document access
//! gate. These are injected explicitly instead of being read from
//! process-wide settings so that deployments can rename the special
//! groups without code changes.

use serde::{Deserialize, Serialize};

/// Authorization and document gating configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Path prefixes under the media root that are readable by any
    /// authenticated user.
    #[serde(default = "default_public_prefixes")]
    pub public_prefixes: Vec<String>,
    /// Name of the permission group whose members can read every document.
    #[serde(default = "default_human_resources_group")]
    pub human_resources_group: String,
    /// Name of the permission group whose members can read every order
    /// attachment.
    #[serde(default = "default_all_orders_group")]
    pub all_orders_group: String,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            public_prefixes: default_public_prefixes(),
            human_resources_group: default_human_resources_group(),
            all_orders_group: default_all_orders_group(),
        }
    }
}

fn default_public_prefixes() -> Vec<String> {
    [
        "cache",
        "uploads/image",
        "uploads/person/person_img",
        "uploads/group/group_img",
        "uploads/publication/publication_file",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_human_resources_group() -> String {
    "PROFILE: Human Resources".to_string()
}

fn default_all_orders_group() -> String {
    "PROFILE: All Orders".to_string()
}
