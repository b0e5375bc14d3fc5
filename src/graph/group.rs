use crate::graph::{
    entity::{nullable, Entity},
    user::ProvisioningError,
};
use serde::{Deserialize, Serialize};

/// A directory group (security or mail enabled).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub object_id: Option<String>,
    pub object_type: Option<String>,
    pub deletion_timestamp: Option<String>,
    pub description: Option<String>,
    pub dir_sync_enabled: Option<bool>,
    pub display_name: Option<String>,
    pub last_dir_sync_time: Option<String>,
    pub mail: Option<String>,
    pub mail_enabled: Option<bool>,
    pub mail_nickname: Option<String>,
    pub on_premises_security_identifier: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub provisioning_errors: Vec<ProvisioningError>,
    #[serde(deserialize_with = "nullable")]
    pub proxy_addresses: Vec<String>,
    pub security_enabled: Option<bool>,
}

impl Entity for Group {
    const RESOURCE: &'static str = "groups";
}
