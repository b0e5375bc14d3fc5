use crate::graph::entity::{nullable, Entity};
use serde::{Deserialize, Serialize};

/// A directory user.
///
/// Every field is optional on the wire; absent keys and `null` decode to the
/// field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub account_enabled: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub assigned_licenses: Vec<AssignedLicense>,
    #[serde(deserialize_with = "nullable")]
    pub assigned_plans: Vec<AssignedPlan>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub creation_type: Option<String>,
    pub deletion_timestamp: Option<String>,
    pub department: Option<String>,
    pub dir_sync_enabled: Option<bool>,
    pub display_name: Option<String>,
    pub facsimile_telephone_number: Option<String>,
    pub given_name: Option<String>,
    pub immutable_id: Option<String>,
    pub job_title: Option<String>,
    pub last_dir_sync_time: Option<String>,
    pub mail: Option<String>,
    pub mail_nickname: Option<String>,
    pub mobile: Option<String>,
    pub object_id: Option<String>,
    pub object_type: Option<String>,
    pub on_premises_security_identifier: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub other_mails: Vec<String>,
    pub password_policies: Option<String>,
    pub password_profile: Option<PasswordProfile>,
    pub physical_delivery_office_name: Option<String>,
    pub postal_code: Option<String>,
    pub preferred_language: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub provisioned_plans: Vec<ProvisionedPlan>,
    #[serde(deserialize_with = "nullable")]
    pub provisioning_errors: Vec<ProvisioningError>,
    #[serde(deserialize_with = "nullable")]
    pub proxy_addresses: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub sign_in_names: Vec<SignInName>,
    pub sip_proxy_address: Option<String>,
    pub state: Option<String>,
    pub street_address: Option<String>,
    pub surname: Option<String>,
    pub telephone_number: Option<String>,
    pub thumbnail_photo: Option<String>,
    pub usage_location: Option<String>,
    pub user_principal_name: Option<String>,
    pub user_type: Option<String>,
}

impl Entity for User {
    const RESOURCE: &'static str = "users";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignedLicense {
    #[serde(deserialize_with = "nullable")]
    pub disabled_plans: Vec<String>,
    pub sku_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignedPlan {
    pub assigned_timestamp: Option<String>,
    pub capability_status: Option<String>,
    pub service: Option<String>,
    pub service_plan_id: Option<String>,
}

/// Only ever populated on writes; reads return it empty or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordProfile {
    pub password: Option<String>,
    pub force_change_password_next_login: Option<bool>,
    pub enforce_change_password_policy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvisionedPlan {
    pub capability_status: Option<String>,
    pub provisioning_status: Option<String>,
    pub service: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvisioningError {
    pub error_detail: Option<String>,
    pub resolved: Option<bool>,
    pub service: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInName {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
}
