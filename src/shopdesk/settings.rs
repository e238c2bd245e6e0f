//! Profile, account, security, and company records.
//!
//! Each record has an environment-seeded default (`SHOPDESK_*` variables,
//! read once at first use) and a storage-backed override. Loading goes
//! through [`crate::store::StoreAdapter::load_record`], so a load always
//! yields a complete record regardless of how partial the stored blob is.

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShopdeskError};

fn env_str(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn env_bool(key: &str, fallback: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => value.eq_ignore_ascii_case("true"),
        Err(_) => fallback,
    }
}

fn env_u32(key: &str, fallback: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
}

static DEFAULT_PROFILE: Lazy<ProfileData> = Lazy::new(|| ProfileData {
    first_name: env_str("SHOPDESK_PROFILE_FIRST_NAME", "Guy"),
    last_name: env_str("SHOPDESK_PROFILE_LAST_NAME", "Hawkins"),
    email: env_str("SHOPDESK_PROFILE_EMAIL", "guy.hawkins@example.com"),
    phone: env_str("SHOPDESK_PROFILE_PHONE", "+1 (555) 123-4567"),
    location: env_str("SHOPDESK_PROFILE_LOCATION", "New York, NY"),
    bio: env_str(
        "SHOPDESK_PROFILE_BIO",
        "E-commerce business owner with 5+ years of experience in online retail.",
    ),
    avatar: env_str("SHOPDESK_PROFILE_AVATAR", "https://via.placeholder.com/120x120"),
});

impl Default for ProfileData {
    fn default() -> Self {
        DEFAULT_PROFILE.clone()
    }
}

impl ProfileData {
    /// All violated fields, empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("Last name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.push("Email format is invalid".to_string());
        }
        if self.phone.trim().is_empty() {
            errors.push("Phone number is required".to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub marketing_emails: bool,
    pub two_factor_auth: bool,
    pub public_profile: bool,
}

static DEFAULT_ACCOUNT: Lazy<AccountSettings> = Lazy::new(|| AccountSettings {
    email_notifications: env_bool("SHOPDESK_ACCOUNT_EMAIL_NOTIFICATIONS", true),
    sms_notifications: env_bool("SHOPDESK_ACCOUNT_SMS_NOTIFICATIONS", false),
    marketing_emails: env_bool("SHOPDESK_ACCOUNT_MARKETING_EMAILS", true),
    two_factor_auth: env_bool("SHOPDESK_ACCOUNT_TWO_FACTOR_AUTH", false),
    public_profile: env_bool("SHOPDESK_ACCOUNT_PUBLIC_PROFILE", true),
});

impl Default for AccountSettings {
    fn default() -> Self {
        DEFAULT_ACCOUNT.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub session_timeout: u32,
    pub password_min_length: u32,
    #[serde(rename = "require2FA")]
    pub require_2fa: bool,
    pub two_factor_auth: bool,
}

static DEFAULT_SECURITY: Lazy<SecuritySettings> = Lazy::new(|| SecuritySettings {
    session_timeout: env_u32("SHOPDESK_SECURITY_SESSION_TIMEOUT", 30),
    password_min_length: env_u32("SHOPDESK_SECURITY_PASSWORD_MIN_LENGTH", 8),
    require_2fa: env_bool("SHOPDESK_SECURITY_REQUIRE_2FA", false),
    two_factor_auth: env_bool("SHOPDESK_ACCOUNT_TWO_FACTOR_AUTH", false),
});

impl Default for SecuritySettings {
    fn default() -> Self {
        DEFAULT_SECURITY.clone()
    }
}

impl SecuritySettings {
    /// Password-change rules: confirmation must match and the new password
    /// must meet the configured minimum length. Every violation is reported.
    pub fn validate_password_change(&self, new: &str, confirm: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if new != confirm {
            errors.push("New passwords do not match".to_string());
        }
        if (new.chars().count() as u32) < self.password_min_length {
            errors.push(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            ));
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub name: String,
    pub logo: String,
    #[serde(rename = "type")]
    pub kind: String,
}

static DEFAULT_COMPANY: Lazy<CompanyData> = Lazy::new(|| CompanyData {
    name: env_str("SHOPDESK_COMPANY_NAME", "Hanover Inc"),
    logo: env_str("SHOPDESK_COMPANY_LOGO", "https://via.placeholder.com/48x48"),
    kind: env_str("SHOPDESK_COMPANY_TYPE", "Online Shop"),
});

impl Default for CompanyData {
    fn default() -> Self {
        DEFAULT_COMPANY.clone()
    }
}

fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// Everything the settings panel can export or import, as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_settings: Option<AccountSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_settings: Option<SecuritySettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
}

impl SettingsSnapshot {
    pub fn export(
        profile: &ProfileData,
        account: &AccountSettings,
        security: &SecuritySettings,
    ) -> Result<String> {
        let snapshot = Self {
            profile: Some(profile.clone()),
            account_settings: Some(account.clone()),
            security_settings: Some(security.clone()),
            exported_at: Some(Utc::now().to_rfc3339()),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Parse an import payload. Malformed JSON aborts the whole import; a
    /// present-but-invalid profile aborts with its validation errors.
    pub fn parse(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|_| ShopdeskError::Import("Invalid JSON format".to_string()))?;
        if let Some(profile) = &snapshot.profile {
            let errors = profile.validate();
            if !errors.is_empty() {
                return Err(ShopdeskError::validation(errors));
            }
        }
        Ok(snapshot)
    }
}

/// What triggered a `.env` snapshot download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotReason {
    ProfileUpdated,
    PasswordUpdated,
    AvatarUpdated,
    CompanyUpdated,
}

impl SnapshotReason {
    fn heading(&self) -> &'static str {
        match self {
            SnapshotReason::ProfileUpdated => "Profile Updated",
            SnapshotReason::PasswordUpdated => "Password Updated",
            SnapshotReason::AvatarUpdated => "Avatar Updated",
            SnapshotReason::CompanyUpdated => "Company Updated",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            SnapshotReason::ProfileUpdated => "PROFILE_UPDATED",
            SnapshotReason::PasswordUpdated => "PASSWORD_UPDATED",
            SnapshotReason::AvatarUpdated => "AVATAR_UPDATED",
            SnapshotReason::CompanyUpdated => "COMPANY_UPDATED",
        }
    }
}

/// Render the plain-text `key=value` settings snapshot written as a `.env`
/// download after profile/company/password updates.
pub fn env_snapshot(
    company: &CompanyData,
    profile: &ProfileData,
    account: &AccountSettings,
    security: &SecuritySettings,
    reason: SnapshotReason,
) -> String {
    format!(
        "# Company Data\n\
         COMPANY_NAME={}\n\
         COMPANY_LOGO={}\n\
         COMPANY_TYPE={}\n\
         \n\
         # Profile Data\n\
         PROFILE_FIRST_NAME={}\n\
         PROFILE_LAST_NAME={}\n\
         PROFILE_EMAIL={}\n\
         PROFILE_PHONE={}\n\
         PROFILE_LOCATION={}\n\
         PROFILE_BIO={}\n\
         PROFILE_AVATAR={}\n\
         \n\
         # Account Settings\n\
         ACCOUNT_EMAIL_NOTIFICATIONS={}\n\
         ACCOUNT_SMS_NOTIFICATIONS={}\n\
         ACCOUNT_MARKETING_EMAILS={}\n\
         ACCOUNT_PUBLIC_PROFILE={}\n\
         \n\
         # Security Settings\n\
         SECURITY_TWO_FACTOR_AUTH={}\n\
         SECURITY_SESSION_TIMEOUT={}\n\
         SECURITY_PASSWORD_MIN_LENGTH={}\n\
         SECURITY_REQUIRE_2FA={}\n\
         \n\
         # {}\n\
         {}={}",
        company.name,
        company.logo,
        company.kind,
        profile.first_name,
        profile.last_name,
        profile.email,
        profile.phone,
        profile.location,
        profile.bio,
        profile.avatar,
        account.email_notifications,
        account.sms_notifications,
        account.marketing_emails,
        account.public_profile,
        security.two_factor_auth,
        security.session_timeout,
        security.password_min_length,
        security.require_2fa,
        reason.heading(),
        reason.key(),
        Utc::now().to_rfc3339(),
    )
}
