//! Profile, account, security, and company operations.
//!
//! Mutations here follow the same shape as record mutations: validate first,
//! persist on success, and hand back a `.env` snapshot describing the change
//! where the operation produces one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShopdeskError};
use crate::events::{AppEvent, EventBus};
use crate::settings::{
    env_snapshot, AccountSettings, CompanyData, ProfileData, SecuritySettings, SettingsSnapshot,
    SnapshotReason,
};
use crate::store::{keys, StorageBackend, StoreAdapter};

pub const SNAPSHOT_FILENAME: &str = "shopdesk-settings.env";
pub const EXPORT_FILENAME: &str = "settings.json";

/// The four settings records, hydrated once and kept in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub profile: ProfileData,
    pub account: AccountSettings,
    pub security: SecuritySettings,
    pub company: CompanyData,
}

impl Settings {
    /// Merge-on-load for every section, so a partially stored blob still
    /// yields a complete record.
    pub fn load<S: StorageBackend>(store: &StoreAdapter<S>) -> Self {
        Self {
            profile: store.load_record(keys::PROFILE, &ProfileData::default()),
            account: store.load_record(keys::ACCOUNT, &AccountSettings::default()),
            security: store.load_record(keys::SECURITY, &SecuritySettings::default()),
            company: store.load_record(keys::COMPANY, &CompanyData::default()),
        }
    }

    fn snapshot(&self, reason: SnapshotReason) -> String {
        env_snapshot(&self.company, &self.profile, &self.account, &self.security, reason)
    }
}

/// Validate and persist the profile. Returns the `.env` snapshot text;
/// nothing is persisted when validation fails.
pub fn save_profile<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    profile: ProfileData,
) -> Result<String> {
    let errors = profile.validate();
    if !errors.is_empty() {
        return Err(ShopdeskError::validation(errors));
    }

    store.save(keys::PROFILE, &profile)?;
    settings.profile = profile;
    Ok(settings.snapshot(SnapshotReason::ProfileUpdated))
}

pub fn set_avatar<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    avatar: impl Into<String>,
) -> Result<String> {
    settings.profile.avatar = avatar.into();
    store.save(keys::PROFILE, &settings.profile)?;
    Ok(settings.snapshot(SnapshotReason::AvatarUpdated))
}

pub fn save_account<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    account: AccountSettings,
) -> Result<()> {
    store.save(keys::ACCOUNT, &account)?;
    settings.account = account;
    Ok(())
}

pub fn save_security<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    security: SecuritySettings,
) -> Result<()> {
    store.save(keys::SECURITY, &security)?;
    settings.security = security;
    Ok(())
}

/// The password itself is never stored; a successful change only produces the
/// snapshot. Every violated rule is reported at once.
pub fn change_password(
    settings: &Settings,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<String> {
    let mut errors = Vec::new();
    if current.trim().is_empty() {
        errors.push("Current password is required".to_string());
    }
    errors.extend(settings.security.validate_password_change(new, confirm));
    if !errors.is_empty() {
        return Err(ShopdeskError::validation(errors));
    }
    Ok(settings.snapshot(SnapshotReason::PasswordUpdated))
}

/// Persist the company record and broadcast it so every mounted view of the
/// company (header, settings form) updates in the same pass.
pub fn save_company<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    bus: &EventBus,
    company: CompanyData,
) -> Result<String> {
    store.save(keys::COMPANY, &company)?;
    settings.company = company.clone();
    bus.publish(&AppEvent::CompanyUpdated(company));
    Ok(settings.snapshot(SnapshotReason::CompanyUpdated))
}

/// Write the JSON settings export (`settings.json`) into `dir`.
pub fn export(settings: &Settings, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    let json = SettingsSnapshot::export(&settings.profile, &settings.account, &settings.security)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Apply an exported settings document: each present section replaces the
/// stored one. Malformed JSON or an invalid profile aborts the whole import
/// with nothing applied.
pub fn import<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    json: &str,
) -> Result<()> {
    let snapshot = SettingsSnapshot::parse(json)?;
    if let Some(profile) = snapshot.profile {
        store.save(keys::PROFILE, &profile)?;
        settings.profile = profile;
    }
    if let Some(account) = snapshot.account_settings {
        store.save(keys::ACCOUNT, &account)?;
        settings.account = account;
    }
    if let Some(security) = snapshot.security_settings {
        store.save(keys::SECURITY, &security)?;
        settings.security = security;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Account,
    Security,
    Company,
}

impl Section {
    fn key(&self) -> &'static str {
        match self {
            Section::Profile => keys::PROFILE,
            Section::Account => keys::ACCOUNT,
            Section::Security => keys::SECURITY,
            Section::Company => keys::COMPANY,
        }
    }
}

/// Drop the stored override for one section, restoring its environment-seeded
/// default.
pub fn reset<S: StorageBackend>(
    settings: &mut Settings,
    store: &mut StoreAdapter<S>,
    section: Section,
) {
    store.remove(section.key());
    match section {
        Section::Profile => settings.profile = ProfileData::default(),
        Section::Account => settings.account = AccountSettings::default(),
        Section::Security => settings.security = SecuritySettings::default(),
        Section::Company => settings.company = CompanyData::default(),
    }
}

pub fn write_snapshot(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join(SNAPSHOT_FILENAME);
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;
    use crate::store::memory::MemoryBackend;
    use std::sync::{Arc, Mutex};

    fn fixture() -> (Settings, StoreAdapter<MemoryBackend>) {
        let store = StoreAdapter::new(MemoryBackend::new());
        let settings = Settings::load(&store);
        (settings, store)
    }

    #[test]
    fn load_on_an_empty_store_yields_defaults() {
        let (settings, _) = fixture();
        assert_eq!(settings.profile, ProfileData::default());
        assert_eq!(settings.company, CompanyData::default());
    }

    #[test]
    fn save_profile_persists_and_reports_the_reason() {
        let (mut settings, mut store) = fixture();
        let mut profile = settings.profile.clone();
        profile.first_name = "Ada".to_string();

        let snapshot = save_profile(&mut settings, &mut store, profile).unwrap();
        assert!(snapshot.contains("PROFILE_FIRST_NAME=Ada"));
        assert!(snapshot.contains("PROFILE_UPDATED="));

        let reloaded = Settings::load(&store);
        assert_eq!(reloaded.profile.first_name, "Ada");
    }

    #[test]
    fn invalid_profile_saves_nothing() {
        let (mut settings, mut store) = fixture();
        let before = settings.profile.clone();

        let mut bad = settings.profile.clone();
        bad.first_name = String::new();
        bad.email = "nope".to_string();

        let err = save_profile(&mut settings, &mut store, bad).unwrap_err();
        match err {
            ShopdeskError::Validation { errors } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(settings.profile, before);
        assert_eq!(Settings::load(&store).profile, before);
    }

    #[test]
    fn change_password_reports_every_violation() {
        let (settings, _) = fixture();
        let err = change_password(&settings, "", "short", "different").unwrap_err();
        match err {
            ShopdeskError::Validation { errors } => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other}"),
        }

        let snapshot = change_password(&settings, "old", "long enough", "long enough").unwrap();
        assert!(snapshot.contains("PASSWORD_UPDATED="));
    }

    #[test]
    fn save_company_broadcasts_the_new_record() {
        let (mut settings, mut store) = fixture();
        let bus = EventBus::new();

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        bus.subscribe(Topic::CompanyUpdated, move |event| {
            if let AppEvent::CompanyUpdated(company) = event {
                *sink.lock().unwrap() = Some(company.name.clone());
            }
        });

        let company = CompanyData {
            name: "Borcelle".to_string(),
            ..CompanyData::default()
        };
        let snapshot = save_company(&mut settings, &mut store, &bus, company).unwrap();

        assert_eq!(seen.lock().unwrap().as_deref(), Some("Borcelle"));
        assert!(snapshot.contains("COMPANY_NAME=Borcelle"));
        assert_eq!(Settings::load(&store).company.name, "Borcelle");
    }

    #[test]
    fn import_applies_only_the_present_sections() {
        let (mut settings, mut store) = fixture();
        let original_account = settings.account.clone();

        let json = r#"{"profile":{"firstName":"Imported","lastName":"User","email":"i@u.example","phone":"1","location":"","bio":"","avatar":""}}"#;
        import(&mut settings, &mut store, json).unwrap();

        assert_eq!(settings.profile.first_name, "Imported");
        assert_eq!(settings.account, original_account);
    }

    #[test]
    fn import_rejects_malformed_json_without_applying() {
        let (mut settings, mut store) = fixture();
        let before = settings.clone();
        assert!(matches!(
            import(&mut settings, &mut store, "{nope"),
            Err(ShopdeskError::Import(_))
        ));
        assert_eq!(settings, before);
    }

    #[test]
    fn reset_restores_the_section_default() {
        let (mut settings, mut store) = fixture();
        let company = CompanyData {
            name: "Borcelle".to_string(),
            ..CompanyData::default()
        };
        save_company(&mut settings, &mut store, &EventBus::new(), company).unwrap();

        reset(&mut settings, &mut store, Section::Company);
        assert_eq!(settings.company, CompanyData::default());
        assert_eq!(Settings::load(&store).company, CompanyData::default());
    }

    #[test]
    fn export_and_import_round_trip() {
        let (mut settings, mut store) = fixture();
        settings.profile.first_name = "Exported".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = export(&settings, dir.path()).unwrap();
        let json = fs::read_to_string(path).unwrap();

        let mut fresh = Settings::default();
        import(&mut fresh, &mut store, &json).unwrap();
        assert_eq!(fresh.profile.first_name, "Exported");
    }
}
