//! Application State
//!
//! Persisted settings and the global store handing out shared entities.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::{NoticeState, SeedUser};
use gpui::{App, AppContext, Bounds, Context, Entity, Global, Pixels};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const SETTINGS_FILE: &str = "roster-gui.toml";

fn get_settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

fn default_selectable() -> bool {
    true
}

fn default_seed_users() -> Vec<SeedUser> {
    SeedUser::defaults()
}

// ==================== Persisted State ====================

/// Persisted application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    bounds: Option<Bounds<Pixels>>,
    /// Whether roster rows can be selected
    #[serde(default = "default_selectable")]
    selectable: bool,
    /// Rows the roster starts with
    #[serde(default = "default_seed_users")]
    seed_users: Vec<SeedUser>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            bounds: None,
            selectable: default_selectable(),
            seed_users: default_seed_users(),
        }
    }
}

impl RosterSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Using default settings");
            Self::default()
        })
    }

    /// Parse settings text; blank text yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn selectable(&self) -> bool {
        self.selectable
    }

    pub fn seed_users(&self) -> &[SeedUser] {
        &self.seed_users
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<RosterGlobalStore>()`
#[derive(Clone)]
pub struct RosterGlobalStore {
    settings: Entity<RosterSettings>,
    notices: Entity<NoticeState>,
}

impl RosterGlobalStore {
    /// Create a new global store
    pub fn new(settings: Entity<RosterSettings>, notices: Entity<NoticeState>) -> Self {
        Self { settings, notices }
    }

    /// Get the settings entity
    pub fn settings(&self) -> Entity<RosterSettings> {
        self.settings.clone()
    }

    /// Get the shared notice host
    pub fn notices(&self) -> Entity<NoticeState> {
        self.notices.clone()
    }

    /// Read settings
    pub fn read<'a>(&self, cx: &'a App) -> &'a RosterSettings {
        self.settings.read(cx)
    }

    /// Update settings
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut RosterSettings, &mut Context<RosterSettings>) -> R,
    ) -> C::Result<R> {
        self.settings.update(cx, update)
    }
}

impl Global for RosterGlobalStore {}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_settings(settings: &RosterSettings) -> Result<()> {
    let path = get_settings_path()?;
    let value = toml::to_string(settings)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update settings and save to disk in the background
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut RosterSettings, &App) + Send + 'static,
{
    let store = cx.global::<RosterGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |settings, cx| {
            mutation(settings, cx);
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_settings_use_defaults() {
        let settings = RosterSettings::parse("  \n").expect("blank parses");
        assert!(settings.selectable());
        assert!(settings.bounds().is_none());
        assert_eq!(settings.seed_users(), SeedUser::defaults().as_slice());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings = RosterSettings::parse("selectable = false\n").expect("valid toml");
        assert!(!settings.selectable());
        assert_eq!(settings.seed_users().len(), 3);
    }

    #[test]
    fn test_seed_users_from_toml() {
        let text = r#"
            [[seed_users]]
            name = "Zoe"
            email = "zoe@example.com"
            age = 52
        "#;
        let settings = RosterSettings::parse(text).expect("valid toml");
        assert_eq!(settings.seed_users().len(), 1);
        assert_eq!(settings.seed_users()[0].name, "Zoe");
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = RosterSettings::default();
        settings.selectable = false;
        let text = toml::to_string(&settings).expect("serializes");
        let back = RosterSettings::parse(&text).expect("parses back");
        assert!(!back.selectable());
        assert_eq!(back.seed_users(), settings.seed_users());
    }

    #[test]
    fn test_broken_settings_error() {
        assert!(RosterSettings::parse("selectable = [").is_err());
    }
}
