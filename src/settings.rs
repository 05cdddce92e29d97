//! Game settings and preferences
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

/// How raw input turns into player velocity.
///
/// The two historical loops forked on this; here it is one state machine
/// with the model as a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementModel {
    /// Normalize the direction and apply max speed instantly
    #[default]
    Direct,
    /// Decay the previous velocity and add impulses: drift and momentum
    Inertial,
}

impl MovementModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementModel::Direct => "Direct",
            MovementModel::Inertial => "Inertial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "direct" => Some(MovementModel::Direct),
            "inertial" | "inertia" => Some(MovementModel::Inertial),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Movement model for the player square
    pub movement: MovementModel,
    /// Draw the matrix rain background
    pub rain: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            movement: MovementModel::Direct,
            rain: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "matrixscape_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_model_round_trips_through_str() {
        for model in [MovementModel::Direct, MovementModel::Inertial] {
            assert_eq!(MovementModel::from_str(model.as_str()), Some(model));
        }
        assert_eq!(MovementModel::from_str("teleport"), None);
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = Settings {
            movement: MovementModel::Inertial,
            rain: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.movement, MovementModel::Inertial);
        assert!(!back.rain);
    }
}
