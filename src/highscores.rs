//! High score persistence
//!
//! A single scalar: the best displayed score (seconds survived), read from
//! LocalStorage once at startup and written whenever a run beats it. Missing
//! or inaccessible storage degrades to an in-memory value for the session.

/// Best score achieved on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "matrixscape_highscore";

    /// Record a finished run. Returns true (and persists) when it is a new
    /// best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.save();
        true
    }

    /// Load the stored value (WASM only); absent or unparsable storage
    /// yields zero
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<u64>(&raw) {
                    log::info!("Loaded high score: {best}");
                    return Self { best };
                }
            }
        }

        log::info!("No stored high score, starting at 0");
        Self::default()
    }

    /// Persist the current value (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(raw) = serde_json::to_string(&self.best) {
                let _ = storage.set_item(Self::STORAGE_KEY, &raw);
                log::info!("High score saved: {}", self.best);
            }
        } else {
            log::warn!("LocalStorage unavailable, high score kept in memory only");
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
    fn test_submit_keeps_the_best() {
        let mut hs = HighScore::default();
        assert!(hs.submit(30));
        assert!(!hs.submit(30));
        assert!(!hs.submit(12));
        assert_eq!(hs.best, 30);
        assert!(hs.submit(92));
        assert_eq!(hs.best, 92);
    }

    #[test]
    fn test_zero_score_is_not_a_best() {
        let mut hs = HighScore::default();
        assert!(!hs.submit(0));
        assert_eq!(hs.best, 0);
    }
}
