//! Best score record
//!
//! A single local high score stored as plain text (`best_score.txt`). Only
//! ever raised, never lowered.

use crate::persistence::{FileStore, Result};

/// Best score ever reached on this profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BestScore(pub u64);

impl BestScore {
    /// File name inside the data directory
    pub const FILE_NAME: &'static str = "best_score.txt";

    /// Load the record; missing or unreadable files count as 0
    pub fn load(store: &FileStore) -> Self {
        match store.load_u64(Self::FILE_NAME) {
            Ok(Some(score)) => {
                log::info!("Loaded best score {}", score);
                Self(score)
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; best score reset to 0");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &FileStore) -> Result<()> {
        store.save_text(Self::FILE_NAME, &self.0.to_string())?;
        log::info!("Best score saved ({})", self.0);
        Ok(())
    }

    /// Raise the record to `score` if it beats it; returns whether it changed
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}
