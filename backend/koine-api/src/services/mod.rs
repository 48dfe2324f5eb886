use std::sync::{Mutex, MutexGuard};

use crate::config::{Config, StorageBackend};
use performance_stats::PerformanceStats;
use storage::{FileStorage, MemoryStorage, StorageProvider};

pub struct AppState {
    pub config: Config,
    /// Every read-modify-write of the stats store runs under this lock.
    stats: Mutex<PerformanceStats>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage: Option<Box<dyn StorageProvider>> = match config.storage_backend {
            StorageBackend::File => {
                let file = FileStorage::in_dir(&config.data_dir);
                tracing::info!("Answer stats stored in {}", file.path().display());
                Some(Box::new(file))
            }
            StorageBackend::Memory => {
                tracing::info!("Answer stats kept in memory only");
                Some(Box::new(MemoryStorage::new()))
            }
            StorageBackend::None => {
                tracing::warn!("No stats storage configured, outcomes will not be kept");
                None
            }
        };

        let stats = PerformanceStats::with_key(storage, config.stats_key.clone());
        Self::with_stats(config, stats)
    }

    pub fn with_stats(config: Config, stats: PerformanceStats) -> Self {
        Self {
            config,
            stats: Mutex::new(stats),
        }
    }

    /// Poisoning is ignored: the mapping is rewritten whole on every write.
    pub fn stats(&self) -> MutexGuard<'_, PerformanceStats> {
        self.stats.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub mod game_service;
pub mod performance_stats;
pub mod storage;
