#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
struct Sample {
    cpu_usage: f32,
    memory_mb: u64,
    peak_memory_mb: u64,
    elapsed: Duration,
}

/// 每抓完一個網站記錄一次行程的 CPU 與記憶體用量
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    // None 代表停用
    state: Option<(Pid, Mutex<(System, u64)>)>,
    started: Instant,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let state = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => Some((pid, Mutex::new((System::new(), 0)))),
                Err(e) => {
                    tracing::warn!("⚠️ System monitoring disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            state,
            started: Instant::now(),
        }
    }

    fn sample(&self) -> Option<Sample> {
        let (pid, lock) = self.state.as_ref()?;
        let mut guard = lock.lock().ok()?;
        let (system, peak) = &mut *guard;

        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[*pid]),
            true,
            ProcessRefreshKind::everything(),
        );
        let process = system.process(*pid)?;

        let memory_mb = process.memory() / 1024 / 1024;
        *peak = (*peak).max(memory_mb);

        Some(Sample {
            cpu_usage: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: *peak,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_stats(&self, site_name: &str) {
        if let Some(s) = self.sample() {
            tracing::info!(
                "📊 after {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                site_name,
                s.cpu_usage,
                s.memory_mb,
                s.peak_memory_mb,
                s.elapsed
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(s) = self.sample() {
            tracing::info!(
                "📊 Search finished - Total Time: {:?}, Peak Memory: {}MB",
                s.elapsed,
                s.peak_memory_mb
            );
        }
    }
}

// 非 CLI 環境下的空實作
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _site_name: &str) {}

    pub fn log_final_stats(&self) {}
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_takes_no_samples() {
        let monitor = SystemMonitor::new(false);
        assert!(monitor.sample().is_none());
    }

    #[test]
    fn test_enabled_monitor_tracks_peak_memory() {
        let monitor = SystemMonitor::new(true);
        let first = monitor.sample().expect("current process is visible");
        let second = monitor.sample().expect("current process is visible");

        assert!(second.peak_memory_mb >= first.memory_mb);
        assert!(second.elapsed >= first.elapsed);
    }
}
