//! Bluetooth availability probe
//!
//! Reads the kernel's view of the local radio from sysfs:
//! - `/sys/class/bluetooth/hci*` exists when an adapter is present
//! - `/sys/class/rfkill/*/{type,soft,hard}` tells whether it is blocked

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What the local Bluetooth stack can do right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Adapter present and not blocked
    Ready,
    /// Adapter present but every Bluetooth rfkill switch is blocked
    Disabled,
    /// No adapter
    Unsupported,
}

/// sysfs-backed availability probe
#[derive(Debug, Clone)]
pub struct SysfsProbe {
    bluetooth_class: PathBuf,
    rfkill_class: PathBuf,
}

impl SysfsProbe {
    /// Probe a sysfs tree mounted at `root`
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            bluetooth_class: root.join("class/bluetooth"),
            rfkill_class: root.join("class/rfkill"),
        }
    }

    #[instrument(skip(self))]
    pub async fn probe(&self) -> Availability {
        if !self.has_adapter().await {
            info!("No Bluetooth adapter");
            return Availability::Unsupported;
        }

        let switches = self.bluetooth_switches().await;
        if !switches.is_empty() && switches.iter().all(|blocked| *blocked) {
            info!(switches = switches.len(), "Bluetooth blocked by rfkill");
            return Availability::Disabled;
        }

        Availability::Ready
    }

    async fn has_adapter(&self) -> bool {
        let Ok(mut entries) = tokio::fs::read_dir(&self.bluetooth_class).await else {
            return false;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            if entry.file_name().to_string_lossy().starts_with("hci") {
                return true;
            }
        }
        false
    }

    /// Blocked flag of every Bluetooth rfkill switch
    async fn bluetooth_switches(&self) -> Vec<bool> {
        let mut switches = Vec::new();
        let Ok(mut entries) = tokio::fs::read_dir(&self.rfkill_class).await else {
            return switches;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let dir = entry.path();
            if read_trimmed(&dir.join("type")).await.as_deref() != Some("bluetooth") {
                continue;
            }
            let soft = read_trimmed(&dir.join("soft")).await;
            let hard = read_trimmed(&dir.join("hard")).await;
            let blocked = soft.as_deref() == Some("1") || hard.as_deref() == Some("1");
            debug!(switch = %dir.display(), blocked, "rfkill switch");
            switches.push(blocked);
        }
        switches
    }
}

async fn read_trimmed(path: &Path) -> Option<String> {
    tokio::fs::read_to_string(path)
        .await
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn add_adapter(root: &Path) {
        fs::create_dir_all(root.join("class/bluetooth/hci0")).unwrap();
    }

    fn add_switch(root: &Path, name: &str, kind: &str, soft: &str, hard: &str) {
        let dir = root.join("class/rfkill").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("type"), format!("{}\n", kind)).unwrap();
        fs::write(dir.join("soft"), format!("{}\n", soft)).unwrap();
        fs::write(dir.join("hard"), format!("{}\n", hard)).unwrap();
    }

    #[tokio::test]
    async fn test_no_adapter_is_unsupported() {
        let root = tempfile::tempdir().unwrap();
        let probe = SysfsProbe::with_root(root.path());
        assert_eq!(probe.probe().await, Availability::Unsupported);
    }

    #[tokio::test]
    async fn test_adapter_without_rfkill_is_ready() {
        let root = tempfile::tempdir().unwrap();
        add_adapter(root.path());
        let probe = SysfsProbe::with_root(root.path());
        assert_eq!(probe.probe().await, Availability::Ready);
    }

    #[tokio::test]
    async fn test_soft_blocked_is_disabled() {
        let root = tempfile::tempdir().unwrap();
        add_adapter(root.path());
        add_switch(root.path(), "rfkill0", "bluetooth", "1", "0");
        add_switch(root.path(), "rfkill1", "wlan", "0", "0");

        let probe = SysfsProbe::with_root(root.path());
        assert_eq!(probe.probe().await, Availability::Disabled);
    }

    #[tokio::test]
    async fn test_one_unblocked_switch_is_ready() {
        let root = tempfile::tempdir().unwrap();
        add_adapter(root.path());
        add_switch(root.path(), "rfkill0", "bluetooth", "1", "0");
        add_switch(root.path(), "rfkill2", "bluetooth", "0", "0");

        let probe = SysfsProbe::with_root(root.path());
        assert_eq!(probe.probe().await, Availability::Ready);
    }
}
