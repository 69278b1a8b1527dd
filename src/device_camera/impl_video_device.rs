use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

/// Looks for `video*` device nodes, e.g. `/dev/video0` on Linux.
pub struct DeviceCameraVideoDevice {
    device_dir: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraVideoDevice {
    pub fn new(device_dir: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            device_dir,
            logger: logger.with_namespace("device_camera").with_namespace("video_device"),
        }
    }
}

impl DeviceCamera for DeviceCameraVideoDevice {
    fn is_available(&self) -> bool {
        let entries = match std::fs::read_dir(&self.device_dir) {
            Ok(entries) => entries,
            Err(e) => {
                let _ = self.logger.info(&format!(
                    "Cannot read {}: {}",
                    self.device_dir.display(),
                    e
                ));
                return false;
            }
        };

        let device = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .find(|name| name.starts_with("video"));

        match device {
            Some(name) => {
                let _ = self.logger.info(&format!("Found camera device {}", name));
                true
            }
            None => {
                let _ = self.logger.info("No camera device found");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_available_when_video_node_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("null"), b"").unwrap();
        std::fs::write(dir.path().join("video0"), b"").unwrap();

        let camera = DeviceCameraVideoDevice::new(dir.path().to_path_buf(), Arc::new(LoggerFake::new()));

        assert!(camera.is_available());
    }

    #[test]
    fn test_unavailable_without_video_node() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tty0"), b"").unwrap();

        let camera = DeviceCameraVideoDevice::new(dir.path().to_path_buf(), Arc::new(LoggerFake::new()));

        assert!(!camera.is_available());
    }

    #[test]
    fn test_unreadable_dir_is_unavailable_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let logger = LoggerFake::new();

        let camera = DeviceCameraVideoDevice::new(missing, Arc::new(logger.clone()));

        assert!(!camera.is_available());
        assert!(logger
            .messages()
            .iter()
            .any(|m| m.starts_with("device_camera:video_device: Cannot read")));
    }
}
