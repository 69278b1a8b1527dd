use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceCameraFake {
    available: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(available: bool, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            available,
            logger: logger.with_namespace("device_camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        let _ = self
            .logger
            .info(&format!("DeviceCameraFake::is_available() = {}", self.available));
        self.available
    }
}
