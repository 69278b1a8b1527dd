use app::ClassifierApp;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_video_device::DeviceCameraVideoDevice;
use device_camera::interface::DeviceCamera;
use eframe::egui;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod app;
mod classify_view;
mod config;
mod device_camera;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Box<dyn DeviceCamera> = match config.camera_available {
        Some(available) => Box::new(DeviceCameraFake::new(available, logger.clone())),
        None => Box::new(DeviceCameraVideoDevice::new(
            config.video_device_dir.clone(),
            logger.clone(),
        )),
    };

    let app = ClassifierApp::new(&config, device_camera.as_ref(), logger.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    let _ = logger.info("Starting");

    eframe::run_native(&config.window_title, options, Box::new(|_cc| Box::new(app)))?;

    Ok(())
}
