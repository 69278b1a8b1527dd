use crate::classify_view::delegate::ClassifyViewDelegate;
use crate::classify_view::main::ClassifyView;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyRequest {
    Camera,
    PhotoLibrary,
    Video,
}

impl ClassifyRequest {
    pub fn status(self) -> &'static str {
        match self {
            ClassifyRequest::Camera => "Camera requested. Take a photo of a dog to classify it.",
            ClassifyRequest::PhotoLibrary => "Photo library requested. Pick a photo of a dog to classify it.",
            ClassifyRequest::Video => "Video feed requested. Point the camera at a dog to classify it.",
        }
    }
}

/// Turns view notifications into requests the app drains once per frame.
pub struct ChannelDelegate {
    sender: Sender<ClassifyRequest>,
}

impl ChannelDelegate {
    pub fn new(sender: Sender<ClassifyRequest>) -> Self {
        Self { sender }
    }

    fn send(&self, request: ClassifyRequest) {
        let _ = self.sender.send(request);
    }
}

impl ClassifyViewDelegate for ChannelDelegate {
    fn camera_button_pressed(&self) {
        self.send(ClassifyRequest::Camera);
    }

    fn photo_library_button_pressed(&self) {
        self.send(ClassifyRequest::PhotoLibrary);
    }

    fn video_button_pressed(&self) {
        self.send(ClassifyRequest::Video);
    }
}

pub struct ClassifierApp {
    view: ClassifyView,
    // The view only holds a weak reference.
    _delegate: Arc<dyn ClassifyViewDelegate + Send + Sync>,
    requests: Receiver<ClassifyRequest>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierApp {
    pub fn new(
        config: &Config,
        device_camera: &dyn DeviceCamera,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let frame = egui::Rect::from_min_size(egui::Pos2::ZERO, config.window_size.into());
        let mut view = ClassifyView::new(
            frame,
            config.classify_view.clone(),
            device_camera,
            logger.clone(),
        );

        let (sender, requests) = channel();
        let delegate: Arc<dyn ClassifyViewDelegate + Send + Sync> =
            Arc::new(ChannelDelegate::new(sender));
        view.set_delegate(&delegate);

        Self {
            view,
            _delegate: delegate,
            requests,
            logger: logger.with_namespace("app"),
        }
    }

    fn handle_requests(&mut self) {
        while let Ok(request) = self.requests.try_recv() {
            let _ = self.logger.info(&format!("Received {:?} request", request));
            self.view.set_description(request.status());
        }
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                if rect != self.view.frame() {
                    self.view.set_frame(rect);
                }
                self.view.show(ui);
            });

        self.handle_requests();
    }
}
