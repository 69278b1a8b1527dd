use crate::classify_view::delegate::ClassifyViewDelegate;
use crate::classify_view::layout::{ActionControl, Layout};
use crate::config::ClassifyViewConfig;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use egui::{Color32, Rect};
use image::DynamicImage;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStyle {
    pub alpha: f32,
    pub background: Option<Color32>,
    pub corner_radius: f32,
}

impl PreviewStyle {
    pub fn placeholder() -> Self {
        Self {
            alpha: 0.3,
            background: Some(Color32::LIGHT_GRAY),
            corner_radius: 20.0,
        }
    }

    pub fn photo() -> Self {
        Self {
            alpha: 1.0,
            background: None,
            corner_radius: 0.0,
        }
    }
}

pub struct ClassifyView {
    pub(super) config: ClassifyViewConfig,
    pub(super) frame: Rect,
    pub(super) layout: Layout,
    pub(super) title: String,
    pub(super) detail_text: String,
    pub(super) image: Option<DynamicImage>,
    pub(super) preview_style: PreviewStyle,
    pub(super) texture: Option<egui::TextureHandle>,
    camera_enabled: bool,
    video_enabled: bool,
    delegate: Option<Weak<dyn ClassifyViewDelegate + Send + Sync>>,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifyView {
    pub fn new(
        frame: Rect,
        config: ClassifyViewConfig,
        device_camera: &dyn DeviceCamera,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("classify_view");
        let camera_available = device_camera.is_available();
        let layout = Layout::compute(frame, &config.layout);

        let _ = logger.info(&format!(
            "Created with frame {:?}, camera controls {}",
            frame,
            if camera_available { "enabled" } else { "disabled" }
        ));

        Self {
            title: config.title.clone(),
            detail_text: config.detail_text.clone(),
            config,
            frame,
            layout,
            image: None,
            preview_style: PreviewStyle::placeholder(),
            texture: None,
            camera_enabled: camera_available,
            video_enabled: camera_available,
            delegate: None,
            logger,
        }
    }

    pub fn set_delegate(&mut self, delegate: &Arc<dyn ClassifyViewDelegate + Send + Sync>) {
        if self.delegate.is_some() {
            let _ = self.logger.info("Replacing delegate");
        }
        self.delegate = Some(Arc::downgrade(delegate));
    }

    #[allow(dead_code)]
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Shows a captured or picked photo in place of the placeholder.
    pub fn display_image(&mut self, image: DynamicImage) {
        self.preview_style = PreviewStyle::photo();
        self.image = Some(image);
        self.texture = None;
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.detail_text = text.into();
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout = Layout::compute(frame, &self.config.layout);
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[allow(dead_code)]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[allow(dead_code)]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `None` while the placeholder is showing.
    #[allow(dead_code)]
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    #[allow(dead_code)]
    pub fn description(&self) -> &str {
        &self.detail_text
    }

    #[allow(dead_code)]
    pub fn preview_style(&self) -> &PreviewStyle {
        &self.preview_style
    }

    pub fn is_enabled(&self, control: ActionControl) -> bool {
        match control {
            ActionControl::PhotoLibrary => true,
            ActionControl::Camera => self.camera_enabled,
            ActionControl::Video => self.video_enabled,
        }
    }

    /// User activation of a toolbar control. Disabled controls never forward.
    pub fn activate(&self, control: ActionControl) {
        if !self.is_enabled(control) {
            let _ = self
                .logger
                .info(&format!("{} control is disabled", control.label()));
            return;
        }

        match control {
            ActionControl::PhotoLibrary => self.photo_library_button_pressed(),
            ActionControl::Camera => self.camera_button_pressed(),
            ActionControl::Video => self.video_button_pressed(),
        }
    }

    pub fn camera_button_pressed(&self) {
        if let Some(delegate) = self.live_delegate(ActionControl::Camera) {
            delegate.camera_button_pressed();
        }
    }

    pub fn photo_library_button_pressed(&self) {
        if let Some(delegate) = self.live_delegate(ActionControl::PhotoLibrary) {
            delegate.photo_library_button_pressed();
        }
    }

    pub fn video_button_pressed(&self) {
        if let Some(delegate) = self.live_delegate(ActionControl::Video) {
            delegate.video_button_pressed();
        }
    }

    fn live_delegate(
        &self,
        control: ActionControl,
    ) -> Option<Arc<dyn ClassifyViewDelegate + Send + Sync>> {
        let delegate = self.delegate.as_ref().and_then(Weak::upgrade);
        if delegate.is_none() {
            let _ = self.logger.info(&format!(
                "No delegate attached, dropping {} request",
                control.label().to_lowercase()
            ));
        }
        delegate
    }
}
