use crate::classify_view::layout::LayoutMetrics;
use egui::Color32;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClassifyViewConfig {
    pub title: String,
    pub detail_text: String,
    pub title_font_size: f32,
    pub detail_font_size: f32,
    pub background: Color32,
    pub toolbar_background: Color32,
    pub text_color: Color32,
    pub layout: LayoutMetrics,
}

impl Default for ClassifyViewConfig {
    fn default() -> Self {
        Self {
            title: "Dog Classifier".to_string(),
            detail_text: "Classify a dog by using an existing photo, taking a new photo, or directly from a video feed!".to_string(),
            title_font_size: 27.0,
            detail_font_size: 15.0,
            background: Color32::WHITE,
            toolbar_background: Color32::from_rgb(247, 247, 247),
            text_color: Color32::BLACK,
            layout: LayoutMetrics::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub logger_timezone: chrono::FixedOffset,
    pub video_device_dir: PathBuf,
    /// Skips the device probe when set.
    pub camera_available: Option<bool>,
    pub classify_view: ClassifyViewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Dog Breed Prediction".to_string(),
            window_size: [375.0, 667.0],
            logger_timezone: mountain_standard_time(),
            video_device_dir: PathBuf::from("/dev"),
            camera_available: None,
            classify_view: ClassifyViewConfig::default(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
