/// Receives user intent from the classify view.
///
/// The view keeps only a weak reference; whoever owns the view owns the
/// delegate. Each notification fires synchronously on the UI thread.
pub trait ClassifyViewDelegate {
    fn camera_button_pressed(&self);
    fn photo_library_button_pressed(&self);
    fn video_button_pressed(&self);
}
