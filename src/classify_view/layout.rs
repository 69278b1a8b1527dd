use egui::{pos2, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionControl {
    PhotoLibrary,
    Camera,
    Video,
}

impl ActionControl {
    /// Toolbar order, left to right.
    pub const ALL: [ActionControl; 3] = [
        ActionControl::PhotoLibrary,
        ActionControl::Camera,
        ActionControl::Video,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ActionControl::PhotoLibrary => "🗀",
            ActionControl::Camera => "📷",
            ActionControl::Video => "▶",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionControl::PhotoLibrary => "Photo library",
            ActionControl::Camera => "Camera",
            ActionControl::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMetrics {
    pub horizontal_margin: f32,
    pub top_margin: f32,
    pub standard_spacing: f32,
    pub stack_spacing: f32,
    pub title_height: f32,
    pub image_height: f32,
    pub toolbar_height: f32,
    pub button_width: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            horizontal_margin: 32.0,
            top_margin: 36.0,
            standard_spacing: 8.0,
            stack_spacing: 30.0,
            title_height: 33.0,
            image_height: 220.0,
            toolbar_height: 48.0,
            button_width: 44.0,
        }
    }
}

/// Resolved rectangles for every child of the classify view.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub stack: Rect,
    pub title: Rect,
    pub image: Rect,
    pub detail: Rect,
    pub toolbar: Rect,
    buttons: [Rect; 3],
}

impl Layout {
    /// Stack pinned to the top margins with the toolbar pinned to the bottom
    /// edge. Title, image and detail text stack vertically; the detail text
    /// takes whatever height is left. Toolbar buttons are separated by four
    /// equal flexible spaces.
    pub fn compute(frame: Rect, metrics: &LayoutMetrics) -> Self {
        let toolbar_top = (frame.max.y - metrics.toolbar_height).max(frame.min.y);
        let toolbar = Rect::from_min_max(pos2(frame.min.x, toolbar_top), frame.max);

        let stack_left = frame.min.x + metrics.horizontal_margin;
        let stack_right = (frame.max.x - metrics.horizontal_margin).max(stack_left);
        let stack_top = frame.min.y + metrics.top_margin;
        let stack_bottom = (toolbar.min.y - metrics.standard_spacing).max(stack_top);
        let stack = Rect::from_min_max(pos2(stack_left, stack_top), pos2(stack_right, stack_bottom));

        let row = |top: f32, height: f32| {
            Rect::from_min_max(pos2(stack.min.x, top), pos2(stack.max.x, top + height.max(0.0)))
        };

        let title = row(stack.min.y, metrics.title_height);
        let image = row(title.max.y + metrics.stack_spacing, metrics.image_height);
        let detail_top = image.max.y + metrics.stack_spacing;
        let detail = row(detail_top, stack.max.y - detail_top);

        let gap = ((toolbar.width() - 3.0 * metrics.button_width) / 4.0).max(0.0);
        let button = |index: usize| {
            let left = toolbar.min.x + gap * (index as f32 + 1.0) + metrics.button_width * index as f32;
            Rect::from_min_max(
                pos2(left, toolbar.min.y),
                pos2(left + metrics.button_width, toolbar.max.y),
            )
        };

        Self {
            stack,
            title,
            image,
            detail,
            toolbar,
            buttons: [button(0), button(1), button(2)],
        }
    }

    pub fn button(&self, control: ActionControl) -> Rect {
        match control {
            ActionControl::PhotoLibrary => self.buttons[0],
            ActionControl::Camera => self.buttons[1],
            ActionControl::Video => self.buttons[2],
        }
    }
}
