use crate::classify_view::layout::ActionControl;
use crate::classify_view::main::PreviewStyle;
use crate::classify_view::tests::fixture::{solid_image, Fixture, Notification};

#[test]
fn test_initial_state() {
    let f = Fixture::new();

    assert_eq!(f.view.title(), "Dog Classifier");
    assert_eq!(
        f.view.description(),
        "Classify a dog by using an existing photo, taking a new photo, or directly from a video feed!"
    );
    assert!(f.view.image().is_none());
    assert_eq!(f.view.preview_style(), &PreviewStyle::placeholder());
}

#[test]
fn test_display_image_last_write_wins() {
    let mut f = Fixture::new();
    let red = solid_image(4, 3, [255, 0, 0, 255]);
    let green = solid_image(2, 2, [0, 255, 0, 255]);
    let blue = solid_image(8, 1, [0, 0, 255, 255]);

    f.view.display_image(red);
    f.view.display_image(green);
    f.view.display_image(blue.clone());

    assert_eq!(f.view.image(), Some(&blue));
}

#[test]
fn test_display_image_clears_placeholder_style() {
    let mut f = Fixture::new();

    f.view.display_image(solid_image(1, 1, [10, 20, 30, 255]));

    let style = f.view.preview_style();
    assert_eq!(style.alpha, 1.0);
    assert_eq!(style.background, None);
    assert_eq!(style.corner_radius, 0.0);
}

#[test]
fn test_set_description_last_write_wins() {
    let mut f = Fixture::new();

    f.view.set_description("Labrador retriever: 92%");
    f.view.set_description("Beagle: 71%");

    assert_eq!(f.view.description(), "Beagle: 71%");

    f.view.set_description("");

    assert_eq!(f.view.description(), "");
}

#[test]
fn test_set_description_is_verbatim() {
    let mut f = Fixture::new();
    let text = "  multi\nline\ttext with ünïcödé 🐕  ".repeat(500);

    f.view.set_description(text.clone());

    assert_eq!(f.view.description(), text);
}

#[test]
fn test_camera_activation_notifies_once() {
    let mut f = Fixture::new();
    let delegate = f.attach_delegate();

    f.view.activate(ActionControl::Camera);

    assert_eq!(delegate.notifications(), vec![Notification::Camera]);
}

#[test]
fn test_each_control_maps_to_its_notification() {
    let mut f = Fixture::new();
    let delegate = f.attach_delegate();

    f.view.activate(ActionControl::PhotoLibrary);
    f.view.activate(ActionControl::Camera);
    f.view.activate(ActionControl::Video);

    assert_eq!(
        delegate.notifications(),
        vec![
            Notification::PhotoLibrary,
            Notification::Camera,
            Notification::Video
        ]
    );
}

#[test]
fn test_activation_without_delegate_is_silent() {
    let f = Fixture::new();

    for control in ActionControl::ALL {
        f.view.activate(control);
    }
    f.view.camera_button_pressed();
    f.view.photo_library_button_pressed();
    f.view.video_button_pressed();

    assert!(f
        .logger
        .messages()
        .iter()
        .any(|m| m == "classify_view: No delegate attached, dropping camera request"));
}

#[test]
fn test_dropped_delegate_is_not_kept_alive() {
    let mut f = Fixture::new();
    let delegate = f.attach_delegate();
    let weak = std::sync::Arc::downgrade(&delegate);

    drop(delegate);
    f.view.activate(ActionControl::Camera);

    assert!(weak.upgrade().is_none());
}

#[test]
fn test_cleared_delegate_receives_nothing() {
    let mut f = Fixture::new();
    let delegate = f.attach_delegate();

    f.view.clear_delegate();
    f.view.activate(ActionControl::Video);

    assert!(delegate.notifications().is_empty());
}

#[test]
fn test_replacing_delegate_routes_to_new_one_only() {
    let mut f = Fixture::new();
    let old = f.attach_delegate();

    f.view.activate(ActionControl::Camera);
    let new = f.attach_delegate();
    f.view.activate(ActionControl::PhotoLibrary);
    f.view.activate(ActionControl::Video);

    assert_eq!(old.notifications(), vec![Notification::Camera]);
    assert_eq!(
        new.notifications(),
        vec![Notification::PhotoLibrary, Notification::Video]
    );
}

#[test]
fn test_controls_enabled_with_camera() {
    let f = Fixture::with_camera(true);

    assert!(f.view.is_enabled(ActionControl::Camera));
    assert!(f.view.is_enabled(ActionControl::Video));
    assert!(f.view.is_enabled(ActionControl::PhotoLibrary));
}

#[test]
fn test_controls_disabled_without_camera() {
    let f = Fixture::with_camera(false);

    assert!(!f.view.is_enabled(ActionControl::Camera));
    assert!(!f.view.is_enabled(ActionControl::Video));
    assert!(f.view.is_enabled(ActionControl::PhotoLibrary));
}

#[test]
fn test_disabled_controls_do_not_forward() {
    let mut f = Fixture::with_camera(false);
    let delegate = f.attach_delegate();

    f.view.activate(ActionControl::Camera);
    f.view.activate(ActionControl::Video);
    f.view.activate(ActionControl::PhotoLibrary);

    assert_eq!(delegate.notifications(), vec![Notification::PhotoLibrary]);
}
