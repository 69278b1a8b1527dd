pub mod impl_fake;
pub mod impl_video_device;
pub mod interface;
