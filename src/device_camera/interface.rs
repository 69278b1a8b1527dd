/// Answers whether the machine has camera hardware the app could capture from.
pub trait DeviceCamera {
    fn is_available(&self) -> bool;
}
