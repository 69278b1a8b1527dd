pub mod delegate;
pub mod layout;
pub mod main;
pub mod render;
