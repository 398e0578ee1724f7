pub mod icons;
pub mod toast_container;
pub mod toast_item;

pub use toast_container::ToastContainer;
pub use toast_item::{ActivationEvent, ToastItem};
