pub mod toast;

pub use toast::{ActivationEvent, ToastContainer, ToastItem};
