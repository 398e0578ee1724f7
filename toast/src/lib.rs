//! Lifecycle and presentation of a single transient notification.
//!
//! The crate is platform independent. A rendering surface (the `ui` crate
//! for the browser, or a virtual clock in tests) supplies a [`Scheduler`]
//! and re-renders whenever the [`Lifecycle`] reports a new [`VisualState`].
//!
//! ```text
//!  mount        50ms                hide trigger      +300ms
//!    |-----------|---------------------|----------------|
//!  hidden      visible              leaving         on_dismissed
//!  (opacity 0, (opacity 1,          (opacity 0,
//!   offset -15) offset +15)          offset -15)
//! ```

pub mod config;
pub mod lifecycle;
pub mod presentation;
pub mod timer;

pub use config::{
    AccentBar, Edge, ToastConfig, ToastId, ToastKind, ToastOptions, Position,
};
pub use lifecycle::{Lifecycle, Phase, VisualState};
pub use presentation::{
    Appearance, Icon, IconChoice, Layout, ToastStyle, ToastView, describe,
};
pub use timer::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown toast position: {0}")]
    UnknownPosition(String),
}

pub type Result<T> = std::result::Result<T, Error>;
