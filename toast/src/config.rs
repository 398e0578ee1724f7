use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

use crate::Error;

/// Identifies a toast among the ones currently on screen. Only reported back
/// to the caller on dismissal, never interpreted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ToastId(pub Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects the default icon and accent color.
///
/// Kinds outside the known set are kept as [`ToastKind::Other`] so that a
/// typo degrades to "no default icon" instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastKind {
    Success,
    #[default]
    Info,
    Warn,
    Error,
    Loading,
    Other(String),
}

impl ToastKind {
    pub fn as_str(&self) -> &str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warn => "warn",
            ToastKind::Error => "error",
            ToastKind::Loading => "loading",
            ToastKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ToastKind {
    fn from(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "info" => ToastKind::Info,
            "warn" => ToastKind::Warn,
            "error" => ToastKind::Error,
            "loading" => ToastKind::Loading,
            other => ToastKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ToastKind {
    fn from(s: String) -> Self {
        ToastKind::from(s.as_str())
    }
}

impl From<ToastKind> for String {
    fn from(kind: ToastKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Screen corner the caller places the toast in. Only the vertical half
/// matters here: it picks the margin the entry and exit animations move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    #[display("top-left")]
    TopLeft,
    #[default]
    #[display("top-center")]
    TopCenter,
    #[display("top-right")]
    TopRight,
    #[display("bottom-left")]
    BottomLeft,
    #[display("bottom-center")]
    BottomCenter,
    #[display("bottom-right")]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The margin animated for this position: bottom positions slide along
    /// the bottom margin, every other position along the top margin.
    pub fn edge(self) -> Edge {
        match self {
            Position::BottomLeft
            | Position::BottomCenter
            | Position::BottomRight => Edge::Bottom,
            _ => Edge::Top,
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Position::ALL
            .into_iter()
            .find(|position| position.to_string() == s)
            .ok_or_else(|| Error::UnknownPosition(s.to_string()))
    }
}

impl TryFrom<String> for Position {
    type Error = Error;

    fn try_from(s: String) -> crate::Result<Self> {
        s.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Edge {
    #[display("top")]
    Top,
    #[display("bottom")]
    Bottom,
}

impl Edge {
    /// CSS property carrying the animated offset.
    pub fn margin_property(self) -> &'static str {
        match self {
            Edge::Top => "margin-top",
            Edge::Bottom => "margin-bottom",
        }
    }
}

/// Overrides for the left accent bar. Every field falls back on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentBar {
    #[serde(alias = "size")]
    pub thickness: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
}

impl AccentBar {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }
}

/// Every display parameter that is plain data, so options can be written
/// as JSON or assembled by the `ToastHandle` helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    pub kind: ToastKind,
    pub heading: Option<String>,
    /// Seconds until the toast hides itself, 0 to keep it until hidden.
    pub hide_after: f64,
    pub position: Position,
    pub bar: AccentBar,
    pub role: String,
}

pub const DEFAULT_HIDE_AFTER_SECS: f64 = 3.0;
pub const DEFAULT_ROLE: &str = "status";

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            kind: ToastKind::default(),
            heading: None,
            hide_after: DEFAULT_HIDE_AFTER_SECS,
            position: Position::default(),
            bar: AccentBar::default(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

/// Immutable per-instance parameters. `M` is the message content, opaque to
/// the lifecycle: plain text here, markup on a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig<M = String> {
    pub id: ToastId,
    pub message: M,
    pub visible: bool,
    pub options: ToastOptions,
}

impl<M> ToastConfig<M> {
    pub fn new(id: ToastId, message: M) -> Self {
        Self::with_options(id, message, ToastOptions::default())
    }

    pub fn with_options(id: ToastId, message: M, options: ToastOptions) -> Self {
        Self {
            id,
            message,
            visible: true,
            options,
        }
    }

    pub fn kind(mut self, kind: impl Into<ToastKind>) -> Self {
        self.options.kind = kind.into();
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.options.heading = Some(heading.into());
        self
    }

    pub fn hide_after(mut self, seconds: f64) -> Self {
        self.options.hide_after = seconds;
        self
    }

    pub fn no_auto_hide(self) -> Self {
        self.hide_after(0.0)
    }

    pub fn position(mut self, position: Position) -> Self {
        self.options.position = position;
        self
    }

    pub fn bar(mut self, bar: AccentBar) -> Self {
        self.options.bar = bar;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.options.role = role.into();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Delay from mount until the toast hides itself, if it ever does.
    /// Zero, negative, non-finite and unrepresentably large values all mean
    /// "never".
    pub fn auto_hide(&self) -> Option<Duration> {
        let seconds = self.options.hide_after;
        if seconds > 0.0 {
            Duration::try_from_secs_f64(seconds).ok()
        } else {
            None
        }
    }
}
