//! Pure mapping from config and lifecycle state to what gets rendered.

use crate::config::{AccentBar, Edge, ToastConfig, ToastKind};
use crate::lifecycle::VisualState;

pub const DEFAULT_BAR_THICKNESS: &str = "3px";
pub const DEFAULT_BAR_STYLE: &str = "solid";
pub const HEADING_PADDING_LEFT: u32 = 25;
pub const HEADING_MIN_HEIGHT: u32 = 50;

/// Accent color for each known kind.
pub fn palette(kind: &ToastKind) -> Option<&'static str> {
    match kind {
        ToastKind::Success => Some("#6EC05F"),
        ToastKind::Info => Some("#1271EC"),
        ToastKind::Warn => Some("#FED953"),
        ToastKind::Error => Some("#D60A2E"),
        ToastKind::Loading => Some("#0088ff"),
        ToastKind::Other(_) => None,
    }
}

/// Default icons, one per known kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Success,
    Info,
    Warn,
    Error,
    Loading,
}

impl Icon {
    pub fn for_kind(kind: &ToastKind) -> Option<Self> {
        match kind {
            ToastKind::Success => Some(Icon::Success),
            ToastKind::Info => Some(Icon::Info),
            ToastKind::Warn => Some(Icon::Warn),
            ToastKind::Error => Some(Icon::Error),
            ToastKind::Loading => Some(Icon::Loading),
            ToastKind::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconChoice {
    /// The caller's own icon renderer.
    Custom,
    Default(Icon),
    /// Unknown kind and no custom renderer: nothing is drawn.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Heading,
    Plain,
}

impl Layout {
    pub fn class(self) -> &'static str {
        match self {
            Layout::Heading => "ct-text-group-heading",
            Layout::Plain => "ct-text-group",
        }
    }
}

/// The inputs of [`describe`] that do not change over a toast's life.
#[derive(Debug, Clone, Copy)]
pub struct Appearance<'a> {
    pub kind: &'a ToastKind,
    pub heading: Option<&'a str>,
    pub bar: &'a AccentBar,
    pub role: &'a str,
    /// Whether the caller handles activation (click or Enter).
    pub interactive: bool,
    pub custom_icon: bool,
}

impl<'a> Appearance<'a> {
    pub fn of<M>(config: &'a ToastConfig<M>) -> Self {
        Self {
            kind: &config.options.kind,
            heading: config.options.heading.as_deref(),
            bar: &config.options.bar,
            role: &config.options.role,
            interactive: false,
            custom_icon: false,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn custom_icon(mut self, custom_icon: bool) -> Self {
        self.custom_icon = custom_icon;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastStyle {
    pub padding_left: Option<u32>,
    pub min_height: Option<u32>,
    pub border_left: String,
    pub opacity: f32,
    pub offset: i32,
    pub edge: Edge,
}

impl ToastStyle {
    /// Inline CSS declarations for the toast's root element.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(padding) = self.padding_left {
            css.push_str(&format!("padding-left: {padding}px; "));
        }
        if let Some(height) = self.min_height {
            css.push_str(&format!("min-height: {height}px; "));
        }
        css.push_str(&format!(
            "border-left: {}; opacity: {}; {}: {}px;",
            self.border_left,
            self.opacity,
            self.edge.margin_property(),
            self.offset
        ));
        css
    }
}

/// Everything a rendering surface needs to draw the toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub classes: Vec<String>,
    pub role: String,
    pub style: ToastStyle,
    pub icon: IconChoice,
    pub layout: Layout,
    /// `Some(0)` when interactive; non-interactive toasts expose no tab
    /// order or activation handlers at all.
    pub tab_index: Option<i32>,
}

impl ToastView {
    pub fn class(&self) -> String {
        self.classes.join(" ")
    }

    pub fn is_interactive(&self) -> bool {
        self.tab_index.is_some()
    }
}

/// `thickness style color`, each part falling back independently when
/// missing or blank. An unknown kind without a color override has no color
/// part.
pub fn border_left<'a>(kind: &ToastKind, bar: &'a AccentBar) -> String {
    let field = |value: &'a Option<String>| {
        value.as_deref().filter(|value| !value.trim().is_empty())
    };
    let thickness = field(&bar.thickness).unwrap_or(DEFAULT_BAR_THICKNESS);
    let style = field(&bar.style).unwrap_or(DEFAULT_BAR_STYLE);
    match field(&bar.color).or_else(|| palette(kind)) {
        Some(color) => format!("{thickness} {style} {color}"),
        None => format!("{thickness} {style}"),
    }
}

pub fn describe(appearance: &Appearance<'_>, state: &VisualState) -> ToastView {
    let has_heading = appearance.heading.is_some();

    let mut classes = vec!["ct-toast".to_string()];
    if appearance.interactive {
        classes.push("ct-cursor-pointer".to_string());
    }
    classes.push(format!("ct-toast-{}", appearance.kind));

    let icon = if appearance.custom_icon {
        IconChoice::Custom
    } else {
        match Icon::for_kind(appearance.kind) {
            Some(icon) => IconChoice::Default(icon),
            None => {
                tracing::debug!(
                    kind = %appearance.kind,
                    "no default icon for toast kind"
                );
                IconChoice::None
            }
        }
    };

    ToastView {
        classes,
        role: appearance.role.to_string(),
        style: ToastStyle {
            padding_left: has_heading.then_some(HEADING_PADDING_LEFT),
            min_height: has_heading.then_some(HEADING_MIN_HEIGHT),
            border_left: border_left(appearance.kind, appearance.bar),
            opacity: state.opacity,
            offset: state.offset,
            edge: state.edge,
        },
        icon,
        layout: if has_heading {
            Layout::Heading
        } else {
            Layout::Plain
        },
        tab_index: appearance.interactive.then_some(0),
    }
}

/// Whether a key press activates an interactive toast. `key_code` covers
/// browsers that only report the legacy code.
pub fn is_activation_key(key: &str, key_code: u32) -> bool {
    key == "Enter" || key_code == 13
}
