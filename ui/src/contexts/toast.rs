use std::rc::Rc;
use toast::{ToastId, ToastKind, ToastOptions};
use yew::prelude::*;

/// A toast the provider is currently rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub message: AttrValue,
    pub options: ToastOptions,
    /// Flipped to false to ask the toast to leave; it is removed from the
    /// list only once it reports itself dismissed.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    /// In the order they were shown.
    pub toasts: Vec<ActiveToast>,
}

pub enum ToastAction {
    Add(ActiveToast),
    Hide(ToastId),
    HideAll,
    Remove(ToastId),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                toasts.push(toast);
            }
            ToastAction::Hide(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.visible = false;
                }
            }
            ToastAction::HideAll => {
                for toast in &mut toasts {
                    toast.visible = false;
                }
            }
            ToastAction::Remove(id) => {
                toasts.retain(|t| t.id != id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    /// Show a toast and return its id, for hiding it later.
    pub fn show(
        &self,
        message: impl Into<AttrValue>,
        options: ToastOptions,
    ) -> ToastId {
        let id = ToastId::new();
        tracing::debug!(toast = %id, kind = %options.kind, "showing toast");
        self.context.dispatch(ToastAction::Add(ActiveToast {
            id,
            message: message.into(),
            options,
            visible: true,
        }));
        id
    }

    fn show_kind(
        &self,
        message: impl Into<AttrValue>,
        kind: ToastKind,
    ) -> ToastId {
        self.show(
            message,
            ToastOptions {
                kind,
                ..Default::default()
            },
        )
    }

    pub fn success(&self, message: impl Into<AttrValue>) -> ToastId {
        self.show_kind(message, ToastKind::Success)
    }

    pub fn info(&self, message: impl Into<AttrValue>) -> ToastId {
        self.show_kind(message, ToastKind::Info)
    }

    pub fn warn(&self, message: impl Into<AttrValue>) -> ToastId {
        self.show_kind(message, ToastKind::Warn)
    }

    pub fn error(&self, message: impl Into<AttrValue>) -> ToastId {
        self.show_kind(message, ToastKind::Error)
    }

    /// Loading toasts stay until hidden.
    pub fn loading(&self, message: impl Into<AttrValue>) -> ToastId {
        self.show(
            message,
            ToastOptions {
                kind: ToastKind::Loading,
                hide_after: 0.0,
                ..Default::default()
            },
        )
    }

    /// Start the toast's exit animation.
    pub fn hide(&self, id: ToastId) {
        self.context.dispatch(ToastAction::Hide(id));
    }

    pub fn hide_all(&self) {
        self.context.dispatch(ToastAction::HideAll);
    }

    /// Forget a toast immediately, skipping its exit animation.
    pub fn remove(&self, id: ToastId) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}
