use super::ToastItem;
use crate::contexts::toast::{ToastContext, ToastHandle};
use toast::{Position, ToastId};
use yew::prelude::*;

/// Renders every active toast as a flat list, in the order they were shown.
/// Placing the list on screen is left to the surrounding layout.
#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    if context.toasts.is_empty() {
        return html! {};
    }

    let on_dismissed = {
        let toast_handle = ToastHandle::new(context.clone());
        Callback::from(move |(id, position): (ToastId, Position)| {
            tracing::debug!(toast = %id, %position, "removing dismissed toast");
            toast_handle.remove(id);
        })
    };

    html! {
        <div class="ct-container">
            {for context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem
                        key={toast.id.to_string()}
                        id={toast.id}
                        message={html! { {toast.message.to_string()} }}
                        options={toast.options.clone()}
                        visible={toast.visible}
                        on_dismissed={on_dismissed.clone()}
                    />
                }
            })}
        </div>
    }
}
