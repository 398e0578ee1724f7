use std::cell::RefCell;
use std::rc::Rc;
use toast::{Position, ToastId, ToastKind, ToastOptions};
use yew::prelude::*;

pub mod components;
pub mod contexts;
mod logs;
pub mod timer;

use components::{ActivationEvent, ToastContainer};
use contexts::{ToastProvider, use_toast};

/// Start logging and mount the demo app on the document body.
pub fn run() {
    logs::init_logging();
    yew::Renderer::<App>::new().render();
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <main class="ct-demo">
                <Demo />
            </main>
            <ToastContainer />
        </ToastProvider>
    }
}

/// Buttons exercising each kind of toast.
#[function_component]
fn Demo() -> Html {
    let toast_handle = use_toast();
    let loading_id = use_mut_ref(|| None::<ToastId>);

    let buttons = [
        ToastKind::Success,
        ToastKind::Info,
        ToastKind::Warn,
        ToastKind::Error,
    ]
    .into_iter()
    .map(|kind| {
        let toast_handle = toast_handle.clone();
        let label = kind.to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            toast_handle.show(
                format!("This is a {kind} toast"),
                ToastOptions {
                    kind: kind.clone(),
                    ..Default::default()
                },
            );
        });
        html! { <button {onclick}>{label}</button> }
    });

    let on_headed = {
        let toast_handle = toast_handle.clone();
        Callback::from(move |_: MouseEvent| {
            toast_handle.show(
                "Stays until you click hide all",
                ToastOptions {
                    kind: ToastKind::Info,
                    heading: Some("Sticky".to_string()),
                    hide_after: 0.0,
                    position: Position::BottomRight,
                    ..Default::default()
                },
            );
        })
    };

    let on_loading = toggle_loading(toast_handle.clone(), loading_id);

    let on_hide_all = {
        let toast_handle = toast_handle.clone();
        Callback::from(move |_: MouseEvent| toast_handle.hide_all())
    };

    html! {
        <div class="ct-demo-buttons">
            {for buttons}
            <button onclick={on_headed}>{"heading"}</button>
            <button onclick={on_loading}>{"loading"}</button>
            <button onclick={on_hide_all}>{"hide all"}</button>
            <ActivatableToast />
        </div>
    }
}

fn toggle_loading(
    toast_handle: contexts::ToastHandle,
    loading_id: Rc<RefCell<Option<ToastId>>>,
) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        let mut loading_id = loading_id.borrow_mut();
        match loading_id.take() {
            Some(id) => toast_handle.hide(id),
            None => *loading_id = Some(toast_handle.loading("Loading...")),
        }
    })
}

/// A standalone toast outside the provider, dismissed by clicking it.
#[function_component]
fn ActivatableToast() -> Html {
    let key = use_state(ToastId::new);
    let visible = use_state(|| true);

    let on_activate = {
        let visible = visible.clone();
        Callback::from(move |event: ActivationEvent| {
            tracing::info!(?event, "toast activated");
            visible.set(false);
        })
    };

    let on_dismissed = {
        let key = key.clone();
        let visible = visible.clone();
        Callback::from(move |(id, position): (ToastId, Position)| {
            tracing::info!(toast = %id, %position, "remounting demo toast");
            visible.set(true);
            key.set(ToastId::new());
        })
    };

    html! {
        <components::ToastItem
            key={key.to_string()}
            id={*key}
            message={html! { {"Click me or press Enter to dismiss"} }}
            options={ToastOptions {
                kind: ToastKind::Success,
                hide_after: 0.0,
                ..Default::default()
            }}
            visible={*visible}
            {on_dismissed}
            on_activate={Some(on_activate)}
        />
    }
}
