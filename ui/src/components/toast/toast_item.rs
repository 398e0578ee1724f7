use toast::presentation::{IconChoice, is_activation_key, palette};
use toast::{
    Appearance, Lifecycle, Position, ToastConfig, ToastId, ToastOptions,
    VisualState, describe,
};
use yew::prelude::*;

use super::icons;
use crate::timer::BrowserScheduler;

/// The browser event that activated an interactive toast, passed on as is.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationEvent {
    Pointer(MouseEvent),
    Key(KeyboardEvent),
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub id: ToastId,
    pub message: Html,
    #[prop_or_default]
    pub options: ToastOptions,
    /// Set to false to make the toast leave.
    #[prop_or(true)]
    pub visible: bool,
    /// Called once the exit animation is over; remove the toast then.
    pub on_dismissed: Callback<(ToastId, Position)>,
    /// Makes the toast focusable and clickable when set.
    #[prop_or_default]
    pub on_activate: Option<Callback<ActivationEvent>>,
    /// Replaces the kind's default icon.
    #[prop_or_default]
    pub render_icon: Option<Callback<(), Html>>,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let config = ToastConfig::with_options(props.id, (), props.options.clone())
        .visible(props.visible);

    let visual =
        use_state(|| VisualState::hidden(props.options.position.edge()));
    let lifecycle = use_mut_ref(|| None::<Lifecycle<BrowserScheduler>>);

    // The lifecycle is mounted once, so it reads the latest callback from
    // here instead of capturing the first one.
    let on_dismissed = use_mut_ref(|| props.on_dismissed.clone());
    *on_dismissed.borrow_mut() = props.on_dismissed.clone();

    {
        let lifecycle = lifecycle.clone();
        let setter = visual.setter();
        let config = config.clone();
        use_effect_with((), move |_| {
            *lifecycle.borrow_mut() = Some(Lifecycle::mount(
                &config,
                BrowserScheduler,
                move |state| setter.set(state),
                move |id, position| {
                    let callback = on_dismissed.borrow().clone();
                    callback.emit((id, position));
                },
            ));

            // Cleanup: dropping the lifecycle clears every pending timer
            move || {
                lifecycle.borrow_mut().take();
            }
        });
    }

    {
        let lifecycle = lifecycle.clone();
        use_effect_with(props.visible, move |&visible| {
            if let Some(lifecycle) = lifecycle.borrow().as_ref() {
                lifecycle.observe_visible(visible);
            }
            || ()
        });
    }

    let appearance = Appearance::of(&config)
        .interactive(props.on_activate.is_some())
        .custom_icon(props.render_icon.is_some());
    let view = describe(&appearance, &*visual);

    let icon = match view.icon {
        IconChoice::Custom => props
            .render_icon
            .as_ref()
            .map(|render_icon| render_icon.emit(()))
            .unwrap_or_default(),
        IconChoice::Default(icon) => icons::render(
            icon,
            palette(&props.options.kind).unwrap_or("currentColor"),
        ),
        IconChoice::None => html! {},
    };

    let content = html! {
        <>
            {icon}
            <div class={view.layout.class()}>
                if let Some(heading) = &props.options.heading {
                    <h4 class="ct-heading">{heading.clone()}</h4>
                }
                <div class="ct-text">{props.message.clone()}</div>
            </div>
        </>
    };

    let class = view.class();
    let role = view.role.clone();
    let style = view.style.to_css();

    match (&props.on_activate, view.tab_index) {
        (Some(on_activate), Some(tab_index)) => {
            let onclick = {
                let on_activate = on_activate.clone();
                Callback::from(move |e: MouseEvent| {
                    on_activate.emit(ActivationEvent::Pointer(e));
                })
            };
            let onkeypress = {
                let on_activate = on_activate.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if is_activation_key(&e.key(), e.key_code()) {
                        on_activate.emit(ActivationEvent::Key(e));
                    }
                })
            };

            html! {
                <div
                    {class}
                    {role}
                    {style}
                    tabindex={tab_index.to_string()}
                    {onclick}
                    {onkeypress}
                >
                    {content}
                </div>
            }
        }
        _ => html! {
            <div {class} {role} {style}>
                {content}
            </div>
        },
    }
}
