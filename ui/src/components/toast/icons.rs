use toast::Icon;
use yew::prelude::*;

/// Default icon for a known toast kind, filled with `color`.
pub fn render(icon: Icon, color: &str) -> Html {
    let shape = match icon {
        Icon::Success => html! {
            <path
                fill={color.to_string()}
                d="M16 2a14 14 0 1 0 0 28 14 14 0 0 0 0-28zm-2.2 20.1-6-6 \
                   1.9-1.9 4.1 4.1 8.6-8.6 1.9 1.9z"
            />
        },
        Icon::Info => html! {
            <path
                fill={color.to_string()}
                d="M16 2a14 14 0 1 0 0 28 14 14 0 0 0 0-28zm1.5 21h-3v-9h3zm0\
                   -12h-3V8h3z"
            />
        },
        Icon::Warn => html! {
            <path
                fill={color.to_string()}
                d="M16 3 1.5 28h29zm1.5 21h-3v-3h3zm0-5h-3v-7h3z"
            />
        },
        Icon::Error => html! {
            <path
                fill={color.to_string()}
                d="M16 2a14 14 0 1 0 0 28 14 14 0 0 0 0-28zm5.7 17.6-2.1 \
                   2.1-3.6-3.6-3.6 3.6-2.1-2.1 3.6-3.6-3.6-3.6 2.1-2.1 3.6 \
                   3.6 3.6-3.6 2.1 2.1-3.6 3.6z"
            />
        },
        Icon::Loading => html! {
            <circle
                cx="16"
                cy="16"
                r="12"
                fill="none"
                stroke={color.to_string()}
                stroke-width="4"
                stroke-dasharray="56 20"
                class="ct-icon-loading"
            />
        },
    };

    html! {
        <svg
            class="ct-icon"
            viewBox="0 0 32 32"
            width="20"
            height="20"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
}
