use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    pub label: String,
    #[prop_or_default]
    pub classes: Classes,
}

// Fire-and-forget hand-offs to the OS dialer/mail client. Plain anchors, no
// click handling, no outcome to observe.

#[function_component(CallButton)]
pub fn call_button(props: &ContactButtonProps) -> Html {
    html! {
        <a
            class={classes!("contact-button", "call-button", props.classes.clone())}
            href={config::tel_href()}
        >
            <i class="phone-icon"></i>
            { &props.label }
        </a>
    }
}

#[function_component(EmailButton)]
pub fn email_button(props: &ContactButtonProps) -> Html {
    html! {
        <a
            class={classes!("contact-button", "email-button", props.classes.clone())}
            href={config::mailto_href()}
        >
            <i class="mail-icon"></i>
            { &props.label }
        </a>
    }
}
