use dioxus::prelude::*;

use crate::newsletter::NewsletterForm;

#[component]
pub fn NewsletterSignup() -> Element {
    let mut form = use_signal(NewsletterForm::default);

    let snapshot = form();
    let feedback = snapshot.feedback();
    let feedback_class = if feedback.is_error() {
        "newsletter__feedback newsletter__feedback--error"
    } else {
        "newsletter__feedback newsletter__feedback--success"
    };

    rsx! {
        section { class: "newsletter", aria_label: "Newsletter signup",
            div { class: "newsletter__pitch",
                h2 { class: "newsletter__heading", "🍔 Join Our Foodie Newsletter!" }
                p { class: "newsletter__copy",
                    "Get delicious reviews, exclusive deals, and new posts direct to your inbox."
                }
                if let Some(msg) = feedback.message() {
                    div { class: "{feedback_class}", "{msg}" }
                }
            }
            form {
                class: "newsletter__form",
                aria_label: "Subscribe to newsletter",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    form.with_mut(|state| {
                        state.submit();
                    });
                },
                input {
                    class: "newsletter__input",
                    r#type: "email",
                    placeholder: "Your email",
                    aria_label: "Email address",
                    autocomplete: "email",
                    value: "{snapshot.email()}",
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|state| state.set_email(evt.value()));
                    },
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    aria_label: "Subscribe",
                    "Subscribe"
                }
            }
        }
    }
}
