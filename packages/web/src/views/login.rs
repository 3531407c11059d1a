//! Login page view: checks credentials against the locally registered user.

use api::auth::SIGNED_IN_NOTICE;
use api::{sign_in, Notice};
use dioxus::prelude::*;
use ui::{push_toast, use_session_store, use_toasts, PasswordInput};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session_store();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        match sign_in(&session, &email(), &password()) {
            Ok(_) => {
                error.set(None);
                push_toast(&mut toasts, Notice::success(SIGNED_IN_NOTICE));
                nav.push(Route::Profile {});
            }
            Err(e) => {
                tracing::debug!("Login rejected: {:?}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "container mx-auto p-5 min-h-[100vh] flex flex-col justify-center items-center",

            h2 {
                class: "text-4xl font-bold text-center mb-10",
                "Welcome back!"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col justify-center items-center w-full md:w-2/3 lg:w-1/3 gap-8 px-10",

                div {
                    class: "w-full flex flex-col justify-center items-start gap-4",
                    label { class: "font-medium", r#for: "email", "Your Email" }
                    input {
                        required: true,
                        r#type: "email",
                        name: "email",
                        id: "email",
                        placeholder: "Email address",
                        class: "focus:outline-none border-b-[1px] pb-2 border-[lightgray] w-full",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "w-full",
                    label { class: "font-medium", r#for: "password", "Your password" }
                    PasswordInput {
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    if let Some(err) = error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                input {
                    r#type: "submit",
                    value: "Login",
                    class: "bg-black px-4 py-2 rounded text-white font-semibold w-full cursor-pointer",
                }
            }

            div {
                class: "mt-5 flex justify-center items-center gap-1",
                p { class: "text-center font-medium", "New here?" }
                Link {
                    to: Route::Register {},
                    class: "font-bold border-b-2 border-[gray] px-2 py-1",
                    "Register"
                }
            }
        }
    }
}
