//! Registration page view: profile picture upload followed by local sign-up.

use api::{ImageFile, Registration, RegistrationForm};
use dioxus::prelude::*;
use ui::icons::FaHouse;
use ui::{
    push_toast, use_image_host, use_session_store, use_toasts, Icon, ImagePicker, PasswordInput,
};

use crate::Route;

const INPUT_CLASS: &str = "focus:outline-none border-b-[1px] pb-2 border-[lightgray] w-full";

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session_store();
    let host = use_image_host();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut image = use_signal(|| Option::<ImageFile>::None);
    let mut password_error = use_signal(|| Option::<&'static str>::None);

    // Submissions are not serialised: a second submit while an upload is in
    // flight starts its own registration.
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let host = host.clone();
        spawn(async move {
            let form = RegistrationForm {
                name: name(),
                email: email(),
                phone: phone(),
                password: password(),
            };
            let mut registration = Registration::new(host, session);
            let outcome = registration.submit(image(), form).await;
            tracing::debug!("Registration finished in {:?}", registration.state());

            if let Some(message) = outcome.password_error() {
                password_error.set(message);
            }
            if let Some(notice) = outcome.notice() {
                push_toast(&mut toasts, notice);
            }
            if outcome.is_complete() {
                nav.push(Route::Profile {});
            }
        });
    };

    let file_name = image
        .read()
        .as_ref()
        .map(|i| i.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "container mx-auto p-5 min-h-[100vh] flex flex-col justify-center items-center relative",

            div {
                class: "space-y-14 flex flex-col justify-center items-center w-full mt-12 md:mt-5",
                h2 {
                    class: "text-4xl font-bold text-center",
                    "Sign up for free!"
                }

                form {
                    onsubmit: handle_register,
                    class: "flex flex-col justify-center items-center w-full md:w-2/3 lg:w-1/3 gap-8 px-10",

                    div {
                        class: "w-full flex flex-col justify-center items-start gap-4",
                        label { class: "font-medium", r#for: "name", "Your Name " span { class: "text-[red]", "*" } }
                        input {
                            required: true,
                            r#type: "text",
                            name: "name",
                            id: "name",
                            placeholder: "Full name",
                            class: INPUT_CLASS,
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "w-full flex flex-col justify-center items-start gap-4",
                        label { class: "font-medium", r#for: "email", "Your Email " span { class: "text-[red]", "*" } }
                        input {
                            required: true,
                            r#type: "email",
                            name: "email",
                            id: "email",
                            placeholder: "Email address",
                            class: INPUT_CLASS,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "w-full flex flex-col justify-center items-start gap-4",
                        label { class: "font-medium", r#for: "phone", "Your Phone " span { class: "text-[red]", "*" } }
                        input {
                            required: true,
                            r#type: "tel",
                            name: "phone",
                            id: "phone",
                            placeholder: "Phone number",
                            class: INPUT_CLASS,
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }

                    div {
                        class: "w-full",
                        label { class: "font-medium", r#for: "password", "Your password " span { class: "text-[red]", "*" } }
                        PasswordInput {
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(message) = password_error() {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    ImagePicker {
                        file_name,
                        onselect: move |selected: Option<ImageFile>| {
                            tracing::debug!(
                                "Profile picture {}",
                                selected.as_ref().map_or("cleared", |i| i.name.as_str())
                            );
                            image.set(selected);
                        },
                    }

                    input {
                        r#type: "submit",
                        value: "Register",
                        class: "bg-black px-4 py-2 rounded text-white font-semibold w-full cursor-pointer",
                    }
                }

                Link {
                    to: Route::Profile {},
                    class: "text-[gray] absolute top-0 left-5 flex justify-center items-center gap-2 font-semibold",
                    Icon { icon: FaHouse, width: 14, height: 14 }
                    " Back to Home"
                }
            }

            div {
                class: "mt-5 flex justify-center items-center gap-1",
                p { class: "text-center font-medium", "Already have an account?" }
                Link {
                    to: Route::Login {},
                    class: "font-bold border-b-2 border-[gray] px-2 py-1",
                    "Login"
                }
            }
        }
    }
}
