use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaEyeSlash};
use dioxus_free_icons::Icon;

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "Password".to_string())] placeholder: String,
    #[props(default = "password".to_string())] name: String,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div {
            class: "flex relative w-full justify-center items-center mt-3",
            input {
                required: true,
                r#type: if visible() { "text" } else { "password" },
                name: "{name}",
                id: "{name}",
                placeholder: "{placeholder}",
                class: "focus:outline-none border-b-[1px] pb-2 border-[lightgray] w-full",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            span {
                class: "absolute right-2 text-[gray] cursor-pointer",
                onclick: move |_| visible.set(!visible()),
                if visible() {
                    Icon { icon: FaEyeSlash, width: 16, height: 16 }
                } else {
                    Icon { icon: FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}
