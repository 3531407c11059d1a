//! Profile page: the stored user's details, or a prompt to log in.

use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore};
use ui::use_session_store;

use crate::Route;

/// What the profile page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    LoginPrompt,
    Details { name: String, email: String },
}

impl ProfileView {
    /// Decide from the login flag first; the record is read only when it is set.
    pub fn load<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        if !session.read_logged_in() {
            return Self::LoginPrompt;
        }
        let user = session.read_user().unwrap_or_default();
        Self::Details {
            name: user.name,
            email: user.email,
        }
    }
}

/// Profile page component.
#[component]
pub fn Profile() -> Element {
    let session = use_session_store();
    let view = ProfileView::load(&session);

    rsx! {
        div {
            class: "container mx-auto p-5 flex justify-center items-center flex-col",
            h2 {
                class: "text-4xl text-black font-bold text-center",
                "User Details"
            }

            {match view {
                ProfileView::LoginPrompt => rsx! {
                    div {
                        class: "h-[100vh] flex flex-col justify-center items-center gap-5",
                        p {
                            class: "text-[gray] text-xl font-semibold text-center",
                            "Oops! You are not logged in."
                        }
                        Link {
                            to: Route::Login {},
                            button {
                                class: "bg-black px-5 py-2 rounded text-white",
                                "Login here"
                            }
                        }
                    }
                },
                ProfileView::Details { name, email } => rsx! {
                    div {
                        class: "h-screen flex justify-center items-center",
                        div {
                            class: "h-[500px] w-[500px] bg-[#e7e7e7] rounded-lg flex flex-col justify-center items-center gap-3",
                            h3 { class: "text-2xl font-semibold text-black capitalize", "{name}" }
                            p { class: "text-[#424242] font-medium", "{email}" }
                        }
                    }
                },
            }}
        }
    }
}
