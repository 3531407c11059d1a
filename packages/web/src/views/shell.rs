use dioxus::prelude::*;
use ui::Toaster;

use crate::Route;

/// Root layout: the routed page plus the toast host.
#[component]
pub fn Shell() -> Element {
    rsx! {
        main {
            class: "min-h-screen",
            Outlet::<Route> {}
        }
        Toaster {}
    }
}
