//! Session context and hooks for the UI.
//!
//! Views never build their own stores: [`SessionProvider`] creates one session
//! store and one image host at the root and every view pulls them from context.
//! Nothing about the user is cached here; views read the store when they render.

use api::ImgbbClient;
use dioxus::prelude::*;
use store::SessionStore;

use crate::repo::{make_image_host, make_session_store, PlatformStore};

/// Get the session store shared by the whole app.
pub fn use_session_store() -> SessionStore<PlatformStore> {
    use_context::<SessionStore<PlatformStore>>()
}

/// Get the image host client shared by the whole app.
pub fn use_image_host() -> ImgbbClient {
    use_context::<ImgbbClient>()
}

/// Provider component for the session store and image host.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(make_session_store);
    use_context_provider(make_image_host);

    rsx! {
        {children}
    }
}
