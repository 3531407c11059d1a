//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::{make_image_host, make_session_store, PlatformStore};

mod session;
pub use session::{use_image_host, use_session_store, SessionProvider};

pub mod toast;
pub use toast::{push_toast, use_toasts, ToastProvider, Toaster};

mod password_input;
pub use password_input::PasswordInput;

mod image_picker;
pub use image_picker::{display_file_name, ImagePicker};
