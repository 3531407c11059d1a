use api::ImageFile;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;

/// Longest file name shown before truncating.
pub const MAX_SHOWN_NAME: usize = 25;
pub const PICKER_PROMPT: &str = "Choose your profile picture";

/// Label text for the picker given the selected file's name.
pub fn display_file_name(name: &str) -> String {
    if name.is_empty() {
        return PICKER_PROMPT.to_string();
    }
    if name.chars().count() > MAX_SHOWN_NAME {
        let head: String = name.chars().take(MAX_SHOWN_NAME).collect();
        return format!("{head}....");
    }
    name.to_string()
}

/// Image file input. Reads the first selected file into memory and hands it
/// to `onselect`; an empty selection reports `None`.
#[component]
pub fn ImagePicker(file_name: String, onselect: EventHandler<Option<ImageFile>>) -> Element {
    let handle_change = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            onselect.call(None);
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                let mut image = ImageFile::new(file.name(), bytes.to_vec());
                if let Some(mime) = file.content_type() {
                    image = image.with_content_type(mime);
                }
                onselect.call(Some(image));
            }
            Err(e) => {
                tracing::warn!("Failed to read selected image: {}", e);
                onselect.call(None);
            }
        }
    };

    rsx! {
        label {
            r#for: "image",
            class: "cursor-pointer relative border-b-[1px] pb-2 border-[lightgray] w-full text-[gray] flex justify-start items-center gap-2",
            Icon { icon: FaUpload, width: 14, height: 14 }
            " {display_file_name(&file_name)}"
            input {
                r#type: "file",
                name: "image",
                id: "image",
                accept: "image/*",
                class: "cursor-pointer opacity-0 absolute top-0 left-0 w-full",
                onchange: handle_change,
            }
        }
    }
}
