//! Drag-and-drop / click-to-pick image intake.
//!
//! DESIGN
//! ======
//! Accepts one JPEG or PNG at a time. The file handle goes into the shared
//! `FileSlot`; the metadata and preview URL are passed to `on_select`, which
//! owns the decision of what to do with the displaced selection.

use leptos::prelude::*;

use crate::state::upload::{ACCEPT_ATTRIBUTE, SelectedImage, UploadState, drop_prompt, opens_picker};
use crate::util::file_slot::FileSlot;

#[component]
pub fn UploadForm(on_select: Callback<SelectedImage>) -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let file_slot = expect_context::<FileSlot>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let drag_active = move || upload.with(UploadState::drag_active);

    let on_dragenter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_enter);
    };
    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };
    let on_dragleave = move |_: leptos::ev::DragEvent| {
        upload.update(UploadState::drag_leave);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_end);
        #[cfg(feature = "hydrate")]
        {
            let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
            if let Some(file) = file {
                take_file(file, file_slot, on_select);
            }
        }
    };

    let open_picker = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };
    let on_pick = move |_| open_picker();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if opens_picker(&ev.key()) {
            ev.prevent_default();
            open_picker();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                take_file(file, file_slot, on_select);
            }
            // Allows picking the same file again after a replacement.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, file_slot, on_select);
        }
    };

    view! {
        <div class="upload-form">
            <input
                node_ref=input_ref
                class="upload-form__input"
                type="file"
                accept=ACCEPT_ATTRIBUTE
                on:change=on_change
            />
            <div
                class="upload-form__dropzone"
                class:upload-form__dropzone--active=drag_active
                role="button"
                tabindex="0"
                on:click=on_pick
                on:keydown=on_keydown
                on:dragenter=on_dragenter
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <svg class="upload-form__icon" viewBox="0 0 48 48" fill="none" stroke="currentColor" aria-hidden="true">
                    <path
                        d="M28 8H12a4 4 0 00-4 4v20m32-12v8m0 0v8a4 4 0 01-4 4H12a4 4 0 01-4-4v-4m32-4l-3.172-3.172a4 4 0 00-5.656 0L28 28M8 32l9.172-9.172a4 4 0 015.656 0L28 28m0 0l4 4m4-24h8m-4-4v8m-12 4h.02"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
                <p class="upload-form__prompt">{move || drop_prompt(drag_active())}</p>
                <p class="upload-form__hint">"Supports JPG, PNG up to 10MB"</p>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn take_file(file: web_sys::File, file_slot: FileSlot, on_select: Callback<SelectedImage>) {
    let Some(image) = crate::util::file_slot::preview_file(&file) else {
        return;
    };
    if image.exceeds_size_hint() {
        log::warn!("{} is {} bytes, above the 10MB guidance", image.name, image.size_bytes);
    }
    file_slot.replace(file);
    on_select.run(image);
}
