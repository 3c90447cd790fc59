//! Card grid of generated images with occasion labels and downloads.

use leptos::prelude::*;

use crate::net::types::{Occasion, StylizedImage};
use crate::util::config::BackendConfig;
use crate::util::download::{can_download, download_file_name, trigger_download};

#[component]
pub fn OutputGallery(images: Vec<StylizedImage>, #[prop(optional)] enable_download: bool) -> impl IntoView {
    let backend = expect_context::<BackendConfig>();

    let cards = images
        .into_iter()
        .map(|image| {
            let src = backend.image_src(&image.url);
            let label = image.occasion.label();
            let show_download = enable_download && can_download(&image);
            let file_name = download_file_name(image.occasion);
            let download_src = src.clone();
            let has_image = !src.is_empty();

            view! {
                <div class="gallery-card">
                    <div class="gallery-card__frame">
                        <Show
                            when=move || has_image
                            fallback=|| view! { <span class="gallery-card__placeholder" aria-hidden="true">"+"</span> }
                        >
                            <img class="gallery-card__image" src=src.clone() alt=format!("{label} style")/>
                        </Show>
                    </div>
                    <div class="gallery-card__footer">
                        <span class=occasion_label_class(image.occasion)>{label}</span>
                        {show_download
                            .then(|| {
                                view! {
                                    <button
                                        class="gallery-card__download"
                                        title=format!("Download {label}")
                                        on:click=move |_| trigger_download(&download_src, &file_name)
                                    >
                                        "⤓"
                                    </button>
                                }
                            })}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="gallery">{cards}</div> }
}

fn occasion_label_class(occasion: Occasion) -> &'static str {
    match occasion {
        Occasion::Original => "gallery-card__label gallery-card__label--original",
        Occasion::Office => "gallery-card__label gallery-card__label--office",
        Occasion::Party => "gallery-card__label gallery-card__label--party",
        Occasion::Vacation => "gallery-card__label gallery-card__label--vacation",
    }
}
