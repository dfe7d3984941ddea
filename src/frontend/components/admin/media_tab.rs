use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actions;
use crate::frontend::browser;
use crate::frontend::components::{Button, ButtonVariant};
use crate::frontend::state::{SiteContext, use_site};
use crate::models::MediaFile;
use crate::services::PendingDelete;

const UPLOAD_INPUT_ID: &str = "media-upload";

fn refresh(site: SiteContext, files: RwSignal<Vec<MediaFile>>) {
    spawn_local(async move {
        if let Ok(list) = actions::list_media(site).await {
            files.set(list);
        }
    });
}

#[component]
pub fn MediaTab() -> impl IntoView {
    let site = use_site();
    let files = RwSignal::new(Vec::<MediaFile>::new());
    let uploading = RwSignal::new(false);

    refresh(site, files);

    let upload = Callback::new(move |_: ()| {
        uploading.set(true);
        spawn_local(async move {
            match browser::selected_file(UPLOAD_INPUT_ID).await {
                Some((name, content_type, bytes)) => {
                    if actions::upload_media(site, &name, &content_type, bytes).await.is_ok() {
                        refresh(site, files);
                    }
                }
                None => browser::alert("Choose a file to upload first."),
            }
            uploading.set(false);
        });
    });

    view! {
        <section class="space-y-6">
            <div class="flex flex-wrap items-end gap-4">
                <input id=UPLOAD_INPUT_ID type="file" class="text-sm text-slate-300" />
                <Button loading=uploading loading_text="Uploading..." on_click=upload>"Upload"</Button>
            </div>
            <Show
                when=move || files.with(|f| !f.is_empty())
                fallback=|| view! { <p class="text-slate-400">"No files uploaded yet."</p> }
            >
                <ul class="divide-y divide-slate-800">
                    <For each=move || files.get() key=|file| file.id let:file>
                        <MediaRow file=file files=files />
                    </For>
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn MediaRow(file: MediaFile, files: RwSignal<Vec<MediaFile>>) -> impl IntoView {
    let site = use_site();
    let url = site.api.with_value(|api| api.media_url(file.id));
    let id = file.id;
    let size = format!("{:.1} KB", file.file_size as f64 / 1024.0);

    let remove = Callback::new(move |_: ()| {
        spawn_local(async move {
            if actions::delete(site, PendingDelete::media(id)).await.is_ok() {
                files.update(|list| list.retain(|f| f.id != id));
            }
        });
    });

    view! {
        <li class="flex items-center gap-4 py-3">
            {file.is_image().then(|| view! {
                <img src=url.clone() alt=file.original_filename.clone() class="w-16 h-16 object-cover rounded" />
            })}
            <div class="flex-1 min-w-0">
                <p class="text-white truncate">{file.original_filename.clone()}</p>
                <p class="text-xs text-slate-500">{format!("{} · {}", file.file_type, size)}</p>
                <input
                    readonly=true
                    value=url.clone()
                    class="mt-1 w-full text-xs bg-slate-800 text-slate-300 rounded px-2 py-1"
                />
            </div>
            <Button variant=ButtonVariant::Danger on_click=remove>"Delete"</Button>
        </li>
    }
}
