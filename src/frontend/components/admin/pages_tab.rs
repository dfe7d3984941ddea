use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actions;
use crate::frontend::components::{
    Button, ButtonVariant, Checkbox, ErrorAlert, TextArea, TextInput, WarningAlert,
};
use crate::frontend::state::use_site;
use crate::models::Page;
use crate::services::{NewPageForm, PageDraft, PendingDelete, Validity};

#[component]
pub fn PagesTab() -> impl IntoView {
    let site = use_site();
    let draft = RwSignal::new(None::<PageDraft>);

    let pages = move || site.store.with(|store| store.pages().cloned().collect::<Vec<Page>>());

    view! {
        <div class="grid md:grid-cols-[14rem_1fr] gap-6">
            <aside class="space-y-2">
                <For each=pages key=|page| (page.page_name.clone(), page.updated_at) let:page>
                    <PageListItem page=page draft=draft />
                </For>
            </aside>
            <div class="space-y-8">
                <Show
                    when=move || draft.with(Option::is_some)
                    fallback=|| view! { <p class="text-slate-400">"Select a page to edit it."</p> }
                >
                    <PageEditor draft=draft />
                </Show>
                <CreatePageForm />
            </div>
        </div>
    }
}

#[component]
fn PageListItem(page: Page, draft: RwSignal<Option<PageDraft>>) -> impl IntoView {
    let page_name = page.page_name.clone();
    let selected = move || {
        draft.with(|d| d.as_ref().is_some_and(|d| d.page_name() == page_name))
    };
    let class = move || {
        if selected() {
            "w-full text-left px-3 py-2 rounded-lg bg-blue-500 text-white"
        } else {
            "w-full text-left px-3 py-2 rounded-lg text-slate-300 hover:bg-slate-800"
        }
    };
    let status = (!page.is_published).then_some(" (draft)");
    let title = page.title.clone();

    view! {
        <button class=class on:click=move |_| draft.set(Some(PageDraft::from_page(&page)))>
            {title}
            <span class="text-xs text-slate-400">{status}</span>
        </button>
    }
}

#[component]
fn PageEditor(draft: RwSignal<Option<PageDraft>>) -> impl IntoView {
    let site = use_site();
    let saving = RwSignal::new(false);

    let field = move |read: fn(&PageDraft) -> String| {
        Signal::derive(move || draft.with(|d| d.as_ref().map(read).unwrap_or_default()))
    };
    let edit = move |write: fn(&mut PageDraft, String)| {
        Callback::new(move |value: String| {
            draft.update(|d| {
                if let Some(d) = d {
                    write(d, value)
                }
            })
        })
    };

    let page_name = move || draft.with(|d| d.as_ref().map(|d| d.page_name().to_string()));
    let invalid = move || {
        draft.with(|d| d.as_ref().is_some_and(|d| d.validity() == Validity::Invalid))
    };
    let published = Signal::derive(move || draft.with(|d| d.as_ref().is_some_and(|d| d.is_published)));

    let save = Callback::new(move |_: ()| {
        let Some(current) = draft.get_untracked() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            if let Ok(saved) = actions::save_page(site, &current).await {
                let reopened = site.store.with_untracked(|store| {
                    store.page(&saved.page_name).map(PageDraft::from_page)
                });
                draft.set(Some(reopened.unwrap_or_else(|| PageDraft::from_page(&saved))));
            }
            saving.set(false);
        });
    });

    let remove = Callback::new(move |_: ()| {
        let Some(name) = page_name() else {
            return;
        };
        let pending = match PendingDelete::page(&name) {
            Ok(pending) => pending,
            Err(e) => {
                crate::frontend::browser::alert(&e.to_string());
                return;
            }
        };
        spawn_local(async move {
            if actions::delete(site, pending).await.is_ok() {
                draft.set(None);
            }
        });
    });

    view! {
        <section class="space-y-5">
            <h3 class="text-lg font-semibold text-white">
                {move || format!("Editing /{}", page_name().unwrap_or_default())}
            </h3>
            <TextInput
                label="Title"
                name="page-title"
                value=field(|d| d.title.clone())
                on_input=edit(|d, v| d.title = v)
            />
            <TextInput
                label="Subtitle"
                name="page-subtitle"
                value=field(|d| d.subtitle.clone())
                on_input=edit(|d, v| d.subtitle = v)
            />
            <TextInput
                label="Hero image URL"
                name="page-hero"
                hint="Stored as background_image in the page content."
                value=field(|d| {
                    d.content()
                        .text(crate::services::renderer::BACKGROUND_IMAGE_KEY)
                        .unwrap_or_default()
                        .to_string()
                })
                on_input=edit(|d, v| d.set_background_image(&v))
            />
            <TextInput
                label="Meta description"
                name="page-meta-description"
                value=field(|d| d.meta_description.clone())
                on_input=edit(|d, v| d.meta_description = v)
            />
            <TextInput
                label="Meta keywords"
                name="page-meta-keywords"
                value=field(|d| d.meta_keywords.clone())
                on_input=edit(|d, v| d.meta_keywords = v)
            />
            <Checkbox
                label="Published"
                name="page-published"
                checked=published
                on_toggle=Callback::new(move |on: bool| {
                    draft.update(|d| {
                        if let Some(d) = d {
                            d.is_published = on
                        }
                    })
                })
            />
            <TextArea
                label="Content (JSON)"
                name="page-content"
                rows=16
                monospace=true
                value=field(|d| d.content_text().to_string())
                on_input=edit(|d, v| {
                    d.edit_content_text(v);
                })
            />
            <Show when=invalid>
                <WarningAlert message="This is not a valid JSON object. The last valid content will be saved." />
            </Show>
            <div class="flex gap-3">
                <Button loading=saving on_click=save>"Save Page"</Button>
                <Show when=move || page_name().is_some_and(|name| name != crate::models::HOME_PAGE)>
                    <Button variant=ButtonVariant::Danger on_click=remove>"Delete Page"</Button>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CreatePageForm() -> impl IntoView {
    let site = use_site();
    let form = RwSignal::new(NewPageForm::default());
    let error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let field = move |read: fn(&NewPageForm) -> String| Signal::derive(move || form.with(read));
    let edit = move |write: fn(&mut NewPageForm, String)| {
        Callback::new(move |value: String| form.update(|f| write(f, value)))
    };

    let preview = move || {
        let slug = form.with(|f| f.page_name());
        (!slug.is_empty()).then(|| format!("Will be published at /{}", slug))
    };

    let create = Callback::new(move |_: ()| {
        let current = form.get_untracked();
        if let Err(e) = site.store.with_untracked(|store| current.validate(store)) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        creating.set(true);
        spawn_local(async move {
            if actions::create_page(site, &current).await.is_ok() {
                form.set(NewPageForm::default());
            }
            creating.set(false);
        });
    });

    view! {
        <section class="space-y-5 pt-6 border-t border-slate-800">
            <h3 class="text-lg font-semibold text-white">"Create a new page"</h3>
            {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}
            <TextInput
                label="Page name"
                name="new-page-name"
                placeholder="Lab Members"
                value=field(|f| f.name.clone())
                on_input=edit(|f, v| f.name = v)
            />
            <p class="text-xs text-slate-500">{preview}</p>
            <TextInput
                label="Title"
                name="new-page-title"
                value=field(|f| f.title.clone())
                on_input=edit(|f, v| f.title = v)
            />
            <TextInput
                label="Subtitle"
                name="new-page-subtitle"
                value=field(|f| f.subtitle.clone())
                on_input=edit(|f, v| f.subtitle = v)
            />
            <Button loading=creating loading_text="Creating..." on_click=create>"Create Page"</Button>
        </section>
    }
}
