use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actions;
use crate::frontend::components::{Button, ButtonVariant, Checkbox, TextArea, TextInput};
use crate::frontend::state::use_site;
use crate::models::Project;
use crate::services::{PendingDelete, ProjectDraft};

#[component]
pub fn ProjectsTab() -> impl IntoView {
    let site = use_site();
    let draft = RwSignal::new(None::<ProjectDraft>);

    let projects = move || {
        site.store.with(|store| {
            let mut projects = store.projects().to_vec();
            projects.sort_by_key(|p| p.order);
            projects
        })
    };

    let start_new = move |_| {
        let order = site.store.with_untracked(|store| store.next_project_order());
        draft.set(Some(ProjectDraft::new(order)));
    };

    view! {
        <div class="grid md:grid-cols-[14rem_1fr] gap-6">
            <aside class="space-y-2">
                <button
                    class="w-full text-left px-3 py-2 rounded-lg border border-dashed border-slate-600 text-slate-300 hover:bg-slate-800"
                    on:click=start_new
                >
                    "+ New project"
                </button>
                <For each=projects key=|p| (p.id, p.updated_at) let:project>
                    <ProjectListItem project=project draft=draft />
                </For>
            </aside>
            <Show
                when=move || draft.with(Option::is_some)
                fallback=|| view! { <p class="text-slate-400">"Select a project or start a new one."</p> }
            >
                <ProjectEditor draft=draft />
            </Show>
        </div>
    }
}

#[component]
fn ProjectListItem(project: Project, draft: RwSignal<Option<ProjectDraft>>) -> impl IntoView {
    let id = project.id;
    let class = move || {
        if draft.with(|d| d.as_ref().and_then(ProjectDraft::id) == Some(id)) {
            "w-full text-left px-3 py-2 rounded-lg bg-blue-500 text-white"
        } else {
            "w-full text-left px-3 py-2 rounded-lg text-slate-300 hover:bg-slate-800"
        }
    };
    let label = format!("{} {}", project.icon, project.title);
    let status = (!project.is_published).then_some(" (hidden)");

    view! {
        <button class=class on:click=move |_| draft.set(Some(ProjectDraft::from_project(&project)))>
            {label}
            <span class="text-xs text-slate-400">{status}</span>
        </button>
    }
}

#[component]
fn ProjectEditor(draft: RwSignal<Option<ProjectDraft>>) -> impl IntoView {
    let site = use_site();
    let saving = RwSignal::new(false);

    let field = move |read: fn(&ProjectDraft) -> String| {
        Signal::derive(move || draft.with(|d| d.as_ref().map(read).unwrap_or_default()))
    };
    let edit = move |write: fn(&mut ProjectDraft, String)| {
        Callback::new(move |value: String| {
            draft.update(|d| {
                if let Some(d) = d {
                    write(d, value)
                }
            })
        })
    };

    let is_new = move || draft.with(|d| d.as_ref().is_none_or(ProjectDraft::is_new));
    let published = Signal::derive(move || draft.with(|d| d.as_ref().is_some_and(|d| d.is_published)));

    let save = Callback::new(move |_: ()| {
        let Some(current) = draft.get_untracked() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            if let Ok(saved) = actions::save_project(site, &current).await {
                let reopened = site.store.with_untracked(|store| {
                    store.project(saved.id).map(ProjectDraft::from_project)
                });
                draft.set(Some(reopened.unwrap_or_else(|| ProjectDraft::from_project(&saved))));
            }
            saving.set(false);
        });
    });

    let remove = Callback::new(move |_: ()| {
        let Some(id) = draft.with_untracked(|d| d.as_ref().and_then(ProjectDraft::id)) else {
            return;
        };
        spawn_local(async move {
            if actions::delete(site, PendingDelete::project(id)).await.is_ok() {
                draft.set(None);
            }
        });
    });

    view! {
        <section class="space-y-5">
            <h3 class="text-lg font-semibold text-white">
                {move || if is_new() { "New project" } else { "Edit project" }}
            </h3>
            <TextInput
                label="Title"
                name="project-title"
                required=true
                value=field(|d| d.title.clone())
                on_input=edit(|d, v| d.title = v)
            />
            <TextInput
                label="Icon"
                name="project-icon"
                hint="A single emoji or glyph."
                value=field(|d| d.icon.clone())
                on_input=edit(|d, v| d.icon = v)
            />
            <TextArea
                label="Description"
                name="project-description"
                value=field(|d| d.description.clone())
                on_input=edit(|d, v| d.description = v)
            />
            <TextArea
                label="Key areas"
                name="project-key-areas"
                rows=2
                value=field(|d| d.key_areas.clone())
                on_input=edit(|d, v| d.key_areas = v)
            />
            <TextInput
                label="Display order"
                name="project-order"
                input_type="number"
                value=field(|d| d.order.to_string())
                on_input=edit(|d, v| {
                    if let Ok(order) = v.trim().parse() {
                        d.order = order;
                    }
                })
            />
            <Checkbox
                label="Published"
                name="project-published"
                checked=published
                on_toggle=Callback::new(move |on: bool| {
                    draft.update(|d| {
                        if let Some(d) = d {
                            d.is_published = on
                        }
                    })
                })
            />
            <div class="flex gap-3">
                <Button loading=saving on_click=save>"Save Project"</Button>
                <Show when=move || !is_new()>
                    <Button variant=ButtonVariant::Danger on_click=remove>"Delete Project"</Button>
                </Show>
            </div>
        </section>
    }
}
