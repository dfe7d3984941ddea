use leptos::prelude::*;

use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let has_key_areas = !project.key_areas.trim().is_empty();

    view! {
        <div class="group p-8 rounded-2xl bg-white/10 border border-blue-500/20
                    hover:border-blue-400/40 transition-all duration-300 hover:-translate-y-1">
            <div class="flex items-start gap-6">
                <span class="text-4xl group-hover:scale-110 transition-transform duration-300">
                    {project.icon}
                </span>
                <div class="flex-1">
                    <h3 class="text-2xl font-bold text-white mb-4">{project.title}</h3>
                    <p class="text-blue-100 mb-4 leading-relaxed">{project.description}</p>
                    {has_key_areas.then(|| view! {
                        <div class="rounded-lg p-4 bg-blue-500/20 border border-blue-500/30">
                            <strong class="text-white">"Key Areas:"</strong>
                            <span class="text-blue-100 ml-2">{project.key_areas.clone()}</span>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Published projects in display order.
#[component]
pub fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    if projects.is_empty() {
        return view! {
            <p class="text-center text-slate-400">"No projects have been published yet."</p>
        }
        .into_any();
    }

    view! {
        <div class="grid gap-8 max-w-6xl mx-auto">
            {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
        </div>
    }
    .into_any()
}
