use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let width = if wide { "max-w-5xl" } else { "max-w-md" };

    view! {
        <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto bg-black/70 px-4 py-10">
            <div class=format!("w-full {} rounded-2xl bg-slate-900 border border-slate-700 shadow-2xl", width)>
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-800">
                    <h2 class="text-xl font-bold text-white">{title}</h2>
                    <button class="text-slate-400 hover:text-white text-2xl" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}
