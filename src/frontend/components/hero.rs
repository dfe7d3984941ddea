use leptos::prelude::*;

/// Full-width title band with an optional dimmed background photo.
#[component]
pub fn PageHero(
    #[prop(into)] title: String,
    #[prop(default = None)] subtitle: Option<String>,
    #[prop(default = None)] image: Option<String>,
    #[prop(optional)] full_height: bool,
) -> impl IntoView {
    let height = if full_height { "min-h-screen" } else { "min-h-[50vh]" };

    view! {
        <section class=format!("{} flex items-center relative overflow-hidden", height)>
            {image.map(|src| view! {
                <div class="absolute inset-0 z-0">
                    <img src=src alt="" class="w-full h-full object-cover opacity-30" />
                    <div class="absolute inset-0 bg-gradient-to-br from-slate-900/80 via-blue-900/70 to-indigo-900/80"></div>
                </div>
            })}
            <div class="relative z-10 max-w-4xl mx-auto px-6 py-20 text-center">
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 leading-tight">{title}</h1>
                {subtitle.map(|text| view! {
                    <p class="text-xl md:text-2xl text-blue-100 leading-relaxed">{text}</p>
                })}
            </div>
        </section>
    }
}
