use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actions;
use crate::frontend::components::{Button, TextArea, TextInput};
use crate::frontend::state::use_site;
use crate::services::SettingsDraft;

#[component]
pub fn SettingsTab() -> impl IntoView {
    let site = use_site();
    let draft = RwSignal::new(site.store.with_untracked(|store| SettingsDraft::from_settings(store.settings())));
    let saving = RwSignal::new(false);

    let field = move |read: fn(&SettingsDraft) -> String| Signal::derive(move || draft.with(read));
    let edit = move |write: fn(&mut SettingsDraft, String)| {
        Callback::new(move |value: String| draft.update(|d| write(d, value)))
    };

    let save = Callback::new(move |_: ()| {
        let current = draft.get_untracked();
        saving.set(true);
        spawn_local(async move {
            if actions::save_settings(site, &current).await.is_ok() {
                draft.set(site.store.with_untracked(|store| SettingsDraft::from_settings(store.settings())));
            }
            saving.set(false);
        });
    });

    view! {
        <section class="space-y-5 max-w-2xl">
            <TextInput
                label="Site name"
                name="settings-site-name"
                value=field(|d| d.site_name.clone())
                on_input=edit(|d, v| d.site_name = v)
            />
            <TextArea
                label="Site description"
                name="settings-site-description"
                rows=2
                value=field(|d| d.site_description.clone())
                on_input=edit(|d, v| d.site_description = v)
            />
            <TextInput
                label="Contact email"
                name="settings-contact-email"
                input_type="email"
                value=field(|d| d.contact_email.clone())
                on_input=edit(|d, v| d.contact_email = v)
            />
            <TextInput
                label="Contact phone"
                name="settings-contact-phone"
                value=field(|d| d.contact_phone.clone())
                on_input=edit(|d, v| d.contact_phone = v)
            />
            <TextArea
                label="Address"
                name="settings-address"
                rows=3
                value=field(|d| d.address.clone())
                on_input=edit(|d, v| d.address = v)
            />
            <TextInput
                label="Logo URL"
                name="settings-logo-url"
                value=field(|d| d.logo_url.clone())
                on_input=edit(|d, v| d.logo_url = v)
            />
            <TextInput
                label="Default hero image URL"
                name="settings-hero-image-url"
                value=field(|d| d.hero_image_url.clone())
                on_input=edit(|d, v| d.hero_image_url = v)
            />
            <Button loading=saving on_click=save>"Save Settings"</Button>
        </section>
    }
}
