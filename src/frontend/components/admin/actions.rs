//! Glue between the admin forms and `AdminEditor`. Each action works on a
//! copy of the store and publishes it back only when the write succeeded.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::common::EditorError;
use crate::frontend::browser;
use crate::frontend::state::SiteContext;
use crate::models::{MediaFile, Page, Project};
use crate::services::{
    AdminEditor, ContentStore, NewPageForm, PageDraft, PendingDelete, ProjectDraft, Session,
    SettingsDraft, WriteMode,
};

fn snapshot(site: SiteContext) -> (HttpApi, Session, ContentStore) {
    (site.api(), site.session_snapshot(), site.store.get_untracked())
}

fn publish<T>(
    site: SiteContext,
    store: ContentStore,
    result: Result<T, EditorError>,
) -> Result<T, EditorError> {
    match &result {
        Ok(_) => site.store.set(store),
        Err(e) => report(e),
    }
    result
}

/// Blocking alert for every failure except a declined confirmation.
fn report(error: &EditorError) {
    match error {
        EditorError::NotConfirmed => {}
        e => browser::alert(&format!("Error: {}", e)),
    }
}

fn overwrite_confirmed(error: &EditorError) -> bool {
    matches!(error, EditorError::Conflict(_))
        && browser::confirm(&format!("{}. Overwrite those changes?", error))
}

pub async fn save_page(site: SiteContext, draft: &PageDraft) -> Result<Page, EditorError> {
    let (api, session, mut store) = snapshot(site);
    let result: Result<Page, EditorError> = async {
        let editor = AdminEditor::new(&api, &session)?;
        match editor.save_page(draft, &mut store, WriteMode::CheckConflicts).await {
            Err(e) if overwrite_confirmed(&e) => {
                editor.save_page(draft, &mut store, WriteMode::Overwrite).await
            }
            other => other,
        }
    }
    .await;

    publish(site, store, result)
}

pub async fn create_page(site: SiteContext, form: &NewPageForm) -> Result<Page, EditorError> {
    let (api, session, mut store) = snapshot(site);
    let result: Result<Page, EditorError> = async {
        AdminEditor::new(&api, &session)?
            .create_page(form, &mut store)
            .await
    }
    .await;

    publish(site, store, result)
}

pub async fn save_project(site: SiteContext, draft: &ProjectDraft) -> Result<Project, EditorError> {
    let (api, session, mut store) = snapshot(site);
    let result: Result<Project, EditorError> = async {
        let editor = AdminEditor::new(&api, &session)?;
        match editor.save_project(draft, &mut store, WriteMode::CheckConflicts).await {
            Err(e) if overwrite_confirmed(&e) => {
                editor.save_project(draft, &mut store, WriteMode::Overwrite).await
            }
            other => other,
        }
    }
    .await;

    publish(site, store, result)
}

pub async fn save_settings(site: SiteContext, draft: &SettingsDraft) -> Result<(), EditorError> {
    let (api, session, mut store) = snapshot(site);
    let result: Result<(), EditorError> = async {
        AdminEditor::new(&api, &session)?
            .save_settings(draft, &mut store)
            .await
            .map(|_| ())
    }
    .await;

    publish(site, store, result)
}

/// Asks the user first. Nothing is sent unless they agree.
pub async fn delete(site: SiteContext, pending: PendingDelete) -> Result<(), EditorError> {
    let pending = if browser::confirm(&pending.prompt()) {
        pending.confirm()
    } else {
        pending
    };

    let (api, session, mut store) = snapshot(site);
    let result: Result<(), EditorError> = async {
        AdminEditor::new(&api, &session)?
            .delete(&pending, &mut store)
            .await
    }
    .await;

    publish(site, store, result)
}

pub async fn list_media(site: SiteContext) -> Result<Vec<MediaFile>, EditorError> {
    let (api, session, _) = snapshot(site);
    let result: Result<Vec<MediaFile>, EditorError> =
        async { AdminEditor::new(&api, &session)?.list_media().await }.await;

    if let Err(e) = &result {
        report(e);
    }
    result
}

pub async fn upload_media(
    site: SiteContext,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<MediaFile, EditorError> {
    let (api, session, _) = snapshot(site);
    let result: Result<MediaFile, EditorError> = async {
        AdminEditor::new(&api, &session)?
            .upload_media(file_name, content_type, bytes)
            .await
    }
    .await;

    if let Err(e) = &result {
        report(e);
    }
    result
}
