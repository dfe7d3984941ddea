mod common;

#[cfg(test)]
pub mod editor_tests {
    use super::common::*;

    use odonlab::common::{ApiError, EditorError};
    use odonlab::services::*;

    async fn admin_session(api: &FakeApi) -> Session {
        let mut guard = SessionGuard::restore(MemoryTokenStore::with_token(ADMIN_TOKEN));
        assert!(guard.refresh(api).await);
        guard.session().clone()
    }

    async fn setup() -> (FakeApi, Session, ContentStore) {
        let api = FakeApi::default();
        let session = admin_session(&api).await;
        let store = ContentStore::load(&api).await.unwrap();
        api.clear_calls();
        (api, session, store)
    }

    #[tokio::test]
    async fn test_editor_requires_admin_session() {
        let api = FakeApi::default();
        let mut guard = SessionGuard::restore(MemoryTokenStore::default());
        guard.login(&api, "editor", "secret").await.unwrap();

        let result = AdminEditor::new(&api, guard.session());

        assert!(matches!(result, Err(EditorError::NotAuthorized)));
    }

    #[tokio::test]
    async fn test_save_page_writes_by_page_name_and_reloads() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();

        let mut draft = PageDraft::from_page(store.page("lab-members").unwrap());
        draft.title = "Our Team".to_string();
        draft.edit_content_text(r#"{"members": ["Dr. Valerie Odon"]}"#);

        let saved = editor
            .save_page(&draft, &mut store, WriteMode::CheckConflicts)
            .await
            .unwrap();

        assert_eq!(saved.title, "Our Team");
        assert_eq!(store.page("lab-members").unwrap().title, "Our Team");
        assert_eq!(
            api.calls(),
            vec![
                "GET /api/pages/lab-members",
                "PUT /api/pages/lab-members",
                "GET /api/pages",
                "GET /api/projects",
                "GET /api/settings",
            ]
        );
    }

    #[tokio::test]
    async fn test_save_page_sends_last_valid_content() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();

        let mut draft = PageDraft::from_page(store.page("lab-members").unwrap());
        draft.edit_content_text(r#"{"intro": "hello"}"#);
        assert_eq!(draft.edit_content_text(r#"{"intro": "hel"#), Validity::Invalid);

        editor
            .save_page(&draft, &mut store, WriteMode::CheckConflicts)
            .await
            .unwrap();

        let content = &store.page("lab-members").unwrap().content;
        assert_eq!(content.text("intro"), Some("hello"));
    }

    #[tokio::test]
    async fn test_save_page_conflict_aborts_before_write() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let draft = PageDraft::from_page(store.page("home").unwrap());
        let before = store.clone();

        api.touch_page("home");
        let result = editor
            .save_page(&draft, &mut store, WriteMode::CheckConflicts)
            .await;

        assert!(matches!(result, Err(EditorError::Conflict(_))));
        assert!(api.writes().is_empty());
        assert_eq!(store, before);
    }

    #[tokio::test]
    async fn test_save_page_overwrite_skips_conflict_check() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let draft = PageDraft::from_page(store.page("home").unwrap());

        api.touch_page("home");
        editor
            .save_page(&draft, &mut store, WriteMode::Overwrite)
            .await
            .unwrap();

        assert_eq!(api.calls()[0], "PUT /api/pages/home");
    }

    #[tokio::test]
    async fn test_save_page_failure_leaves_store_unreloaded() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let mut draft = PageDraft::from_page(store.page("home").unwrap());
        draft.title = "Changed".to_string();
        let before = store.clone();

        api.reject_writes.set(true);
        let result = editor
            .save_page(&draft, &mut store, WriteMode::CheckConflicts)
            .await;

        assert!(matches!(
            result,
            Err(EditorError::Api(ApiError::Rejected { status: 500, .. }))
        ));
        assert_eq!(store, before);
        assert!(!api.calls().contains(&"GET /api/pages".to_string()));
    }

    #[tokio::test]
    async fn test_create_page_slugifies_name() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let form = NewPageForm {
            name: "My New  Page!".to_string(),
            title: String::new(),
            subtitle: "Fresh".to_string(),
        };

        let created = editor.create_page(&form, &mut store).await.unwrap();

        assert_eq!(created.page_name, "my-new-page!");
        assert_eq!(created.title, "My New  Page!");
        assert!(store.contains_page("my-new-page!"));
    }

    #[tokio::test]
    async fn test_create_page_duplicate_refused_locally() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let form = NewPageForm {
            name: "Lab Members".to_string(),
            ..Default::default()
        };

        let result = editor.create_page(&form, &mut store).await;

        assert_eq!(
            result.unwrap_err(),
            EditorError::DuplicatePage("lab-members".to_string())
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_page_backend_is_final_arbiter() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();

        // Created by someone else after this store was loaded.
        api.pages.borrow_mut().push(page("news", "News", true, serde_json::json!({})));
        let form = NewPageForm {
            name: "News".to_string(),
            ..Default::default()
        };

        let result = editor.create_page(&form, &mut store).await;

        assert!(matches!(
            result,
            Err(EditorError::Api(ApiError::Rejected { status: 400, .. }))
        ));
        assert!(!store.contains_page("news"));
    }

    #[tokio::test]
    async fn test_delete_home_refused_without_network() {
        let (api, _, store) = setup().await;

        assert_eq!(
            PendingDelete::page("home"),
            Err(EditorError::ProtectedPage("home".to_string()))
        );
        assert!(api.calls().is_empty());
        assert!(store.contains_page("home"));
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let pending = PendingDelete::page("lab-members").unwrap();

        let result = editor.delete(&pending, &mut store).await;

        assert_eq!(result, Err(EditorError::NotConfirmed));
        assert!(api.calls().is_empty());
        assert!(store.contains_page("lab-members"));
    }

    #[tokio::test]
    async fn test_delete_confirmed_page_reloads() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let pending = PendingDelete::page("lab-members").unwrap().confirm();

        editor.delete(&pending, &mut store).await.unwrap();

        assert!(!store.contains_page("lab-members"));
        assert_eq!(api.writes(), vec!["DELETE /api/pages/lab-members"]);
    }

    #[tokio::test]
    async fn test_save_project_creates_when_new() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let mut draft = ProjectDraft::new(store.next_project_order());
        draft.title = "Host-Pathogen Interactions".to_string();

        let created = editor
            .save_project(&draft, &mut store, WriteMode::CheckConflicts)
            .await
            .unwrap();

        assert_eq!(created.order, 4);
        assert_eq!(api.writes(), vec!["POST /api/projects"]);
        assert!(store.project(created.id).is_some());
    }

    #[tokio::test]
    async fn test_save_project_twice_after_create() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let mut draft = ProjectDraft::new(store.next_project_order());
        draft.title = "Viral Evolution".to_string();

        let created = editor
            .save_project(&draft, &mut store, WriteMode::CheckConflicts)
            .await
            .unwrap();
        let mut reopened = ProjectDraft::from_project(&created);
        reopened.title = "Viral Evolution and Spread".to_string();

        let result = editor
            .save_project(&reopened, &mut store, WriteMode::CheckConflicts)
            .await;

        assert!(result.is_ok());
        assert_eq!(
            api.writes(),
            vec!["POST /api/projects".to_string(), format!("PUT /api/projects/{}", created.id)]
        );
        assert_eq!(store.project(created.id).unwrap().title, "Viral Evolution and Spread");
    }

    #[tokio::test]
    async fn test_save_project_updates_by_id() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let hidden = store.projects().iter().find(|p| !p.is_published).unwrap().clone();
        let mut draft = ProjectDraft::from_project(&hidden);
        draft.is_published = true;

        editor
            .save_project(&draft, &mut store, WriteMode::CheckConflicts)
            .await
            .unwrap();

        assert_eq!(api.writes(), vec![format!("PUT /api/projects/{}", hidden.id)]);
        let orders: Vec<i32> = store.visible_projects().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_save_project_conflict() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let project = store.projects()[0].clone();
        let draft = ProjectDraft::from_project(&project);

        api.touch_project(project.id);
        let result = editor
            .save_project(&draft, &mut store, WriteMode::CheckConflicts)
            .await;

        assert!(matches!(result, Err(EditorError::Conflict(_))));
        assert!(api.writes().is_empty());
    }

    #[tokio::test]
    async fn test_save_settings_reloads_store() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let mut draft = SettingsDraft::from_settings(store.settings());
        draft.contact_email = "lab@strath.example".to_string();

        editor.save_settings(&draft, &mut store).await.unwrap();

        assert_eq!(store.settings().contact_email, "lab@strath.example");
    }

    #[tokio::test]
    async fn test_media_delete_does_not_reload() {
        let (api, session, mut store) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();
        let media = editor.list_media().await.unwrap();
        api.clear_calls();

        let pending = PendingDelete::media(media[0].id).confirm();
        editor.delete(&pending, &mut store).await.unwrap();

        assert_eq!(api.calls(), vec![format!("DELETE /api/media/{}", media[0].id)]);
        assert!(api.media.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_upload_media() {
        let (api, session, _) = setup().await;
        let editor = AdminEditor::new(&api, &session).unwrap();

        let uploaded = editor
            .upload_media("poster.png", "image/png", vec![0; 512])
            .await
            .unwrap();

        assert_eq!(uploaded.original_filename, "poster.png");
        assert_eq!(uploaded.file_size, 512);
        assert!(uploaded.is_image());
        assert_eq!(api.media.borrow().len(), 2);
    }
}
