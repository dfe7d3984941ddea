//! Admin-side editing: working copies, page creation, confirmed deletes and
//! the authenticated writes behind them. Every successful write is followed
//! by a full store reload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::SiteApi;
use crate::common::EditorError;
use crate::log_err;
use crate::models::*;
use crate::services::renderer::BACKGROUND_IMAGE_KEY;
use crate::services::session::Session;
use crate::services::store::ContentStore;

/// Page names that would be shadowed by a built-in route.
pub const RESERVED_PAGE_NAMES: &[&str] = &["projects"];

/// Lowercases and turns each run of whitespace into a single `-`.
/// Every other character is kept as typed.
pub fn slugify(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Whether the last text typed into the content box parsed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Validity {
    #[default]
    Valid,
    Invalid,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum WriteMode {
    /// Abort when the entity changed on the backend since the draft was opened.
    #[default]
    CheckConflicts,
    Overwrite,
}

/// Compared at millisecond precision: write responses can carry microseconds
/// the stored copy no longer has.
fn is_stale(base: Option<DateTime<Utc>>, current: Option<DateTime<Utc>>) -> bool {
    matches!(
        (base, current),
        (Some(base), Some(current)) if base.timestamp_millis() != current.timestamp_millis()
    )
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Working copy of a page. The content document only changes when the
/// editor text parses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDraft {
    page_name: String,
    pub title: String,
    pub subtitle: String,
    pub is_published: bool,
    pub meta_description: String,
    pub meta_keywords: String,
    content: ContentDocument,
    content_text: String,
    validity: Validity,
    base_updated_at: Option<DateTime<Utc>>,
}

impl PageDraft {
    pub fn from_page(page: &Page) -> Self {
        Self {
            page_name: page.page_name.clone(),
            title: page.title.clone(),
            subtitle: page.subtitle.clone().unwrap_or_default(),
            is_published: page.is_published,
            meta_description: page.meta_description.clone().unwrap_or_default(),
            meta_keywords: page.meta_keywords.clone().unwrap_or_default(),
            content: page.content.clone(),
            content_text: page.content.to_pretty_json(),
            validity: Validity::Valid,
            base_updated_at: page.updated_at,
        }
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// Last successfully parsed content.
    pub fn content(&self) -> &ContentDocument {
        &self.content
    }

    /// Raw text of the content box, valid or not.
    pub fn content_text(&self) -> &str {
        &self.content_text
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn base_updated_at(&self) -> Option<DateTime<Utc>> {
        self.base_updated_at
    }

    /// Invalid text is kept for display but never reaches the content.
    pub fn edit_content_text(&mut self, text: impl Into<String>) -> Validity {
        self.content_text = text.into();
        self.validity = match ContentDocument::from_json_str(&self.content_text) {
            Ok(content) => {
                self.content = content;
                Validity::Valid
            }
            Err(_) => Validity::Invalid,
        };
        self.validity
    }

    pub fn set_background_image(&mut self, url: &str) {
        match url.trim() {
            "" => {
                self.content.remove(BACKGROUND_IMAGE_KEY);
            }
            url => self.content.insert(BACKGROUND_IMAGE_KEY, url),
        }
        self.content_text = self.content.to_pretty_json();
        self.validity = Validity::Valid;
    }

    pub fn to_update(&self) -> PageUpdate {
        PageUpdate {
            title: Some(self.title.trim().to_string()),
            subtitle: Some(self.subtitle.trim().to_string()),
            content: Some(self.content.clone()),
            meta_description: Some(self.meta_description.trim().to_string()),
            meta_keywords: Some(self.meta_keywords.trim().to_string()),
            is_published: Some(self.is_published),
        }
    }
}

/// Input of the "create page" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewPageForm {
    pub name: String,
    pub title: String,
    pub subtitle: String,
}

impl NewPageForm {
    pub fn page_name(&self) -> String {
        slugify(&self.name)
    }

    /// Client-side checks only. The backend has the final say on uniqueness.
    pub fn validate(&self, store: &ContentStore) -> Result<PageCreate, EditorError> {
        let page_name = self.page_name();

        if page_name.is_empty() || page_name.contains(['/', '?', '#']) {
            return Err(EditorError::InvalidSlug(page_name));
        }

        if RESERVED_PAGE_NAMES.contains(&page_name.as_str()) {
            return Err(EditorError::ReservedSlug(page_name));
        }

        if store.contains_page(&page_name) {
            return Err(EditorError::DuplicatePage(page_name));
        }

        Ok(PageCreate {
            title: non_empty(&self.title).unwrap_or_else(|| self.name.trim().to_string()),
            subtitle: non_empty(&self.subtitle),
            page_name,
            content: ContentDocument::new(),
            meta_description: None,
            meta_keywords: None,
            is_published: true,
        })
    }
}

/// Working copy of a project; `id` is absent until the backend creates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDraft {
    id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub key_areas: String,
    pub icon: String,
    pub order: i32,
    pub is_published: bool,
    base_updated_at: Option<DateTime<Utc>>,
}

impl ProjectDraft {
    pub fn new(order: i32) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            key_areas: String::new(),
            icon: "🔬".to_string(),
            order,
            is_published: true,
            base_updated_at: None,
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            title: project.title.clone(),
            description: project.description.clone(),
            key_areas: project.key_areas.clone(),
            icon: project.icon.clone(),
            order: project.order,
            is_published: project.is_published,
            base_updated_at: project.updated_at,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn to_create(&self) -> ProjectCreate {
        ProjectCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            key_areas: self.key_areas.trim().to_string(),
            icon: self.icon.trim().to_string(),
            order: self.order,
            is_published: self.is_published,
        }
    }

    pub fn to_update(&self) -> ProjectUpdate {
        let create = self.to_create();
        ProjectUpdate {
            title: Some(create.title),
            description: Some(create.description),
            key_areas: Some(create.key_areas),
            icon: Some(create.icon),
            order: Some(create.order),
            is_published: Some(create.is_published),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsDraft {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub logo_url: String,
    pub hero_image_url: String,
}

impl SettingsDraft {
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            site_description: settings.site_description.clone(),
            contact_email: settings.contact_email.clone(),
            contact_phone: settings.contact_phone.clone(),
            address: settings.address.clone(),
            logo_url: settings.logo_url.clone().unwrap_or_default(),
            hero_image_url: settings.hero_image_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> SiteSettingsUpdate {
        SiteSettingsUpdate {
            site_name: Some(self.site_name.trim().to_string()),
            site_description: Some(self.site_description.trim().to_string()),
            contact_email: Some(self.contact_email.trim().to_string()),
            contact_phone: Some(self.contact_phone.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            logo_url: Some(self.logo_url.trim().to_string()),
            hero_image_url: Some(self.hero_image_url.trim().to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub enum DeleteTarget {
    Page(String),
    Project(Uuid),
    Media(Uuid),
}

/// A delete that has been asked for but not yet confirmed by the user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PendingDelete {
    target: DeleteTarget,
    confirmed: bool,
}

impl PendingDelete {
    pub fn page(page_name: &str) -> Result<Self, EditorError> {
        if page_name == HOME_PAGE {
            return Err(EditorError::ProtectedPage(page_name.to_string()));
        }

        Ok(Self {
            target: DeleteTarget::Page(page_name.to_string()),
            confirmed: false,
        })
    }

    pub fn project(id: Uuid) -> Self {
        Self {
            target: DeleteTarget::Project(id),
            confirmed: false,
        }
    }

    pub fn media(id: Uuid) -> Self {
        Self {
            target: DeleteTarget::Media(id),
            confirmed: false,
        }
    }

    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    pub fn prompt(&self) -> String {
        match &self.target {
            DeleteTarget::Page(name) => {
                format!("Delete the page '{name}'? This cannot be undone.")
            }
            DeleteTarget::Project(_) => "Delete this project? This cannot be undone.".to_string(),
            DeleteTarget::Media(_) => "Delete this file? This cannot be undone.".to_string(),
        }
    }

    pub fn confirm(mut self) -> Self {
        self.confirmed = true;
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

/// Write surface bound to a verified admin session.
pub struct AdminEditor<'a, A: SiteApi> {
    api: &'a A,
    token: &'a str,
}

impl<'a, A: SiteApi> AdminEditor<'a, A> {
    pub fn new(api: &'a A, session: &'a Session) -> Result<Self, EditorError> {
        let token = session.admin_token().ok_or(EditorError::NotAuthorized)?;
        Ok(Self { api, token })
    }

    pub async fn save_page(
        &self,
        draft: &PageDraft,
        store: &mut ContentStore,
        mode: WriteMode,
    ) -> Result<Page, EditorError> {
        if mode == WriteMode::CheckConflicts {
            let current = self.api.get_page(draft.page_name()).await?;
            if is_stale(draft.base_updated_at(), current.updated_at) {
                return Err(EditorError::Conflict(format!("Page '{}'", draft.page_name())));
            }
        }

        let saved = self
            .api
            .update_page(self.token, draft.page_name(), &draft.to_update())
            .await
            .inspect_err(|_| log_err!("saving page", draft))?;

        self.reload(store).await;
        Ok(saved)
    }

    pub async fn create_page(
        &self,
        form: &NewPageForm,
        store: &mut ContentStore,
    ) -> Result<Page, EditorError> {
        let page = form.validate(store)?;

        let created = self
            .api
            .create_page(self.token, &page)
            .await
            .inspect_err(|_| log_err!("creating page", &page))?;

        self.reload(store).await;
        Ok(created)
    }

    /// Creates the project when the draft has no id, updates it otherwise.
    pub async fn save_project(
        &self,
        draft: &ProjectDraft,
        store: &mut ContentStore,
        mode: WriteMode,
    ) -> Result<Project, EditorError> {
        let saved = match draft.id() {
            None => self.api.create_project(self.token, &draft.to_create()).await,
            Some(id) => {
                if mode == WriteMode::CheckConflicts {
                    let current = self.api.get_project(id).await?;
                    if is_stale(draft.base_updated_at, current.updated_at) {
                        return Err(EditorError::Conflict(format!("Project '{}'", current.title)));
                    }
                }
                self.api.update_project(self.token, id, &draft.to_update()).await
            }
        }
        .inspect_err(|_| log_err!("saving project", draft))?;

        self.reload(store).await;
        Ok(saved)
    }

    pub async fn save_settings(
        &self,
        draft: &SettingsDraft,
        store: &mut ContentStore,
    ) -> Result<SiteSettings, EditorError> {
        let saved = self
            .api
            .update_settings(self.token, &draft.to_update())
            .await
            .inspect_err(|_| log_err!("saving settings", draft))?;

        self.reload(store).await;
        Ok(saved)
    }

    pub async fn delete(
        &self,
        pending: &PendingDelete,
        store: &mut ContentStore,
    ) -> Result<(), EditorError> {
        if !pending.is_confirmed() {
            return Err(EditorError::NotConfirmed);
        }

        let result = match pending.target() {
            DeleteTarget::Page(name) if name == HOME_PAGE => {
                return Err(EditorError::ProtectedPage(name.clone()));
            }
            DeleteTarget::Page(name) => self.api.delete_page(self.token, name).await,
            DeleteTarget::Project(id) => self.api.delete_project(self.token, *id).await,
            // Media is not part of the store.
            DeleteTarget::Media(id) => {
                return self
                    .api
                    .delete_media(self.token, *id)
                    .await
                    .map_err(EditorError::from);
            }
        };

        result.inspect_err(|_| log_err!("deleting", pending.target()))?;

        self.reload(store).await;
        Ok(())
    }

    pub async fn list_media(&self) -> Result<Vec<MediaFile>, EditorError> {
        Ok(self.api.list_media(self.token).await?)
    }

    pub async fn upload_media(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaFile, EditorError> {
        let uploaded = self
            .api
            .upload_media(self.token, file_name, content_type, bytes)
            .await
            .inspect_err(|_| log_err!("uploading media", file_name))?;

        Ok(uploaded)
    }

    async fn reload(&self, store: &mut ContentStore) {
        if let Err(e) = store.reload(self.api).await {
            log::warn!("Write succeeded but content reload failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> Page {
        serde_json::from_value(json!({
            "id": "6f1c1b7e-3a57-4c39-9f39-9a5a1a1d2f01",
            "page_name": "about",
            "title": "About",
            "subtitle": null,
            "content": { "intro": "hello", "topics": ["a"] },
            "is_published": true,
            "updated_at": "2025-07-04T10:15:30.000000"
        }))
        .unwrap()
    }

    #[test]
    fn test_page_draft_keeps_non_string_group_values() {
        let mut page = sample_page();
        page.content = serde_json::from_value(json!({ "stats": { "members": 12, "active": true } }))
            .unwrap();

        let mut draft = PageDraft::from_page(&page);
        draft.title = "About the lab".to_string();

        assert_eq!(
            serde_json::to_value(draft.to_update().content.unwrap()).unwrap(),
            json!({ "stats": { "members": 12, "active": true } })
        );
    }

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My New Page!"), "my-new-page!");
        assert_eq!(slugify("  Spaced   Out\tTitle "), "spaced-out-title");
        assert_eq!(slugify("Ärzte & Co."), "ärzte-&-co.");
    }

    #[test]
    fn test_page_draft_invalid_text_keeps_last_valid_content() {
        let mut draft = PageDraft::from_page(&sample_page());
        let before = draft.content().clone();

        assert_eq!(draft.edit_content_text("{\"intro\": "), Validity::Invalid);
        assert_eq!(draft.content(), &before);
        assert_eq!(draft.content_text(), "{\"intro\": ");

        assert_eq!(draft.edit_content_text("[]"), Validity::Invalid);
        assert_eq!(draft.content(), &before);
    }

    #[test]
    fn test_page_draft_valid_text_commits() {
        let mut draft = PageDraft::from_page(&sample_page());

        assert_eq!(draft.edit_content_text(r#"{"intro": "changed"}"#), Validity::Valid);
        assert_eq!(draft.content().text("intro"), Some("changed"));
        assert_eq!(draft.to_update().content.unwrap().len(), 1);
    }

    #[test]
    fn test_page_draft_preserves_unrendered_values() {
        let mut page = sample_page();
        page.content.insert("layout", ContentValue::Other(json!({"cols": [1, 2]})));

        let draft = PageDraft::from_page(&page);
        let update = draft.to_update();

        assert_eq!(
            update.content.unwrap().get("layout"),
            Some(&ContentValue::Other(json!({"cols": [1, 2]})))
        );
    }

    #[test]
    fn test_page_draft_background_image() {
        let mut draft = PageDraft::from_page(&sample_page());
        draft.edit_content_text("{");

        draft.set_background_image("https://img.example/hero.jpg");
        assert_eq!(draft.validity(), Validity::Valid);
        assert_eq!(
            draft.content().text(BACKGROUND_IMAGE_KEY),
            Some("https://img.example/hero.jpg")
        );
        assert!(draft.content_text().contains("background_image"));

        draft.set_background_image("  ");
        assert!(draft.content().get(BACKGROUND_IMAGE_KEY).is_none());
    }

    #[test]
    fn test_new_page_form_validation() {
        let mut store = ContentStore::default();
        store.replace_pages(vec![sample_page()]);

        let form = |name: &str| NewPageForm {
            name: name.into(),
            ..Default::default()
        };

        assert_eq!(
            form("About").validate(&store),
            Err(EditorError::DuplicatePage("about".into()))
        );
        assert_eq!(
            form("Projects").validate(&store),
            Err(EditorError::ReservedSlug("projects".into()))
        );
        assert_eq!(form("   ").validate(&store), Err(EditorError::InvalidSlug("".into())));
        assert_eq!(
            form("a/b").validate(&store),
            Err(EditorError::InvalidSlug("a/b".into()))
        );

        let created = form("Lab Members").validate(&store).unwrap();
        assert_eq!(created.page_name, "lab-members");
        assert_eq!(created.title, "Lab Members");
        assert!(created.content.is_empty());
    }

    #[test]
    fn test_pending_delete_refuses_home() {
        assert_eq!(
            PendingDelete::page(HOME_PAGE),
            Err(EditorError::ProtectedPage("home".into()))
        );
    }

    #[test]
    fn test_pending_delete_requires_confirmation() {
        let pending = PendingDelete::page("about").unwrap();
        assert!(!pending.is_confirmed());
        assert!(pending.prompt().contains("about"));
        assert!(pending.confirm().is_confirmed());
    }

    #[test]
    fn test_project_draft_create_vs_update() {
        let draft = ProjectDraft::new(5);
        assert!(draft.is_new());
        assert_eq!(draft.to_create().order, 5);

        let project = Project {
            id: Uuid::new_v4(),
            title: " Vaccine Immunology ".into(),
            description: "d".into(),
            key_areas: "k".into(),
            icon: "💉".into(),
            order: 3,
            is_published: false,
            created_at: None,
            updated_at: None,
        };
        let draft = ProjectDraft::from_project(&project);
        assert_eq!(draft.id(), Some(project.id));
        assert_eq!(draft.to_update().title.as_deref(), Some("Vaccine Immunology"));
        assert_eq!(draft.to_update().is_published, Some(false));
    }

    #[test]
    fn test_is_stale() {
        let a = crate::models::timestamp::parse("2025-01-01T00:00:00");
        let b = crate::models::timestamp::parse("2025-01-02T00:00:00");

        assert!(is_stale(a, b));
        assert!(!is_stale(a, a));
        assert!(!is_stale(None, b));
        assert!(!is_stale(a, None));
    }

    #[test]
    fn test_is_stale_ignores_sub_millisecond_precision() {
        let response = crate::models::timestamp::parse("2025-07-04T10:15:30.123456");
        let stored = crate::models::timestamp::parse("2025-07-04T10:15:30.123000");
        let later = crate::models::timestamp::parse("2025-07-04T10:15:30.124000");

        assert!(!is_stale(response, stored));
        assert!(is_stale(response, later));
    }
}
