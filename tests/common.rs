use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use odonlab::api::SiteApi;
use odonlab::common::ApiError;
use odonlab::models::*;
use odonlab::types::*;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const REVOKED_TOKEN: &str = "revoked-token";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn page(page_name: &str, title: &str, is_published: bool, content: serde_json::Value) -> Page {
    let content = match content {
        serde_json::Value::Object(map) => ContentDocument::from(map),
        _ => ContentDocument::new(),
    };

    Page {
        id: Uuid::new_v4(),
        page_name: page_name.to_string(),
        title: title.to_string(),
        subtitle: None,
        content,
        meta_description: None,
        meta_keywords: None,
        is_published,
        created_at: Some(parse_time("2026-01-04T22:15:06Z")),
        updated_at: Some(parse_time("2026-01-05T09:35:22Z")),
    }
}

pub fn get_seed_pages() -> Vec<Page> {
    vec![
        page(
            "home",
            "Welcome to Odon Lab",
            true,
            serde_json::json!({
                "background_image": "https://images.example/lab.jpg",
                "about": "Virology and immunology research.",
                "research_interests": ["Virus-host cell interactions", "Antiviral therapeutics"],
            }),
        ),
        page(
            "odonai",
            "OdonAI",
            true,
            serde_json::json!({
                "computational_tools": {
                    "structural_biology": "Predict viral protein structures.",
                    "systems_immunology": "Model immune system networks.",
                },
            }),
        ),
        page("lab-members", "Lab Members", true, serde_json::json!({})),
        page("drafts", "Unfinished Notes", false, serde_json::json!({"notes": "wip"})),
    ]
}

pub fn project(n: u128, title: &str, order: i32, is_published: bool) -> Project {
    Project {
        id: seed_id(n),
        title: title.to_string(),
        description: format!("{} description", title),
        key_areas: String::new(),
        icon: "🧬".to_string(),
        order,
        is_published,
        created_at: Some(parse_time("2026-01-02T18:41:18Z")),
        updated_at: Some(parse_time("2026-01-02T18:41:18Z")),
    }
}

/// Orders [3, 1, 2]; the order-2 project is hidden.
pub fn get_seed_projects() -> Vec<Project> {
    vec![
        project(1, "Vaccine Immunology", 3, true),
        project(2, "Viral Pathogenesis Studies", 1, true),
        project(3, "Antiviral Drug Development", 2, false),
    ]
}

pub fn get_seed_media() -> Vec<MediaFile> {
    vec![MediaFile {
        id: seed_id(100),
        filename: "0001.jpg".to_string(),
        original_filename: "lab.jpg".to_string(),
        file_type: "image/jpeg".to_string(),
        file_size: 2048,
        uploaded_at: Some(parse_time("2026-01-03T10:00:00Z")),
    }]
}

/// In-memory backend speaking the same contract as the REST API. Every call
/// is recorded as `"METHOD path"`.
pub struct FakeApi {
    pub pages: RefCell<Vec<Page>>,
    pub projects: RefCell<Vec<Project>>,
    pub settings: RefCell<Option<SiteSettings>>,
    pub media: RefCell<Vec<MediaFile>>,
    pub calls: RefCell<Vec<String>>,
    pub offline: Cell<bool>,
    pub reject_writes: Cell<bool>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            pages: RefCell::new(get_seed_pages()),
            projects: RefCell::new(get_seed_projects()),
            settings: RefCell::new(Some(SiteSettings::default())),
            media: RefCell::new(get_seed_media()),
            calls: RefCell::new(Vec::new()),
            offline: Cell::new(false),
            reject_writes: Cell::new(false),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Calls that would change backend state.
    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("GET ") && !call.starts_with("POST /api/auth"))
            .collect()
    }

    /// Simulates another admin saving the page after it was opened here.
    pub fn touch_page(&self, page_name: &str) {
        if let Some(page) = self.pages.borrow_mut().iter_mut().find(|p| p.page_name == page_name) {
            page.updated_at = page.updated_at.map(|t| t + Duration::minutes(5));
        }
    }

    pub fn touch_project(&self, id: Uuid) {
        if let Some(project) = self.projects.borrow_mut().iter_mut().find(|p| p.id == id) {
            project.updated_at = project.updated_at.map(|t| t + Duration::minutes(5));
        }
    }

    fn record(&self, call: impl Into<String>) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.into());
        if self.offline.get() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn authorize_write(&self, token: &str) -> Result<(), ApiError> {
        match token {
            ADMIN_TOKEN if self.reject_writes.get() => Err(ApiError::Rejected {
                status: 500,
                detail: "Internal server error".to_string(),
            }),
            ADMIN_TOKEN => Ok(()),
            EDITOR_TOKEN => Err(ApiError::Forbidden),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

impl SiteApi for FakeApi {
    async fn list_pages(&self) -> Result<Vec<Page>, ApiError> {
        self.record("GET /api/pages")?;
        Ok(self.pages.borrow().clone())
    }

    async fn get_page(&self, page_name: &str) -> Result<Page, ApiError> {
        self.record(format!("GET /api/pages/{}", page_name))?;
        self.pages
            .borrow()
            .iter()
            .find(|p| p.page_name == page_name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Page '{}'", page_name)))
    }

    async fn create_page(&self, token: &str, page: &PageCreate) -> Result<Page, ApiError> {
        self.record("POST /api/pages")?;
        self.authorize_write(token)?;

        if self.pages.borrow().iter().any(|p| p.page_name == page.page_name) {
            return Err(ApiError::Rejected {
                status: 400,
                detail: "Page with this name already exists".to_string(),
            });
        }

        let created = Page {
            id: Uuid::new_v4(),
            page_name: page.page_name.clone(),
            title: page.title.clone(),
            subtitle: page.subtitle.clone(),
            content: page.content.clone(),
            meta_description: page.meta_description.clone(),
            meta_keywords: page.meta_keywords.clone(),
            is_published: page.is_published,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        self.pages.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_page(
        &self,
        token: &str,
        page_name: &str,
        update: &PageUpdate,
    ) -> Result<Page, ApiError> {
        self.record(format!("PUT /api/pages/{}", page_name))?;
        self.authorize_write(token)?;

        let mut pages = self.pages.borrow_mut();
        let page = pages
            .iter_mut()
            .find(|p| p.page_name == page_name)
            .ok_or_else(|| ApiError::NotFound(format!("Page '{}'", page_name)))?;

        if let Some(title) = &update.title {
            page.title = title.clone();
        }
        if let Some(subtitle) = &update.subtitle {
            page.subtitle = Some(subtitle.clone());
        }
        if let Some(content) = &update.content {
            page.content = content.clone();
        }
        if let Some(is_published) = update.is_published {
            page.is_published = is_published;
        }
        page.updated_at = page.updated_at.map(|t| t + Duration::seconds(1));

        Ok(page.clone())
    }

    async fn delete_page(&self, token: &str, page_name: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/pages/{}", page_name))?;
        self.authorize_write(token)?;
        self.pages.borrow_mut().retain(|p| p.page_name != page_name);
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record("GET /api/projects")?;
        Ok(self.projects.borrow().clone())
    }

    async fn get_project(&self, id: Uuid) -> Result<Project, ApiError> {
        self.record(format!("GET /api/projects/{}", id))?;
        self.projects
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Project".to_string()))
    }

    async fn create_project(
        &self,
        token: &str,
        project: &ProjectCreate,
    ) -> Result<Project, ApiError> {
        self.record("POST /api/projects")?;
        self.authorize_write(token)?;

        // The response keeps microseconds, the stored copy only milliseconds.
        let now = parse_time("2026-02-01T12:00:00.123456Z");
        let created = Project {
            id: Uuid::new_v4(),
            title: project.title.clone(),
            description: project.description.clone(),
            key_areas: project.key_areas.clone(),
            icon: project.icon.clone(),
            order: project.order,
            is_published: project.is_published,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let stored = DateTime::from_timestamp_millis(now.timestamp_millis());
        self.projects.borrow_mut().push(Project {
            created_at: stored,
            updated_at: stored,
            ..created.clone()
        });
        Ok(created)
    }

    async fn update_project(
        &self,
        token: &str,
        id: Uuid,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.record(format!("PUT /api/projects/{}", id))?;
        self.authorize_write(token)?;

        let mut projects = self.projects.borrow_mut();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound("Project".to_string()))?;

        if let Some(title) = &update.title {
            project.title = title.clone();
        }
        if let Some(order) = update.order {
            project.order = order;
        }
        if let Some(is_published) = update.is_published {
            project.is_published = is_published;
        }
        project.updated_at = project.updated_at.map(|t| t + Duration::seconds(1));

        Ok(project.clone())
    }

    async fn delete_project(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/projects/{}", id))?;
        self.authorize_write(token)?;
        self.projects.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn get_settings(&self) -> Result<SiteSettings, ApiError> {
        self.record("GET /api/settings")?;
        self.settings
            .borrow()
            .clone()
            .ok_or_else(|| ApiError::NotFound("Settings".to_string()))
    }

    async fn update_settings(
        &self,
        token: &str,
        update: &SiteSettingsUpdate,
    ) -> Result<SiteSettings, ApiError> {
        self.record("PUT /api/settings")?;
        self.authorize_write(token)?;

        let mut settings = self.settings.borrow().clone().unwrap_or_default();
        if let Some(site_name) = &update.site_name {
            settings.site_name = site_name.clone();
        }
        if let Some(contact_email) = &update.contact_email {
            settings.contact_email = contact_email.clone();
        }
        *self.settings.borrow_mut() = Some(settings.clone());
        Ok(settings)
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.record("POST /api/auth/login")?;

        let token = match (credentials.username.as_str(), credentials.password.as_str()) {
            ("admin", "secret") => ADMIN_TOKEN,
            ("editor", "secret") => EDITOR_TOKEN,
            ("ghost", "secret") => REVOKED_TOKEN,
            _ => return Err(ApiError::Unauthorized),
        };

        Ok(TokenResponse {
            access_token: token.to_string(),
            token_type: "bearer".to_string(),
        })
    }

    async fn current_user(&self, token: &str) -> Result<Identity, ApiError> {
        self.record("GET /api/auth/me")?;

        let (username, is_admin) = match token {
            ADMIN_TOKEN => ("admin", true),
            EDITOR_TOKEN => ("editor", false),
            _ => return Err(ApiError::Unauthorized),
        };

        Ok(Identity {
            username: username.to_string(),
            email: None,
            is_admin,
            is_active: true,
        })
    }

    async fn list_media(&self, token: &str) -> Result<Vec<MediaFile>, ApiError> {
        self.record("GET /api/media")?;
        self.authorize_write(token)?;
        Ok(self.media.borrow().clone())
    }

    async fn upload_media(
        &self,
        token: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaFile, ApiError> {
        self.record("POST /api/media/upload")?;
        self.authorize_write(token)?;

        let file = MediaFile {
            id: Uuid::new_v4(),
            filename: Uuid::new_v4().to_string(),
            original_filename: file_name.to_string(),
            file_type: content_type.to_string(),
            file_size: bytes.len() as u64,
            uploaded_at: Some(Utc::now()),
        };
        self.media.borrow_mut().push(file.clone());
        Ok(file)
    }

    async fn delete_media(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/media/{}", id))?;
        self.authorize_write(token)?;
        self.media.borrow_mut().retain(|m| m.id != id);
        Ok(())
    }
}
