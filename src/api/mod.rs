//! Client side of the lab's content REST API.

pub use http::*;

mod http;

use uuid::Uuid;

use crate::common::ApiError;
use crate::models::*;
use crate::types::*;

/// The backend contract. Reads are anonymous; every write carries the
/// caller's bearer token explicitly.
#[allow(async_fn_in_trait)]
pub trait SiteApi {
    async fn list_pages(&self) -> Result<Vec<Page>, ApiError>;

    async fn get_page(&self, page_name: &str) -> Result<Page, ApiError>;

    async fn create_page(&self, token: &str, page: &PageCreate) -> Result<Page, ApiError>;

    async fn update_page(
        &self,
        token: &str,
        page_name: &str,
        update: &PageUpdate,
    ) -> Result<Page, ApiError>;

    async fn delete_page(&self, token: &str, page_name: &str) -> Result<(), ApiError>;

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn get_project(&self, id: Uuid) -> Result<Project, ApiError>;

    async fn create_project(
        &self,
        token: &str,
        project: &ProjectCreate,
    ) -> Result<Project, ApiError>;

    async fn update_project(
        &self,
        token: &str,
        id: Uuid,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError>;

    async fn delete_project(&self, token: &str, id: Uuid) -> Result<(), ApiError>;

    async fn get_settings(&self) -> Result<SiteSettings, ApiError>;

    async fn update_settings(
        &self,
        token: &str,
        update: &SiteSettingsUpdate,
    ) -> Result<SiteSettings, ApiError>;

    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError>;

    async fn current_user(&self, token: &str) -> Result<Identity, ApiError>;

    async fn list_media(&self, token: &str) -> Result<Vec<MediaFile>, ApiError>;

    async fn upload_media(
        &self,
        token: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaFile, ApiError>;

    async fn delete_media(&self, token: &str, id: Uuid) -> Result<(), ApiError>;
}
