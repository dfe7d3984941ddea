use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::SiteApi;
use crate::common::ApiError;
use crate::models::*;
use crate::types::*;

/// `SiteApi` over HTTP. Works natively and in the browser.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public url of an uploaded media file.
    pub fn media_url(&self, id: Uuid) -> String {
        format!("{}/api/media/{}", self.base_url, id)
    }

    /// `{base}/api/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Transport(format!("invalid api url '{}': {e}", self.base_url)))?;

        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::Transport(format!("api url '{}' cannot be a base", self.base_url))
            })?;
            path.pop_if_empty().push("api").extend(segments);
        }

        Ok(url)
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let path = response.url().path().to_string();

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(path)),
        _ => {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message())
                .unwrap_or(body);

            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl SiteApi for HttpApi {
    async fn list_pages(&self) -> Result<Vec<Page>, ApiError> {
        send(self.client.get(self.endpoint(&["pages"])?)).await
    }

    async fn get_page(&self, page_name: &str) -> Result<Page, ApiError> {
        send(self.client.get(self.endpoint(&["pages", page_name])?)).await
    }

    async fn create_page(&self, token: &str, page: &PageCreate) -> Result<Page, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["pages"])?)
            .bearer_auth(token)
            .json(page);

        send(request).await
    }

    async fn update_page(
        &self,
        token: &str,
        page_name: &str,
        update: &PageUpdate,
    ) -> Result<Page, ApiError> {
        let request = self
            .client
            .put(self.endpoint(&["pages", page_name])?)
            .bearer_auth(token)
            .json(update);

        send(request).await
    }

    async fn delete_page(&self, token: &str, page_name: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.endpoint(&["pages", page_name])?)
            .bearer_auth(token);

        send::<MessageResponse>(request).await.map(|_| ())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        send(self.client.get(self.endpoint(&["projects"])?)).await
    }

    async fn get_project(&self, id: Uuid) -> Result<Project, ApiError> {
        let id = id.to_string();
        send(self.client.get(self.endpoint(&["projects", &id])?)).await
    }

    async fn create_project(
        &self,
        token: &str,
        project: &ProjectCreate,
    ) -> Result<Project, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["projects"])?)
            .bearer_auth(token)
            .json(project);

        send(request).await
    }

    async fn update_project(
        &self,
        token: &str,
        id: Uuid,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        let id = id.to_string();
        let request = self
            .client
            .put(self.endpoint(&["projects", &id])?)
            .bearer_auth(token)
            .json(update);

        send(request).await
    }

    async fn delete_project(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        let id = id.to_string();
        let request = self
            .client
            .delete(self.endpoint(&["projects", &id])?)
            .bearer_auth(token);

        send::<MessageResponse>(request).await.map(|_| ())
    }

    async fn get_settings(&self) -> Result<SiteSettings, ApiError> {
        send(self.client.get(self.endpoint(&["settings"])?)).await
    }

    async fn update_settings(
        &self,
        token: &str,
        update: &SiteSettingsUpdate,
    ) -> Result<SiteSettings, ApiError> {
        let request = self
            .client
            .put(self.endpoint(&["settings"])?)
            .bearer_auth(token)
            .json(update);

        send(request).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["auth", "login"])?)
            .json(credentials);

        send(request).await
    }

    async fn current_user(&self, token: &str) -> Result<Identity, ApiError> {
        let request = self
            .client
            .get(self.endpoint(&["auth", "me"])?)
            .bearer_auth(token);

        send(request).await
    }

    async fn list_media(&self, token: &str) -> Result<Vec<MediaFile>, ApiError> {
        let request = self
            .client
            .get(self.endpoint(&["media"])?)
            .bearer_auth(token);

        send(request).await
    }

    async fn upload_media(
        &self,
        token: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaFile, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let request = self
            .client
            .post(self.endpoint(&["media", "upload"])?)
            .bearer_auth(token)
            .multipart(Form::new().part("file", part));

        send(request).await
    }

    async fn delete_media(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        let id = id.to_string();
        let request = self
            .client
            .delete(self.endpoint(&["media", &id])?)
            .bearer_auth(token);

        send::<MessageResponse>(request).await.map(|_| ())
    }
}
