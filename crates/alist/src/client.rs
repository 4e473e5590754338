use crate::backend::RemoteFileSystem;
use crate::models::{ApiResponse, ListData, ListRequest, LoginData, LoginRequest};
use crate::{AlistError, RemoteListing};
use serde::de::DeserializeOwned;
use serde::Serialize;

type Result<T> = std::result::Result<T, AlistError>;

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const LIST_ENDPOINT: &str = "/api/fs/list";
const API_SUCCESS: i64 = 200;

/// Authenticated session against one AList server
pub struct AlistFileSystem {
    client: reqwest::Client,
    base_url: String,
    token: String,
    base_path: String,
}

impl AlistFileSystem {
    /// Logs in and returns a session rooted at `base_path`
    pub async fn login(
        client: reqwest::Client,
        base_url: &str,
        username: &str,
        password: &str,
        base_path: &str,
    ) -> Result<Self> {
        let mut fs = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: String::new(),
            base_path: base_path.to_string(),
        };

        let data: LoginData = fs
            .post(LOGIN_ENDPOINT, &LoginRequest { username, password })
            .await?;
        fs.token = data.token;

        tracing::debug!("Logged in to {} as {}", fs.base_url, username);
        Ok(fs)
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.post(&url).json(body);
        if !self.token.is_empty() {
            request = request.header(reqwest::header::AUTHORIZATION, &self.token);
        }

        let response = request.send().await?.error_for_status()?;
        let envelope: ApiResponse<T> = response.json().await?;

        if envelope.code != API_SUCCESS {
            return Err(AlistError::ApiError {
                endpoint: endpoint.to_string(),
                code: envelope.code,
                message: envelope.message,
            });
        }

        envelope
            .data
            .ok_or_else(|| AlistError::EmptyResponse(endpoint.to_string()))
    }
}

#[async_trait::async_trait]
impl RemoteFileSystem for AlistFileSystem {
    async fn list(&self, path: &str) -> Result<Vec<RemoteListing>> {
        let request = ListRequest {
            path,
            password: "",
            page: 1,
            per_page: 0,
            refresh: false,
        };

        let data: ListData = self.post(LIST_ENDPOINT, &request).await?;
        let content = data.content.unwrap_or_default();

        tracing::trace!("Listed {} ({} entries)", path, content.len());
        Ok(content)
    }

    fn public_url(&self, path: &str) -> Result<String> {
        Ok(autofilm_utils::download_url(&self.base_url, path)?)
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}
