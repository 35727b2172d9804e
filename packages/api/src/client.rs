use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use store::config::BackendConfig;
use store::{BackendError, BlogBackend, NewPost, Post, PostId};

/// [`BlogBackend`] over REST/JSON.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    collection: Url,
}

impl HttpBackend {
    /// Build a backend for `<base_url>/<collection>`.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut collection =
            Url::parse(&config.base_url).map_err(|e| BackendError::Url(e.to_string()))?;
        collection
            .path_segments_mut()
            .map_err(|_| BackendError::Url(config.base_url.clone()))?
            .pop_if_empty()
            .push(config.collection.trim_matches('/'));

        Ok(Self {
            client: Client::new(),
            collection,
        })
    }

    /// URL of the post collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn item_url(&self, id: &PostId) -> Result<Url, BackendError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::Url(self.collection.to_string()))?
            .push(&id.to_string());
        Ok(url)
    }
}

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

/// Reject non-2xx statuses, returning the body for successful responses.
async fn checked_body(resp: Response) -> Result<Vec<u8>, BackendError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(transport)?;
    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
    Ok(bytes.to_vec())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, BackendError> {
    let bytes = checked_body(resp).await?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

impl BlogBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        tracing::debug!("GET {}", self.collection);
        let resp = self
            .client
            .get(self.collection.clone())
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn create(&self, post: &NewPost) -> Result<Post, BackendError> {
        tracing::debug!("POST {}", self.collection);
        let resp = self
            .client
            .post(self.collection.clone())
            .json(post)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn update(&self, id: &PostId, post: &Post) -> Result<Post, BackendError> {
        let url = self.item_url(id)?;
        tracing::debug!("PUT {}", url);
        let resp = self
            .client
            .put(url)
            .json(post)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn delete(&self, id: &PostId) -> Result<(), BackendError> {
        let url = self.item_url(id)?;
        tracing::debug!("DELETE {}", url);
        let resp = self.client.delete(url).send().await.map_err(transport)?;
        checked_body(resp).await?;
        Ok(())
    }
}
