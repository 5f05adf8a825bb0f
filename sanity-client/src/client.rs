use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    mutation::{MutationRequest, MutationResponse},
    Config, Error, Mutation, Params,
};

/// Sanity API client
///
/// Cheap to clone, clones share the underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    config: Config,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Client {
    /// Creates a [`ClientBuilder`]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Runs a GROQ query and deserializes its `result`
    ///
    /// A `null` result, such as `*[...][0]` matching nothing, is returned as `None`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &Params,
    ) -> Result<Option<T>, Error> {
        let url = format!(
            "{}{}",
            self.inner.config.api_url,
            self.inner.config.query_path()
        );

        let mut pairs = vec![("query".to_string(), query.to_string())];
        pairs.extend(params.to_query_pairs());

        tracing::trace!("Sanity query: {} {:?}", query, params);

        let mut request = self.inner.http.get(url).query(&pairs);
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = check_status(response).await?;

        let body: QueryResponse<Option<T>> = response.json().await?;

        Ok(body.result)
    }

    /// Applies mutations in a single transaction
    pub async fn mutate(&self, mutations: &[Mutation]) -> Result<MutationResponse, Error> {
        let Some(token) = &self.inner.token else {
            return Err(Error::MissingToken);
        };

        let url = format!(
            "{}{}",
            self.inner.config.api_url,
            self.inner.config.mutate_path()
        );

        let response = self
            .inner
            .http
            .post(url)
            .query(&[("returnIds", "true")])
            .bearer_auth(token)
            .json(&MutationRequest { mutations })
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .and_then(|e| e.error.description.or(e.error.message))
        .unwrap_or(text);

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[derive(Default)]
pub struct ClientBuilder {
    config: Option<Config>,
    token: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// API token, required for mutations and for reading private datasets
    pub fn token(mut self, token: &str) -> Self {
        if !token.is_empty() {
            self.token = Some(token.to_string());
        }
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let Some(config) = self.config else {
            return Err(Error::InvalidConfig("missing client config".to_string()));
        };

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(Client {
            inner: Arc::new(ClientInner {
                http: http.build()?,
                config,
                token: self.token,
            }),
        })
    }
}
