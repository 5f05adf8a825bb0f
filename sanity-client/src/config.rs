use crate::Error;

/// Dataset used when none is configured.
pub const DEFAULT_DATASET: &str = "production";

/// API version the site's GROQ queries were written against.
pub const DEFAULT_API_VERSION: &str = "2023-06-21";

/// Connection settings for a Sanity project
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) api_url: String,
    pub(crate) dataset: String,
    pub(crate) api_version: String,
}

impl Config {
    /// Creates a [`ConfigBuilder`]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the GROQ query endpoint, relative to the API url
    pub fn query_path(&self) -> String {
        format!("/v{}/data/query/{}", self.api_version, self.dataset)
    }

    /// Path of the mutation endpoint, relative to the API url
    pub fn mutate_path(&self) -> String {
        format!("/v{}/data/mutate/{}", self.api_version, self.dataset)
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
    project_id: Option<String>,
    dataset: Option<String>,
    api_version: Option<String>,
    use_cdn: bool,
}

impl ConfigBuilder {
    /// Overrides the API base url, used to point the client at a mock server.
    ///
    /// Takes precedence over `project_id` & `use_cdn`.
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.trim_end_matches('/').to_string());
        self
    }

    pub fn project_id(mut self, project_id: &str) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    pub fn dataset(mut self, dataset: &str) -> Self {
        self.dataset = Some(dataset.to_string());
        self
    }

    pub fn api_version(mut self, api_version: &str) -> Self {
        self.api_version = Some(api_version.trim_start_matches('v').to_string());
        self
    }

    /// Query the edge cached `apicdn` host instead of the live API
    pub fn use_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let api_url = match (self.api_url, self.project_id) {
            (Some(api_url), _) => api_url,
            (None, Some(project_id)) if !project_id.is_empty() => {
                let host = if self.use_cdn { "apicdn" } else { "api" };
                format!("https://{}.{}.sanity.io", project_id, host)
            }
            _ => {
                return Err(Error::InvalidConfig(
                    "either a project id or an API url is required".to_string(),
                ))
            }
        };

        let dataset = self.dataset.unwrap_or_else(|| DEFAULT_DATASET.to_string());
        if dataset.is_empty() {
            return Err(Error::InvalidConfig("dataset cannot be empty".to_string()));
        }

        Ok(Config {
            api_url,
            dataset,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_project_url_from_project_id() {
        let config = Config::builder().project_id("gxtptap2").build().unwrap();

        assert_eq!(config.api_url, "https://gxtptap2.api.sanity.io");
        assert_eq!(config.dataset(), DEFAULT_DATASET);
        assert_eq!(
            config.query_path(),
            "/v2023-06-21/data/query/production".to_string()
        );
    }

    #[test]
    fn uses_cdn_host_when_requested() {
        let config = Config::builder()
            .project_id("gxtptap2")
            .use_cdn(true)
            .build()
            .unwrap();

        assert_eq!(config.api_url, "https://gxtptap2.apicdn.sanity.io");
    }

    #[test]
    fn api_url_overrides_project() {
        let config = Config::builder()
            .project_id("gxtptap2")
            .api_url("http://127.0.0.1:1234/")
            .api_version("v2024-01-01")
            .build()
            .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:1234");
        assert_eq!(config.mutate_path(), "/v2024-01-01/data/mutate/production");
    }

    #[test]
    fn fails_without_project_or_url() {
        let result = Config::builder().dataset("production").build();

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
