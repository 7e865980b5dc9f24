/// Where the project-management API lives.
///
/// Resolved once at startup and handed to the tree through context, so call
/// sites never hard-code the host.
#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Reads `API_BASE_URL` at compile time, defaulting to the local
    /// development server.
    pub fn from_env() -> Self {
        let base_url = option_env!("API_BASE_URL").unwrap_or("http://localhost:5000");
        Self::new(base_url)
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Joins a path starting with `/` onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_paths_onto_the_base_url() {
        let config = ApiConfig::new("http://localhost:5000");
        assert_eq!(config.url("/projetos"), "http://localhost:5000/projetos");
    }

    #[test]
    fn trailing_slash_on_the_host_is_ignored() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url("/equipes"), "https://api.example.com/equipes");
    }
}
