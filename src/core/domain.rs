use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}


// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub default_page: i64,
    pub default_page_size: i64,
    pub docs_path: String,
    pub openapi_path: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_page: 1,
            default_page_size: 10,
            docs_path: "/docs".to_string(),
            openapi_path: "/api-docs/openapi.json".to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub fn docs_url(&self) -> String {
        format!("{}{}", self.public_url(), self.docs_path)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(3000, config.port);
        assert_eq!(1, config.default_page);
        assert_eq!(10, config.default_page_size);
        assert_eq!("0.0.0.0:3000", config.bind_addr());
        assert_eq!("http://localhost:3000", config.public_url());
        assert_eq!("http://localhost:3000/docs", config.docs_url());
    }
}
