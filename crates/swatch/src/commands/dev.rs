//! Development server command.

use anyhow::Result;
use swatch_server::{DevServer, DevServerConfig};

use crate::config::Config;

fn server_config(config: Config, port: Option<u16>, open: bool) -> DevServerConfig {
    DevServerConfig {
        content_dir: config.content.dir,
        port: port.unwrap_or(config.server.port),
        host: config.server.host,
        open,
        title: config.site.title,
        styles: config.site.styles.into_iter().map(Into::into).collect(),
        default_language: config.site.default_language,
    }
}

/// Run the dev server.
pub async fn run(config: Config, port: Option<u16>, open: bool) -> Result<()> {
    let config = server_config(config, port, open);
    tracing::info!("Starting development server on port {}", config.port);

    DevServer::new(config).start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn port_flag_overrides_config() {
        let mut file = Config::default();
        file.server.port = 8080;
        file.site.styles = vec!["theme.css".to_string()];

        assert_eq!(server_config(Config::default(), None, true).port, 7777);

        let config = server_config(file, Some(9000), false);
        assert_eq!(config.port, 9000);
        assert!(!config.open);
        assert_eq!(config.styles, vec![PathBuf::from("theme.css")]);
    }
}
