#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.launches_csv, "data/spacex_launches.csv");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.data.launches_csv, "data/spacex_launches.csv");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::from_path(Path::new("/no/such/launchdeck.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.launches_csv, "data/spacex_launches.csv");
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launchdeck.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(Config::from_path(&path).is_err());
    }

    #[test]
    fn test_listen_addr_parses_host_and_port() {
        let config: Config = toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 8080\n").unwrap();
        let addr = config.server.listen_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_listen_addr_rejects_bad_host() {
        let server = ServerConfig {
            host: "not-an-ip".to_string(),
            port: 3000,
        };
        assert!(server.listen_addr().is_err());
    }
}
