// Datasource configuration
use serde::Deserialize;

/// The record the host supplies when it instantiates a datasource. `url` and
/// `grafana_db` are carried on the adapter but no operation reads them; the
/// wire contract pins the backend base address instead.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasourceConfig {
    pub name: String,
    pub url: String,
    #[serde(default, rename = "grafanaDB")]
    pub grafana_db: bool,
}

/// Load the datasource record from `config/datasource.{toml,json,yaml}` for
/// hosts that configure through files rather than handing the record over
/// directly.
pub fn load_datasource_config() -> anyhow::Result<DatasourceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/datasource"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_record() {
        let record: DatasourceConfig = serde_json::from_str(
            r#"{"name": "gofana", "url": "http://localhost:8080", "grafanaDB": true}"#,
        )
        .unwrap();

        assert_eq!(record.name, "gofana");
        assert_eq!(record.url, "http://localhost:8080");
        assert!(record.grafana_db);
    }

    #[test]
    fn test_grafana_db_defaults_to_false() {
        let record: DatasourceConfig =
            serde_json::from_str(r#"{"name": "gofana", "url": "http://localhost:8080"}"#).unwrap();
        assert!(!record.grafana_db);
    }
}
