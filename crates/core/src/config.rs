use serde::{Deserialize, Serialize};
use storage::DataDir;

pub const DEFAULT_DATA_DIR: &str = "assets/data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding library.json, projects.json, articles.json and links.json.
    pub dir: String,
}

impl AppConfig {
    pub fn data_dir(&self) -> DataDir {
        DataDir::open(&self.data.dir)
    }
}

/// Built-in default, then the config file, then `data_dir` when given.
pub fn load(path: Option<&str>, data_dir: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder().set_default("data.dir", DEFAULT_DATA_DIR)?;
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.set_override_option("data.dir", data_dir)?.build()?;
    Ok(cfg.try_deserialize()?)
}
