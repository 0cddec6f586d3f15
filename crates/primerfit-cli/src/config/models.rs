use primerfit::engine::config::SelectionConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub trace_dir: Option<PathBuf>,
    pub core_config: SelectionConfig,
}
