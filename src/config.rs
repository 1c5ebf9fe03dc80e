use directories::ProjectDirs;
use std::path::PathBuf;

pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn new() -> Self {
        let proj_dirs = ProjectDirs::from("com", "doorbob", "DoorBob")
            .expect("Failed to determine project directories");
        Self {
            data_dir: proj_dirs.data_dir().to_path_buf(),
        }
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
