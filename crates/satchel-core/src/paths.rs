//! Standard paths used by satchel tools

use std::path::PathBuf;

/// Standard satchel paths
pub struct Paths {
    /// Data directory (~/.local/share/satchel)
    pub data: PathBuf,
    /// Config directory (~/.config/satchel)
    pub config: PathBuf,
    /// Home directory (~)
    pub home: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("satchel");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("satchel");

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));

        Self { data, config, home }
    }

    /// Get the data subdirectory for a tool
    pub fn state(&self, tool: &str) -> PathBuf {
        self.data.join(tool)
    }
}
