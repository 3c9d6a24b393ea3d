use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/tuentitv, regardless of OS)
///
/// `TUENTITV_CONFIG_DIR` overrides it, which keeps tests away from the real
/// home directory.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("TUENTITV_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join("tuentitv")
}

/// Get the config file path (always ~/.config/tuentitv/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the log directory (cache dir, falling back to home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("tuentitv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_file_name() {
        let path = get_config_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_log_dir_is_namespaced() {
        assert!(get_log_dir().ends_with("tuentitv"));
    }
}
