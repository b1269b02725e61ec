use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file.
pub const CONFIG_ENV: &str = "MORTAL_CFG";
/// File name used when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Root that relative configuration paths are anchored to.
///
/// This is the parent of the directory holding the loader crate, i.e. the
/// workspace root. The path is fixed when the crate is compiled, so an
/// installed or relocated binary still points at the build checkout; set
/// `MORTAL_CFG` to an absolute path in that case.
pub fn project_root() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(crate_dir)
        .to_path_buf()
}

/// Resolves the configuration path from the variable's value.
///
/// Absolute paths are used as-is; relative ones are joined onto `root`.
/// Only an unset variable selects the default file. An empty value resolves
/// to `root` itself, which then fails to load.
pub fn resolve_config_path(env_value: Option<&str>, root: &Path) -> PathBuf {
    let name = env_value.unwrap_or(DEFAULT_CONFIG_FILE);
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_under_root() {
        let root = Path::new("/srv/mortal");
        assert_eq!(resolve_config_path(None, root), root.join("config.toml"));
        assert_eq!(resolve_config_path(Some(""), root), root.join(""));
    }

    #[test]
    fn relative_override_under_root() {
        let root = Path::new("/srv/mortal");
        assert_eq!(
            resolve_config_path(Some("configs/train.toml"), root),
            root.join("configs/train.toml")
        );
    }

    #[test]
    fn absolute_override_kept() {
        let absolute = std::env::temp_dir().join("mortal.toml");
        let resolved = resolve_config_path(absolute.to_str(), Path::new("/srv/mortal"));
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn project_root_contains_crates() {
        assert!(project_root().join("crates").join("mortal-config").is_dir());
    }
}
