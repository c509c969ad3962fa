//! Isolated test environment with temp directory.

use super::TodolyCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary workspace.
///
/// The workspace and a private home directory live in one temp directory
/// that is removed on drop. Commands run with `HOME` and
/// `XDG_CONFIG_HOME` pointed at the private home, so no user config leaks in.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty workspace.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("work");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&root).expect("Failed to create workspace");
        std::fs::create_dir_all(&home).expect("Failed to create home");
        Self {
            _temp_dir: temp_dir,
            root,
            home,
        }
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a source file below the workspace root, creating directories.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file below the workspace root.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.root.join(name)).expect("Failed to read file")
    }

    /// Writes `todoly/config.toml` under the private XDG config home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home.join(".config").join("todoly");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> TodolyCommand {
        self.bare_cmd().dir(&self.root)
    }

    /// Like [`cmd`](Self::cmd) but without `--dir`.
    pub fn bare_cmd(&self) -> TodolyCommand {
        TodolyCommand::new()
            .env("HOME", self.home.to_string_lossy())
            .env("XDG_CONFIG_HOME", self.home.join(".config").to_string_lossy())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_workspace() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "workspace should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.root().to_string_lossy());
    }

    #[test]
    fn test_env_write_file_creates_parents() {
        let env = TestEnv::new();
        let path = env.write_file("src/deep/a.ts", "// TODO: x");
        assert!(path.is_file());
        assert_eq!(env.read_file("src/deep/a.ts"), "// TODO: x");
    }
}
