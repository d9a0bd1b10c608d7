use crate::interfaces::FileProbe;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prepare a user-supplied command for the script.
///
/// When the first token names a file in the source tree it is made
/// executable, and a bare relative name gets a `./` prefix so the shell
/// finds it without the source root on PATH.
pub fn prepare_user_command(probe: &dyn FileProbe, command: &str, source_path: &Path) -> String {
    let command = command.trim();
    let Some(program) = command.split_whitespace().next() else {
        return String::new();
    };

    let program_path = resolve_program(program, source_path);
    if !probe.is_file(&program_path) {
        debug!("User command program {:?} is not a file in the source tree", program);
        return command.to_string();
    }

    match probe.add_execute_permission(&program_path) {
        Ok(added) => info!("Permission added: {}", added),
        Err(e) => warn!("Could not add execute permission to {:?}: {}", program_path, e),
    }

    if needs_relative_prefix(program) {
        format!("./{command}")
    } else {
        command.to_string()
    }
}

fn resolve_program(program: &str, source_path: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        source_path.join(path)
    }
}

fn needs_relative_prefix(program: &str) -> bool {
    !(program.starts_with('/')
        || program.starts_with("./")
        || program.starts_with("../")
        || program.starts_with('~')
        || program.starts_with('$'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DefaultFileProbe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_existing_script_gets_relative_prefix() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("entry.sh"), "exit 222")?;

        let command = prepare_user_command(&DefaultFileProbe, " entry.sh --verbose ", temp.path());
        assert_eq!(command, "./entry.sh --verbose");
        Ok(())
    }

    #[test]
    fn test_plain_command_is_untouched() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        let command = prepare_user_command(&DefaultFileProbe, "npm run serve", temp.path());
        assert_eq!(command, "npm run serve");
        Ok(())
    }

    #[test]
    fn test_explicit_relative_path_is_kept() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("bin"))?;
        fs::write(temp.path().join("bin/start.sh"), "exit 0")?;

        let command = prepare_user_command(&DefaultFileProbe, "./bin/start.sh", temp.path());
        assert_eq!(command, "./bin/start.sh");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_script_is_made_executable() -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new()?;
        let script = temp.path().join("entry.sh");
        fs::write(&script, "exit 0")?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644))?;

        prepare_user_command(&DefaultFileProbe, "entry.sh", temp.path());
        assert_ne!(fs::metadata(&script)?.permissions().mode() & 0o100, 0);
        Ok(())
    }
}
