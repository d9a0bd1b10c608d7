use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into their parent
pub fn clean(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Path of `path` relative to `root`, or `path` unchanged when it lies outside `root`
pub fn sub_path(root: &Path, path: &Path) -> PathBuf {
    let root = clean(root);
    let path = clean(path);
    match path.strip_prefix(&root) {
        Ok(relative) if relative.as_os_str().is_empty() => PathBuf::from("."),
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}

/// Join `path` onto `root` the way a chroot would: a leading `/` does not escape `root`
pub fn join_under(root: &Path, path: &Path) -> PathBuf {
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    clean(&root.join(relative))
}

/// Whether `path` lies inside `root` once both are normalized
pub fn is_within(root: &Path, path: &Path) -> bool {
    clean(path).starts_with(clean(root))
}

const SHELL_SPECIAL: &str = "\"'$`\\&|;<>()*?[]#~!{}";

/// Render a path for a shell command line, double-quoted like the `cd` line
pub fn to_shell_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let needs_quotes = text.is_empty()
        || text.contains(|c: char| c.is_whitespace() || SHELL_SPECIAL.contains(c));
    if !needs_quotes {
        return text.into_owned();
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
