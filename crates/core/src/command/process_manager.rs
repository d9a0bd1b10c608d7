/// `pm2 start` in foreground mode, so the container supervisor keeps the process.
///
/// Without a target file pm2 expects the entry file to follow.
pub fn pm2_start_command(target: Option<&str>) -> String {
    match target.filter(|t| !t.is_empty()) {
        Some(target) => format!("pm2 start {target} --no-daemon"),
        None => "pm2 start --no-daemon".to_string(),
    }
}
