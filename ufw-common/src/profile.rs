const BANNER: &str = "Available";

/// Parses `ufw app list`. Each remaining line is an application name.
pub fn parse_app_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(BANNER))
        .map(String::from)
        .collect()
}
