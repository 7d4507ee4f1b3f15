use crate::types::GitHubEvent;

/// Turn a public event into a one-line, human-readable description.
pub fn describe_event(event: &GitHubEvent) -> String {
    let repo = short_repo_name(event.repo_full_name());

    match event.event_type.as_str() {
        "PushEvent" => {
            let commits = event.commit_count();
            let plural = if commits == 1 { "" } else { "s" };
            format!("Pushed {commits} commit{plural} to {repo}")
        }
        "CreateEvent" => format!("Created {} in {repo}", event.ref_type()),
        "ForkEvent" => format!("Forked {repo}"),
        "WatchEvent" => format!("Starred {repo}"),
        "IssuesEvent" => format!("{} issue in {repo}", capitalize(event.payload_action())),
        "PullRequestEvent" => format!(
            "{} pull request in {repo}",
            capitalize(event.payload_action())
        ),
        other => {
            let label = other.strip_suffix("Event").unwrap_or(other);
            format!("{label} in {repo}")
        }
    }
}

/// Last path segment of `owner/name`.
pub fn short_repo_name(full_name: &str) -> &str {
    full_name.rsplit('/').next().unwrap_or(full_name)
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
