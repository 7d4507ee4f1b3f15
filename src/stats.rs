use crate::models::{Profile, StatsSummary};
use crate::types::GitHubRepository;
use std::collections::BTreeMap;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Number of repositories carrying each primary language. Repositories
/// without a language are skipped.
pub fn language_counts(repos: &[GitHubRepository]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for language in repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
    {
        *counts.entry(language.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Language with the highest count. Ties go to the lexicographically
/// smallest name; an empty map yields `"Unknown"`.
pub fn most_used_language(languages: &BTreeMap<String, u32>) -> String {
    let mut best: Option<(&String, u32)> = None;
    // BTreeMap iterates in name order, so a strict `>` keeps the first name
    // among equal counts.
    for (name, &count) in languages {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.clone())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
}

pub fn summarize(profile: &Profile, repos: &[GitHubRepository]) -> StatsSummary {
    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks = repos.iter().map(|r| r.forks_count).sum();
    let languages = language_counts(repos);
    let most_used_language = most_used_language(&languages);

    StatsSummary {
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
        total_stars,
        total_forks,
        most_used_language,
        languages,
        avatar_url: profile.avatar_url.clone().unwrap_or_default(),
        bio: profile.bio.clone().unwrap_or_default(),
        location: profile.location.clone().unwrap_or_default(),
        blog: profile.blog.clone().unwrap_or_default(),
        created_at: profile.created_at.clone().unwrap_or_default(),
    }
}
