//! Wire types for the resume API payload.
//!
//! Every field is defaulted: the backend omits or nulls fields freely (GitHub
//! profiles without a name, repositories without languages, an empty
//! contribution calendar when the GraphQL lookup fails).

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats `Some("")` and whitespace-only strings the same as `None`.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<Repository>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: ContributionCalendar,
    #[serde(default, deserialize_with = "null_as_default")]
    pub org_contributions: Vec<OrgContribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageShare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Display name, falling back to the login when the profile has no name.
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    /// Language name to byte count, as reported by GitHub.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl Repository {
    /// Language names ordered by byte count, largest first.
    pub fn language_names(&self) -> Vec<&str> {
        let mut languages: Vec<(&String, &u64)> = self.languages.iter().collect();
        languages.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        languages.into_iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_repos: u64,
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub total_forks: u64,
    #[serde(default)]
    pub languages_used: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    #[serde(default, rename = "totalContributions")]
    pub total_contributions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.contribution_days.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionWeek {
    #[serde(
        default,
        rename = "contributionDays",
        deserialize_with = "null_as_default"
    )]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(default, rename = "contributionCount")]
    pub contribution_count: u64,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgContribution {
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub org_avatar: Option<String>,
    #[serde(default)]
    pub org_url: Option<String>,
    #[serde(default)]
    pub org_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prs: Vec<MergedPullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedPullRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "mergedAt")]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub repo_name: Option<String>,
    #[serde(default)]
    pub repo_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    #[serde(default)]
    pub percentage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "profile": {
            "login": "octocat",
            "name": "",
            "bio": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "location": "San Francisco",
            "email": null,
            "blog": "https://github.blog",
            "public_repos": 8,
            "public_gists": 8,
            "followers": 9000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:00:00Z"
        },
        "repositories": [{
            "name": "hello-world",
            "description": null,
            "html_url": "https://github.com/octocat/hello-world",
            "stargazers_count": 3,
            "forks_count": 1,
            "languages": {"Ruby": 10, "C": 500},
            "topics": null,
            "language": "C"
        }],
        "languages": [{"name": "C", "percentage": 98}],
        "stats": {"total_repos": 8, "total_stars": 42, "total_forks": 7, "languages_used": 2},
        "contributions": {
            "totalContributions": 12,
            "weeks": [{"contributionDays": [
                {"date": "2024-01-01", "contributionCount": 2, "color": "#c6e48b"}
            ]}]
        },
        "org_contributions": [{
            "org_name": "rust-lang",
            "org_url": "https://github.com/rust-lang",
            "prs": [{
                "title": "Fix typo",
                "url": "https://github.com/rust-lang/rust/pull/1",
                "mergedAt": "2024-02-03T04:05:06Z",
                "repo": "rust-lang/rust"
            }]
        }]
    }"##;

    #[test]
    fn decodes_full_backend_payload() {
        let payload: ResumePayload = serde_json::from_str(SAMPLE).expect("payload");
        assert_eq!(payload.profile.display_name(), "octocat");
        assert_eq!(payload.repositories[0].language_names(), vec!["C", "Ruby"]);
        assert!(payload.repositories[0].topics.is_empty());
        assert_eq!(payload.contributions.total_contributions, 12);
        assert_eq!(payload.contributions.days().count(), 1);
        assert_eq!(
            payload
                .contributions
                .days()
                .next()
                .and_then(|day| day.color.as_deref()),
            Some("#c6e48b")
        );
        assert_eq!(payload.org_contributions[0].prs.len(), 1);
    }

    #[test]
    fn tolerates_error_shaped_contributions() {
        let payload: ResumePayload = serde_json::from_str(
            r#"{"profile": {"login": "ghost"}, "contributions": {"error": "User not found"}}"#,
        )
        .expect("payload");
        assert_eq!(payload.contributions, ContributionCalendar::default());
        assert!(payload.repositories.is_empty());
    }

    #[test]
    fn non_empty_ignores_blank_strings() {
        assert_eq!(non_empty(&Some("  ".to_string())), None);
        assert_eq!(non_empty(&Some(" x ".to_string())), Some("x"));
        assert_eq!(non_empty(&None), None);
    }
}
