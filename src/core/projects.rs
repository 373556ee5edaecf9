use crate::domain::model::{Project, ProjectCard};
use crate::utils::github::{parse_github_url, GitHubStats};
use std::cmp::Ordering;

/// 精選專案優先，接著 priority 由小到大（未設定排最後），最後依標題
pub fn sorted_projects(projects: &[Project]) -> Vec<&Project> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| {
        b.is_featured()
            .cmp(&a.is_featured())
            .then_with(|| match (a.priority, b.priority) {
                (Some(pa), Some(pb)) => pa.cmp(&pb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.title.cmp(&b.title))
    });
    sorted
}

pub fn project_card(project: &Project) -> ProjectCard {
    let github = project
        .github
        .as_deref()
        .or(project.repository.as_deref())
        .and_then(|url| match parse_github_url(url) {
            Ok(repo) => Some(repo),
            Err(e) => {
                tracing::warn!("⚠️ Project '{}': {}", project.title, e);
                None
            }
        });
    let stats_endpoint = github.as_ref().and_then(|repo| repo.api_url());
    let stats = project.github_stats.clone().map(GitHubStats::from);

    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        featured: project.is_featured(),
        technologies: project.technologies.clone(),
        github,
        stats_endpoint,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: Option<bool>, priority: Option<i64>) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{} description", title),
            tags: vec![],
            github: None,
            demo: None,
            featured,
            technologies: vec!["Rust".to_string()],
            status: None,
            year: None,
            repository: None,
            homepage: None,
            priority,
            github_stats: None,
        }
    }

    #[test]
    fn test_featured_then_priority_then_title() {
        let projects = vec![
            project("zeta", None, None),
            project("beta", None, Some(2)),
            project("alpha", Some(true), Some(5)),
            project("gamma", None, Some(1)),
            project("delta", Some(true), None),
            project("epsilon", None, None),
        ];

        let titles: Vec<&str> = sorted_projects(&projects)
            .iter()
            .map(|p| p.title.as_str())
            .collect();

        assert_eq!(titles, vec!["alpha", "delta", "gamma", "beta", "epsilon", "zeta"]);
    }

    #[test]
    fn test_project_card_parses_github() {
        let mut p = project("site", Some(true), None);
        p.github = Some("https://github.com/stevehill/site".to_string());

        let card = project_card(&p);

        assert_eq!(card.github.as_ref().unwrap().owner, "stevehill");
        assert_eq!(
            card.stats_endpoint.as_deref(),
            Some("https://api.github.com/repos/stevehill/site")
        );
        assert!(card.stats.is_none());
    }

    #[test]
    fn test_project_card_maps_exported_github_stats() {
        let mut p = project("site", None, None);
        p.github = Some("https://github.com/stevehill/site".to_string());
        p.github_stats = Some(serde_json::from_value(serde_json::json!({
            "name": "site",
            "stargazers_count": 12,
            "forks_count": 3,
            "watchers_count": 12,
            "open_issues_count": 1,
            "language": "Astro",
            "description": null
        })).unwrap());

        let card = project_card(&p);

        let stats = card.stats.unwrap();
        assert_eq!(stats.stars, 12);
        assert_eq!(stats.forks, 3);
        assert_eq!(stats.issues, 1);
        assert_eq!(stats.language.as_deref(), Some("Astro"));
    }

    #[test]
    fn test_project_card_falls_back_to_repository_and_tolerates_bad_urls() {
        let mut p = project("tool", None, None);
        p.repository = Some("https://github.com/stevehill".to_string());
        let card = project_card(&p);
        assert!(card.github.is_some());
        assert!(card.stats_endpoint.is_none());

        let mut bad = project("bad", None, None);
        bad.github = Some("https://example.com/not-github".to_string());
        let card = project_card(&bad);
        assert!(card.github.is_none());
        assert!(card.stats_endpoint.is_none());
    }
}
