use crate::core::ordering::sorted_newest_first;
use crate::domain::model::{FeedItem, Post};

pub fn post_link(slug: &str) -> String {
    format!("/blog/{}/", slug)
}

/// 產生 RSS 項目：排除草稿，新文章在前。
/// 有設定站台網址時連結轉為絕對網址。
pub fn build_feed_items(posts: &[Post], site_url: Option<&str>) -> Vec<FeedItem> {
    let base = site_url.map(|url| url.trim_end_matches('/'));

    sorted_newest_first(posts.iter().filter(|post| !post.draft))
        .into_iter()
        .map(|post| {
            let link = post_link(&post.slug);
            FeedItem {
                title: post.title.clone(),
                pub_date: post.pub_date,
                description: post.excerpt.clone(),
                link: match base {
                    Some(base) => format!("{}{}", base, link),
                    None => link,
                },
                categories: post.tags.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ordering::fixtures::post;

    #[test]
    fn test_feed_skips_drafts_and_sorts_newest_first() {
        let mut draft = post("draft", "2024-06-01", &[]);
        draft.draft = true;
        let posts = vec![
            post("old", "2023-01-01", &["rust"]),
            draft,
            post("new", "2024-05-01", &["go", "cli"]),
        ];

        let items = build_feed_items(&posts, None);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].link, "/blog/new/");
        assert_eq!(items[0].categories, vec!["go", "cli"]);
        assert_eq!(items[0].description, "Excerpt for new");
        assert_eq!(items[1].link, "/blog/old/");
    }

    #[test]
    fn test_feed_links_are_absolute_with_site_url() {
        let posts = vec![post("hello", "2024-01-01", &[])];

        let items = build_feed_items(&posts, Some("https://stevehill.xyz/"));

        assert_eq!(items[0].link, "https://stevehill.xyz/blog/hello/");
    }
}
