use crate::core::ordering::{newest_first, sorted_newest_first};
use crate::domain::model::Post;
use std::collections::HashSet;

pub const DEFAULT_MAX_RELATED: usize = 3;

fn normalized_tags(post: &Post) -> HashSet<String> {
    post.tags.iter().map(|tag| tag.to_lowercase()).collect()
}

/// 標籤重疊係數：共同標籤數 / 兩邊標籤數較大者，範圍 [0, 1]
pub fn tag_overlap_score(target: &HashSet<String>, candidate: &HashSet<String>) -> f64 {
    if target.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let shared = target.intersection(candidate).count();
    shared as f64 / target.len().max(candidate.len()) as f64
}

/// 找出與 `current` 主題最接近的文章，最多 `max_results` 篇。
///
/// 沒有標籤的文章直接回傳最新的文章；有標籤時依重疊分數排序，
/// 同分以新文章優先，不足的名額用最新文章補滿。
pub fn get_related_posts<'a>(current: &Post, all_posts: &'a [Post], max_results: usize) -> Vec<&'a Post> {
    if max_results == 0 {
        return Vec::new();
    }

    let candidates: Vec<&'a Post> = all_posts
        .iter()
        .filter(|post| post.slug != current.slug)
        .collect();

    if !current.has_tags() {
        return sorted_newest_first(candidates)
            .into_iter()
            .take(max_results)
            .collect();
    }

    let current_tags = normalized_tags(current);

    let mut scored: Vec<(&'a Post, f64)> = candidates
        .iter()
        .filter_map(|&post| {
            let score = tag_overlap_score(&current_tags, &normalized_tags(post));
            (score > 0.0).then_some((post, score))
        })
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b.total_cmp(score_a).then_with(|| newest_first(a, b))
    });

    let mut related: Vec<&'a Post> = scored
        .into_iter()
        .take(max_results)
        .map(|(post, _)| post)
        .collect();

    // 補位：用尚未選到的最新文章補滿
    if related.len() < max_results {
        let selected: HashSet<&'a str> = related.iter().map(|&post| post.slug.as_str()).collect();
        let backfill = sorted_newest_first(
            candidates
                .into_iter()
                .filter(|post| !selected.contains(post.slug.as_str())),
        );
        let remaining = max_results - related.len();
        related.extend(backfill.into_iter().take(remaining));
    }

    related
}
