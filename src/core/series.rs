use crate::core::ordering::sorted_by_part;
use crate::domain::model::{Post, SeriesGroup, SeriesNavigation};
use std::collections::HashMap;

/// 取得與 `current` 同系列的所有文章（包含自己），依 part 遞增排序。
/// 不屬於任何系列時回傳空 Vec。
pub fn get_series_posts<'a>(current: &Post, all_posts: &'a [Post]) -> Vec<&'a Post> {
    let Some(series) = current.series.as_ref() else {
        return Vec::new();
    };

    sorted_by_part(all_posts.iter().filter(|post| {
        post.series
            .as_ref()
            .is_some_and(|s| s.name == series.name)
    }))
}

/// 計算 `current` 在已排序的 `series_posts` 中的上一篇與下一篇。
///
/// `current` 沒有系列或 `series_posts` 為空時回傳 `None`。
/// 若 `series_posts` 中找不到 `current` 的 slug，仍回傳導覽資訊，
/// 但上一篇與下一篇皆為 `None`，`current_part` 取自文章本身。
pub fn get_series_navigation<'a>(
    current: &'a Post,
    series_posts: &[&'a Post],
) -> Option<SeriesNavigation<'a>> {
    let series = current.series.as_ref()?;
    if series_posts.is_empty() {
        return None;
    }

    let current_index = series_posts
        .iter()
        .position(|post| post.slug == current.slug);

    let (previous_post, next_post) = match current_index {
        Some(index) => (
            index.checked_sub(1).map(|i| series_posts[i]),
            series_posts.get(index + 1).copied(),
        ),
        None => (None, None),
    };

    Some(SeriesNavigation {
        series_name: &series.name,
        current_part: series.part,
        total_parts: series_posts.len(),
        previous_post,
        next_post,
        all_posts: series_posts.to_vec(),
    })
}

/// 依系列名稱分組。分組順序為各系列第一次出現的順序，
/// 組內文章依 part 遞增排序。
pub fn get_all_series(all_posts: &[Post]) -> Vec<SeriesGroup<'_>> {
    let mut order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<&Post>> = HashMap::new();

    for post in all_posts {
        if let Some(series) = post.series.as_ref() {
            let name = series.name.as_str();
            members
                .entry(name)
                .or_insert_with(|| {
                    order.push(name);
                    Vec::new()
                })
                .push(post);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let posts = sorted_by_part(members.remove(name).unwrap_or_default());
            SeriesGroup {
                name,
                total_parts: posts.len(),
                posts,
            }
        })
        .collect()
}
