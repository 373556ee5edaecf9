use crate::domain::model::Post;
use std::cmp::Ordering;

/// 新文章在前
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.pub_date.cmp(&a.pub_date)
}

/// 系列內以 part 遞增；沒有系列的文章排在最後
pub fn by_series_part(a: &Post, b: &Post) -> Ordering {
    let part = |p: &Post| p.series.as_ref().map(|s| s.part).unwrap_or(u32::MAX);
    part(a).cmp(&part(b))
}

/// 回傳依日期新到舊排序的新 Vec，不動到呼叫端的資料
pub fn sorted_newest_first<'a, I>(posts: I) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut sorted: Vec<&Post> = posts.into_iter().collect();
    sorted.sort_by(|a, b| newest_first(a, b));
    sorted
}

pub fn sorted_by_part<'a, I>(posts: I) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut sorted: Vec<&Post> = posts.into_iter().collect();
    sorted.sort_by(|a, b| by_series_part(a, b));
    sorted
}
