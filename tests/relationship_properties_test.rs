use chrono::NaiveDate;
use content_relations::{
    get_all_series, get_related_posts, get_series_navigation, get_series_posts, Post, SeriesInfo,
};
use std::collections::HashSet;

fn post(slug: &str, day: u32, tags: &[&str]) -> Post {
    Post {
        slug: slug.to_string(),
        title: slug.to_uppercase(),
        pub_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        excerpt: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        series: None,
        draft: false,
        body: None,
    }
}

fn in_series(mut post: Post, name: &str, part: u32) -> Post {
    post.series = Some(SeriesInfo {
        name: name.to_string(),
        part,
    });
    post
}

fn slugs(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|p| p.slug.clone()).collect()
}

fn blog() -> Vec<Post> {
    vec![
        post("target", 20, &["Rust", "CLI", "parsing"]),
        post("a", 1, &["rust"]),
        post("b", 2, &["rust", "cli"]),
        post("c", 3, &["PARSING", "rust", "cli"]),
        post("d", 4, &["go"]),
        post("e", 5, &[]),
        post("f", 6, &["rust", "cli", "parsing", "serde", "nom", "clap"]),
        post("g", 7, &["cli", "rust"]),
    ]
}

#[test]
fn related_posts_are_bounded_and_exclude_target() {
    let posts = blog();
    let target = &posts[0];

    for n in 1..=10 {
        let related = get_related_posts(target, &posts, n);
        assert!(related.len() <= n);
        assert_eq!(related.len(), n.min(posts.len() - 1));
        assert!(related.iter().all(|p| p.slug != target.slug));
    }
}

#[test]
fn related_posts_sorted_by_score_then_date() {
    let posts = blog();

    let related = get_related_posts(&posts[0], &posts, 4);

    // c: 3/3, g: 2/3 (newer), b: 2/3, f: 3/6
    assert_eq!(slugs(&related), vec!["c", "g", "b", "f"]);
}

#[test]
fn related_posts_backfill_has_no_duplicates() {
    let posts = blog();

    let related = get_related_posts(&posts[0], &posts, 7);

    let unique: HashSet<&str> = related.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(unique.len(), related.len());
    // 五篇有分數，剩下兩篇依日期新到舊補位
    assert_eq!(slugs(&related[5..]), vec!["e", "d"]);
}

#[test]
fn untagged_target_gets_most_recent_posts() {
    let mut posts = blog();
    posts[0].tags.clear();

    let related = get_related_posts(&posts[0], &posts, 3);

    assert_eq!(slugs(&related), vec!["g", "f", "e"]);
}

#[test]
fn series_posts_ordered_by_part() {
    let posts = vec![
        in_series(post("one", 1, &[]), "X", 1),
        in_series(post("three", 3, &[]), "X", 3),
        in_series(post("two", 2, &[]), "X", 2),
        in_series(post("other", 4, &[]), "Y", 1),
    ];

    let series = get_series_posts(&posts[2], &posts);

    assert_eq!(slugs(&series), vec!["one", "two", "three"]);
}

#[test]
fn series_navigation_boundaries() {
    let posts = vec![
        in_series(post("one", 1, &[]), "X", 1),
        in_series(post("three", 3, &[]), "X", 3),
        in_series(post("two", 2, &[]), "X", 2),
    ];
    let series = get_series_posts(&posts[0], &posts);

    let middle = get_series_navigation(series[1], &series).unwrap();
    assert!(middle.previous_post.is_some());
    assert!(middle.next_post.is_some());

    let first = get_series_navigation(series[0], &series).unwrap();
    assert!(first.previous_post.is_none());

    let last = get_series_navigation(series[2], &series).unwrap();
    assert!(last.next_post.is_none());
}

#[test]
fn all_series_groups_with_part_counts() {
    let posts = vec![
        in_series(post("a1", 1, &[]), "A", 1),
        in_series(post("a2", 2, &[]), "A", 2),
        in_series(post("b1", 3, &[]), "B", 1),
    ];

    let groups = get_all_series(&posts);

    assert_eq!(groups.len(), 2);
    let a = groups.iter().find(|g| g.name == "A").unwrap();
    assert_eq!(a.total_parts, 2);
    assert_eq!(slugs(&a.posts), vec!["a1", "a2"]);
    let b = groups.iter().find(|g| g.name == "B").unwrap();
    assert_eq!(b.total_parts, 1);
}

#[test]
fn operations_are_idempotent_and_leave_input_untouched() {
    let mut posts = blog();
    posts.push(in_series(post("s2", 9, &["rust"]), "S", 2));
    posts.push(in_series(post("s1", 8, &["rust"]), "S", 1));
    let snapshot = posts.clone();

    let related_first = get_related_posts(&posts[0], &posts, 3);
    let related_second = get_related_posts(&posts[0], &posts, 3);
    assert_eq!(related_first, related_second);

    let series_first = get_series_posts(&posts[8], &posts);
    let series_second = get_series_posts(&posts[8], &posts);
    assert_eq!(series_first, series_second);

    assert_eq!(
        get_series_navigation(&posts[8], &series_first),
        get_series_navigation(&posts[8], &series_second)
    );
    assert_eq!(get_all_series(&posts), get_all_series(&posts));

    assert_eq!(posts, snapshot);
}
