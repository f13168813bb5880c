//! Posts as the board sees them.

pub use postboard_api_types::{Post, PostDraft, PostId};

/// Number of posts shown per page of the board.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` posts. An empty collection has zero pages.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The posts visible on the 1-based `page`.
///
/// Pages past the end yield an empty slice rather than panicking.
pub fn page_slice(posts: &[Post], page: usize) -> &[Post] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(posts.len());
    let end = page.saturating_mul(PAGE_SIZE).min(posts.len());
    &posts[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Post> {
        (1..=n)
            .map(|i| Post {
                id: i as PostId,
                title: format!("Post {i}"),
                body: String::new(),
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(100), 10);
    }

    #[test]
    fn slice_covers_window() {
        let posts = numbered(15);
        let first: Vec<_> = page_slice(&posts, 1).iter().map(|p| p.id).collect();
        assert_eq!(first, (1..=10).collect::<Vec<_>>());
        let second: Vec<_> = page_slice(&posts, 2).iter().map(|p| p.id).collect();
        assert_eq!(second, (11..=15).collect::<Vec<_>>());
    }

    #[test]
    fn slice_past_end_is_empty() {
        let posts = numbered(3);
        assert!(page_slice(&posts, 2).is_empty());
        assert!(page_slice(&[], 1).is_empty());
    }
}
