//! Pure queries over the fixed content arrays. Results always keep the
//! order of the input slice.

/// The active tag selection of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter<T> {
    All,
    Only(T),
}

impl<T> Default for TagFilter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> TagFilter<T> {
    pub fn admits(&self, tags: &[T]) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => tags.contains(tag),
        }
    }

    pub fn is_selected(&self, tag: &T) -> bool {
        matches!(self, Self::Only(t) if t == tag)
    }
}

pub trait Tagged {
    type Tag: PartialEq;

    fn tags(&self) -> &[Self::Tag];
}

pub fn by_tag<'a, I: Tagged>(items: &'a [I], filter: &TagFilter<I::Tag>) -> Vec<&'a I> {
    items.iter().filter(|i| filter.admits(i.tags())).collect()
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        tags: Vec<&'static str>,
    }

    impl Tagged for Item {
        type Tag = &'static str;

        fn tags(&self) -> &[Self::Tag] {
            &self.tags
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "first",
                tags: vec!["rust", "web"],
            },
            Item {
                name: "second",
                tags: vec!["go"],
            },
            Item {
                name: "third",
                tags: vec!["web"],
            },
        ]
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let items = items();
        let names = by_tag(&items, &TagFilter::All)
            .iter()
            .map(|i| i.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tag_subset_preserves_order() {
        let items = items();
        let names = by_tag(&items, &TagFilter::Only("web"))
            .iter()
            .map(|i| i.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let items = items();
        assert!(by_tag(&items, &TagFilter::Only("cobol")).is_empty());
    }

    #[test]
    fn test_is_selected() {
        let filter = TagFilter::Only("web");
        assert!(filter.is_selected(&"web"));
        assert!(!filter.is_selected(&"go"));
        assert!(!TagFilter::<&str>::All.is_selected(&"web"));
        assert_eq!(TagFilter::<&str>::default(), TagFilter::All);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Entity Framework Core", "framework"));
        assert!(contains_ignore_case("Оптимизация ASP.NET", "оптимизация"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Azure", "aws"));
    }
}
