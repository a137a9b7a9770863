//! Category + text selection and the featured-first ordering.
//!
//! Both operations are pure: they borrow the collection and return the
//! matching items in source order.

/// Label of the category control that selects everything.
pub const ALL: &str = "Todos";

/// An item that can be matched by category and free text.
pub trait Searchable {
    fn category(&self) -> &str;
    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// An item that can be flagged to sort ahead of the rest.
pub trait Featured {
    fn featured(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL,
            Category::Named(name) => name,
        }
    }

    /// Exact, case-sensitive.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub category: Category,
    term: String,
}

impl Query {
    pub fn new(category: Category, term: &str) -> Self {
        let mut query = Query {
            category,
            term: String::new(),
        };
        query.set_term(term);
        query
    }

    /// The term is kept lower-cased.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_lowercase();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.category.matches(item.category()) && self.matches_text(item)
    }

    fn matches_text<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.term.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.term))
    }
}

/// Items matching both the category and the term, in collection order.
pub fn select<'a, T: Searchable>(items: &'a [T], query: &Query) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

/// Stable partition: featured items first, each group in collection order.
pub fn featured_first<T: Featured>(items: &[T]) -> Vec<&T> {
    let (mut featured, rest): (Vec<&T>, Vec<&T>) = items.iter().partition(|item| item.featured());
    featured.extend(rest);
    featured
}
