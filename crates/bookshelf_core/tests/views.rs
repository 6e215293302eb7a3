use bookshelf_core::view::detail::BOOK_NOT_FOUND;
use bookshelf_core::view::{BrowseView, DetailView, HomeView, NotFoundView};
use bookshelf_core::{Book, CatalogStore, DetailTarget, InMemoryCatalog, Link, Route, Screen};

#[test]
fn home_lists_categories_and_first_three_books() {
    let mut store = InMemoryCatalog::seeded();
    store.append(Book::new(3, "1984", "Orwell", "Fiction", "dystopia", 4.7));
    store.append(Book::new(4, "Emma", "Jane Austen", "Fiction", "romance", 4.1));

    let view = HomeView::build(&store);

    let categories: Vec<_> = view.categories.iter().map(|link| link.to.path()).collect();
    assert_eq!(
        categories,
        vec![
            "/books/Fiction",
            "/books/Non-Fiction",
            "/books/Sci-Fi",
            "/books/Biography"
        ]
    );
    assert_eq!(
        view.popular,
        vec![
            Link::new("Dune", Route::detail(1)),
            Link::new("The Hobbit", Route::detail(2)),
            Link::new("1984", Route::detail(3)),
        ]
    );
}

#[test]
fn home_with_empty_store_has_no_popular_books() {
    let view = HomeView::build(&InMemoryCatalog::new());
    assert_eq!(view.categories.len(), 4);
    assert!(view.popular.is_empty());
}

#[test]
fn browse_view_links_matching_books() {
    let store = InMemoryCatalog::seeded();

    let all = BrowseView::build(&store, "Sci-Fi", "");
    assert_eq!(all.results, vec![Link::new("Dune", Route::detail(1))]);
    assert_eq!(all.home.to, Route::Home);

    let none = BrowseView::build(&store, "Sci-Fi", "hobbit");
    assert!(none.results.is_empty());

    let rendered = all.to_string();
    assert!(rendered.starts_with("Books in Sci-Fi\n"));
    assert!(rendered.contains("  - Dune </book/1>"));
    assert!(rendered.contains("Back to Home </>"));
}

#[test]
fn detail_view_shows_record_fields() {
    let store = InMemoryCatalog::seeded();
    let view = DetailView::build(&store, &DetailTarget::Id(2));

    assert_eq!(view.book(), store.find_by_id(2));
    let rendered = view.to_string();
    assert!(rendered.starts_with("The Hobbit\n"));
    assert!(rendered.contains("Author: J.R.R. Tolkien"));
    assert!(rendered.contains("Description: A fantasy novel"));
    assert!(rendered.contains("Rating: 4.9"));
    assert!(rendered.contains("[Back to Browse]"));
}

#[test]
fn detail_view_falls_back_for_missing_and_malformed_ids() {
    let store = InMemoryCatalog::seeded();

    let missing = DetailView::build(&store, &DetailTarget::Id(999));
    assert_eq!(missing, DetailView::Missing);
    assert_eq!(missing.to_string().trim_end(), BOOK_NOT_FOUND);

    let malformed = DetailView::build(&store, &DetailTarget::Invalid("abc".to_string()));
    assert_eq!(malformed, DetailView::Missing);
}

#[test]
fn screens_render_navigation_bar_first() {
    let screen = Screen::NotFound(NotFoundView::new("/nowhere"));
    let rendered = screen.to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Home </> | Add Book </add-book>"));
    assert!(rendered.contains("404 - Page Not Found. Go Home </>"));
}
