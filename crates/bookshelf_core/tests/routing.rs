use bookshelf_core::{DetailTarget, Navigator, Route};

#[test]
fn static_paths_resolve() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/add-book"), Route::AddBook);
    assert_eq!(Route::parse("/add-book/"), Route::AddBook);
    assert_eq!(Route::parse("/Add-Book"), Route::AddBook);
}

#[test]
fn browse_path_extracts_category_verbatim() {
    assert_eq!(Route::parse("/books/Sci-Fi"), Route::browse("Sci-Fi"));
    assert_eq!(Route::parse("/books/fiction/"), Route::browse("fiction"));
    assert_eq!(Route::parse("/BOOKS/Biography"), Route::browse("Biography"));
    assert_eq!(
        Route::parse("/books/Non-Fiction?page=2"),
        Route::browse("Non-Fiction")
    );
}

#[test]
fn detail_path_parses_integer_id() {
    assert_eq!(Route::parse("/book/1"), Route::detail(1));
    assert_eq!(
        Route::parse("/book/1700000000000"),
        Route::Detail(DetailTarget::Id(1_700_000_000_000))
    );
}

#[test]
fn malformed_detail_id_is_typed_invalid() {
    assert_eq!(
        Route::parse("/book/dune"),
        Route::Detail(DetailTarget::Invalid("dune".to_string()))
    );
    assert_eq!(
        Route::parse("/book/1.5"),
        Route::Detail(DetailTarget::Invalid("1.5".to_string()))
    );
}

#[test]
fn unmatched_paths_fall_back_to_not_found() {
    for path in ["/books", "/books/", "/book", "/books/a/b", "/library", "/add-book/x"] {
        assert!(
            matches!(Route::parse(path), Route::NotFound { .. }),
            "path {path} should not match"
        );
    }
    assert_eq!(
        Route::parse("nowhere"),
        Route::NotFound {
            path: "/nowhere".to_string()
        }
    );
}

#[test]
fn route_paths_round_trip_through_parse() {
    let routes = [
        Route::Home,
        Route::browse("Sci-Fi"),
        Route::detail(42),
        Route::AddBook,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn navigator_back_returns_to_previous_route() {
    let mut nav = Navigator::default();
    nav.navigate("/books/Sci-Fi");
    nav.navigate("/book/1");
    assert_eq!(nav.depth(), 3);

    assert!(nav.back());
    assert_eq!(nav.current(), &Route::browse("Sci-Fi"));
    assert!(nav.back());
    assert_eq!(nav.current(), &Route::Home);
    assert!(!nav.back());
    assert_eq!(nav.current(), &Route::Home);
}

#[test]
fn navigator_records_repeated_visits() {
    let mut nav = Navigator::new(Route::AddBook);
    nav.push(Route::Home);
    nav.push(Route::Home);
    assert_eq!(nav.depth(), 3);
    assert!(nav.back());
    assert_eq!(nav.current(), &Route::Home);
    assert!(nav.back());
    assert_eq!(nav.current(), &Route::AddBook);
}

#[test]
fn path_parameters_are_percent_decoded() {
    assert_eq!(
        Route::parse("/books/Science%20Fiction"),
        Route::browse("Science Fiction")
    );
    assert_eq!(Route::parse("/books/Sci%2FFi"), Route::browse("Sci/Fi"));
    assert_eq!(Route::parse("/book/%34%32"), Route::detail(42));
}

#[test]
fn categories_with_reserved_characters_round_trip() {
    for category in ["Science Fiction", "Sci/Fi", "What?", "C#", "100%"] {
        let route = Route::browse(category);
        let path = route.path();
        assert!(path.starts_with("/books/"));
        assert!(!path["/books/".len()..].contains('/'), "path {path}");
        assert_eq!(Route::parse(&path), route, "category {category}");
    }
}
