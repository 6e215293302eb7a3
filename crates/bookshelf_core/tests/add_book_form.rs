use bookshelf_core::{
    BookDraft, BookField, BookId, CatalogStore, FormError, IdGenerator, InMemoryCatalog,
    MISSING_FIELDS_NOTICE,
};

struct SequenceIds(BookId);

impl IdGenerator for SequenceIds {
    fn next_id(&mut self) -> BookId {
        self.0 += 1;
        self.0
    }
}

fn complete_draft() -> BookDraft {
    let mut draft = BookDraft::new();
    draft.set(BookField::Title, "1984");
    draft.set(BookField::Author, "Orwell");
    draft.set(BookField::Category, "Fiction");
    draft.set(BookField::Description, "dystopia");
    draft.set(BookField::Rating, "4.7");
    draft
}

#[test]
fn new_draft_is_empty() {
    let draft = BookDraft::new();
    assert_eq!(draft.missing_fields(), BookField::ALL.to_vec());
}

#[test]
fn submit_appends_record_retrievable_by_new_id() {
    let mut store = InMemoryCatalog::seeded();
    let mut ids = SequenceIds(100);

    let id = complete_draft().submit(&mut store, &mut ids).unwrap();

    assert_eq!(id, 101);
    assert_eq!(store.len(), 3);
    let book = store.find_by_id(id).unwrap();
    assert_eq!(book.title, "1984");
    assert_eq!(book.author, "Orwell");
    assert_eq!(book.category, "Fiction");
    assert_eq!(book.description, "dystopia");
    assert_eq!(book.rating, 4.7);
}

#[test]
fn submit_with_any_empty_field_leaves_store_unchanged() {
    for field in BookField::ALL {
        let mut store = InMemoryCatalog::seeded();
        let mut ids = SequenceIds(0);
        let mut draft = complete_draft();
        draft.set(field, "");

        let err = draft.submit(&mut store, &mut ids).unwrap_err();

        assert_eq!(err, FormError::MissingFields(vec![field]));
        assert_eq!(err.to_string(), MISSING_FIELDS_NOTICE);
        assert_eq!(store.len(), 2);
        assert_eq!(ids.0, 0, "no id is drawn for a rejected submission");
    }
}

#[test]
fn whitespace_only_fields_count_as_present() {
    let mut store = InMemoryCatalog::seeded();
    let mut draft = complete_draft();
    draft.set(BookField::Description, " ");

    assert!(draft.submit(&mut store, &mut SequenceIds(0)).is_ok());
    assert_eq!(store.len(), 3);
}

#[test]
fn unreadable_rating_is_stored_as_nan() {
    let mut store = InMemoryCatalog::new();
    let mut draft = complete_draft();
    draft.set(BookField::Rating, "excellent");

    let id = draft.submit(&mut store, &mut SequenceIds(0)).unwrap();
    assert!(store.find_by_id(id).unwrap().rating.is_nan());
}

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!("Rating".parse::<BookField>().unwrap(), BookField::Rating);
    assert_eq!(" title ".parse::<BookField>().unwrap(), BookField::Title);
    let err = "isbn".parse::<BookField>().unwrap_err();
    assert!(err.to_string().contains("unknown form field `isbn`"));
}
