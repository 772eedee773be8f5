use super::*;
use crate::api::{MemoryLibraryApi, RecordedRequest};
use crate::catalog::Catalog;
use crate::notify::Level;
use crate::types::{NewBook, NewUser};
use std::sync::Arc;

struct Fixture {
    api: Arc<MemoryLibraryApi>,
    console: Console<Arc<MemoryLibraryApi>>,
    ana: UserId,
    luis: UserId,
    ficciones: BookId,
    rayuela: BookId,
}

fn new_book(title: &str, author: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        publication_year: 1960,
        isbn: format!("isbn-{title}"),
    }
}

/// Two users and two available books, mounted, with an empty request log
async fn fixture() -> Fixture {
    let mut catalog = Catalog::new();
    let ficciones = catalog.add_book(new_book("Ficciones", "Borges")).unwrap().id;
    let rayuela = catalog.add_book(new_book("Rayuela", "Cortázar")).unwrap().id;
    let ana = catalog
        .add_user(NewUser {
            name: "Ana".to_string(),
        })
        .unwrap()
        .id;
    let luis = catalog
        .add_user(NewUser {
            name: "Luis".to_string(),
        })
        .unwrap()
        .id;

    let api = Arc::new(MemoryLibraryApi::with_catalog(catalog));
    let mut console = Console::new(api.clone());
    assert!(console.mount().await);
    api.clear_requests().await;

    Fixture {
        api,
        console,
        ana,
        luis,
        ficciones,
        rayuela,
    }
}

fn fill_book_form<A: LibraryApi>(console: &mut Console<A>) {
    console.set_field(Field::Title, "Pedro Páramo");
    console.set_field(Field::Author, "Juan Rulfo");
    console.set_field(Field::PublicationYear, "1955");
    console.set_field(Field::Isbn, "978-0-8021-3390-3");
}

fn available_ids<A: LibraryApi>(console: &Console<A>) -> Vec<BookId> {
    console
        .available_books()
        .into_iter()
        .map(|b| b.id.clone())
        .collect()
}

// =============================================================
// Initial state and mounting
// =============================================================

#[tokio::test]
async fn test_initial_state() {
    let console = Console::new(MemoryLibraryApi::new());
    assert_eq!(console.tab(), Tab::Books);
    assert_eq!(console.availability_filter(), AvailabilityFilter::All);
    assert_eq!(console.loan_filter(), LoanFilter::All);
    assert!(!console.is_modal_open());
    assert!(console.book_form().is_blank());
    assert!(console.notifications().is_empty());
}

#[tokio::test]
async fn test_mount_fetches_books_then_users() {
    let api = Arc::new(MemoryLibraryApi::new());
    let mut console = Console::new(api.clone());
    assert!(console.mount().await);
    assert_eq!(
        api.requests().await,
        vec![RecordedRequest::ListBooks, RecordedRequest::ListUsers]
    );
}

#[tokio::test]
async fn test_mount_failure_notifies_for_each_collection() {
    let api = Arc::new(MemoryLibraryApi::new());
    api.set_failing(true).await;
    let mut console = Console::new(api.clone());

    assert!(!console.mount().await);
    let messages: Vec<_> = console
        .take_notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(
        messages,
        vec!["Error al obtener libros", "Error al obtener usuarios"]
    );
}

#[tokio::test]
async fn test_failed_refresh_keeps_fetched_collections() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fx.console.set_field(Field::Title, "Pedro Páramo");
    fx.api.set_failing(true).await;

    assert!(!fx.console.refresh_books().await);
    assert_eq!(fx.console.books().len(), 2);
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al obtener libros"
    );

    fx.console.take_notifications();
    assert!(!fx.console.refresh_users().await);
    assert_eq!(fx.console.users().len(), 2);
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al obtener usuarios"
    );

    assert!(fx.console.is_modal_open());
    assert_eq!(fx.console.book_form().title, "Pedro Páramo");
}

// =============================================================
// Notifications
// =============================================================

#[tokio::test]
async fn test_take_notifications_drops_expired() {
    let mut console = Console::with_notifications(
        MemoryLibraryApi::new(),
        Notifications::with_ttl(std::time::Duration::ZERO),
    );

    assert!(!console.borrow(&UserId::new("u1")).await);
    assert_eq!(console.notifications().len(), 1);
    assert!(console.take_notifications().is_empty());
    assert!(console.notifications().is_empty());
}

#[tokio::test]
async fn test_take_notifications_within_ttl() {
    let mut console = Console::new(MemoryLibraryApi::new());

    assert!(!console.borrow(&UserId::new("u1")).await);
    let taken = console.take_notifications();
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0].message, "Selecciona un libro para prestar");
}

// =============================================================
// Filters
// =============================================================

#[tokio::test]
async fn test_catalog_filter_tri_state() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    assert!(fx.console.borrow(&fx.ana).await);

    fx.console.set_availability_filter(Some(true));
    let visible: Vec<_> = fx.console.visible_books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(visible, vec![fx.rayuela.clone()]);

    fx.console.set_availability_filter(Some(false));
    let visible: Vec<_> = fx.console.visible_books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(visible, vec![fx.ficciones.clone()]);

    fx.console.set_availability_filter(None);
    assert_eq!(fx.console.visible_books().len(), 2);
}

#[tokio::test]
async fn test_user_filter_with_loans() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.luis.clone(), fx.rayuela.clone());
    assert!(fx.console.borrow(&fx.luis).await);

    fx.console.set_loan_filter(LoanFilter::WithLoans);
    let names: Vec<_> = fx.console.visible_users().iter().map(|u| u.name.clone()).collect();
    assert_eq!(names, vec!["Luis"]);

    fx.console.set_loan_filter(false);
    assert_eq!(fx.console.visible_users().len(), 2);
}

#[tokio::test]
async fn test_filters_do_not_touch_the_network() {
    let mut fx = fixture().await;
    fx.console.set_tab(Tab::Users);
    fx.console.set_availability_filter(AvailabilityFilter::Unavailable);
    fx.console.set_loan_filter(LoanFilter::WithLoans);
    let _ = fx.console.book_rows();
    let _ = fx.console.user_rows();
    assert!(fx.api.requests().await.is_empty());
}

// =============================================================
// Registration forms
// =============================================================

#[tokio::test]
async fn test_submit_book_issues_one_create_then_one_refresh() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fill_book_form(&mut fx.console);

    assert!(fx.console.submit_book().await);

    assert_eq!(
        fx.api.requests().await,
        vec![
            RecordedRequest::CreateBook(NewBook {
                title: "Pedro Páramo".to_string(),
                author: "Juan Rulfo".to_string(),
                publication_year: 1955,
                isbn: "978-0-8021-3390-3".to_string(),
            }),
            RecordedRequest::ListBooks,
        ]
    );
    assert_eq!(fx.console.books().len(), 3);
    assert!(fx.console.book_form().is_blank());
    assert!(!fx.console.is_modal_open());
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Libro registrado exitosamente"
    );
}

#[tokio::test]
async fn test_incomplete_book_form_sends_nothing() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fill_book_form(&mut fx.console);
    fx.console.set_field(Field::Isbn, "");

    assert!(!fx.console.submit_book().await);

    assert!(fx.api.requests().await.is_empty());
    assert!(fx.console.is_modal_open());
    assert_eq!(fx.console.book_form().title, "Pedro Páramo");
    let last = fx.console.notifications().last().unwrap();
    assert_eq!(last.level, Level::Error);
    assert_eq!(last.message, "El campo ISBN es obligatorio");
}

#[tokio::test]
async fn test_failed_book_registration_keeps_form_and_modal() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fill_book_form(&mut fx.console);
    fx.api.set_failing(true).await;

    assert!(!fx.console.submit_book().await);

    assert_eq!(fx.api.requests().await.len(), 1);
    assert!(fx.console.is_modal_open());
    assert!(!fx.console.book_form().is_blank());
    assert_eq!(fx.console.books().len(), 2);
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al registrar libro"
    );
}

#[tokio::test]
async fn test_submit_user_refreshes_users_and_closes_modal() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fx.console.set_field(Field::Name, "Marta");

    assert!(fx.console.submit_user().await);

    assert_eq!(
        fx.api.requests().await,
        vec![
            RecordedRequest::CreateUser(NewUser {
                name: "Marta".to_string()
            }),
            RecordedRequest::ListUsers,
        ]
    );
    assert_eq!(fx.console.users().len(), 3);
    assert!(fx.console.user_form().name.is_empty());
    assert!(!fx.console.is_modal_open());
}

#[tokio::test]
async fn test_failed_user_registration() {
    let mut fx = fixture().await;
    fx.console.open_modal();
    fx.console.set_field(Field::Name, "Marta");
    fx.api.set_failing(true).await;

    assert!(!fx.console.submit_user().await);
    assert_eq!(fx.api.requests().await.len(), 1);
    assert_eq!(fx.console.user_form().name, "Marta");
    assert!(fx.console.is_modal_open());
    assert_eq!(fx.console.users().len(), 2);
    assert_eq!(fx.console.books().len(), 2);
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al registrar usuario"
    );
}

// =============================================================
// Borrow / return
// =============================================================

#[tokio::test]
async fn test_borrow_without_selection_sends_nothing() {
    let mut fx = fixture().await;

    assert!(!fx.console.borrow(&fx.ana).await);

    assert!(fx.api.requests().await.is_empty());
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Selecciona un libro para prestar"
    );
}

#[tokio::test]
async fn test_selection_is_per_user() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());

    assert!(!fx.console.borrow(&fx.luis).await);
    assert!(fx.api.requests().await.is_empty());
    assert_eq!(fx.console.selected_book(&fx.ana), Some(&fx.ficciones));

    fx.console.select_book(fx.ana.clone(), BookId::new(""));
    assert_eq!(fx.console.selected_book(&fx.ana), None);
}

#[tokio::test]
async fn test_borrow_refetches_and_removes_book_from_selector() {
    let mut fx = fixture().await;
    assert!(available_ids(&fx.console).contains(&fx.ficciones));

    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    assert!(fx.console.borrow(&fx.ana).await);

    assert_eq!(
        fx.api.requests().await,
        vec![
            RecordedRequest::Borrow(LoanRequest::new(fx.ana.clone(), fx.ficciones.clone())),
            RecordedRequest::ListBooks,
            RecordedRequest::ListUsers,
        ]
    );
    assert_eq!(available_ids(&fx.console), vec![fx.rayuela.clone()]);
    assert!(fx.console.user(&fx.ana).unwrap().holds(&fx.ficciones));
    assert_eq!(fx.console.selected_book(&fx.ana), None);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Libro prestado exitosamente"
    );
}

#[tokio::test]
async fn test_failed_borrow_changes_nothing() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    fx.api.set_failing(true).await;

    assert!(!fx.console.borrow(&fx.ana).await);

    assert_eq!(fx.api.requests().await.len(), 1);
    assert_eq!(available_ids(&fx.console).len(), 2);
    assert!(!fx.console.user(&fx.ana).unwrap().has_loans());
    assert_eq!(fx.console.selected_book(&fx.ana), Some(&fx.ficciones));
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al prestar libro"
    );
}

#[tokio::test]
async fn test_borrow_rejected_by_collaborator() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    assert!(fx.console.borrow(&fx.ana).await);

    // Luis picks the same, now lent, book from a stale selector
    fx.console.select_book(fx.luis.clone(), fx.ficciones.clone());
    assert!(!fx.console.borrow(&fx.luis).await);
    assert!(!fx.console.user(&fx.luis).unwrap().has_loans());
}

#[tokio::test]
async fn test_return_puts_book_back_in_selector() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    assert!(fx.console.borrow(&fx.ana).await);
    fx.api.clear_requests().await;

    assert!(fx.console.return_book(&fx.ana, &fx.ficciones).await);

    assert_eq!(
        fx.api.requests().await,
        vec![
            RecordedRequest::Return(LoanRequest::new(fx.ana.clone(), fx.ficciones.clone())),
            RecordedRequest::ListBooks,
            RecordedRequest::ListUsers,
        ]
    );
    assert!(available_ids(&fx.console).contains(&fx.ficciones));
    assert!(!fx.console.user(&fx.ana).unwrap().holds(&fx.ficciones));
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Libro devuelto exitosamente"
    );
}

#[tokio::test]
async fn test_failed_return_keeps_loan() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.ficciones.clone());
    assert!(fx.console.borrow(&fx.ana).await);
    fx.console.take_notifications();
    fx.api.set_failing(true).await;

    assert!(!fx.console.return_book(&fx.ana, &fx.ficciones).await);

    assert_eq!(
        fx.api.requests().await.last(),
        Some(&RecordedRequest::Return(LoanRequest::new(
            fx.ana.clone(),
            fx.ficciones.clone()
        )))
    );
    assert!(fx.console.user(&fx.ana).unwrap().holds(&fx.ficciones));
    assert_eq!(available_ids(&fx.console), vec![fx.rayuela.clone()]);
    assert_eq!(fx.console.notifications().len(), 1);
    assert_eq!(
        fx.console.notifications().last().unwrap().message,
        "Error al devolver libro"
    );
}

// =============================================================
// Rows
// =============================================================

#[tokio::test]
async fn test_rows_follow_filters() {
    let mut fx = fixture().await;
    fx.console.select_book(fx.ana.clone(), fx.rayuela.clone());
    assert!(fx.console.borrow(&fx.ana).await);

    fx.console.set_availability_filter(AvailabilityFilter::Unavailable);
    let rows = fx.console.book_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "Prestado");

    fx.console.set_loan_filter(LoanFilter::WithLoans);
    let rows = fx.console.user_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].borrowed, 1);
    assert_eq!(rows[0].loans[0].title, "Rayuela");
}
