//! Librarian console: the presentation state behind every front end
//!
//! A `Console` owns the last fetched books and users, the table filters,
//! the registration modal with its two forms, the per-user book selection
//! and the notification queue. Network operations follow one policy: on
//! failure raise an error notification and leave local state untouched; on
//! success refetch whatever the mutation may have changed. Nothing is
//! retried and nothing is applied optimistically.

mod view;

#[cfg(test)]
mod tests;

pub use view::{BookRow, LoanRow, Tab, UserRow};

use crate::api::LibraryApi;
use crate::filter::{AvailabilityFilter, LoanFilter};
use crate::form::{BookForm, Field, UserForm};
use crate::notify::{messages, Notification, Notifications};
use crate::types::{Book, BookId, LoanRequest, User, UserId};
use chrono::Utc;
use std::collections::HashMap;

pub struct Console<A> {
    api: A,
    books: Vec<Book>,
    users: Vec<User>,
    tab: Tab,
    availability: AvailabilityFilter,
    loans: LoanFilter,
    selection: HashMap<UserId, BookId>,
    modal_open: bool,
    book_form: BookForm,
    user_form: UserForm,
    notifications: Notifications,
}

impl<A: LibraryApi> Console<A> {
    pub fn new(api: A) -> Self {
        Self::with_notifications(api, Notifications::default())
    }

    pub fn with_notifications(api: A, notifications: Notifications) -> Self {
        Self {
            api,
            books: Vec::new(),
            users: Vec::new(),
            tab: Tab::default(),
            availability: AvailabilityFilter::default(),
            loans: LoanFilter::default(),
            selection: HashMap::new(),
            modal_open: false,
            book_form: BookForm::default(),
            user_form: UserForm::default(),
            notifications,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ---- fetched data -------------------------------------------------

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    // ---- tabs and filters ---------------------------------------------

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn availability_filter(&self) -> AvailabilityFilter {
        self.availability
    }

    pub fn set_availability_filter(&mut self, filter: impl Into<AvailabilityFilter>) {
        self.availability = filter.into();
    }

    pub fn loan_filter(&self) -> LoanFilter {
        self.loans
    }

    pub fn set_loan_filter(&mut self, filter: impl Into<LoanFilter>) {
        self.loans = filter.into();
    }

    /// Catalog rows under the current availability filter
    pub fn visible_books(&self) -> Vec<&Book> {
        self.availability.apply(&self.books).collect()
    }

    /// User rows under the current loan filter
    pub fn visible_users(&self) -> Vec<&User> {
        self.loans.apply(&self.users).collect()
    }

    /// Options of the per-user book selector
    pub fn available_books(&self) -> Vec<&Book> {
        AvailabilityFilter::Available.apply(&self.books).collect()
    }

    pub fn book_rows(&self) -> Vec<BookRow> {
        self.visible_books().into_iter().map(BookRow::from).collect()
    }

    pub fn user_rows(&self) -> Vec<UserRow> {
        self.visible_users().into_iter().map(UserRow::from).collect()
    }

    // ---- registration modal -------------------------------------------

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn book_form(&self) -> &BookForm {
        &self.book_form
    }

    pub fn user_form(&self) -> &UserForm {
        &self.user_form
    }

    /// Edit a field of whichever form owns it
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if field.is_book_field() {
            self.book_form.set(field, value);
        } else {
            self.user_form.set(field, value);
        }
    }

    // ---- borrow selection ---------------------------------------------

    /// Choose the book to lend to `user`; an empty id clears the choice
    pub fn select_book(&mut self, user: UserId, book: BookId) {
        if book.is_empty() {
            self.selection.remove(&user);
        } else {
            self.selection.insert(user, book);
        }
    }

    pub fn selected_book(&self, user: &UserId) -> Option<&BookId> {
        self.selection.get(user)
    }

    // ---- notifications ------------------------------------------------

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Take the notifications that have not yet expired
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.take_active(Utc::now())
    }

    // ---- collaborator operations --------------------------------------

    /// Initial load: books, then users
    pub async fn mount(&mut self) -> bool {
        let books = self.refresh_books().await;
        let users = self.refresh_users().await;
        books && users
    }

    pub async fn refresh_books(&mut self) -> bool {
        match self.api.list_books().await {
            Ok(books) => {
                tracing::debug!("Fetched {} books", books.len());
                self.books = books;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to fetch books: {}", e);
                self.notifications.error(messages::BOOKS_FETCH_FAILED);
                false
            }
        }
    }

    pub async fn refresh_users(&mut self) -> bool {
        match self.api.list_users().await {
            Ok(users) => {
                tracing::debug!("Fetched {} users", users.len());
                self.users = users;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to fetch users: {}", e);
                self.notifications.error(messages::USERS_FETCH_FAILED);
                false
            }
        }
    }

    /// Submit the book form; a form missing fields never reaches the collaborator
    pub async fn submit_book(&mut self) -> bool {
        let new = match self.book_form.validate() {
            Ok(new) => new,
            Err(e) => {
                self.notifications.error(e.to_string());
                return false;
            }
        };

        if let Err(e) = self.api.create_book(&new).await {
            tracing::warn!("Failed to register book '{}': {}", new.title, e);
            self.notifications.error(messages::BOOK_REGISTER_FAILED);
            return false;
        }

        tracing::info!("Registered book '{}'", new.title);
        self.notifications.success(messages::BOOK_REGISTERED);
        self.refresh_books().await;
        self.book_form.clear();
        self.modal_open = false;
        true
    }

    pub async fn submit_user(&mut self) -> bool {
        let new = match self.user_form.validate() {
            Ok(new) => new,
            Err(e) => {
                self.notifications.error(e.to_string());
                return false;
            }
        };

        if let Err(e) = self.api.create_user(&new).await {
            tracing::warn!("Failed to register user '{}': {}", new.name, e);
            self.notifications.error(messages::USER_REGISTER_FAILED);
            return false;
        }

        tracing::info!("Registered user '{}'", new.name);
        self.notifications.success(messages::USER_REGISTERED);
        self.refresh_users().await;
        self.user_form.clear();
        self.modal_open = false;
        true
    }

    /// Lend the book selected for `user`
    pub async fn borrow(&mut self, user: &UserId) -> bool {
        let Some(book) = self.selection.get(user).cloned() else {
            self.notifications.error(messages::SELECT_BOOK);
            return false;
        };

        let request = LoanRequest::new(user.clone(), book);
        if let Err(e) = self.api.borrow(&request).await {
            tracing::warn!(
                "Failed to lend {} to {}: {}",
                request.book_id,
                request.user_id,
                e
            );
            self.notifications.error(messages::BORROW_FAILED);
            return false;
        }

        tracing::info!("Lent {} to {}", request.book_id, request.user_id);
        self.notifications.success(messages::BOOK_BORROWED);
        self.selection.remove(user);
        self.refresh_books().await;
        self.refresh_users().await;
        true
    }

    pub async fn return_book(&mut self, user: &UserId, book: &BookId) -> bool {
        let request = LoanRequest::new(user.clone(), book.clone());
        if let Err(e) = self.api.return_book(&request).await {
            tracing::warn!("Failed to return {} from {}: {}", book, user, e);
            self.notifications.error(messages::RETURN_FAILED);
            return false;
        }

        tracing::info!("Returned {} from {}", book, user);
        self.notifications.success(messages::BOOK_RETURNED);
        self.refresh_books().await;
        self.refresh_users().await;
        true
    }
}
