//! Transient notifications shown after each action

use chrono::{DateTime, Duration, Utc};

/// Default time a notification stays visible
pub const DEFAULT_TTL_SECS: u64 = 5;

/// Librarian-facing messages, one pair per action
pub mod messages {
    pub const BOOKS_FETCH_FAILED: &str = "Error al obtener libros";
    pub const USERS_FETCH_FAILED: &str = "Error al obtener usuarios";
    pub const BOOK_REGISTERED: &str = "Libro registrado exitosamente";
    pub const BOOK_REGISTER_FAILED: &str = "Error al registrar libro";
    pub const USER_REGISTERED: &str = "Usuario registrado exitosamente";
    pub const USER_REGISTER_FAILED: &str = "Error al registrar usuario";
    pub const SELECT_BOOK: &str = "Selecciona un libro para prestar";
    pub const BOOK_BORROWED: &str = "Libro prestado exitosamente";
    pub const BORROW_FAILED: &str = "Error al prestar libro";
    pub const BOOK_RETURNED: &str = "Libro devuelto exitosamente";
    pub const RETURN_FAILED: &str = "Error al devolver libro";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Queue of notifications, oldest first
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_ttl(std::time::Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

impl Notifications {
    pub fn with_ttl(ttl: std::time::Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::seconds(DEFAULT_TTL_SECS as i64)),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    fn push(&mut self, level: Level, message: String) {
        self.items.push(Notification {
            level,
            message,
            raised_at: Utc::now(),
        });
    }

    /// All notifications not yet taken, expired or not
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    /// Notifications still visible at `now`
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        let ttl = self.ttl;
        self.items.iter().filter(move |n| now - n.raised_at < ttl)
    }

    /// Drop expired notifications
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.items.retain(|n| now - n.raised_at < ttl);
    }

    /// Take every pending notification
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    /// Take the notifications still visible at `now`, discarding expired ones
    pub fn take_active(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.prune(now);
        self.drain()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
