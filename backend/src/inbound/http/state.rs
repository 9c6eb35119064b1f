//! Shared HTTP adapter state.
//!
//! Handlers take this via `web::Data<HttpState>` so they depend only on the
//! domain ports and can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{UserRegistration, UsersQuery};

/// Port implementations used by the users handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Backs `GET /api/all`.
    pub users: Arc<dyn UsersQuery>,
    /// Backs `POST /api/form`.
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Bundle the ports.
    pub fn new(users: Arc<dyn UsersQuery>, registration: Arc<dyn UserRegistration>) -> Self {
        Self {
            users,
            registration,
        }
    }

    /// Use one service for both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_service::domain::UserDirectoryService;
    /// use user_service::inbound::http::state::HttpState;
    /// use user_service::test_support::MemoryUserRepository;
    ///
    /// let service = UserDirectoryService::new(Arc::new(MemoryUserRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UserRegistration + 'static,
    {
        Self {
            users: service.clone(),
            registration: service,
        }
    }
}
