//! User service

use crate::api::ClientReaderWriter;
use crate::error::Result;
use crate::types::Envelope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The user owning the access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

#[derive(Deserialize)]
struct UserData {
    user: User,
}

/// Wraps the user endpoint
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the authenticated user
    pub async fn get_user(&self) -> Result<User> {
        let envelope: Envelope<UserData> = self.client.get("/user").await?;
        Ok(envelope.data.user)
    }
}

impl<C> Clone for Service<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> std::fmt::Debug for Service<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("user::Service").finish_non_exhaustive()
    }
}
