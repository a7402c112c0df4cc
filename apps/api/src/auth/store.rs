//! In-memory user store.
//!
//! A single `RwLock<HashMap>` keyed by email. `register` checks and inserts
//! under one write guard, so two concurrent registrations of the same email
//! cannot both succeed. Nothing ever removes a user.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub name: String,
    pub password_hash: String,
}

#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user and returns the stored record.
    ///
    /// The display name defaults to the local part of the email. Duplicate
    /// emails are a conflict.
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<UserRecord, AppError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(anyhow!("password hashing failed: {e}")))?;

        let name = if name.is_empty() {
            email.split('@').next().unwrap_or(email).to_string()
        } else {
            name.to_string()
        };

        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::Internal(anyhow!("user store lock poisoned")))?;

        if users.contains_key(email) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let record = UserRecord {
            name,
            password_hash,
        };
        users.insert(email.to_string(), record.clone());
        Ok(record)
    }

    /// Verifies credentials and returns the stored record.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn verify(&self, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let record = {
            let users = self
                .users
                .read()
                .map_err(|_| AppError::Internal(anyhow!("user store lock poisoned")))?;
            users.get(email).cloned()
        };

        // bcrypt::verify is slow; keep it outside the lock.
        match record {
            Some(record) if bcrypt::verify(password, &record.password_hash).unwrap_or(false) => {
                Ok(record)
            }
            _ => Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            )),
        }
    }
}
