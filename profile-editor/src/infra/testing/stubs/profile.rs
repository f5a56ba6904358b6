use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use profile_model::{MessageResponse, UpdateUserRequest, UserRecord};

use crate::infra::{errors::ApiError, services::UserProfileService};

/// A recorded call against the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubCall {
    Fetch {
        username: String,
    },
    Update {
        username: String,
        request: UpdateUserRequest,
    },
}

/// Behaves like a small user API held in memory.
///
/// Scripted responses queued with [`queue_fetch`](Self::queue_fetch) and
/// [`queue_update`](Self::queue_update) are served first; afterwards the
/// stub answers from its user table and applies updates to it.
#[derive(Debug, Clone, Default)]
pub struct StubUserProfileService {
    inner: Arc<RwLock<InnerStubState>>,
}

#[derive(Debug, Default)]
struct InnerStubState {
    users: HashMap<String, UserRecord>,
    fetch_script: VecDeque<Result<UserRecord, ApiError>>,
    update_script: VecDeque<Result<MessageResponse, ApiError>>,
    calls: Vec<StubCall>,
}

impl StubUserProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub seeded with a single, fully populated user.
    pub fn with_demo_user(username: &str) -> Self {
        Self::new().with_user(UserRecord {
            username: username.to_string(),
            first_name: Some("Ravi".into()),
            last_name: Some("Sharma".into()),
            mobile: Some("9876543210".into()),
            email: Some(format!("{username}@example.com")),
            address: Some("221B Baker Street".into()),
        })
    }

    pub fn with_user(self, user: UserRecord) -> Self {
        self.write()
            .users
            .insert(user.username.clone(), user);
        self
    }

    /// Serve `result` for the next fetch instead of the user table.
    pub fn queue_fetch(&self, result: Result<UserRecord, ApiError>) {
        self.write().fetch_script.push_back(result);
    }

    /// Serve `result` for the next update instead of applying it.
    pub fn queue_update(&self, result: Result<MessageResponse, ApiError>) {
        self.write().update_script.push_back(result);
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.read().calls.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.read()
            .calls
            .iter()
            .filter(|call| matches!(call, StubCall::Fetch { .. }))
            .count()
    }

    pub fn update_count(&self) -> usize {
        self.read()
            .calls
            .iter()
            .filter(|call| matches!(call, StubCall::Update { .. }))
            .count()
    }

    /// Most recent update request body, if any.
    pub fn last_update(&self) -> Option<UpdateUserRequest> {
        self.read().calls.iter().rev().find_map(|call| match call {
            StubCall::Update { request, .. } => Some(request.clone()),
            StubCall::Fetch { .. } => None,
        })
    }

    pub fn user(&self, username: &str) -> Option<UserRecord> {
        self.read().users.get(username).cloned()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, InnerStubState> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, InnerStubState> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[async_trait]
impl UserProfileService for StubUserProfileService {
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, ApiError> {
        let mut state = self.write();
        state.calls.push(StubCall::Fetch {
            username: username.to_string(),
        });
        if let Some(scripted) = state.fetch_script.pop_front() {
            return scripted;
        }
        state
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::server(404, "User not found"))
    }

    async fn update_user(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, ApiError> {
        let mut state = self.write();
        state.calls.push(StubCall::Update {
            username: username.to_string(),
            request: request.clone(),
        });
        if let Some(scripted) = state.update_script.pop_front() {
            return scripted;
        }

        let Some(user) = state.users.get_mut(username) else {
            return Err(ApiError::server(404, "User not found"));
        };
        user.email = non_empty(&request.email);
        user.first_name = non_empty(&request.first_name);
        user.last_name = non_empty(&request.last_name);
        user.address = non_empty(&request.address);
        if let Some(mobile) = &request.mobile {
            user.mobile = non_empty(mobile);
        }
        Ok(MessageResponse::new("Record Updated...!"))
    }
}
