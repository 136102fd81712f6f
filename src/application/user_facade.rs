use crate::domain::*;
use crate::ports::event::{
    CreateWorkspace, GetUserProfile, InitUser, OpenWorkspace, ReadCurrentWorkspace,
    ReadWorkspaces, SignOut, UpdateUserProfile,
};
use crate::ports::{ConfigError, ConfigStore, DispatchError, DispatchResult, Dispatcher, Event};
use std::sync::Arc;

pub type FacadeResult<T> = Result<T, DispatchError>;

/// User and workspace operations for one bound user, forwarded to a [`Dispatcher`].
///
/// Success payloads and errors are returned exactly as the dispatcher produced
/// them; nothing is retried or cached here.
pub struct UserFacade<D> {
    identity: UserIdentity,
    dispatcher: Arc<D>,
}

impl<D: Dispatcher> UserFacade<D> {
    pub fn new(user_id: impl Into<UserId>, dispatcher: Arc<D>) -> Self {
        Self {
            identity: UserIdentity::new(user_id),
            dispatcher,
        }
    }

    /// Binds to the user recorded in `store`.
    pub async fn from_store(
        store: &dyn ConfigStore,
        dispatcher: Arc<D>,
    ) -> Result<Self, ConfigError> {
        let config = store.load_config().await?;
        let user_id = config.user_id.ok_or(ConfigError::NoBoundUser)?;
        Ok(Self::new(user_id, dispatcher))
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub async fn fetch_profile(&self, user_id: &UserId) -> FacadeResult<UserProfile> {
        self.dispatch::<GetUserProfile>(user_id.clone()).await
    }

    pub async fn update_profile(
        &self,
        name: Option<String>,
        password: Option<String>,
        email: Option<String>,
    ) -> FacadeResult<()> {
        let params = UpdateUserProfileParams {
            id: self.identity.user_id.clone(),
            name,
            password,
            email,
        };
        tracing::debug!(
            user_id = %self.identity.user_id,
            fields = ?params.changed_fields(),
            "Updating user profile"
        );
        self.dispatch::<UpdateUserProfile>(params).await
    }

    /// Workspace deletion has no backend event yet; always fails without dispatching.
    pub async fn delete_workspace(&self, workspace_id: &WorkspaceId) -> FacadeResult<()> {
        Err(DispatchError::NotImplemented(format!(
            "delete workspace {workspace_id}"
        )))
    }

    pub async fn sign_out(&self) -> FacadeResult<()> {
        self.dispatch::<SignOut>(()).await
    }

    pub async fn init_user(&self) -> FacadeResult<()> {
        self.dispatch::<InitUser>(()).await
    }

    pub async fn list_workspaces(&self) -> FacadeResult<Vec<Workspace>> {
        let workspaces = self.dispatch::<ReadWorkspaces>(WorkspaceQuery::all()).await?;
        Ok(workspaces.items)
    }

    pub async fn open_workspace(&self, workspace_id: &WorkspaceId) -> FacadeResult<Workspace> {
        self.dispatch::<OpenWorkspace>(WorkspaceQuery::id(workspace_id.clone()))
            .await
    }

    pub async fn create_workspace(
        &self,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> FacadeResult<Workspace> {
        let params = CreateWorkspaceParams {
            name: name.into(),
            desc: desc.into(),
        };
        self.dispatch::<CreateWorkspace>(params).await
    }

    pub async fn read_current_workspace(&self) -> FacadeResult<CurrentWorkspaceSetting> {
        self.dispatch::<ReadCurrentWorkspace>(()).await
    }

    async fn dispatch<E: Event>(&self, input: E::Input) -> DispatchResult<E::Output> {
        tracing::debug!(user_id = %self.identity.user_id, event = %E::KIND, "Dispatching");
        self.dispatcher.send::<E>(input).await
    }
}
