//! Typed event table. Each marker type pairs a request input with the
//! response output the backend produces for it.

use crate::domain::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    InitUser,
    GetUserProfile,
    UpdateUserProfile,
    SignOut,
    CreateWorkspace,
    ReadCurrentWorkspace,
    ReadWorkspaces,
    OpenWorkspace,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::InitUser => "InitUser",
            EventKind::GetUserProfile => "GetUserProfile",
            EventKind::UpdateUserProfile => "UpdateUserProfile",
            EventKind::SignOut => "SignOut",
            EventKind::CreateWorkspace => "CreateWorkspace",
            EventKind::ReadCurrentWorkspace => "ReadCurrentWorkspace",
            EventKind::ReadWorkspaces => "ReadWorkspaces",
            EventKind::OpenWorkspace => "OpenWorkspace",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Event: Send + Sync + 'static {
    const KIND: EventKind;
    type Input: fmt::Debug + Send + 'static;
    type Output: Send + 'static;
}

macro_rules! events {
    ($($(#[$meta:meta])* $name:ident: $input:ty => $output:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl Event for $name {
                const KIND: EventKind = EventKind::$name;
                type Input = $input;
                type Output = $output;
            }
        )*
    };
}

events! {
    /// Prepares the signed-in user's session on the backend.
    InitUser: () => ();
    GetUserProfile: UserId => UserProfile;
    UpdateUserProfile: UpdateUserProfileParams => ();
    SignOut: () => ();
    CreateWorkspace: CreateWorkspaceParams => Workspace;
    ReadCurrentWorkspace: () => CurrentWorkspaceSetting;
    /// Lists workspaces; an empty query selects all of them.
    ReadWorkspaces: WorkspaceQuery => RepeatedWorkspace;
    OpenWorkspace: WorkspaceQuery => Workspace;
}
