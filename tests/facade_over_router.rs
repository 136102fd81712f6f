use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};
use workspace_facade::adapters::EventRouter;
use workspace_facade::domain::*;
use workspace_facade::ports::event::{
    CreateWorkspace, InitUser, OpenWorkspace, ReadWorkspaces, SignOut, UpdateUserProfile,
};
use workspace_facade::{DispatchError, EventKind, UserFacade};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn workspace(id: &str, name: &str) -> Workspace {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Workspace {
        id: id.into(),
        name: name.to_string(),
        desc: String::new(),
        created_at: at,
        modified_at: at,
    }
}

#[tokio::test]
async fn test_profile_update_reaches_backend_with_bound_id() {
    init_tracing();
    let received = Arc::new(Mutex::new(Vec::new()));
    let router = EventRouter::new();
    let sink = received.clone();
    router.register::<UpdateUserProfile, _, _>(move |params: UpdateUserProfileParams| {
        sink.lock().unwrap().push(params);
        async { Ok(()) }
    });
    let facade = UserFacade::new("u1", Arc::new(router));

    facade
        .update_profile(Some("Alice".to_string()), None, None)
        .await
        .unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        serde_json::to_value(&received[0]).unwrap(),
        serde_json::json!({ "id": "u1", "name": "Alice" })
    );
}

#[tokio::test]
async fn test_workspace_lifecycle_through_router() {
    init_tracing();
    let router = EventRouter::new();
    router.register::<InitUser, _, _>(|()| async { Ok(()) });
    router.register::<ReadWorkspaces, _, _>(|query: WorkspaceQuery| async move {
        assert_eq!(query, WorkspaceQuery::all());
        Ok(RepeatedWorkspace::from(vec![
            workspace("w1", "Personal"),
            workspace("w2", "Team"),
        ]))
    });
    router.register::<CreateWorkspace, _, _>(|params: CreateWorkspaceParams| async move {
        Ok(Workspace {
            desc: params.desc,
            ..workspace("w3", &params.name)
        })
    });
    router.register::<OpenWorkspace, _, _>(|query: WorkspaceQuery| async move {
        match query.value {
            Some(id) if id.0 == "w3" => Ok(workspace("w3", "Research")),
            Some(id) => Err(DispatchError::NotFound(format!("workspace {id}"))),
            None => Err(DispatchError::Internal("missing workspace id".to_string())),
        }
    });
    let facade = UserFacade::new("u1", Arc::new(router));

    facade.init_user().await.unwrap();

    let listed = facade.list_workspaces().await.unwrap();
    let names: Vec<_> = listed.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Personal", "Team"]);

    let created = facade
        .create_workspace("Research", "papers and notes")
        .await
        .unwrap();
    assert_eq!(created.id, WorkspaceId::from("w3"));
    assert_eq!(created.desc, "papers and notes");

    assert_eq!(
        facade.open_workspace(&created.id).await.unwrap().name,
        "Research"
    );
    assert_eq!(
        facade.open_workspace(&"w404".into()).await,
        Err(DispatchError::NotFound("workspace w404".to_string()))
    );
}

#[tokio::test]
async fn test_missing_handler_surfaces_as_unhandled() {
    init_tracing();
    let router = EventRouter::new();
    router.register::<SignOut, _, _>(|()| async { Ok(()) });
    let facade = UserFacade::new("u1", Arc::new(router));

    assert_eq!(facade.sign_out().await, Ok(()));
    assert_eq!(
        facade.read_current_workspace().await,
        Err(DispatchError::Unhandled(EventKind::ReadCurrentWorkspace))
    );
}

#[tokio::test]
async fn test_delete_workspace_is_not_implemented() {
    let facade = UserFacade::new("u1", Arc::new(EventRouter::new()));

    let err = facade.delete_workspace(&"w1".into()).await.unwrap_err();

    assert!(err.is_not_implemented());
}
