use crate::{
    api::{ApiError, ExitQuestionnaire, ResignationRequest},
    pages::hr::{
        repository::HrRepository,
        utils::{conclude_message, HrTab},
    },
    state::notifications::Notifications,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HrViewModel {
    pub resignations: RwSignal<Vec<ResignationRequest>>,
    pub exit_responses: RwSignal<Vec<ExitQuestionnaire>>,
    pub is_loading: RwSignal<bool>,
    pub active_tab: RwSignal<HrTab>,
    pub notifications: Notifications,
    repository: StoredValue<HrRepository>,
}

impl HrViewModel {
    pub fn new(repository: HrRepository, notifications: Notifications) -> Self {
        Self {
            resignations: create_rw_signal(Vec::new()),
            exit_responses: create_rw_signal(Vec::new()),
            is_loading: create_rw_signal(true),
            active_tab: create_rw_signal(HrTab::default()),
            notifications,
            repository: store_value(repository),
        }
    }

    /// Replaces both lists together; on failure the previous lists stay.
    pub async fn load(&self) -> Result<(), ApiError> {
        let Some(repository) = self.repository.try_get_value() else {
            return Ok(());
        };
        self.load_with(&repository).await
    }

    async fn load_with(&self, repository: &HrRepository) -> Result<(), ApiError> {
        let result = repository.fetch_dashboard().await;
        self.is_loading.set(false);
        match result {
            Ok(data) => {
                self.resignations.set(data.resignations);
                self.exit_responses.set(data.exit_responses);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load HR dashboard: {}", err);
                self.notifications.error("Failed to fetch data");
                Err(err)
            }
        }
    }

    /// The view may be gone by the time the backend answers, so nothing
    /// owned by it is read after the first await.
    pub async fn conclude(&self, id: &str, approved: bool, lwd: &str) -> Result<(), ApiError> {
        let Some(repository) = self.repository.try_get_value() else {
            return Ok(());
        };
        match repository.conclude(id, approved, lwd).await {
            Ok(_) => {
                log::info!("Resignation {} concluded (approved: {})", id, approved);
                self.notifications.success(conclude_message(approved));
            }
            Err(err) => {
                log::error!("Failed to conclude resignation {}: {}", id, err);
                self.notifications.error("Failed to process resignation");
                return Err(err);
            }
        }
        // The refresh reports its own failure.
        let _ = self.load_with(&repository).await;
        Ok(())
    }

    pub fn refresh(self) {
        spawn_local(async move {
            let _ = self.load().await;
        });
    }

    pub fn spawn_conclude(self, request: ResignationRequest, approved: bool) {
        spawn_local(async move {
            let _ = self.conclude(&request.id, approved, &request.lwd).await;
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, MemorySessionStore, ResignationStatus, Session};
    use crate::state::notifications::NoticeKind;
    use crate::test_support::helpers::{hr_user, resignation};
    use httpmock::prelude::*;

    fn repository(server: &MockServer) -> HrRepository {
        let store = MemorySessionStore::with_session(Session {
            token: "tok-hr".into(),
            user: hr_user(),
        });
        let api = ApiClient::new_with_base_url(server.url("/api")).with_session_store(store);
        HrRepository::new(api)
    }

    fn view_model(server: &MockServer) -> HrViewModel {
        HrViewModel::new(repository(server), Notifications::new())
    }

    async fn mock_empty_lists(server: &MockServer, status: u16) {
        for path in ["/api/admin/resignations", "/api/admin/exit_responses"] {
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(status).json_body(serde_json::json!([]));
                })
                .await;
        }
    }

    #[tokio::test]
    async fn load_fills_both_lists_and_stops_loading() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/resignations");
                then.status(200).json_body(serde_json::json!([
                    { "_id": "1", "employeeId": "emp-1", "lwd": "2025-01-01", "status": "pending" },
                    { "_id": "2", "employeeId": "emp-2", "lwd": "2025-02-01", "status": "approved" }
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/exit_responses");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server);
        assert!(vm.is_loading.get_untracked());

        vm.load().await.unwrap();
        assert!(!vm.is_loading.get_untracked());
        assert_eq!(
            vm.resignations.get_untracked(),
            vec![
                ResignationRequest {
                    lwd: "2025-01-01".into(),
                    ..resignation("1", ResignationStatus::Pending)
                },
                ResignationRequest {
                    lwd: "2025-02-01".into(),
                    ..resignation("2", ResignationStatus::Approved)
                },
            ]
        );
        assert!(vm.notifications.snapshot().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_lists_and_retries_on_refresh() {
        let server = MockServer::start_async().await;
        let mut failing_resignations = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/resignations");
                then.status(500);
            })
            .await;
        let mut failing_responses = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/exit_responses");
                then.status(500);
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server);
        let previous = vec![resignation("9", ResignationStatus::Pending)];
        vm.resignations.set(previous.clone());

        assert!(vm.load().await.is_err());
        assert!(!vm.is_loading.get_untracked());
        assert_eq!(vm.resignations.get_untracked(), previous);
        let notices = vm.notifications.snapshot();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, "Failed to fetch data");

        failing_resignations.delete_async().await;
        failing_responses.delete_async().await;
        let resignations = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/resignations");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;
        let responses = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/exit_responses");
                then.status(200).json_body(serde_json::json!({
                    "data": [{ "employeeId": "emp-9", "responses": [] }]
                }));
            })
            .await;

        vm.load().await.unwrap();
        resignations.assert_async().await;
        responses.assert_async().await;
        assert!(vm.resignations.get_untracked().is_empty());
        assert_eq!(vm.exit_responses.get_untracked()[0].employee_id, "emp-9");
        assert_eq!(vm.notifications.snapshot().len(), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn conclude_sends_lwd_verbatim_then_refetches() {
        let server = MockServer::start_async().await;
        let conclude = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/admin/conclude_resignation")
                    .header("authorization", "Bearer tok-hr")
                    .json_body(serde_json::json!({
                        "resignationId": "1",
                        "approved": true,
                        "lwd": "2025-01-01T00:00:00.000Z"
                    }));
                then.status(200).json_body(serde_json::json!({
                    "_id": "1",
                    "employeeId": "emp-1",
                    "lwd": "2025-01-01T00:00:00.000Z",
                    "status": "approved"
                }));
            })
            .await;
        let resignations = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/resignations");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;
        let responses = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/exit_responses");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.conclude("1", true, "2025-01-01T00:00:00.000Z")
            .await
            .unwrap();

        conclude.assert_async().await;
        resignations.assert_async().await;
        responses.assert_async().await;
        assert_eq!(
            vm.notifications.snapshot()[0].message,
            "Resignation approved successfully"
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_conclude_leaves_state_untouched() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/admin/conclude_resignation");
                then.status(404)
                    .json_body(serde_json::json!({ "message": "Resignation not found" }));
            })
            .await;
        let refetch = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/resignations");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server);
        let rows = vec![resignation("1", ResignationStatus::Pending)];
        vm.resignations.set(rows.clone());

        let err = vm.conclude("1", false, "2025-01-01").await.unwrap_err();
        assert_eq!(err.message(), "Resignation not found");
        assert_eq!(refetch.hits_async().await, 0);
        assert_eq!(vm.resignations.get_untracked(), rows);
        let notices = vm.notifications.snapshot();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Failed to process resignation");
        runtime.dispose();
    }

    #[tokio::test]
    async fn conclude_succeeds_even_when_the_refresh_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/admin/conclude_resignation");
                then.status(200).json_body(serde_json::json!({
                    "_id": "1",
                    "employeeId": "emp-1",
                    "lwd": "2025-01-01",
                    "status": "rejected"
                }));
            })
            .await;
        mock_empty_lists(&server, 500).await;

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.conclude("1", false, "2025-01-01").await.unwrap();

        let notices = vm.notifications.snapshot();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].message, "Resignation rejected successfully");
        assert_eq!(notices[1].kind, NoticeKind::Error);
        assert_eq!(notices[1].message, "Failed to fetch data");
        runtime.dispose();
    }

    #[tokio::test]
    async fn conclude_finishes_after_the_view_is_torn_down() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/admin/conclude_resignation");
                then.status(200)
                    .delay(std::time::Duration::from_millis(200))
                    .json_body(serde_json::json!({
                        "_id": "1",
                        "employeeId": "emp-1",
                        "lwd": "2025-01-01",
                        "status": "approved"
                    }));
            })
            .await;
        mock_empty_lists(&server, 200).await;

        let runtime = create_runtime();
        let notifications = Notifications::new();
        let repository = repository(&server);
        let (vm, disposer) = as_child_of_current_owner(move |()| {
            HrViewModel::new(repository.clone(), notifications)
        })(());

        let mut pending = std::pin::pin!(vm.conclude("1", true, "2025-01-01"));
        assert!(futures::poll!(pending.as_mut()).is_pending());
        drop(disposer);

        pending.await.unwrap();
        let notices = notifications.snapshot();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Resignation approved successfully");
        runtime.dispose();
    }

    #[tokio::test]
    async fn conclude_is_a_no_op_once_the_view_is_gone() {
        let server = MockServer::start_async().await;
        let conclude = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/admin/conclude_resignation");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let notifications = Notifications::new();
        let repository = repository(&server);
        let (vm, disposer) = as_child_of_current_owner(move |()| {
            HrViewModel::new(repository.clone(), notifications)
        })(());
        drop(disposer);

        vm.conclude("1", true, "2025-01-01").await.unwrap();
        assert_eq!(conclude.hits_async().await, 0);
        assert!(notifications.snapshot().is_empty());
        runtime.dispose();
    }
}
