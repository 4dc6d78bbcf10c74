//! Full client lifecycle against the live mock server.
//!
//! Starts the mock server on a random port, then drives the whole app —
//! bootstrap, create, toggle, delete — over real HTTP with a ureq-backed
//! transport, verifying that the rendered view tracks the server state.

use todoboard_core::{App, HttpMethod, HttpRequest, HttpResponse, SyncError, Todo, Transport};

/// Execute `HttpRequest` values with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data, letting the core own status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, SyncError> {
        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Patch, Some(body)) => self
                .agent
                .patch(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Patch, None) => self.agent.patch(&request.path).send_empty(),
        };
        let mut response = result.map_err(|e| SyncError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Fetch the server's todo list directly, bypassing the app.
fn server_todos(base_url: &str, transport: &mut UreqTransport) -> Vec<Todo> {
    let client = todoboard_core::ApiClient::new(base_url);
    let request = client.build_list_todos(100);
    client
        .parse_list_todos(transport.execute(&request).unwrap())
        .unwrap()
}

#[test]
fn app_lifecycle() {
    let base_url = start_server();
    let mut app = App::new(&base_url, UreqTransport::new());

    // Step 1: bootstrap — no todos yet, but all seeded users become options.
    app.bootstrap(15).unwrap();
    assert!(app.list().items().is_empty());
    assert_eq!(app.select().options().len(), 3);
    assert_eq!(app.select().options()[0].label, "Leanne Graham");

    // Step 2: create two todos; the newer one renders on top.
    let first = app.create(1, "Integration test").unwrap();
    let second = app.create(2, "Second").unwrap();
    assert_ne!(first, second);
    assert_eq!(app.list().items().len(), 2);
    assert_eq!(app.list().items()[0].label, "Second by Ervin Howell");
    assert_eq!(app.list().items()[1].label, "Integration test by Leanne Graham");

    // Step 3: toggle the first one; server and view must agree.
    app.toggle(first, true).unwrap();
    assert!(app.list().items()[1].checked);
    let mut probe = UreqTransport::new();
    let remote = server_todos(&base_url, &mut probe);
    let remote_first = remote.iter().find(|t| t.id == first).unwrap();
    assert!(remote_first.completed);
    assert_eq!(remote_first.title, "Integration test");

    // Step 4: delete the second; it leaves view, store, and server together.
    app.remove(second).unwrap();
    assert_eq!(app.list().items().len(), 1);
    assert_eq!(app.store().todos().len(), 1);
    let remote = server_todos(&base_url, &mut probe);
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].id, first);

    // Step 5: delete it again — the server 404 surfaces, nothing changes.
    let err = app.remove(second).unwrap_err();
    assert!(matches!(err, SyncError::Http { status: 404, .. }));
    assert_eq!(app.list().items().len(), 1);
}
