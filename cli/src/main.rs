//! Terminal host for the todoboard core.
//!
//! Executes the core's `HttpRequest` values with ureq, drives the controller
//! from a line-oriented command loop, and re-renders the list after every
//! successful flow. A failed flow prints the fixed user-facing message to
//! stderr while the real cause goes to the tracing channel; no failure ends
//! the session.

use std::io::{self, BufRead, Write};

use todoboard_core::{App, Event, HttpMethod, HttpRequest, HttpResponse, SyncError, Transport};
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com";
const FETCH_LIMIT: u32 = 15;

const USAGE: &str = "commands: ls | users | add <user_id> <title> | toggle <id> | rm <id> | quit";

/// Execute `HttpRequest` values with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data and the core owns status interpretation.
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

#[derive(Debug)]
enum Command {
    List,
    Users,
    Add { user_id: u64, title: String },
    Toggle { id: u64 },
    Remove { id: u64 },
    Quit,
}

/// Parse one input line. `Ok(None)` is an empty line; `Err` carries a usage
/// hint for the user.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let command = match verb {
        "ls" => Command::List,
        "users" => Command::Users,
        "add" => {
            let user_id = words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| "add needs a numeric user id".to_string())?;
            let title = words.collect::<Vec<_>>().join(" ");
            if title.is_empty() {
                return Err("add needs a title".to_string());
            }
            Command::Add { user_id, title }
        }
        "toggle" => Command::Toggle {
            id: words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| "toggle needs a numeric todo id".to_string())?,
        },
        "rm" => Command::Remove {
            id: words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| "rm needs a numeric todo id".to_string())?,
        },
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}\n{USAGE}")),
    };
    Ok(Some(command))
}

fn report(err: &SyncError) {
    tracing::error!(%err, "flow failed");
    eprintln!("{}", err.user_message());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TODOBOARD_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let mut app = App::new(&base_url, UreqTransport::new());
    if let Err(err) = app.bootstrap(FETCH_LIMIT) {
        report(&err);
        std::process::exit(1);
    }

    println!("users:");
    print!("{}", app.select());
    println!("todos:");
    print!("{}", app.list());
    println!("{USAGE}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                eprintln!("{usage}");
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::List => {
                print!("{}", app.list());
                continue;
            }
            Command::Users => {
                print!("{}", app.select());
                continue;
            }
            Command::Add { user_id, title } => app.handle(Event::Submit { user_id, title }),
            Command::Toggle { id } => {
                // The terminal has no checkbox to flip for us, so the new
                // state is the inverse of the rendered one.
                let Some(item) = app.list().items().iter().find(|item| item.id == id) else {
                    report(&SyncError::MissingItem(id));
                    continue;
                };
                let completed = !item.checked;
                app.handle(Event::Toggle { id, completed })
            }
            Command::Remove { id } => app.handle(Event::Remove { id }),
        };

        match outcome {
            Ok(()) => print!("{}", app.list()),
            Err(err) => report(&err),
        }
    }
}
