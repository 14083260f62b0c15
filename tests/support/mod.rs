#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rouille::{Request, Response};
use serde_json::{Value, json};

/// Request seen by [`FakeBridge`].
#[derive(Debug, Clone)]
pub struct Recorded {
	pub method: String,
	pub path: String,
	pub query: String,
	pub body: Option<Value>,
}

/// Local HTTP server answering bridge routes with canned bodies.
pub struct FakeBridge {
	pub base_url: String,
	requests: Arc<Mutex<Vec<Recorded>>>,
	stop: Option<Sender<()>>,
	handle: Option<JoinHandle<()>>,
}

#[derive(Default)]
pub struct Routes {
	canned: HashMap<(String, String), (u16, String)>,
}

impl Routes {
	/// Answer `method path` with a success envelope around `data`.
	pub fn ok(mut self, method: &str, path: &str, data: Value) -> Self {
		self.canned.insert((method.to_owned(), path.to_owned()), (200, json!({"status": "success", "data": data}).to_string()));
		self
	}

	/// Answer `method path` with a raw status and body.
	pub fn raw(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
		self.canned.insert((method.to_owned(), path.to_owned()), (status, body.to_owned()));
		self
	}
}

impl FakeBridge {
	pub fn start(routes: Routes) -> Self {
		let requests = Arc::new(Mutex::new(Vec::new()));
		let log = Arc::clone(&requests);
		let canned = Arc::new(routes.canned);

		let server = rouille::Server::new("127.0.0.1:0", move |request| handle(request, &canned, &log)).expect("bind fake bridge");
		let base_url = format!("http://{}", server.server_addr());
		let (handle, stop) = server.stoppable();

		Self {
			base_url,
			requests,
			stop: Some(stop),
			handle: Some(handle),
		}
	}

	pub fn requests(&self) -> Vec<Recorded> {
		self.requests.lock().expect("request log").clone()
	}

	/// Recorded requests for one path.
	pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
		self.requests().into_iter().filter(|item| item.path == path).collect()
	}
}

impl Drop for FakeBridge {
	fn drop(&mut self) {
		if let Some(stop) = self.stop.take() {
			let _ = stop.send(());
		}
		if let Some(handle) = self.handle.take() {
			let _ = handle.join();
		}
	}
}

fn handle(request: &Request, canned: &HashMap<(String, String), (u16, String)>, log: &Mutex<Vec<Recorded>>) -> Response {
	let mut raw = String::new();
	if let Some(mut data) = request.data() {
		let _ = data.read_to_string(&mut raw);
	}
	let body = if raw.is_empty() { None } else { serde_json::from_str(&raw).ok() };

	let method = request.method().to_owned();
	let path = request.url();
	log.lock().expect("request log").push(Recorded {
		method: method.clone(),
		path: path.clone(),
		query: request.raw_query_string().to_owned(),
		body,
	});

	match canned.get(&(method, path)) {
		Some((status, body)) => Response::from_data("application/json", body.clone()).with_status_code(*status),
		None => Response::json(&json!({"status": "error", "message": "Unknown route"})).with_status_code(404),
	}
}
