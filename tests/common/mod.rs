// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use ticket_intake::store::TicketStore;
use ticket_intake::web::{AppState, build_router};
use tower::ServiceExt;

pub fn app(ticket_store: TicketStore) -> Router {
	build_router(AppState { ticket_store })
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.header("content-type", "application/json")
		.body(Body::from(body.to_string()))
		.expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.body(Body::empty())
		.expect("request")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
	app.clone().oneshot(request).await.expect("response")
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("body");
	serde_json::from_slice(&bytes).expect("json")
}

pub fn ticket_body(title: &str, description: &str) -> serde_json::Value {
	serde_json::json!({
		"title": title,
		"description": description,
		"email": "user@example.com",
		"priority": "High",
		"department": "Sales",
		"category": "Networking",
		"tags": ["VPN", "remote access"],
		"suggested_response": "Restart your VPN client."
	})
}
