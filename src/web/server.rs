// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::api::{status, suggest, tickets};
use super::state::AppState;
use crate::config::ConfigData;
use crate::store::TicketStore;
use axum::Router;
use axum::routing::{get, patch, post};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the router for the ticket API.
///
/// Cross-origin requests are accepted from any origin with credentials. This is only suitable for testing setups.
pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(status::root))
		.route("/api/ai/suggest", post(suggest::suggest_classification))
		.route("/api/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
		.route("/api/tickets/{id}", patch(tickets::update_ticket))
		.layer(CorsLayer::very_permissive())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

pub async fn run_server(config: Arc<ConfigData>, ticket_store: TicketStore) -> miette::Result<()> {
	let app_state = AppState { ticket_store };
	let app = build_router(app_state);

	let listener = TcpListener::bind(config.bind_addr).await.into_diagnostic()?;
	tracing::info!("Listening on http://{}", &config.bind_addr);
	axum::serve(listener, app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.into_diagnostic()?;

	Ok(())
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(source = ?error, "Failed to listen for the shutdown signal");
		std::future::pending::<()>().await;
	}
	tracing::info!("Shutting down web server");
}
