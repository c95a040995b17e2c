// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use ticket_intake::config::load_config;
use ticket_intake::store::TicketStore;
use ticket_intake::web::run_server;

#[tokio::main]
async fn main() -> miette::Result<()> {
	let config_path = std::env::args().nth(1);
	let config = Arc::new(load_config(config_path.as_deref()).await?);

	tracing_subscriber::fmt().with_max_level(config.log_level).init();
	tracing::debug!(?config, "Loaded configuration");

	let ticket_store = TicketStore::new();
	let server_result = run_server(config, ticket_store).await;
	if let Err(error) = &server_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
	server_result
}
