// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use axum::Json;
use serde::Serialize;

pub const RUNNING_MESSAGE: &str = "AI Ticket System Backend Running";

#[derive(Serialize)]
pub struct StatusMessage {
	pub message: &'static str,
}

/// Liveness check
pub async fn root() -> Json<StatusMessage> {
	Json(StatusMessage {
		message: RUNNING_MESSAGE,
	})
}
