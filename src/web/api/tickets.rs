// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{NewTicket, Ticket, TicketUpdate};
use crate::store::{StoreError, TicketFilter, TicketStore};
use crate::web::error::ApiError;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use serde_json::{Map, Value};

/// Opens a ticket with the submitted data. The suggested response is stored as submitted.
pub async fn create_ticket(
	State(ticket_store): State<TicketStore>,
	WithRejection(Json(new_ticket), _): WithRejection<Json<NewTicket>, ApiError>,
) -> Json<Ticket> {
	let ticket = ticket_store.create(Ticket::open(new_ticket)).await;
	let total_tickets = ticket_store.len().await;
	tracing::info!(ticket_id = %ticket.id, total_tickets = total_tickets, "Created ticket");
	Json(ticket)
}

/// Lists tickets in creation order, optionally narrowed by category, status, or tag.
pub async fn list_tickets(
	State(ticket_store): State<TicketStore>,
	WithRejection(Query(filter), _): WithRejection<Query<TicketFilter>, ApiError>,
) -> Json<Vec<Ticket>> {
	Json(ticket_store.list_filtered(&filter).await)
}

pub async fn update_ticket(
	Path(ticket_id): Path<String>,
	State(ticket_store): State<TicketStore>,
	WithRejection(Json(fields), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<Ticket>, ApiError> {
	let update = TicketUpdate::from_fields(fields)?;
	if !update.ignored_fields.is_empty() {
		tracing::debug!(ticket_id = %ticket_id, fields = ?update.ignored_fields, "Ignoring unknown ticket update fields");
	}

	match ticket_store.update(&ticket_id, update.changes).await {
		Ok(ticket) => {
			tracing::info!(ticket_id = %ticket.id, status = %ticket.status, "Updated ticket");
			Ok(Json(ticket))
		}
		Err(error @ StoreError::NotFound(_)) => {
			tracing::warn!(ticket_id = %ticket_id, "Update requested for unknown ticket");
			Err(error.into())
		}
	}
}
