// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory ticket storage.
//!
//! Tickets live only as long as the process. All of them sit in one insertion-ordered list behind a single lock;
//! lookups are linear scans.

use crate::model::{Ticket, TicketChange};
use miette::Diagnostic;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Diagnostic, Eq, PartialEq)]
pub enum StoreError {
	#[diagnostic(code(ticket_store::not_found))]
	NotFound(String),
}

impl fmt::Display for StoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotFound(id) => write!(f, "no ticket with ID {}", id),
		}
	}
}

impl Error for StoreError {}

/// Criteria for narrowing a ticket listing. Unset or empty criteria match every ticket.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TicketFilter {
	pub category: Option<String>,
	pub status: Option<String>,
	pub tag: Option<String>,
}

impl TicketFilter {
	pub fn matches(&self, ticket: &Ticket) -> bool {
		let category_matches = criterion(&self.category).is_none_or(|category| ticket.category == category);
		let status_matches = criterion(&self.status).is_none_or(|status| ticket.status == status);
		let tag_matches = criterion(&self.tag).is_none_or(|tag| ticket.has_tag(tag));
		category_matches && status_matches && tag_matches
	}
}

/// An empty value (as sent by a cleared filter field) doesn't constrain the listing.
fn criterion(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}

/// Handle to the shared ticket collection. Clones refer to the same tickets.
#[derive(Clone, Debug, Default)]
pub struct TicketStore {
	tickets: Arc<RwLock<Vec<Ticket>>>,
}

impl TicketStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a ticket to the end of the collection and returns the stored record.
	pub async fn create(&self, ticket: Ticket) -> Ticket {
		self.tickets.write().await.push(ticket.clone());
		ticket
	}

	/// Gets every ticket in the order they were created.
	pub async fn list(&self) -> Vec<Ticket> {
		self.tickets.read().await.clone()
	}

	/// Gets the tickets matching the filter in the order they were created.
	pub async fn list_filtered(&self, filter: &TicketFilter) -> Vec<Ticket> {
		self.tickets
			.read()
			.await
			.iter()
			.filter(|ticket| filter.matches(ticket))
			.cloned()
			.collect()
	}

	/// Applies changes to the ticket with the given ID and returns the updated record.
	///
	/// The scan and every change happen under one write lock, so concurrent readers never see a partial update.
	pub async fn update(&self, id: &str, changes: Vec<TicketChange>) -> Result<Ticket, StoreError> {
		let mut tickets = self.tickets.write().await;
		let Some(ticket) = tickets.iter_mut().find(|ticket| ticket.id == id) else {
			return Err(StoreError::NotFound(id.to_string()));
		};
		for change in changes {
			ticket.apply(change);
		}
		Ok(ticket.clone())
	}

	pub async fn len(&self) -> usize {
		self.tickets.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.tickets.read().await.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::NewTicket;

	fn ticket(title: &str, category: &str, tags: &[&str]) -> Ticket {
		Ticket::open(NewTicket {
			title: title.to_string(),
			description: "description".to_string(),
			email: "user@example.com".to_string(),
			priority: "Low".to_string(),
			department: "IT".to_string(),
			category: category.to_string(),
			tags: tags.iter().map(|tag| tag.to_string()).collect(),
			suggested_response: "We'll look into it".to_string(),
		})
	}

	#[tokio::test]
	async fn list_is_empty_for_new_store() {
		let store = TicketStore::new();
		assert!(store.list().await.is_empty());
		assert!(store.is_empty().await);
	}

	#[tokio::test]
	async fn list_returns_tickets_in_creation_order() {
		let store = TicketStore::new();
		let mut ids = Vec::new();
		for index in 0..5 {
			let created = store.create(ticket(&format!("ticket {}", index), "General", &[])).await;
			ids.push(created.id);
		}
		let listed: Vec<String> = store.list().await.into_iter().map(|ticket| ticket.id).collect();
		assert_eq!(listed, ids);
		assert_eq!(store.len().await, 5);
	}

	#[tokio::test]
	async fn update_changes_only_target_ticket() {
		let store = TicketStore::new();
		let first = store.create(ticket("first", "General", &[])).await;
		let second = store.create(ticket("second", "General", &[])).await;

		let updated = store
			.update(&first.id, vec![TicketChange::Status("Resolved".to_string())])
			.await
			.unwrap();
		assert_eq!(updated.status, "Resolved");
		assert_eq!(updated.title, first.title);
		assert_eq!(updated.id, first.id);

		let tickets = store.list().await;
		assert_eq!(tickets[0], updated);
		assert_eq!(tickets[1], second);
	}

	#[tokio::test]
	async fn update_unknown_id_is_not_found() {
		let store = TicketStore::new();
		let created = store.create(ticket("only", "General", &[])).await;

		let result = store
			.update("missing", vec![TicketChange::Status("Resolved".to_string())])
			.await;
		assert_eq!(result, Err(StoreError::NotFound("missing".to_string())));
		assert_eq!(store.list().await, vec![created]);
	}

	#[tokio::test]
	async fn update_without_changes_returns_record_unchanged() {
		let store = TicketStore::new();
		let created = store.create(ticket("only", "General", &[])).await;
		let updated = store.update(&created.id, Vec::new()).await.unwrap();
		assert_eq!(updated, created);
	}

	#[tokio::test]
	async fn filtered_list_combines_criteria() {
		let store = TicketStore::new();
		let vpn = store.create(ticket("vpn", "Networking", &["VPN", "timeout"])).await;
		store.create(ticket("mail", "Software", &["Email"])).await;
		let resolved = store.create(ticket("vpn again", "Networking", &["VPN"])).await;
		store
			.update(&resolved.id, vec![TicketChange::Status("Resolved".to_string())])
			.await
			.unwrap();

		let networking = TicketFilter {
			category: Some("Networking".to_string()),
			..TicketFilter::default()
		};
		let titles: Vec<String> = store
			.list_filtered(&networking)
			.await
			.into_iter()
			.map(|ticket| ticket.title)
			.collect();
		assert_eq!(titles, vec!["vpn", "vpn again"]);

		let open_vpn = TicketFilter {
			status: Some("New".to_string()),
			tag: Some("VPN".to_string()),
			..TicketFilter::default()
		};
		let open_vpn_tickets = store.list_filtered(&open_vpn).await;
		assert_eq!(open_vpn_tickets, vec![vpn]);

		assert_eq!(store.list_filtered(&TicketFilter::default()).await.len(), 3);
	}

	#[tokio::test]
	async fn empty_filter_values_match_everything() {
		let store = TicketStore::new();
		store.create(ticket("vpn", "Networking", &["VPN"])).await;
		store.create(ticket("mail", "Software", &[])).await;

		let cleared = TicketFilter {
			category: Some(String::new()),
			status: Some(String::new()),
			tag: Some(String::new()),
		};
		assert_eq!(store.list_filtered(&cleared).await, store.list().await);

		let networking_only = TicketFilter {
			category: Some("Networking".to_string()),
			status: Some(String::new()),
			tag: Some(String::new()),
		};
		let tickets = store.list_filtered(&networking_only).await;
		assert_eq!(tickets.len(), 1);
		assert_eq!(tickets[0].title, "vpn");
	}
}
