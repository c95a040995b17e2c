// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The status every ticket is given when it's created.
pub const INITIAL_TICKET_STATUS: &str = "New";

/// A support ticket held by the ticket store.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ticket {
	pub title: String,
	pub description: String,
	/// The email address of the person who submitted the ticket.
	pub email: String,
	/// Priority label. Any string is accepted; the suggestion engine produces "High", "Medium", or "Low".
	pub priority: String,
	pub department: String,
	pub category: String,
	pub tags: Vec<String>,
	pub suggested_response: Option<String>,
	/// The ticket's identifier. Assigned once by [Ticket::open] and never changed afterward.
	pub id: String,
	pub status: String,
}

impl Ticket {
	/// Opens a new ticket from submitted data, giving it a fresh ID and the initial status.
	///
	/// Any status the submitter may have sent is not part of [NewTicket] and so never reaches the ticket.
	pub fn open(new_ticket: NewTicket) -> Self {
		Self {
			title: new_ticket.title,
			description: new_ticket.description,
			email: new_ticket.email,
			priority: new_ticket.priority,
			department: new_ticket.department,
			category: new_ticket.category,
			tags: new_ticket.tags,
			suggested_response: Some(new_ticket.suggested_response),
			id: cuid2::create_id(),
			status: INITIAL_TICKET_STATUS.to_string(),
		}
	}

	/// Applies a single change to this ticket.
	pub fn apply(&mut self, change: TicketChange) {
		match change {
			TicketChange::Title(title) => self.title = title,
			TicketChange::Description(description) => self.description = description,
			TicketChange::Email(email) => self.email = email,
			TicketChange::Priority(priority) => self.priority = priority,
			TicketChange::Department(department) => self.department = department,
			TicketChange::Category(category) => self.category = category,
			TicketChange::Tags(tags) => self.tags = tags,
			TicketChange::SuggestedResponse(response) => self.suggested_response = response,
			TicketChange::Status(status) => self.status = status,
		}
	}

	/// Whether the ticket has the given tag
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|ticket_tag| ticket_tag == tag)
	}
}

/// The data a client submits to open a ticket.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTicket {
	pub title: String,
	pub description: String,
	pub email: String,
	pub priority: String,
	pub department: String,
	pub category: String,
	pub tags: Vec<String>,
	pub suggested_response: String,
}

/// One whitelisted modification to a ticket's attributes.
///
/// There's no variant for the ticket ID, as it can't be changed once assigned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TicketChange {
	Title(String),
	Description(String),
	Email(String),
	Priority(String),
	Department(String),
	Category(String),
	Tags(Vec<String>),
	SuggestedResponse(Option<String>),
	Status(String),
}

/// A set of changes parsed from a client-supplied field map
#[derive(Debug, Default)]
pub struct TicketUpdate {
	pub changes: Vec<TicketChange>,
	/// Field names that were supplied but don't name a changeable attribute.
	pub ignored_fields: Vec<String>,
}

/// A field in an update had a value of the wrong type for the attribute it names.
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidFieldValue {
	pub field: String,
	pub expected: &'static str,
}

impl fmt::Display for InvalidFieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "field `{}` must be {}", self.field, self.expected)
	}
}

impl std::error::Error for InvalidFieldValue {}

impl TicketUpdate {
	/// Parses a field map into ticket changes.
	///
	/// Fields are checked against the changeable attributes. Known fields must have a value of the right type or the
	/// whole update is rejected. Unknown fields (including `id`) are collected in [Self::ignored_fields].
	pub fn from_fields(fields: Map<String, Value>) -> Result<Self, InvalidFieldValue> {
		let mut update = Self::default();
		for (field, value) in fields {
			let change = match field.as_str() {
				"title" => TicketChange::Title(string_value(&field, value)?),
				"description" => TicketChange::Description(string_value(&field, value)?),
				"email" => TicketChange::Email(string_value(&field, value)?),
				"priority" => TicketChange::Priority(string_value(&field, value)?),
				"department" => TicketChange::Department(string_value(&field, value)?),
				"category" => TicketChange::Category(string_value(&field, value)?),
				"tags" => TicketChange::Tags(string_list_value(&field, value)?),
				"suggested_response" => TicketChange::SuggestedResponse(optional_string_value(&field, value)?),
				"status" => TicketChange::Status(string_value(&field, value)?),
				_ => {
					update.ignored_fields.push(field);
					continue;
				}
			};
			update.changes.push(change);
		}
		Ok(update)
	}
}

fn string_value(field: &str, value: Value) -> Result<String, InvalidFieldValue> {
	match value {
		Value::String(value) => Ok(value),
		_ => Err(InvalidFieldValue {
			field: field.to_string(),
			expected: "a string",
		}),
	}
}

fn optional_string_value(field: &str, value: Value) -> Result<Option<String>, InvalidFieldValue> {
	match value {
		Value::Null => Ok(None),
		Value::String(value) => Ok(Some(value)),
		_ => Err(InvalidFieldValue {
			field: field.to_string(),
			expected: "a string or null",
		}),
	}
}

fn string_list_value(field: &str, value: Value) -> Result<Vec<String>, InvalidFieldValue> {
	let invalid = || InvalidFieldValue {
		field: field.to_string(),
		expected: "a list of strings",
	};
	let Value::Array(items) = value else {
		return Err(invalid());
	};
	items
		.into_iter()
		.map(|item| match item {
			Value::String(item) => Ok(item),
			_ => Err(invalid()),
		})
		.collect()
}

/// A request for a classification suggestion.
#[derive(Clone, Debug, Deserialize)]
pub struct SuggestionRequest {
	pub title: String,
	pub description: String,
}

/// The classification guess for a ticket.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Suggestion {
	pub category: String,
	pub tags: Vec<String>,
	pub priority: String,
	pub suggested_response: String,
}
