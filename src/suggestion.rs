// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule-based ticket classification.
//!
//! Suggestions come from an ordered list of keyword rules checked against the lowercased description. The first rule
//! whose keyword appears wins; if none match, the fallback outcome is used.

use crate::model::Suggestion;

/// The classification produced when a rule matches
struct Outcome {
	category: &'static str,
	tags: &'static [&'static str],
	priority: &'static str,
	response: &'static str,
}

impl Outcome {
	fn to_suggestion(&self) -> Suggestion {
		Suggestion {
			category: self.category.to_string(),
			tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
			priority: self.priority.to_string(),
			suggested_response: self.response.to_string(),
		}
	}
}

/// A keyword to look for in the lowercased description and the outcome it produces.
struct Rule {
	keyword: &'static str,
	outcome: Outcome,
}

const RULES: &[Rule] = &[
	Rule {
		keyword: "vpn",
		outcome: Outcome {
			category: "Networking",
			tags: &["VPN", "timeout", "remote access"],
			priority: "High",
			response: "Please ensure you're on the company network and restart your VPN client. If that fails, contact IT Support at x1234.",
		},
	},
	Rule {
		keyword: "email",
		outcome: Outcome {
			category: "Software",
			tags: &["Email", "Outlook"],
			priority: "Medium",
			response: "Try restarting your email client or check server settings. If that fails, contact IT Support at x1234.",
		},
	},
];

static FALLBACK: Outcome = Outcome {
	category: "General",
	tags: &["support", "issue", "IT"],
	priority: "Low",
	response: "Thank you for reporting. A support agent will follow up shortly.",
};

/// Suggests a category, tags, priority, and response for a ticket.
///
/// Only the description is examined. The title is accepted so callers pass the whole ticket summary, but it doesn't
/// affect the result.
pub fn suggest(_title: &str, description: &str) -> Suggestion {
	let description = description.to_lowercase();
	RULES
		.iter()
		.find(|rule| description.contains(rule.keyword))
		.map(|rule| &rule.outcome)
		.unwrap_or(&FALLBACK)
		.to_suggestion()
}
