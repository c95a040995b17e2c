// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{Suggestion, SuggestionRequest};
use crate::suggestion::suggest;
use crate::web::error::ApiError;
use axum::Json;
use axum_extra::extract::WithRejection;

pub async fn suggest_classification(
	WithRejection(Json(request), _): WithRejection<Json<SuggestionRequest>, ApiError>,
) -> Json<Suggestion> {
	let suggestion = suggest(&request.title, &request.description);
	tracing::debug!(category = %suggestion.category, priority = %suggestion.priority, "Suggested ticket classification");
	Json(suggestion)
}
