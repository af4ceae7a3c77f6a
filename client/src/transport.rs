// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmitError;
use gloo_net::http::Request;
use napps_register_shared::messages::form::FormData;
use napps_register_shared::messages::user_register::{RegistrationResponse, REGISTRATION_PATH};
use web_sys::Url;

/// Gets the URL of the registration endpoint relative to the address at which the page is hosted.
///
/// # Errors
///
/// Fails when the browser context (window, location) is inaccessible or the address can't be parsed.
pub fn registration_endpoint() -> Result<String, SubmitError> {
	let window = web_sys::window().ok_or_else(|| SubmitError::Endpoint(String::from("no browser window")))?;
	let web_endpoint = window
		.location()
		.href()
		.map_err(|error| SubmitError::endpoint("Failed to get current address", error))?;
	let url = Url::new_with_base(REGISTRATION_PATH, &web_endpoint)
		.map_err(|error| SubmitError::endpoint("Failed to generate URL instance", error))?;
	url.set_search("");
	url.set_hash("");
	Ok(url.href())
}

/// Sends the registration form to the server as JSON and decodes the response, whatever its status.
///
/// # Errors
///
/// Errors occur only when no response was received: when the form can't be serialized or when the request itself
/// fails.
pub async fn register_user(endpoint: &str, form_data: &FormData) -> Result<RegistrationResponse, SubmitError> {
	let body = serde_json::to_string(form_data)?;
	let response = Request::post(endpoint)
		.header("Content-Type", "application/json")
		.body(body)?
		.send()
		.await?;

	let status = response.status();
	let body = match response.text().await {
		Ok(text) => text,
		Err(error) => {
			log::warn!("Failed to read registration response body: {}", error);
			String::new()
		}
	};
	Ok(RegistrationResponse::from_status(status, &body))
}
