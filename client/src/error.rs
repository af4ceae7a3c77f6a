// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that keep a registration request from producing a server response
#[derive(Debug)]
pub enum SubmitError {
	Endpoint(String),
	Serialize(serde_json::Error),
	Request(gloo_net::Error),
}

impl SubmitError {
	pub fn endpoint(context: &str, error: JsValue) -> Self {
		Self::Endpoint(format!("{}: {:?}", context, error))
	}
}

impl From<serde_json::Error> for SubmitError {
	fn from(error: serde_json::Error) -> Self {
		Self::Serialize(error)
	}
}

impl From<gloo_net::Error> for SubmitError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Endpoint(error) => write!(f, "Failed to determine the registration address: {}", error),
			Self::Serialize(error) => write!(f, "Failed to serialize the registration form: {}", error),
			Self::Request(error) => write!(f, "Failed to send the registration request: {}", error),
		}
	}
}

impl std::error::Error for SubmitError {}
