// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_json::Value;

/// Path of the user registration endpoint, relative to the server root
pub const REGISTRATION_PATH: &str = "/users/";

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// A field rendered on the registration form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UserField {
	pub name: &'static str,
	pub input_type: &'static str,
	pub required: bool,
}

impl UserField {
	const fn new(name: &'static str, input_type: &'static str, required: bool) -> Self {
		Self {
			name,
			input_type,
			required,
		}
	}

	/// Human-readable label for the field, derived from its name
	pub fn label(&self) -> String {
		let mut label = String::with_capacity(self.name.len() + 2);
		for (index, c) in self.name.chars().enumerate() {
			if c == '_' {
				label.push(' ');
			} else if index == 0 {
				label.extend(c.to_uppercase());
			} else {
				label.push(c);
			}
		}
		label.push_str(": ");
		label
	}
}

/// All fields of the registration form, in display order
pub const USER_FIELDS: [UserField; 10] = [
	UserField::new("username", "text", true),
	UserField::new("first_name", "text", true),
	UserField::new("last_name", "text", false),
	UserField::new("password", "password", true),
	UserField::new("confirm_password", "password", false),
	UserField::new("email", "email", true),
	UserField::new("phone", "tel", false),
	UserField::new("city", "text", false),
	UserField::new("state", "text", false),
	UserField::new("country", "text", false),
];

/// Response data from the server for a registration attempt
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationResponse {
	Created,
	Unauthorized { error: Option<String> },
	Other { status: u16, body: Option<Value> },
}

impl RegistrationResponse {
	/// Decodes a completed HTTP response. Decoding never fails: a body that isn't JSON is treated as absent, and an
	/// unauthorized response only carries an error when the body holds a non-empty `error` string.
	pub fn from_status(status: u16, body: &str) -> Self {
		let body: Option<Value> = serde_json::from_str(body).ok();
		match status {
			STATUS_CREATED => Self::Created,
			STATUS_UNAUTHORIZED => {
				let error = body
					.as_ref()
					.and_then(|body| body.get("error"))
					.and_then(|error| error.as_str())
					.filter(|error| !error.is_empty())
					.map(String::from);
				Self::Unauthorized { error }
			}
			status => Self::Other { status, body },
		}
	}

	/// Whether the form should be returned to its default values after this response
	pub fn resets_form(&self) -> bool {
		matches!(self, Self::Created)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_from_field_names() {
		assert_eq!(USER_FIELDS[0].label(), "Username: ");
		assert_eq!(USER_FIELDS[4].label(), "Confirm password: ");
	}

	#[test]
	fn confirmation_field_follows_password() {
		let names: Vec<&str> = USER_FIELDS.iter().map(|field| field.name).collect();
		let password = names.iter().position(|name| *name == "password").unwrap();
		assert_eq!(names[password + 1], "confirm_password");
	}

	#[test]
	fn decodes_created() {
		let response = RegistrationResponse::from_status(201, "User successfully created.");
		assert_eq!(response, RegistrationResponse::Created);
		assert!(response.resets_form());
	}

	#[test]
	fn decodes_unauthorized_with_error() {
		let response = RegistrationResponse::from_status(401, r#"{"error": "email taken"}"#);
		assert_eq!(
			response,
			RegistrationResponse::Unauthorized {
				error: Some(String::from("email taken"))
			}
		);
		assert!(!response.resets_form());
	}

	#[test]
	fn unauthorized_without_usable_error() {
		assert_eq!(
			RegistrationResponse::from_status(401, ""),
			RegistrationResponse::Unauthorized { error: None }
		);
		assert_eq!(
			RegistrationResponse::from_status(401, r#"{"error": 7}"#),
			RegistrationResponse::Unauthorized { error: None }
		);
	}

	#[test]
	fn empty_unauthorized_error_is_absent() {
		assert_eq!(
			RegistrationResponse::from_status(401, r#"{"error": ""}"#),
			RegistrationResponse::Unauthorized { error: None }
		);
	}

	#[test]
	fn required_fields_match_user_schema() {
		let required: Vec<&str> = USER_FIELDS
			.iter()
			.filter(|field| field.required)
			.map(|field| field.name)
			.collect();
		assert_eq!(required, ["username", "first_name", "password", "email"]);
	}

	#[test]
	fn other_statuses_keep_status_and_body() {
		assert_eq!(
			RegistrationResponse::from_status(500, r#"{"error": "boom"}"#),
			RegistrationResponse::Other {
				status: 500,
				body: Some(serde_json::json!({ "error": "boom" }))
			}
		);
		assert_eq!(
			RegistrationResponse::from_status(403, "error: Username already exists"),
			RegistrationResponse::Other { status: 403, body: None }
		);
	}
}
