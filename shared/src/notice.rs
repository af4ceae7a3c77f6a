// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::user_register::RegistrationResponse;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "The password and confirm password must be the same.";
pub const USER_CREATED_MESSAGE: &str = "The user has been created, verify the email confirmation.";

/// The kind of outcome a notice communicates, which drives how it's styled
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NoticeCategory {
	Success,
	Alert,
	Error,
	#[default]
	Invisible,
}

impl NoticeCategory {
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Alert => "alert",
			Self::Error => "error",
			Self::Invisible => "invisible",
		}
	}
}

/// The page-level status banner
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Notice {
	pub category: NoticeCategory,
	pub heading: String,
	pub message: String,
}

impl Notice {
	pub fn new(category: NoticeCategory, heading: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			category,
			heading: heading.into(),
			message: message.into(),
		}
	}

	pub fn cleared() -> Self {
		Self::default()
	}

	pub fn password_mismatch() -> Self {
		Self::new(NoticeCategory::Alert, "Warning", PASSWORD_MISMATCH_MESSAGE)
	}

	pub fn user_created() -> Self {
		Self::new(NoticeCategory::Success, "Success", USER_CREATED_MESSAGE)
	}

	pub fn unauthorized(error: &str) -> Self {
		Self::new(NoticeCategory::Error, "Error", error)
	}

	/// Gets the notice to show for a server response, if that response has any visible feedback.
	pub fn for_response(response: &RegistrationResponse) -> Option<Self> {
		match response {
			RegistrationResponse::Created => Some(Self::user_created()),
			RegistrationResponse::Unauthorized { error: Some(error) } => Some(Self::unauthorized(error)),
			RegistrationResponse::Unauthorized { error: None } | RegistrationResponse::Other { .. } => None,
		}
	}
}
