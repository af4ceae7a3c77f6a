// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::notice::Notice;

pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirm_password";

/// Outcome of comparing the password with its confirmation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasswordCheck {
	Match,
	Mismatch,
}

impl PasswordCheck {
	pub fn is_match(self) -> bool {
		self == Self::Match
	}

	/// The notice state the page should show after this check
	pub fn notice(self) -> Notice {
		match self {
			Self::Match => Notice::cleared(),
			Self::Mismatch => Notice::password_mismatch(),
		}
	}
}

/// Compares the two passwords exactly; two empty values match.
pub fn check_passwords(password: &str, confirm_password: &str) -> PasswordCheck {
	if password == confirm_password {
		PasswordCheck::Match
	} else {
		PasswordCheck::Mismatch
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::notice::{NoticeCategory, PASSWORD_MISMATCH_MESSAGE};

	#[test]
	fn identical_passwords_match() {
		let check = check_passwords("secret", "secret");
		assert!(check.is_match());
		assert_eq!(check.notice(), Notice::cleared());
	}

	#[test]
	fn empty_passwords_match() {
		assert!(check_passwords("", "").is_match());
	}

	#[test]
	fn different_passwords_raise_alert() {
		let check = check_passwords("abc", "abd");
		assert!(!check.is_match());

		let notice = check.notice();
		assert_eq!(notice.category, NoticeCategory::Alert);
		assert_eq!(notice.heading, "Warning");
		assert_eq!(notice.message, PASSWORD_MISMATCH_MESSAGE);
	}

	#[test]
	fn comparison_is_exact() {
		assert!(!check_passwords("Secret", "secret").is_match());
		assert!(!check_passwords("secret ", "secret").is_match());
		assert!(!check_passwords("secret", "").is_match());
	}
}
