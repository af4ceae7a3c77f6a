// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use std::collections::BTreeMap;

/// Input types that never contribute a value when a form is serialized
const EXCLUDED_INPUT_TYPES: [&str; 5] = ["submit", "reset", "button", "image", "file"];

/// A snapshot of a single form control as read from the page
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormControl {
	pub name: String,
	pub value: Option<String>,
	pub input_type: String,
	pub checked: bool,
	pub disabled: bool,
}

impl FormControl {
	/// Whether this control contributes a name/value pair when the form is serialized.
	pub fn is_successful(&self) -> bool {
		if self.name.is_empty() || self.disabled {
			return false;
		}

		let input_type = self.input_type.to_ascii_lowercase();
		if EXCLUDED_INPUT_TYPES.contains(&input_type.as_str()) {
			return false;
		}
		if input_type == "checkbox" || input_type == "radio" {
			return self.checked;
		}
		true
	}
}

/// The flat name-to-value mapping sent as the body of a registration request
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Collects the successful controls of a form. Missing values become empty strings, and a later control with the
	/// same name replaces an earlier one.
	pub fn from_controls(controls: impl IntoIterator<Item = FormControl>) -> Self {
		let mut form_data = Self::new();
		for control in controls {
			if !control.is_successful() {
				continue;
			}
			form_data.insert(control.name, control.value.unwrap_or_default());
		}
		form_data
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(|value| value.as_str())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
