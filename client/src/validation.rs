// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use napps_register_shared::notice::Notice;
use napps_register_shared::validation::{check_passwords, CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD};
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

/// Checks that the password and confirmation fields currently in the form hold the same value, and updates the notice
/// to match the outcome. Returns whether the passwords match.
pub fn validate_password(form: &HtmlFormElement, notice: &Signal<Notice>) -> bool {
	let password = input_value(form, PASSWORD_FIELD);
	let confirm_password = input_value(form, CONFIRM_PASSWORD_FIELD);

	let check = check_passwords(&password, &confirm_password);
	log::debug!("Password confirmation check: {:?}", check);
	notice.set(check.notice());
	check.is_match()
}

/// Reads the value of a named input, treating a missing input as empty
fn input_value(form: &HtmlFormElement, name: &str) -> String {
	form.query_selector(&format!("input[name={}]", name))
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
		.map(|input| input.value())
		.unwrap_or_default()
}
