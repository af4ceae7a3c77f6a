// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use napps_register_shared::messages::form::{FormControl, FormData};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Reads the current values of all of a form's controls.
pub fn serialize_form(form: &HtmlFormElement) -> FormData {
	let elements = form.elements();
	let controls = (0..elements.length())
		.filter_map(|index| elements.item(index))
		.filter_map(|element| form_control(&element));
	FormData::from_controls(controls)
}

fn form_control(element: &Element) -> Option<FormControl> {
	// Also matches controls inside a disabled fieldset
	let disabled = element.matches(":disabled").unwrap_or(false);
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		return Some(FormControl {
			name: input.name(),
			value: Some(input.value()),
			input_type: input.type_(),
			checked: input.checked(),
			disabled,
		});
	}
	if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
		return Some(FormControl {
			name: select.name(),
			value: Some(select.value()),
			input_type: select.type_(),
			checked: false,
			disabled,
		});
	}
	if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
		return Some(FormControl {
			name: text_area.name(),
			value: Some(text_area.value()),
			input_type: text_area.type_(),
			checked: false,
			disabled,
		});
	}
	None
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use super::*;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn build_form(inner_html: &str) -> HtmlFormElement {
		let document = web_sys::window().unwrap().document().unwrap();
		let form: HtmlFormElement = document.create_element("form").unwrap().unchecked_into();
		form.set_inner_html(inner_html);
		form
	}

	#[wasm_bindgen_test]
	fn serializes_named_inputs() {
		let form = build_form(
			r#"<input name="username" value="kytos">
			<input name="phone" value="">
			<input value="unnamed">
			<textarea name="bio">hello</textarea>
			<input type="submit" name="go" value="Register">
			<input type="reset" value="Clear">"#,
		);

		let form_data = serialize_form(&form);
		assert_eq!(form_data.len(), 3);
		assert_eq!(form_data.get("username"), Some("kytos"));
		assert_eq!(form_data.get("phone"), Some(""));
		assert_eq!(form_data.get("bio"), Some("hello"));
	}

	#[wasm_bindgen_test]
	fn skips_controls_in_disabled_fieldset() {
		let form = build_form(
			r#"<fieldset disabled><input name="city" value="Natal"></fieldset>
			<input name="country" value="BR">
			<input name="state" value="RN" disabled>"#,
		);

		let form_data = serialize_form(&form);
		assert_eq!(form_data.len(), 1);
		assert_eq!(form_data.get("country"), Some("BR"));
	}
}
