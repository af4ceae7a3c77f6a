// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pages::register::RegistrationView;
use sycamore::prelude::*;

mod error;
mod form;
mod notice;
mod pages;
mod transport;
mod validation;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

	log::debug!("Rendering registration page");
	sycamore::render(|ctx| {
		view! {
			ctx,
			RegistrationView {}
		}
	});
}
