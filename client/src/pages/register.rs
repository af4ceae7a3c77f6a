// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmitError;
use crate::form::serialize_form;
use crate::notice::NoticeBanner;
use crate::transport::{register_user, registration_endpoint};
use crate::validation::validate_password;
use napps_register_shared::messages::form::FormData;
use napps_register_shared::messages::user_register::{RegistrationResponse, UserField, USER_FIELDS};
use napps_register_shared::notice::Notice;
use napps_register_shared::submission::{SubmissionTicket, SubmissionTracker};
use napps_register_shared::validation::CONFIRM_PASSWORD_FIELD;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::{Event as WebEvent, HtmlFormElement};

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let notice_signal = create_signal(ctx, Notice::cleared());
	let tracker_signal = create_signal(ctx, SubmissionTracker::new());
	let submit_pending_signal = create_memo(ctx, || tracker_signal.get().is_pending());
	let form_ref = create_node_ref(ctx);

	let confirm_password_blur_handler = move |_event: WebEvent| {
		if let Some(form) = form_element(form_ref) {
			validate_password(&form, notice_signal);
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let Some(form) = form_element(form_ref) else {
			return;
		};
		let Some((ticket, form_data)) = begin_submission(&form, notice_signal, tracker_signal) else {
			return;
		};

		spawn_local_scoped(ctx, async move {
			let result = match registration_endpoint() {
				Ok(endpoint) => register_user(&endpoint, &form_data).await,
				Err(error) => Err(error),
			};
			complete_submission(tracker_signal, ticket, result, notice_signal, &form);
		});
	};

	let field_views = View::new_fragment(
		USER_FIELDS
			.iter()
			.map(|field| {
				let label_text = field.label();
				let UserField {
					name,
					input_type,
					required,
				} = *field;
				let input_id = format!("user_form_{}", name);
				let input_id_for = input_id.clone();
				if name == CONFIRM_PASSWORD_FIELD {
					view! {
						ctx,
						div(class="user_form_field") {
							label(for=input_id_for) { (label_text) }
							input(
								id=input_id,
								type=input_type,
								name=name,
								required=required,
								on:blur=confirm_password_blur_handler
							)
						}
					}
				} else {
					view! {
						ctx,
						div(class="user_form_field") {
							label(for=input_id_for) { (label_text) }
							input(id=input_id, type=input_type, name=name, required=required)
						}
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		h1 { "Register a NApps Account" }
		NoticeBanner(notice=notice_signal)
		form(id="user_form", ref=form_ref, on:submit=form_submission_handler) {
			(field_views)
			div(class="user_form_actions") {
				button(type="submit", disabled=*submit_pending_signal.get()) { "Register" }
				input(type="reset", value="Clear")
			}
		}
	}
}

fn form_element<G: Html>(form_ref: &NodeRef<G>) -> Option<HtmlFormElement> {
	let form_node: DomNode = form_ref.try_get()?;
	Some(form_node.unchecked_into())
}

/// Serializes and validates the form, clearing the notice first. Returns the ticket and data for the request to
/// send, or nothing when the passwords don't match.
fn begin_submission(
	form: &HtmlFormElement,
	notice: &Signal<Notice>,
	tracker: &Signal<SubmissionTracker>,
) -> Option<(SubmissionTicket, FormData)> {
	let form_data = serialize_form(form);
	notice.set(Notice::cleared());
	if !validate_password(form, notice) {
		return None;
	}

	let ticket = tracker.modify().begin();
	log::debug!("Submitting registration form with {} fields", form_data.len());
	Some((ticket, form_data))
}

fn complete_submission(
	tracker: &Signal<SubmissionTracker>,
	ticket: SubmissionTicket,
	result: Result<RegistrationResponse, SubmitError>,
	notice: &Signal<Notice>,
	form: &HtmlFormElement,
) {
	if !tracker.modify().finish(ticket) {
		log::debug!("Discarding the response to a superseded registration submission");
		return;
	}
	handle_result(result, notice, form);
}

/// Updates the page once a registration request settles, regardless of its outcome.
fn handle_result(result: Result<RegistrationResponse, SubmitError>, notice: &Signal<Notice>, form: &HtmlFormElement) {
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			log::warn!("Registration request did not complete: {}", error);
			return;
		}
	};

	match Notice::for_response(&response) {
		Some(response_notice) => {
			log::info!("Registration response: {:?}", response_notice.category);
			notice.set(response_notice);
		}
		None => log::warn!("No feedback available for registration response {:?}", response),
	}

	if response.resets_form() {
		form.reset();
	}
}
