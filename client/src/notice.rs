// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use napps_register_shared::notice::Notice;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct NoticeBannerProps<'a> {
	notice: &'a ReadSignal<Notice>,
}

#[component]
pub fn NoticeBanner<'a, G: Html>(ctx: Scope<'a>, props: NoticeBannerProps<'a>) -> View<G> {
	let class_signal = create_memo(ctx, || props.notice.get().category.css_class());
	let heading_signal = create_memo(ctx, || props.notice.get().heading.clone());
	let message_signal = create_memo(ctx, || props.notice.get().message.clone());

	view! {
		ctx,
		div(id="notice", class=*class_signal.get()) {
			strong { (*heading_signal.get()) }
			" "
			span(class="message") { (*message_signal.get()) }
		}
	}
}
