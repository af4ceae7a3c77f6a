// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Identifies one submission of a form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubmissionTicket(u64);

/// Tracks the in-flight submission of a form so that only the latest one can update the page
#[derive(Clone, Debug, Default)]
pub struct SubmissionTracker {
	latest: u64,
	pending: bool,
}

impl SubmissionTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new submission, superseding any that's still in flight.
	pub fn begin(&mut self) -> SubmissionTicket {
		self.latest = self.latest.wrapping_add(1);
		self.pending = true;
		SubmissionTicket(self.latest)
	}

	/// Marks a submission as complete. Returns whether the ticket is still current; completions for stale tickets
	/// should be discarded.
	pub fn finish(&mut self, ticket: SubmissionTicket) -> bool {
		if ticket.0 != self.latest {
			return false;
		}
		self.pending = false;
		true
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pending_until_finished() {
		let mut tracker = SubmissionTracker::new();
		assert!(!tracker.is_pending());

		let ticket = tracker.begin();
		assert!(tracker.is_pending());
		assert!(tracker.finish(ticket));
		assert!(!tracker.is_pending());
	}

	#[test]
	fn stale_completion_is_rejected() {
		let mut tracker = SubmissionTracker::new();
		let first = tracker.begin();
		let second = tracker.begin();

		assert!(!tracker.finish(first));
		assert!(tracker.is_pending());
		assert!(tracker.finish(second));
		assert!(!tracker.is_pending());
	}

	#[test]
	fn tickets_are_distinct() {
		let mut tracker = SubmissionTracker::new();
		assert_ne!(tracker.begin(), tracker.begin());
	}
}
