// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::estimate::estimate_hours;
use crate::pricing::calculate_total;
use crate::steps::{Step, is_step_complete};
use std::collections::BTreeSet;
use suds_domain::{
    BookingDraft, ContactInfo, Extra, Frequency, Pace, ServiceDetails, TimeSlot,
    validate_hours_override,
};
use time::{Date, Duration, OffsetDateTime};

/// Delay between a step's predicate becoming satisfied and the automatic
/// advance to the next step.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::milliseconds(1500);

/// The single scheduled auto-advance, stored as data.
///
/// Holding the deadline instead of an ambient timer keeps the controller
/// deterministic: callers drive it with [`BookingFlow::tick`] and an
/// injected clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    /// The step that was complete when the advance was scheduled.
    pub from_step: Step,
    /// When the advance fires, if the predicate still holds.
    pub deadline: OffsetDateTime,
}

/// What the controller did in response to a draft change or a clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Nothing to report.
    None,
    /// The current step completed; an automatic advance was scheduled.
    AdvanceScheduled {
        /// The step the flow will advance from.
        from_step: Step,
        /// When the advance fires.
        deadline: OffsetDateTime,
    },
    /// A scheduled advance was cancelled before it fired.
    AdvanceCancelled {
        /// The step the cancelled advance was scheduled from.
        step: Step,
    },
    /// A scheduled advance fired and the flow moved to the next step.
    AutoAdvanced {
        /// The step the flow landed on.
        to: Step,
    },
}

/// The booking form state machine.
///
/// Owns the draft, the current step, and at most one pending auto-advance.
/// Every mutating action re-evaluates the current step's completion
/// predicate; a predicate that regresses before the auto-advance deadline
/// cancels the scheduled transition. Manual navigation always takes effect
/// immediately and clears any pending advance.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    draft: BookingDraft,
    current_step: Step,
    auto_advance: bool,
    pending: Option<PendingAdvance>,
    submitting: bool,
}

impl BookingFlow {
    /// Creates a fresh flow positioned on the first step.
    #[must_use]
    pub fn new(auto_advance: bool) -> Self {
        Self {
            draft: BookingDraft::new(),
            current_step: Step::ServiceDetails,
            auto_advance,
            pending: None,
            submitting: false,
        }
    }

    /// Returns the current draft snapshot.
    #[must_use]
    pub const fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns the current step.
    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.current_step
    }

    /// Returns the total number of steps.
    #[must_use]
    pub const fn total_steps(&self) -> u8 {
        Step::COUNT
    }

    /// Returns the pending auto-advance, if one is scheduled.
    #[must_use]
    pub const fn pending_advance(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// Returns whether a submission is currently in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Evaluates a step's completion predicate against the current draft.
    #[must_use]
    pub fn is_step_complete(&self, step: Step) -> bool {
        is_step_complete(&self.draft, step)
    }

    /// Returns whether a manual advance is currently possible.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_step.next().is_some() && self.is_step_complete(self.current_step)
    }

    /// Returns whether going back is currently possible. Back is always
    /// permitted from any step after the first.
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    /// The recommended visit duration for the current draft, or the user's
    /// validated override. `None` until property details exist.
    #[must_use]
    pub fn estimated_hours(&self) -> Option<f64> {
        if let Some(hours) = self.draft.hours_override {
            return Some(hours);
        }
        self.draft
            .details
            .as_ref()
            .map(|details| estimate_hours(details, self.draft.pace))
    }

    /// The live price preview for the current draft.
    ///
    /// `None` until property details exist. A not-yet-chosen frequency is
    /// previewed at the default (one-time) rate rather than failing.
    #[must_use]
    pub fn total_price(&self) -> Option<f64> {
        let hours: f64 = self.estimated_hours()?;
        let frequency: Frequency = self.draft.frequency.unwrap_or_default();
        Some(calculate_total(hours, frequency, &self.draft.extras))
    }

    /// Replaces the property details.
    pub fn set_service_details(
        &mut self,
        details: Option<ServiceDetails>,
        now: OffsetDateTime,
    ) -> FlowEvent {
        self.draft.details = details;
        self.after_change(now)
    }

    /// Sets or clears the booking frequency.
    pub fn set_frequency(&mut self, frequency: Option<Frequency>, now: OffsetDateTime) -> FlowEvent {
        self.draft.frequency = frequency;
        self.after_change(now)
    }

    /// Sets the cleaning pace.
    pub fn set_pace(&mut self, pace: Pace, now: OffsetDateTime) -> FlowEvent {
        self.draft.pace = pace;
        self.after_change(now)
    }

    /// Toggles an extra in or out of the selection.
    pub fn toggle_extra(&mut self, extra: Extra, now: OffsetDateTime) -> FlowEvent {
        self.draft.toggle_extra(extra);
        self.after_change(now)
    }

    /// Replaces the extras selection wholesale.
    pub fn set_extras(&mut self, extras: BTreeSet<Extra>, now: OffsetDateTime) -> FlowEvent {
        self.draft.extras = extras;
        self.after_change(now)
    }

    /// Sets the scheduled date and preferred arrival window.
    pub fn set_schedule(
        &mut self,
        date: Option<Date>,
        time_slot: Option<TimeSlot>,
        now: OffsetDateTime,
    ) -> FlowEvent {
        self.draft.date = date;
        self.draft.time_slot = time_slot;
        self.after_change(now)
    }

    /// Replaces the contact record.
    pub fn set_contact(&mut self, contact: ContactInfo, now: OffsetDateTime) -> FlowEvent {
        self.draft.contact = contact;
        self.after_change(now)
    }

    /// Sets or clears the special instructions.
    pub fn set_special_instructions(
        &mut self,
        instructions: Option<String>,
        now: OffsetDateTime,
    ) -> FlowEvent {
        self.draft.special_instructions = instructions;
        self.after_change(now)
    }

    /// Sets or clears the manual duration override.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the override is outside the
    /// bookable range.
    pub fn set_hours_override(
        &mut self,
        hours: Option<f64>,
        now: OffsetDateTime,
    ) -> Result<FlowEvent, CoreError> {
        if let Some(value) = hours {
            validate_hours_override(value)?;
        }
        self.draft.hours_override = hours;
        Ok(self.after_change(now))
    }

    /// Enables or disables automatic advancing. Disabling cancels any
    /// pending advance.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
        if !enabled {
            self.pending = None;
        }
    }

    /// Advances to the next step if the current step is complete.
    ///
    /// Manual navigation takes effect immediately and clears any pending
    /// auto-advance. Returns whether the flow advanced.
    pub fn go_next(&mut self) -> bool {
        self.pending = None;
        if !self.is_step_complete(self.current_step) {
            return false;
        }
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Goes back one step. Always permitted from any step after the first.
    ///
    /// Clears any pending auto-advance. Returns whether the flow moved.
    pub fn go_back(&mut self) -> bool {
        self.pending = None;
        match self.current_step.previous() {
            Some(previous) => {
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Drives the auto-advance timer with an injected clock value.
    ///
    /// If the pending deadline has elapsed and the originating step is still
    /// current and complete, the flow advances one step. A deadline that
    /// elapses after the situation changed is discarded.
    pub fn tick(&mut self, now: OffsetDateTime) -> FlowEvent {
        let Some(pending) = self.pending else {
            return FlowEvent::None;
        };
        if now < pending.deadline {
            return FlowEvent::None;
        }
        self.pending = None;
        if pending.from_step == self.current_step
            && self.is_step_complete(self.current_step)
            && let Some(next) = self.current_step.next()
        {
            self.current_step = next;
            return FlowEvent::AutoAdvanced { to: next };
        }
        FlowEvent::AdvanceCancelled {
            step: pending.from_step,
        }
    }

    /// Clears the draft and returns to the first step.
    ///
    /// Any pending auto-advance is dropped, so a stale deadline can never
    /// fire into a fresh form.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::new();
        self.current_step = Step::ServiceDetails;
        self.pending = None;
        self.submitting = false;
    }

    /// Marks a submission as in flight.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmissionInFlight` if one already is; callers
    /// use this to disable re-submission while a request is outstanding.
    pub fn begin_submission(&mut self) -> Result<(), CoreError> {
        if self.submitting {
            return Err(CoreError::SubmissionInFlight);
        }
        self.submitting = true;
        Ok(())
    }

    /// Clears the in-flight flag after a submission settles either way.
    pub fn end_submission(&mut self) {
        self.submitting = false;
    }

    /// Re-evaluates the current step after a draft mutation.
    ///
    /// A predicate that regressed cancels the scheduled advance; a newly
    /// satisfied predicate schedules one if auto-advance is on, the step has
    /// a successor, and nothing is already scheduled.
    fn after_change(&mut self, now: OffsetDateTime) -> FlowEvent {
        if !self.is_step_complete(self.current_step) {
            if let Some(pending) = self.pending.take() {
                return FlowEvent::AdvanceCancelled {
                    step: pending.from_step,
                };
            }
            return FlowEvent::None;
        }
        if !self.auto_advance || self.pending.is_some() || self.current_step.next().is_none() {
            return FlowEvent::None;
        }
        let deadline: OffsetDateTime = now + AUTO_ADVANCE_DELAY;
        self.pending = Some(PendingAdvance {
            from_step: self.current_step,
            deadline,
        });
        FlowEvent::AdvanceScheduled {
            from_step: self.current_step,
            deadline,
        }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new(true)
    }
}
