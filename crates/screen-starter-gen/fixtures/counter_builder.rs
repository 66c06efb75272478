//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `crate::tests::screens::Counter` in `crate::tests::screens`
//! Source: fixtures/screens.json
//! Generated by `screen-starter-gen` v0.1.0

#![allow(clippy::collapsible_if)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::too_many_arguments)]
#![allow(dead_code)]
#![allow(unused_variables)]
use screen_starter_support::{Context, Extras, ExtrasError, LaunchFlags, Payload, Screen};
/// Builds and starts a payload for [`crate::tests::screens::Counter`].
pub struct CounterBuilder {
    step: Option<i64>,
}
impl CounterBuilder {
    pub const STEP: &'static str = "step";
    pub fn builder() -> Self {
        Self { step: Some(10) }
    }
    pub fn step(mut self, step: Option<i64>) -> Self {
        self.step = step;
        self
    }
    /// Encodes every field into a payload targeting the screen.
    pub fn payload(&self) -> Result<Payload, ExtrasError> {
        let mut payload = Payload::for_screen::<crate::tests::screens::Counter>();
        if let Some(value) = &self.step {
            payload.put_extra(Self::STEP, value)?;
        }
        Ok(payload)
    }
    /// Reads the payload fields back into `instance` when it is the target screen.
    ///
    /// Absent keys take the field's default.
    pub fn inject(instance: &mut dyn Screen, state: Option<&Extras>) {
        if let Some(typed) = instance
            .as_any_mut()
            .downcast_mut::<crate::tests::screens::Counter>()
        {
            if let Some(state) = state {
                typed.step = state.get::<i64>(Self::STEP).or_else(|| Some(10));
            }
        }
    }
    /// Writes the screen's current field values into `out_state`.
    pub fn save_state(
        instance: &dyn Screen,
        out_state: &mut Extras,
    ) -> Result<(), ExtrasError> {
        if let Some(typed) = instance
            .as_any()
            .downcast_ref::<crate::tests::screens::Counter>()
        {
            if let Some(value) = &typed.step {
                out_state.put(Self::STEP, value)?;
            }
        }
        Ok(())
    }
    /// Remembers `payload` on the screen and decodes it.
    pub fn process_new_payload(
        screen: &mut crate::tests::screens::Counter,
        payload: Option<Payload>,
    ) {
        Self::process_new_payload_with_update(screen, payload, true);
    }
    /// Remembers `payload` only when `update` is set; decodes it when present.
    pub fn process_new_payload_with_update(
        screen: &mut crate::tests::screens::Counter,
        payload: Option<Payload>,
        update: bool,
    ) {
        let extras = payload.as_ref().map(|payload| payload.extras().clone());
        if update {
            screen.set_payload(payload);
        }
        if let Some(extras) = extras {
            Self::inject(screen, Some(&extras));
        }
    }
    pub fn start(&self, context: &dyn Context) -> Result<(), ExtrasError> {
        self.start_with_options(context, None)
    }
    pub fn start_with_options(
        &self,
        context: &dyn Context,
        options: Option<&Extras>,
    ) -> Result<(), ExtrasError> {
        let mut payload = self.payload()?;
        if !context.is_screen() {
            payload.add_flags(LaunchFlags::NEW_TASK);
        }
        context.start_screen(payload, options);
        Ok(())
    }
    pub fn start_for_result(
        &self,
        screen: &dyn Screen,
        request_code: i32,
    ) -> Result<(), ExtrasError> {
        self.start_for_result_with_options(screen, request_code, None)
    }
    pub fn start_for_result_with_options(
        &self,
        screen: &dyn Screen,
        request_code: i32,
        options: Option<&Extras>,
    ) -> Result<(), ExtrasError> {
        let mut payload = self.payload()?;
        if !screen.is_screen() {
            payload.add_flags(LaunchFlags::NEW_TASK);
        }
        screen.start_screen_for_result(payload, request_code, options);
        Ok(())
    }
}
