//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `crate::tests::screens::Detail` in `crate::tests::screens`
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
/// Builds and starts a payload for [`crate::tests::screens::Detail`].
pub struct DetailBuilder {
    id: i32,
    tag: Option<String>,
    page: u32,
    score: f64,
    labels: Option<Vec<String>>,
    owner: Option<crate::tests::screens::Owner>,
    count: i32,
}
impl DetailBuilder {
    pub const ID: &'static str = "id";
    pub const TAG: &'static str = "tag";
    pub const PAGE: &'static str = "page";
    pub const SCORE: &'static str = "score";
    pub const LABELS: &'static str = "labels";
    pub const OWNER: &'static str = "owner";
    pub const COUNT: &'static str = "count";
    pub fn builder(
        id: i32,
        score: f64,
        labels: Option<Vec<String>>,
        owner: Option<crate::tests::screens::Owner>,
        count: i32,
    ) -> Self {
        Self {
            id,
            score,
            labels,
            owner,
            count,
            tag: Some(String::from("none")),
            page: 1,
        }
    }
    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
    /// Encodes every field into a payload targeting the screen.
    pub fn payload(&self) -> Result<Payload, ExtrasError> {
        let mut payload = Payload::for_screen::<crate::tests::screens::Detail>();
        payload.put_extra(Self::ID, &self.id)?;
        if let Some(value) = &self.tag {
            payload.put_extra(Self::TAG, value)?;
        }
        payload.put_extra(Self::PAGE, &self.page)?;
        payload.put_extra(Self::SCORE, &self.score)?;
        if let Some(value) = &self.labels {
            payload.put_extra(Self::LABELS, value)?;
        }
        if let Some(value) = &self.owner {
            payload.put_extra(Self::OWNER, value)?;
        }
        payload.put_extra(Self::COUNT, &self.count)?;
        Ok(payload)
    }
    /// Reads the payload fields back into `instance` when it is the target screen.
    ///
    /// Absent keys take the field's default.
    pub fn inject(instance: &mut dyn Screen, state: Option<&Extras>) {
        if let Some(typed) = instance
            .as_any_mut()
            .downcast_mut::<crate::tests::screens::Detail>()
        {
            if let Some(state) = state {
                typed.id = state.get_or::<i32>(Self::ID, 0);
                typed.tag = state
                    .get::<String>(Self::TAG)
                    .or_else(|| Some(String::from("none")));
                typed.page = state.get_or::<u32>(Self::PAGE, 1);
                typed.score = state.get_or::<f64>(Self::SCORE, 0.0);
                typed.labels = state.get::<Vec<String>>(Self::LABELS);
                typed.owner = state.get::<crate::tests::screens::Owner>(Self::OWNER);
                typed.set_count(state.get_or::<i32>(Self::COUNT, 0));
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
            .downcast_ref::<crate::tests::screens::Detail>()
        {
            out_state.put(Self::ID, &typed.id)?;
            if let Some(value) = &typed.tag {
                out_state.put(Self::TAG, value)?;
            }
            out_state.put(Self::PAGE, &typed.page)?;
            out_state.put(Self::SCORE, &typed.score)?;
            if let Some(value) = &typed.labels {
                out_state.put(Self::LABELS, value)?;
            }
            if let Some(value) = &typed.owner {
                out_state.put(Self::OWNER, value)?;
            }
            out_state.put(Self::COUNT, &typed.count())?;
        }
        Ok(())
    }
    /// Remembers `payload` on the screen and decodes it.
    pub fn process_new_payload(
        screen: &mut crate::tests::screens::Detail,
        payload: Option<Payload>,
    ) {
        Self::process_new_payload_with_update(screen, payload, true);
    }
    /// Remembers `payload` only when `update` is set; decodes it when present.
    pub fn process_new_payload_with_update(
        screen: &mut crate::tests::screens::Detail,
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
