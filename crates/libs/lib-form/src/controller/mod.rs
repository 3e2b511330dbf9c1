//! # Form Controller
//!
//! Owns the resolved element tree and every piece of per-form state, and turns
//! user interaction into page updates:
//!
//! - segment click → [`FormController::select_segment`]
//! - typing in a password input → [`FormController::password_input_changed`]
//! - password toggle click → [`FormController::toggle_password`]
//! - form submit → [`FormController::submit`]
//!
//! Work that has to wait for the next animation frame is queued and applied by
//! [`FormController::run_frame`].

use crate::config::{FormConfig, SwitchClearing};
use crate::error::{FormError, Result};
use crate::frame::{FrameQueue, FrameTask};
use crate::host::FormHost;
use crate::password::{PasswordField, PasswordFieldState, PasswordVisibilityController, ToggleAppearance};
use crate::presenter::ErrorPresenter;
use crate::segment::{Segment, SegmentController};
use crate::selectors::{FieldHandle, FormHandles, Resolve, Resolver};
use crate::validation::{validate_form, FieldKey, FormSnapshot, ValidationOutcome};


/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed and the success callback ran.
    Accepted,
    /// Errors are on screen; nothing else happened.
    Rejected(ValidationOutcome),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

pub struct FormController<H: FormHost> {
    host: H,
    config: FormConfig,
    handles: FormHandles<H::Element>,
    segments: SegmentController,
    passwords: PasswordVisibilityController,
    presenter: ErrorPresenter,
    frames: FrameQueue<H::Element>,
    on_success: Box<dyn FnMut()>,
}

impl<H: FormHost> FormController<H> {
    /// Find the root, resolve every element once and put the form in its
    /// initial state (email segment, email input focused).
    ///
    /// # Errors
    ///
    /// - [`FormError::Config`] if `config` fails validation
    /// - [`FormError::RootNotFound`] if the root selector matches nothing
    ///
    /// Any other missing element is logged and only disables the feature that
    /// needs it.
    pub fn attach(host: H, config: FormConfig, on_success: impl FnMut() + 'static) -> Result<Self> {
        config.validate()?;

        let root = host.find_root(&config.selectors.root).ok_or_else(|| {
            tracing::error!("[Form] Root element not found.");
            FormError::RootNotFound(config.selectors.root.clone())
        })?;

        let (handles, missing) = {
            let mut resolver = Resolver::new(&host, &root);
            let handles = config.selectors.resolve(&mut resolver);
            (handles, resolver.missing().len())
        };
        if missing > 0 {
            tracing::warn!("[Form] {} element(s) missing, affected features disabled", missing);
        }

        let mut controller = Self {
            presenter: ErrorPresenter::from_config(&config),
            host,
            config,
            handles,
            segments: SegmentController::new(),
            passwords: PasswordVisibilityController::new(),
            frames: FrameQueue::default(),
            on_success: Box::new(on_success),
        };

        controller.render_segment(controller.segments.active());
        for field in PasswordField::ALL {
            controller.password_input_changed(field);
        }
        controller.set_initial_focus();

        tracing::info!("[Form] Controller attached");
        Ok(controller)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn handles(&self) -> &FormHandles<H::Element> {
        &self.handles
    }

    pub fn active_segment(&self) -> Segment {
        self.segments.active()
    }

    pub fn password_state(&self, field: PasswordField) -> PasswordFieldState {
        self.passwords.state(field)
    }

    /// Password fields whose input, toggle and icon were all found.
    pub fn password_toggles(&self) -> Vec<PasswordField> {
        PasswordField::ALL
            .into_iter()
            .filter(|field| Self::toggle_parts(self.handles.fields.password_field(*field)).is_some())
            .collect()
    }

    // ========================================================================
    // SEGMENTS
    // ========================================================================

    /// Activate `segment`. Returns `false` (and does nothing) if it already is.
    pub fn select_segment(&mut self, segment: Segment) -> bool {
        let Some(change) = self.segments.select(segment) else {
            return false;
        };

        self.render_segment(change.to);

        match self.config.switch_clearing {
            SwitchClearing::HiddenOnly => self.presenter.clear_hidden(&self.host, &self.handles.fields),
            SwitchClearing::All => self.presenter.clear_all(&self.host, &self.handles.fields),
        }

        if let Some(input) = &self.handles.fields.identifier(change.to).input {
            self.frames.push(FrameTask::Focus(input.clone()));
        }

        true
    }

    /// Move the active marker and show exactly the identifier field of `active`.
    fn render_segment(&self, active: Segment) {
        let classes = &self.config.classes;

        for (segment, shown) in [(active, true), (active.other(), false)] {
            if let Some(option) = self.handles.segment_option(segment) {
                self.host.set_class(option, &classes.segment_active, shown);
            }
            if let Some(group) = &self.handles.fields.identifier(segment).field {
                self.host.set_class(group, &classes.visually_hidden, !shown);
            }
        }
    }

    fn set_initial_focus(&self) {
        if let Some(input) = &self.handles.fields.email.input {
            self.host.focus(input);
        }
    }

    // ========================================================================
    // PASSWORD VISIBILITY
    // ========================================================================

    fn toggle_parts(field: &FieldHandle<H::Element>) -> Option<(&H::Element, &H::Element, &H::Element)> {
        Some((field.input.as_ref()?, field.toggle.as_ref()?, field.toggle_icon.as_ref()?))
    }

    /// Show the toggle control only while the input has non-blank content.
    pub fn password_input_changed(&mut self, field: PasswordField) {
        let handle = self.handles.fields.password_field(field);
        let (Some(input), Some(toggle)) = (&handle.input, &handle.toggle) else {
            return;
        };

        let visible = PasswordVisibilityController::toggle_visible_for(&self.host.value(input));
        self.host
            .set_class(toggle, &self.config.classes.visually_hidden, !visible);
    }

    /// Flip between obscured and visible.
    ///
    /// The selection is captured before the input kind changes and restored on
    /// the next frame. Returns `None` if the field's toggle is not wired.
    pub fn toggle_password(&mut self, field: PasswordField) -> Option<PasswordFieldState> {
        let Some((input, toggle, icon)) = Self::toggle_parts(self.handles.fields.password_field(field)) else {
            tracing::warn!("[Form] Password toggle for {:?} is not wired", field);
            return None;
        };

        let selection = self.host.selection(input);
        let state = self.passwords.toggle(field);
        let appearance = ToggleAppearance::for_state(state, &self.config);

        self.host.set_input_kind(input, appearance.input_kind);
        if let Some(range) = selection {
            self.frames.push(FrameTask::RestoreSelection {
                input: input.clone(),
                range,
            });
        }

        self.host.set_image_source(icon, appearance.icon);
        self.host.set_attribute(toggle, "aria-label", appearance.label);
        self.host.set_attribute(toggle, "title", appearance.label);

        Some(state)
    }

    // ========================================================================
    // SUBMIT
    // ========================================================================

    fn input_value(&self, key: FieldKey) -> String {
        self.handles
            .fields
            .get(key)
            .input
            .as_ref()
            .map(|input| self.host.value(input))
            .unwrap_or_default()
    }

    /// Validate the current values and render the result.
    ///
    /// The host is expected to have cancelled the native submission already.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.presenter.clear_all(&self.host, &self.handles.fields);

        let email = self.input_value(FieldKey::Email);
        let phone = self.input_value(FieldKey::Phone);
        let password = self.input_value(FieldKey::Password);
        let confirm_password = self.input_value(FieldKey::ConfirmPassword);

        let outcome = validate_form(&FormSnapshot {
            segment: self.segments.active(),
            email: &email,
            phone: &phone,
            password: &password,
            confirm_password: &confirm_password,
        });

        for (key, message) in outcome.iter() {
            self.presenter.show(&self.host, self.handles.fields.get(key), message);
        }

        if outcome.is_valid() {
            tracing::info!("[Form] Submission accepted");
            (self.on_success)();
            SubmitOutcome::Accepted
        } else {
            tracing::debug!("[Form] Submission rejected with {} error(s)", outcome.error_count());
            SubmitOutcome::Rejected(outcome)
        }
    }

    // ========================================================================
    // FRAMES
    // ========================================================================

    pub fn pending_frame_tasks(&self) -> &[FrameTask<H::Element>] {
        self.frames.tasks()
    }

    /// `true` when the host should schedule a frame for queued work.
    pub fn take_frame_request(&mut self) -> bool {
        self.frames.take_request()
    }

    /// Apply everything queued for this frame.
    pub fn run_frame(&mut self) {
        for task in self.frames.drain() {
            task.apply(&self.host);
        }
    }
}
