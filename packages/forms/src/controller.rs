//! # Form controller — explicit field state
//!
//! Holds the current model and the current error map for one form. All
//! mutation goes through [`FieldEvent`]s handed to [`FormController::apply`]
//! or through [`FormController::submit`]; there is no two-way binding.
//!
//! Before the first submit attempt, edits never produce errors. After it,
//! and when `revalidate_on_change` is set, every edit re-checks the edited
//! field (and any field whose [`Rule::Equals`](crate::schema::Rule::Equals)
//! points at it) so errors clear as soon as the input is fixed.

use crate::models::FormModel;
use crate::schema::{FormSchema, Rule, ValidationErrors};

/// A discrete input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Input { field: String, value: String },
    Toggle { field: String, checked: bool },
}

impl FieldEvent {
    pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn toggle(field: impl Into<String>, checked: bool) -> Self {
        Self::Toggle {
            field: field.into(),
            checked,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Input { field, .. } | Self::Toggle { field, .. } => field,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormController<M: FormModel> {
    schema: FormSchema,
    values: M,
    errors: ValidationErrors,
    attempted: bool,
    revalidate_on_change: bool,
}

impl<M: FormModel> FormController<M> {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: M::default(),
            errors: ValidationErrors::default(),
            attempted: false,
            revalidate_on_change: true,
        }
    }

    pub fn with_revalidate_on_change(mut self, enabled: bool) -> Self {
        self.revalidate_on_change = enabled;
        self
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether a submit has been attempted since construction or the last reset.
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Apply one event. Returns `false` if the model has no such field.
    pub fn apply(&mut self, event: FieldEvent) -> bool {
        let accepted = match &event {
            FieldEvent::Input { field, value } => self.values.set_text(field, value.clone()),
            FieldEvent::Toggle { field, checked } => self.values.set_flag(field, *checked),
        };
        if !accepted {
            tracing::debug!(field = event.field(), "ignoring event for unknown field");
            return false;
        }
        if self.attempted && self.revalidate_on_change {
            self.revalidate_around(event.field());
        }
        true
    }

    pub fn input(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.apply(FieldEvent::input(field, value))
    }

    pub fn toggle(&mut self, field: &str, checked: bool) -> bool {
        self.apply(FieldEvent::toggle(field, checked))
    }

    /// Validate everything. On success, returns a snapshot of the values to
    /// submit, with trimmed fields already trimmed. The displayed values are
    /// left as typed.
    pub fn submit(&mut self) -> Result<M, ValidationErrors> {
        self.attempted = true;
        self.errors = self.schema.validate(&self.values);
        if self.errors.is_empty() {
            let mut payload = self.values.clone();
            self.schema.normalize(&mut payload);
            Ok(payload)
        } else {
            tracing::debug!(fields = ?self.errors.fields(), "submission blocked by validation");
            Err(self.errors.clone())
        }
    }

    pub fn reset(&mut self) {
        self.values = M::default();
        self.errors = ValidationErrors::default();
        self.attempted = false;
    }

    fn revalidate_around(&mut self, changed: &str) {
        let dependents: Vec<&'static str> = self
            .schema
            .fields
            .iter()
            .filter(|f| {
                f.name == changed
                    || f.rules
                        .iter()
                        .any(|r| matches!(r, Rule::Equals { other, .. } if *other == changed))
            })
            .map(|f| f.name)
            .collect();

        for name in dependents {
            let Some(field) = self.schema.field(name) else {
                continue;
            };
            match field.first_violation(&self.values).map(str::to_string) {
                Some(message) => self.errors.insert(name, message),
                None => self.errors.remove(name),
            }
        }
    }
}
