use std::collections::BTreeMap;

/// Current value of a single tracked input plus its inline error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error_message: Option<String>,
}

/// Every input tracked by a form, keyed by field name.
///
/// Updates are copy-on-write: each operation builds a new `FormState` from the
/// old one with a single entry replaced, so callers holding a previous
/// snapshot can compare it against the new one. Keys are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, FieldState>,
}

impl FormState {
    /// Register `names` as the form's fields, all starting out empty.
    pub fn with_fields<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let fields = names
            .into_iter()
            .map(|name| (name.into(), FieldState::default()))
            .collect();
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }

    pub fn error_message(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|field| field.error_message.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// New state with `name`'s value replaced and its inline error cleared.
    pub fn with_value(&self, name: &str, value: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(
            name.to_owned(),
            FieldState {
                value: value.to_owned(),
                error_message: None,
            },
        );
        Self { fields }
    }

    /// New state with an inline error recorded against `name`, value kept.
    pub fn with_error(&self, name: &str, message: &str) -> Self {
        let mut fields = self.fields.clone();
        let value = self.value(name).unwrap_or_default().to_owned();
        fields.insert(
            name.to_owned(),
            FieldState {
                value,
                error_message: Some(message.to_owned()),
            },
        );
        Self { fields }
    }

    /// New state with every value and error cleared, key set preserved.
    pub fn cleared(&self) -> Self {
        let fields = self
            .fields
            .keys()
            .map(|name| (name.clone(), FieldState::default()))
            .collect();
        Self { fields }
    }
}
