//! Structured vCard values.

/// Structured name (N property, vCard 2.1).
///
/// Only the three slots a roster name can fill; the honorific prefix
/// and suffix positions stay empty in the serialized value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name.
    pub given: String,
    /// Additional (middle) names, space-joined.
    pub additional: String,
}

impl StructuredName {
    /// Splits a display name into N components: first part → family,
    /// second part → given, the remaining parts → additional.
    #[must_use]
    pub fn from_display_name(name: &str) -> Self {
        let mut parts = name.split_whitespace();
        let family = parts.next().unwrap_or_default().to_string();
        let given = parts.next().unwrap_or_default().to_string();
        let additional = parts.collect::<Vec<_>>().join(" ");

        Self {
            family,
            given,
            additional,
        }
    }

    /// Serializes as the N property value, `family;given;additional;;`.
    #[must_use]
    pub fn to_field_value(&self) -> String {
        format!("{};{};{};;", self.family, self.given, self.additional)
    }
}
