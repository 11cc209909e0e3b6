/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Fluent construction of messages.
//!
//! Decoded messages are built by the external decoder; this builder exists
//! for tests, demos, and constructed test traffic. Duplicate identities are
//! detected eagerly and reported when the message is finished.

use crate::field::Field;
use crate::field_set::FieldSet;
use crate::Message;
use fastwire_core::{FieldIdentity, ModelError};

/// Builds a [`Message`] field by field.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: FieldSet,
    error: Option<ModelError>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field under an unqualified identity.
    #[must_use]
    pub fn field(self, local_name: impl Into<String>, field: Field) -> Self {
        self.identified_field(FieldIdentity::new(local_name), field)
    }

    /// Adds a field under an explicit identity.
    #[must_use]
    pub fn identified_field(mut self, identity: FieldIdentity, field: Field) -> Self {
        if self.error.is_none()
            && let Err(err) = self.message.add_field(identity, field)
        {
            self.error = Some(err);
        }
        self
    }

    /// Sets the application type declared by the template's typeref.
    #[must_use]
    pub fn application_type(mut self, app_type: impl Into<String>, ns: impl Into<String>) -> Self {
        self.message.set_application_type(app_type, ns);
        self
    }

    /// Finishes the message.
    ///
    /// # Errors
    /// Returns the first `ModelError::DuplicateIdentity` hit while adding
    /// fields.
    pub fn build(self) -> Result<Message, ModelError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastwire_core::Decimal;

    #[test]
    fn test_build_in_order() {
        let message = MessageBuilder::new()
            .field("MDUpdateAction", Field::UInt32(2))
            .field("MDEntryType", Field::Ascii("0".to_string()))
            .field("MDEntryPx", Field::Decimal(Decimal::new(196875, -5)))
            .build()
            .unwrap();
        assert_eq!(message.len(), 3);
        let names: Vec<&str> = message.iter().map(|(id, _)| id.local_name()).collect();
        assert_eq!(names, ["MDUpdateAction", "MDEntryType", "MDEntryPx"]);
    }

    #[test]
    fn test_build_reports_duplicate() {
        let result = MessageBuilder::new()
            .field("Symbol", Field::Ascii("EUR".to_string()))
            .field("Symbol", Field::Ascii("USD".to_string()))
            .build();
        assert!(matches!(
            result,
            Err(ModelError::DuplicateIdentity { name }) if name == "Symbol"
        ));
    }
}
