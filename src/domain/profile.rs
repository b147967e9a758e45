use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, normalize_email, normalize_phone_to_e164};

/// Identity document kinds accepted by the profile form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IdType {
    #[serde(rename = "Passport")]
    Passport,
    #[serde(rename = "Driver's License")]
    DriversLicense,
    #[serde(rename = "National ID")]
    NationalId,
}

impl IdType {
    pub const ALL: [IdType; 3] = [IdType::Passport, IdType::DriversLicense, IdType::NationalId];

    /// Returns the label used both on screen and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            IdType::Passport => "Passport",
            IdType::DriversLicense => "Driver's License",
            IdType::NationalId => "National ID",
        }
    }
}

impl Display for IdType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Passport" => Ok(IdType::Passport),
            "Driver's License" => Ok(IdType::DriversLicense),
            "National ID" => Ok(IdType::NationalId),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown id type: {other}"
            ))),
        }
    }
}

/// The signed-in user's profile as held by the backend.
///
/// The portal keeps an editable copy for the duration of a request and
/// overwrites it wholesale on save.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_type: Option<IdType>,
    pub id_number: String,
    /// URL of the stored profile image, when one has been uploaded.
    pub image_url: Option<String>,
}

/// Outbound profile update covering every editable field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateProfile {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_type: Option<IdType>,
    pub id_number: String,
}

impl UpdateProfile {
    /// Normalizes the submitted fields: everything is trimmed, the email
    /// is lower-cased and format-checked when non-empty, and the phone is
    /// normalized to E.164 when non-empty. Empty strings pass through so
    /// a cleared field clears the stored value.
    pub fn new(
        username: String,
        email: String,
        phone: String,
        address: String,
        id_type: Option<IdType>,
        id_number: String,
    ) -> Result<Self, TypeConstraintError> {
        let email = email.trim().to_string();
        let email = if email.is_empty() {
            email
        } else {
            normalize_email(email)?
        };

        let phone = phone.trim().to_string();
        let phone = if phone.is_empty() {
            phone
        } else {
            normalize_phone_to_e164(&phone)?
        };

        Ok(Self {
            username: username.trim().to_string(),
            email,
            phone,
            address: address.trim().to_string(),
            id_type,
            id_number: id_number.trim().to_string(),
        })
    }
}

/// Optional image attached to a profile save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_type_round_trips_through_labels() {
        for id_type in IdType::ALL {
            assert_eq!(id_type.as_str().parse::<IdType>().unwrap(), id_type);
        }
        assert!("Library Card".parse::<IdType>().is_err());
    }

    #[test]
    fn update_normalizes_fields() {
        let update = UpdateProfile::new(
            " Jane Doe ".to_string(),
            " Jane@Example.COM ".to_string(),
            String::new(),
            " 1 Rue de Rivoli ".to_string(),
            Some(IdType::Passport),
            " AB123 ".to_string(),
        )
        .unwrap();

        assert_eq!(update.username, "Jane Doe");
        assert_eq!(update.email, "jane@example.com");
        assert_eq!(update.phone, "");
        assert_eq!(update.address, "1 Rue de Rivoli");
        assert_eq!(update.id_number, "AB123");
    }

    #[test]
    fn update_rejects_malformed_email() {
        let result = UpdateProfile::new(
            "Jane".to_string(),
            "not-an-email".to_string(),
            String::new(),
            String::new(),
            None,
            String::new(),
        );
        assert_eq!(result, Err(TypeConstraintError::InvalidEmail));
    }

    #[test]
    fn update_keeps_empty_fields_empty() {
        let update = UpdateProfile::new(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            None,
            String::new(),
        )
        .unwrap();
        assert_eq!(update.email, "");
        assert_eq!(update.phone, "");
        assert!(update.id_type.is_none());
    }
}
