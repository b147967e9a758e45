use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;

use crate::domain::profile::{ImageUpload, UpdateProfile};
use crate::forms::FormError;

/// Multipart form submitted by the profile editor. Every editable field
/// is present on each save; the image part is optional.
#[derive(MultipartForm)]
pub struct SaveProfileForm {
    /// Backend identifier of the profile being saved.
    pub id: Text<String>,
    pub username: Text<String>,
    pub email: Text<String>,
    pub phone: Text<String>,
    pub address: Text<String>,
    #[multipart(rename = "idType")]
    pub id_type: Text<String>,
    #[multipart(rename = "idNumber")]
    pub id_number: Text<String>,
    #[multipart(rename = "img", limit = "10MB")]
    pub image: Option<TempFile>,
}

impl SaveProfileForm {
    /// Convert the submitted fields into a normalized [`UpdateProfile`].
    pub fn to_update(&self) -> Result<UpdateProfile, FormError> {
        let id_type = match self.id_type.trim() {
            "" => None,
            label => Some(label.parse().map_err(|_| FormError::InvalidIdType)?),
        };

        UpdateProfile::new(
            self.username.0.clone(),
            self.email.0.clone(),
            self.phone.0.clone(),
            self.address.0.clone(),
            id_type,
            self.id_number.0.clone(),
        )
        .map_err(FormError::from)
    }

    /// Read the uploaded image into memory, if one was attached.
    pub fn read_image(&self) -> Result<Option<ImageUpload>, FormError> {
        let Some(file) = &self.image else {
            return Ok(None);
        };
        if file.size == 0 {
            return Ok(None);
        }

        let bytes =
            std::fs::read(file.file.path()).map_err(|err| FormError::Upload(err.to_string()))?;

        Ok(Some(ImageUpload {
            bytes,
            file_name: file.file_name.clone(),
            content_type: file.content_type.as_ref().map(|mime| mime.to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::profile::IdType;

    fn text_form(id_type: &str) -> SaveProfileForm {
        SaveProfileForm {
            id: Text("64f1ab9e".to_string()),
            username: Text(" Jane Doe ".to_string()),
            email: Text("Jane@Example.com".to_string()),
            phone: Text(String::new()),
            address: Text("1 Rue de Rivoli".to_string()),
            id_type: Text(id_type.to_string()),
            id_number: Text("AB123".to_string()),
            image: None,
        }
    }

    #[test]
    fn converts_fields_into_update() {
        let update = text_form("Passport").to_update().unwrap();
        assert_eq!(update.username, "Jane Doe");
        assert_eq!(update.email, "jane@example.com");
        assert_eq!(update.id_type, Some(IdType::Passport));
    }

    #[test]
    fn empty_id_type_means_unset() {
        let update = text_form("").to_update().unwrap();
        assert!(update.id_type.is_none());
    }

    #[test]
    fn unknown_id_type_is_rejected() {
        assert!(matches!(
            text_form("Library Card").to_update(),
            Err(FormError::InvalidIdType)
        ));
    }

    #[test]
    fn reads_attached_image() {
        let mut named = tempfile::NamedTempFile::new().unwrap();
        named.write_all(b"fake-png-bytes").unwrap();

        let mut form = text_form("Passport");
        form.image = Some(TempFile {
            file: named,
            content_type: Some("image/png".parse().unwrap()),
            file_name: Some("me.png".to_string()),
            size: 14,
        });

        let image = form.read_image().unwrap().unwrap();
        assert_eq!(image.bytes, b"fake-png-bytes");
        assert_eq!(image.file_name.as_deref(), Some("me.png"));
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn missing_image_reads_as_none() {
        assert!(text_form("Passport").read_image().unwrap().is_none());
    }
}
