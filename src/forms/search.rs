use serde::Deserialize;
use validator::Validate;

use crate::domain::search::SearchQuery;
use crate::domain::types::{LocationText, RadiusKm, TypeConstraintError};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for the hotel proximity search.
///
/// The radius arrives as text so a non-numeric value reaches the
/// validation layer and gets an inline message instead of a bare 400.
pub struct SearchForm {
    /// Free-text location to resolve.
    #[validate(length(min = 1))]
    pub location: String,
    /// Search radius in kilometers.
    #[validate(length(min = 1))]
    pub radius: String,
}

impl TryFrom<&SearchForm> for SearchQuery {
    type Error = TypeConstraintError;

    /// Convert the [`SearchForm`] into a validated [`SearchQuery`].
    fn try_from(form: &SearchForm) -> Result<Self, Self::Error> {
        let location = LocationText::new(form.location.as_str())?;
        let radius = form
            .radius
            .trim()
            .parse::<f64>()
            .map_err(|_| TypeConstraintError::InvalidValue(format!("radius: {}", form.radius)))?;

        Ok(SearchQuery {
            location,
            radius_km: RadiusKm::new(radius)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(location: &str, radius: &str) -> SearchForm {
        SearchForm {
            location: location.to_string(),
            radius: radius.to_string(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let query = SearchQuery::try_from(&form("Paris", "5")).unwrap();
        assert_eq!(query.location.as_str(), "Paris");
        assert_eq!(query.radius_km.get(), 5.0);
    }

    #[test]
    fn rejects_blank_location() {
        assert_eq!(
            SearchQuery::try_from(&form("   ", "5")),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(matches!(
            SearchQuery::try_from(&form("Paris", "ten")),
            Err(TypeConstraintError::InvalidValue(_))
        ));
        assert_eq!(
            SearchQuery::try_from(&form("Paris", "0")),
            Err(TypeConstraintError::NonPositiveRadius)
        );
        assert_eq!(
            SearchQuery::try_from(&form("Paris", "-2")),
            Err(TypeConstraintError::NonPositiveRadius)
        );
    }
}
