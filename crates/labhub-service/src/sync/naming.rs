//! Canonical profile group naming.
//!
//! The derived name is part of the storage contract: the document gate
//! and deployment configuration match on these strings, so the template
//! and the abbreviation table must stay stable across migrations.

use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_entity::permission::ProfileRole;
use labhub_entity::permission::model::GROUP_NAME_MAX_LEN;

/// Registered long-name abbreviations, applied only when a derived name
/// would exceed the group name length limit.
const NAME_ABBREVIATIONS: &[(&str, &str)] = &[(
    "Advanced BioImaging and BioOptics Experimental Platform",
    "ABBE",
)];

/// Derive the canonical profile group name for a role and unit.
///
/// Names that still exceed the storage limit after abbreviation are a
/// configuration error; the name is never silently truncated.
pub fn derive_group_name(role: ProfileRole, unit_name: &str) -> AppResult<String> {
    let mut name = format!("PROFILE: Group {}: {}", role.display_name(), unit_name);

    if name.chars().count() > GROUP_NAME_MAX_LEN {
        for (long, short) in NAME_ABBREVIATIONS {
            if name.contains(long) {
                name = name.replace(long, short);
            }
        }
    }

    if name.chars().count() > GROUP_NAME_MAX_LEN {
        return Err(AppError::configuration(format!(
            "Derived profile group name exceeds {GROUP_NAME_MAX_LEN} characters \
             and has no registered abbreviation: '{name}'"
        )));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template() {
        assert_eq!(
            derive_group_name(ProfileRole::Admin, "Imaging").unwrap(),
            "PROFILE: Group Admin: Imaging"
        );
        assert_eq!(
            derive_group_name(ProfileRole::Coordinator, "Imaging").unwrap(),
            "PROFILE: Group Coordinator: Imaging"
        );
    }

    #[test]
    fn test_registered_abbreviation_applies_when_too_long() {
        let long_name = format!(
            "Advanced BioImaging and BioOptics Experimental Platform {}",
            "x".repeat(100)
        );
        let name = derive_group_name(ProfileRole::Manager, &long_name).unwrap();
        assert!(name.starts_with("PROFILE: Group Manager: ABBE"));
        assert!(name.chars().count() <= GROUP_NAME_MAX_LEN);
    }

    #[test]
    fn test_short_names_are_not_abbreviated() {
        let name = derive_group_name(
            ProfileRole::Coordinator,
            "Advanced BioImaging and BioOptics Experimental Platform",
        )
        .unwrap();
        assert_eq!(
            name,
            "PROFILE: Group Coordinator: Advanced BioImaging and BioOptics Experimental Platform"
        );
    }

    #[test]
    fn test_unabbreviatable_overflow_is_a_configuration_error() {
        let err = derive_group_name(ProfileRole::Manager, &"y".repeat(200)).unwrap_err();
        assert_eq!(err.kind, labhub_core::error::ErrorKind::Configuration);
    }
}
