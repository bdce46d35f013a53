use crate::domain::common::EntityMetadata;
use crate::shared::config::SeedFeature;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Externally assigned feature code, stable for the record's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureCode(pub String);

impl FeatureCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog feature with English and Arabic titles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub code: FeatureCode,

    #[serde(rename = "englishTitle")]
    pub english_title: String,

    #[serde(rename = "arabicTitle")]
    pub arabic_title: String,

    /// `None` means the feature has no icon
    #[serde(rename = "iconUrl")]
    pub icon_url: Option<String>,

    pub active: bool,

    pub metadata: EntityMetadata,
}

impl Feature {
    pub fn new(
        code: FeatureCode,
        english_title: String,
        arabic_title: String,
        icon_url: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            code,
            english_title,
            arabic_title,
            icon_url,
            active,
            metadata: EntityMetadata::new(),
        }
    }

    /// Display label of the status flag
    pub fn status_label(&self) -> &'static str {
        status_label(self.active)
    }

    /// Copy the editable fields into a form DTO
    pub fn to_dto(&self) -> FeatureDto {
        FeatureDto {
            id: self.code.clone(),
            english_title: self.english_title.clone(),
            arabic_title: self.arabic_title.clone(),
            icon_url: self.icon_url.clone(),
            active: self.active,
        }
    }

    /// Apply committed fields from a DTO
    pub fn update(&mut self, dto: &FeatureDto) {
        self.english_title = dto.english_title.clone();
        self.arabic_title = dto.arabic_title.clone();
        self.icon_url = dto.icon_url.clone();
        self.active = dto.active;
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl From<SeedFeature> for Feature {
    fn from(seed: SeedFeature) -> Self {
        Feature::new(
            FeatureCode(seed.code),
            seed.english_title,
            seed.arabic_title,
            seed.icon_url.filter(|url| !url.is_empty()),
            seed.active,
        )
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Editable fields of a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDto {
    pub id: FeatureCode,

    #[serde(rename = "englishTitle")]
    pub english_title: String,

    #[serde(rename = "arabicTitle")]
    pub arabic_title: String,

    #[serde(rename = "iconUrl")]
    pub icon_url: Option<String>,

    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn furniture() -> Feature {
        Feature::new(
            FeatureCode::new("1002"),
            "Furniture".into(),
            "أثاث".into(),
            None,
            false,
        )
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(furniture().to_dto()).unwrap();
        assert_eq!(json["id"], "1002");
        assert_eq!(json["englishTitle"], "Furniture");
        assert_eq!(json["arabicTitle"], "أثاث");
        assert!(json["iconUrl"].is_null());
        assert_eq!(json["active"], false);
    }

    #[test]
    fn test_update_bumps_version() {
        let mut feature = furniture();
        let mut dto = feature.to_dto();
        dto.english_title = "Furnished".into();
        dto.active = true;
        feature.update(&dto);
        assert_eq!(feature.english_title, "Furnished");
        assert_eq!(feature.status_label(), "Active");
        assert_eq!(feature.metadata.version, 1);
    }

    #[test]
    fn test_seed_with_empty_icon_has_no_icon() {
        let seed = SeedFeature {
            code: "1001".into(),
            english_title: "A/C".into(),
            arabic_title: "مُكيّف".into(),
            icon_url: Some(String::new()),
            active: false,
        };
        let feature = Feature::from(seed);
        assert_eq!(feature.icon_url, None);
    }
}
