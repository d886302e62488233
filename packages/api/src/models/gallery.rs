use serde::{Deserialize, Serialize};

use super::Pagination;

/// Public gallery categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    #[default]
    Iot,
    EVehicles,
    Ai,
    Hardware,
    Software,
    Vlsi,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 6] = [
        GalleryCategory::Iot,
        GalleryCategory::EVehicles,
        GalleryCategory::Ai,
        GalleryCategory::Hardware,
        GalleryCategory::Software,
        GalleryCategory::Vlsi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GalleryCategory::Iot => "iot",
            GalleryCategory::EVehicles => "e-vehicles",
            GalleryCategory::Ai => "ai",
            GalleryCategory::Hardware => "hardware",
            GalleryCategory::Software => "software",
            GalleryCategory::Vlsi => "vlsi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GalleryCategory::Iot => "IoT",
            GalleryCategory::EVehicles => "E-Vehicles",
            GalleryCategory::Ai => "AI",
            GalleryCategory::Hardware => "Hardware",
            GalleryCategory::Software => "Software",
            GalleryCategory::Vlsi => "VLSI",
        }
    }

    pub fn parse(value: &str) -> Option<GalleryCategory> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A curated gallery entry. The active flag controls public visibility;
/// inactive items are only ever seen through this console.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: GalleryCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Fields for creating a gallery item. Title and description limits
/// (100/500 chars) are enforced backend-side; the form mirrors them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemDraft {
    pub title: String,
    pub description: String,
    pub category: GalleryCategory,
    pub image: String,
    pub is_active: bool,
}

/// Partial update: only the fields present are sent, so toggling the active
/// flag leaves title, description and category untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GalleryCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl GalleryItemPatch {
    /// A patch that only flips the active flag.
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }
}

/// The full admin gallery listing (including inactive items).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    #[serde(default)]
    pub gallery_items: Vec<GalleryItem>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_wire_values() {
        assert_eq!(
            serde_json::to_value(GalleryCategory::EVehicles).unwrap(),
            json!("e-vehicles")
        );
        for category in GalleryCategory::ALL {
            assert_eq!(GalleryCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_item_defaults_to_active() {
        let item: GalleryItem =
            serde_json::from_value(json!({"_id": "g1", "title": "Drone"})).unwrap();
        assert!(item.is_active);
        assert_eq!(item.category, GalleryCategory::Iot);
    }

    #[test]
    fn test_active_patch_serializes_only_the_flag() {
        let patch = GalleryItemPatch::active(false);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"isActive": false}));
    }

    #[test]
    fn test_page_reads_camel_case_listing() {
        let page: GalleryPage = serde_json::from_value(json!({
            "galleryItems": [{"_id": "g1", "title": "Drone", "isActive": false}]
        }))
        .unwrap();
        assert_eq!(page.gallery_items.len(), 1);
        assert!(!page.gallery_items[0].is_active);
    }
}
