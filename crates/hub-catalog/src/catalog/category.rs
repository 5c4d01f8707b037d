//! Fixed category enumeration shared by products and articles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Smartphones,
    Laptops,
    HomeAppliances,
    Wearables,
    Audio,
    Gaming,
    /// Only used by articles.
    SmartHome,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 7] = [
        Category::Smartphones,
        Category::Laptops,
        Category::HomeAppliances,
        Category::Wearables,
        Category::Audio,
        Category::Gaming,
        Category::SmartHome,
    ];

    /// The slug used in URLs and seed data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smartphones => "smartphones",
            Category::Laptops => "laptops",
            Category::HomeAppliances => "home-appliances",
            Category::Wearables => "wearables",
            Category::Audio => "audio",
            Category::Gaming => "gaming",
            Category::SmartHome => "smart-home",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "smartphones" => Some(Category::Smartphones),
            "laptops" => Some(Category::Laptops),
            "home-appliances" => Some(Category::HomeAppliances),
            "wearables" => Some(Category::Wearables),
            "audio" => Some(Category::Audio),
            "gaming" => Some(Category::Gaming),
            "smart-home" => Some(Category::SmartHome),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Smartphones => "Smartphones",
            Category::Laptops => "Laptops",
            Category::HomeAppliances => "Home Appliances",
            Category::Wearables => "Wearables",
            Category::Audio => "Audio",
            Category::Gaming => "Gaming",
            Category::SmartHome => "Smart Home",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
