//! Remote image URL builders.

use hub_catalog::catalog::Category;
use hub_core::url_encode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const HERO: ImageSize = ImageSize::new(1200, 600);
    pub const FEATURE: ImageSize = ImageSize::new(300, 200);
    pub const AVATAR: ImageSize = ImageSize::new(100, 100);
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(400, 300)
    }
}

/// Background and text colors as hex without `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
}

impl ThemeColors {
    const fn on_white(background: &'static str) -> Self {
        Self {
            background,
            text: "ffffff",
        }
    }
}

/// What a generated image illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Product(Option<Category>),
    Blog,
    Hero,
    Feature,
    Avatar,
}

impl ContentKind {
    pub fn colors(&self) -> ThemeColors {
        match self {
            ContentKind::Product(Some(category)) => product_colors(*category),
            ContentKind::Product(None) => ThemeColors::on_white("6366f1"),
            ContentKind::Blog => ThemeColors::on_white("6b7280"),
            ContentKind::Hero => ThemeColors::on_white("1f2937"),
            ContentKind::Feature => ThemeColors::on_white("3b82f6"),
            ContentKind::Avatar => ThemeColors::on_white("6366f1"),
        }
    }

    pub fn default_size(&self) -> ImageSize {
        match self {
            ContentKind::Hero => ImageSize::HERO,
            ContentKind::Feature => ImageSize::FEATURE,
            ContentKind::Avatar => ImageSize::AVATAR,
            _ => ImageSize::default(),
        }
    }
}

fn product_colors(category: Category) -> ThemeColors {
    let background = match category {
        Category::Smartphones => "4f46e5",
        Category::Laptops => "059669",
        Category::HomeAppliances => "dc2626",
        Category::Wearables => "f59e0b",
        Category::Audio => "7c3aed",
        Category::Gaming => "ef4444",
        Category::SmartHome => "6366f1",
    };
    ThemeColors::on_white(background)
}

/// Text-on-color image from dummyimage.com.
pub fn dummy_image(text: &str, size: ImageSize, colors: ThemeColors) -> String {
    format!(
        "https://dummyimage.com/{}x{}/{}/{}?text={}",
        size.width,
        size.height,
        colors.background,
        colors.text,
        url_encode(text)
    )
}

/// Themed dummy image for a kind of content at its default size.
pub fn themed_image(text: &str, kind: ContentKind) -> String {
    dummy_image(text, kind.default_size(), kind.colors())
}

/// Keyword photo from loremflickr.com. Words become comma-separated tags.
pub fn lorem_flickr(query: &str, size: ImageSize) -> String {
    let tags: Vec<String> = query.split_whitespace().map(url_encode).collect();
    format!(
        "https://loremflickr.com/{}/{}/{}",
        size.width,
        size.height,
        tags.join(",")
    )
}

/// Random photo from picsum.photos, stable for a given seed.
pub fn picsum(size: ImageSize, seed: Option<&str>) -> String {
    let seed = seed
        .map(|s| format!("/seed/{}", url_encode(s)))
        .unwrap_or_default();
    format!("https://picsum.photos{}/{}/{}", seed, size.width, size.height)
}

/// Labelled grey box from via.placeholder.com.
pub fn placeholder(size: ImageSize, label: &str) -> String {
    format!(
        "https://via.placeholder.com/{}x{}/6366F1/FFFFFF?text={}",
        size.width,
        size.height,
        url_encode(label)
    )
}

/// Seeded picsum images for a product carousel.
pub fn carousel(product_id: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| picsum(ImageSize::default(), Some(&format!("{}-{}", product_id, i))))
        .collect()
}

/// Initials for an avatar: first letter of each word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
