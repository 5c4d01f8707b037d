//! Local image assets keyed by article and category.

use hub_catalog::catalog::Category;

/// Last-resort image for anything without a better match.
pub const DEFAULT_PLACEHOLDER: &str = "/images/placeholders/product-placeholder.svg";

/// Images shipped for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMapping {
    pub article_id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub main_image: &'static str,
    pub detail_images: &'static [&'static str],
    pub fallback_image: Option<&'static str>,
}

pub const ARTICLE_IMAGES: &[ImageMapping] = &[
    ImageMapping {
        article_id: "iphone-15-pro-review",
        title: "iPhone 15 Pro In-Depth Review",
        category: Category::Smartphones,
        main_image: "/images/articles/iphone-15-pro-main.jpg",
        detail_images: &[
            "/images/articles/iphone-15-pro-detail-1.jpg",
            "/images/articles/iphone-15-pro-detail-2.jpg",
        ],
        fallback_image: Some("/images/placeholders/smartphone-placeholder.svg"),
    },
    ImageMapping {
        article_id: "macbook-pro-m3-review",
        title: "MacBook Pro M3 Review",
        category: Category::Laptops,
        main_image: "/images/articles/macbook-pro-m3-main.jpg",
        detail_images: &[
            "/images/articles/macbook-pro-m3-detail-1.jpg",
            "/images/articles/macbook-pro-m3-detail-2.jpg",
        ],
        fallback_image: Some("/images/placeholders/laptop-placeholder.svg"),
    },
    ImageMapping {
        article_id: "airpods-pro-2-review",
        title: "AirPods Pro 2 Review",
        category: Category::Audio,
        main_image: "/images/articles/airpods-pro-2-main.jpg",
        detail_images: &[
            "/images/articles/airpods-pro-2-detail-1.jpg",
            "/images/articles/airpods-pro-2-detail-2.jpg",
        ],
        fallback_image: Some("/images/placeholders/audio-placeholder.svg"),
    },
    ImageMapping {
        article_id: "smartwatch-buying-guide",
        title: "2024 Smartwatch Buying Guide",
        category: Category::Wearables,
        main_image: "/images/articles/smartwatch-guide-main.jpg",
        detail_images: &[],
        fallback_image: Some("/images/placeholders/wearable-placeholder.svg"),
    },
    ImageMapping {
        article_id: "smart-home-tutorial",
        title: "Smart Home Beginner's Guide",
        category: Category::SmartHome,
        main_image: "/images/articles/smart-home-guide-main.jpg",
        detail_images: &[],
        fallback_image: Some("/images/placeholders/smart-home-placeholder.svg"),
    },
    ImageMapping {
        article_id: "gaming-setup-guide",
        title: "Ultimate Gaming Setup Guide 2024",
        category: Category::Gaming,
        main_image: "/images/articles/gaming-setup-guide-main.jpg",
        detail_images: &[],
        fallback_image: Some("/images/placeholders/gaming-placeholder.svg"),
    },
];

/// Main image for an article id.
pub fn article_image(article_id: &str) -> Option<&'static str> {
    ARTICLE_IMAGES
        .iter()
        .find(|m| m.article_id == article_id)
        .map(|m| m.main_image)
}

/// Main image for the first mapping whose title contains `title`, or is
/// contained in it (case-insensitive).
pub fn article_image_by_title(title: &str) -> Option<&'static str> {
    let wanted = title.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    ARTICLE_IMAGES
        .iter()
        .find(|m| {
            let known = m.title.to_lowercase();
            known.contains(&wanted) || wanted.contains(&known)
        })
        .map(|m| m.main_image)
}

/// Default image for a category; [`DEFAULT_PLACEHOLDER`] when none is set.
pub fn category_default_image(category: Category) -> &'static str {
    match category {
        Category::Smartphones => "/images/articles/iphone-15-pro-main.jpg",
        Category::Laptops => "/images/articles/macbook-pro-m3-main.jpg",
        Category::Audio => "/images/articles/airpods-pro-2-main.jpg",
        Category::Wearables => "/images/placeholders/wearable-placeholder.svg",
        Category::SmartHome => "/images/placeholders/smart-home-placeholder.svg",
        Category::Gaming => "/images/placeholders/gaming-placeholder.svg",
        Category::HomeAppliances => DEFAULT_PLACEHOLDER,
    }
}

/// Placeholder for a category: a mapping's fallback image, then the
/// category default.
pub fn category_fallback_image(category: Category) -> &'static str {
    ARTICLE_IMAGES
        .iter()
        .find(|m| m.category == category)
        .and_then(|m| m.fallback_image)
        .unwrap_or_else(|| category_default_image(category))
}

/// Whether `url` points at a placeholder rather than real imagery.
pub fn is_placeholder(url: &str) -> bool {
    url.contains("placeholder")
}
