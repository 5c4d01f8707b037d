//! Ordered image fallback.

use hub_catalog::catalog::{Article, Category, Product};
use serde::Serialize;

use crate::mappings::{self, is_placeholder, DEFAULT_PLACEHOLDER};
use crate::sources::{self, ContentKind};

/// Generated image text is cut to this many characters.
const GENERATED_TEXT_LEN: usize = 20;

/// One step of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageStrategy {
    /// The image given on the record itself.
    Explicit,
    /// A locally shipped article image, by id then by title.
    ArticleMapping,
    /// The category's default image.
    CategoryDefault,
    /// A themed image generated from the label.
    Generated,
    /// [`DEFAULT_PLACEHOLDER`]; always succeeds.
    Placeholder,
}

impl ImageStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStrategy::Explicit => "explicit",
            ImageStrategy::ArticleMapping => "article-mapping",
            ImageStrategy::CategoryDefault => "category-default",
            ImageStrategy::Generated => "generated",
            ImageStrategy::Placeholder => "placeholder",
        }
    }
}

/// What an image is needed for.
#[derive(Debug, Clone, Default)]
pub struct ImageRequest {
    pub explicit: Option<String>,
    /// Article id or title used for mapping lookups.
    pub identifier: Option<String>,
    pub category: Option<Category>,
    /// Text for generated images.
    pub label: String,
    pub kind: Option<ContentKind>,
}

impl ImageRequest {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self {
            explicit: product.primary_image().map(str::to_string),
            identifier: None,
            category: Some(product.category),
            label: product.name.clone(),
            kind: Some(ContentKind::Product(Some(product.category))),
        }
    }

    pub fn for_article(article: &Article) -> Self {
        Self {
            explicit: article.featured_image.clone(),
            identifier: Some(article.id.as_str().to_string()),
            category: Some(article.category),
            label: article.title.clone(),
            kind: Some(ContentKind::Blog),
        }
    }

    pub fn with_explicit(mut self, url: impl Into<String>) -> Self {
        self.explicit = Some(url.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// A resolved image and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub url: String,
    pub strategy: ImageStrategy,
}

/// Strategies tried in order until one yields a non-placeholder image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    strategies: Vec<ImageStrategy>,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new(vec![
            ImageStrategy::Explicit,
            ImageStrategy::ArticleMapping,
            ImageStrategy::CategoryDefault,
            ImageStrategy::Generated,
            ImageStrategy::Placeholder,
        ])
    }
}

impl FallbackChain {
    pub fn new(strategies: Vec<ImageStrategy>) -> Self {
        Self { strategies }
    }

    /// Append a strategy.
    pub fn with_strategy(mut self, strategy: ImageStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategies(&self) -> &[ImageStrategy] {
        &self.strategies
    }

    /// Resolve an image for `request`.
    ///
    /// Placeholder results from intermediate steps are skipped. If no step
    /// yields a real image, the first placeholder seen is returned, or
    /// [`DEFAULT_PLACEHOLDER`] when there was none.
    pub fn resolve(&self, request: &ImageRequest) -> ResolvedImage {
        let mut first_placeholder: Option<ResolvedImage> = None;

        for &strategy in &self.strategies {
            let Some(url) = attempt(strategy, request) else {
                continue;
            };
            let resolved = ResolvedImage { url, strategy };
            if strategy == ImageStrategy::Placeholder || !is_placeholder(&resolved.url) {
                tracing::trace!(strategy = strategy.as_str(), url = %resolved.url, "image resolved");
                return resolved;
            }
            first_placeholder.get_or_insert(resolved);
        }

        first_placeholder.unwrap_or_else(|| ResolvedImage {
            url: DEFAULT_PLACEHOLDER.to_string(),
            strategy: ImageStrategy::Placeholder,
        })
    }

    pub fn product_image(&self, product: &Product) -> ResolvedImage {
        self.resolve(&ImageRequest::for_product(product))
    }

    pub fn article_image(&self, article: &Article) -> ResolvedImage {
        self.resolve(&ImageRequest::for_article(article))
    }
}

fn attempt(strategy: ImageStrategy, request: &ImageRequest) -> Option<String> {
    match strategy {
        ImageStrategy::Explicit => request
            .explicit
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        ImageStrategy::ArticleMapping => {
            let identifier = request.identifier.as_deref()?;
            mappings::article_image(identifier)
                .or_else(|| mappings::article_image_by_title(identifier))
                .or_else(|| mappings::article_image_by_title(&request.label))
                .map(str::to_string)
        }
        ImageStrategy::CategoryDefault => request
            .category
            .map(|c| mappings::category_default_image(c).to_string()),
        ImageStrategy::Generated => {
            let label = request.label.trim();
            if label.is_empty() {
                return None;
            }
            let kind = request
                .kind
                .unwrap_or(ContentKind::Product(request.category));
            Some(sources::themed_image(&shorten(label), kind))
        }
        ImageStrategy::Placeholder => Some(
            request
                .category
                .map(mappings::category_fallback_image)
                .unwrap_or(DEFAULT_PLACEHOLDER)
                .to_string(),
        ),
    }
}

fn shorten(text: &str) -> String {
    if text.chars().count() > GENERATED_TEXT_LEN {
        let cut: String = text.chars().take(GENERATED_TEXT_LEN).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
