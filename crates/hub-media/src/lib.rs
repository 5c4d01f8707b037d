//! Image resolution for ProductHub pages.
//!
//! Local article images are preferred; when none is known the resolver walks
//! a [`FallbackChain`] down to generated and placeholder images.

mod fallback;
pub mod mappings;
pub mod sources;

pub use fallback::{FallbackChain, ImageRequest, ImageStrategy, ResolvedImage};
pub use mappings::{ImageMapping, DEFAULT_PLACEHOLDER};
pub use sources::{ContentKind, ImageSize, ThemeColors};
