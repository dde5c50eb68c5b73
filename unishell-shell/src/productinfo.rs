//! Information about this shell project.

/// The formal name of this product.
pub const PRODUCT_NAME: &str = "unishell";

/// The version of the product, in string form.
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The URI to display as the product's homepage.
pub const PRODUCT_DISPLAY_URI: &str = env!("CARGO_PKG_REPOSITORY");

pub(crate) fn get_product_display_str() -> String {
    std::format!("UniShell Version {PRODUCT_VERSION}")
}
