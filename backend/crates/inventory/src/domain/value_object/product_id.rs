use kernel::id::Id;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

/// Parse an id taken from a URL path
///
/// Anything that is not a UUID names no product.
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        let id = ProductId::new();
        assert_eq!(parse_product_id(&id.to_string()), Some(id));
        assert_eq!(parse_product_id("not-a-uuid"), None);
        assert_eq!(parse_product_id(""), None);
    }
}
