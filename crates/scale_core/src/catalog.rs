/// A sellable item as listed by the backend catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: i64,
    pub name: String,
    pub price_per_kg: f64,
    pub image_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Product lookup table, filled once and read on every poll tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds the product whose name equals `label`, ignoring case.
    ///
    /// Duplicate names resolve to the first entry in catalog order. Whitespace
    /// is significant. An empty label or the `"-"` placeholder never matches.
    pub fn find_by_label(&self, label: &str) -> Option<&Product> {
        if label.is_empty() || label == crate::NO_DETECTION {
            return None;
        }
        let wanted = label.to_lowercase();
        self.products
            .iter()
            .find(|product| !product.name.is_empty() && product.name.to_lowercase() == wanted)
    }
}
