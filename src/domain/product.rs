pub type ProductId = u32;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}

/// The catalog a fresh process starts with when no seed file is configured.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(101, "Python Book (Beginner)", 45.99, 10),
        Product::new(102, "Webcam (HD 1080p)", 29.50, 25),
        Product::new(103, "Mechanical Keyboard", 75.00, 5),
        Product::new(104, "4K Monitor (27 inch)", 299.99, 3),
        Product::new(105, "Coffee Mug (Coding)", 9.99, 50),
    ]
}
