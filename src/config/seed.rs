use std::collections::HashSet;
use std::path::Path;
use serde::Deserialize;
use tracing::info;
use crate::domain::{Product, ProductId};
use super::ConfigError;

#[derive(Debug, Deserialize)]
struct SeedFile {
    products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    id: ProductId,
    name: String,
    price: f64,
    stock: u32,
}

pub fn load_seed(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let products = parse_seed(&text)?;
    info!(path = %path.display(), products = products.len(), "Loaded catalog seed");
    Ok(products)
}

pub fn parse_seed(text: &str) -> Result<Vec<Product>, ConfigError> {
    let file: SeedFile = toml::from_str(text)?;
    let products: Vec<Product> = file
        .products
        .into_iter()
        .map(|p| Product::new(p.id, p.name, p.price, p.stock))
        .collect();
    validate_seed(&products)?;
    Ok(products)
}

pub fn validate_seed(products: &[Product]) -> Result<(), ConfigError> {
    if products.is_empty() {
        return Err(ConfigError::invalid("catalog must contain at least one product"));
    }

    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(ConfigError::invalid(format!("duplicate product id {}", product.id)));
        }
        if product.name.trim().is_empty() {
            return Err(ConfigError::invalid(format!("product {} has an empty name", product.id)));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ConfigError::invalid(format!(
                "product {} has invalid price {}",
                product.id, product.price
            )));
        }
    }
    Ok(())
}
