use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use super::ProductId;

/// How an order is paid. Recorded on the receipt only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(UnknownPaymentMethod(s.trim().to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}

/// One resolved cart entry, priced against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Snapshot of a cart: lines in product order plus the grand total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl CartView {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(|line| line.subtotal).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Record of a completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: String,
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub payment: PaymentMethod,
}
