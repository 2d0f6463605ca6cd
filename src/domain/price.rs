use serde::{Deserialize, Serialize};

/// Current market price of a single token at call time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub price: f64,
}

impl PriceInfo {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}
