use serde::{Deserialize, Serialize};

/// A line in the cart. `quantity` may be missing or null.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl CartItem {
    /// Quantity used for pricing. Missing, zero and NaN quantities all count
    /// as one.
    // FIXME: a zero quantity is billed as one; confirm intent before relying on it elsewhere.
    pub fn effective_quantity(&self) -> f64 {
        match self.quantity {
            Some(q) if q != 0.0 && !q.is_nan() => q,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CartTotalRequest {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CartTotalResponse {
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: Option<f64>) -> CartItem {
        CartItem { price, quantity }
    }

    #[test]
    fn quantity_defaults_when_missing_or_null() {
        let items: Vec<CartItem> =
            serde_json::from_str(r#"[{"price": 3}, {"price": 4, "quantity": null}]"#).unwrap();
        assert!(items.iter().all(|i| i.quantity.is_none()));
        assert!(items.iter().all(|i| i.effective_quantity() == 1.0));
    }

    #[test]
    fn falsy_quantities_become_one() {
        assert_eq!(item(1.0, Some(0.0)).effective_quantity(), 1.0);
        assert_eq!(item(1.0, Some(-0.0)).effective_quantity(), 1.0);
        assert_eq!(item(1.0, Some(f64::NAN)).effective_quantity(), 1.0);
    }

    #[test]
    fn other_quantities_pass_through() {
        assert_eq!(item(1.0, Some(-2.0)).effective_quantity(), -2.0);
        assert_eq!(item(1.0, Some(0.5)).effective_quantity(), 0.5);
    }
}
