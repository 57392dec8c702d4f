use crate::cart::dto::CartItem;

/// Sum of `price * quantity` over all items; `0.0` for an empty cart.
/// Negative prices and quantities are not rejected.
pub fn calculate_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .fold(0.0, |total, item| total + item.price * item.effective_quantity())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: Option<f64>) -> CartItem {
        CartItem { price, quantity }
    }

    #[test]
    fn empty_cart_is_zero() {
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn missing_quantity_counts_once() {
        let items = [item(10.0, Some(2.0)), item(5.0, None)];
        assert_eq!(calculate_total(&items), 25.0);
    }

    #[test]
    fn zero_quantity_is_billed_as_one() {
        assert_eq!(calculate_total(&[item(10.0, Some(0.0))]), 10.0);
    }

    #[test]
    fn negative_values_flow_through() {
        let items = [item(-4.0, Some(2.0)), item(3.0, Some(-1.0))];
        assert_eq!(calculate_total(&items), -11.0);
    }
}
