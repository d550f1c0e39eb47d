use crate::domain::{CartView, Product};

pub fn catalog_table(products: &[Product]) -> String {
    let rule = "-".repeat(55);
    let mut out = vec![
        "\n--- Available Products ---".to_string(),
        format!("{:<4} | {:<30} | {:>8} | {:>5}", "ID", "Product Name", "Price", "Stock"),
        rule.clone(),
    ];
    for p in products {
        out.push(format!("{:<4} | {:<30} | ${:>7.2} | {:>5}", p.id, p.name, p.price, p.stock));
    }
    out.push(rule);
    out.join("\n")
}

pub fn cart_table(view: &CartView, show_total: bool) -> String {
    let mut out = vec!["\n--- Your Shopping Cart ---".to_string()];
    if view.is_empty() {
        out.push("Your cart is empty. Time to shop!".to_string());
        return out.join("\n");
    }

    let rule = "-".repeat(65);
    out.push(format!(
        "{:<4} | {:<30} | {:>3} | {:>10} | {:>10}",
        "ID", "Product Name", "Qty", "Unit Price", "Subtotal"
    ));
    out.push(rule.clone());
    for line in &view.lines {
        out.push(format!(
            "{:<4} | {:<30} | {:>3} | ${:>9.2} | ${:>9.2}",
            line.product_id, line.name, line.quantity, line.unit_price, line.subtotal
        ));
    }
    if show_total {
        out.push(rule.clone());
        out.push(format!("{:<50} | {:>10} | ${:>9.2}", "Total", "", view.total));
        out.push(rule);
    }
    out.join("\n")
}
