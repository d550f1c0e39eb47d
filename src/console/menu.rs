use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info};
use crate::cart::{CartError, CartReconciler, CheckoutOutcome};
use crate::domain::PaymentMethod;
use super::render::{cart_table, catalog_table};
use super::terminal::Terminal;

const BANNER: &str = "=============================================\n   Rust E-Commerce Console App (v1.0)  \n=============================================";

const MENU: &str = "\n--- Main Menu ---\n\
1. View Products\n\
2. Add Item to Cart\n\
3. View Cart\n\
4. Remove Item from Cart\n\
5. Checkout\n\
6. Exit";

const INVALID_NUMBER: &str = "Error: Please enter a valid number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the numbered menu until the user picks Exit or input ends.
pub async fn run_console<R, W>(session: &mut CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    terminal.say(BANNER).await?;

    loop {
        terminal.say(MENU).await?;
        let Some(choice) = terminal.ask("Enter your choice (1-6): ").await? else {
            info!("Input closed, leaving menu");
            break;
        };

        let flow = match choice.as_str() {
            "1" => view_products(session, terminal).await?,
            "2" => add_item(session, terminal).await?,
            "3" => view_cart(session, terminal).await?,
            "4" => remove_item(session, terminal).await?,
            "5" => checkout(session, terminal).await?,
            "6" => {
                terminal.say("\nThank you for shopping! Goodbye.").await?;
                Flow::Quit
            }
            _ => {
                terminal.say("Invalid choice. Please enter a number between 1 and 6.").await?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Non-positive input maps to zero so the cart rejects it as an invalid quantity.
fn to_quantity(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

async fn report<R, W>(terminal: &mut Terminal<R, W>, err: &CartError) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // InvalidState is already logged where checkout aborts.
    if let CartError::ActorCommunicationError(_) = err {
        error!(error = %err, "Shop operation failed");
    }
    let message = match err {
        CartError::NotFound(_) => "Error: Invalid Product ID.".to_string(),
        CartError::OutOfStock(_) => "Error: No more units of that product are available.".to_string(),
        CartError::InvalidQuantity(_) => "Error: Quantity must be greater than zero.".to_string(),
        CartError::EmptyCart => "Your cart is empty.".to_string(),
        other => format!("Error: {}", other),
    };
    terminal.say(message).await
}

async fn view_products<R, W>(session: &CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match session.catalog().list_products().await {
        Ok(products) => terminal.say(catalog_table(&products)).await?,
        Err(e) => report(terminal, &e.into()).await?,
    }
    Ok(Flow::Continue)
}

async fn add_item<R, W>(session: &mut CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(id_text) = terminal.ask("Enter Product ID to add: ").await? else {
        return Ok(Flow::Quit);
    };
    let Some(raw_id) = parse_int(&id_text) else {
        terminal.say(INVALID_NUMBER).await?;
        return Ok(Flow::Continue);
    };

    let product = match u32::try_from(raw_id) {
        Ok(id) => match session.catalog().get_product(id).await {
            Ok(product) => product,
            Err(e) => {
                report(terminal, &e.into()).await?;
                return Ok(Flow::Continue);
            }
        },
        Err(_) => None,
    };
    let Some(product) = product else {
        terminal.say("Error: Invalid Product ID.").await?;
        return Ok(Flow::Continue);
    };
    if product.stock == 0 {
        terminal.say(format!("Error: {} is currently out of stock.", product.name)).await?;
        return Ok(Flow::Continue);
    }

    let prompt = format!("Enter quantity for {} (Max {}): ", product.name, product.stock);
    let Some(qty_text) = terminal.ask(prompt).await? else {
        return Ok(Flow::Quit);
    };
    let Some(raw_qty) = parse_int(&qty_text) else {
        terminal.say(INVALID_NUMBER).await?;
        return Ok(Flow::Continue);
    };

    match session.add_item(product.id, to_quantity(raw_qty)).await {
        Ok(outcome) => {
            if outcome.is_reduced() {
                terminal
                    .say(format!(
                        "Warning: Only {} more units available. Adding {}.",
                        outcome.added, outcome.added
                    ))
                    .await?;
            }
            terminal
                .say(format!("Added {} x {} to the cart.", outcome.added, outcome.name))
                .await?;
        }
        Err(e) => report(terminal, &e).await?,
    }
    Ok(Flow::Continue)
}

async fn view_cart<R, W>(session: &CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match session.view_cart().await {
        Ok(view) => terminal.say(cart_table(&view, true)).await?,
        Err(e) => report(terminal, &e).await?,
    }
    Ok(Flow::Continue)
}

async fn remove_item<R, W>(session: &mut CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if session.cart().is_empty() {
        terminal.say("Your cart is empty.").await?;
        return Ok(Flow::Continue);
    }
    let view = match session.view_cart().await {
        Ok(view) => view,
        Err(e) => {
            report(terminal, &e).await?;
            return Ok(Flow::Continue);
        }
    };
    terminal.say(cart_table(&view, false)).await?;

    let Some(id_text) = terminal.ask("Enter Product ID to remove (or 0 to cancel): ").await? else {
        return Ok(Flow::Quit);
    };
    let Some(raw_id) = parse_int(&id_text) else {
        terminal.say(INVALID_NUMBER).await?;
        return Ok(Flow::Continue);
    };
    if raw_id == 0 {
        return Ok(Flow::Continue);
    }
    let Some(line) = view.lines.iter().find(|line| i64::from(line.product_id) == raw_id) else {
        terminal.say("Error: Product not found in cart.").await?;
        return Ok(Flow::Continue);
    };

    let prompt = format!(
        "Enter quantity to remove for {} (Currently {} in cart): ",
        line.name, line.quantity
    );
    let Some(qty_text) = terminal.ask(prompt).await? else {
        return Ok(Flow::Quit);
    };
    let Some(raw_qty) = parse_int(&qty_text) else {
        terminal.say(INVALID_NUMBER).await?;
        return Ok(Flow::Continue);
    };
    if raw_qty <= 0 {
        terminal.say("Error: Quantity to remove must be positive.").await?;
        return Ok(Flow::Continue);
    }

    match session.remove_item(line.product_id, to_quantity(raw_qty)).await {
        Ok(outcome) => {
            let name = outcome.name.as_deref().unwrap_or(&line.name);
            let message = if outcome.removed_entry() {
                format!("Removed all {} units of {} from the cart.", outcome.removed, name)
            } else {
                format!("Removed {} units of {}. {} remain.", outcome.removed, name, outcome.remaining)
            };
            terminal.say(message).await?;
        }
        Err(e) => report(terminal, &e).await?,
    }
    Ok(Flow::Continue)
}

async fn checkout<R, W>(session: &mut CartReconciler, terminal: &mut Terminal<R, W>) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let view = match session.view_cart().await {
        Ok(view) => view,
        Err(e) => {
            report(terminal, &e).await?;
            return Ok(Flow::Continue);
        }
    };
    terminal.say(cart_table(&view, true)).await?;
    if view.is_empty() || view.total == 0.0 {
        return Ok(Flow::Continue);
    }

    terminal.say("\n--- Checkout Summary ---").await?;
    terminal.say(format!("Order Total: ${:.2}", view.total)).await?;

    let payment = loop {
        let Some(text) = terminal.ask("Enter payment method (Card/Cash): ").await? else {
            return Ok(Flow::Quit);
        };
        match text.parse::<PaymentMethod>() {
            Ok(payment) => break payment,
            Err(_) => terminal.say("Invalid payment method. Please enter 'Card' or 'Cash'.").await?,
        }
    };

    terminal.say(format!("\nProcessing payment via {}...", payment)).await?;
    terminal.say("Updating inventory...").await?;

    match session.checkout(payment).await {
        Ok(CheckoutOutcome::Completed(receipt)) => {
            terminal
                .say(format!(
                    "\n=============================================\n  Order Successfully Placed! Thank you!  \n  Order ID: {}  \n=============================================",
                    receipt.order_id
                ))
                .await?;
            terminal.say("Returning to main menu...").await?;
        }
        Ok(CheckoutOutcome::NoOp) => terminal.say("Your cart is empty.").await?,
        Err(e) => report(terminal, &e).await?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::ShopSystem;
    use crate::domain::default_catalog;

    async fn transcript(system: &ShopSystem, input: &str) -> String {
        let mut session = system.open_session();
        let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
        run_console(&mut session, &mut terminal).await.unwrap();
        String::from_utf8(terminal.into_output()).unwrap()
    }

    #[test]
    fn test_quantity_conversion() {
        assert_eq!(to_quantity(-3), 0);
        assert_eq!(to_quantity(7), 7);
        assert_eq!(to_quantity(i64::MAX), u32::MAX);
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("four"), None);
    }

    #[tokio::test]
    async fn test_shopping_session_transcript() {
        let system = ShopSystem::new(default_catalog(), 8);
        let input = "2\n103\n3\n2\n103\n4\n3\n5\nbitcoin\ncash\n6\n";

        let output = transcript(&system, input).await;

        assert!(output.contains("Added 3 x Mechanical Keyboard to the cart."));
        assert!(output.contains("Warning: Only 2 more units available. Adding 2."));
        assert!(output.contains("Added 2 x Mechanical Keyboard to the cart."));
        assert!(output.contains("Order Total: $375.00"));
        assert!(output.contains("Invalid payment method. Please enter 'Card' or 'Cash'."));
        assert!(output.contains("Processing payment via Cash..."));
        assert!(output.contains("Order ID: order_1"));
        assert!(output.ends_with("Thank you for shopping! Goodbye.\n"));
        assert_eq!(system.catalog_client.check_stock(103).await, Ok(0));
    }

    #[tokio::test]
    async fn test_input_errors_keep_the_loop_running() {
        let system = ShopSystem::new(default_catalog(), 8);
        let input = "9\n2\nabc\n2\n999\n2\n104\n0\n4\n5\n";

        let output = transcript(&system, input).await;

        assert!(output.contains("Invalid choice. Please enter a number between 1 and 6."));
        assert!(output.contains(INVALID_NUMBER));
        assert!(output.contains("Error: Invalid Product ID."));
        assert!(output.contains("Error: Quantity must be greater than zero."));
        assert!(output.contains("Your cart is empty."));
        assert!(output.contains("Your cart is empty. Time to shop!"));
        assert!(!output.contains("Checkout Summary"));
    }

    #[tokio::test]
    async fn test_remove_flow_messages() {
        let system = ShopSystem::new(default_catalog(), 8);
        let input = "2\n105\n5\n4\n101\n4\n105\n2\n4\n105\n10\n3\n";

        let output = transcript(&system, input).await;

        assert!(output.contains("Error: Product not found in cart."));
        assert!(output.contains("Removed 2 units of Coffee Mug (Coding). 3 remain."));
        assert!(output.contains("Removed all 3 units of Coffee Mug (Coding) from the cart."));
        assert!(output.contains("Your cart is empty. Time to shop!"));
        assert_eq!(system.catalog_client.check_stock(105).await, Ok(50));
    }
}
