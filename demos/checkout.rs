//! Checkout Demo
//!
//! Runs a scripted shopping session against the in-memory backend and prints
//! the derived checkout values.
//!
//! Use `-d` to pick the delivery option (`standard`, `express` or `pickup`)
//! Use `-q` to set how many woven throws go in the cart

use anyhow::Result;
use clap::Parser;
use weft::prelude::*;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
struct CheckoutArgs {
    /// Delivery option to select
    #[clap(short, long, default_value = "standard")]
    delivery: String,

    /// Quantity of the woven throw to add
    #[clap(short, long, default_value_t = 2)]
    quantity: u32,
}

/// Checkout Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CheckoutArgs::parse();
    let delivery: DeliveryOption = args.delivery.parse()?;

    let mut cart = CartStore::new(MemoryStorage::new());

    cart.add_item(NewLineItem {
        product: ProductId::from("throw-berber"),
        snapshot: ProductSnapshot {
            name: "Berber wool throw".to_owned(),
            unit_price: 2500,
            image: Some("/images/throw-berber.jpg".to_owned()),
        },
        quantity: args.quantity,
        size: "150x200".to_owned(),
        color: "indigo".to_owned(),
        designer: Some("Atelier Nila".to_owned()),
    });

    cart.add_item(NewLineItem {
        product: ProductId::from("runner-fouta"),
        snapshot: ProductSnapshot {
            name: "Fouta table runner".to_owned(),
            unit_price: 1800,
            image: None,
        },
        quantity: 1,
        size: "40x140".to_owned(),
        color: "ochre".to_owned(),
        designer: None,
    });

    cart.set_delivery_option(delivery);

    println!("Cart ({} items)", cart.item_count());

    for item in cart.items() {
        println!(
            "  {} x{} ({} / {}) - {}",
            item.snapshot.name,
            item.quantity,
            item.size,
            item.color,
            item.line_total()
        );
    }

    let days = delivery.estimated_days();

    println!("Subtotal:  {}", cart.subtotal());
    println!(
        "Delivery:  {} ({}, {}-{} days)",
        cart.delivery_cost(),
        delivery.label(),
        days.start(),
        days.end()
    );
    println!("Total:     {}", cart.total());

    let plan = cart.installment_plan();

    if plan.eligible {
        println!(
            "Installments: {} months at {} per month",
            plan.months, plan.monthly_payment
        );
    } else {
        println!(
            "Installments: not available (would need {} months)",
            plan.months
        );
    }

    Ok(())
}
