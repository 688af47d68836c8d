//! # End-to-End Demo
//!
//! Walks the whole engine through one morning at the counter: catalog
//! pricing, cart totals with a manual discount, checkout, lifecycle
//! transitions, a refund adjustment, and the dashboard queries.
//!
//! ## Usage
//! ```bash
//! cargo run -p barista-orders --bin demo
//!
//! # With store-mutation tracing
//! RUST_LOG=barista=debug cargo run -p barista-orders --bin demo
//! ```

use chrono::{Duration, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use barista_core::{
    catalog, pricing, DiscountInput, LineItem, Money, OrderDraft, OrderStatus, PaymentMethod,
    ProductSnapshot, TaxRate,
};
use barista_orders::{DateFilter, OrderStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,barista=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("☕ Barista POS Order & Pricing Engine Demo");
    println!("==========================================");
    println!();

    // A fixed clock keeps the run reproducible
    let open = Utc
        .with_ymd_and_hms(2024, 3, 11, 8, 0, 0)
        .single()
        .ok_or("bad clock")?;
    let tax_rate = TaxRate::from_percentage(8.25);

    // -------------------------------------------------------------------------
    // Catalog pricing: a latte on a morning promotion
    // -------------------------------------------------------------------------
    let latte = ProductSnapshot {
        id: "latte".to_string(),
        name: "Latte".to_string(),
        category: "espresso".to_string(),
        price_cents: 450,
        stock: 100,
        is_available: true,
        discount_percent: Some(10.0),
        discount_starts_at: Some(open - Duration::hours(1)),
        discount_ends_at: Some(open + Duration::hours(4)),
    };

    let effective = catalog::effective_price(&latte, open);
    println!("Catalog:");
    println!("  {} lists at {}, rings at {} during the promo", latte.name, latte.price(), effective);
    println!();

    // -------------------------------------------------------------------------
    // Cart pricing with a manual member discount
    // -------------------------------------------------------------------------
    let items = vec![
        LineItem {
            product_id: latte.id.clone(),
            name: latte.name.clone(),
            category: latte.category.clone(),
            unit_price_cents: effective.cents(),
            quantity: 2,
            variant: Some("oat milk".to_string()),
        },
        LineItem {
            product_id: "croissant".to_string(),
            name: "Butter Croissant".to_string(),
            category: "bakery".to_string(),
            unit_price_cents: 375,
            quantity: 1,
            variant: None,
        },
    ];

    let discount = DiscountInput::percent("5").normalize();
    let totals = pricing::price_cart(&items, Some(&discount));
    println!("Cart:");
    println!("  Subtotal: {}", totals.subtotal());
    println!("  Discount: -{}", totals.discount());
    println!("  Total:    {}", totals.total());
    println!();

    // -------------------------------------------------------------------------
    // Checkout and lifecycle
    // -------------------------------------------------------------------------
    let store = OrderStore::new();

    let draft = OrderDraft::from_cart(
        "Alex",
        items,
        &totals,
        tax_rate,
        PaymentMethod::Cash,
        "c-01",
        "Sam",
    )
    .with_discount_label("5% member")
    .with_cash_payment(Money::from_cents(2000))?;

    let order_id = store.create_order(draft, open)?;
    let order = store.get_order(&order_id)?;
    println!("Checkout:");
    println!("  {} for {} — total {} (tax {})", order.id, order.customer, order.total(), order.tax());
    if let Some(change) = order.change() {
        println!("  Paid cash, change {}", change);
    }

    store.set_status(&order_id, OrderStatus::Preparing, open + Duration::minutes(1))?;
    store.set_status(&order_id, OrderStatus::Ready, open + Duration::minutes(5))?;
    store.set_status(&order_id, OrderStatus::Completed, open + Duration::minutes(7))?;
    println!("  Completed at {:?}", store.get_order(&order_id)?.completed_at);
    println!();

    // A second order that gets cancelled before completion
    let walkout = vec![LineItem {
        product_id: "espresso".to_string(),
        name: "Espresso".to_string(),
        category: "espresso".to_string(),
        unit_price_cents: 300,
        quantity: 1,
        variant: None,
    }];
    let walkout_totals = pricing::price_cart(&walkout, None);
    let walkout_draft = OrderDraft::from_cart(
        "Bo",
        walkout,
        &walkout_totals,
        tax_rate,
        PaymentMethod::Card,
        "c-01",
        "Sam",
    );
    let walkout_id = store.create_order(walkout_draft, open + Duration::minutes(10))?;
    store.cancel(&walkout_id, open + Duration::minutes(12))?;
    println!("Cancelled {} (customer walked out)", walkout_id);
    println!();

    // -------------------------------------------------------------------------
    // Refund one latte from the first order
    // -------------------------------------------------------------------------
    let adj_id = store.create_adjustment(&order_id, effective, open + Duration::minutes(30));
    let adjustment = store.get_order(&adj_id)?;
    println!("Refund:");
    println!("  {} — {} ({})", adjustment.id, adjustment.items[0].name, adjustment.total());
    println!();

    // -------------------------------------------------------------------------
    // Dashboard
    // -------------------------------------------------------------------------
    let now = open + Duration::hours(2);
    let stats = store.stats_in_range(DateFilter::Day, &now);
    println!("Today:");
    println!("  Orders:    {}", stats.total);
    println!("  Completed: {}", stats.completed);
    println!("  Cancelled: {}", stats.cancelled);
    println!("  Revenue:   {} (net of refunds)", stats.revenue());

    println!();
    println!("✓ Demo complete");
    Ok(())
}
