//! Turns menu items, order views and messages into terminal text.
//!
//! Every function returns a `String`; the caller decides where it goes.

use cafe::model::{MenuItem, OrderView};
use cafe::outcome::{CmdMessage, MessageLevel};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 11;
const RULE_WIDTH: usize = 40;

pub fn format_amount(currency: &str, amount: Decimal) -> String {
    let mut cents = amount.round_dp(2);
    cents.rescale(2);
    format!("{}{}", currency, cents)
}

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn render_menu(items: &[MenuItem], currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=== CAFE MENU ===".bold()));
    out.push_str(&format!(
        "{}{}{}{}\n",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Price", PRICE_WIDTH),
        "Category"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for item in items {
        out.push_str(&format!(
            "{}{}{}{}\n",
            pad_to_width(&item.id.to_string(), ID_WIDTH),
            pad_to_width(&item.name, NAME_WIDTH),
            pad_to_width(&format_amount(currency, item.price), PRICE_WIDTH),
            item.category.dimmed()
        ));
    }
    out
}

pub fn render_order(view: &OrderView, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n",
        format!("=== ORDER #{} ===", view.id).bold()
    ));
    out.push_str(&format!("Status: {}\n", view.status));
    out.push_str(&format!(
        "Time: {} {}\n",
        view.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        format!("({})", format_time_ago(view.created_at)).dimmed()
    ));
    out.push_str("Items:\n");
    for line in &view.lines {
        out.push_str(&format!(
            "- {} ({})\n",
            line.name,
            format_amount(currency, line.price)
        ));
    }
    out.push_str(&format!(
        "Total Amount: {}\n",
        format_amount(currency, view.total).bold()
    ));
    out
}

pub fn render_revenue(amount: Decimal, currency: &str) -> String {
    format!("Daily Revenue: {}", format_amount(currency, amount))
}

/// Left-aligns `s` in a column of `width` display cells. Text that does not
/// fit is kept whole and followed by a single space.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return format!("{} ", s);
    }
    format!("{}{}", s, " ".repeat(width - current))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe::api::default_menu;
    use cafe::model::{Order, OrderStatus};

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn amounts_always_show_cents() {
        assert_eq!(format_amount("$", Decimal::new(8, 0)), "$8.00");
        assert_eq!(format_amount("€", Decimal::new(450, 2)), "€4.50");
        assert_eq!(format_amount("$", Decimal::ZERO), "$0.00");
    }

    #[test]
    fn menu_rows_are_aligned() {
        no_color();
        let text = render_menu(&default_menu(), "$");
        assert!(text.contains("=== CAFE MENU ==="));
        assert!(text.contains("1    Espresso            $3.50      Beverages"));
        assert!(text.contains("5    Muffin              $2.50      Pastries"));
    }

    #[test]
    fn wide_names_are_padded_by_display_width() {
        assert_eq!(pad_to_width("Café", 6).width(), 6);
        assert_eq!(pad_to_width("抹茶", 6), "抹茶  ");
        assert_eq!(pad_to_width("Very long pastry name", 4), "Very long pastry name ");
    }

    #[test]
    fn order_lists_lines_and_total() {
        no_color();
        let mut order = Order::new(1);
        for item in default_menu().into_iter().take(2) {
            order.add_item(item);
        }
        let text = render_order(&order.view(), "$");

        assert!(text.contains("=== ORDER #1 ==="));
        assert!(text.contains(&format!("Status: {}", OrderStatus::Pending)));
        assert!(text.contains("- Espresso ($3.50)"));
        assert!(text.contains("- Cappuccino ($4.50)"));
        assert!(text.contains("Total Amount: $8.00"));
    }

    #[test]
    fn revenue_line() {
        assert_eq!(
            render_revenue(Decimal::new(1250, 2), "$"),
            "Daily Revenue: $12.50"
        );
    }

    #[test]
    fn messages_keep_their_text() {
        no_color();
        let msg = CmdMessage::error("Invalid item ID!");
        assert_eq!(render_message(&msg), "Invalid item ID!");
    }
}
