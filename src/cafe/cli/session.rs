//! The interactive order desk.
//!
//! Generic over its input and output so the whole loop can be driven from a
//! byte buffer in tests.

use super::render::{render_menu, render_message, render_order, render_revenue};
use cafe::api::CafeApi;
use cafe::config::CafeConfig;
use cafe::error::Result;
use cafe::model::OrderId;
use cafe::outcome::CmdMessage;
use std::io::{BufRead, Write};

const FINISH_ORDER: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    DisplayMenu,
    CreateOrder,
    ViewOrder,
    CompleteOrder,
    DailyRevenue,
    Exit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::DisplayMenu,
        Action::CreateOrder,
        Action::ViewOrder,
        Action::CompleteOrder,
        Action::DailyRevenue,
        Action::Exit,
    ];

    fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    fn label(&self) -> &'static str {
        match self {
            Action::DisplayMenu => "Display Menu",
            Action::CreateOrder => "Create New Order",
            Action::ViewOrder => "View Order",
            Action::CompleteOrder => "Complete Order",
            Action::DailyRevenue => "View Daily Revenue",
            Action::Exit => "Exit",
        }
    }
}

pub struct Session<'a, R, W> {
    api: &'a mut CafeApi,
    config: &'a CafeConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(api: &'a mut CafeApi, config: &'a CafeConfig, input: R, output: W) -> Self {
        Self {
            api,
            config,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_actions()?;
            let Some(choice) = self.prompt_number("Enter your choice: ")? else {
                tracing::debug!("input closed, ending session");
                return Ok(());
            };

            match Action::from_choice(choice) {
                Some(Action::DisplayMenu) => self.display_menu()?,
                Some(Action::CreateOrder) => self.create_order()?,
                Some(Action::ViewOrder) => self.view_order()?,
                Some(Action::CompleteOrder) => self.complete_order()?,
                Some(Action::DailyRevenue) => {
                    let line = render_revenue(self.api.daily_revenue(), self.currency());
                    writeln!(self.output, "{}", line)?;
                }
                Some(Action::Exit) => {
                    writeln!(
                        self.output,
                        "Thank you for using {}!",
                        self.config.cafe_name
                    )?;
                    return Ok(());
                }
                None => self.say(CmdMessage::warning("Invalid choice! Please try again."))?,
            }
        }
    }

    fn print_actions(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n=== {} ===",
            self.config.cafe_name.to_uppercase()
        )?;
        for (i, action) in Action::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, action.label())?;
        }
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        let text = render_menu(self.api.list_menu(), &self.config.currency_symbol);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn create_order(&mut self) -> Result<()> {
        let order_id = self.api.start_order().id;
        self.say(CmdMessage::info(format!("Started order #{}.", order_id)))?;

        loop {
            self.display_menu()?;
            let item_id = match self.prompt_number("\nEnter item ID (0 to finish): ")? {
                Some(FINISH_ORDER) | None => break,
                Some(id) => id,
            };
            let outcome = self.api.add_item_to_order(order_id, item_id);
            self.say(outcome.message())?;
        }

        self.show_order(order_id)
    }

    fn view_order(&mut self) -> Result<()> {
        match self.prompt_number("Enter order ID: ")? {
            Some(order_id) => self.show_order(order_id),
            None => Ok(()),
        }
    }

    fn complete_order(&mut self) -> Result<()> {
        let Some(order_id) = self.prompt_number("Enter order ID to complete: ")? else {
            return Ok(());
        };
        let completion = self.api.complete_order(order_id);
        self.say(completion.message())
    }

    fn show_order(&mut self, order_id: OrderId) -> Result<()> {
        match self.api.view_order(order_id) {
            Some(view) => {
                let text = render_order(&view, &self.config.currency_symbol);
                write!(self.output, "{}", text)?;
                Ok(())
            }
            None => self.say(CmdMessage::error(format!("Order #{} not found.", order_id))),
        }
    }

    /// Asks until a non-negative whole number is entered. `None` on end of
    /// input.
    fn prompt_number(&mut self, prompt: &str) -> Result<Option<u32>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<u32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    tracing::debug!(input = line.trim(), "rejected non-numeric input");
                    self.say(CmdMessage::warning("Please enter a number."))?;
                }
            }
        }
    }

    fn say(&mut self, message: CmdMessage) -> Result<()> {
        writeln!(self.output, "{}", render_message(&message))?;
        Ok(())
    }

    fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn run_script(api: &mut CafeApi, config: &CafeConfig, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Session::new(api, config, Cursor::new(script.as_bytes().to_vec()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choices_map_to_actions() {
        assert_eq!(Action::from_choice(1), Some(Action::DisplayMenu));
        assert_eq!(Action::from_choice(6), Some(Action::Exit));
        assert_eq!(Action::from_choice(0), None);
        assert_eq!(Action::from_choice(7), None);
    }

    #[test]
    fn full_order_round() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "2\n1\n2\n0\n4\n1\n5\n6\n");

        assert!(out.contains("Espresso added to order."));
        assert!(out.contains("Cappuccino added to order."));
        assert!(out.contains("Total Amount: $8.00"));
        assert!(out.contains("Order #1 completed!"));
        assert!(out.contains("Daily Revenue: $8.00"));
        assert!(out.contains("Thank you for using Cafe!"));
        assert_eq!(api.daily_revenue(), Decimal::new(800, 2));
    }

    #[test]
    fn invalid_item_is_reported_and_skipped() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "2\n999\n5\n0\n6\n");

        assert!(out.contains("Invalid item ID!"));
        assert!(out.contains("Muffin added to order."));
        assert_eq!(api.view_order(1).unwrap().total, Decimal::new(250, 2));
    }

    #[test]
    fn unknown_orders_are_reported() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "3\n9\n4\n42\n5\n6\n");

        assert!(out.contains("Order #9 not found."));
        assert!(out.contains("Order #42 not found."));
        assert!(out.contains("Daily Revenue: $0.00"));
    }

    #[test]
    fn second_completion_is_a_warning() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "2\n3\n0\n4\n1\n4\n1\n5\n6\n");

        assert!(out.contains("Order #1 is already completed."));
        assert!(out.contains("Daily Revenue: $4.00"));
    }

    #[test]
    fn bad_input_reprompts() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "abc\n9\n6\n");

        assert!(out.contains("Please enter a number."));
        assert!(out.contains("Invalid choice! Please try again."));
        assert!(out.contains("Thank you for using Cafe!"));
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let mut api = CafeApi::new();
        let config = CafeConfig::default();
        let out = run_script(&mut api, &config, "2\n1\n");

        assert!(out.contains("Espresso added to order."));
        assert!(out.contains("=== ORDER #1 ==="));
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn config_drives_banner_and_currency() {
        let mut api = CafeApi::new();
        let config = CafeConfig {
            cafe_name: "Corner Beans".to_string(),
            currency_symbol: "€".to_string(),
            ..CafeConfig::default()
        };
        let out = run_script(&mut api, &config, "1\n6\n");

        assert!(out.contains("=== CORNER BEANS ==="));
        assert!(out.contains("€3.50"));
        assert!(out.contains("Thank you for using Corner Beans!"));
    }
}
