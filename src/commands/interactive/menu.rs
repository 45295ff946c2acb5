//! The main menu loop

use anyhow::Result;
use tracing::{debug, info};

use stockroom::domain::value_objects::{parse_integer, parse_price};
use stockroom::{
    Inventory, Listing, Product, ProductKind, SearchOutcome, StockroomError, StockroomResult,
};

use super::console::Console;
use crate::ui::text::ColoredText;

pub const MENU_ITEMS: [&str; 6] = [
    "Add Product",
    "Remove Product",
    "Search Product",
    "Display All Products",
    "Sort Products by Price",
    "Exit",
];

const PRODUCT_TYPES: [&str; 2] = ["Food", "Electronics"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    DisplayAll,
    Sort,
    Exit,
}

impl MenuChoice {
    /// Map a typed number (`"1"`..`"6"`) to a menu entry.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Remove),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::DisplayAll),
            5 => Some(MenuChoice::Sort),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a choice was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct MenuSession<'a, C> {
    inventory: &'a mut Inventory,
    console: C,
    currency: String,
    color: bool,
}

impl<'a, C: Console> MenuSession<'a, C> {
    pub fn new(inventory: &'a mut Inventory, console: C, currency: impl Into<String>) -> Self {
        Self {
            inventory,
            console,
            currency: currency.into(),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run until Exit is chosen or input runs out.
    pub fn run(&mut self) -> Result<()> {
        self.console.say("Welcome to the Inventory Management System!")?;

        loop {
            self.console.say("")?;
            let Some(raw) = self.console.choose("Please select an option:", &MENU_ITEMS)? else {
                info!("input closed, leaving menu");
                return Ok(());
            };

            if self.handle(&raw)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Handle one raw menu selection.
    pub fn handle(&mut self, raw: &str) -> Result<Flow> {
        let Some(choice) = MenuChoice::parse(raw) else {
            debug!(input = raw, "unrecognised menu choice");
            self.warn("Invalid choice.")?;
            return Ok(Flow::Continue);
        };

        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Add => self.add_product(),
            MenuChoice::Remove => self.remove_product(),
            MenuChoice::Search => self.search_product(),
            MenuChoice::DisplayAll => self.display_all(),
            MenuChoice::Sort => {
                self.inventory.sort_by_price();
                self.success("Products sorted by price.")?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.console.say("Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_product(&mut self) -> Result<Flow> {
        self.console.say("Enter product details:")?;

        let Some(name) = self.console.ask("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.console.ask("Category: ")? else {
            return Ok(Flow::Exit);
        };
        let price_prompt = format!("Price: {}", self.currency);
        let Some(price) = self.ask_number(&price_prompt, parse_price)? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.ask_number("Quantity: ", |s| parse_integer(s, "a quantity"))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.ask_number("ID: ", |s| parse_integer(s, "an id"))? else {
            return Ok(Flow::Exit);
        };

        let Some(type_choice) = self.console.choose("", &PRODUCT_TYPES)? else {
            return Ok(Flow::Exit);
        };

        let kind = match type_choice.trim() {
            "1" => {
                let Some(expiry_date) = self.console.ask("Expiry Date: ")? else {
                    return Ok(Flow::Exit);
                };
                ProductKind::Food { expiry_date }
            }
            "2" => {
                let Some(brand) = self.console.ask("Brand: ")? else {
                    return Ok(Flow::Exit);
                };
                ProductKind::Electronics { brand }
            }
            _ => {
                self.warn("Invalid choice.")?;
                return Ok(Flow::Continue);
            }
        };

        self.inventory
            .add_product(Product::new(name, category, price, quantity, id, kind));
        Ok(Flow::Continue)
    }

    fn remove_product(&mut self) -> Result<Flow> {
        let Some(id) = self.ask_number("Enter product ID to remove: ", |s| {
            parse_integer(s, "an id")
        })?
        else {
            return Ok(Flow::Exit);
        };

        let outcome = self.inventory.remove_product(id);
        if outcome.is_removed() {
            self.success(&outcome.to_string())?;
        } else {
            self.warn(&outcome.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn search_product(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("Enter product name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let rendered = {
            let outcome = self.inventory.search_product(&name);
            let found = matches!(outcome, SearchOutcome::Found(_));
            (found, outcome.render(&self.currency))
        };

        match rendered {
            (true, details) => self.say_block(&details)?,
            (false, message) => self.warn(message.trim_end())?,
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        let (empty, rendered) = {
            let listing = self.inventory.display_all();
            (matches!(listing, Listing::Empty), listing.render(&self.currency))
        };

        if empty {
            self.info(rendered.trim_end())?;
        } else {
            self.say_block(&rendered)?;
        }
        Ok(Flow::Continue)
    }

    /// Ask until the answer parses. `None` means input ran out.
    fn ask_number<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> StockroomResult<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(token) = self.console.ask(prompt)? else {
                return Ok(None);
            };

            match parse(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(StockroomError::InvalidNumber { input, expected }) => {
                    self.warn(&format!("Invalid number '{}': expected {}.", input, expected))?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    fn say_block(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        let line = ColoredText::success(message).render(self.color);
        self.console.say(&line)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        let line = ColoredText::warning(message).render(self.color);
        self.console.say(&line)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        let line = ColoredText::info(message).render(self.color);
        self.console.say(&line)
    }
}
