//! # Terminal Loop
//!
//! A line-oriented surface over the command layer: one command per line,
//! errors printed as notices, state carried in the shared state types.
//!
//! All parsing of cashier input happens here; by the time a command
//! function runs, it has typed arguments.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::commands::{auth, backup, cart, product, report, sale, staff};
use crate::error::ApiError;
use crate::insight::StaticInsight;
use crate::state::{CartState, ConfigState, SessionState, StoreState};
use keymaster_core::Category;

/// Everything the loop dispatches against.
pub struct ReplContext {
    pub store: StoreState,
    pub cart: CartState,
    pub session: SessionState,
    pub config: ConfigState,
}

/// Runs the loop until `quit` or end of input.
pub fn run(ctx: &ReplContext) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{} - type 'help' for commands", ctx.config.shop_name);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // end of input
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            _ => {
                if let Err(err) = dispatch(ctx, command, args) {
                    println!("! {}", err.message);
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Session:    login <email> <password> | logout | whoami");
    println!("Catalog:    products | product add <code> <category> <price> <cost> <stock> <name...> | product rm <id>");
    println!("Staff:      staff");
    println!("Cashier:    add <product-id-or-code> | rm <product-id> | cart | clear | checkout");
    println!("Ledger:     sales | receipt <sale-id> | report");
    println!("Backup:     export <path> | import <path>");
    println!("            quit");
}

fn dispatch(ctx: &ReplContext, command: &str, args: &[&str]) -> Result<(), ApiError> {
    match command {
        "login" => {
            let [email, password] = args else {
                return Err(ApiError::validation("usage: login <email> <password>"));
            };
            let cashier = auth::login(&ctx.store, &ctx.session, email, password)?;
            println!("Welcome, {}", cashier.name);
        }
        "logout" => {
            auth::logout(&ctx.session);
            println!("Signed out");
        }
        "whoami" => match ctx.session.current() {
            Some(cashier) => println!("{} ({})", cashier.name, cashier.id),
            None => println!("Not signed in"),
        },

        "products" => {
            for p in product::list_products(&ctx.store) {
                println!(
                    "{:<10} {:<12} {:>10}  stock {:>4}  {}",
                    p.code,
                    p.category.as_str(),
                    ctx.config.format_currency(p.price_cents),
                    p.stock,
                    p.name
                );
            }
        }
        "product" => handle_product(ctx, args)?,
        "staff" => {
            for e in staff::list_employees(&ctx.store) {
                println!("{:<30} {:<12} {}", e.email, format!("{:?}", e.role), e.name);
            }
        }

        "add" => {
            let [product_ref] = args else {
                return Err(ApiError::validation("usage: add <product-id-or-code>"));
            };
            let response = cart::add_to_cart(&ctx.store, &ctx.cart, &ctx.config, product_ref)?;
            print_cart(ctx, &response);
        }
        "rm" => {
            let [product_id] = args else {
                return Err(ApiError::validation("usage: rm <product-id>"));
            };
            let response = cart::remove_from_cart(&ctx.cart, &ctx.config, product_id);
            print_cart(ctx, &response);
        }
        "cart" => {
            let response = cart::get_cart(&ctx.cart, &ctx.config);
            print_cart(ctx, &response);
        }
        "clear" => {
            cart::clear_cart(&ctx.cart, &ctx.config);
            println!("Cart emptied");
        }
        "checkout" => {
            match sale::checkout(&ctx.store, &ctx.cart, &ctx.session, &ctx.config)? {
                Some(receipt) => print!("{}", receipt.render()),
                None => println!("Cart is empty, nothing to do"),
            }
        }

        "sales" => {
            for s in sale::list_sales(&ctx.store) {
                println!(
                    "{:<42} {:<26} {:>12}  {}",
                    s.id,
                    s.date,
                    ctx.config.format_currency(s.grand_total_cents),
                    s.employee_name
                );
            }
        }
        "receipt" => {
            let [sale_id] = args else {
                return Err(ApiError::validation("usage: receipt <sale-id>"));
            };
            let receipt = sale::receipt_for(&ctx.store, &ctx.config, sale_id)?;
            print!("{}", receipt.render());
        }
        "report" => {
            let summary = report::dashboard(&ctx.store, &ctx.config, &StaticInsight);
            println!(
                "Revenue {}   Sales {}   Products {}   Staff {}",
                ctx.config.format_currency(summary.total_revenue_cents),
                summary.sale_count,
                summary.product_count,
                summary.employee_count
            );
            for item in &summary.low_stock {
                println!("  LOW STOCK: {} ({} left)", item.name, item.stock);
            }
            println!("  {}", summary.insight);
        }

        "export" => {
            let [path] = args else {
                return Err(ApiError::validation("usage: export <path>"));
            };
            backup::export_backup(&ctx.store, Path::new(path))?;
            println!("Backup written to {}", path);
        }
        "import" => {
            let [path] = args else {
                return Err(ApiError::validation("usage: import <path>"));
            };
            backup::import_backup(&ctx.store, Path::new(path))?;
            println!("Backup restored from {}", path);
        }

        other => {
            return Err(ApiError::validation(format!(
                "Unknown command '{}', try 'help'",
                other
            )));
        }
    }

    Ok(())
}

/// `product add <code> <category> <price> <cost> <stock> <name...>`
/// `product rm <id-or-code>`
fn handle_product(ctx: &ReplContext, args: &[&str]) -> Result<(), ApiError> {
    match args {
        ["add", code, category, price, cost, stock, name @ ..] if !name.is_empty() => {
            let category = Category::parse(category).ok_or_else(|| {
                ApiError::validation("category must be house, car, programming or accessory")
            })?;
            let input = product::ProductInput {
                name: name.join(" "),
                category,
                price_cents: parse_money(price)?,
                cost_cents: parse_money(cost)?,
                stock: stock
                    .parse()
                    .map_err(|_| ApiError::validation("stock must be a whole number"))?,
                code: (*code).to_string(),
            };
            let created = product::add_product(&ctx.store, input)?;
            println!("Added {} ({})", created.name, created.id);
        }
        ["rm", id_or_code] => {
            let id = ctx.store.with_store(|s| {
                s.product(id_or_code)
                    .or_else(|| s.product_by_code(id_or_code))
                    .map(|p| p.id.clone())
            });
            let id = id.ok_or_else(|| ApiError::not_found("Product", id_or_code))?;
            product::delete_product(&ctx.store, &id)?;
            println!("Removed {}", id_or_code);
        }
        _ => {
            return Err(ApiError::validation(
                "usage: product add <code> <category> <price> <cost> <stock> <name...> | product rm <id>",
            ));
        }
    }
    Ok(())
}

fn print_cart(ctx: &ReplContext, response: &cart::CartResponse) {
    if response.lines.is_empty() {
        println!("(cart is empty)");
        return;
    }
    for line in &response.lines {
        println!(
            "  {:<30} x{:<3} {:>12}",
            line.name,
            line.quantity,
            ctx.config.format_currency(line.line_total().cents())
        );
    }
    println!(
        "  Subtotal {}   VAT {}   Total {}",
        ctx.config.format_currency(response.totals.subtotal_cents),
        ctx.config.format_currency(response.totals.tax_cents),
        ctx.config.format_currency(response.totals.grand_total_cents)
    );
}

/// Parses a decimal amount ("25" or "25.50") into cents.
fn parse_money(text: &str) -> Result<i64, ApiError> {
    let invalid = || ApiError::validation(format!("'{}' is not a valid amount", text));

    let (major, minor) = match text.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (text, ""),
    };

    let major: i64 = major.parse().map_err(|_| invalid())?;
    let minor: i64 = match minor.len() {
        0 => 0,
        1 => minor.parse::<i64>().map_err(|_| invalid())? * 10,
        2 => minor.parse().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if major < 0 || minor < 0 {
        return Err(invalid());
    }

    Ok(major * 100 + minor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("25").unwrap(), 2500);
        assert_eq!(parse_money("25.5").unwrap(), 2550);
        assert_eq!(parse_money("25.50").unwrap(), 2550);
        assert_eq!(parse_money("0.05").unwrap(), 5);

        assert!(parse_money("25.505").is_err());
        assert!(parse_money("abc").is_err());
        assert!(parse_money("-3").is_err());
    }
}
