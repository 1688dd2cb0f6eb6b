//! Interactive single-player blackjack table.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use ventuno::{CardView, RoundPhase, Table, TableRules, TableView};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack (h: hit, s: stand, q: quit)");

    let table = Table::new(TableRules::default());

    loop {
        let view = table.start();
        print_table(&view);

        while table.phase() == RoundPhase::PlayerTurn {
            let Some(action) = prompt_line("Action [h/s/q]: ") else {
                return;
            };

            let result = match action.as_str() {
                "h" | "hit" => table.hit(),
                "s" | "stand" => table.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(view) => print_table(&view),
                Err(err) => println!("Action error: {err:?}"),
            }
        }

        match prompt_line("[d]eal again or [q]uit: ").as_deref() {
            Some("d" | "deal" | "") => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

/// Reads one lowercased input line; `None` once stdin closes.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(view: &TableView) {
    println!("\nDealer: {}", format_hand(&view.dealer_hand));
    println!("You:    {}", format_hand(&view.player_hand));

    if let Some(message) = &view.message {
        println!("{message}");
    }
}

fn format_hand(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &CardView) -> String {
    if card.hidden {
        return colorize("??", "90");
    }

    let (suit, color_code) = match card.suit.as_str() {
        "Hearts" => ("H", "31"),
        "Diamonds" => ("D", "31"),
        "Clubs" => ("C", "32"),
        "Spades" => ("S", "34"),
        _ => ("?", "90"),
    };

    format!("{}{}", card.rank, colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
