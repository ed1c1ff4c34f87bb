use seebeben_core::extract::extract_first_event;
use seebeben_core::format::{format_event_date, tsunami_alert_label};
use std::error::Error;
use std::fs;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn Error>> {
    let body = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match extract_first_event(&body)? {
        Some(event) => {
            println!("{}", event.title);
            println!("{}", format_event_date(event.occurred_at));
            println!("{}", tsunami_alert_label(event.tsunami_alert));
        }
        None => println!("<no events>"),
    }

    Ok(())
}
