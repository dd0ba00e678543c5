// ABOUTME: Appliance selection menus rendered to stdout.
// ABOUTME: Non-numeric or out-of-range input means quit.

use crate::inventory::Appliance;
use std::io::{self, Write};

/// How to reach the selected appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectChoice {
    /// Through the SCM cloud relay.
    Tunnel,
    /// Straight to one of the appliance's uplink addresses.
    Direct(String),
}

pub fn print_appliances(appliances: &[Appliance]) {
    println!("{}", "-".repeat(104));
    println!(
        "{:<5} {:<35} {:<35} {:<9} {:<17}",
        "Id", "Organisation", "Site", "Model", "Serial"
    );
    println!("{}", "-".repeat(104));

    for (index, appliance) in appliances.iter().enumerate() {
        let marker = if appliance.tunnel_active { '*' } else { ' ' };
        println!(
            "{:<4}{} {:<35} {:<35} {:<9} {:<17}",
            index + 1,
            marker,
            appliance.org,
            appliance.site_name,
            appliance.model,
            appliance.serial
        );
    }
}

/// Prompt for an appliance. `None` means the user chose to quit.
pub fn select_appliance<'a>(appliances: &'a [Appliance]) -> io::Result<Option<&'a Appliance>> {
    let input = read_line("Type number to select a site, or anything else to quit: ")?;
    Ok(parse_selection(&input, appliances.len()).map(|i| &appliances[i]))
}

/// Prompt for tunnel vs direct. `None` means quit.
pub fn select_connection(appliance: &Appliance) -> io::Result<Option<ConnectChoice>> {
    println!("Select how to connect to {}", appliance.site_name);
    println!("1 Build SSH tunnel via SteelConnect Manager");
    for (index, uplink) in appliance.uplinks.iter().enumerate() {
        println!("{} SSH to {}", index + 2, uplink);
    }

    let input = read_line("Selection: ")?;
    Ok(connection_choice(&input, &appliance.uplinks))
}

/// Parse a 1-based selection against a list of `len` entries, returning
/// the 0-based index.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=len).contains(&n) { Some(n - 1) } else { None }
}

/// Map submenu input to a choice: 1 is the SCM tunnel, 2.. are uplinks.
pub fn connection_choice(input: &str, uplinks: &[String]) -> Option<ConnectChoice> {
    match input.trim().parse::<usize>().ok()? {
        1 => Some(ConnectChoice::Tunnel),
        n if n >= 2 && n - 2 < uplinks.len() => Some(ConnectChoice::Direct(uplinks[n - 2].clone())),
        _ => None,
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
