// Copyright (c) 2022  Mubelotix <Mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

use super::*;
use crate::{constants::MAX_DESTINATOR_RANGE, errors::CommandParsingError};

impl Command {
    /// Parses a line such as `0-2,5 inc` into its destinators and the command.
    pub fn parse(input: &str) -> Result<(Vec<usize>, Command), CommandParsingError> {
        let (input, destinators) = read_destinators(input)?;
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandParsingError::Prefix("No command found"));
        }

        let mut args = vec![env!("CARGO_PKG_NAME")];
        args.extend(input.split_whitespace());
        let command = Command::from_iter_safe(args)?;

        Ok((destinators, command))
    }
}

enum DestinatorItem {
    Single(usize),
    Range(usize, usize),
}

fn read_number(input: &str) -> Result<(&str, usize), &'static str> {
    let i = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    if i == 0 {
        return Err("No number found");
    }

    let number = input[..i].parse().map_err(|_| "Destinator too large")?;
    Ok((&input[i..], number))
}

fn read_destinator_item(input: &str) -> Result<(&str, DestinatorItem), &'static str> {
    let (input, first) = read_number(input).map_err(|e| if e == "No number found" { "No first number found" } else { e })?;

    if input.starts_with(' ') || input.starts_with(',') {
        Ok((input, DestinatorItem::Single(first)))
    } else if let Some(input) = input.strip_prefix('-') {
        let (input, second) = read_number(input).map_err(|e| if e == "No number found" { "No second number found" } else { e })?;
        if second < first {
            return Err("Reversed destinator range");
        }
        if second - first >= MAX_DESTINATOR_RANGE {
            return Err("Destinator range too large");
        }
        Ok((input, DestinatorItem::Range(first, second)))
    } else if input.is_empty() {
        Err("No command found")
    } else {
        Err("Strange character in destinator sequence")
    }
}

fn read_destinators(mut input: &str) -> Result<(&str, Vec<usize>), &'static str> {
    let mut destinator_items = Vec::new();

    loop {
        let (new_input, destinator) = read_destinator_item(input)?;
        input = new_input;
        destinator_items.push(destinator);

        if let Some(rest) = input.strip_prefix(',') {
            input = rest;
            continue;
        } else if let Some(rest) = input.strip_prefix(' ') {
            input = rest;
            break;
        } else if input.is_empty() {
            return Err("No command found");
        } else {
            return Err("Strange character in destinator sequence");
        }
    }

    let mut destinators = Vec::new();
    for destinator_item in destinator_items {
        match destinator_item {
            DestinatorItem::Single(destinator) => destinators.push(destinator),
            DestinatorItem::Range(first, second) => destinators.extend(first..=second),
        }
    }

    Ok((input, destinators))
}
