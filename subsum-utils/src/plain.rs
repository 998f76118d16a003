//! Whitespace separated text format used on stdin/stdout:
//!
//! ```text
//! <capacity> <num_items>
//! <weight_0> <weight_1> ... <weight_{num_items-1}>
//! ```
//!
//! The answer is written back as the number of selected items followed by
//! their ascending indices on a second line.
use anyhow::{anyhow, Result};
use std::str::SplitWhitespace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainInput {
    pub capacity: u32,
    pub weights: Vec<u32>,
}

fn next_number<T: std::str::FromStr>(tokens: &mut SplitWhitespace, what: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let token = tokens
        .next()
        .ok_or_else(|| anyhow!("Unexpected end of input while reading {}", what))?;
    token
        .parse::<T>()
        .map_err(|e| anyhow!("Invalid {} '{}': {}", what, token, e))
}

pub fn parse_plain_input(input: &str) -> Result<PlainInput> {
    let mut tokens = input.split_whitespace();
    let capacity = next_number::<u32>(&mut tokens, "capacity")?;
    let num_items = next_number::<usize>(&mut tokens, "item count")?;
    let weights = (0..num_items)
        .map(|i| next_number::<u32>(&mut tokens, &format!("weight {}", i)))
        .collect::<Result<Vec<_>>>()?;
    if let Some(extra) = tokens.next() {
        return Err(anyhow!(
            "Unexpected trailing token '{}' after {} weights",
            extra,
            num_items
        ));
    }
    Ok(PlainInput { capacity, weights })
}

pub fn format_plain_output(items: &[usize]) -> String {
    let indices: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("{}\n{}\n", items.len(), indices.join(" "))
}
