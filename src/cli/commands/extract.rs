//! (E)xtract - mark one present tooth as missing
//!
//! Member, layer and tooth number are asked for in turn. Each step repeats
//! until it is valid and never sends the user back to an earlier step.

use crate::cli::prompts;
use crate::core::{Console, ConsoleError, Family, FamilyError, Layer};

/// The tooth that was extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    pub person: usize,
    pub layer: Layer,
    pub number: usize,
}

pub fn run<C: Console>(family: &mut Family, console: &mut C) -> Result<Extraction, ConsoleError> {
    let person = read_member(family, console)?;
    let layer = read_layer(console)?;

    let mut input = console.prompt(prompts::WHICH_TOOTH)?;
    loop {
        let retry = match input.parse::<i64>() {
            Err(_) => prompts::INVALID_TOOTH,
            Ok(number) => match family.extract(person, layer, number) {
                Ok(()) => {
                    return Ok(Extraction {
                        person,
                        layer,
                        number: number as usize,
                    })
                }
                Err(FamilyError::AlreadyMissing { .. }) => prompts::MISSING_TOOTH,
                Err(e) => {
                    log::debug!("rejected tooth {number}: {e}");
                    prompts::INVALID_TOOTH
                }
            },
        };
        input = console.prompt(retry)?;
    }
}

fn read_member<C: Console>(family: &Family, console: &mut C) -> Result<usize, ConsoleError> {
    let mut name = console.prompt(prompts::WHICH_MEMBER)?;
    loop {
        if let Some(person) = family.find_index(&name) {
            return Ok(person);
        }
        name = console.prompt(prompts::INVALID_MEMBER)?;
    }
}

fn read_layer<C: Console>(console: &mut C) -> Result<Layer, ConsoleError> {
    let mut selector = console.prompt(prompts::WHICH_LAYER)?;
    loop {
        if let Some(layer) = Layer::from_selector(&selector) {
            return Ok(layer);
        }
        selector = console.prompt(prompts::INVALID_LAYER)?;
    }
}
