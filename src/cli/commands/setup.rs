//! Family setup - people count, names and tooth code strings

use crate::cli::prompts;
use crate::cli::session::SessionError;
use crate::core::tooth::{is_valid_code_string, MAX_TEETH};
use crate::core::{Console, ConsoleError, Family, JawRecord, Layer, Person, MAX_PEOPLE};

/// Ask for the family size until a number in 1..=6 is entered
pub fn get_people_count<C: Console>(console: &mut C) -> Result<usize, ConsoleError> {
    let mut input = console.prompt(prompts::PEOPLE_COUNT)?;
    loop {
        match input.parse::<usize>() {
            Ok(count) if (1..=MAX_PEOPLE).contains(&count) => return Ok(count),
            _ => {
                log::debug!("rejected people count {input:?}");
                input = console.prompt(prompts::INVALID_PEOPLE_COUNT)?;
            }
        }
    }
}

/// Read name, uppers and lowers for `count` people, in order
pub fn build_family<C: Console>(console: &mut C, count: usize) -> Result<Family, SessionError> {
    let mut people = Vec::with_capacity(count);

    for number in 1..=count {
        let name = read_name(console, number)?;
        let upper = read_layer(console, &prompts::layer_codes("uppers", &name))?;
        let lower = read_layer(console, &prompts::layer_codes("lowers", &name))?;

        let person = Person::new(&name, upper, lower)?;
        log::debug!(
            "added {} with {} upper and {} lower teeth",
            person.name(),
            person.layer(Layer::Upper).len(),
            person.layer(Layer::Lower).len()
        );
        people.push(person);
    }

    Ok(Family::new(people)?)
}

/// Read a member name; blank names are asked for again
fn read_name<C: Console>(console: &mut C, number: usize) -> Result<String, ConsoleError> {
    let prompt = prompts::member_name(number);
    loop {
        let name = console.prompt(&prompt)?;
        if !name.is_empty() {
            return Ok(name);
        }
    }
}

/// Read one layer's code string, re-prompting until it is valid
fn read_layer<C: Console>(console: &mut C, prompt: &str) -> Result<JawRecord, SessionError> {
    let mut codes = console.prompt(prompt)?;
    loop {
        if !is_valid_code_string(&codes) {
            codes = console.prompt(prompts::INVALID_TEETH_TYPES)?;
        } else if codes.chars().count() > MAX_TEETH {
            codes = console.prompt(prompts::TOO_MANY_TEETH)?;
        } else {
            return Ok(JawRecord::from_codes(&codes)?);
        }
    }
}
