//! (P)rint - show every family member's teeth

use crate::core::{Console, ConsoleError, Family, Layer};

/// Print each member's name followed by an upper and a lower line
pub fn run<C: Console>(family: &Family, console: &mut C) -> Result<(), ConsoleError> {
    console.println("")?;

    for person in family.people() {
        console.println(person.name())?;
        for &layer in Layer::all() {
            console.println(&format!(
                "  {}:  {}",
                layer.label(),
                person.layer(layer).render()
            ))?;
        }
    }

    Ok(())
}
