//! (R)oot - report the family's root canal indices

use crate::core::{Console, ConsoleError, Family, RootCanalIndices};

/// Solve the root canal equation for the current records and print it
pub fn run<C: Console>(family: &Family, console: &mut C) -> Result<RootCanalIndices, ConsoleError> {
    let indices = family.tag_totals().root_canal_indices();

    console.println("")?;
    console.println(&indices.to_string())?;

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JawRecord, Layer, Person, ScriptedConsole};

    fn al() -> Family {
        let person = Person::new(
            "Al",
            JawRecord::from_codes("IIBM").unwrap(),
            JawRecord::default(),
        )
        .unwrap();
        Family::new(vec![person]).unwrap()
    }

    #[test]
    fn test_root_report() {
        let mut console = ScriptedConsole::default();
        let indices = run(&al(), &mut console).unwrap();

        assert_eq!(indices, RootCanalIndices::Two(0.5, -1.0));
        assert_eq!(
            console.output(),
            "\nOne root canal at     0.50\nAnother root canal at -1.00\n"
        );
    }

    #[test]
    fn test_root_is_stable_across_print() {
        let family = al();
        let mut console = ScriptedConsole::default();

        let first = run(&family, &mut console).unwrap();
        crate::cli::commands::print::run(&family, &mut console).unwrap();
        let second = run(&family, &mut console).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_root_follows_extraction() {
        let mut family = al();
        family.extract(0, Layer::Upper, 1).unwrap();
        family.extract(0, Layer::Upper, 2).unwrap();
        family.extract(0, Layer::Upper, 3).unwrap();

        // I=0 B=0 M=4
        let mut console = ScriptedConsole::default();
        let indices = run(&family, &mut console).unwrap();
        assert_eq!(indices, RootCanalIndices::NoRoots { missing: 4 });
        assert_eq!(console.output(), "\nNo root canals (equation is -4 = 0).\n");
    }
}
