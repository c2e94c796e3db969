//! Prompt and report text
//!
//! Prompts are written without a newline and padded so every colon lines
//! up in the same column; retry prompts reuse that column.

pub const WELCOME: &str = "Welcome to the Floridian Tooth Records";
pub const WELCOME_RULE: &str = "--------------------------------------";
pub const FAREWELL: &str = "Exiting the Floridian Tooth Records :-)";

pub const PEOPLE_COUNT: &str = "Please enter number of people in the family : ";
pub const INVALID_PEOPLE_COUNT: &str = "Invalid number of people, try again         : ";
pub const INVALID_TEETH_TYPES: &str = "Invalid teeth types, try again              : ";
pub const TOO_MANY_TEETH: &str = "Too many teeth, try again                   : ";

pub const MENU: &str = "\n(P)rint, (E)xtract, (R)oot, e(X)it          : ";
pub const INVALID_MENU_OPTION: &str = "Invalid menu option, try again              : ";

pub const WHICH_MEMBER: &str = "Which family member                         : ";
pub const INVALID_MEMBER: &str = "Invalid family member, try again            : ";
pub const WHICH_LAYER: &str = "Which tooth layer (U)pper or (L)ower        : ";
pub const INVALID_LAYER: &str = "Invalid layer, try again                    : ";
pub const WHICH_TOOTH: &str = "Which tooth number                          : ";
pub const INVALID_TOOTH: &str = "Invalid tooth number, try again             : ";
pub const MISSING_TOOTH: &str = "Missing tooth, try again                    : ";

/// Name prompt for the 1-based member `number`
pub fn member_name(number: usize) -> String {
    format!("Please enter the name for family member {}   : ", number)
}

/// Code string prompt for one layer of `name`
pub fn layer_codes(layer: &str, name: &str) -> String {
    format!("Please enter the {} for {}       : ", layer, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_prompts_align() {
        let column = PEOPLE_COUNT.len();
        for prompt in [
            INVALID_PEOPLE_COUNT,
            INVALID_TEETH_TYPES,
            TOO_MANY_TEETH,
            INVALID_MENU_OPTION,
            WHICH_MEMBER,
            INVALID_MEMBER,
            WHICH_LAYER,
            INVALID_LAYER,
            WHICH_TOOTH,
            INVALID_TOOTH,
            MISSING_TOOTH,
        ] {
            assert_eq!(prompt.len(), column, "{prompt:?}");
        }
        assert_eq!(MENU.len(), column + 1);
    }

    #[test]
    fn test_dynamic_prompts() {
        assert_eq!(
            member_name(2),
            "Please enter the name for family member 2   : "
        );
        assert_eq!(
            layer_codes("uppers", "Al"),
            "Please enter the uppers for Al       : "
        );
    }
}
