//! Core module - record store, root canal math and the console boundary

pub mod config;
pub mod console;
pub mod family;
pub mod roots;
pub mod tooth;

pub use config::{Config, ConfigError};
pub use console::{Console, ConsoleError, IoConsole, ScriptedConsole};
pub use family::{Family, FamilyError, JawRecord, Layer, Person, MAX_PEOPLE};
pub use roots::{RootCanalIndices, TagTotals};
pub use tooth::{is_valid_code_string, parse_code_string, ToothCodeError, ToothTag, MAX_TEETH};
