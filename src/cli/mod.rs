pub mod screens;
pub mod shell;

pub use shell::{parse_menu_choice, MenuChoice, Shell};
