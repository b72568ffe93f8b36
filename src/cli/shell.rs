use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    services::Recommend,
};

use super::screens;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GetRecommendations,
    Exit,
}

/// Parses a menu selection, accepting only `1` or `2`
pub fn parse_menu_choice(input: &str) -> AppResult<MenuChoice> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(1) => Ok(MenuChoice::GetRecommendations),
        Ok(2) => Ok(MenuChoice::Exit),
        _ => Err(AppError::InvalidMenuChoice(trimmed.to_string())),
    }
}

/// Interactive menu loop over a line-based console
///
/// Query failures are printed and the menu is shown again. The loop ends on
/// the exit choice or when input runs out; only console I/O errors escape.
pub struct Shell<R, I, O> {
    recommender: R,
    input: I,
    output: O,
    top_n: usize,
}

impl<R, I, O> Shell<R, I, O>
where
    R: Recommend,
    I: BufRead,
    O: Write,
{
    pub fn new(recommender: R, input: I, output: O, top_n: usize) -> Self {
        Self {
            recommender,
            input,
            output,
            top_n,
        }
    }

    /// Runs until the user exits or input ends
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            screens::front(&mut self.output)?;

            let Some(line) = self.prompt(screens::CHOICE_PROMPT)? else {
                break;
            };

            match parse_menu_choice(&line) {
                Ok(MenuChoice::GetRecommendations) => {}
                Ok(MenuChoice::Exit) => break,
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected menu input");
                    screens::invalid_choice(&mut self.output)?;
                    continue;
                }
            }

            let Some(title) = self.prompt(screens::TITLE_PROMPT)? else {
                break;
            };

            if title.trim().is_empty() {
                screens::empty_title(&mut self.output)?;
                continue;
            }

            self.show_recommendations(&title)?;
        }

        screens::exit(&mut self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn show_recommendations(&mut self, title: &str) -> AppResult<()> {
        match self.recommender.recommend(title, self.top_n) {
            Ok(recommendations) => screens::recommendations(&mut self.output, &recommendations)?,
            Err(e) => {
                if e.is_recoverable() {
                    tracing::warn!(error = %e, "Query failed");
                } else {
                    tracing::error!(error = %e, "Query failed");
                }
                screens::error(&mut self.output, &e)?;
            }
        }
        Ok(())
    }

    /// Writes a prompt and reads one line, `None` at end of input
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Consumes the shell, returning the output sink
    pub fn into_output(self) -> O {
        self.output
    }
}
