use std::io::{self, Write};

use crate::{error::AppError, models::Recommendation};

pub const CHOICE_PROMPT: &str = "\nPlease enter your choice (1 or 2): ";
pub const TITLE_PROMPT: &str = "\nEnter the title of the movie: ";

/// Main menu
pub fn front<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nWelcome to the Movie Recommendation System!")?;
    writeln!(out, "1. Get Movie Recommendations")?;
    writeln!(out, "2. Exit")
}

pub fn invalid_choice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid input. Please enter 1 or 2.")
}

pub fn empty_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please enter a movie title.")
}

/// Numbered list of recommendations
pub fn recommendations<W: Write>(out: &mut W, recommendations: &[Recommendation]) -> io::Result<()> {
    if recommendations.is_empty() {
        return writeln!(out, "\nNo similar movies found.");
    }

    writeln!(out, "\nWe recommend the following movies:")?;
    for (i, recommendation) in recommendations.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, recommendation)?;
    }
    Ok(())
}

/// Renders a query failure as a single line
pub fn error<W: Write>(out: &mut W, err: &AppError) -> io::Result<()> {
    match err {
        AppError::TitleNotFound(title) => writeln!(out, "No match found for '{}'.", title),
        other => writeln!(out, "Error: {}", other),
    }
}

pub fn exit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nThank you for using the Movie Recommendation System. Goodbye!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_recommendations_are_numbered() {
        let recs = vec![
            Recommendation {
                title: "The Matrix".to_string(),
                score: 0.5,
                release_year: Some(1999),
            },
            Recommendation {
                title: "Primer".to_string(),
                score: 0.2,
                release_year: None,
            },
        ];
        let text = render(|out| recommendations(out, &recs));
        assert_eq!(
            text,
            "\nWe recommend the following movies:\n1. The Matrix (1999)\n2. Primer\n"
        );
    }

    #[test]
    fn test_empty_recommendations_message() {
        let text = render(|out| recommendations(out, &[]));
        assert_eq!(text, "\nNo similar movies found.\n");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::TitleNotFound("Nope".to_string());
        let text = render(|out| error(out, &err));
        assert_eq!(text, "No match found for 'Nope'.\n");
    }

    #[test]
    fn test_other_errors_prefixed() {
        let err = AppError::InvalidInput("bad".to_string());
        let text = render(|out| error(out, &err));
        assert_eq!(text, "Error: Invalid input: bad\n");
    }

    #[test]
    fn test_front_lists_both_choices() {
        let text = render(|out| front(out));
        assert!(text.contains("1. Get Movie Recommendations"));
        assert!(text.contains("2. Exit"));
    }
}
