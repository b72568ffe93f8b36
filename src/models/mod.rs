pub mod dataset;
pub mod movie;

pub use dataset::{normalize_title, Dataset};
pub use movie::Movie;

/// A single ranked recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Title of the recommended movie
    pub title: String,
    /// Cosine similarity to the queried movie, in [0, 1]
    pub score: f64,
    /// Release year of the recommended movie, when known
    pub release_year: Option<i32>,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.release_year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_display() {
        let with_year = Recommendation {
            title: "The Matrix".to_string(),
            score: 0.42,
            release_year: Some(1999),
        };
        assert_eq!(with_year.to_string(), "The Matrix (1999)");

        let without_year = Recommendation {
            title: "Primer".to_string(),
            score: 0.1,
            release_year: None,
        };
        assert_eq!(without_year.to_string(), "Primer");
    }
}
