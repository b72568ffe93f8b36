use std::collections::HashMap;

use super::Movie;

/// Normalizes a title for case-insensitive lookup
///
/// Trims, collapses internal whitespace and lowercases.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Ordered collection of movies with a title index
///
/// Row positions are stable for the lifetime of the dataset and line up with
/// the rows of the similarity matrix built from it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: Vec<Movie>,
    title_index: HashMap<String, usize>,
}

impl Dataset {
    /// Builds a dataset, keeping the first movie for each normalized title
    ///
    /// Movies with a blank title and later duplicates are dropped with a
    /// warning.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut kept = Vec::with_capacity(movies.len());
        let mut title_index = HashMap::with_capacity(movies.len());

        for movie in movies {
            let key = normalize_title(&movie.title);
            if key.is_empty() {
                tracing::warn!("Dropping movie with empty title");
                continue;
            }
            if let Some(&existing) = title_index.get(&key) {
                tracing::warn!(
                    title = %movie.title,
                    kept_row = existing,
                    "Duplicate title, keeping first occurrence"
                );
                continue;
            }
            title_index.insert(key, kept.len());
            kept.push(movie);
        }

        Self {
            movies: kept,
            title_index,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, row: usize) -> Option<&Movie> {
        self.movies.get(row)
    }

    /// Resolves a user-supplied title to its row
    pub fn position(&self, title: &str) -> Option<usize> {
        self.title_index.get(&normalize_title(title)).copied()
    }
}
