/// Represents one movie loaded from the data source
///
/// Only `genres`, `cast`, `director` and `keywords` feed the similarity
/// engine. The release year is shown next to the title in results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Movie {
    /// Display title, also the lookup key
    pub title: String,
    pub genres: Vec<String>,
    /// Main cast members, in billing order
    pub cast: Vec<String>,
    pub director: String,
    pub keywords: Vec<String>,
    pub release_year: Option<i32>,
}

impl Movie {
    /// Creates a movie with a title and no other attributes
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    /// True when none of the similarity features carry any value
    pub fn has_no_features(&self) -> bool {
        self.genres.is_empty()
            && self.cast.is_empty()
            && self.director.trim().is_empty()
            && self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie::new("Inception")
            .with_genres(["Action", "Adventure"])
            .with_cast(["Leonardo DiCaprio"])
            .with_director("Christopher Nolan")
            .with_keywords(["Dream", "Spy"])
            .with_release_year(2010)
    }

    #[test]
    fn test_movie_creation() {
        let movie = inception();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genres, vec!["Action", "Adventure"]);
        assert_eq!(movie.cast, vec!["Leonardo DiCaprio"]);
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.release_year, Some(2010));
        assert!(!movie.has_no_features());
    }

    #[test]
    fn test_title_only_movie_has_no_features() {
        let movie = Movie::new("Empty").with_director("   ");
        assert!(movie.has_no_features());
        assert_eq!(movie.release_year, None);
    }
}
